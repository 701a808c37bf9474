//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and decisions to `state`.

pub mod auth;
pub mod profiles;
