//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen concern (`session`, `auth_form`, `directory`,
//! `notice`) so pages depend on small focused models that test without a DOM.

pub mod auth_form;
pub mod directory;
pub mod notice;
pub mod session;
