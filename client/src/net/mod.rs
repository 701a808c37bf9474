//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `backend` wraps them behind injectable
//! traits, and `types` defines the shared wire schema.

pub mod api;
pub mod backend;
pub mod types;
