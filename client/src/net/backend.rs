//! Injectable seams between view state and the network.
//!
//! DESIGN
//! ======
//! Pages never call `api` directly. They receive a `SessionBackend` (through
//! `SessionManager`) or a `ProfileSource`, so the same orchestration code runs
//! against the real HTTP client in the browser and against fakes in tests.
//! Futures are `?Send` because browser HTTP futures are tied to the JS thread.

use async_trait::async_trait;

use super::api::{self, ApiError};
use super::types::{Profile, SessionUser, SignupPayload};

/// Credential submission and session lookup.
#[async_trait(?Send)]
pub trait SessionBackend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<SessionUser, ApiError>;
    async fn signup(&self, payload: &SignupPayload) -> Result<SessionUser, ApiError>;
    async fn current_user(&self) -> Result<SessionUser, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Source of the full profile collection.
#[async_trait(?Send)]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profiles(&self) -> Result<Vec<Profile>, ApiError>;
}

/// Production backend talking to the serving origin over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpBackend;

#[async_trait(?Send)]
impl SessionBackend for HttpBackend {
    async fn login(&self, email: &str, password: &str) -> Result<SessionUser, ApiError> {
        api::login(email, password).await
    }

    async fn signup(&self, payload: &SignupPayload) -> Result<SessionUser, ApiError> {
        api::signup(payload).await
    }

    async fn current_user(&self) -> Result<SessionUser, ApiError> {
        api::fetch_current_user().await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        api::logout().await
    }
}

#[async_trait(?Send)]
impl ProfileSource for HttpBackend {
    async fn fetch_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        api::fetch_profiles().await
    }
}

#[cfg(test)]
#[path = "backend_fake.rs"]
pub(crate) mod fake;
