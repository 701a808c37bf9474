//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser, where the session
//! cookie lives.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Non-OK responses keep the
//! status and, when the body carries one, the backend's `message` so the UI
//! can surface it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Profile, SessionUser, SignupPayload};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(feature = "hydrate")]
use super::types::{AuthResponse, LoginRequest, ProfilesResponse};

pub const PROFILES_ENDPOINT: &str = "/api/profiles";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";
pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Fallback text when a failure carries no usable server message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid request: {0}")]
    Encode(String),
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for a user-facing notice.
    ///
    /// Only a backend-provided `message` is shown verbatim; transport and
    /// decoding details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());
    ApiError::Status { status, message }
}

#[cfg(feature = "hydrate")]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the full profile collection from `GET /api/profiles`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body does not decode.
pub async fn fetch_profiles() -> Result<Vec<Profile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PROFILES_ENDPOINT)
            .send()
            .await
            .map_err(network_error)?;
        let body: ProfilesResponse = read_json(resp).await?;
        Ok(body.profiles)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<SessionUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&LoginRequest { email, password })
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        let body: AuthResponse = read_json(resp).await?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the payload.
pub async fn signup(payload: &SignupPayload) -> Result<SessionUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGNUP_ENDPOINT)
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        let body: AuthResponse = read_json(resp).await?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the currently authenticated user from `GET /api/auth/me`.
///
/// # Errors
///
/// Returns an error if not authenticated, the request fails, or on the server.
pub async fn fetch_current_user() -> Result<SessionUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT)
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// End the session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a non-OK status.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
