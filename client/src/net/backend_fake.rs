//! Scriptable in-memory backend for state and page tests.

use std::sync::Mutex;

use async_trait::async_trait;
use leptos::prelude::Owner;

use super::{ProfileSource, SessionBackend};
use crate::net::api::ApiError;
use crate::net::types::{Profile, SessionUser, SignupPayload};

#[derive(Default)]
pub(crate) struct FakeBackend {
    /// When set, login and signup fail with this error.
    pub reject_with: Option<ApiError>,
    /// User returned by the session lookup; `None` answers 401.
    pub current: Option<SessionUser>,
    pub profiles: Vec<Profile>,
    /// When set, the profile fetch fails with this error.
    pub profiles_error: Option<ApiError>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Run `f` under a fresh reactive owner so signals have an arena to live in.
pub(crate) fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    Owner::new().with(f)
}

pub(crate) fn user(id: &str, is_premium: bool) -> SessionUser {
    SessionUser {
        id: id.to_owned(),
        name: format!("User {id}"),
        email: format!("{id}@example.com"),
        is_premium,
    }
}

pub(crate) fn profile(id: &str, community: &str, is_premium: bool) -> Profile {
    Profile {
        id: id.to_owned(),
        name: format!("Creator {id}"),
        bio: "bio".to_owned(),
        community: community.to_owned(),
        profile_picture: None,
        is_premium,
    }
}

#[async_trait(?Send)]
impl SessionBackend for FakeBackend {
    async fn login(&self, email: &str, _password: &str) -> Result<SessionUser, ApiError> {
        self.record(format!("login:{email}"));
        if let Some(err) = &self.reject_with {
            return Err(err.clone());
        }
        Ok(SessionUser { email: email.to_owned(), ..user("u-login", false) })
    }

    async fn signup(&self, payload: &SignupPayload) -> Result<SessionUser, ApiError> {
        self.record(format!("signup:{}", payload.email));
        if let Some(err) = &self.reject_with {
            return Err(err.clone());
        }
        Ok(SessionUser {
            id: "u-new".to_owned(),
            name: payload.name.clone(),
            email: payload.email.clone(),
            is_premium: false,
        })
    }

    async fn current_user(&self) -> Result<SessionUser, ApiError> {
        self.record("me".to_owned());
        self.current.clone().ok_or(ApiError::Status { status: 401, message: None })
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout".to_owned());
        Ok(())
    }
}

#[async_trait(?Send)]
impl ProfileSource for FakeBackend {
    async fn fetch_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        self.record("profiles".to_owned());
        match &self.profiles_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.profiles.clone()),
        }
    }
}
