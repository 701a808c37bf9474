//! Session state and the injectable session manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `SessionManager` at startup and provides it via context.
//! Pages read the current user from it and submit credentials through it; no
//! component reaches for ambient global state.
//!
//! The manager is the single writer of `SessionState`. Concurrent writers
//! (two tabs of the same form, say) resolve last-write-wins, except that a
//! session lookup started before a login or logout never overwrites it: every
//! explicit change bumps `generation`, and `restore` only writes the user when
//! the generation it started with is still current.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::backend::SessionBackend;
use crate::net::types::{SessionUser, SignupPayload};

/// Current user plus whether the initial session lookup is still running.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
    /// Bumped on every login, signup, and logout.
    pub generation: u64,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Premium gates direct messaging; anonymous viewers are never premium.
    pub fn is_premium(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_premium)
    }
}

/// Owns session state and the credential operations that change it.
#[derive(Clone)]
pub struct SessionManager {
    backend: Arc<dyn SessionBackend>,
    state: RwSignal<SessionState>,
}

impl SessionManager {
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend, state: RwSignal::new(SessionState::default()) }
    }

    /// Reactive handle for views that render user-dependent UI.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Snapshot of the current user without subscribing.
    pub fn user(&self) -> Option<SessionUser> {
        self.state.get_untracked().user
    }

    /// Look up an existing session (cookie) with the backend.
    ///
    /// A failed lookup is not an error for the caller: the viewer is simply
    /// anonymous.
    pub async fn restore(&self) {
        let mut started = 0;
        self.state.update(|s| {
            s.loading = true;
            started = s.generation;
        });
        let user = match self.backend.current_user().await {
            Ok(user) => Some(user),
            Err(e) => {
                log::debug!("no active session: {e}");
                None
            }
        };
        self.state.update(|s| {
            if s.generation == started {
                s.user = user;
            } else {
                log::debug!("session changed during lookup; keeping current user");
            }
            s.loading = false;
        });
    }

    /// Sign in. On success the user becomes the session user.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged; session state is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, ApiError> {
        let user = self.backend.login(email, password).await?;
        log::info!("signed in as {}", user.id);
        self.set_user(user.clone());
        Ok(user)
    }

    /// Create an account. On success the new user becomes the session user.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged; session state is left untouched.
    pub async fn signup(&self, payload: &SignupPayload) -> Result<SessionUser, ApiError> {
        let user = self.backend.signup(payload).await?;
        log::info!("created account {}", user.id);
        self.set_user(user.clone());
        Ok(user)
    }

    /// End the session. The local user is cleared even if the backend call fails.
    pub async fn logout(&self) {
        if let Err(e) = self.backend.logout().await {
            log::warn!("logout request failed: {e}");
        }
        self.state.update(|s| {
            s.user = None;
            s.generation += 1;
        });
    }

    fn set_user(&self, user: SessionUser) {
        self.state.update(|s| {
            s.user = Some(user);
            s.loading = false;
            s.generation += 1;
        });
    }
}
