use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;
use crate::net::backend::fake::{FakeBackend, user, with_owner};

fn manager(backend: FakeBackend) -> (SessionManager, Arc<FakeBackend>) {
    let backend = Arc::new(backend);
    (SessionManager::new(backend.clone()), backend)
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_default_is_anonymous() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert!(!state.is_premium());
}

#[test]
fn session_state_premium_follows_user_flag() {
    let free = SessionState { user: Some(user("u1", false)), ..SessionState::default() };
    let premium = SessionState { user: Some(user("u2", true)), ..SessionState::default() };
    assert!(free.is_authenticated());
    assert!(!free.is_premium());
    assert!(premium.is_premium());
}

// =============================================================
// SessionManager
// =============================================================

#[test]
fn login_success_stores_user() {
    with_owner(|| {
        let (session, backend) = manager(FakeBackend::default());
        let result = block_on(session.login("a@x.com", "pw"));
        assert_eq!(result.unwrap().email, "a@x.com");
        assert_eq!(session.user().map(|u| u.email), Some("a@x.com".to_owned()));
        assert_eq!(backend.calls(), vec!["login:a@x.com"]);
    });
}

#[test]
fn login_failure_leaves_session_untouched() {
    with_owner(|| {
        let err = ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) };
        let (session, _) = manager(FakeBackend { reject_with: Some(err.clone()), ..FakeBackend::default() });
        let result = block_on(session.login("a@x.com", "bad"));
        assert_eq!(result, Err(err));
        assert!(session.user().is_none());
        assert_eq!(session.state().get_untracked().generation, 0);
    });
}

#[test]
fn restore_with_active_session_sets_user_and_clears_loading() {
    with_owner(|| {
        let (session, _) = manager(FakeBackend { current: Some(user("u9", true)), ..FakeBackend::default() });
        block_on(session.restore());
        let state = session.state().get_untracked();
        assert_eq!(state.user.map(|u| u.id), Some("u9".to_owned()));
        assert!(!state.loading);
    });
}

#[test]
fn restore_without_session_stays_anonymous() {
    with_owner(|| {
        let (session, backend) = manager(FakeBackend::default());
        block_on(session.restore());
        let state = session.state().get_untracked();
        assert!(state.user.is_none());
        assert!(!state.loading);
        assert_eq!(backend.calls(), vec!["me"]);
    });
}

#[test]
fn logout_clears_user() {
    with_owner(|| {
        let (session, backend) = manager(FakeBackend::default());
        block_on(session.login("a@x.com", "pw")).unwrap();
        block_on(session.logout());
        assert!(session.user().is_none());
        assert_eq!(backend.calls(), vec!["login:a@x.com", "logout"]);
    });
}

// =============================================================
// Lookup racing an explicit session change
// =============================================================

/// Backend whose session lookup blocks until the test opens the gate, then
/// answers with `current` (or 401).
struct SlowLookupBackend {
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    current: Option<SessionUser>,
}

#[async_trait(?Send)]
impl SessionBackend for SlowLookupBackend {
    async fn login(&self, email: &str, _password: &str) -> Result<SessionUser, ApiError> {
        Ok(SessionUser { email: email.to_owned(), ..user("u1", true) })
    }

    async fn signup(&self, _payload: &SignupPayload) -> Result<SessionUser, ApiError> {
        Err(ApiError::Unavailable)
    }

    async fn current_user(&self) -> Result<SessionUser, ApiError> {
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.current.clone().ok_or(ApiError::Status { status: 401, message: None })
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

fn slow_lookup(current: Option<SessionUser>) -> (SessionManager, oneshot::Sender<()>) {
    let (open, gate) = oneshot::channel();
    let backend = Arc::new(SlowLookupBackend { gate: Mutex::new(Some(gate)), current });
    (SessionManager::new(backend), open)
}

#[test]
fn failed_lookup_finishing_after_login_keeps_fresh_user() {
    with_owner(|| {
        let (session, open) = slow_lookup(None);
        let session_ref = &session;

        block_on(async {
            let restore = session_ref.restore();
            let login = async move {
                session_ref.login("a@x.com", "pw").await.unwrap();
                let _ = open.send(());
            };
            futures::join!(restore, login);
        });

        let state = session.state().get_untracked();
        assert_eq!(state.user.map(|u| u.id), Some("u1".to_owned()));
        assert!(!state.loading);
    });
}

#[test]
fn lookup_finishing_after_logout_does_not_resurrect_user() {
    with_owner(|| {
        let (session, open) = slow_lookup(Some(user("stale", false)));
        let session_ref = &session;

        block_on(async {
            let restore = session_ref.restore();
            let logout = async move {
                session_ref.logout().await;
                let _ = open.send(());
            };
            futures::join!(restore, logout);
        });

        assert!(session.user().is_none());
        assert!(!session.state().get_untracked().loading);
    });
}
