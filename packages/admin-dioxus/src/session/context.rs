//! Session store: the single owner of "who is logged in".
//!
//! Pages never mutate auth state directly; they call the intents here
//! (restore / login / logout / update_profile) and read the signal. State is
//! replaced in one write per transition, so no reader ever observes a token
//! without its user or vice versa.

use std::sync::atomic::{AtomicBool, Ordering};

use dioxus::prelude::*;
use newsroom_api::services::auth::{self, LoginCredentials, ProfileUpdate};
use newsroom_api::types::{Role, User};
use newsroom_api::{ApiClient, ApiError};

use super::storage;

/// Set while a session-expired redirect is in flight, so concurrent 401s
/// produce one notice and one navigation instead of one per failed request.
/// Reset on the next successful login or restore.
static EXPIRY_REDIRECT: AtomicBool = AtomicBool::new(false);

fn claim_expiry_redirect() -> bool {
    !EXPIRY_REDIRECT.swap(true, Ordering::SeqCst)
}

fn reset_expiry_redirect() {
    EXPIRY_REDIRECT.store(false, Ordering::SeqCst);
}

#[derive(Clone, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// Authentication context shared with every component via `use_session`.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: Signal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: Signal::new(SessionState {
                loading: true,
                ..Default::default()
            }),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.read().user.as_ref().and_then(|user| user.role)
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// API client carrying the current bearer token, if any.
    pub fn client(&self) -> ApiClient {
        match self.state.read().token.clone() {
            Some(token) => ApiClient::new().with_token(token),
            None => ApiClient::new(),
        }
    }

    /// Restore a persisted session. No network call is made — the stored
    /// record is trusted until the first request comes back 401.
    pub fn restore(&mut self) {
        let next = match storage::load_session() {
            Some((token, user)) => {
                reset_expiry_redirect();
                SessionState {
                    user: Some(user),
                    token: Some(token),
                    loading: false,
                    error: None,
                }
            }
            None => SessionState::default(),
        };
        self.state.set(next);
    }

    /// Log in against the backend. On success the session is persisted and
    /// the in-memory state replaced atomically; on failure the error message
    /// lands in `error()` and the session stays unauthenticated.
    pub async fn login(&mut self, credentials: LoginCredentials) -> bool {
        self.state.set(SessionState {
            loading: true,
            ..Default::default()
        });

        match auth::login(&ApiClient::new(), &credentials).await {
            Ok(session) => {
                storage::save_session(&session.token, &session.user);
                reset_expiry_redirect();
                self.state.set(SessionState {
                    user: Some(session.user),
                    token: Some(session.token),
                    loading: false,
                    error: None,
                });
                true
            }
            Err(err) => {
                self.state.set(SessionState {
                    error: Some(err.notice()),
                    ..Default::default()
                });
                false
            }
        }
    }

    /// Log out. The remote call is best-effort; storage and memory are
    /// cleared no matter what.
    pub async fn logout(&mut self) {
        let client = self.client();
        auth::logout(&client).await;
        storage::clear_session();
        self.state.set(SessionState::default());
    }

    /// Push profile changes to the backend, then merge them into the current
    /// user in memory and storage. The token is untouched.
    pub async fn update_profile(&mut self, update: ProfileUpdate) -> Result<(), ApiError> {
        let client = self.client();
        let echoed = auth::update_profile(&client, &update).await?;

        let Some(current) = self.user() else {
            return Ok(());
        };
        let merged = echoed.unwrap_or_else(|| merge_update(current, &update));
        storage::save_user(&merged);
        self.state.with_mut(|state| state.user = Some(merged));
        Ok(())
    }

    /// Tear the session down after a 401. Returns true for the one caller
    /// that should show the notice and navigate; concurrent callers get
    /// false.
    pub fn expire(&mut self) -> bool {
        storage::clear_session();
        self.state.set(SessionState::default());
        claim_expiry_redirect()
    }
}

fn merge_update(mut user: User, update: &ProfileUpdate) -> User {
    if let Some(name) = &update.full_name {
        user.full_name = name.clone();
    }
    if let Some(picture) = &update.profile_picture {
        user.profile_picture = Some(picture.clone());
    }
    user
}

/// Session provider component that wraps the app.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_context_provider(SessionContext::new);

    // One restore at startup; the gates hold a loading view until it runs.
    use_effect(move || {
        session.restore();
    });

    children
}

/// Hook to access the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_redirect_fires_once_until_reset() {
        reset_expiry_redirect();
        // Three requests fail with 401 in the same tick: one redirect.
        assert!(claim_expiry_redirect());
        assert!(!claim_expiry_redirect());
        assert!(!claim_expiry_redirect());

        reset_expiry_redirect();
        assert!(claim_expiry_redirect());
    }

    #[test]
    fn profile_merge_keeps_unrelated_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "email": "e@example.com",
            "fullName": "Old Name",
            "role": "ADMIN"
        }))
        .unwrap();

        let merged = merge_update(
            user,
            &ProfileUpdate {
                full_name: Some("New Name".to_string()),
                profile_picture: None,
            },
        );
        assert_eq!(merged.full_name, "New Name");
        assert_eq!(merged.email, "e@example.com");
        assert_eq!(merged.role, Some(Role::Admin));
    }

    #[test]
    fn empty_state_is_unauthenticated() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        // Both halves present is the only authenticated shape.
        let state = SessionState {
            user: None,
            token: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(!state.is_authenticated());
    }
}
