//! Session guard: owns the bearer token lifecycle
//!
//! The guard is the single source of truth for "is the current user allowed
//! past protected routes". It is owned by the application root and handed to
//! collaborators by reference; routing code only ever sees [`SessionView`].
//!
//! Every token change bumps an epoch. A validation call remembers the epoch
//! it started under and its answer is dropped if the epoch moved on while the
//! request was in flight, so an out-of-date response never downgrades the
//! session.

pub mod route;

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::storage::TokenStore;

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "jwtToken";

/// Remote check that a token is still accepted by the API.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn validate_token(&self, token: &str) -> AppResult<bool>;
}

/// Authentication state of the current user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_validating: bool,
}

/// Bearer token captured for one API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub epoch: u64,
}

/// Read-only view handed to route-gating collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    pub is_authenticated: bool,
    pub loading: bool,
}

#[derive(Debug, Default)]
struct SessionState {
    session: Session,
    epoch: u64,
}

impl SessionState {
    fn view(&self) -> SessionView {
        SessionView {
            is_authenticated: self.session.is_authenticated,
            loading: self.session.is_validating,
        }
    }

    fn clear(&mut self) {
        self.session.token = None;
        self.session.is_authenticated = false;
        self.epoch += 1;
    }
}

pub struct SessionGuard {
    state: Mutex<SessionState>,
    store: Arc<dyn TokenStore>,
    validator: Arc<dyn TokenValidator>,
    key: String,
}

impl SessionGuard {
    /// Create an empty session; call [`SessionGuard::initialize`] to load the persisted token.
    pub fn new(store: Arc<dyn TokenStore>, validator: Arc<dyn TokenValidator>) -> Self {
        Self::with_key(store, validator, TOKEN_KEY)
    }

    pub fn with_key(
        store: Arc<dyn TokenStore>,
        validator: Arc<dyn TokenValidator>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
            store,
            validator,
            key: key.into(),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Load the persisted token into the session.
    ///
    /// Without a token the session ends up unauthenticated and not loading.
    /// With one, the session stays in the loading state until [`SessionGuard::validate`] runs.
    pub fn initialize(&self) -> AppResult<SessionView> {
        let mut state = self.state();
        let stored = self.store.get(&self.key)?;
        state.epoch += 1;
        state.session.is_authenticated = false;
        state.session.is_validating = stored.is_some();
        state.session.token = stored;
        debug!(has_token = state.session.token.is_some(), "session initialized");
        Ok(state.view())
    }

    /// Load the persisted token and validate it against the API.
    pub async fn restore(&self) -> AppResult<SessionView> {
        self.initialize()?;
        Ok(self.validate().await)
    }

    /// Confirm the current token with the API.
    ///
    /// Any failure (transport error, rejection, falsy answer) forces a logout.
    /// The loading flag raised by `initialize` is cleared when this call's
    /// answer is applied; a token accepted through `login` stays usable
    /// while it is being checked.
    pub async fn validate(&self) -> SessionView {
        let (token, epoch) = {
            let mut state = self.state();
            match state.session.token.clone() {
                Some(token) => (token, state.epoch),
                None => {
                    state.session.is_authenticated = false;
                    state.session.is_validating = false;
                    return state.view();
                }
            }
        };

        let outcome = self.validator.validate_token(&token).await;

        let mut state = self.state();
        if state.epoch != epoch {
            debug!(
                started = epoch,
                current = state.epoch,
                "discarding stale token validation"
            );
            return state.view();
        }

        match outcome {
            Ok(true) => {
                state.session.is_authenticated = true;
                info!("session token accepted");
            }
            Ok(false) => {
                warn!("session token refused by the API");
                self.expire(&mut state);
            }
            Err(e) => {
                warn!(error = %e, "session token validation failed");
                self.expire(&mut state);
            }
        }
        state.session.is_validating = false;
        state.view()
    }

    /// Clear the session and its stored token. The caller holds the state
    /// lock, so no other token change can interleave with the removal.
    fn expire(&self, state: &mut SessionState) {
        state.clear();
        if let Err(e) = self.store.remove(&self.key) {
            warn!(error = %e, "failed to remove expired token from storage");
        }
    }

    /// Accept a freshly issued token without waiting for the API to confirm it.
    pub fn login(&self, token: impl Into<String>) -> AppResult<()> {
        let token = token.into();

        let mut state = self.state();
        self.store.set(&self.key, &token)?;
        state.epoch += 1;
        state.session.token = Some(token);
        state.session.is_authenticated = true;
        state.session.is_validating = false;
        info!("session opened");
        Ok(())
    }

    /// Drop the token from the session and from storage. Idempotent.
    pub fn logout(&self) -> AppResult<()> {
        let mut state = self.state();
        state.clear();
        state.session.is_validating = false;
        self.store.remove(&self.key)?;
        info!("session closed");
        Ok(())
    }

    /// Token of the current session together with the epoch it belongs to.
    pub fn credentials(&self) -> Option<Credentials> {
        let state = self.state();
        state.session.token.clone().map(|token| Credentials {
            token,
            epoch: state.epoch,
        })
    }

    /// Force a logout when the API refused the token a call was made with.
    ///
    /// Nothing happens when the session moved on to another token (or was
    /// closed) after `credentials` were taken.
    pub fn recover_from(&self, error: &AppError, credentials: &Credentials) {
        if !error.is_auth_rejected() {
            return;
        }

        let mut state = self.state();
        if state.epoch != credentials.epoch {
            debug!(
                started = credentials.epoch,
                current = state.epoch,
                "ignoring rejection of a superseded token"
            );
            return;
        }

        warn!(error = %error, "API rejected the session token, logging out");
        state.session.is_validating = false;
        self.expire(&mut state);
    }

    pub fn view(&self) -> SessionView {
        self.state().view()
    }

    pub fn session(&self) -> Session {
        self.state().session.clone()
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.state().session.token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().session.is_authenticated
    }
}

impl std::fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("SessionGuard")
            .field("key", &self.key)
            .field("has_token", &state.session.token.is_some())
            .field("is_authenticated", &state.session.is_authenticated)
            .field("is_validating", &state.session.is_validating)
            .field("epoch", &state.epoch)
            .finish()
    }
}
