use std::sync::Arc;

use tracing::debug;

use crate::config::BypassCredentials;
use crate::error::{Error, Result};
use crate::remote::RemoteStore;
use crate::types::Session;

/// Sentinel token marking a locally synthesized bypass session. Session
/// change events are ignored while a session carrying it is active.
pub const BYPASS_TOKEN: &str = "local-bypass-token";

/// Sentinel user id of the bypass principal.
pub const BYPASS_USER_ID: &str = "local-bypass-admin";

/// Every authenticated principal, real or bypass, gets the same elevated
/// role; there is no finer tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
}

/// Coarse login state: a session adopted from the backend, or one
/// synthesized locally by the configured bypass pair.
///
/// The backend is always tried first. The bypass exists so the admin area
/// stays reachable for demos when the backend has no users provisioned; it
/// is inert unless credentials were supplied through configuration.
pub struct AuthSession {
    store: Arc<dyn RemoteStore>,
    bypass: Option<BypassCredentials>,
    session: Option<Session>,
}

impl AuthSession {
    #[must_use]
    pub fn new(store: Arc<dyn RemoteStore>, bypass: Option<BypassCredentials>) -> Self {
        Self {
            store,
            bypass,
            session: None,
        }
    }

    /// Adopts any session the backend still holds. An unreachable backend
    /// means logged out, not an error.
    pub async fn init(&mut self) {
        match self.store.get_session().await {
            Ok(session) => self.session = session,
            Err(e) => {
                debug!("auth initialization skipped (offline): {e}");
                self.session = None;
            }
        }
    }

    /// Entry point for backend session-change events. Events are ignored
    /// while the bypass session is active, so an external sign-out cannot
    /// clobber it.
    pub fn apply_session_change(&mut self, session: Option<Session>) {
        if self.is_bypass() {
            return;
        }
        self.session = session;
    }

    /// Backend password login first; on any backend failure the configured
    /// bypass pair is checked. Empty credentials are rejected outright.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Role> {
        let email = email.trim();
        let password = password.trim();
        if email.is_empty() || password.is_empty() {
            return Err(Error::MissingCredentials);
        }

        match self.store.sign_in_with_password(email, password).await {
            Ok(session) => {
                self.session = Some(session);
                return Ok(Role::Admin);
            }
            Err(e) => debug!("backend login failed, checking bypass: {e}"),
        }

        if let Some(bypass) = &self.bypass {
            if email.eq_ignore_ascii_case(&bypass.email) && password == bypass.password {
                self.session = Some(Session {
                    access_token: BYPASS_TOKEN.into(),
                    user_id: BYPASS_USER_ID.into(),
                    email: email.to_lowercase(),
                });
                return Ok(Role::Admin);
            }
        }

        Err(Error::InvalidCredentials)
    }

    /// The bypass session clears locally with no remote call; a real session
    /// signs out of the backend, suppressing any failure.
    pub async fn logout(&mut self) {
        if self.is_bypass() {
            self.session = None;
            return;
        }
        if let Err(e) = self.store.sign_out().await {
            debug!("sign-out failed (likely offline): {e}");
        }
        self.session = None;
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|_| Role::Admin)
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    fn is_bypass(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.access_token == BYPASS_TOKEN)
    }
}
