use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::error::{CmsError, Result};

pub const SIGNIN_REQUIRED_MESSAGE: &str = "You must be signed in to do that.";

/// Session token carried through request extensions by the session
/// middleware.
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

#[derive(Debug, Clone, Default)]
pub struct SessionData {
    pub user: Option<String>,
    pub message: Option<String>,
}

/// In-memory session state, keyed by the opaque token held in the browser's
/// `session_id` cookie. Each session carries at most one signed-in user and
/// one pending flash message.
#[derive(Clone, Default)]
pub struct SessionManager {
    // token -> SessionData
    sessions: Arc<DashMap<String, SessionData>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh anonymous session and returns its token.
    pub fn open(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), SessionData::default());
        log::debug!("Opened session {}", token);
        token
    }

    pub fn contains(&self, token: &str) -> bool {
        self.sessions.contains_key(token)
    }

    pub fn current_user(&self, token: &str) -> Option<String> {
        self.sessions.get(token).and_then(|session| session.user.clone())
    }

    pub fn sign_in(&self, token: &str, username: &str) {
        if let Some(mut session) = self.sessions.get_mut(token) {
            session.user = Some(username.to_string());
        }
    }

    pub fn sign_out(&self, token: &str) {
        if let Some(mut session) = self.sessions.get_mut(token) {
            session.user = None;
        }
    }

    pub fn set_message(&self, token: &str, message: impl Into<String>) {
        if let Some(mut session) = self.sessions.get_mut(token) {
            session.message = Some(message.into());
        }
    }

    /// Removes and returns the pending flash message. Rendering consumes
    /// the flash, so it shows on exactly one page.
    pub fn take_message(&self, token: &str) -> Option<String> {
        self.sessions
            .get_mut(token)
            .and_then(|mut session| session.message.take())
    }

    /// The single auth gate. On an anonymous session, leaves the sign-in
    /// flash behind and fails with `Unauthenticated`, which renders as a
    /// redirect to `/`.
    pub fn require_signed_in(&self, token: &str) -> Result<String> {
        match self.current_user(token) {
            Some(user) => Ok(user),
            None => {
                self.set_message(token, SIGNIN_REQUIRED_MESSAGE);
                Err(CmsError::Unauthenticated)
            }
        }
    }

    pub fn active_session_count(&self) -> usize {
        self.sessions.len()
    }
}
