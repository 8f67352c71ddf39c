//! # Session State
//!
//! Holds the single active session (or none).
//!
//! ## Rules
//! - Exactly one session at a time; logging in replaces any previous one
//! - Restored from the `user` + `role` keys at startup
//! - Mutations are persisted by the session commands, not here

use std::sync::{Arc, Mutex};

use bazaar_core::{Role, Session};

/// The current session, shared across commands.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Option<Session>>>,
}

impl SessionState {
    /// Creates an empty (logged-out) session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session state pre-populated from a restored session.
    pub fn restored(session: Option<Session>) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(Option<&Session>) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(session.as_ref())
    }

    /// Replaces the current session.
    pub fn set(&self, session: Option<Session>) {
        let mut current = self.session.lock().expect("Session mutex poisoned");
        *current = session;
    }

    /// The active role, if logged in.
    pub fn role(&self) -> Option<Role> {
        self.with_session(|s| s.map(|s| s.role))
    }

    /// Whether someone is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.with_session(|s| s.is_some())
    }
}
