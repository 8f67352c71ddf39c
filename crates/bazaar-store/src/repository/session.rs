//! # Session Repository
//!
//! Persists the authenticated session across restarts using two keys:
//! `user` (the full user record) and `role` (the role tag by itself).
//!
//! ## Why Two Keys
//! The role is stored redundantly so a reader that only cares about
//! routing can check one small value. Both keys are always written and
//! removed together; a session only exists when BOTH decode.

use tracing::debug;

use bazaar_core::{Role, Session, User};

use crate::error::StoreResult;
use crate::local::{keys, LocalStorage};

/// Repository for the `user` + `role` key pair.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    storage: LocalStorage,
}

impl SessionRepository {
    /// Creates a new SessionRepository over a storage directory.
    pub fn new(storage: LocalStorage) -> Self {
        SessionRepository { storage }
    }

    /// Restores the persisted session, if any.
    ///
    /// Returns `None` unless both the `user` and `role` keys decode. A
    /// half-written pair (say, a crash between the two writes) reads as
    /// logged out rather than as a broken session.
    pub fn load(&self) -> Option<Session> {
        let user: Option<User> = self.storage.get(keys::USER);
        let role: Option<Role> = self.storage.get(keys::ROLE);

        match (user, role) {
            (Some(user), Some(role)) => Some(Session { user, role }),
            _ => None,
        }
    }

    /// Persists a session, writing both keys.
    pub fn save(&self, session: &Session) -> StoreResult<()> {
        debug!(user = %session.user.email, role = ?session.role, "persisting session");
        self.storage.set(keys::USER, &Some(&session.user))?;
        self.storage.set(keys::ROLE, &Some(session.role))?;
        Ok(())
    }

    /// Clears the session, removing both keys. Logged-out is idempotent.
    pub fn clear(&self) -> StoreResult<()> {
        self.storage.remove(keys::USER)?;
        self.storage.remove(keys::ROLE)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
