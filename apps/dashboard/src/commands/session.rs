//! # Session Commands
//!
//! Login, logout, and session restore.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐   login(email, pw, role)   ┌──────────┐                  │
//! │  │ Logged   │───────────────────────────►│ Logged   │                  │
//! │  │ Out      │                            │ In       │──┐               │
//! │  └──────────┘◄───────────────────────────└──────────┘  │ login as      │
//! │       ▲              logout()                  ▲       │ other role    │
//! │       │                                        └───────┘ (replaces)    │
//! │  restart: restore() rebuilds Logged In from the                        │
//! │  user + role keys, or stays Logged Out                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use bazaar_core::{validation::validate_email, Role, Session};
use bazaar_store::SessionRepository;

use crate::auth::{session_for, CredentialValidator};
use crate::error::ApiError;
use crate::state::SessionState;

/// Logs in under a role.
///
/// On success the new session replaces any existing one (no stacking) and
/// is persisted before the call returns.
pub fn login(
    validator: &dyn CredentialValidator,
    state: &SessionState,
    repo: &SessionRepository,
    email: &str,
    password: &str,
    role: Role,
) -> Result<Session, ApiError> {
    validate_email(email).map_err(|e| ApiError::validation(e.to_string()))?;

    let user = validator.validate(email, password, role)?;
    let session = session_for(user, role);

    repo.save(&session)?;
    state.set(Some(session.clone()));

    info!(email = %session.user.email, role = ?role, "logged in");
    Ok(session)
}

/// Logs out: destroys the session in memory and on disk.
///
/// Cart, wishlist, and order history deliberately survive logout.
pub fn logout(state: &SessionState, repo: &SessionRepository) -> Result<(), ApiError> {
    repo.clear()?;
    state.set(None);
    info!("logged out");
    Ok(())
}

/// Restores a persisted session at startup, if any.
pub fn restore(repo: &SessionRepository) -> SessionState {
    let session = repo.load();
    if let Some(ref s) = session {
        info!(email = %s.user.email, role = ?s.role, "session restored");
    }
    SessionState::restored(session)
}

/// The current session, if logged in.
pub fn current_session(state: &SessionState) -> Option<Session> {
    state.with_session(|s| s.cloned())
}

// =============================================================================
// Unit Tests
// =============================================================================
