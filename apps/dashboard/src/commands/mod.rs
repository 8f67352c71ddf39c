//! # Commands Module
//!
//! Every action a dashboard can take, as a plain function over injected
//! state. Commands are the only layer allowed to touch both state
//! containers and repositories.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports + role gate)
//! ├── session.rs    ◄─── login / logout / restore
//! ├── catalog.rs    ◄─── browse, filter, categories, product detail
//! ├── cart.rs       ◄─── cart + wishlist manipulation
//! ├── checkout.rs   ◄─── 3-step wizard, order placement, history
//! └── dashboard/    ◄─── one module per back-office role
//!     ├── admin.rs
//!     ├── vendor.rs
//!     ├── moderator.rs
//!     ├── inventory.rs
//!     └── delivery.rs
//! ```
//!
//! ## Role Gating
//! Back-office commands call [`require_role`] first. The gate checks the
//! CURRENT session only - there are no permissions beyond "is logged in
//! under the right role".

use bazaar_core::Role;

use crate::error::ApiError;
use crate::state::SessionState;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod dashboard;
pub mod session;

/// Rejects the command unless the active session holds `role`.
pub fn require_role(session: &SessionState, role: Role) -> Result<(), ApiError> {
    match session.role() {
        Some(current) if current == role => Ok(()),
        Some(current) => Err(ApiError::unauthorized(format!(
            "This action requires the {} role (logged in as {})",
            role.label(),
            current.label()
        ))),
        None => Err(ApiError::unauthorized("Please log in first")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::{Session, User, UserStatus};
    use chrono::Utc;

    fn logged_in(role: Role) -> SessionState {
        SessionState::restored(Some(Session {
            user: User {
                id: "u-1".to_string(),
                name: "Demo".to_string(),
                email: "demo@example.com".to_string(),
                role,
                status: UserStatus::Active,
                joined_at: Utc::now(),
            },
            role,
        }))
    }

    #[test]
    fn test_require_role() {
        assert!(require_role(&logged_in(Role::Admin), Role::Admin).is_ok());
        assert!(require_role(&logged_in(Role::Customer), Role::Admin).is_err());
        assert!(require_role(&SessionState::new(), Role::Admin).is_err());
    }
}
