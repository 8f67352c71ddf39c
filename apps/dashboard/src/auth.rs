//! # Demo Authentication
//!
//! Credential checking for the six role logins.
//!
//! ## Security Posture (None, Deliberately)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Demo Authentication                                  │
//! │                                                                         │
//! │  login(email, password, role)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CredentialValidator::validate(email, password, role)                   │
//! │       │                                                                 │
//! │       ├── match ────► Session { user, role } (persisted)               │
//! │       │                                                                 │
//! │       └── mismatch ─► inline error NAMING the demo credentials         │
//! │                       (no hashing, no tokens, no retry limit)           │
//! │                                                                         │
//! │  The validator is a trait so a real backend could slot in later;        │
//! │  the demo ships exactly one implementation.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;

use bazaar_core::{Role, Session, User, UserStatus};

use crate::error::ApiError;

/// Checks a role-login form submission.
///
/// Implementations return the authenticated [`User`] on success, or an
/// [`ApiError`] whose message is shown inline on the form.
pub trait CredentialValidator: Send + Sync {
    fn validate(&self, email: &str, password: &str, role: Role) -> Result<User, ApiError>;
}

/// One hardcoded credential pair per role.
struct DemoPair {
    role: Role,
    email: &'static str,
    password: &'static str,
    name: &'static str,
}

const DEMO_PAIRS: &[DemoPair] = &[
    DemoPair {
        role: Role::Customer,
        email: "customer@example.com",
        password: "cust123",
        name: "Demo Customer",
    },
    DemoPair {
        role: Role::Vendor,
        email: "vendor@example.com",
        password: "password",
        name: "Demo Vendor",
    },
    DemoPair {
        role: Role::Admin,
        email: "admin@example.com",
        password: "admin123",
        name: "Demo Admin",
    },
    DemoPair {
        role: Role::Moderator,
        email: "moderator@example.com",
        password: "mod123",
        name: "Demo Moderator",
    },
    DemoPair {
        role: Role::InventoryManager,
        email: "inventory@example.com",
        password: "inv123",
        name: "Demo Inventory Manager",
    },
    DemoPair {
        role: Role::DeliveryAgent,
        email: "delivery@example.com",
        password: "del123",
        name: "Demo Delivery Agent",
    },
];

/// The built-in validator: exact string comparison against the hardcoded
/// pair for the requested role.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoCredentials;

impl DemoCredentials {
    /// The demo email/password pair for a role, for display on login forms.
    pub fn pair_for(role: Role) -> (&'static str, &'static str) {
        let pair = DEMO_PAIRS
            .iter()
            .find(|p| p.role == role)
            .unwrap_or(&DEMO_PAIRS[0]);
        (pair.email, pair.password)
    }
}

impl CredentialValidator for DemoCredentials {
    fn validate(&self, email: &str, password: &str, role: Role) -> Result<User, ApiError> {
        let pair = DEMO_PAIRS
            .iter()
            .find(|p| p.role == role)
            .ok_or_else(|| ApiError::internal("unknown role"))?;

        if email.trim() != pair.email || password != pair.password {
            // The demo tells you the right answer in the error message
            return Err(ApiError::unauthorized(format!(
                "Invalid credentials. Use {} / {}",
                pair.email, pair.password
            )));
        }

        Ok(User {
            id: format!("u-{}", role.label().to_lowercase().replace(' ', "-")),
            name: pair.name.to_string(),
            email: pair.email.to_string(),
            role,
            status: UserStatus::Active,
            joined_at: Utc::now(),
        })
    }
}

/// Builds the session for a validated user.
pub fn session_for(user: User, role: Role) -> Session {
    Session { user, role }
}

// =============================================================================
// Unit Tests
// =============================================================================
