//! # Admin Commands
//!
//! The admin dashboard: platform user table and the vendor-application
//! review queue.

use serde::Serialize;
use tracing::info;

use bazaar_core::{ApplicationStatus, CoreError, Role, User, UserStatus, VendorApplication};

use crate::commands::require_role;
use crate::error::ApiError;
use crate::state::{AdminState, SessionState};

/// Header counts for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_users: usize,
    pub active_users: usize,
    pub suspended_users: usize,
    pub pending_applications: usize,
}

/// Lists every platform user.
pub fn list_users(session: &SessionState, state: &AdminState) -> Result<Vec<User>, ApiError> {
    require_role(session, Role::Admin)?;
    Ok(state.with_users(|users| users.to_vec()))
}

/// Suspends or reactivates a user account.
///
/// Setting the current status again is a no-op, not an error.
pub fn set_user_status(
    session: &SessionState,
    state: &AdminState,
    user_id: &str,
    status: UserStatus,
) -> Result<User, ApiError> {
    require_role(session, Role::Admin)?;

    let user = state.with_users_mut(|users| {
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| ApiError::not_found("User", user_id))?;
        user.status = status;
        Ok::<_, ApiError>(user.clone())
    })?;

    info!(user_id, ?status, "user status changed");
    Ok(user)
}

/// Lists vendor applications, pending first, then by submission date.
pub fn list_applications(
    session: &SessionState,
    state: &AdminState,
) -> Result<Vec<VendorApplication>, ApiError> {
    require_role(session, Role::Admin)?;

    let mut applications = state.with_applications(|apps| apps.to_vec());
    applications.sort_by_key(|a| (a.status != ApplicationStatus::Pending, a.submitted_at));
    Ok(applications)
}

/// Approves or rejects a PENDING vendor application.
///
/// Decisions are final within a run: re-deciding an already-decided
/// application is rejected.
pub fn decide_application(
    session: &SessionState,
    state: &AdminState,
    application_id: &str,
    approve: bool,
) -> Result<VendorApplication, ApiError> {
    require_role(session, Role::Admin)?;

    let application = state.with_applications_mut(|apps| {
        let app = apps
            .iter_mut()
            .find(|a| a.id == application_id)
            .ok_or_else(|| ApiError::not_found("Application", application_id))?;

        if app.status != ApplicationStatus::Pending {
            return Err(CoreError::InvalidStatusTransition {
                entity: "Application",
                id: app.id.clone(),
                current: format!("{:?}", app.status).to_lowercase(),
                action: "decide again",
            }
            .into());
        }

        app.status = if approve {
            ApplicationStatus::Approved
        } else {
            ApplicationStatus::Rejected
        };
        Ok::<_, ApiError>(app.clone())
    })?;

    info!(application_id, approve, "vendor application decided");
    Ok(application)
}

/// Computes the admin header counts.
pub fn platform_stats(
    session: &SessionState,
    state: &AdminState,
) -> Result<PlatformStats, ApiError> {
    require_role(session, Role::Admin)?;

    let (total_users, active_users, suspended_users) = state.with_users(|users| {
        let active = users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count();
        (users.len(), active, users.len() - active)
    });

    let pending_applications = state.with_applications(|apps| {
        apps.iter()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .count()
    });

    Ok(PlatformStats {
        total_users,
        active_users,
        suspended_users,
        pending_applications,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
