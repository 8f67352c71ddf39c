//! # Delivery Commands
//!
//! The delivery-agent dashboard: assignments and the confirmation-code
//! drop-off flow.
//!
//! ## Assignment Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Delivery Lifecycle                                   │
//! │                                                                         │
//! │  ┌──────────┐  start   ┌──────────┐  complete(code)  ┌──────────┐      │
//! │  │ Assigned │─────────►│ InTransit│─────────────────►│ Delivered│      │
//! │  └──────────┘          └──────────┘                  └──────────┘      │
//! │                             │                                           │
//! │                             │ fail(reason logged)                       │
//! │                             ▼                                           │
//! │                        ┌──────────┐                                     │
//! │                        │  Failed  │                                     │
//! │                        └──────────┘                                     │
//! │                                                                         │
//! │  complete() compares the typed code against the assignment's own        │
//! │  4-digit code. A mismatch leaves the assignment in transit; the agent   │
//! │  can retry without limit.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use bazaar_core::validation::validate_delivery_code;
use bazaar_core::{CoreError, DeliveryAssignment, DeliveryStatus, Role};

use crate::commands::require_role;
use crate::error::ApiError;
use crate::state::{DeliveryState, SessionState};

/// Header counts for the delivery dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryStats {
    pub assigned: usize,
    pub in_transit: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// Lists the agent's assignments, undelivered first.
pub fn list_assignments(
    session: &SessionState,
    state: &DeliveryState,
) -> Result<Vec<DeliveryAssignment>, ApiError> {
    require_role(session, Role::DeliveryAgent)?;

    let mut assignments = state.with_assignments(|a| a.to_vec());
    assignments.sort_by_key(|a| {
        (
            matches!(a.status, DeliveryStatus::Delivered | DeliveryStatus::Failed),
            a.assigned_at,
        )
    });
    Ok(assignments)
}

/// Marks an ASSIGNED delivery as picked up and in transit.
pub fn start_delivery(
    session: &SessionState,
    state: &DeliveryState,
    delivery_id: &str,
) -> Result<DeliveryAssignment, ApiError> {
    require_role(session, Role::DeliveryAgent)?;

    let assignment = transition(state, delivery_id, DeliveryStatus::Assigned, |a| {
        a.status = DeliveryStatus::InTransit;
    })?;

    info!(delivery_id, "delivery started");
    Ok(assignment)
}

/// Completes an IN-TRANSIT delivery by confirmation code.
///
/// The code must be the 4-digit one embedded in the assignment. A wrong
/// code is an error but changes nothing; there is no attempt limit.
pub fn complete_delivery(
    session: &SessionState,
    state: &DeliveryState,
    delivery_id: &str,
    code: &str,
) -> Result<DeliveryAssignment, ApiError> {
    require_role(session, Role::DeliveryAgent)?;
    validate_delivery_code(code).map_err(|e| ApiError::validation(e.to_string()))?;

    let assignment = state.with_assignments_mut(|assignments| {
        let assignment = assignments
            .iter_mut()
            .find(|a| a.id == delivery_id)
            .ok_or_else(|| ApiError::from(CoreError::DeliveryNotFound(delivery_id.to_string())))?;

        if assignment.status != DeliveryStatus::InTransit {
            return Err(CoreError::InvalidStatusTransition {
                entity: "Delivery",
                id: assignment.order_number.clone(),
                current: format!("{:?}", assignment.status).to_lowercase(),
                action: "complete",
            }
            .into());
        }

        if assignment.confirmation_code != code {
            return Err(CoreError::DeliveryCodeMismatch {
                order_number: assignment.order_number.clone(),
            }
            .into());
        }

        assignment.status = DeliveryStatus::Delivered;
        assignment.delivered_at = Some(Utc::now());
        Ok::<_, ApiError>(assignment.clone())
    })?;

    info!(delivery_id, order_number = %assignment.order_number, "delivery completed");
    Ok(assignment)
}

/// Marks an IN-TRANSIT delivery as failed (customer absent, bad address).
pub fn fail_delivery(
    session: &SessionState,
    state: &DeliveryState,
    delivery_id: &str,
) -> Result<DeliveryAssignment, ApiError> {
    require_role(session, Role::DeliveryAgent)?;

    let assignment = transition(state, delivery_id, DeliveryStatus::InTransit, |a| {
        a.status = DeliveryStatus::Failed;
    })?;

    info!(delivery_id, "delivery failed");
    Ok(assignment)
}

/// Computes the agent's header counts.
pub fn delivery_stats(
    session: &SessionState,
    state: &DeliveryState,
) -> Result<DeliveryStats, ApiError> {
    require_role(session, Role::DeliveryAgent)?;

    Ok(state.with_assignments(|assignments| {
        let count =
            |status: DeliveryStatus| assignments.iter().filter(|a| a.status == status).count();
        DeliveryStats {
            assigned: count(DeliveryStatus::Assigned),
            in_transit: count(DeliveryStatus::InTransit),
            delivered: count(DeliveryStatus::Delivered),
            failed: count(DeliveryStatus::Failed),
        }
    }))
}

fn transition(
    state: &DeliveryState,
    delivery_id: &str,
    expected: DeliveryStatus,
    apply: impl FnOnce(&mut DeliveryAssignment),
) -> Result<DeliveryAssignment, ApiError> {
    state.with_assignments_mut(|assignments| {
        let assignment = assignments
            .iter_mut()
            .find(|a| a.id == delivery_id)
            .ok_or_else(|| ApiError::from(CoreError::DeliveryNotFound(delivery_id.to_string())))?;

        if assignment.status != expected {
            return Err(CoreError::InvalidStatusTransition {
                entity: "Delivery",
                id: assignment.order_number.clone(),
                current: format!("{:?}", assignment.status).to_lowercase(),
                action: "transition",
            }
            .into());
        }

        apply(assignment);
        Ok(assignment.clone())
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::{Session, User, UserStatus};
    use bazaar_store::seed::SeedData;

    fn agent_session() -> SessionState {
        let user = User {
            id: "u-6".to_string(),
            name: "Demo Delivery Agent".to_string(),
            email: "delivery@example.com".to_string(),
            role: Role::DeliveryAgent,
            status: UserStatus::Active,
            joined_at: Utc::now(),
        };
        SessionState::restored(Some(Session {
            user,
            role: Role::DeliveryAgent,
        }))
    }

    fn seeded() -> DeliveryState {
        DeliveryState::new(SeedData::demo().deliveries)
    }

    #[test]
    fn test_undelivered_listed_first() {
        let session = agent_session();
        let state = seeded();

        let assignments = list_assignments(&session, &state).unwrap();
        assert_eq!(assignments.len(), 3);
        assert_eq!(assignments.last().unwrap().status, DeliveryStatus::Delivered);
    }

    #[test]
    fn test_full_delivery_flow() {
        let session = agent_session();
        let state = seeded();

        // del-1 is assigned, code 1234
        start_delivery(&session, &state, "del-1").unwrap();
        let done = complete_delivery(&session, &state, "del-1", "1234").unwrap();

        assert_eq!(done.status, DeliveryStatus::Delivered);
        assert!(done.delivered_at.is_some());
    }

    #[test]
    fn test_wrong_code_leaves_delivery_in_transit() {
        let session = agent_session();
        let state = seeded();

        // del-2 is already in transit, code 5678
        let err = complete_delivery(&session, &state, "del-2", "0000").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::CodeMismatch);

        // Retry with the right code succeeds - no attempt limit
        let done = complete_delivery(&session, &state, "del-2", "5678").unwrap();
        assert_eq!(done.status, DeliveryStatus::Delivered);
    }

    #[test]
    fn test_malformed_code_rejected_before_lookup() {
        let session = agent_session();
        let state = seeded();

        let err = complete_delivery(&session, &state, "del-2", "12x4").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
    }

    #[test]
    fn test_cannot_complete_unstarted_delivery() {
        let session = agent_session();
        let state = seeded();

        // del-1 is still assigned
        let err = complete_delivery(&session, &state, "del-1", "1234").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_fail_then_no_further_transitions() {
        let session = agent_session();
        let state = seeded();

        start_delivery(&session, &state, "del-1").unwrap();
        fail_delivery(&session, &state, "del-1").unwrap();

        let err = complete_delivery(&session, &state, "del-1", "1234").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_stats_follow_the_lifecycle() {
        let session = agent_session();
        let state = seeded();

        // Seed: 1 assigned, 1 in transit, 1 delivered
        let stats = delivery_stats(&session, &state).unwrap();
        assert_eq!(stats.assigned, 1);
        assert_eq!(stats.in_transit, 1);
        assert_eq!(stats.delivered, 1);
        assert_eq!(stats.failed, 0);

        start_delivery(&session, &state, "del-1").unwrap();
        fail_delivery(&session, &state, "del-1").unwrap();

        let stats = delivery_stats(&session, &state).unwrap();
        assert_eq!(stats.assigned, 0);
        assert_eq!(stats.failed, 1);
    }
}
