//! # Moderator Commands
//!
//! The moderation dashboard: the review queue and the flagged-product
//! queue.
//!
//! Removing a flagged product ALSO deactivates it in the shared catalog,
//! so shoppers stop seeing it immediately. That is the demo's only
//! cross-dashboard effect.

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use bazaar_core::{
    CoreError, FlagStatus, FlaggedProduct, ReviewStatus, ReviewSubmission, Role,
};

use crate::commands::require_role;
use crate::error::ApiError;
use crate::state::{CatalogState, ModeratorState, SessionState};

/// Header counts for the moderation dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationStats {
    pub pending_reviews: usize,
    pub approved_reviews: usize,
    pub rejected_reviews: usize,
    pub open_flags: usize,
}

/// Lists review submissions still awaiting a decision.
pub fn pending_reviews(
    session: &SessionState,
    state: &ModeratorState,
) -> Result<Vec<ReviewSubmission>, ApiError> {
    require_role(session, Role::Moderator)?;
    Ok(state.with_reviews(|reviews| {
        reviews
            .iter()
            .filter(|r| r.status == ReviewStatus::Pending)
            .cloned()
            .collect()
    }))
}

/// Approves or rejects a PENDING review.
pub fn decide_review(
    session: &SessionState,
    state: &ModeratorState,
    review_id: &str,
    approve: bool,
) -> Result<ReviewSubmission, ApiError> {
    require_role(session, Role::Moderator)?;

    let review = state.with_reviews_mut(|reviews| {
        let review = reviews
            .iter_mut()
            .find(|r| r.id == review_id)
            .ok_or_else(|| ApiError::not_found("Review", review_id))?;

        if review.status != ReviewStatus::Pending {
            return Err(CoreError::InvalidStatusTransition {
                entity: "Review",
                id: review.id.clone(),
                current: format!("{:?}", review.status).to_lowercase(),
                action: "decide again",
            }
            .into());
        }

        review.status = if approve {
            ReviewStatus::Approved
        } else {
            ReviewStatus::Rejected
        };
        Ok::<_, ApiError>(review.clone())
    })?;

    info!(review_id, approve, "review decided");
    Ok(review)
}

/// Lists products still flagged for attention.
pub fn open_flags(
    session: &SessionState,
    state: &ModeratorState,
) -> Result<Vec<FlaggedProduct>, ApiError> {
    require_role(session, Role::Moderator)?;
    Ok(state.with_flags(|flags| {
        flags
            .iter()
            .filter(|f| f.status == FlagStatus::Flagged)
            .cloned()
            .collect()
    }))
}

/// Dismisses a flag: the report was unfounded, the product stays up.
pub fn dismiss_flag(
    session: &SessionState,
    state: &ModeratorState,
    flag_id: &str,
) -> Result<FlaggedProduct, ApiError> {
    require_role(session, Role::Moderator)?;
    resolve_flag(state, flag_id, FlagStatus::Dismissed)
}

/// Upholds a flag: the product is removed from sale.
///
/// The catalog copy is deactivated in the same call, so the storefront
/// stops listing it without waiting for anything else.
pub fn remove_flagged_product(
    session: &SessionState,
    state: &ModeratorState,
    catalog: &CatalogState,
    flag_id: &str,
) -> Result<FlaggedProduct, ApiError> {
    require_role(session, Role::Moderator)?;

    let flag = resolve_flag(state, flag_id, FlagStatus::Removed)?;

    catalog.with_products_mut(|products| {
        if let Some(product) = products.iter_mut().find(|p| p.id == flag.product_id) {
            product.is_active = false;
            product.updated_at = Utc::now();
        }
    });

    info!(flag_id, product_id = %flag.product_id, "flagged product removed");
    Ok(flag)
}

/// Computes the moderation header counts.
pub fn moderation_stats(
    session: &SessionState,
    state: &ModeratorState,
) -> Result<ModerationStats, ApiError> {
    require_role(session, Role::Moderator)?;

    let (pending_reviews, approved_reviews, rejected_reviews) = state.with_reviews(|reviews| {
        let count = |status: ReviewStatus| reviews.iter().filter(|r| r.status == status).count();
        (
            count(ReviewStatus::Pending),
            count(ReviewStatus::Approved),
            count(ReviewStatus::Rejected),
        )
    });

    let open_flags = state.with_flags(|flags| {
        flags
            .iter()
            .filter(|f| f.status == FlagStatus::Flagged)
            .count()
    });

    Ok(ModerationStats {
        pending_reviews,
        approved_reviews,
        rejected_reviews,
        open_flags,
    })
}

fn resolve_flag(
    state: &ModeratorState,
    flag_id: &str,
    resolution: FlagStatus,
) -> Result<FlaggedProduct, ApiError> {
    state.with_flags_mut(|flags| {
        let flag = flags
            .iter_mut()
            .find(|f| f.id == flag_id)
            .ok_or_else(|| ApiError::not_found("Flag", flag_id))?;

        if flag.status != FlagStatus::Flagged {
            return Err(CoreError::InvalidStatusTransition {
                entity: "Flag",
                id: flag.id.clone(),
                current: format!("{:?}", flag.status).to_lowercase(),
                action: "resolve again",
            }
            .into());
        }

        flag.status = resolution;
        Ok(flag.clone())
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
