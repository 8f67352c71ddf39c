//! # Back-Office Dashboard Commands
//!
//! One module per role, every command gated by
//! [`crate::commands::require_role`]:
//!
//! - [`admin`] - user table, vendor-application review
//! - [`vendor`] - product list, incoming orders, fulfillment ladder
//! - [`moderator`] - review queue, flagged-product queue
//! - [`inventory`] - stock overview and edits
//! - [`delivery`] - assignments, confirmation-code completion
//!
//! Every mutation in these modules is memory-only: role queues reload
//! from fixtures on restart.

pub mod admin;
pub mod delivery;
pub mod inventory;
pub mod moderator;
pub mod vendor;
