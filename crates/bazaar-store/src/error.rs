//! # Store Error Types
//!
//! Error types for local-storage and fixture operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the key/path context                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in dashboard app) ← what a front-end would see              │
//! │                                                                         │
//! │  Exception: a missing or malformed VALUE under a known key is NOT an   │
//! │  error - it decodes to the default, like absent browser storage.       │
//! │  Only I/O failures and write-side serialization failures surface.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Local-storage and fixture errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage root could not be created or opened.
    #[error("Cannot open storage directory {path}: {source}")]
    RootUnavailable {
        path: String,
        source: std::io::Error,
    },

    /// Reading a key's file failed for a reason other than absence.
    #[error("Failed to read key '{key}': {source}")]
    ReadFailed {
        key: String,
        source: std::io::Error,
    },

    /// Writing a key's file failed.
    ///
    /// ## When This Occurs
    /// - Disk full (the quota-exceeded analog)
    /// - Permissions problem on the storage directory
    #[error("Failed to write key '{key}': {source}")]
    WriteFailed {
        key: String,
        source: std::io::Error,
    },

    /// Serializing a value for storage failed.
    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },

    /// A fixture file is absent or unreadable.
    ///
    /// Callers log this and leave the dependent store empty - the UI
    /// renders a zero state, never an error page.
    #[error("Fixture unavailable: {path}: {source}")]
    FixtureUnavailable {
        path: String,
        source: std::io::Error,
    },

    /// A fixture file exists but is not valid JSON for the expected shape.
    #[error("Fixture malformed: {path}: {source}")]
    FixtureMalformed {
        path: String,
        source: serde_json::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
