// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Error types for workspace merge coordination.
//!
//! Errors are categorized by where they occur in the merge pipeline and
//! whether the initiating workflow can sensibly retry them.
//!
//! # Error Categories
//!
//! | Error Type | Recoverable | Description |
//! |------------|-------------|-------------|
//! | `Configuration` | No | Missing upstream pointer, unknown replication profile |
//! | `PointerNotFound` | No | No pointer record exists for the source workspace |
//! | `Engine` | Yes | Transport-level failure of the replication engine call |
//!
//! A replication run that completes but reports `ok = false` is **not** an
//! error in this taxonomy — it surfaces through
//! [`ReplicationOutcome`](crate::engine::ReplicationOutcome) and is handled
//! by the listener as a recoverable workflow condition.
//!
//! # Recovery Behavior
//!
//! Use [`MergeError::is_recoverable()`] to decide whether the workflow that
//! initiated a transition should offer a retry. Configuration and lookup
//! errors need operator attention before any retry can succeed.

use thiserror::Error;

/// Result type alias for merge coordination operations.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Errors that can occur while coordinating a workspace merge.
#[derive(Error, Debug)]
pub enum MergeError {
    /// Invalid or missing configuration.
    ///
    /// Raised when a workspace has no upstream pointer or a named
    /// replication profile does not exist. Detected before any engine call
    /// is made. Not recoverable by retry - fix the configuration first.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No pointer record references the given workspace.
    ///
    /// The reverse lookup over pointer records came back empty, so the
    /// workspace cannot act as a replication source. Fatal to the current
    /// merge attempt. Pointer lifecycle is owned by workspace management,
    /// not this crate.
    #[error("No replication pointer found for workspace '{workspace}'")]
    PointerNotFound { workspace: String },

    /// Transport-level failure of the replication engine invocation.
    ///
    /// Distinct from a completed run that reports `ok = false`: this means
    /// the call itself failed (engine unreachable, connection dropped).
    /// Recoverable - the workflow may retry the merge.
    #[error("Replication engine error ({operation}): {message}")]
    Engine {
        operation: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MergeError {
    /// Create an engine error wrapping an underlying transport error.
    pub fn engine(
        operation: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Engine {
            operation: operation.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create an engine error without a source.
    pub fn engine_msg(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Engine {
            operation: operation.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Check if the initiating workflow may retry after this error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Configuration(_) => false,
            Self::PointerNotFound { .. } => false,
            Self::Engine { .. } => true, // Transport failures are transient
        }
    }
}
