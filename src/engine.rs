// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Replication engine integration trait.
//!
//! Defines the seam between merge coordination and the replication engine
//! that performs the actual document transfer. The engine is consumed as an
//! opaque service: this crate hands it a source pointer, a target pointer
//! and a task, and interprets nothing beyond the returned outcome record.
//!
//! This trait allows testing with mocks and decouples merge coordination
//! from any particular transport or diffing implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use workspace_replication::engine::{BoxFuture, ReplicationOutcome, Replicator};
//! use workspace_replication::task::ReplicationTask;
//! use workspace_replication::workspace::WorkspacePointer;
//!
//! struct MyEngine { /* ... */ }
//!
//! impl Replicator for MyEngine {
//!     fn replicate(
//!         &self,
//!         _source: WorkspacePointer,
//!         _target: WorkspacePointer,
//!         _task: ReplicationTask,
//!     ) -> BoxFuture<'_, ReplicationOutcome> {
//!         Box::pin(async move { Ok(ReplicationOutcome::success(0)) })
//!     }
//! }
//! ```

use crate::error::Result;
use crate::task::ReplicationTask;
use crate::workspace::WorkspacePointer;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Type alias for boxed async futures (reduces trait signature complexity).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// The result record of one replication invocation.
///
/// Produced by the engine per call and treated as read-only output; it is
/// not persisted beyond the current transition handling. Beyond the success
/// flag the schema carries a structured failure reason and a transfer count
/// so callers never have to infer a cause from `ok` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationOutcome {
    /// Whether the replication run completed successfully.
    pub ok: bool,

    /// Failure reason reported by the engine, if the run failed.
    #[serde(default)]
    pub reason: Option<String>,

    /// Number of documents transferred during the run.
    #[serde(default)]
    pub docs_transferred: u64,
}

impl ReplicationOutcome {
    /// A successful outcome with the given transfer count.
    pub fn success(docs_transferred: u64) -> Self {
        Self {
            ok: true,
            reason: None,
            docs_transferred,
        }
    }

    /// A failed outcome carrying the engine's reason.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
            docs_transferred: 0,
        }
    }
}

/// Trait defining what merge coordination needs from a replication engine.
///
/// Exactly one invocation is made per merge attempt; retry policy, timeout
/// and cancellation all belong to the implementation behind this trait, not
/// to the caller. The call may block for the duration of the transfer.
///
/// Transport-level failures (engine unreachable, connection dropped) are
/// returned as errors and propagate to the caller; a run that completes but
/// did not replicate reports `ok = false` in the outcome instead.
pub trait Replicator: Send + Sync + 'static {
    /// Replicate documents matching `task` from `source` into `target`.
    fn replicate(
        &self,
        source: WorkspacePointer,
        target: WorkspacePointer,
        task: ReplicationTask,
    ) -> BoxFuture<'_, ReplicationOutcome>;
}

/// A no-op implementation for testing/standalone mode.
///
/// Logs what it would transfer and reports an empty successful run.
#[derive(Clone)]
pub struct NoOpReplicator;

impl Replicator for NoOpReplicator {
    fn replicate(
        &self,
        source: WorkspacePointer,
        target: WorkspacePointer,
        task: ReplicationTask,
    ) -> BoxFuture<'_, ReplicationOutcome> {
        Box::pin(async move {
            tracing::debug!(
                source = %source.id,
                target = %target.id,
                profile = %task.profile,
                "NoOp: would replicate"
            );
            Ok(ReplicationOutcome::success(0))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReplicationProfiles;
    use crate::config::PUSH_REPLICATION_SETTINGS;
    use crate::task::TaskBuilder;
    use crate::workspace::Workspace;

    fn test_task() -> ReplicationTask {
        let builder = TaskBuilder::new(ReplicationProfiles::default());
        builder
            .build(&Workspace::new("stage", "Stage"), PUSH_REPLICATION_SETTINGS)
            .unwrap()
    }

    #[tokio::test]
    async fn test_noop_replicator_succeeds() {
        let engine = NoOpReplicator;
        let source = WorkspacePointer::new("ptr-stage", "stage", "Stage");
        let target = WorkspacePointer::new("ptr-live", "live", "Live");

        let outcome = engine.replicate(source, target, test_task()).await.unwrap();
        assert!(outcome.ok);
        assert_eq!(outcome.docs_transferred, 0);
        assert!(outcome.reason.is_none());
    }

    #[test]
    fn test_outcome_success() {
        let outcome = ReplicationOutcome::success(42);
        assert!(outcome.ok);
        assert_eq!(outcome.docs_transferred, 42);
        assert!(outcome.reason.is_none());
    }

    #[test]
    fn test_outcome_failure_carries_reason() {
        let outcome = ReplicationOutcome::failure("conflict on node/7");
        assert!(!outcome.ok);
        assert_eq!(outcome.reason.as_deref(), Some("conflict on node/7"));
        assert_eq!(outcome.docs_transferred, 0);
    }

    #[test]
    fn test_outcome_deserializes_minimal_schema() {
        // Engines that predate the reason field only report the flag
        let outcome: ReplicationOutcome = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(outcome.ok);
        assert!(outcome.reason.is_none());
        assert_eq!(outcome.docs_transferred, 0);
    }

    #[test]
    fn test_noop_replicator_clone() {
        let engine = NoOpReplicator;
        let _cloned = engine.clone();
    }
}
