// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Merge coordination.
//!
//! The [`MergeCoordinator`] turns "merge this workspace into its parent"
//! into one replication engine invocation:
//!
//! 1. Read the upstream pointer off the workspace entity (the merge target).
//! 2. Resolve the workspace's own pointer via the registry (the source).
//! 3. Build a task from the `push_replication_settings` profile.
//! 4. Invoke the engine and return its outcome.
//!
//! Exactly one engine invocation happens per call. There are no retries
//! here; retry policy, if any, belongs behind the [`Replicator`] seam.

use crate::config::PUSH_REPLICATION_SETTINGS;
use crate::engine::{ReplicationOutcome, Replicator};
use crate::error::{MergeError, Result};
use crate::metrics;
use crate::pointer::PointerRegistry;
use crate::task::TaskBuilder;
use crate::workspace::Workspace;
use std::sync::Arc;
use tracing::{info, warn};

/// Coordinates one workspace-to-parent merge per call.
#[derive(Clone)]
pub struct MergeCoordinator<R: Replicator> {
    registry: PointerRegistry,
    builder: TaskBuilder,
    replicator: Arc<R>,
}

impl<R: Replicator> MergeCoordinator<R> {
    pub fn new(registry: PointerRegistry, builder: TaskBuilder, replicator: Arc<R>) -> Self {
        Self {
            registry,
            builder,
            replicator,
        }
    }

    /// Replicate `workspace` into its upstream parent.
    ///
    /// Precondition: the caller has already verified the workspace has an
    /// upstream pointer (the listener does, before calling in). Absence
    /// still returns a configuration error rather than panicking, but is
    /// not re-branched on beyond that.
    pub async fn merge_to_parent(&self, workspace: &Workspace) -> Result<ReplicationOutcome> {
        let upstream = workspace.upstream.clone().ok_or_else(|| {
            MergeError::Configuration(format!(
                "workspace '{}' has no upstream pointer",
                workspace.id
            ))
        })?;

        let source = self.registry.find_pointer_for(workspace).await?;
        let task = self.builder.build(workspace, PUSH_REPLICATION_SETTINGS)?;

        info!(
            workspace = %workspace.id,
            source = %source.id,
            target = %upstream.id,
            profile = %task.profile,
            "Replicating workspace to upstream"
        );
        metrics::record_merge_attempt(workspace.id.as_str());

        // May block for the duration of the transfer. Timeout policy is the
        // engine's responsibility.
        let outcome = self.replicator.replicate(source, upstream, task).await?;

        if outcome.ok {
            info!(
                workspace = %workspace.id,
                docs = outcome.docs_transferred,
                "Replication completed"
            );
        } else {
            warn!(
                workspace = %workspace.id,
                reason = outcome.reason.as_deref().unwrap_or("unspecified"),
                "Replication failed"
            );
        }
        metrics::record_merge_outcome(workspace.id.as_str(), outcome.ok, outcome.docs_transferred);

        Ok(outcome)
    }
}
