//! Shared test utilities for integration tests.
//!
//! This module provides:
//! - A recording mock [`Replicator`](workspace_replication::Replicator)
//! - A recording [`Reporter`](workspace_replication::Reporter)
//! - Fixture helpers for wiring a listener end to end

pub mod mock_replicator;
pub mod reporting;

pub use mock_replicator::*;
pub use reporting::*;

use std::sync::Arc;
use workspace_replication::{
    MergeCoordinator, ModerationStates, InMemoryPointerStore, PointerRegistry,
    ReplicationProfiles, TaskBuilder, TransitionListener, Workspace, WorkspacePointer,
};

/// A workspace "stage" with an upstream pointer to "live".
pub fn staged_workspace() -> Workspace {
    Workspace::new("stage", "Stage")
        .with_upstream(WorkspacePointer::new("ptr-live", "live", "Live"))
}

/// Wire a listener with the draft/published state set, the given pointer
/// records, a mock replicator and a recording reporter.
pub async fn listener_with(
    pointers: Vec<WorkspacePointer>,
    replicator: Arc<MockReplicator>,
    reporter: Arc<RecordingReporter>,
) -> TransitionListener<MockReplicator> {
    let store = InMemoryPointerStore::new();
    for pointer in pointers {
        store.insert(pointer).await;
    }
    let coordinator = MergeCoordinator::new(
        PointerRegistry::new(Arc::new(store)),
        TaskBuilder::new(ReplicationProfiles::default()),
        replicator,
    );
    TransitionListener::new(
        Arc::new(ModerationStates::draft_published()),
        coordinator,
        reporter,
    )
}
