//! # Workspace Replication
//!
//! Merge coordination between hierarchical content workspaces.
//!
//! A workspace is an isolated, versioned branch of a content tree. When a
//! workspace transitions into a published moderation state, its changes are
//! replicated ("merged") into its upstream parent workspace. This crate owns
//! the decision-and-dispatch logic around that merge; the actual document
//! transfer is delegated to an opaque [`Replicator`].
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │                         workspace-replication                            │
//! │                                                                          │
//! │  moderation            ┌────────────────────┐     ┌───────────────────┐  │
//! │  transition ──────────►│ TransitionListener │────►│ MergeCoordinator  │  │
//! │  notification          │ (filter + report)  │     │ (resolve + build) │  │
//! │                        └────────────────────┘     └───────────────────┘  │
//! │                                 │                      │         │       │
//! │                                 ▼                      ▼         ▼       │
//! │                        ┌────────────────┐   ┌─────────────┐ ┌─────────┐  │
//! │                        │ revert         │   │ Pointer     │ │ Task    │  │
//! │                        │ directive      │   │ Registry    │ │ Builder │  │
//! │                        │ (to workflow)  │   │ (reverse    │ │ (from   │  │
//! │                        └────────────────┘   │  lookup)    │ │ profile)│  │
//! │                                             └─────────────┘ └─────────┘  │
//! │                                                        │                 │
//! │                                                        ▼                 │
//! │                                             ┌─────────────────────────┐  │
//! │                                             │ Replicator (external)   │  │
//! │                                             └─────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Flow
//!
//! 1. The moderation subsystem delivers a [`TransitionEvent`].
//! 2. The [`TransitionListener`] ignores anything that is not a workspace
//!    reaching a published state.
//! 3. The [`MergeCoordinator`] resolves the workspace's own pointer via the
//!    [`PointerRegistry`], builds a [`ReplicationTask`] from the
//!    `push_replication_settings` profile, and invokes the [`Replicator`]
//!    against the workspace's upstream pointer.
//! 4. The outcome is interpreted: a success or failure message is reported,
//!    and on failure the pre-transition state travels back to the initiating
//!    workflow as a revert directive inside [`TransitionOutcome::Failed`].
//!    The listener cannot roll the moderation state back itself because it
//!    runs after the transition is already committed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use workspace_replication::{
//!     Capabilities, Capability, LogReporter, MergeCoordinator, ModerationStates,
//!     NoOpReplicator, InMemoryPointerStore, PointerRegistry, ReplicationProfiles,
//!     TaskBuilder, TransitionDispatcher, TransitionListener,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = PointerRegistry::new(Arc::new(InMemoryPointerStore::new()));
//!     let builder = TaskBuilder::new(ReplicationProfiles::default());
//!     let coordinator = MergeCoordinator::new(registry, builder, Arc::new(NoOpReplicator));
//!     let listener = TransitionListener::new(
//!         Arc::new(ModerationStates::new()),
//!         coordinator,
//!         Arc::new(LogReporter),
//!     );
//!
//!     let mut dispatcher = TransitionDispatcher::new();
//!     let caps = Capabilities::with(Capability::ModerationTransitions);
//!     listener.register(&mut dispatcher, &caps);
//! }
//! ```

pub mod capability;
pub mod config;
pub mod coordinator;
pub mod engine;
pub mod error;
pub mod listener;
pub mod metrics;
pub mod moderation;
pub mod pointer;
pub mod task;
pub mod workspace;

// Re-exports for convenience
pub use capability::{Capabilities, Capability, TransitionDispatcher};
pub use config::{ProfileConfig, ReplicationProfiles, PUSH_REPLICATION_SETTINGS};
pub use coordinator::MergeCoordinator;
pub use engine::{NoOpReplicator, ReplicationOutcome, Replicator};
pub use error::{MergeError, Result};
pub use listener::{
    LogReporter, Reporter, TransitionEntity, TransitionEvent, TransitionListener,
    TransitionOutcome,
};
pub use moderation::{ModerationState, ModerationStateStore, ModerationStates};
pub use pointer::{InMemoryPointerStore, PointerRegistry, PointerStore};
pub use task::{ConflictPolicy, Direction, ReplicationTask, TaskBuilder};
pub use workspace::{StateId, Workspace, WorkspaceId, WorkspacePointer};
