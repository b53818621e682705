//! Mock Replicator for testing.
//!
//! Records all replicate() calls for assertions and returns configurable
//! outcomes, including transport-level errors.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use workspace_replication::engine::BoxFuture;
use workspace_replication::{
    MergeError, ReplicationOutcome, ReplicationTask, Replicator, WorkspacePointer,
};

/// A recorded replicate() call.
#[derive(Debug, Clone)]
pub struct ReplicateCall {
    pub source_id: String,
    pub target_id: String,
    pub task: ReplicationTask,
}

/// What the mock should do on the next replicate() call.
#[derive(Debug, Clone)]
enum Behavior {
    Outcome(ReplicationOutcome),
    TransportError(String),
}

/// Mock implementation of [`Replicator`] that records all calls.
///
/// # Example
/// ```rust,ignore
/// let mock = Arc::new(MockReplicator::succeeding(3));
///
/// // Use in tests...
///
/// let calls = mock.calls();
/// assert_eq!(calls.len(), 1);
/// assert_eq!(calls[0].source_id, "ptr-stage");
/// ```
pub struct MockReplicator {
    calls: Mutex<Vec<ReplicateCall>>,
    behavior: Behavior,
    invocations: AtomicUsize,
}

impl MockReplicator {
    /// Mock that reports a successful run with the given transfer count.
    pub fn succeeding(docs_transferred: u64) -> Self {
        Self::with_outcome(ReplicationOutcome::success(docs_transferred))
    }

    /// Mock that reports a failed run with the given reason.
    pub fn failing(reason: &str) -> Self {
        Self::with_outcome(ReplicationOutcome::failure(reason))
    }

    /// Mock that returns the given outcome on every call.
    pub fn with_outcome(outcome: ReplicationOutcome) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            behavior: Behavior::Outcome(outcome),
            invocations: AtomicUsize::new(0),
        }
    }

    /// Mock whose call itself fails at the transport level.
    pub fn unreachable(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            behavior: Behavior::TransportError(message.to_string()),
            invocations: AtomicUsize::new(0),
        }
    }

    /// All recorded calls, in invocation order.
    pub fn calls(&self) -> Vec<ReplicateCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of replicate() invocations so far.
    pub fn invocation_count(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

impl Replicator for MockReplicator {
    fn replicate(
        &self,
        source: WorkspacePointer,
        target: WorkspacePointer,
        task: ReplicationTask,
    ) -> BoxFuture<'_, ReplicationOutcome> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(ReplicateCall {
            source_id: source.id.clone(),
            target_id: target.id.clone(),
            task,
        });
        let behavior = self.behavior.clone();
        Box::pin(async move {
            match behavior {
                Behavior::Outcome(outcome) => Ok(outcome),
                Behavior::TransportError(message) => {
                    Err(MergeError::engine_msg("replicate", message))
                }
            }
        })
    }
}
