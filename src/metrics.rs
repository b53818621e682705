//! Metrics for observability.
//!
//! Exports Prometheus-compatible metrics for:
//! - Transition filtering (how many notifications were ignored and why)
//! - Merge attempts and outcomes
//! - Pointer resolution ambiguity
//!
//! # Metric Naming Convention
//!
//! All metrics are prefixed with `workspace_` and follow Prometheus
//! conventions: counters end in `_total`, gauges represent current state.
//!
//! # Usage
//!
//! ```rust,no_run
//! use workspace_replication::metrics;
//!
//! // In the listener after filtering
//! metrics::record_transition_ignored("node");
//!
//! // In the coordinator around the engine call
//! metrics::record_merge_attempt("stage");
//! metrics::record_merge_outcome("stage", true, 42);
//! ```

use metrics::counter;

/// Record a transition notification that was filtered out.
///
/// `entity_kind` is the kind of the transitioning entity, or `"workspace"`
/// when a workspace transition targeted a non-published state.
pub fn record_transition_ignored(entity_kind: &str) {
    counter!("workspace_transitions_ignored_total", "entity_kind" => entity_kind.to_string())
        .increment(1);
}

/// Record a publishable transition on a workspace with no upstream.
pub fn record_missing_upstream(workspace: &str) {
    counter!("workspace_missing_upstream_total", "workspace" => workspace.to_string())
        .increment(1);
}

/// Record the start of a merge attempt (one engine invocation follows).
pub fn record_merge_attempt(workspace: &str) {
    counter!("workspace_merges_total", "workspace" => workspace.to_string()).increment(1);
}

/// Record the outcome of a completed merge attempt.
pub fn record_merge_outcome(workspace: &str, ok: bool, docs_transferred: u64) {
    let status = if ok { "success" } else { "failure" };
    counter!("workspace_merge_outcomes_total", "workspace" => workspace.to_string(), "status" => status)
        .increment(1);
    if docs_transferred > 0 {
        counter!("workspace_docs_transferred_total", "workspace" => workspace.to_string())
            .increment(docs_transferred);
    }
}

/// Record a reverse lookup that matched more than one pointer record.
pub fn record_pointer_ambiguity(workspace: &str) {
    counter!("workspace_pointer_ambiguity_total", "workspace" => workspace.to_string())
        .increment(1);
}
