// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Moderation-transition listening.
//!
//! The [`TransitionListener`] receives moderation-transition notifications
//! and decides whether they should trigger a workspace merge. It filters
//! out everything that is not a workspace reaching a published state, then
//! drives the [`MergeCoordinator`] and interprets the outcome.
//!
//! # Recovery signaling
//!
//! Transition handlers run after the state change is already committed, and
//! moderation transitions cannot be reissued recursively from inside their
//! own notification - so the listener can never roll a failed publication
//! back itself. Instead the pre-transition state travels back to the
//! initiating workflow inside [`TransitionOutcome::Failed`] as an explicit
//! revert directive. Because the directive is a returned value rather than
//! shared state, it is scoped to the one transition that produced it and
//! cannot be corrupted by concurrent transitions.
//!
//! # Reporting
//!
//! Exactly one user-visible message is emitted per handled transition:
//! a status message on success, or an error message on misconfiguration or
//! replication failure. Ignored transitions emit nothing. Formatting and
//! localization are the [`Reporter`] implementation's concern.

use crate::coordinator::MergeCoordinator;
use crate::engine::Replicator;
use crate::error::Result;
use crate::metrics;
use crate::moderation::ModerationStateStore;
use crate::workspace::{StateId, Workspace};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// The entity a moderation transition happened on.
///
/// The listener must compose safely with transitions on unrelated entity
/// types, so the event model distinguishes workspaces from everything else.
#[derive(Debug, Clone)]
pub enum TransitionEntity {
    /// A workspace entity.
    Workspace(Workspace),
    /// Any other moderated entity. Carried for logging only.
    Other { kind: String, id: String },
}

impl TransitionEntity {
    /// The entity kind, for logging and metrics.
    pub fn kind(&self) -> &str {
        match self {
            Self::Workspace(_) => "workspace",
            Self::Other { kind, .. } => kind,
        }
    }
}

/// An ephemeral moderation-transition notification.
///
/// Exists only for the duration of the notification dispatch.
#[derive(Debug, Clone)]
pub struct TransitionEvent {
    /// The entity being transitioned.
    pub entity: TransitionEntity,

    /// State identifier before the transition.
    pub state_before: StateId,

    /// State identifier after the transition (already committed).
    pub state_after: StateId,
}

impl TransitionEvent {
    pub fn new(entity: TransitionEntity, before: impl Into<StateId>, after: impl Into<StateId>) -> Self {
        Self {
            entity,
            state_before: before.into(),
            state_after: after.into(),
        }
    }

    /// Convenience constructor for a workspace transition.
    pub fn workspace(workspace: Workspace, before: impl Into<StateId>, after: impl Into<StateId>) -> Self {
        Self::new(TransitionEntity::Workspace(workspace), before, after)
    }
}

/// What the listener decided to do with one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The event was not a workspace reaching a published state. No engine
    /// call, no message.
    Ignored,

    /// The workspace has no upstream pointer. One error message, no engine
    /// call. The workspace state is left unchanged.
    MissingUpstream,

    /// Replication succeeded. One status message naming source and target.
    Replicated { source: String, target: String },

    /// Replication ran and failed. One error message; `revert_to` carries
    /// the pre-transition state for the initiating workflow to act on.
    Failed {
        source: String,
        target: String,
        revert_to: StateId,
    },
}

impl TransitionOutcome {
    /// The revert directive, if this transition produced one.
    pub fn revert_to(&self) -> Option<&StateId> {
        match self {
            Self::Failed { revert_to, .. } => Some(revert_to),
            _ => None,
        }
    }
}

/// User-facing message sink.
///
/// Two categories only: "status" for success and "error" for
/// misconfiguration or failure. Message text is fixed by the listener;
/// rendering and localization happen behind this trait.
pub trait Reporter: Send + Sync {
    fn status(&self, message: String);
    fn error(&self, message: String);
}

/// Default reporter that writes messages to the tracing subscriber.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn status(&self, message: String) {
        tracing::info!(message = %message, "status");
    }

    fn error(&self, message: String) {
        tracing::error!(message = %message, "error");
    }
}

/// Listens to moderation transitions and drives workspace merges.
pub struct TransitionListener<R: Replicator> {
    states: Arc<dyn ModerationStateStore>,
    coordinator: MergeCoordinator<R>,
    reporter: Arc<dyn Reporter>,
}

impl<R: Replicator> TransitionListener<R> {
    pub fn new(
        states: Arc<dyn ModerationStateStore>,
        coordinator: MergeCoordinator<R>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            states,
            coordinator,
            reporter,
        }
    }

    /// Handle one moderation-transition notification.
    ///
    /// Runs synchronously within the notification dispatch: the whole
    /// listener-to-engine chain is one awaited call with no timeout.
    ///
    /// Lookup and configuration problems that can be detected before the
    /// engine call (missing upstream) are handled locally with a message;
    /// a missing pointer record or a transport-level engine failure
    /// propagates as an error.
    pub async fn handle_transition(&self, event: &TransitionEvent) -> Result<TransitionOutcome> {
        let workspace = match &event.entity {
            TransitionEntity::Workspace(workspace) => workspace,
            TransitionEntity::Other { kind, id } => {
                trace!(kind = %kind, id = %id, "Ignoring transition on non-workspace entity");
                metrics::record_transition_ignored(kind);
                return Ok(TransitionOutcome::Ignored);
            }
        };

        // Unknown target states are treated as not published.
        let target_state = self.states.load_moderation_state(&event.state_after).await?;
        let published = target_state.map(|s| s.is_published_state()).unwrap_or(false);
        if !published {
            debug!(
                workspace = %workspace.id,
                state = %event.state_after,
                "Target state is not a published state, ignoring transition"
            );
            metrics::record_transition_ignored("workspace");
            return Ok(TransitionOutcome::Ignored);
        }

        let Some(upstream) = workspace.upstream.as_ref() else {
            warn!(workspace = %workspace.id, "Workspace reached a published state without an upstream");
            metrics::record_missing_upstream(workspace.id.as_str());
            self.reporter.error(format!(
                "The {} workspace does not have an upstream to replicate to!",
                workspace.label
            ));
            // Whether to revert the workspace here is an open policy
            // question; the state is left unchanged.
            return Ok(TransitionOutcome::MissingUpstream);
        };
        let target_label = upstream.label.clone();

        let outcome = self.coordinator.merge_to_parent(workspace).await?;

        if outcome.ok {
            self.reporter.status(format!(
                "Changes in {} were replicated to {}.",
                workspace.label, target_label
            ));
            Ok(TransitionOutcome::Replicated {
                source: workspace.label.clone(),
                target: target_label,
            })
        } else {
            self.reporter.error(format!(
                "Publishing the {} workspace failed!",
                workspace.label
            ));
            Ok(TransitionOutcome::Failed {
                source: workspace.label.clone(),
                target: target_label,
                revert_to: event.state_before.clone(),
            })
        }
    }
}
