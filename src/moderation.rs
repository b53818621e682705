// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Moderation state lookups.
//!
//! The moderation-state taxonomy itself is owned by the moderation
//! subsystem; this crate only needs to answer one question per transition:
//! does the post-transition state publish content as the default revision?
//! [`ModerationStateStore`] is the seam to that subsystem's storage, and
//! [`ModerationStates`] is a small in-memory implementation for embedding
//! and tests.

use crate::engine::BoxFuture;
use crate::workspace::StateId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Definition of one moderation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationState {
    /// State identifier (e.g. `"draft"`, `"published"`).
    pub id: StateId,

    /// Human-readable label.
    pub label: String,

    /// Whether content in this state is publicly visible.
    published: bool,

    /// Whether content in this state becomes the default revision.
    default_revision: bool,
}

impl ModerationState {
    pub fn new(
        id: impl Into<StateId>,
        label: impl Into<String>,
        published: bool,
        default_revision: bool,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            published,
            default_revision,
        }
    }

    /// A state that publishes content as the default revision.
    pub fn published(id: impl Into<StateId>, label: impl Into<String>) -> Self {
        Self::new(id, label, true, true)
    }

    /// A working state that neither publishes nor promotes revisions.
    pub fn unpublished(id: impl Into<StateId>, label: impl Into<String>) -> Self {
        Self::new(id, label, false, false)
    }

    /// Whether reaching this state triggers replication.
    ///
    /// True only when the state both publishes content and makes it the
    /// default revision. A "published but not default" archival state does
    /// not qualify.
    pub fn is_published_state(&self) -> bool {
        self.published && self.default_revision
    }
}

/// Seam to the moderation subsystem's state storage.
///
/// Returns `None` for unknown state identifiers; the listener treats an
/// unknown target state as not published and ignores the transition.
pub trait ModerationStateStore: Send + Sync {
    /// Load the definition of a moderation state by identifier.
    fn load_moderation_state(
        &self,
        state_id: &StateId,
    ) -> BoxFuture<'_, Option<ModerationState>>;
}

/// In-memory moderation state set.
///
/// Built once at wiring time and read-only afterwards, matching how state
/// definitions behave in the host system (configuration, not runtime data).
#[derive(Debug, Clone, Default)]
pub struct ModerationStates {
    states: HashMap<StateId, ModerationState>,
}

impl ModerationStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state definition (builder style).
    pub fn with_state(mut self, state: ModerationState) -> Self {
        self.states.insert(state.id.clone(), state);
        self
    }

    /// The usual editorial pair: an unpublished draft and a published state.
    pub fn draft_published() -> Self {
        Self::new()
            .with_state(ModerationState::unpublished("draft", "Draft"))
            .with_state(ModerationState::published("published", "Published"))
    }
}

impl ModerationStateStore for ModerationStates {
    fn load_moderation_state(
        &self,
        state_id: &StateId,
    ) -> BoxFuture<'_, Option<ModerationState>> {
        let state = self.states.get(state_id).cloned();
        Box::pin(async move { Ok(state) })
    }
}
