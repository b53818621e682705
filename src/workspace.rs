// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Workspace entity types.
//!
//! A [`Workspace`] is an isolated, versioned branch of a content tree owned
//! by the surrounding content-management framework. This crate only reads a
//! workspace's identity and its upstream relation and observes its
//! moderation transitions - it never mutates workspace entities.
//!
//! A [`WorkspacePointer`] is a durable indirection handle that identifies a
//! workspace as a replication endpoint. Pointers decouple a workspace's
//! identity from its storage location, so workspaces can be renamed or
//! relocated without invalidating replication configuration. The schema
//! does not enforce that a workspace has at most one pointer; resolution of
//! duplicates is handled in [`crate::pointer`].

use serde::{Deserialize, Serialize};

/// Unique identity of a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WorkspaceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WorkspaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of a moderation state (e.g. `"draft"`, `"published"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StateId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A durable handle identifying a workspace as a replication endpoint.
///
/// Pointer lifecycle (creation/deletion) is owned by workspace management.
/// This crate only resolves pointers, never creates or destroys them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspacePointer {
    /// Unique identity of the pointer record itself.
    pub id: String,

    /// The workspace this pointer references. Not unique across pointers:
    /// multiple pointer records may reference the same workspace.
    pub workspace_id: WorkspaceId,

    /// Human-readable label, used in user-facing messages.
    pub label: String,
}

impl WorkspacePointer {
    pub fn new(
        id: impl Into<String>,
        workspace_id: impl Into<WorkspaceId>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            workspace_id: workspace_id.into(),
            label: label.into(),
        }
    }
}

/// An isolated, versioned branch of content that can be merged into a parent.
///
/// The `upstream` relation holds the pointer to the parent workspace this
/// workspace replicates into upon publication, directly on the entity - no
/// lookup is needed to resolve the merge target. A workspace with no
/// upstream cannot be merged anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    /// Unique identity.
    pub id: WorkspaceId,

    /// Human-readable label, used in user-facing messages.
    pub label: String,

    /// Pointer to the parent workspace, if one is configured.
    pub upstream: Option<WorkspacePointer>,
}

impl Workspace {
    /// Create a workspace with no upstream configured.
    pub fn new(id: impl Into<WorkspaceId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            upstream: None,
        }
    }

    /// Set the upstream pointer (builder style).
    pub fn with_upstream(mut self, upstream: WorkspacePointer) -> Self {
        self.upstream = Some(upstream);
        self
    }

    /// Check whether this workspace has a merge target configured.
    pub fn has_upstream(&self) -> bool {
        self.upstream.is_some()
    }
}
