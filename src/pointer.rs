// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Pointer resolution.
//!
//! The [`PointerRegistry`] maps a workspace to the pointer record usable as
//! its replication endpoint. Resolution is a reverse index over pointer
//! records keyed by target-workspace identity.
//!
//! The underlying schema does not enforce uniqueness of that reverse
//! relation: multiple pointers may reference the same workspace. Resolution
//! then returns the first match in whatever order the store produced them -
//! callers must not assume stability of which pointer comes back across
//! calls. Zero matches is a hard failure of the merge attempt.

use crate::engine::BoxFuture;
use crate::error::{MergeError, Result};
use crate::workspace::{Workspace, WorkspaceId, WorkspacePointer};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Seam to pointer record storage.
///
/// Pointer lifecycle is owned by workspace management; this crate only
/// queries the reverse index.
pub trait PointerStore: Send + Sync {
    /// All pointer records whose target workspace identity equals `id`.
    /// Order is unspecified.
    fn find_by_workspace_id(&self, id: &WorkspaceId) -> BoxFuture<'_, Vec<WorkspacePointer>>;
}

/// In-memory pointer store for embedding and tests.
pub struct InMemoryPointerStore {
    records: RwLock<Vec<WorkspacePointer>>,
}

impl InMemoryPointerStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Add a pointer record.
    pub async fn insert(&self, pointer: WorkspacePointer) {
        self.records.write().await.push(pointer);
    }

    /// Remove a pointer record by its own identity. Returns whether a
    /// record was removed.
    pub async fn remove(&self, pointer_id: &str) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|p| p.id != pointer_id);
        records.len() != before
    }
}

impl Default for InMemoryPointerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerStore for InMemoryPointerStore {
    fn find_by_workspace_id(&self, id: &WorkspaceId) -> BoxFuture<'_, Vec<WorkspacePointer>> {
        let id = id.clone();
        Box::pin(async move {
            let records = self.records.read().await;
            Ok(records
                .iter()
                .filter(|p| p.workspace_id == id)
                .cloned()
                .collect())
        })
    }
}

/// Resolves a workspace to its replication-endpoint pointer.
#[derive(Clone)]
pub struct PointerRegistry {
    store: Arc<dyn PointerStore>,
}

impl PointerRegistry {
    pub fn new(store: Arc<dyn PointerStore>) -> Self {
        Self { store }
    }

    /// Find a pointer referencing `workspace`.
    ///
    /// If several records reference the workspace, an arbitrary one of them
    /// is returned ("first of N, unordered") and the ambiguity is logged.
    /// Fails with [`MergeError::PointerNotFound`] if none exist.
    pub async fn find_pointer_for(&self, workspace: &Workspace) -> Result<WorkspacePointer> {
        let matches = self.store.find_by_workspace_id(&workspace.id).await?;

        if matches.len() > 1 {
            warn!(
                workspace = %workspace.id,
                count = matches.len(),
                "Multiple pointers reference this workspace, picking the first"
            );
            crate::metrics::record_pointer_ambiguity(workspace.id.as_str());
        }

        match matches.into_iter().next() {
            Some(pointer) => {
                debug!(workspace = %workspace.id, pointer = %pointer.id, "Resolved workspace pointer");
                Ok(pointer)
            }
            None => Err(MergeError::PointerNotFound {
                workspace: workspace.id.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn registry_with(pointers: Vec<WorkspacePointer>) -> PointerRegistry {
        let store = InMemoryPointerStore::new();
        for pointer in pointers {
            store.insert(pointer).await;
        }
        PointerRegistry::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_resolves_single_pointer() {
        let registry = registry_with(vec![WorkspacePointer::new("ptr-1", "stage", "Stage")]).await;
        let ws = Workspace::new("stage", "Stage");

        let pointer = registry.find_pointer_for(&ws).await.unwrap();
        assert_eq!(pointer.id, "ptr-1");
    }

    #[tokio::test]
    async fn test_resolves_one_of_duplicates() {
        let registry = registry_with(vec![
            WorkspacePointer::new("ptr-1", "stage", "Stage"),
            WorkspacePointer::new("ptr-2", "stage", "Stage (mirror)"),
        ])
        .await;
        let ws = Workspace::new("stage", "Stage");

        let pointer = registry.find_pointer_for(&ws).await.unwrap();
        assert!(pointer.id == "ptr-1" || pointer.id == "ptr-2");
    }

    #[tokio::test]
    async fn test_missing_pointer_is_not_found() {
        let registry = registry_with(vec![WorkspacePointer::new("ptr-1", "live", "Live")]).await;
        let ws = Workspace::new("stage", "Stage");

        let err = registry.find_pointer_for(&ws).await.unwrap_err();
        assert!(matches!(err, MergeError::PointerNotFound { .. }));
        assert!(err.to_string().contains("stage"));
    }

    #[tokio::test]
    async fn test_ignores_pointers_to_other_workspaces() {
        let registry = registry_with(vec![
            WorkspacePointer::new("ptr-live", "live", "Live"),
            WorkspacePointer::new("ptr-stage", "stage", "Stage"),
        ])
        .await;
        let ws = Workspace::new("stage", "Stage");

        let pointer = registry.find_pointer_for(&ws).await.unwrap();
        assert_eq!(pointer.id, "ptr-stage");
    }

    #[tokio::test]
    async fn test_store_remove() {
        let store = InMemoryPointerStore::new();
        store
            .insert(WorkspacePointer::new("ptr-1", "stage", "Stage"))
            .await;

        assert!(store.remove("ptr-1").await);
        assert!(!store.remove("ptr-1").await);

        let matches = store
            .find_by_workspace_id(&WorkspaceId::new("stage"))
            .await
            .unwrap();
        assert!(matches.is_empty());
    }
}
