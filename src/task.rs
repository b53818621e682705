// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Replication task descriptors.
//!
//! A [`ReplicationTask`] is an immutable, derived configuration value
//! describing how one replication run should behave: which documents to
//! select on each side, which direction to transfer in, and how to resolve
//! conflicts. Tasks are built fresh per merge attempt by the [`TaskBuilder`]
//! and have no independent lifecycle or storage.
//!
//! The task is opaque to the merge coordinator beyond being a valid
//! argument to the replication engine.

use crate::config::ReplicationProfiles;
use crate::error::{MergeError, Result};
use crate::workspace::Workspace;
use serde::{Deserialize, Serialize};

/// Transfer direction of a replication run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Transfer from the workspace into its upstream (publication).
    #[default]
    Push,
    /// Transfer from the upstream into the workspace (refresh).
    Pull,
}

/// Conflict resolution policy applied by the engine during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// The replicating workspace's revision wins.
    #[default]
    SourceWins,
    /// The upstream's revision wins.
    TargetWins,
    /// Conflicting documents are left for manual resolution.
    Manual,
}

/// Immutable descriptor for one replication run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationTask {
    /// Name of the profile this task was derived from.
    pub profile: String,

    /// Document selector applied on the source side.
    pub source_filter: String,

    /// Document selector applied on the target side.
    pub target_filter: String,

    /// Transfer direction.
    pub direction: Direction,

    /// Conflict resolution policy.
    pub conflict_policy: ConflictPolicy,
}

/// Builds [`ReplicationTask`]s from named static profiles.
///
/// A profile supplies the static parts of the descriptor; the workspace
/// contributes its own override (its identity is substituted into the
/// source filter). No side effects.
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    profiles: ReplicationProfiles,
}

impl TaskBuilder {
    pub fn new(profiles: ReplicationProfiles) -> Self {
        Self { profiles }
    }

    /// Derive a task for `workspace` from the named profile.
    ///
    /// Fails with a configuration error if no profile with that name is
    /// known.
    pub fn build(&self, workspace: &Workspace, profile_name: &str) -> Result<ReplicationTask> {
        let profile = self.profiles.get(profile_name).ok_or_else(|| {
            MergeError::Configuration(format!("unknown replication profile '{profile_name}'"))
        })?;

        Ok(ReplicationTask {
            profile: profile_name.to_string(),
            source_filter: profile.source_filter_for(&workspace.id),
            target_filter: profile.target_filter.clone(),
            direction: profile.direction,
            conflict_policy: profile.conflict_policy,
        })
    }
}
