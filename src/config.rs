//! Replication profile configuration.
//!
//! Profiles supply the static half of a [`ReplicationTask`](crate::task::ReplicationTask):
//! filter templates, direction and conflict policy. They can be constructed
//! programmatically or deserialized from JSON/YAML. The built-in
//! `push_replication_settings` profile drives the publication merge flow.
//!
//! # JSON Example
//!
//! ```json
//! {
//!   "profiles": {
//!     "push_replication_settings": {
//!       "source_filter": "workspace:{workspace}",
//!       "target_filter": "upstream",
//!       "direction": "push",
//!       "conflict_policy": "source_wins"
//!     }
//!   }
//! }
//! ```
//!
//! The `{workspace}` placeholder in a filter template is replaced with the
//! merging workspace's identity when a task is built.

use crate::task::{ConflictPolicy, Direction};
use crate::workspace::WorkspaceId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the profile used for the publication merge flow.
pub const PUSH_REPLICATION_SETTINGS: &str = "push_replication_settings";

/// Static configuration for one named replication profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Source-side filter template. `{workspace}` is replaced with the
    /// merging workspace's identity.
    #[serde(default = "default_source_filter")]
    pub source_filter: String,

    /// Target-side filter.
    #[serde(default = "default_target_filter")]
    pub target_filter: String,

    /// Transfer direction.
    #[serde(default)]
    pub direction: Direction,

    /// Conflict resolution policy.
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}

fn default_source_filter() -> String {
    "workspace:{workspace}".to_string()
}

fn default_target_filter() -> String {
    "upstream".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            source_filter: default_source_filter(),
            target_filter: default_target_filter(),
            direction: Direction::Push,
            conflict_policy: ConflictPolicy::SourceWins,
        }
    }
}

impl ProfileConfig {
    /// Resolve the source filter template for a concrete workspace.
    pub fn source_filter_for(&self, workspace_id: &WorkspaceId) -> String {
        self.source_filter.replace("{workspace}", workspace_id.as_str())
    }
}

/// The set of named replication profiles known to the task builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplicationProfiles {
    #[serde(default = "default_profiles")]
    profiles: HashMap<String, ProfileConfig>,
}

fn default_profiles() -> HashMap<String, ProfileConfig> {
    let mut profiles = HashMap::new();
    profiles.insert(PUSH_REPLICATION_SETTINGS.to_string(), ProfileConfig::default());
    profiles
}

impl Default for ReplicationProfiles {
    fn default() -> Self {
        Self {
            profiles: default_profiles(),
        }
    }
}

impl ReplicationProfiles {
    /// An empty profile set (no built-ins). Mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// Look up a profile by name.
    pub fn get(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.get(name)
    }

    /// Add or replace a named profile.
    pub fn insert(&mut self, name: impl Into<String>, profile: ProfileConfig) {
        self.profiles.insert(name.into(), profile);
    }

    /// Names of all known profiles (unordered).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contains_push_profile() {
        let profiles = ReplicationProfiles::default();
        let profile = profiles.get(PUSH_REPLICATION_SETTINGS).unwrap();
        assert_eq!(profile.source_filter, "workspace:{workspace}");
        assert_eq!(profile.target_filter, "upstream");
        assert_eq!(profile.direction, Direction::Push);
        assert_eq!(profile.conflict_policy, ConflictPolicy::SourceWins);
    }

    #[test]
    fn test_empty_has_no_profiles() {
        let profiles = ReplicationProfiles::empty();
        assert!(profiles.get(PUSH_REPLICATION_SETTINGS).is_none());
        assert_eq!(profiles.names().count(), 0);
    }

    #[test]
    fn test_source_filter_substitution() {
        let profile = ProfileConfig::default();
        let filter = profile.source_filter_for(&WorkspaceId::new("stage"));
        assert_eq!(filter, "workspace:stage");
    }

    #[test]
    fn test_source_filter_without_placeholder() {
        let profile = ProfileConfig {
            source_filter: "everything".to_string(),
            ..Default::default()
        };
        let filter = profile.source_filter_for(&WorkspaceId::new("stage"));
        assert_eq!(filter, "everything");
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut profiles = ReplicationProfiles::empty();
        profiles.insert("custom", ProfileConfig::default());
        assert!(profiles.get("custom").is_some());
        assert!(profiles.get("other").is_none());
    }

    #[test]
    fn test_profile_json_defaults() {
        // A profile with every field omitted falls back to the push defaults
        let profile: ProfileConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, ProfileConfig::default());
    }

    #[test]
    fn test_profiles_json_roundtrip() {
        let mut profiles = ReplicationProfiles::default();
        profiles.insert(
            "pull_refresh",
            ProfileConfig {
                direction: Direction::Pull,
                ..Default::default()
            },
        );

        let json = serde_json::to_string(&profiles).unwrap();
        let parsed: ReplicationProfiles = serde_json::from_str(&json).unwrap();

        assert!(parsed.get(PUSH_REPLICATION_SETTINGS).is_some());
        assert_eq!(parsed.get("pull_refresh").unwrap().direction, Direction::Pull);
    }

    #[test]
    fn test_profiles_json_missing_field_gets_builtins() {
        let parsed: ReplicationProfiles = serde_json::from_str("{}").unwrap();
        assert!(parsed.get(PUSH_REPLICATION_SETTINGS).is_some());
    }
}
