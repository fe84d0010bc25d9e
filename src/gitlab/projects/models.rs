//! Project data models

use serde::Deserialize;

/// Project data from the GitLab API
#[derive(Deserialize, Debug, Clone)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub path_with_namespace: String,
}

impl Project {
    /// Check whether the project belongs to a namespace filter
    ///
    /// Matches as a case-insensitive substring of the full project path,
    /// so "team-a" matches both "team-a/svc1" and "org/team-a/svc1".
    pub fn matches_namespace(&self, filter: &str) -> bool {
        self.path_with_namespace
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}
