//! Environment and deployment data models

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Environment data from the GitLab API (list endpoint)
#[derive(Deserialize, Debug, Clone)]
pub struct Environment {
    pub id: u64,
    pub name: String,
}

/// An environment paired with the id of its owning project
///
/// The project id is the foreign key the aggregator resolves against the
/// discovered project set.
#[derive(Debug, Clone)]
pub struct ProjectEnvironment {
    pub project_id: u64,
    pub environment: Environment,
}

/// Environment detail from the GitLab API (single-environment endpoint)
///
/// Only this detail endpoint carries `last_deployment`; the list endpoint
/// omits it, which is why each environment is fetched a second time.
#[derive(Deserialize, Debug, Clone)]
pub struct EnvironmentDetail {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub last_deployment: Option<Deployment>,
}

/// Latest deployment of an environment
#[derive(Deserialize, Debug, Clone)]
pub struct Deployment {
    pub iid: u64,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub created_at: DateTime<Utc>,
    pub user: Deployer,
    #[serde(default)]
    pub deployable: Option<Deployable>,
}

/// The user who triggered a deployment
#[derive(Deserialize, Debug, Clone)]
pub struct Deployer {
    pub username: String,
}

/// The CI job that performed a deployment
#[derive(Deserialize, Debug, Clone)]
pub struct Deployable {
    #[serde(default)]
    pub commit: Option<Commit>,
}

/// Commit info attached to a deployable
#[derive(Deserialize, Debug, Clone)]
pub struct Commit {
    pub short_id: Option<String>,
}

impl Deployment {
    /// Label shown in the DEPLOYMENT column: "<iid> by <username>"
    pub fn label(&self) -> String {
        format!("{} by {}", self.iid, self.user.username)
    }

    /// Short SHA of the deployed commit, if the deployable carries one
    pub fn short_sha(&self) -> Option<&str> {
        self.deployable
            .as_ref()?
            .commit
            .as_ref()?
            .short_id
            .as_deref()
    }
}
