//! Environment API operations

use crate::config::api;
use crate::error::Result;
use crate::gitlab::GitlabClient;

use super::models::{Environment, EnvironmentDetail};

impl GitlabClient {
    /// Get all environments of a project (with pagination)
    pub async fn get_environments(&self, project_id: u64) -> Result<Vec<Environment>> {
        let path = format!("/{}/{}/{}", api::PROJECTS, project_id, api::ENVIRONMENTS);
        let error_context = format!("environments for project {}", project_id);
        self.fetch_all_pages::<Environment>(&path, &error_context)
            .await
    }

    /// Get one environment's detail, including its latest deployment
    pub async fn get_environment_detail(
        &self,
        project_id: u64,
        environment_id: u64,
    ) -> Result<EnvironmentDetail> {
        let path = format!(
            "/{}/{}/{}/{}",
            api::PROJECTS,
            project_id,
            api::ENVIRONMENTS,
            environment_id
        );
        let error_context = format!(
            "deployment detail for environment {} (project {})",
            environment_id, project_id
        );
        self.fetch_one::<EnvironmentDetail>(&path, &error_context)
            .await
    }
}
