//! Project API operations

use crate::config::api;
use crate::error::Result;
use crate::gitlab::GitlabClient;

use super::models::Project;

impl GitlabClient {
    /// Get all projects visible to the token (with pagination)
    ///
    /// Uses `simple=true` to keep responses down to the basic project
    /// fields. Namespace filtering is applied client-side by the caller
    /// so behavior stays uniform across GitLab versions.
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        let path = format!("/{}?simple=true", api::PROJECTS);
        self.fetch_all_pages::<Project>(&path, "projects").await
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GitlabError;
    use crate::gitlab::GitlabClient;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn project_json(id: u64, path_with_namespace: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": path_with_namespace.rsplit('/').next().unwrap(),
            "path_with_namespace": path_with_namespace
        })
    }

    #[tokio::test]
    async fn test_get_projects() {
        let mock_server = MockServer::start().await;
        let client = GitlabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v4/projects"))
            .and(query_param("simple", "true"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                project_json(1, "team-a/svc1"),
                project_json(2, "team-b/svc3")
            ])))
            .mount(&mock_server)
            .await;

        let result = client.get_projects().await;

        assert!(result.is_ok());
        let projects = result.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].path_with_namespace, "team-a/svc1");
        assert_eq!(projects[1].id, 2);
    }

    #[tokio::test]
    async fn test_get_projects_paginated() {
        let mock_server = MockServer::start().await;
        let client = GitlabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v4/projects"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-next-page", "2")
                    .set_body_json(serde_json::json!([project_json(1, "team-a/svc1")])),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v4/projects"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([project_json(2, "team-a/svc2")])),
            )
            .mount(&mock_server)
            .await;

        let result = client.get_projects().await;

        assert!(result.is_ok());
        let projects = result.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].path_with_namespace, "team-a/svc1");
        assert_eq!(projects[1].path_with_namespace, "team-a/svc2");
    }

    #[tokio::test]
    async fn test_get_projects_api_error() {
        let mock_server = MockServer::start().await;
        let client = GitlabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v4/projects"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client.get_projects().await;

        assert!(result.is_err());
        match result.unwrap_err() {
            GitlabError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("projects"));
            }
            _ => panic!("Expected GitlabError::Api"),
        }
    }
}
