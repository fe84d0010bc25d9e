//! GitLab HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{GitlabError, Result};

/// GitLab API client
pub struct GitlabClient {
    client: Client,
    token: String,
    host: String,
}

impl GitlabClient {
    /// Create a new GitLab client with optimized connection settings
    pub fn new(token: String, host: String) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections across fan-out stages
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            // TCP keepalive to maintain connections
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
        }
    }

    /// Create a client pointed at a mock server (for testing)
    #[cfg(test)]
    pub(crate) fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url.to_string())
    }

    /// Build the base URL for API requests
    ///
    /// A host given as a full URL (e.g. `http://127.0.0.1:8080`) is used
    /// verbatim; a bare host name gets `https://` prepended.
    pub(crate) fn base_url(&self) -> String {
        if self.host.contains("://") {
            format!("{}{}", self.host.trim_end_matches('/'), api::BASE_PATH)
        } else {
            format!("https://{}{}", self.host, api::BASE_PATH)
        }
    }

    /// Create a GET request builder with the auth header
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).header("PRIVATE-TOKEN", &self.token)
    }

    /// Fetch all pages from a paginated list endpoint
    ///
    /// Walks `page=1, 2, ...` sequentially, following the `x-next-page`
    /// response header GitLab sets on list responses. The walk stops when
    /// that header is absent, empty, or non-numeric, or when a page comes
    /// back with zero items. Item counts are never compared against the
    /// requested page size; short pages are appended like any other.
    ///
    /// Any page failing with a non-success status or an undecodable body
    /// fails the whole fetch. No partial results are returned.
    ///
    /// # Arguments
    /// * `path` - API path relative to the base URL (may carry query params)
    /// * `error_context` - Context for error messages (e.g., "projects")
    pub async fn fetch_all_pages<T>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let separator = if path.contains('?') { '&' } else { '?' };
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            let url = format!(
                "{}{}{}per_page={}&page={}",
                self.base_url(),
                path,
                separator,
                api::DEFAULT_PAGE_SIZE,
                page
            );
            debug!("Fetching page {} from: {}", page, url);

            let response = self.get(&url).send().await?;
            if !response.status().is_success() {
                return Err(GitlabError::Api {
                    status: response.status().as_u16(),
                    message: format!("Failed to fetch {} (page {})", error_context, page),
                });
            }

            let next_page = response
                .headers()
                .get("x-next-page")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u32>().ok());

            let body = response.text().await?;
            let page_items: Vec<T> = serde_json::from_str(&body).map_err(|e| {
                GitlabError::Decode(format!("{} (page {}): {}", error_context, page, e))
            })?;

            let page_was_empty = page_items.is_empty();
            items.extend(page_items);

            match next_page {
                Some(next) if !page_was_empty => page = next,
                _ => break,
            }
        }

        debug!("Fetched {} {} in total", items.len(), error_context);
        Ok(items)
    }

    /// Fetch a single resource from a detail endpoint
    pub async fn fetch_one<T>(&self, path: &str, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching: {}", url);

        let response = self.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(GitlabError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| GitlabError::Decode(format!("{}: {}", error_context, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_bare_host() {
        let client = GitlabClient::new("token".to_string(), "gitlab.example.com".to_string());
        assert_eq!(client.base_url(), "https://gitlab.example.com/api/v4");
    }

    #[test]
    fn test_base_url_full_url() {
        let client = GitlabClient::new("token".to_string(), "http://127.0.0.1:9999".to_string());
        assert_eq!(client.base_url(), "http://127.0.0.1:9999/api/v4");
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let client = GitlabClient::new("token".to_string(), "http://127.0.0.1:9999/".to_string());
        assert_eq!(client.base_url(), "http://127.0.0.1:9999/api/v4");
    }
}
