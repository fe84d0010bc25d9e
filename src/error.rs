use std::fmt;

/// Custom error type for GitLab operations
#[derive(Debug)]
pub enum GitlabError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Response body could not be decoded into the expected shape
    Decode(String),
    /// An environment references a project missing from the discovered set
    Resolution { environment: String, project_id: u64 },
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse the config file
    Credentials(String),
}

impl fmt::Display for GitlabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitlabError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GitlabError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            GitlabError::Decode(msg) => write!(f, "Decode error: {}", msg),
            GitlabError::Resolution {
                environment,
                project_id,
            } => write!(
                f,
                "environment '{}' references unknown project {}",
                environment, project_id
            ),
            GitlabError::TokenNotFound(msg) => write!(f, "{}", msg),
            GitlabError::Credentials(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GitlabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GitlabError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GitlabError {
    fn from(err: reqwest::Error) -> Self {
        GitlabError::Http(err)
    }
}

impl From<std::io::Error> for GitlabError {
    fn from(err: std::io::Error) -> Self {
        GitlabError::Credentials(err.to_string())
    }
}

/// Result type alias for GitLab operations
pub type Result<T> = std::result::Result<T, GitlabError>;
