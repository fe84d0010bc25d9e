/// Configuration constants for the GitLab API
pub mod api {
    /// Base path for GitLab API v4
    pub const BASE_PATH: &str = "/api/v4";

    /// Projects endpoint
    pub const PROJECTS: &str = "projects";

    /// Environments endpoint (nested under a project)
    pub const ENVIRONMENTS: &str = "environments";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Maximum concurrent per-project environment fetches.
    ///
    /// Each fetch may itself walk several pages, so this stays modest to
    /// avoid tripping GitLab rate limits.
    pub const MAX_CONCURRENT_ENVIRONMENT_REQUESTS: usize = 8;

    /// Maximum concurrent per-environment deployment-detail fetches.
    ///
    /// These are single GETs, so a higher limit than the environment
    /// fan-out is safe.
    pub const MAX_CONCURRENT_DEPLOYMENT_REQUESTS: usize = 16;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Path to the config file on Unix (relative to HOME)
    pub const FILE_PATH: &str = ".config/gitlab.toml";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["GITLABCTL_TOKEN", "GITLAB_TOKEN"];

    /// Environment variable name for host
    pub const HOST_ENV_VAR: &str = "GITLAB_HOST";
}

/// Default values for CLI
pub mod defaults {
    /// Default GitLab host
    pub const HOST: &str = "gitlab.com";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
