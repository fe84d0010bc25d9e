//! Token and host resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{credentials, defaults};
use crate::error::{GitlabError, Result};

/// Config file structure (`~/.config/gitlab.toml`)
#[derive(Deserialize, Debug)]
struct ConfigFile {
    server: Option<String>,
    access_token: Option<String>,
}

/// Read and parse the config file, if present
///
/// A missing or unreadable file is not an error (resolution falls through
/// to the next source); a file that exists but does not parse is.
fn read_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            debug!("No config file at: {}", path.display());
            return Ok(None);
        }
    };

    let config: ConfigFile = toml::from_str(&content).map_err(|e| {
        GitlabError::Credentials(format!(
            "Could not parse config file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(Some(config))
}

/// Default config file location (relative to HOME)
fn config_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(credentials::FILE_PATH))
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (GITLABCTL_TOKEN, GITLAB_TOKEN - in order)
    /// 3. Config file (~/.config/gitlab.toml, key `access_token`)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        // 1. CLI argument takes precedence
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        // 2. Environment variables (try in order)
        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                debug!("Using token from {} environment variable", env_var);
                return Ok(token);
            }
        }

        // 3. Config file
        debug!(
            "No token found in environment variables {:?}, trying config file",
            credentials::TOKEN_ENV_VARS
        );
        let path = config_file_path()
            .ok_or_else(|| GitlabError::TokenNotFound(self.token_not_found_message(None)))?;
        self.read_from_config_file(&path)
    }

    /// Read token from the config file
    fn read_from_config_file(&self, path: &Path) -> Result<String> {
        match read_config_file(path)? {
            Some(ConfigFile {
                access_token: Some(token),
                ..
            }) => {
                debug!("Using token from config file {}", path.display());
                Ok(token)
            }
            _ => Err(GitlabError::TokenNotFound(
                self.token_not_found_message(Some(path)),
            )),
        }
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self, config_path: Option<&Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let config_info = config_path
            .map(|p| format!(" and config file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      gitlabctl --token <TOKEN>\n\
             2. Environment var:   export GITLAB_TOKEN=<TOKEN>  (also: GITLABCTL_TOKEN)\n\
             3. Config file:       access_token = \"<TOKEN>\" in ~/{}\n\
             \n\
             Checked: env vars [{}]{}",
            self.host,
            credentials::FILE_PATH,
            env_vars,
            config_info
        )
    }
}

/// Host resolution with fallback logic
pub struct HostResolver;

impl HostResolver {
    /// Resolve host from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. GITLAB_HOST environment variable
    /// 3. Config file (~/.config/gitlab.toml, key `server`)
    /// 4. Default host (gitlab.com)
    pub fn resolve(cli_host: Option<&str>) -> Result<String> {
        // 1. CLI argument takes precedence
        if let Some(host) = cli_host {
            debug!("Using host from CLI argument: {}", host);
            return Ok(host.to_string());
        }

        // 2. Environment variable
        if let Ok(host) = std::env::var(credentials::HOST_ENV_VAR) {
            debug!(
                "Using host from {} environment variable: {}",
                credentials::HOST_ENV_VAR,
                host
            );
            return Ok(host);
        }

        // 3. Config file
        if let Some(path) = config_file_path() {
            if let Some(ConfigFile {
                server: Some(server),
                ..
            }) = read_config_file(&path)?
            {
                debug!("Using host from config file {}: {}", path.display(), server);
                return Ok(server);
            }
        }

        // 4. Default
        debug!("No host configured, using default: {}", defaults::HOST);
        Ok(defaults::HOST.to_string())
    }
}
