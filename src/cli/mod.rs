//! CLI argument parsing

mod get;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use get::{EnvironmentArgs, GetResource};

/// gitlabctl CLI
#[derive(Parser, Debug)]
#[command(name = "gitlabctl")]
#[command(version)]
#[command(about = "Aggregate deployment environments across GitLab projects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// GitLab host name or full base URL (e.g. gitlab.com or http://localhost:8080)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// API token (overrides env vars and the config file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Disable the progress spinner
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get resources from GitLab
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["gitlabctl"]).is_err());
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["gitlabctl", "get", "environment"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(cli.host.is_none());
        assert!(cli.token.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_global_args_before_subcommand() {
        let cli = Cli::parse_from([
            "gitlabctl",
            "-H",
            "gitlab.example.com",
            "-t",
            "glpat-abc",
            "-q",
            "get",
            "environment",
        ]);
        assert_eq!(cli.host.as_deref(), Some("gitlab.example.com"));
        assert_eq!(cli.token.as_deref(), Some("glpat-abc"));
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_global_args_after_subcommand() {
        let cli = Cli::parse_from(["gitlabctl", "get", "environment", "--host", "gitlab.internal"]);
        assert_eq!(cli.host.as_deref(), Some("gitlab.internal"));
    }

    #[test]
    fn test_cli_namespace_filter() {
        let cli = Cli::parse_from(["gitlabctl", "get", "environment", "-n", "team-a"]);
        let Command::Get {
            resource: GetResource::Environment(args),
        } = &cli.command;
        assert_eq!(args.namespace.as_deref(), Some("team-a"));
    }

    #[test]
    fn test_cli_environment_aliases() {
        for alias in ["environment", "env", "envs", "environments"] {
            let cli = Cli::try_parse_from(["gitlabctl", "get", alias]);
            assert!(cli.is_ok(), "alias '{}' should parse", alias);
        }
    }

    #[test]
    fn test_cli_log_level_override() {
        let cli = Cli::parse_from(["gitlabctl", "-l", "debug", "get", "environment"]);
        assert_eq!(cli.log_level, "debug");
    }
}
