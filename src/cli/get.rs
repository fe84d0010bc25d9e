//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get deployment environments across projects
    #[command(
        visible_alias = "env",
        visible_alias = "envs",
        visible_alias = "environments"
    )]
    Environment(EnvironmentArgs),
}

/// Arguments for 'get environment' subcommand
#[derive(Parser, Debug)]
pub struct EnvironmentArgs {
    /// Only include projects whose path contains this namespace/group
    /// (case-insensitive substring match)
    #[arg(short, long)]
    pub namespace: Option<String>,
}
