//! gitlabctl - Aggregate deployment environments across GitLab projects
//!
//! A CLI tool that discovers every project visible to a token, fans out to
//! fetch each project's environments and their latest deployments, and
//! renders the joined result as one sorted, colorized table.
//!
//! # Features
//!
//! - Single table across all projects, sorted by project path and environment
//! - Optional namespace/group filter
//! - Concurrent fetching with bounded parallelism
//! - Automatic pagination handling
//! - Per-resource failures reported without aborting the run
//!
//! # Example
//!
//! ```bash
//! # List all environments across every visible project
//! gitlabctl get environments
//!
//! # Restrict to one namespace/group
//! gitlabctl get envs -n team-a
//!
//! # Against a self-hosted instance
//! gitlabctl -H gitlab.internal.example.com get env
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gitlab;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, EnvironmentArgs, GetResource};
pub use error::{GitlabError, Result};
pub use gitlab::{
    run_env_command, Deployment, Environment, GitlabClient, HostResolver, Project,
    ProjectEnvironment, TokenResolver,
};
pub use output::{build_rows, print_table, relative_age, EnvironmentRow};
