//! GitLab API client module
//!
//! This module provides functionality to interact with the GitLab v4 REST API.

mod client;
mod credentials;
pub mod environments;
pub mod helpers;
pub mod projects;

pub use client::GitlabClient;
pub use credentials::{HostResolver, TokenResolver};
pub use environments::{run_env_command, Deployment, Environment, ProjectEnvironment};
pub use projects::Project;
