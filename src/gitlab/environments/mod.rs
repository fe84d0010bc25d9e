//! Environment module

mod api;
mod commands;
mod models;

pub use commands::run_env_command;
pub use models::{Deployment, Environment, EnvironmentDetail, ProjectEnvironment};
