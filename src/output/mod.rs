//! Row aggregation and output formatting
//!
//! Joins the three fetched result sets into display rows and renders them
//! as an aligned table.

mod table;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;
use log::warn;

use crate::error::GitlabError;
use crate::gitlab::environments::{Deployment, ProjectEnvironment};
use crate::gitlab::projects::Project;

pub use table::{print_table, render_table};

/// Flattened environment data for one table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentRow {
    pub project: String,
    pub environment: String,
    pub deployment: String,
    pub commit: String,
    pub updated: String,
}

/// Join projects, environments, and deployment details into sorted rows
///
/// Each environment resolves its owning project by id. An environment whose
/// project is missing from the discovered set is dropped with a warning (an
/// upstream data inconsistency, not a client bug). An environment without
/// deployment info keeps its row with blank deployment/commit/updated
/// fields. Rows come back sorted by (project path, environment name), so the
/// output is stable regardless of fetch completion order.
pub fn build_rows(
    projects: &[Project],
    environments: &[ProjectEnvironment],
    deployments: &HashMap<u64, Deployment>,
    now: DateTime<Utc>,
) -> Vec<EnvironmentRow> {
    let projects_by_id: HashMap<u64, &Project> = projects.iter().map(|p| (p.id, p)).collect();

    let mut rows: Vec<EnvironmentRow> = environments
        .iter()
        .filter_map(|pe| {
            let Some(project) = projects_by_id.get(&pe.project_id) else {
                warn!(
                    "Dropping row: {}",
                    GitlabError::Resolution {
                        environment: pe.environment.name.clone(),
                        project_id: pe.project_id,
                    }
                );
                return None;
            };

            let deployment = deployments.get(&pe.environment.id);
            Some(EnvironmentRow {
                project: project.path_with_namespace.clone(),
                environment: pe.environment.name.clone(),
                deployment: deployment.map(Deployment::label).unwrap_or_default(),
                commit: deployment
                    .and_then(|d| d.short_sha())
                    .unwrap_or_default()
                    .to_string(),
                updated: deployment
                    .map(|d| relative_age(d.created_at, now))
                    .unwrap_or_default(),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        (a.project.as_str(), a.environment.as_str())
            .cmp(&(b.project.as_str(), b.environment.as_str()))
    });

    rows
}

/// Human-readable age of a timestamp relative to `now`
///
/// Deterministic for a fixed `now`: "19 hours ago", "a week ago", ...
/// Thresholds are chrono-humanize's rough humanization scale.
pub fn relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    HumanTime::from(timestamp.signed_duration_since(now)).to_string()
}
