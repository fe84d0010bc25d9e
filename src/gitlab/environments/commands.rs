//! Environment command handlers
//!
//! The `get environment` pipeline runs in strict stages: project discovery,
//! per-project environment discovery, per-environment deployment enrichment,
//! then aggregation and rendering. Each stage completes fully before the
//! next starts; only the two middle stages fan out concurrently.

use std::collections::HashMap;
use std::time::Instant;

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::gitlab::helpers::{collect_results, fetch_bounded, log_completion};
use crate::gitlab::projects::Project;
use crate::output::{build_rows, print_table};
use crate::ui::{create_spinner, finish_spinner};
use crate::{Cli, Command, GetResource, GitlabClient};

use super::models::{Deployment, ProjectEnvironment};

/// Run the environment list command
pub async fn run_env_command(
    client: &GitlabClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Environment(args),
    } = &cli.command;

    // Stage 1 failure is fatal: without the project set there is nothing
    // to join the rest of the pipeline against.
    let projects = discover_projects(client, args.namespace.as_deref(), cli.quiet).await?;

    let (environments, env_errors) = discover_environments(client, &projects, cli.quiet).await;
    let (deployments, deployment_errors) =
        enrich_deployments(client, &environments, cli.quiet).await;

    let rows = build_rows(&projects, &environments, &deployments, chrono::Utc::now());
    if rows.is_empty() {
        println!("There is nothing to show");
    } else {
        print_table(&rows);
    }

    log_completion(env_errors || deployment_errors);
    Ok(())
}

/// Discover all projects, optionally restricted to a namespace
async fn discover_projects(
    client: &GitlabClient,
    namespace: Option<&str>,
    quiet: bool,
) -> Result<Vec<Project>> {
    let started = Instant::now();
    let spinner = create_spinner("Fetching projects...", quiet);

    let result = client.get_projects().await;
    finish_spinner(spinner);
    let mut projects = result?;

    if let Some(filter) = namespace {
        projects.retain(|p| p.matches_namespace(filter));
        debug!(
            "{} projects left after namespace filter '{}'",
            projects.len(),
            filter
        );
    }

    println!(
        "Retrieved {} projects          [{:.2?}]",
        projects.len(),
        started.elapsed()
    );

    Ok(projects)
}

/// Fetch each project's environments concurrently
///
/// A project whose fetch fails contributes zero environments; the error is
/// reported to stderr and the run continues. Returns once every fetch has
/// completed, along with whether any of them failed.
async fn discover_environments(
    client: &GitlabClient,
    projects: &[Project],
    quiet: bool,
) -> (Vec<ProjectEnvironment>, bool) {
    let started = Instant::now();
    let spinner = create_spinner(
        &format!(
            "Fetching environments from {} project(s)...",
            projects.len()
        ),
        quiet,
    );

    let results = fetch_bounded(
        projects.to_vec(),
        api::MAX_CONCURRENT_ENVIRONMENT_REQUESTS,
        |project| async move {
            match client.get_environments(project.id).await {
                Ok(environments) => {
                    debug!(
                        "Found {} environments for project '{}'",
                        environments.len(),
                        project.path_with_namespace
                    );
                    Ok(environments
                        .into_iter()
                        .map(|environment| ProjectEnvironment {
                            project_id: project.id,
                            environment,
                        })
                        .collect::<Vec<_>>())
                }
                Err(e) => Err((format!("project '{}'", project.path_with_namespace), e)),
            }
        },
    )
    .await;

    let (batches, had_errors) = collect_results(results, &spinner, "environments");
    let environments: Vec<ProjectEnvironment> = batches.into_iter().flatten().collect();

    finish_spinner(spinner);
    println!(
        "Retrieved {} environments      [{:.2?}]",
        environments.len(),
        started.elapsed()
    );

    (environments, had_errors)
}

/// Fetch the latest deployment of each environment concurrently
///
/// Environments whose detail fetch fails, or that have never been deployed,
/// are simply absent from the returned map; the aggregator treats a missing
/// entry as "no deployment info".
async fn enrich_deployments(
    client: &GitlabClient,
    environments: &[ProjectEnvironment],
    quiet: bool,
) -> (HashMap<u64, Deployment>, bool) {
    let started = Instant::now();
    let spinner = create_spinner(
        &format!(
            "Fetching deployment details for {} environment(s)...",
            environments.len()
        ),
        quiet,
    );

    let results = fetch_bounded(
        environments.to_vec(),
        api::MAX_CONCURRENT_DEPLOYMENT_REQUESTS,
        |pe| async move {
            match client
                .get_environment_detail(pe.project_id, pe.environment.id)
                .await
            {
                Ok(detail) => Ok((pe.environment.id, detail.last_deployment)),
                Err(e) => Err((
                    format!(
                        "environment '{}' (project {})",
                        pe.environment.name, pe.project_id
                    ),
                    e,
                )),
            }
        },
    )
    .await;

    let (details, had_errors) = collect_results(results, &spinner, "deployment details");
    let deployments: HashMap<u64, Deployment> = details
        .into_iter()
        .filter_map(|(id, deployment)| deployment.map(|d| (id, d)))
        .collect();

    finish_spinner(spinner);
    println!("Retrieved deployment details   [{:.2?}]", started.elapsed());

    (deployments, had_errors)
}
