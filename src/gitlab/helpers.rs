//! Helper functions for concurrent fan-out stages
//!
//! These utilities support fetching data for many subjects (projects,
//! environments) in parallel with a bounded number of in-flight requests.

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use std::future::Future;

use crate::GitlabError;

/// Fan out one async fetch per item with bounded concurrency
///
/// The `fetcher` is called for each item and should return either the
/// fetched data or an error tuple pairing a subject label with the error.
/// At most `limit` fetches are in flight at a time. Returns once every
/// fetch has completed, success or failure; completion order is not
/// preserved.
pub async fn fetch_bounded<I, T, F, Fut>(
    items: Vec<I>,
    limit: usize,
    fetcher: F,
) -> Vec<Result<T, (String, GitlabError)>>
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<T, (String, GitlabError)>>,
{
    stream::iter(items.into_iter().map(fetcher))
        .buffer_unordered(limit)
        .collect()
        .await
}

/// Collect results from a fan-out stage
///
/// Returns a tuple of (successes, had_errors). Errors are printed to stderr,
/// respecting spinner suspension if a spinner is active.
pub fn collect_results<T>(
    results: Vec<Result<T, (String, GitlabError)>>,
    spinner: &Option<ProgressBar>,
    resource_name: &str,
) -> (Vec<T>, bool) {
    let mut successes = Vec::new();
    let mut had_errors = false;

    for result in results {
        match result {
            Ok(data) => successes.push(data),
            Err((subject, e)) => {
                had_errors = true;
                let msg = format!("Error fetching {} for {}:\n  {}\n", resource_name, subject, e);
                if let Some(ref s) = spinner {
                    s.suspend(|| eprintln!("{}", msg));
                } else {
                    eprintln!("{}", msg);
                }
            }
        }
    }

    (successes, had_errors)
}

/// Log completion status to info log
pub fn log_completion(had_errors: bool) {
    if had_errors {
        log::info!("Completed with some errors");
    } else {
        log::info!("Completed successfully");
    }
}
