use tracing::{info, warn};

use crate::{
    framework::StateResult,
    transactions::get_json,
    workflow::{Repository, WorkflowRun, WorkflowRuns, api::GithubApi},
};

/// The page size requested from GitHub, which is also its maximum.
const PER_PAGE: &str = "100";

/// Fetches the runs of a workflow, narrowed to `branch` if given.
///
/// Only the first page is requested, holding the most recent runs.
///
/// # Errors
///
/// Returns an error that instructs retrying or cancelling if fetching the runs fails.
pub async fn fetch_workflow_runs(
    api: &GithubApi,
    repository: &Repository,
    workflow_id: u64,
    branch: Option<&str>,
) -> StateResult<Vec<WorkflowRun>> {
    let mut query = vec![("per_page", PER_PAGE)];
    if let Some(branch) = branch {
        query.push(("branch", branch));
    }

    let runs: WorkflowRuns = get_json(
        api,
        &format!("/repos/{repository}/actions/workflows/{workflow_id}/runs"),
        &query,
        "workflow runs",
    )
    .await?;

    if runs.total_count > u64::try_from(runs.workflow_runs.len()).unwrap_or(u64::MAX) {
        warn!(
            "workflow {workflow_id} has {} runs, only the latest {} are considered",
            runs.total_count,
            runs.workflow_runs.len()
        );
    }
    match runs.workflow_runs.len() {
        1 => info!("fetched 1 run of workflow {workflow_id}"),
        count => info!("fetched {count} runs of workflow {workflow_id}"),
    }

    Ok(runs.workflow_runs)
}
