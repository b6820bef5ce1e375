use tracing::info;

use crate::{
    framework::StateResult,
    transactions::get_json,
    workflow::{Repository, WorkflowRun, api::GithubApi},
};

/// Fetches a single workflow run by its id.
///
/// # Errors
///
/// Returns an error that instructs retrying or cancelling if fetching the run fails.
pub async fn fetch_workflow_run(
    api: &GithubApi,
    repository: &Repository,
    run_id: u64,
) -> StateResult<WorkflowRun> {
    let run: WorkflowRun = get_json(
        api,
        &format!("/repos/{repository}/actions/runs/{run_id}"),
        &[],
        "workflow run",
    )
    .await?;

    info!("fetched workflow run {run}");
    Ok(run)
}
