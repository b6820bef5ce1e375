use tracing::{info, warn};

use crate::{
    framework::StateResult,
    transactions::get_json,
    workflow::{Repository, Workflow, Workflows, api::GithubApi},
};

/// Finds the workflow of a repository by its display name, or [`None`] if no workflow has it.
///
/// # Errors
///
/// Returns an error that instructs retrying or cancelling if fetching the workflows fails.
pub async fn find_workflow_by_name(
    api: &GithubApi,
    repository: &Repository,
    name: &str,
) -> StateResult<Option<Workflow>> {
    let workflows: Workflows = get_json(
        api,
        &format!("/repos/{repository}/actions/workflows"),
        &[("per_page", "100")],
        "workflows",
    )
    .await?;

    let workflow = workflows
        .workflows
        .into_iter()
        .find(|workflow| workflow.name == name);

    match &workflow {
        Some(workflow) => info!("found workflow {workflow}"),
        None => warn!("no workflow with name '{name}' found in {repository}!"),
    }
    Ok(workflow)
}
