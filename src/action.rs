//! Ties the provider, the resolver and the formatter together for one run.

use tracing::info;

use crate::{
    error::Error,
    framework::retrying,
    history::resolve,
    report::{CompareBase, format_report},
    transactions::{fetch_workflow_run, fetch_workflow_runs, find_workflow_by_name},
    workflow::{Repository, api::GithubApi},
};

/// Identifies the run to report on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// The repository the workflow belongs to.
    pub repository: Repository,
    /// The display name of the workflow.
    pub workflow: String,
    /// The id of the current run.
    pub run_id: u64,
}

/// Fetches the history of the current run from GitHub and reports on it.
///
/// Comparison links in the report point to `server_url`.
///
/// # Errors
///
/// Returns [`Error::Provider`] if GitHub cannot deliver the data, [`Error::WorkflowNotFound`] if
/// no workflow has the name in `context`, or any error of [`resolve`].
pub async fn previous_run_report(
    api: &GithubApi,
    server_url: &str,
    context: &Context,
) -> anyhow::Result<String> {
    let Context {
        repository,
        workflow,
        run_id,
    } = context;

    let current = retrying(format!("fetching run {run_id}"), || {
        fetch_workflow_run(api, repository, *run_id)
    })
    .await
    .map_err(|_| provider_error(format!("run {run_id}")))?;

    let workflow = retrying(format!("finding workflow '{workflow}'"), || {
        find_workflow_by_name(api, repository, workflow)
    })
    .await
    .map_err(|_| provider_error(format!("workflows of {repository}")))?
    .ok_or_else(|| Error::WorkflowNotFound {
        name: workflow.clone(),
    })?;

    let branch = current.head_branch.as_deref();
    let runs = retrying(format!("fetching runs of {workflow}"), || {
        fetch_workflow_runs(api, repository, workflow.id, branch)
    })
    .await
    .map_err(|_| provider_error(format!("runs of workflow {}", workflow.id)))?;

    let resolution = resolve(&current, &runs)?;
    info!("resolved history of run {current}");

    Ok(format_report(
        &current,
        resolution,
        CompareBase {
            server_url,
            repository,
        },
    ))
}

fn provider_error(what: String) -> Error {
    Error::Provider { what }
}
