//! Errors surfaced while resolving and reporting run history.

use thiserror::Error;

/// An error that ends the current resolve and report pass.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The current run is missing from the history of its own branch.
    #[error("could not find current run {run_id} in the workflow history")]
    RunNotFound {
        /// The id of the run that was looked up.
        run_id: u64,
    },

    /// A run lacks a field the resolver or the report depends on.
    #[error("run {run_id} is missing required field `{field}`")]
    MalformedRun {
        /// The id of the offending run.
        run_id: u64,
        /// The name of the missing field.
        field: &'static str,
    },

    /// No workflow of the repository has the requested name.
    #[error("no workflow with name '{name}' found")]
    WorkflowNotFound {
        /// The requested workflow name.
        name: String,
    },

    /// The repository is not given as `owner/repo`.
    #[error("invalid repository '{0}', expected 'owner/repo'")]
    InvalidRepository(String),

    /// A required configuration value is not set.
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),

    /// The run history provider could not deliver the requested data.
    #[error("failed to fetch {what} from GitHub")]
    Provider {
        /// What was being fetched.
        what: String,
    },
}

/// Result type for run history operations.
pub type Result<T> = std::result::Result<T, Error>;
