//! Pre-made transactions against GitHub REST API.

mod fetch_workflow_run;
mod fetch_workflow_runs;
mod find_workflow_by_name;
mod get_json;

pub use fetch_workflow_run::*;
pub use fetch_workflow_runs::*;
pub use find_workflow_by_name::*;
pub use get_json::*;
