//! Places the current run among the earlier runs of its branch.
//!
//! See: [`resolve`], [`Resolution`]

use tracing::debug;

use crate::{error::Error, workflow::WorkflowRun};

/// How the current run relates to the runs before it on the same branch.
///
/// The four shapes line up with the four ways a report can read.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// No earlier run exists on the branch.
    FirstRun,
    /// The immediate predecessor succeeded.
    PreviousSucceeded {
        /// The run right before the current one.
        previous: &'a WorkflowRun,
    },
    /// The immediate predecessor did not succeed, and neither did any run before it.
    NoSuccessfulRun {
        /// The run right before the current one.
        previous: &'a WorkflowRun,
    },
    /// The immediate predecessor did not succeed, but an earlier run did.
    LastSuccessful {
        /// The run right before the current one.
        previous: &'a WorkflowRun,
        /// The nearest earlier run that succeeded.
        last_successful: &'a WorkflowRun,
    },
}

impl<'a> Resolution<'a> {
    /// The run right before the current one, if any.
    pub fn previous_run(&self) -> Option<&'a WorkflowRun> {
        match *self {
            Self::FirstRun => None,
            Self::PreviousSucceeded { previous }
            | Self::NoSuccessfulRun { previous }
            | Self::LastSuccessful { previous, .. } => Some(previous),
        }
    }

    /// The nearest successful run before an unsuccessful predecessor, if any.
    pub fn last_successful_run(&self) -> Option<&'a WorkflowRun> {
        match *self {
            Self::LastSuccessful {
                last_successful, ..
            } => Some(last_successful),
            _ => None,
        }
    }
}

/// Resolves the predecessor of `current` among `runs` and, when that predecessor did not succeed,
/// the last run before it that did.
///
/// Only runs on the branch of `current` are considered, ordered by run number regardless of the
/// order of `runs`. `current` is matched by id, so `runs` may hold a separately fetched copy.
///
/// # Errors
///
/// Returns [`Error::MalformedRun`] if `current` has no branch, or [`Error::RunNotFound`] if it is
/// not among `runs`.
pub fn resolve<'a>(
    current: &WorkflowRun,
    runs: &'a [WorkflowRun],
) -> Result<Resolution<'a>, Error> {
    let branch = current
        .head_branch
        .as_deref()
        .ok_or(Error::MalformedRun {
            run_id: current.id,
            field: "head_branch",
        })?;

    let mut relevant: Vec<&WorkflowRun> = runs
        .iter()
        .filter(|run| run.is_on_branch(branch))
        .collect();
    relevant.sort_by_key(|run| run.run_number);
    debug!("found {} runs on branch {branch}", relevant.len());

    let position = relevant
        .iter()
        .position(|run| run.id == current.id)
        .ok_or(Error::RunNotFound { run_id: current.id })?;

    let Some(previous_position) = position.checked_sub(1) else {
        debug!("run {current} is the first run on branch {branch}");
        return Ok(Resolution::FirstRun);
    };
    let previous = relevant[previous_position];

    let resolution = if previous.succeeded() {
        Resolution::PreviousSucceeded { previous }
    } else {
        match relevant[..previous_position]
            .iter()
            .rev()
            .copied()
            .find(|run| run.succeeded())
        {
            Some(last_successful) => Resolution::LastSuccessful {
                previous,
                last_successful,
            },
            None => Resolution::NoSuccessfulRun { previous },
        }
    };

    debug!("resolved history of run {current}: {resolution:?}");
    Ok(resolution)
}
