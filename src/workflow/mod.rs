//! Data models of GitHub Actions workflows.

use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

use crate::error::Error;

#[cfg(feature = "workflow")]
pub mod api;

/// Represents a repository as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The account owning the repository.
    pub owner: String,
    /// The name of the repository.
    pub name: String,
}

impl FromStr for Repository {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_owned(),
                    name: name.to_owned(),
                })
            }
            _ => Err(Error::InvalidRepository(s.to_owned())),
        }
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Represents workflows from GitHub REST API.
#[derive(Debug, Deserialize, Clone)]
pub struct Workflows {
    pub total_count: u64,
    pub workflows: Vec<Workflow>,
}

/// Represents a workflow from GitHub REST API.
#[derive(Debug, Deserialize, Clone)]
pub struct Workflow {
    pub id: u64,
    pub name: String,
    pub path: String,
    pub state: String,
}

impl Display for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} at {})", self.name, self.id, self.path)
    }
}

/// Represents workflow runs from GitHub REST API.
#[derive(Debug, Deserialize, Clone)]
pub struct WorkflowRuns {
    pub total_count: u64,
    pub workflow_runs: Vec<WorkflowRun>,
}

/// Represents a GitHub Actions workflow run from GitHub REST API.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct WorkflowRun {
    pub id: u64,
    pub run_number: u64,
    #[serde(default)]
    pub name: Option<String>,
    pub head_branch: Option<String>,
    pub head_sha: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<String>,
    /// The terminal conclusion, or [`None`] while the run is still in progress.
    pub conclusion: Option<Conclusion>,
    pub html_url: String,
}

impl WorkflowRun {
    /// Whether the run concluded with [`Conclusion::Success`].
    pub fn succeeded(&self) -> bool {
        self.conclusion == Some(Conclusion::Success)
    }

    /// Whether the run ran on `branch`. Runs without a branch match none.
    pub fn is_on_branch(&self, branch: &str) -> bool {
        self.head_branch.as_deref() == Some(branch)
    }

    /// The creation time as GitHub prints it, e.g. `2024-03-01T09:30:00Z`.
    pub fn created_at_display(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl Display for WorkflowRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} ({} at {})", self.run_number, self.id, self.html_url)
    }
}

/// The conclusion of a completed workflow run.
#[non_exhaustive]
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Conclusion {
    Success,
    Failure,
    Neutral,
    Cancelled,
    Skipped,
    TimedOut,
    ActionRequired,
    Stale,
    StartupFailure,
    /// Any conclusion GitHub may add later, kept as sent.
    Other(String),
}

impl From<String> for Conclusion {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => Self::Success,
            "failure" => Self::Failure,
            "neutral" => Self::Neutral,
            "cancelled" => Self::Cancelled,
            "skipped" => Self::Skipped,
            "timed_out" => Self::TimedOut,
            "action_required" => Self::ActionRequired,
            "stale" => Self::Stale,
            "startup_failure" => Self::StartupFailure,
            _ => Self::Other(value),
        }
    }
}

impl Conclusion {
    /// The name GitHub uses for this conclusion.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Neutral => "neutral",
            Self::Cancelled => "cancelled",
            Self::Skipped => "skipped",
            Self::TimedOut => "timed_out",
            Self::ActionRequired => "action_required",
            Self::Stale => "stale",
            Self::StartupFailure => "startup_failure",
            Self::Other(value) => value,
        }
    }
}

impl Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
