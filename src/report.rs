//! Renders a [`Resolution`] as a human-readable report with comparison links.

use std::fmt::{self, Display};

use crate::{
    history::Resolution,
    workflow::{Repository, WorkflowRun},
};

/// The length of abbreviated commit hashes in comparison links.
const SHORT_SHA_LEN: usize = 7;

/// Where comparison links point to.
#[derive(Debug, Clone, Copy)]
pub struct CompareBase<'a> {
    /// The base URL of the GitHub web interface, e.g. `https://github.com`.
    pub server_url: &'a str,
    /// The repository the commits belong to.
    pub repository: &'a Repository,
}

impl CompareBase<'_> {
    /// Builds a link comparing the `older` commit against the `newer` one.
    pub fn link(&self, newer: &str, older: &str) -> String {
        compare_link(self.server_url, self.repository, newer, older)
    }
}

/// Builds a link showing the changes from the `older` commit up to the `newer` one, using
/// abbreviated hashes.
///
/// ```rust
/// # use previous_run::{report::compare_link, workflow::Repository};
/// let repo: Repository = "octo-org/hello-world".parse().unwrap();
/// assert_eq!(
///     compare_link("https://github.com", &repo, "2222222abcdef", "1111111abcdef"),
///     "https://github.com/octo-org/hello-world/compare/1111111...2222222",
/// );
/// ```
pub fn compare_link(
    server_url: &str,
    repository: &Repository,
    newer: &str,
    older: &str,
) -> String {
    format!(
        "{}/{}/{}/compare/{}...{}",
        server_url.trim_end_matches('/'),
        repository.owner,
        repository.name,
        short_sha(older),
        short_sha(newer),
    )
}

fn short_sha(sha: &str) -> &str {
    sha.get(..SHORT_SHA_LEN).unwrap_or(sha)
}

/// A report on the history of the current run, rendered through [`Display`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// The run being reported on.
    pub current: &'a WorkflowRun,
    /// Where the current run stands in its branch's history.
    pub resolution: Resolution<'a>,
    /// Where comparison links point to.
    pub base: CompareBase<'a>,
}

impl Report<'_> {
    fn previous_status(previous: &WorkflowRun) -> String {
        let created_at = previous.created_at_display();
        match &previous.conclusion {
            None => format!("The previous run ({created_at}) is still in progress."),
            Some(conclusion) => {
                format!("The previous run ({created_at}) concluded with '{conclusion}'.")
            }
        }
    }

    fn diff(&self, label: &str, other: &WorkflowRun) -> String {
        format!(
            "Diff between {label} and this run: {}",
            self.base.link(&self.current.head_sha, &other.head_sha)
        )
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = match self.resolution {
            Resolution::FirstRun => vec![String::from(
                "No information on previous runs: this is the first workflow run on this branch.",
            )],
            Resolution::PreviousSucceeded { previous } => vec![
                format!(
                    "The previous run ({}) was successful.",
                    previous.created_at_display()
                ),
                format!("Previous run: {}", previous.html_url),
                self.diff("previous run", previous),
            ],
            Resolution::NoSuccessfulRun { previous } => vec![
                Self::previous_status(previous),
                format!("Previous run: {}", previous.html_url),
                String::from("There was no successful run."),
            ],
            Resolution::LastSuccessful {
                previous,
                last_successful,
            } => vec![
                Self::previous_status(previous),
                format!("Previous run: {}", previous.html_url),
                format!(
                    "The last successful run was at {}.",
                    last_successful.created_at_display()
                ),
                format!("Last successful run: {}", last_successful.html_url),
                self.diff("last successful run", last_successful),
            ],
        };

        f.write_str(&lines.join("\n"))
    }
}

/// Formats the report on `current` given its `resolution`.
pub fn format_report(
    current: &WorkflowRun,
    resolution: Resolution<'_>,
    base: CompareBase<'_>,
) -> String {
    Report {
        current,
        resolution,
        base,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::Conclusion;

    use chrono::{TimeZone as _, Utc};

    fn repository() -> Repository {
        Repository {
            owner: String::from("octo-org"),
            name: String::from("hello-world"),
        }
    }

    fn run(id: u64, sha: &str, conclusion: Option<Conclusion>) -> WorkflowRun {
        WorkflowRun {
            id,
            run_number: id,
            name: None,
            head_branch: Some(String::from("main")),
            head_sha: sha.to_owned(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, id as u32, 0).unwrap(),
            status: None,
            conclusion,
            html_url: format!("https://github.com/octo-org/hello-world/actions/runs/{id}"),
        }
    }

    fn render(current: &WorkflowRun, resolution: Resolution<'_>) -> String {
        let repository = repository();
        format_report(
            current,
            resolution,
            CompareBase {
                server_url: "https://github.com",
                repository: &repository,
            },
        )
    }

    #[test]
    fn compare_link_puts_older_commit_first() {
        let repo = repository();
        assert_eq!(
            compare_link("https://github.com/", &repo, "bbbbbbbbbb", "aaaaaaaaaa"),
            "https://github.com/octo-org/hello-world/compare/aaaaaaa...bbbbbbb"
        );
    }

    #[test]
    fn compare_link_keeps_short_shas_whole() {
        let repo = repository();
        assert_eq!(
            compare_link("https://ghe.example.com", &repo, "v1.2", "abc"),
            "https://ghe.example.com/octo-org/hello-world/compare/abc...v1.2"
        );
    }

    #[test]
    fn first_run() {
        let current = run(1, "1111111111", None);
        assert_eq!(
            render(&current, Resolution::FirstRun),
            "No information on previous runs: this is the first workflow run on this branch."
        );
    }

    #[test]
    fn previous_succeeded() {
        let previous = run(1, "1111111111", Some(Conclusion::Success));
        let current = run(2, "2222222222", None);

        assert_eq!(
            render(
                &current,
                Resolution::PreviousSucceeded {
                    previous: &previous
                }
            ),
            "The previous run (2024-03-01T09:01:00Z) was successful.\n\
             Previous run: https://github.com/octo-org/hello-world/actions/runs/1\n\
             Diff between previous run and this run: https://github.com/octo-org/hello-world/compare/1111111...2222222"
        );
    }

    #[test]
    fn previous_failed_without_success() {
        let previous = run(1, "1111111111", Some(Conclusion::Failure));
        let current = run(2, "2222222222", None);

        assert_eq!(
            render(
                &current,
                Resolution::NoSuccessfulRun {
                    previous: &previous
                }
            ),
            "The previous run (2024-03-01T09:01:00Z) concluded with 'failure'.\n\
             Previous run: https://github.com/octo-org/hello-world/actions/runs/1\n\
             There was no successful run."
        );
    }

    #[test]
    fn previous_in_progress_with_earlier_success() {
        let last_successful = run(1, "1111111111", Some(Conclusion::Success));
        let previous = run(2, "2222222222", None);
        let current = run(3, "3333333333", None);

        assert_eq!(
            render(
                &current,
                Resolution::LastSuccessful {
                    previous: &previous,
                    last_successful: &last_successful,
                }
            ),
            "The previous run (2024-03-01T09:02:00Z) is still in progress.\n\
             Previous run: https://github.com/octo-org/hello-world/actions/runs/2\n\
             The last successful run was at 2024-03-01T09:01:00Z.\n\
             Last successful run: https://github.com/octo-org/hello-world/actions/runs/1\n\
             Diff between last successful run and this run: https://github.com/octo-org/hello-world/compare/1111111...3333333"
        );
    }

    #[test]
    fn timed_out_conclusion_uses_github_name() {
        let previous = run(1, "1111111111", Some(Conclusion::TimedOut));
        let current = run(2, "2222222222", None);

        let report = render(
            &current,
            Resolution::NoSuccessfulRun {
                previous: &previous,
            },
        );
        assert!(
            report.starts_with("The previous run (2024-03-01T09:01:00Z) concluded with 'timed_out'.")
        );
    }

    #[test]
    fn unrecognized_conclusion_is_printed_as_sent() {
        let previous = run(
            1,
            "1111111111",
            Some(Conclusion::Other(String::from("exploded"))),
        );
        let current = run(2, "2222222222", None);

        let report = render(
            &current,
            Resolution::NoSuccessfulRun {
                previous: &previous,
            },
        );
        assert!(
            report.starts_with("The previous run (2024-03-01T09:01:00Z) concluded with 'exploded'.")
        );
    }
}
