//! Command-line entry point printing the previous run report of a GitHub Actions run.

use anyhow::{Context as _, Result};
use clap::Parser;

use previous_run::{
    Error,
    action::{Context, previous_run_report},
    env::{GITHUB_SERVER_URL, first_var},
    workflow::{Repository, api::GithubApi},
};

#[derive(Debug, Parser)]
#[command(
    name = "previous-run",
    about = "Reports how a GitHub Actions run relates to the previous runs on its branch",
    version,
    long_about = None
)]
struct Cli {
    /// Repository as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// Name of the workflow [env: WORKFLOW_NAME, GITHUB_WORKFLOW]
    #[arg(long)]
    workflow: Option<String>,

    /// Id of the current run [env: RUN_ID, GITHUB_RUN_ID]
    #[arg(long)]
    run_id: Option<u64>,
}

impl Cli {
    fn into_context(self) -> Result<Context> {
        let repository: Repository = self
            .repository
            .ok_or(Error::MissingConfig("repository (GITHUB_REPOSITORY)"))?
            .parse()?;

        let workflow = self
            .workflow
            .or_else(|| first_var(&["WORKFLOW_NAME", "GITHUB_WORKFLOW"]))
            .ok_or(Error::MissingConfig("workflow (WORKFLOW_NAME or GITHUB_WORKFLOW)"))?;

        let run_id = match self.run_id {
            Some(run_id) => run_id,
            None => first_var(&["RUN_ID", "GITHUB_RUN_ID"])
                .ok_or(Error::MissingConfig("run id (RUN_ID or GITHUB_RUN_ID)"))?
                .parse()
                .context("run id is not a number")?,
        };

        Ok(Context {
            repository,
            workflow,
            run_id,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let context = Cli::parse().into_context()?;
    tracing::info!(
        repository = %context.repository,
        workflow = %context.workflow,
        run_id = context.run_id,
        "reporting on previous runs"
    );

    let report = previous_run_report(&GithubApi::from_env(), &GITHUB_SERVER_URL, &context).await?;
    println!("{report}");

    Ok(())
}
