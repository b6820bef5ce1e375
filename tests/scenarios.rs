//! End-to-end scenarios from raw GitHub payloads to the rendered report.

use previous_run::{
    Error,
    history::resolve,
    report::{CompareBase, format_report},
    workflow::{Repository, WorkflowRun, WorkflowRuns},
};
use serde_json::{Value, json};

fn run(number: u64, conclusion: Value) -> Value {
    let status = if conclusion.is_null() {
        "in_progress"
    } else {
        "completed"
    };
    json!({
        "id": 1000 + number,
        "name": "CI",
        "run_number": number,
        "head_branch": "main",
        "head_sha": format!("{number}{number}{number}{number}{number}{number}{number}cafebabe"),
        "status": status,
        "conclusion": conclusion,
        "created_at": format!("2024-05-0{number}T12:00:00Z"),
        "html_url": format!("https://github.com/octo-org/hello-world/actions/runs/{}", 1000 + number),
    })
}

fn runs(payload: Vec<Value>) -> Vec<WorkflowRun> {
    let total_count = payload.len();
    let response = json!({ "total_count": total_count, "workflow_runs": payload });
    serde_json::from_value::<WorkflowRuns>(response)
        .unwrap()
        .workflow_runs
}

fn report_for(current_number: u64, runs: &[WorkflowRun]) -> Result<String, Error> {
    let repository: Repository = "octo-org/hello-world".parse().unwrap();
    let current = runs
        .iter()
        .find(|run| run.run_number == current_number)
        .unwrap();

    let resolution = resolve(current, runs)?;
    Ok(format_report(
        current,
        resolution,
        CompareBase {
            server_url: "https://github.com",
            repository: &repository,
        },
    ))
}

#[test]
fn scenario_a_first_run() {
    let runs = runs(vec![run(1, json!("success"))]);

    assert_eq!(
        report_for(1, &runs).unwrap(),
        "No information on previous runs: this is the first workflow run on this branch."
    );
}

#[test]
fn scenario_b_previous_run_succeeded() {
    let runs = runs(vec![run(2, Value::Null), run(1, json!("success"))]);

    let report = report_for(2, &runs).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        [
            "The previous run (2024-05-01T12:00:00Z) was successful.",
            "Previous run: https://github.com/octo-org/hello-world/actions/runs/1001",
            "Diff between previous run and this run: https://github.com/octo-org/hello-world/compare/1111111...2222222",
        ]
    );
}

#[test]
fn scenario_c_failed_previous_run_with_earlier_success() {
    let runs = runs(vec![
        run(1, json!("success")),
        run(2, json!("failure")),
        run(3, Value::Null),
    ]);

    let report = report_for(3, &runs).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        [
            "The previous run (2024-05-02T12:00:00Z) concluded with 'failure'.",
            "Previous run: https://github.com/octo-org/hello-world/actions/runs/1002",
            "The last successful run was at 2024-05-01T12:00:00Z.",
            "Last successful run: https://github.com/octo-org/hello-world/actions/runs/1001",
            "Diff between last successful run and this run: https://github.com/octo-org/hello-world/compare/1111111...3333333",
        ]
    );
}

#[test]
fn scenario_d_no_successful_run() {
    let runs = runs(vec![run(1, json!("failure")), run(2, Value::Null)]);

    let report = report_for(2, &runs).unwrap();
    assert_eq!(
        report,
        "The previous run (2024-05-01T12:00:00Z) concluded with 'failure'.\n\
         Previous run: https://github.com/octo-org/hello-world/actions/runs/1001\n\
         There was no successful run."
    );
    assert!(!report.contains("Diff"));
}

#[test]
fn scenario_e_previous_run_in_progress() {
    let runs = runs(vec![run(1, Value::Null), run(2, Value::Null)]);

    let report = report_for(2, &runs).unwrap();
    assert!(report.starts_with("The previous run (2024-05-01T12:00:00Z) is still in progress."));
    assert!(!report.contains("null"));
    assert!(!report.contains("concluded"));
}

#[test]
fn runs_of_other_branches_are_ignored() {
    let mut payload = vec![run(1, json!("success")), run(3, Value::Null)];
    let mut other = run(2, json!("failure"));
    other["head_branch"] = json!("feature/other");
    payload.push(other);
    let runs = runs(payload);

    let report = report_for(3, &runs).unwrap();
    assert!(report.starts_with("The previous run (2024-05-01T12:00:00Z) was successful."));
}

#[test]
fn current_run_missing_from_history() {
    let runs = runs(vec![run(1, json!("success")), run(2, Value::Null)]);
    let mut stranger = runs[1].clone();
    stranger.id = 42;

    assert_eq!(
        resolve(&stranger, &runs),
        Err(Error::RunNotFound { run_id: 42 })
    );
}
