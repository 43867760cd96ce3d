//! CI output contract.
//!
//! Outputs are `name=value` pairs appended to the file the runner names in
//! `$GITHUB_OUTPUT`; without one they go to stdout so local runs still show
//! them. A failed run with `continue-on-error` clears the value outputs and
//! keeps only the failure marker, so downstream steps never consume results
//! from an aborted sequence.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::orchestrator::RunReport;

pub const OUTPUT_ISSUE_KEYS: &str = "issue-keys";
pub const OUTPUT_TRANSITION_STATUS: &str = "transition-status";
pub const OUTPUT_STATUS: &str = "status";

/// Process-level outcome of an invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
  Success {
    issue_keys: String,
    final_status: String,
  },
  /// Failure demoted by continue-on-error: value outputs are cleared and
  /// the process still exits successfully.
  SoftFailure,
  HardFailure,
}

impl Outcome {
  /// Map a run result to the outcome the process reports.
  pub fn from_result(result: &Result<RunReport>, continue_on_error: bool) -> Self {
    match result {
      Ok(report) => Outcome::Success {
        issue_keys: report.joined_keys(),
        final_status: report.final_status.clone(),
      },
      Err(_) if continue_on_error => Outcome::SoftFailure,
      Err(_) => Outcome::HardFailure,
    }
  }

  /// The output pairs this outcome emits.
  pub fn outputs(&self) -> Vec<(&'static str, String)> {
    match self {
      Outcome::Success {
        issue_keys,
        final_status,
      } => vec![
        (OUTPUT_ISSUE_KEYS, issue_keys.clone()),
        (OUTPUT_TRANSITION_STATUS, final_status.clone()),
        (OUTPUT_STATUS, "success".to_string()),
      ],
      Outcome::SoftFailure => vec![
        (OUTPUT_ISSUE_KEYS, String::new()),
        (OUTPUT_TRANSITION_STATUS, String::new()),
        (OUTPUT_STATUS, "failure".to_string()),
      ],
      Outcome::HardFailure => vec![(OUTPUT_STATUS, "failure".to_string())],
    }
  }

  pub const fn process_success(&self) -> bool {
    !matches!(self, Outcome::HardFailure)
  }
}

/// Render output pairs as the runner's `name=value` lines
pub fn render_outputs(entries: &[(&str, String)]) -> String {
  let mut rendered = String::new();
  for (name, value) in entries {
    rendered.push_str(name);
    rendered.push('=');
    rendered.push_str(value);
    rendered.push('\n');
  }
  rendered
}

/// Append output pairs to an output file
pub fn append_outputs(path: &Path, entries: &[(&str, String)]) -> Result<()> {
  let mut file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("Failed to open output file {}", path.display()))?;

  file
    .write_all(render_outputs(entries).as_bytes())
    .context("Failed to write outputs")
}

/// Emit output pairs to the runner, or stdout when no output file is set.
pub fn set_outputs(entries: &[(&str, String)]) -> Result<()> {
  match env::var_os("GITHUB_OUTPUT") {
    Some(path) => append_outputs(Path::new(&path), entries),
    None => {
      print!("{}", render_outputs(entries));
      Ok(())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::orchestrator::RunReport;

  fn report() -> Result<RunReport> {
    Ok(RunReport {
      issue_keys: vec!["ABC-1".to_string(), "ABC-2".to_string()],
      final_status: "Done".to_string(),
    })
  }

  fn lookup_failure() -> Result<RunReport> {
    Err(anyhow::Error::new(shunt_jira::JiraError::IssueNotFound {
      issue: "ABC-1".to_string(),
    }))
  }

  #[test]
  fn test_success_outputs() {
    let outcome = Outcome::from_result(&report(), false);

    assert_eq!(
      outcome.outputs(),
      vec![
        ("issue-keys", "ABC-1,ABC-2".to_string()),
        ("transition-status", "Done".to_string()),
        ("status", "success".to_string()),
      ]
    );
    assert!(outcome.process_success());
  }

  #[test]
  fn test_soft_failure_clears_value_outputs() {
    let outcome = Outcome::from_result(&lookup_failure(), true);

    assert_eq!(outcome, Outcome::SoftFailure);
    assert_eq!(
      outcome.outputs(),
      vec![
        ("issue-keys", String::new()),
        ("transition-status", String::new()),
        ("status", "failure".to_string()),
      ]
    );
    assert!(outcome.process_success());
  }

  #[test]
  fn test_hard_failure_keeps_process_failure() {
    let outcome = Outcome::from_result(&lookup_failure(), false);

    assert_eq!(outcome, Outcome::HardFailure);
    assert_eq!(outcome.outputs(), vec![("status", "failure".to_string())]);
    assert!(!outcome.process_success());
  }

  #[test]
  fn test_render_outputs() {
    let rendered = render_outputs(&[
      ("issue-keys", "ABC-1".to_string()),
      ("status", "success".to_string()),
    ]);

    assert_eq!(rendered, "issue-keys=ABC-1\nstatus=success\n");
  }

  #[test]
  fn test_append_outputs_appends() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("outputs");

    append_outputs(&path, &[("status", "success".to_string())])?;
    append_outputs(&path, &[("issue-keys", "ABC-1".to_string())])?;

    let contents = std::fs::read_to_string(&path)?;
    assert_eq!(contents, "status=success\nissue-keys=ABC-1\n");

    Ok(())
  }
}
