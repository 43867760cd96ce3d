//! Drives the transition sequence across the configured issues.
//!
//! Per issue: resolve the transition for the desired status, apply it, then
//! optionally patch fields and append a comment. Issues are processed
//! strictly in the order supplied and the loop aborts on the first failure;
//! transitions already applied are not rolled back. After the loop, the
//! landing status is verified with a fresh read.

use shunt_jira::{JiraClient, JiraError};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::output::{print_step, print_success};
use crate::status::Status;

/// Failures of the orchestrated run.
#[derive(Debug, Error)]
pub enum RunError {
  /// Post-condition violated: the issue did not land on the desired status.
  #[error("Transition mismatch: issue is now '{observed}', expected '{expected}'")]
  TransitionMismatch { observed: String, expected: Status },

  #[error(transparent)]
  Jira(#[from] JiraError),
}

/// Outcome of a successful run, mapped to the CI outputs
#[derive(Debug)]
pub struct RunReport {
  pub issue_keys: Vec<String>,
  /// Status name observed on the last verification read
  pub final_status: String,
}

impl RunReport {
  pub fn joined_keys(&self) -> String {
    self.issue_keys.join(",")
  }
}

/// Transition every configured issue, then verify the landing status.
pub async fn run(client: &JiraClient, config: &Config) -> Result<RunReport, RunError> {
  let desired = config.desired_status;

  print_step(&format!("Fetching transition id(s) for \"{desired}\"..."));
  for key in &config.issue_keys {
    let transition_id = client.resolve_transition(key, desired.name()).await?;
    debug!(issue = %key, transition_id, "resolved transition");

    client.transition_issue(key, transition_id).await?;
    debug!(issue = %key, "applied transition");

    if let Some(fields) = &config.update_fields {
      client.update_fields(key, fields).await?;
      debug!(issue = %key, "updated fields");
    }
    if let Some(comment) = &config.comment {
      client.add_comment(key, comment).await?;
      debug!(issue = %key, "added comment");
    }

    print_success(&format!("{key} moved to {desired}"));
  }

  // config guarantees at least one key
  let verify_keys = if config.verify_all {
    config.issue_keys.as_slice()
  } else {
    &config.issue_keys[..1]
  };

  print_step(&format!("Fetching updated status for issue(s) {}...", config.issue_keys.join(",")));
  let mut final_status = String::new();
  for key in verify_keys {
    let observed = client.current_status(key).await?;
    if !desired.matches(&observed) {
      return Err(RunError::TransitionMismatch {
        observed,
        expected: desired,
      });
    }
    final_status = observed;
  }

  Ok(RunReport {
    issue_keys: config.issue_keys.clone(),
    final_status,
  })
}
