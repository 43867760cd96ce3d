use reqwest::StatusCode;
use tracing::debug;

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::{JiraTransition, JiraTransitions, TransitionId, TransitionRequest};

impl JiraClient {
  /// List the transitions currently available for an issue.
  ///
  /// Availability depends on the issue's current workflow state, so the
  /// result must not be reused for any other issue.
  pub async fn get_transitions(&self, issue_key: &str) -> Result<Vec<JiraTransition>, JiraError> {
    let url = self.api_url(self.versions.transitions, &format!("issue/{issue_key}/transitions"));

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .send()
      .await?;

    let status = response.status();
    if status.is_success() {
      let transitions = response.json::<JiraTransitions>().await?;
      return Ok(transitions.transitions);
    }

    Err(match status {
      StatusCode::NOT_FOUND => JiraError::IssueNotFound {
        issue: issue_key.to_string(),
      },
      StatusCode::FORBIDDEN => JiraError::AccessDenied {
        issue: issue_key.to_string(),
      },
      StatusCode::UNAUTHORIZED => JiraError::InvalidCredentials {
        issue: issue_key.to_string(),
      },
      StatusCode::BAD_REQUEST => JiraError::BadRequest {
        issue: issue_key.to_string(),
      },
      s if s.is_server_error() => JiraError::ServerError {
        issue: issue_key.to_string(),
      },
      other => JiraError::LookupFailed {
        issue: issue_key.to_string(),
        status: other,
      },
    })
  }

  /// Resolve the transition that moves an issue to the desired status.
  ///
  /// Destination names are matched case-insensitively against the
  /// transitions available at call time.
  pub async fn resolve_transition(&self, issue_key: &str, desired_status: &str) -> Result<u32, JiraError> {
    let transitions = self.get_transitions(issue_key).await?;
    debug!(issue_key, count = transitions.len(), "fetched available transitions");

    let Some(transition) = transitions.iter().find(|t| t.to.name.eq_ignore_ascii_case(desired_status)) else {
      let available = transitions
        .iter()
        .map(|t| t.to.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
      return Err(JiraError::TransitionNotAvailable {
        issue: issue_key.to_string(),
        status: desired_status.to_string(),
        available,
      });
    };

    transition.id.parse().map_err(|source| JiraError::MalformedTransitionId {
      issue: issue_key.to_string(),
      id: transition.id.clone(),
      source,
    })
  }

  /// Apply a transition to an issue.
  ///
  /// Not idempotent: reapplying an id to an issue already in the target
  /// state may be rejected by the upstream workflow rules.
  pub async fn transition_issue(&self, issue_key: &str, transition_id: u32) -> Result<(), JiraError> {
    let url = self.api_url(self.versions.transitions, &format!("issue/{issue_key}/transitions"));

    let payload = TransitionRequest {
      transition: TransitionId { id: transition_id },
    };

    let response = self
      .client
      .post(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .json(&payload)
      .send()
      .await?;

    let status = response.status();
    if status.is_success() {
      return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(JiraError::ApplyFailed { status, body })
  }
}
