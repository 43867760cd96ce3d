use serde::{Deserialize, Serialize};

/// Jira authentication credentials: account email plus API token, sent as
/// HTTP Basic on every request
#[derive(Clone)]
pub struct JiraAuth {
  pub email: String,
  pub api_token: String,
}

/// Represents a Jira issue
#[derive(Debug, Deserialize)]
pub struct JiraIssue {
  pub key: String,
  pub fields: JiraIssueFields,
}

/// Issue fields read by the step
#[derive(Debug, Deserialize)]
pub struct JiraIssueFields {
  pub status: JiraIssueStatus,
}

/// Current workflow status of an issue
#[derive(Debug, Deserialize)]
pub struct JiraIssueStatus {
  pub name: String,
}

/// A transition available from an issue's current status
#[derive(Debug, Deserialize)]
pub struct JiraTransition {
  pub id: String,
  pub to: TransitionTarget,
}

/// Destination status of a transition
#[derive(Debug, Deserialize)]
pub struct TransitionTarget {
  pub name: String,
}

/// Response payload of the list-transitions endpoint
#[derive(Debug, Deserialize)]
pub struct JiraTransitions {
  pub transitions: Vec<JiraTransition>,
}

/// Request payload for applying a transition
#[derive(Debug, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionId,
}

/// Numeric transition id for the request
#[derive(Debug, Serialize)]
pub struct TransitionId {
  pub id: u32,
}

/// Partial field update: only the provided mapping is sent
#[derive(Debug, Serialize)]
pub struct FieldsUpdate {
  pub fields: serde_json::Value,
}

/// Request payload for appending a comment
#[derive(Debug, Serialize)]
pub struct CommentRequest {
  pub body: String,
}
