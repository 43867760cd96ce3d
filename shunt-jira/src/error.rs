//! Typed failures for the Jira client.
//!
//! Every variant is terminal: callers report the message and abort the
//! remaining work, nothing is retried.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the Jira REST operations.
#[derive(Debug, Error)]
pub enum JiraError {
  #[error("Issue {issue} not found")]
  IssueNotFound { issue: String },

  #[error("Access denied to issue {issue}")]
  AccessDenied { issue: String },

  #[error("Invalid credentials for issue {issue}")]
  InvalidCredentials { issue: String },

  #[error("Bad request for issue {issue}")]
  BadRequest { issue: String },

  #[error("Internal server error for issue {issue}")]
  ServerError { issue: String },

  /// Transition lookup failed with a status that has no specific mapping.
  #[error("Failed to list transitions for issue {issue}: HTTP {status}")]
  LookupFailed { issue: String, status: StatusCode },

  /// The desired status is not reachable from the issue's current state.
  #[error("Cannot move {issue} to \"{status}\". Available: {available}")]
  TransitionNotAvailable {
    issue: String,
    status: String,
    available: String,
  },

  /// The transitions payload carried an id that is not numeric.
  #[error("Transition id '{id}' for issue {issue} is not numeric")]
  MalformedTransitionId {
    issue: String,
    id: String,
    #[source]
    source: std::num::ParseIntError,
  },

  #[error("POST transition failed ({status}): {body}")]
  ApplyFailed { status: StatusCode, body: String },

  #[error("PUT issue fields failed ({status}): {body}")]
  FieldUpdateFailed { status: StatusCode, body: String },

  #[error("POST comment failed ({status}): {body}")]
  CommentFailed { status: StatusCode, body: String },

  #[error("Failed to fetch updated issue: {status}")]
  StatusFetchFailed { status: StatusCode },

  /// Transport-level failure from the HTTP client.
  #[error(transparent)]
  Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lookup_classification_messages() {
    let err = JiraError::AccessDenied {
      issue: "ABC-2".to_string(),
    };
    assert_eq!(err.to_string(), "Access denied to issue ABC-2");

    let err = JiraError::IssueNotFound {
      issue: "ABC-9".to_string(),
    };
    assert_eq!(err.to_string(), "Issue ABC-9 not found");
  }

  #[test]
  fn test_not_available_lists_destinations() {
    let err = JiraError::TransitionNotAvailable {
      issue: "PROJ-7".to_string(),
      status: "DONE".to_string(),
      available: "To Do, In Progress".to_string(),
    };
    assert_eq!(err.to_string(), "Cannot move PROJ-7 to \"DONE\". Available: To Do, In Progress");
  }
}
