//! # Jira API Client
//!
//! Jira REST API integration for the shunt CI step: transition discovery and
//! execution, field updates, comments, and issue status reads. Every
//! operation is a single request with no retries; failures map to the typed
//! [`JiraError`] taxonomy.

mod client;
mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use client::{ApiVersions, JiraClient, create_jira_client};
// Re-export errors and models
pub use error::JiraError;
pub use models::{
  CommentRequest, FieldsUpdate, JiraAuth, JiraIssue, JiraIssueFields, JiraIssueStatus, JiraTransition,
  JiraTransitions, TransitionId, TransitionRequest, TransitionTarget,
};
