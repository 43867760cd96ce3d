//! # Jira Issue Endpoints
//!
//! Issue reads for status verification and partial field updates.

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::{FieldsUpdate, JiraIssue};

impl JiraClient {
  /// Fetch a Jira issue by key
  pub async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue, JiraError> {
    let url = self.api_url(self.versions.issue, &format!("issue/{issue_key}"));

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .send()
      .await?;

    let status = response.status();
    if status.is_success() {
      return Ok(response.json::<JiraIssue>().await?);
    }

    Err(JiraError::StatusFetchFailed { status })
  }

  /// Read the issue's current workflow status name.
  ///
  /// Always a fresh read. The transition endpoints are the side-effecting
  /// step, so verification never reuses their responses.
  pub async fn current_status(&self, issue_key: &str) -> Result<String, JiraError> {
    let issue = self.get_issue(issue_key).await?;
    Ok(issue.fields.status.name)
  }

  /// Apply a partial field update to an issue.
  ///
  /// Only the provided mapping is sent; everything else on the issue is
  /// left untouched.
  pub async fn update_fields(&self, issue_key: &str, fields: &serde_json::Value) -> Result<(), JiraError> {
    let url = self.api_url(self.versions.fields, &format!("issue/{issue_key}"));

    let payload = FieldsUpdate {
      fields: fields.clone(),
    };

    let response = self
      .client
      .put(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .json(&payload)
      .send()
      .await?;

    let status = response.status();
    if status.is_success() {
      return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(JiraError::FieldUpdateFailed { status, body })
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{basic_auth, body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;
  use crate::error::JiraError;

  #[tokio::test]
  async fn test_current_status() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "bot@example.com", "s3cr3t");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/TEST-123"))
      .and(basic_auth("bot@example.com", "s3cr3t"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": "10000",
          "key": "TEST-123",
          "fields": {
              "summary": "Test issue",
              "status": {
                  "id": "10001",
                  "name": "In Review"
              }
          }
      })))
      .mount(&mock_server)
      .await;

    let status = client.current_status("TEST-123").await?;
    assert_eq!(status, "In Review");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_fetch_failure() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "bot@example.com", "s3cr3t");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/GONE-1"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    let err = client.get_issue("GONE-1").await.unwrap_err();
    assert!(matches!(err, JiraError::StatusFetchFailed { .. }));
    assert!(err.to_string().contains("404"));

    Ok(())
  }

  /// Field updates ride API v3 while the rest of the client stays on v2.
  #[tokio::test]
  async fn test_update_fields_uses_v3_and_exact_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "bot@example.com", "s3cr3t");

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/issue/TEST-123"))
      .and(basic_auth("bot@example.com", "s3cr3t"))
      .and(body_json(serde_json::json!({
          "fields": {
              "priority": { "name": "High" }
          }
      })))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    let fields = serde_json::json!({ "priority": { "name": "High" } });
    client.update_fields("TEST-123", &fields).await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_update_fields_failure_carries_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "bot@example.com", "s3cr3t");

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/issue/TEST-123"))
      .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"errors":{"priority":"unknown field"}}"#))
      .mount(&mock_server)
      .await;

    let fields = serde_json::json!({ "priority": { "name": "High" } });
    let err = client.update_fields("TEST-123", &fields).await.unwrap_err();
    assert!(matches!(err, JiraError::FieldUpdateFailed { .. }));
    assert!(err.to_string().contains("unknown field"));

    Ok(())
  }
}
