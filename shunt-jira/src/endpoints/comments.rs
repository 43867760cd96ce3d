use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::CommentRequest;

impl JiraClient {
  /// Append a comment to an issue.
  pub async fn add_comment(&self, issue_key: &str, text: &str) -> Result<(), JiraError> {
    let url = self.api_url(self.versions.comments, &format!("issue/{issue_key}/comment"));

    let payload = CommentRequest {
      body: text.to_string(),
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
    Err(JiraError::CommentFailed { status, body })
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{basic_auth, body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;
  use crate::error::JiraError;

  #[tokio::test]
  async fn test_add_comment() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "bot@example.com", "s3cr3t");

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/TEST-123/comment"))
      .and(basic_auth("bot@example.com", "s3cr3t"))
      .and(body_json(serde_json::json!({
          "body": "Moved to Done by the release pipeline"
      })))
      .respond_with(ResponseTemplate::new(201))
      .expect(1)
      .mount(&mock_server)
      .await;

    client.add_comment("TEST-123", "Moved to Done by the release pipeline").await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_add_comment_failure_carries_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "bot@example.com", "s3cr3t");

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/TEST-123/comment"))
      .respond_with(ResponseTemplate::new(403).set_body_string("comments are restricted"))
      .mount(&mock_server)
      .await;

    let err = client.add_comment("TEST-123", "hello").await.unwrap_err();
    assert!(matches!(err, JiraError::CommentFailed { .. }));
    assert!(err.to_string().contains("comments are restricted"));

    Ok(())
  }
}
