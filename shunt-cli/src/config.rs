//! Invocation configuration.
//!
//! Raw CLI/CI inputs are validated into an explicit [`Config`] that the
//! orchestrator takes by reference; nothing below this edge reads the
//! process environment.

use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::cli::Cli;
use crate::status::{Status, UnknownStatus};

/// Validation failures for the CI inputs.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("No issue keys provided")]
  MissingIssueKeys,

  #[error(transparent)]
  UnknownStatus(#[from] UnknownStatus),

  #[error("Invalid base URL '{url}': {source}")]
  InvalidBaseUrl {
    url: String,
    #[source]
    source: url::ParseError,
  },

  #[error("Invalid update-fields JSON: {0}")]
  InvalidFieldPatch(#[from] serde_json::Error),

  #[error("update-fields must be a JSON object with a \"fields\" member")]
  FieldPatchShape,
}

/// Validated invocation configuration
#[derive(Debug, Clone)]
pub struct Config {
  pub base_url: Url,
  pub client_email: String,
  pub client_token: String,
  pub issue_keys: Vec<String>,
  pub desired_status: Status,
  pub comment: Option<String>,
  /// Inner mapping of the field patch, sent as `{"fields": ...}`
  pub update_fields: Option<Value>,
  pub continue_on_error: bool,
  pub verify_all: bool,
}

impl Config {
  /// Validate raw inputs into a `Config`.
  pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
    let issue_keys: Vec<String> = cli
      .issue_keys
      .split(',')
      .map(str::trim)
      .filter(|key| !key.is_empty())
      .map(str::to_string)
      .collect();
    if issue_keys.is_empty() {
      return Err(ConfigError::MissingIssueKeys);
    }

    let desired_status: Status = cli.transition_status.parse()?;

    let base_url = Url::parse(&cli.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
      url: cli.base_url.clone(),
      source,
    })?;

    // CI runners pass unset optional inputs as empty strings
    let comment = cli.transition_comment.filter(|text| !text.trim().is_empty());

    let update_fields = match cli.update_fields.as_deref().map(str::trim) {
      None | Some("") => None,
      Some(raw) => {
        let patch: Value = serde_json::from_str(raw)?;
        let fields = patch.get("fields").cloned().ok_or(ConfigError::FieldPatchShape)?;
        Some(fields)
      }
    };

    Ok(Self {
      base_url,
      client_email: cli.client_email,
      client_token: cli.client_token,
      issue_keys,
      desired_status,
      comment,
      update_fields,
      continue_on_error: cli.continue_on_error,
      verify_all: cli.verify_all,
    })
  }
}
