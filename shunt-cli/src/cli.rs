//! Command-line and CI input surface.
//!
//! Every option doubles as a CI step input through the matching `INPUT_*`
//! environment variable, the way runners pass step parameters.

use clap::Parser;

/// Transition Jira issues to a target workflow status from CI
#[derive(Debug, Parser)]
#[command(name = "shunt", version, about)]
pub struct Cli {
  /// Base URL of the Jira instance (e.g. https://company.atlassian.net)
  #[arg(long, env = "INPUT_BASE_URL")]
  pub base_url: String,

  /// Account email used for API authentication
  #[arg(long, env = "INPUT_CLIENT_EMAIL")]
  pub client_email: String,

  /// API token paired with the account email
  #[arg(long, env = "INPUT_CLIENT_TOKEN", hide_env_values = true)]
  pub client_token: String,

  /// Comma-separated issue keys to transition (e.g. PROJ-1,PROJ-2)
  #[arg(long, env = "INPUT_ISSUE_KEYS")]
  pub issue_keys: String,

  /// Target workflow status (e.g. "IN REVIEW", "DONE")
  #[arg(long, env = "INPUT_TRANSITION_STATUS")]
  pub transition_status: String,

  /// Comment appended to each issue after its transition
  #[arg(long, env = "INPUT_TRANSITION_COMMENT")]
  pub transition_comment: Option<String>,

  /// JSON field patch applied to each issue after its transition,
  /// e.g. '{"fields":{"priority":{"name":"High"}}}'
  #[arg(long, env = "INPUT_UPDATE_FIELDS")]
  pub update_fields: Option<String>,

  /// Report failures through outputs only and exit successfully
  #[arg(long, env = "INPUT_CONTINUE_ON_ERROR")]
  pub continue_on_error: bool,

  /// Verify the final status of every issue instead of only the first
  #[arg(long, env = "INPUT_VERIFY_ALL")]
  pub verify_all: bool,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}
