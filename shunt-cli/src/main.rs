//! # Shunt CLI Entry Point
//!
//! Parses the CI inputs, runs the transition sequence on a tokio runtime,
//! and maps the result to the CI output contract and process exit code.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use shunt_cli::cli::Cli;
use shunt_cli::config::Config;
use shunt_cli::orchestrator::RunReport;
use shunt_cli::output::{print_error, print_success};
use shunt_cli::{ci, orchestrator};
use shunt_jira::create_jira_client;
use tokio::runtime::Runtime;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
  let cmd = Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {level}");

  let continue_on_error = cmd.continue_on_error;
  let result = execute(cmd);

  let outcome = ci::Outcome::from_result(&result, continue_on_error);
  match &result {
    Ok(report) => {
      print_success(&format!(
        "Successfully transitioned {} to '{}'",
        report.joined_keys(),
        report.final_status
      ));
    }
    Err(e) if continue_on_error => {
      debug!("Suppressing failure: {e:#}");
    }
    Err(e) => {
      print_error(&format!("{e:#}"));
    }
  }

  if let Err(e) = ci::set_outputs(&outcome.outputs()) {
    print_error(&format!("{e:#}"));
    return ExitCode::FAILURE;
  }

  if outcome.process_success() {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  }
}

/// Validate the inputs and drive the run to completion.
fn execute(cmd: Cli) -> Result<RunReport> {
  let config = Config::from_cli(cmd)?;

  let client = create_jira_client(
    config.base_url.as_str(),
    &config.client_email,
    &config.client_token,
  );

  let rt = Runtime::new().context("Failed to create async runtime")?;
  let report = rt.block_on(orchestrator::run(&client, &config))?;

  Ok(report)
}
