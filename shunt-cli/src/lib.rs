//! # Shunt
//!
//! CI step that moves Jira issues to a target workflow status, optionally
//! patching fields and appending a comment, then verifies where the issues
//! landed. The whole run is a single sequential pass: one failure aborts the
//! remaining work and surfaces through the CI output contract.

pub mod ci;
pub mod cli;
pub mod config;
pub mod orchestrator;
pub mod output;
pub mod status;
