//! Closed set of workflow statuses the step may target.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Workflow statuses recognized as transition targets.
///
/// The tracker only routes issues through these states; anything else is
/// rejected at configuration time, before any request goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
  ToDo,
  Blocked,
  Reverted,
  MoreWorkRequired,
  InProgress,
  InReview,
  ReadyToTest,
  Done,
  Released,
}

impl Status {
  /// Canonical name, spelled the way the workflow spells it
  pub const fn name(&self) -> &'static str {
    match self {
      Status::ToDo => "TO DO",
      Status::Blocked => "BLOCKED",
      Status::Reverted => "REVERTED",
      Status::MoreWorkRequired => "MORE WORK REQUIRED",
      Status::InProgress => "IN PROGRESS",
      Status::InReview => "IN REVIEW",
      Status::ReadyToTest => "READY TO TEST",
      Status::Done => "DONE",
      Status::Released => "RELEASED",
    }
  }

  /// Case-insensitive comparison against a status name reported by the
  /// tracker
  pub fn matches(&self, observed: &str) -> bool {
    observed.eq_ignore_ascii_case(self.name())
  }
}

impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Rejection of a status name outside the recognized set
#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a valid state.")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
  type Err = UnknownStatus;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    match trimmed.to_ascii_uppercase().as_str() {
      "TO DO" => Ok(Status::ToDo),
      "BLOCKED" => Ok(Status::Blocked),
      "REVERTED" => Ok(Status::Reverted),
      "MORE WORK REQUIRED" => Ok(Status::MoreWorkRequired),
      "IN PROGRESS" => Ok(Status::InProgress),
      "IN REVIEW" => Ok(Status::InReview),
      "READY TO TEST" => Ok(Status::ReadyToTest),
      "DONE" => Ok(Status::Done),
      "RELEASED" => Ok(Status::Released),
      _ => Err(UnknownStatus(trimmed.to_string())),
    }
  }
}
