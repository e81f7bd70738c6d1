#[cfg(feature = "full")]
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
  EnumString, Display, EnumIter, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Hash,
)]
#[cfg_attr(feature = "full", derive(DbEnum))]
#[cfg_attr(
  feature = "full",
  ExistingTypePath = "crate::schema::sql_types::SubmissionStatusEnum"
)]
#[cfg_attr(feature = "full", DbValueStyle = "verbatim")]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(export))]
/// Lifecycle state of a workflow-governed submission (NOC request or
/// internship application).
///
/// Teacher approval moves a submission directly into `PendingTpo`; there is no
/// separate teacher-approved state between the two review stages.
pub enum SubmissionStatus {
  /// Awaiting first-stage review by the assigned teacher.
  #[default]
  PendingTeacher,
  /// Teacher approved, awaiting final review by the T&P officer.
  PendingTpo,
  /// Approved by the T&P officer. Terminal.
  Approved,
  /// Rejected at the teacher stage. Terminal.
  RejectedTeacher,
  /// Rejected at the T&P stage. Terminal.
  Rejected,
}

impl SubmissionStatus {
  pub fn is_terminal(&self) -> bool {
    matches!(
      self,
      SubmissionStatus::Approved | SubmissionStatus::RejectedTeacher | SubmissionStatus::Rejected
    )
  }
}

#[derive(
  EnumString, Display, EnumIter, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Hash,
)]
#[cfg_attr(feature = "full", derive(DbEnum))]
#[cfg_attr(
  feature = "full",
  ExistingTypePath = "crate::schema::sql_types::UserRoleEnum"
)]
#[cfg_attr(feature = "full", DbValueStyle = "verbatim")]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(export))]
/// Role resolved from a person's stored row, never from the authenticated
/// email itself.
pub enum UserRole {
  #[default]
  Student,
  Teacher,
  /// Training-and-placement officer, the second-stage reviewer.
  TpOfficer,
  SuperAdmin,
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::str::FromStr;

  #[test]
  fn terminal_states() {
    assert!(!SubmissionStatus::PendingTeacher.is_terminal());
    assert!(!SubmissionStatus::PendingTpo.is_terminal());
    assert!(SubmissionStatus::Approved.is_terminal());
    assert!(SubmissionStatus::RejectedTeacher.is_terminal());
    assert!(SubmissionStatus::Rejected.is_terminal());
  }

  #[test]
  fn status_round_trips_through_strum() -> Result<(), strum::ParseError> {
    let status = SubmissionStatus::from_str(&SubmissionStatus::PendingTpo.to_string())?;
    assert_eq!(SubmissionStatus::PendingTpo, status);
    Ok(())
  }
}
