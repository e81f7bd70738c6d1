use internport_db_schema_file::enums::SubmissionStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(export))]
#[serde(rename_all = "camelCase")]
/// Badge class the dashboards use when rendering a status.
pub enum Severity {
  Neutral,
  Warning,
  Success,
  Danger,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct StatusLabel {
  pub text: &'static str,
  pub severity: Severity,
}

/// Human-readable label for every workflow status.
pub fn label_for(status: SubmissionStatus) -> StatusLabel {
  match status {
    SubmissionStatus::PendingTeacher => StatusLabel {
      text: "Awaiting teacher review",
      severity: Severity::Neutral,
    },
    SubmissionStatus::PendingTpo => StatusLabel {
      text: "Awaiting T&P review",
      severity: Severity::Warning,
    },
    SubmissionStatus::Approved => StatusLabel {
      text: "Approved",
      severity: Severity::Success,
    },
    SubmissionStatus::RejectedTeacher => StatusLabel {
      text: "Rejected by teacher",
      severity: Severity::Danger,
    },
    SubmissionStatus::Rejected => StatusLabel {
      text: "Rejected by T&P cell",
      severity: Severity::Danger,
    },
  }
}
