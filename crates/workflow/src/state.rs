use internport_db_schema_file::enums::{SubmissionStatus, UserRole};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(export))]
#[serde(rename_all = "camelCase")]
/// A reviewer's verdict on the submission in front of them.
pub enum Decision {
  Approve,
  Reject,
}

/// The single reviewer role allowed to act while a submission sits in the
/// given state. Terminal states have no reviewer.
pub fn authorized_reviewer(status: SubmissionStatus) -> Option<UserRole> {
  match status {
    SubmissionStatus::PendingTeacher => Some(UserRole::Teacher),
    SubmissionStatus::PendingTpo => Some(UserRole::TpOfficer),
    SubmissionStatus::Approved
    | SubmissionStatus::RejectedTeacher
    | SubmissionStatus::Rejected => None,
  }
}

/// The transition table. Teacher approval enters `PendingTpo` directly; there
/// is no stored teacher-approved state in between.
pub fn next_status(status: SubmissionStatus, decision: Decision) -> Option<SubmissionStatus> {
  match (status, decision) {
    (SubmissionStatus::PendingTeacher, Decision::Approve) => Some(SubmissionStatus::PendingTpo),
    (SubmissionStatus::PendingTeacher, Decision::Reject) => {
      Some(SubmissionStatus::RejectedTeacher)
    }
    (SubmissionStatus::PendingTpo, Decision::Approve) => Some(SubmissionStatus::Approved),
    (SubmissionStatus::PendingTpo, Decision::Reject) => Some(SubmissionStatus::Rejected),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use strum::IntoEnumIterator;

  #[test]
  fn terminal_states_have_no_reviewer_and_no_transitions() {
    for status in SubmissionStatus::iter().filter(SubmissionStatus::is_terminal) {
      assert_eq!(None, authorized_reviewer(status));
      assert_eq!(None, next_status(status, Decision::Approve));
      assert_eq!(None, next_status(status, Decision::Reject));
    }
  }

  #[test]
  fn every_pending_state_has_exactly_one_reviewer() {
    assert_eq!(
      Some(UserRole::Teacher),
      authorized_reviewer(SubmissionStatus::PendingTeacher)
    );
    assert_eq!(
      Some(UserRole::TpOfficer),
      authorized_reviewer(SubmissionStatus::PendingTpo)
    );
  }

  #[test]
  fn success_path_is_forward_only() {
    let first = next_status(SubmissionStatus::PendingTeacher, Decision::Approve);
    assert_eq!(Some(SubmissionStatus::PendingTpo), first);
    let second = next_status(SubmissionStatus::PendingTpo, Decision::Approve);
    assert_eq!(Some(SubmissionStatus::Approved), second);
  }

  #[test]
  fn rejections_short_circuit_to_terminal() {
    let teacher = next_status(SubmissionStatus::PendingTeacher, Decision::Reject);
    assert_eq!(Some(SubmissionStatus::RejectedTeacher), teacher);
    let tpo = next_status(SubmissionStatus::PendingTpo, Decision::Reject);
    assert_eq!(Some(SubmissionStatus::Rejected), tpo);

    for rejected in [SubmissionStatus::RejectedTeacher, SubmissionStatus::Rejected] {
      assert!(rejected.is_terminal());
    }
  }

  /// No sequence of transitions ever revisits a state: walk every decision
  /// sequence up to the enum's size and check each visited status is new.
  #[test]
  fn no_transition_sequence_revisits_a_state() {
    let decisions = [Decision::Approve, Decision::Reject];
    let mut stack = vec![(SubmissionStatus::PendingTeacher, vec![
      SubmissionStatus::PendingTeacher,
    ])];

    while let Some((status, seen)) = stack.pop() {
      for decision in decisions {
        if let Some(next) = next_status(status, decision) {
          assert!(
            !seen.contains(&next),
            "revisited {next:?} after {seen:?}"
          );
          let mut seen = seen.clone();
          seen.push(next);
          stack.push((next, seen));
        }
      }
    }
  }
}
