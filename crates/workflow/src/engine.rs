use crate::{
  label::label_for,
  state::{authorized_reviewer, next_status, Decision},
};
use chrono::{DateTime, Utc};
use internport_db_schema::newtypes::PersonId;
use internport_db_schema_file::enums::{SubmissionStatus, UserRole};
use internport_notify::NotificationSink;
use internport_utils::{
  error::{PortalErrorType, PortalResult},
  utils::validation::is_valid_review_text,
};

/// Variant-specific submission input, opaque to the engine except for
/// validation at submit time.
pub trait SubmissionPayload {
  fn validate(&self) -> PortalResult<()>;
}

/// The projection of a stored submission the engine needs.
pub trait SubmissionRecord {
  type IdType: Copy + Send;

  fn id(&self) -> Self::IdType;
  fn submitter_id(&self) -> PersonId;
  fn status(&self) -> SubmissionStatus;
}

/// What a successful transition writes. Applied together with the status in a
/// single guarded update; a `None` text field leaves the stored value alone.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
  pub status: SubmissionStatus,
  pub reviewer_comments: Option<String>,
  pub rejection_reason: Option<String>,
  pub updated_at: DateTime<Utc>,
}

/// The record-store boundary of the workflow engine.
///
/// `update_status_if` must write atomically and only when the row still
/// carries `expected`, reporting a miss as `None`. That compare-and-swap is
/// the sole serialization mechanism for concurrent reviewers; the engine does
/// no locking of its own.
#[allow(async_fn_in_trait)]
pub trait SubmissionStore {
  /// Human-readable name used in notification messages.
  const KIND: &'static str;

  type IdType: Copy + Send;
  type Payload: SubmissionPayload + Send + Sync;
  type Record: SubmissionRecord<IdType = Self::IdType> + Send;

  async fn create(
    &self,
    submitter_id: PersonId,
    payload: &Self::Payload,
  ) -> PortalResult<Self::Record>;

  async fn read(&self, id: Self::IdType) -> PortalResult<Self::Record>;

  async fn update_status_if(
    &self,
    id: Self::IdType,
    expected: SubmissionStatus,
    change: &StatusChange,
  ) -> PortalResult<Option<Self::Record>>;
}

/// Drives a submission through `PendingTeacher → PendingTpo → Approved` with
/// rejection short-circuits, stateless between calls.
#[derive(Clone)]
pub struct ApprovalEngine<S, N> {
  store: S,
  sink: N,
}

impl<S, N> ApprovalEngine<S, N>
where
  S: SubmissionStore,
  N: NotificationSink,
{
  pub fn new(store: S, sink: N) -> Self {
    ApprovalEngine { store, sink }
  }

  /// Creates a submission in `PendingTeacher` after payload validation.
  pub async fn submit(
    &self,
    submitter_id: PersonId,
    payload: &S::Payload,
  ) -> PortalResult<S::Record> {
    payload.validate()?;
    self.store.create(submitter_id, payload).await
  }

  /// Applies one reviewer decision.
  ///
  /// Comments are persisted only for the teacher stage; a rejection requires
  /// a non-empty reason. A concurrent transition that wins the store's
  /// compare-and-swap makes this one fail with `ForbiddenTransition`.
  pub async fn transition(
    &self,
    id: S::IdType,
    acting_role: UserRole,
    decision: Decision,
    reason: Option<&str>,
    comment: Option<&str>,
  ) -> PortalResult<S::Record> {
    let record = self.store.read(id).await?;
    let current = record.status();

    let Some(reviewer) = authorized_reviewer(current) else {
      return Err(PortalErrorType::ForbiddenTransition.into());
    };
    if acting_role != reviewer {
      return Err(PortalErrorType::ForbiddenTransition.into());
    }
    let Some(next) = next_status(current, decision) else {
      return Err(PortalErrorType::ForbiddenTransition.into());
    };

    let rejection_reason = match decision {
      Decision::Reject => {
        let reason = reason.map(str::trim).unwrap_or_default();
        if reason.is_empty() {
          return Err(PortalErrorType::RejectionReasonRequired.into());
        }
        is_valid_review_text(reason)?;
        Some(reason.to_string())
      }
      Decision::Approve => None,
    };

    let reviewer_comments = match (reviewer, comment) {
      (UserRole::Teacher, Some(comment)) if !comment.trim().is_empty() => {
        is_valid_review_text(comment)?;
        Some(comment.trim().to_string())
      }
      _ => None,
    };

    let change = StatusChange {
      status: next,
      reviewer_comments,
      rejection_reason,
      updated_at: Utc::now(),
    };

    let updated = self
      .store
      .update_status_if(id, current, &change)
      .await?
      // someone else acted between our read and the guarded write
      .ok_or(PortalErrorType::ForbiddenTransition)?;

    self.notify_status(&updated).await;
    Ok(updated)
  }

  /// Read-only status lookup.
  pub async fn current_state(&self, id: S::IdType) -> PortalResult<SubmissionStatus> {
    Ok(self.store.read(id).await?.status())
  }

  async fn notify_status(&self, record: &S::Record) {
    let label = label_for(record.status());
    let body = format!("Your {} is now: {}", S::KIND, label.text);
    if let Err(e) = self.sink.notify(record.submitter_id(), &body).await {
      tracing::warn!("Couldn't deliver status notification: {e}");
    }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  #![allow(clippy::expect_used)]
  #![allow(clippy::indexing_slicing)]

  use super::*;
  use crate::api::CreateNocRequest;
  use chrono::NaiveDate;
  use pretty_assertions::assert_eq;
  use std::{
    collections::HashMap,
    sync::{
      atomic::{AtomicI32, Ordering},
      Arc,
      Mutex,
    },
  };

  #[derive(Clone, Debug, PartialEq)]
  struct MemSubmission {
    id: i32,
    submitter_id: PersonId,
    status: SubmissionStatus,
    reviewer_comments: Option<String>,
    rejection_reason: Option<String>,
    updated_at: DateTime<Utc>,
  }

  impl SubmissionRecord for MemSubmission {
    type IdType = i32;

    fn id(&self) -> i32 {
      self.id
    }
    fn submitter_id(&self) -> PersonId {
      self.submitter_id
    }
    fn status(&self) -> SubmissionStatus {
      self.status
    }
  }

  /// In-memory store with the same compare-and-swap contract as the database
  /// implementations.
  #[derive(Clone, Default)]
  struct MemStore {
    rows: Arc<Mutex<HashMap<i32, MemSubmission>>>,
    next_id: Arc<AtomicI32>,
  }

  impl SubmissionStore for MemStore {
    const KIND: &'static str = "NOC request";

    type IdType = i32;
    type Payload = CreateNocRequest;
    type Record = MemSubmission;

    async fn create(
      &self,
      submitter_id: PersonId,
      _payload: &CreateNocRequest,
    ) -> PortalResult<MemSubmission> {
      let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
      let row = MemSubmission {
        id,
        submitter_id,
        status: SubmissionStatus::PendingTeacher,
        reviewer_comments: None,
        rejection_reason: None,
        updated_at: Utc::now(),
      };
      self.rows.lock().expect("poisoned").insert(id, row.clone());
      Ok(row)
    }

    async fn read(&self, id: i32) -> PortalResult<MemSubmission> {
      self
        .rows
        .lock()
        .expect("poisoned")
        .get(&id)
        .cloned()
        .ok_or_else(|| PortalErrorType::NotFound.into())
    }

    async fn update_status_if(
      &self,
      id: i32,
      expected: SubmissionStatus,
      change: &StatusChange,
    ) -> PortalResult<Option<MemSubmission>> {
      let mut rows = self.rows.lock().expect("poisoned");
      let Some(row) = rows.get_mut(&id) else {
        return Err(PortalErrorType::NotFound.into());
      };
      if row.status != expected {
        return Ok(None);
      }
      row.status = change.status;
      if let Some(comment) = &change.reviewer_comments {
        row.reviewer_comments = Some(comment.clone());
      }
      if let Some(reason) = &change.rejection_reason {
        row.rejection_reason = Some(reason.clone());
      }
      row.updated_at = change.updated_at;
      Ok(Some(row.clone()))
    }
  }

  #[derive(Clone, Default)]
  struct RecordingSink {
    messages: Arc<Mutex<Vec<(PersonId, String)>>>,
  }

  impl NotificationSink for RecordingSink {
    async fn notify(&self, recipient_id: PersonId, body: &str) -> PortalResult<()> {
      self
        .messages
        .lock()
        .expect("poisoned")
        .push((recipient_id, body.to_string()));
      Ok(())
    }
  }

  fn test_payload() -> CreateNocRequest {
    CreateNocRequest {
      company_name: "Acme Corp".into(),
      role_title: "SWE Intern".into(),
      start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
      end_date: NaiveDate::from_ymd_opt(2026, 6, 26).unwrap(),
      stipend: Some(1500.0),
      offer_letter_url: None,
    }
  }

  fn test_engine() -> (ApprovalEngine<MemStore, RecordingSink>, RecordingSink) {
    let sink = RecordingSink::default();
    let engine = ApprovalEngine::new(MemStore::default(), sink.clone());
    (engine, sink)
  }

  #[tokio::test]
  async fn full_approval_path() -> PortalResult<()> {
    let (engine, sink) = test_engine();
    let student = PersonId(7);

    let submitted = engine.submit(student, &test_payload()).await?;
    assert_eq!(SubmissionStatus::PendingTeacher, submitted.status);

    let teacher_approved = engine
      .transition(submitted.id, UserRole::Teacher, Decision::Approve, None, None)
      .await?;
    assert_eq!(SubmissionStatus::PendingTpo, teacher_approved.status);

    let approved = engine
      .transition(submitted.id, UserRole::TpOfficer, Decision::Approve, None, None)
      .await?;
    assert_eq!(SubmissionStatus::Approved, approved.status);

    // Terminal: a repeat approval must fail and leave the status alone.
    let err = engine
      .transition(submitted.id, UserRole::TpOfficer, Decision::Approve, None, None)
      .await
      .unwrap_err();
    assert_eq!(PortalErrorType::ForbiddenTransition, err.error_type);
    assert_eq!(SubmissionStatus::Approved, engine.current_state(submitted.id).await?);

    // One submitter-directed message per successful transition.
    let messages = sink.messages.lock().expect("poisoned").clone();
    assert_eq!(2, messages.len());
    assert!(messages.iter().all(|(recipient, _)| *recipient == student));
    assert!(messages[0].1.contains("Awaiting T&P review"));
    assert!(messages[1].1.contains("Approved"));

    Ok(())
  }

  #[tokio::test]
  async fn teacher_rejection_is_terminal_and_keeps_reason() -> PortalResult<()> {
    let (engine, _sink) = test_engine();

    let submitted = engine.submit(PersonId(3), &test_payload()).await?;
    let rejected = engine
      .transition(
        submitted.id,
        UserRole::Teacher,
        Decision::Reject,
        Some("incomplete documents"),
        None,
      )
      .await?;
    assert_eq!(SubmissionStatus::RejectedTeacher, rejected.status);
    assert_eq!(Some("incomplete documents".to_string()), rejected.rejection_reason);

    let err = engine
      .transition(submitted.id, UserRole::TpOfficer, Decision::Approve, None, None)
      .await
      .unwrap_err();
    assert_eq!(PortalErrorType::ForbiddenTransition, err.error_type);
    assert_eq!(
      SubmissionStatus::RejectedTeacher,
      engine.current_state(submitted.id).await?
    );

    Ok(())
  }

  #[tokio::test]
  async fn rejecting_without_a_reason_fails_and_changes_nothing() -> PortalResult<()> {
    let (engine, sink) = test_engine();

    let submitted = engine.submit(PersonId(4), &test_payload()).await?;
    for reason in [None, Some(""), Some("   ")] {
      let err = engine
        .transition(submitted.id, UserRole::Teacher, Decision::Reject, reason, None)
        .await
        .unwrap_err();
      assert_eq!(PortalErrorType::RejectionReasonRequired, err.error_type);
    }

    assert_eq!(
      SubmissionStatus::PendingTeacher,
      engine.current_state(submitted.id).await?
    );
    assert!(sink.messages.lock().expect("poisoned").is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn wrong_role_is_rejected_at_every_stage() -> PortalResult<()> {
    let (engine, _sink) = test_engine();

    let submitted = engine.submit(PersonId(5), &test_payload()).await?;
    for role in [UserRole::Student, UserRole::TpOfficer, UserRole::SuperAdmin] {
      let err = engine
        .transition(submitted.id, role, Decision::Approve, None, None)
        .await
        .unwrap_err();
      assert_eq!(PortalErrorType::ForbiddenTransition, err.error_type);
    }
    assert_eq!(
      SubmissionStatus::PendingTeacher,
      engine.current_state(submitted.id).await?
    );

    engine
      .transition(submitted.id, UserRole::Teacher, Decision::Approve, None, None)
      .await?;
    let err = engine
      .transition(submitted.id, UserRole::Teacher, Decision::Approve, None, None)
      .await
      .unwrap_err();
    assert_eq!(PortalErrorType::ForbiddenTransition, err.error_type);

    Ok(())
  }

  #[tokio::test]
  async fn teacher_comment_is_persisted_and_tpo_comment_is_not() -> PortalResult<()> {
    let (engine, _sink) = test_engine();

    let submitted = engine.submit(PersonId(6), &test_payload()).await?;
    let teacher_approved = engine
      .transition(
        submitted.id,
        UserRole::Teacher,
        Decision::Approve,
        None,
        Some("verified offer letter"),
      )
      .await?;
    assert_eq!(
      Some("verified offer letter".to_string()),
      teacher_approved.reviewer_comments
    );

    let approved = engine
      .transition(
        submitted.id,
        UserRole::TpOfficer,
        Decision::Approve,
        None,
        Some("should not be stored"),
      )
      .await?;
    assert_eq!(
      Some("verified offer letter".to_string()),
      approved.reviewer_comments
    );

    Ok(())
  }

  #[tokio::test]
  async fn unknown_submission_is_not_found() {
    let (engine, _sink) = test_engine();
    let err = engine
      .transition(999, UserRole::Teacher, Decision::Approve, None, None)
      .await
      .unwrap_err();
    assert_eq!(PortalErrorType::NotFound, err.error_type);

    let err = engine.current_state(999).await.unwrap_err();
    assert_eq!(PortalErrorType::NotFound, err.error_type);
  }

  #[tokio::test]
  async fn current_state_is_idempotent() -> PortalResult<()> {
    let (engine, _sink) = test_engine();
    let submitted = engine.submit(PersonId(8), &test_payload()).await?;

    let first = engine.current_state(submitted.id).await?;
    let second = engine.current_state(submitted.id).await?;
    assert_eq!(first, second);

    let row = engine.store.read(submitted.id).await?;
    assert_eq!(submitted, row);

    Ok(())
  }

  #[tokio::test]
  async fn invalid_payload_is_rejected_at_submit() {
    let (engine, _sink) = test_engine();

    let mut payload = test_payload();
    payload.company_name = "  ".into();
    let err = engine.submit(PersonId(9), &payload).await.unwrap_err();
    assert_eq!(PortalErrorType::CompanyNameRequired, err.error_type);

    let mut payload = test_payload();
    payload.role_title = String::new();
    let err = engine.submit(PersonId(9), &payload).await.unwrap_err();
    assert_eq!(PortalErrorType::RoleTitleRequired, err.error_type);

    let mut payload = test_payload();
    payload.end_date = payload.start_date.pred_opt().unwrap();
    let err = engine.submit(PersonId(9), &payload).await.unwrap_err();
    assert_eq!(PortalErrorType::InvalidDateRange, err.error_type);
  }

  /// Two reviewers act on the same fresh submission at once: exactly one
  /// transition wins the store's compare-and-swap, the other observes the
  /// post-transition state and fails.
  #[tokio::test]
  async fn concurrent_transitions_resolve_to_one_winner() -> PortalResult<()> {
    let (engine, _sink) = test_engine();
    let submitted = engine.submit(PersonId(10), &test_payload()).await?;
    let id = submitted.id;

    let approve_engine = engine.clone();
    let reject_engine = engine.clone();
    let approve = tokio::spawn(async move {
      approve_engine
        .transition(id, UserRole::Teacher, Decision::Approve, None, None)
        .await
    });
    let reject = tokio::spawn(async move {
      reject_engine
        .transition(id, UserRole::Teacher, Decision::Reject, Some("duplicate request"), None)
        .await
    });

    let results = [approve.await.unwrap(), reject.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(1, successes);
    let losing_error = results
      .iter()
      .find_map(|r| r.as_ref().err())
      .expect("one transition must lose");
    assert_eq!(PortalErrorType::ForbiddenTransition, losing_error.error_type);

    // The stored status matches whichever transition won.
    let final_status = engine.current_state(id).await?;
    let winner_status = results
      .iter()
      .find_map(|r| r.as_ref().ok())
      .expect("one transition must win")
      .status;
    assert_eq!(winner_status, final_status);
    assert!(matches!(
      final_status,
      SubmissionStatus::PendingTpo | SubmissionStatus::RejectedTeacher
    ));

    Ok(())
  }
}
