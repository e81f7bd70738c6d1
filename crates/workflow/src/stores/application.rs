use crate::{
  api::CreateInternshipApplication,
  engine::{StatusChange, SubmissionPayload, SubmissionRecord, SubmissionStore},
};
use chrono::Utc;
use internport_db_schema::{
  newtypes::{InternshipApplicationId, PersonId},
  source::{
    internship_application::{
      InternshipApplication,
      InternshipApplicationInsertForm,
      InternshipApplicationUpdateForm,
    },
    internship_posting::InternshipPosting,
  },
  traits::Crud,
  utils::{ActualDbPool, DbPool},
};
use internport_db_schema_file::enums::SubmissionStatus;
use internport_utils::{
  error::{PortalErrorType, PortalResult},
  utils::validation::{is_required_text, is_valid_document_url},
};

impl SubmissionPayload for CreateInternshipApplication {
  fn validate(&self) -> PortalResult<()> {
    is_required_text(&self.resume_url, PortalErrorType::ResumeRequired)?;
    is_valid_document_url(&self.resume_url)?;
    Ok(())
  }
}

impl SubmissionRecord for InternshipApplication {
  type IdType = InternshipApplicationId;

  fn id(&self) -> InternshipApplicationId {
    self.id
  }
  fn submitter_id(&self) -> PersonId {
    self.person_id
  }
  fn status(&self) -> SubmissionStatus {
    self.status
  }
}

/// Database binding of the workflow engine for internship applications.
#[derive(Clone)]
pub struct InternshipApplicationStore {
  pool: ActualDbPool,
}

impl InternshipApplicationStore {
  pub fn new(pool: ActualDbPool) -> Self {
    InternshipApplicationStore { pool }
  }
}

impl SubmissionStore for InternshipApplicationStore {
  const KIND: &'static str = "internship application";

  type IdType = InternshipApplicationId;
  type Payload = CreateInternshipApplication;
  type Record = InternshipApplication;

  async fn create(
    &self,
    submitter_id: PersonId,
    payload: &CreateInternshipApplication,
  ) -> PortalResult<InternshipApplication> {
    let pool = &mut DbPool::Pool(&self.pool);

    let posting = InternshipPosting::read(pool, payload.posting_id).await?;
    if !posting.is_open || posting.apply_by < Utc::now().date_naive() {
      return Err(PortalErrorType::PostingClosed.into());
    }
    if InternshipApplication::has_person_applied(pool, submitter_id, payload.posting_id).await? {
      return Err(PortalErrorType::AlreadyApplied.into());
    }

    let form = InternshipApplicationInsertForm {
      person_id: submitter_id,
      posting_id: payload.posting_id,
      resume_url: payload.resume_url.trim().to_string(),
      cover_letter: payload.cover_letter.clone(),
      status: Some(SubmissionStatus::PendingTeacher),
    };
    InternshipApplication::create(pool, &form).await
  }

  async fn read(&self, id: InternshipApplicationId) -> PortalResult<InternshipApplication> {
    let pool = &mut DbPool::Pool(&self.pool);
    InternshipApplication::read(pool, id).await
  }

  async fn update_status_if(
    &self,
    id: InternshipApplicationId,
    expected: SubmissionStatus,
    change: &StatusChange,
  ) -> PortalResult<Option<InternshipApplication>> {
    let pool = &mut DbPool::Pool(&self.pool);
    let form = InternshipApplicationUpdateForm {
      status: Some(change.status),
      reviewer_comments: change.reviewer_comments.clone().map(Some),
      rejection_reason: change.rejection_reason.clone().map(Some),
      updated_at: Some(change.updated_at),
    };
    InternshipApplication::update_status_if(pool, id, expected, &form).await
  }
}
