use crate::{
  api::CreateNocRequest,
  engine::{StatusChange, SubmissionPayload, SubmissionRecord, SubmissionStore},
};
use internport_db_schema::{
  newtypes::{NocRequestId, PersonId},
  source::noc_request::{NocRequest, NocRequestInsertForm, NocRequestUpdateForm},
  traits::Crud,
  utils::{ActualDbPool, DbPool},
};
use internport_db_schema_file::enums::SubmissionStatus;
use internport_utils::{
  error::{PortalErrorType, PortalResult},
  utils::validation::{is_required_text, is_valid_document_url},
};

impl SubmissionPayload for CreateNocRequest {
  fn validate(&self) -> PortalResult<()> {
    is_required_text(&self.company_name, PortalErrorType::CompanyNameRequired)?;
    is_required_text(&self.role_title, PortalErrorType::RoleTitleRequired)?;
    if self.end_date < self.start_date {
      return Err(PortalErrorType::InvalidDateRange.into());
    }
    if let Some(url) = &self.offer_letter_url {
      is_valid_document_url(url)?;
    }
    Ok(())
  }
}

impl SubmissionRecord for NocRequest {
  type IdType = NocRequestId;

  fn id(&self) -> NocRequestId {
    self.id
  }
  fn submitter_id(&self) -> PersonId {
    self.person_id
  }
  fn status(&self) -> SubmissionStatus {
    self.status
  }
}

/// Database binding of the workflow engine for NOC requests.
#[derive(Clone)]
pub struct NocRequestStore {
  pool: ActualDbPool,
}

impl NocRequestStore {
  pub fn new(pool: ActualDbPool) -> Self {
    NocRequestStore { pool }
  }
}

impl SubmissionStore for NocRequestStore {
  const KIND: &'static str = "NOC request";

  type IdType = NocRequestId;
  type Payload = CreateNocRequest;
  type Record = NocRequest;

  async fn create(
    &self,
    submitter_id: PersonId,
    payload: &CreateNocRequest,
  ) -> PortalResult<NocRequest> {
    let pool = &mut DbPool::Pool(&self.pool);
    let form = NocRequestInsertForm {
      person_id: submitter_id,
      company_name: payload.company_name.trim().to_string(),
      role_title: payload.role_title.trim().to_string(),
      start_date: payload.start_date,
      end_date: payload.end_date,
      stipend: payload.stipend,
      offer_letter_url: payload.offer_letter_url.clone(),
      status: Some(SubmissionStatus::PendingTeacher),
    };
    NocRequest::create(pool, &form).await
  }

  async fn read(&self, id: NocRequestId) -> PortalResult<NocRequest> {
    let pool = &mut DbPool::Pool(&self.pool);
    NocRequest::read(pool, id).await
  }

  async fn update_status_if(
    &self,
    id: NocRequestId,
    expected: SubmissionStatus,
    change: &StatusChange,
  ) -> PortalResult<Option<NocRequest>> {
    let pool = &mut DbPool::Pool(&self.pool);
    let form = NocRequestUpdateForm {
      status: Some(change.status),
      reviewer_comments: change.reviewer_comments.clone().map(Some),
      rejection_reason: change.rejection_reason.clone().map(Some),
      updated_at: Some(change.updated_at),
    };
    NocRequest::update_status_if(pool, id, expected, &form).await
  }
}
