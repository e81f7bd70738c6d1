use crate::{
  newtypes::{CertificateId, PersonId},
  source::completion_certificate::{
    CompletionCertificate,
    CompletionCertificateInsertForm,
    CompletionCertificateUpdateForm,
  },
  traits::Crud,
  utils::{get_conn, limit_fetch, DbPool},
};
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use internport_db_schema_file::schema::completion_certificate;
use internport_utils::{
  error::{PortalErrorExt, PortalErrorType, PortalResult},
  utils::validation::is_valid_document_url,
};

impl Crud for CompletionCertificate {
  type InsertForm = CompletionCertificateInsertForm;
  type UpdateForm = CompletionCertificateUpdateForm;
  type IdType = CertificateId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> PortalResult<Self> {
    if form.certificate_url.trim().is_empty() {
      return Err(PortalErrorType::CertificateUrlRequired.into());
    }
    is_valid_document_url(&form.certificate_url)?;

    let conn = &mut get_conn(pool).await?;
    diesel::insert_into(completion_certificate::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntCreateCertificate)
  }

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    completion_certificate::table
      .find(id)
      .first::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::NotFound)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(completion_certificate::table.find(id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntUpdateCertificate)
  }
}

impl CompletionCertificate {
  pub async fn list_by_person(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
  ) -> PortalResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    completion_certificate::table
      .filter(completion_certificate::person_id.eq(person_id))
      .order_by(completion_certificate::issued_on.desc())
      .load::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::DatabaseError)
  }

  /// Certificates awaiting T&P verification, oldest first.
  pub async fn list_unverified(
    pool: &mut DbPool<'_>,
    limit: Option<i64>,
  ) -> PortalResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    let limit = limit_fetch(limit)?;
    completion_certificate::table
      .filter(completion_certificate::verified_at.is_null())
      .order_by(completion_certificate::created_at.asc())
      .limit(limit)
      .load::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::DatabaseError)
  }
}
