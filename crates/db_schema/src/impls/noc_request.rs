use crate::{
  newtypes::{NocRequestId, PersonId},
  source::noc_request::{NocRequest, NocRequestInsertForm, NocRequestUpdateForm},
  traits::Crud,
  utils::{get_conn, limit_fetch, DbPool},
};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;
use internport_db_schema_file::{enums::SubmissionStatus, schema::noc_request};
use internport_utils::error::{PortalErrorExt, PortalErrorType, PortalResult};

impl Crud for NocRequest {
  type InsertForm = NocRequestInsertForm;
  type UpdateForm = NocRequestUpdateForm;
  type IdType = NocRequestId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::insert_into(noc_request::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntCreateNocRequest)
  }

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    noc_request::table
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
    diesel::update(noc_request::table.find(id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntUpdateNocRequest)
  }
}

impl NocRequest {
  /// Writes the review outcome only if the row still carries the status the
  /// reviewer acted on. Returns `None` when another transition won the race.
  pub async fn update_status_if(
    pool: &mut DbPool<'_>,
    id: NocRequestId,
    expected: SubmissionStatus,
    form: &NocRequestUpdateForm,
  ) -> PortalResult<Option<Self>> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(
      noc_request::table
        .find(id)
        .filter(noc_request::status.eq(expected)),
    )
    .set(form)
    .get_result::<Self>(conn)
    .await
    .optional()
    .with_portal_type(PortalErrorType::CouldntUpdateNocRequest)
  }

  pub async fn list_by_person(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
  ) -> PortalResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    noc_request::table
      .filter(noc_request::person_id.eq(person_id))
      .order_by(noc_request::created_at.desc())
      .load::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::DatabaseError)
  }

  /// Review queue for a stage, oldest first.
  pub async fn list_with_status(
    pool: &mut DbPool<'_>,
    status: SubmissionStatus,
    limit: Option<i64>,
  ) -> PortalResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    let limit = limit_fetch(limit)?;
    noc_request::table
      .filter(noc_request::status.eq(status))
      .order_by(noc_request::created_at.asc())
      .limit(limit)
      .load::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::DatabaseError)
  }
}
