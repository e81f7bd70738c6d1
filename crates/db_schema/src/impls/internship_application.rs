use crate::{
  newtypes::{InternshipApplicationId, PersonId, PostingId},
  source::internship_application::{
    InternshipApplication,
    InternshipApplicationInsertForm,
    InternshipApplicationUpdateForm,
  },
  traits::Crud,
  utils::{get_conn, limit_fetch, DbPool},
};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;
use internport_db_schema_file::{enums::SubmissionStatus, schema::internship_application};
use internport_utils::error::{PortalErrorExt, PortalErrorType, PortalResult};

impl Crud for InternshipApplication {
  type InsertForm = InternshipApplicationInsertForm;
  type UpdateForm = InternshipApplicationUpdateForm;
  type IdType = InternshipApplicationId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::insert_into(internship_application::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntCreateApplication)
  }

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    internship_application::table
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
    diesel::update(internship_application::table.find(id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntUpdateApplication)
  }
}

impl InternshipApplication {
  /// Writes the review outcome only if the row still carries the status the
  /// reviewer acted on. Returns `None` when another transition won the race.
  pub async fn update_status_if(
    pool: &mut DbPool<'_>,
    id: InternshipApplicationId,
    expected: SubmissionStatus,
    form: &InternshipApplicationUpdateForm,
  ) -> PortalResult<Option<Self>> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(
      internship_application::table
        .find(id)
        .filter(internship_application::status.eq(expected)),
    )
    .set(form)
    .get_result::<Self>(conn)
    .await
    .optional()
    .with_portal_type(PortalErrorType::CouldntUpdateApplication)
  }

  pub async fn has_person_applied(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    posting_id: PostingId,
  ) -> PortalResult<bool> {
    let conn = &mut get_conn(pool).await?;

    let application_exists = internship_application::table
      .filter(internship_application::person_id.eq(person_id))
      .filter(internship_application::posting_id.eq(posting_id))
      .select(internship_application::id)
      .limit(1)
      .first::<InternshipApplicationId>(conn)
      .await
      .optional()?;
    Ok(application_exists.is_some())
  }

  pub async fn list_by_person(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
  ) -> PortalResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    internship_application::table
      .filter(internship_application::person_id.eq(person_id))
      .order_by(internship_application::created_at.desc())
      .load::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::DatabaseError)
  }

  pub async fn list_by_posting(
    pool: &mut DbPool<'_>,
    posting_id: PostingId,
  ) -> PortalResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    internship_application::table
      .filter(internship_application::posting_id.eq(posting_id))
      .order_by(internship_application::created_at.desc())
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
    internship_application::table
      .filter(internship_application::status.eq(status))
      .order_by(internship_application::created_at.asc())
      .limit(limit)
      .load::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::DatabaseError)
  }
}
