use crate::{
  newtypes::{PersonId, WeeklyReportId},
  source::weekly_report::{WeeklyReport, WeeklyReportInsertForm, WeeklyReportUpdateForm},
  traits::Crud,
  utils::{get_conn, limit_fetch, DbPool},
};
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use internport_db_schema_file::schema::weekly_report;
use internport_utils::{
  error::{PortalErrorExt, PortalErrorType, PortalResult},
  utils::validation::{is_valid_report_summary, is_valid_week_number},
};

impl Crud for WeeklyReport {
  type InsertForm = WeeklyReportInsertForm;
  type UpdateForm = WeeklyReportUpdateForm;
  type IdType = WeeklyReportId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> PortalResult<Self> {
    is_valid_week_number(form.week_number)?;
    is_valid_report_summary(&form.summary)?;

    let conn = &mut get_conn(pool).await?;
    diesel::insert_into(weekly_report::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntCreateWeeklyReport)
  }

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    weekly_report::table
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
    diesel::update(weekly_report::table.find(id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntUpdateWeeklyReport)
  }
}

impl WeeklyReport {
  pub async fn list_by_person(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
  ) -> PortalResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    weekly_report::table
      .filter(weekly_report::person_id.eq(person_id))
      .order_by(weekly_report::week_number.asc())
      .load::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::DatabaseError)
  }

  /// Reports still waiting for a teacher comment, oldest first.
  pub async fn list_unreviewed(
    pool: &mut DbPool<'_>,
    limit: Option<i64>,
  ) -> PortalResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    let limit = limit_fetch(limit)?;
    weekly_report::table
      .filter(weekly_report::reviewed_at.is_null())
      .order_by(weekly_report::created_at.asc())
      .limit(limit)
      .load::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::DatabaseError)
  }
}
