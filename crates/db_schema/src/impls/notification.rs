use crate::{
  newtypes::{NotificationId, PersonId},
  source::notification::{Notification, NotificationInsertForm, NotificationUpdateForm},
  traits::Crud,
  utils::{get_conn, limit_fetch, DbPool},
};
use diesel::{dsl::count, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use internport_db_schema_file::schema::notification;
use internport_utils::error::{PortalErrorExt, PortalErrorType, PortalResult};

impl Crud for Notification {
  type InsertForm = NotificationInsertForm;
  type UpdateForm = NotificationUpdateForm;
  type IdType = NotificationId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::insert_into(notification::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntCreateNotification)
  }

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    notification::table
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
    diesel::update(notification::table.find(id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::DatabaseError)
  }
}

impl Notification {
  pub async fn list_for_recipient(
    pool: &mut DbPool<'_>,
    recipient_id: PersonId,
    unread_only: bool,
    limit: Option<i64>,
  ) -> PortalResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    let limit = limit_fetch(limit)?;

    let mut query = notification::table
      .filter(notification::recipient_id.eq(recipient_id))
      .into_boxed();
    if unread_only {
      query = query.filter(notification::read.eq(false));
    }

    query
      .order_by(notification::created_at.desc())
      .limit(limit)
      .load::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::DatabaseError)
  }

  pub async fn unread_count(pool: &mut DbPool<'_>, recipient_id: PersonId) -> PortalResult<i64> {
    let conn = &mut get_conn(pool).await?;
    notification::table
      .filter(notification::recipient_id.eq(recipient_id))
      .filter(notification::read.eq(false))
      .select(count(notification::id))
      .first::<i64>(conn)
      .await
      .with_portal_type(PortalErrorType::DatabaseError)
  }

  pub async fn mark_read(pool: &mut DbPool<'_>, id: NotificationId) -> PortalResult<Self> {
    let form = NotificationUpdateForm { read: Some(true) };
    Self::update(pool, id, &form).await
  }
}
