use crate::{
  newtypes::PostingId,
  source::internship_posting::{
    InternshipPosting,
    InternshipPostingInsertForm,
    InternshipPostingUpdateForm,
  },
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{dsl::count_star, ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use internport_db_schema_file::schema::internship_posting;
use internport_utils::error::{PortalErrorExt, PortalErrorType, PortalResult};

impl Crud for InternshipPosting {
  type InsertForm = InternshipPostingInsertForm;
  type UpdateForm = InternshipPostingUpdateForm;
  type IdType = PostingId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::insert_into(internship_posting::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntCreatePosting)
  }

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    internship_posting::table
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
    diesel::update(internship_posting::table.find(id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntUpdatePosting)
  }
}

impl InternshipPosting {
  pub async fn find_paginated(
    pool: &mut DbPool<'_>,
    page_num: u64,
    page_size: u64,
    open_only: bool,
  ) -> PortalResult<(Vec<Self>, u64)> {
    let conn = &mut get_conn(pool).await?;

    let offset = (page_num.saturating_sub(1)) * page_size;

    let mut query = internship_posting::table.into_boxed();
    if open_only {
      query = query.filter(internship_posting::is_open.eq(true));
    }

    let postings = query
      .order_by(internship_posting::created_at.desc())
      .limit(page_size as i64)
      .offset(offset as i64)
      .select(Self::as_select())
      .load::<Self>(conn)
      .await?;

    let mut count_query = internship_posting::table.into_boxed();
    if open_only {
      count_query = count_query.filter(internship_posting::is_open.eq(true));
    }

    let total = count_query
      .select(count_star())
      .get_result::<i64>(conn)
      .await?;

    Ok((postings, total as u64))
  }
}
