use crate::{
  newtypes::PersonId,
  source::person::{Person, PersonInsertForm, PersonUpdateForm},
  traits::Crud,
  utils::{get_conn, limit_fetch, DbPool},
};
use chrono::Utc;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use internport_db_schema_file::{enums::UserRole, schema::person};
use internport_utils::{
  error::{PortalErrorExt, PortalErrorType, PortalResult},
  utils::validation::{is_required_text, is_valid_email},
};

impl Crud for Person {
  type InsertForm = PersonInsertForm;
  type UpdateForm = PersonUpdateForm;
  type IdType = PersonId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> PortalResult<Self> {
    is_required_text(&form.name, PortalErrorType::EmptyName)?;
    if !is_valid_email(&form.email) {
      return Err(PortalErrorType::InvalidEmail.into());
    }
    if Person::find_by_email(pool, &form.email).await?.is_some() {
      return Err(PortalErrorType::EmailAlreadyExists.into());
    }

    let conn = &mut get_conn(pool).await?;
    diesel::insert_into(person::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntCreatePerson)
  }

  async fn read(pool: &mut DbPool<'_>, person_id: Self::IdType) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    person::table
      .find(person_id)
      .filter(person::deleted_at.is_null())
      .first::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::NotFound)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    person_id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> PortalResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(person::table.find(person_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntUpdatePerson)
  }
}

impl Person {
  /// Maps an authenticated identity to its portal row. Role authorization
  /// must only ever come from the row this returns.
  pub async fn find_by_email(pool: &mut DbPool<'_>, email: &str) -> PortalResult<Option<Self>> {
    let conn = &mut get_conn(pool).await?;
    person::table
      .filter(person::email.eq(email))
      .filter(person::deleted_at.is_null())
      .first::<Self>(conn)
      .await
      .optional()
      .with_portal_type(PortalErrorType::DatabaseError)
  }

  pub async fn list_paginated(
    pool: &mut DbPool<'_>,
    role: Option<UserRole>,
    limit: Option<i64>,
    offset: i64,
  ) -> PortalResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    let limit = limit_fetch(limit)?;

    let mut query = person::table.into_boxed();
    if let Some(role) = role {
      query = query.filter(person::role.eq(role));
    }

    query
      .filter(person::deleted_at.is_null())
      .order_by(person::created_at.desc())
      .limit(limit)
      .offset(offset)
      .select(Self::as_select())
      .load::<Self>(conn)
      .await
      .with_portal_type(PortalErrorType::DatabaseError)
  }

  pub async fn soft_delete(pool: &mut DbPool<'_>, person_id: PersonId) -> PortalResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(person::table.find(person_id))
      .set((
        person::deleted_at.eq(Some(Utc::now())),
        person::updated_at.eq(Utc::now()),
      ))
      .execute(conn)
      .await
      .with_portal_type(PortalErrorType::CouldntUpdatePerson)
  }

  pub fn require_teacher(&self) -> PortalResult<()> {
    if self.role == UserRole::Teacher {
      Ok(())
    } else {
      Err(PortalErrorType::NotATeacher.into())
    }
  }

  pub fn require_tp_officer(&self) -> PortalResult<()> {
    if self.role == UserRole::TpOfficer {
      Ok(())
    } else {
      Err(PortalErrorType::NotATpOfficer.into())
    }
  }

  pub fn require_super_admin(&self) -> PortalResult<()> {
    if self.role == UserRole::SuperAdmin {
      Ok(())
    } else {
      Err(PortalErrorType::NotASuperAdmin.into())
    }
  }
}
