use crate::newtypes::PersonId;
use chrono::{DateTime, Utc};
use internport_db_schema_file::enums::UserRole;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[cfg(feature = "full")]
use internport_db_schema_file::schema::person;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = person))]
#[cfg_attr(feature = "full", diesel(check_for_backend(diesel::pg::Pg)))]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(optional_fields, export))]
#[serde(rename_all = "camelCase")]
/// A portal user. The role stored here is the only source of authorization;
/// the authenticated email merely selects the row.
pub struct Person {
  pub id: PersonId,
  pub name: String,
  pub email: String,
  pub role: UserRole,
  pub enrollment_no: Option<String>,
  pub deleted_at: Option<DateTime<Utc>>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new)]
#[cfg_attr(feature = "full", derive(Insertable, Serialize, Deserialize))]
#[cfg_attr(feature = "full", diesel(table_name = person))]
pub struct PersonInsertForm {
  pub name: String,
  pub email: String,
  pub role: UserRole,
  #[new(default)]
  pub enrollment_no: Option<String>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "full", derive(Serialize, Deserialize, AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = person))]
pub struct PersonUpdateForm {
  pub name: Option<String>,
  pub role: Option<UserRole>,
  pub enrollment_no: Option<Option<String>>,
  pub deleted_at: Option<Option<DateTime<Utc>>>,
  pub updated_at: Option<DateTime<Utc>>,
}
