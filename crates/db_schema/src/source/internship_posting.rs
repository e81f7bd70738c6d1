use crate::newtypes::{PersonId, PostingId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[cfg(feature = "full")]
use internport_db_schema_file::schema::internship_posting;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = internship_posting))]
#[cfg_attr(feature = "full", diesel(check_for_backend(diesel::pg::Pg)))]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(optional_fields, export))]
#[serde(rename_all = "camelCase")]
/// An internship opportunity published by a T&P officer for students to
/// browse and apply to.
pub struct InternshipPosting {
  pub id: PostingId,
  pub company_name: String,
  pub role_title: String,
  pub description: String,
  pub location: Option<String>,
  pub stipend: Option<f64>,
  pub duration_weeks: i32,
  pub apply_by: NaiveDate,
  pub posted_by: PersonId,
  pub is_open: bool,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new)]
#[cfg_attr(feature = "full", derive(Insertable, Serialize, Deserialize))]
#[cfg_attr(feature = "full", diesel(table_name = internship_posting))]
pub struct InternshipPostingInsertForm {
  pub company_name: String,
  pub role_title: String,
  pub description: String,
  #[new(default)]
  pub location: Option<String>,
  #[new(default)]
  pub stipend: Option<f64>,
  pub duration_weeks: i32,
  pub apply_by: NaiveDate,
  pub posted_by: PersonId,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "full", derive(AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = internship_posting))]
pub struct InternshipPostingUpdateForm {
  pub company_name: Option<String>,
  pub role_title: Option<String>,
  pub description: Option<String>,
  pub location: Option<Option<String>>,
  pub stipend: Option<Option<f64>>,
  pub duration_weeks: Option<i32>,
  pub apply_by: Option<NaiveDate>,
  pub is_open: Option<bool>,
  pub updated_at: Option<DateTime<Utc>>,
}
