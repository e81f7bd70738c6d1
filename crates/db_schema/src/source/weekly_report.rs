use crate::newtypes::{PersonId, WeeklyReportId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[cfg(feature = "full")]
use internport_db_schema_file::schema::weekly_report;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = weekly_report))]
#[cfg_attr(feature = "full", diesel(check_for_backend(diesel::pg::Pg)))]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(optional_fields, export))]
#[serde(rename_all = "camelCase")]
/// A weekly progress report filed by a student during an internship.
/// Reviewed once, by the teacher.
pub struct WeeklyReport {
  pub id: WeeklyReportId,
  pub person_id: PersonId,
  pub week_number: i32,
  pub summary: String,
  pub hours_worked: i32,
  pub report_url: Option<String>,
  pub teacher_comment: Option<String>,
  pub reviewed_at: Option<DateTime<Utc>>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new)]
#[cfg_attr(feature = "full", derive(Insertable, Serialize, Deserialize))]
#[cfg_attr(feature = "full", diesel(table_name = weekly_report))]
pub struct WeeklyReportInsertForm {
  pub person_id: PersonId,
  pub week_number: i32,
  pub summary: String,
  pub hours_worked: i32,
  #[new(default)]
  pub report_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "full", derive(AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = weekly_report))]
pub struct WeeklyReportUpdateForm {
  pub summary: Option<String>,
  pub hours_worked: Option<i32>,
  pub report_url: Option<Option<String>>,
  pub teacher_comment: Option<Option<String>>,
  pub reviewed_at: Option<Option<DateTime<Utc>>>,
  pub updated_at: Option<DateTime<Utc>>,
}
