use crate::newtypes::{NocRequestId, PersonId};
use chrono::{DateTime, NaiveDate, Utc};
use internport_db_schema_file::enums::SubmissionStatus;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[cfg(feature = "full")]
use internport_db_schema_file::schema::noc_request;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = noc_request))]
#[cfg_attr(feature = "full", diesel(check_for_backend(diesel::pg::Pg)))]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(optional_fields, export))]
#[serde(rename_all = "camelCase")]
/// A student's request for a No-Objection Certificate covering an external
/// internship. Passes through the two-stage review workflow.
pub struct NocRequest {
  pub id: NocRequestId,
  pub person_id: PersonId,
  pub company_name: String,
  pub role_title: String,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub stipend: Option<f64>,
  pub offer_letter_url: Option<String>,
  pub status: SubmissionStatus,
  pub reviewer_comments: Option<String>,
  pub rejection_reason: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new)]
#[cfg_attr(feature = "full", derive(Insertable, Serialize, Deserialize))]
#[cfg_attr(feature = "full", diesel(table_name = noc_request))]
pub struct NocRequestInsertForm {
  pub person_id: PersonId,
  pub company_name: String,
  pub role_title: String,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  #[new(default)]
  pub stipend: Option<f64>,
  #[new(default)]
  pub offer_letter_url: Option<String>,
  #[new(default)]
  pub status: Option<SubmissionStatus>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "full", derive(AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = noc_request))]
pub struct NocRequestUpdateForm {
  pub status: Option<SubmissionStatus>,
  pub reviewer_comments: Option<Option<String>>,
  pub rejection_reason: Option<Option<String>>,
  pub updated_at: Option<DateTime<Utc>>,
}
