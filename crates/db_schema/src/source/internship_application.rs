use crate::newtypes::{InternshipApplicationId, PersonId, PostingId};
use chrono::{DateTime, Utc};
use internport_db_schema_file::enums::SubmissionStatus;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[cfg(feature = "full")]
use internport_db_schema_file::schema::internship_application;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = internship_application))]
#[cfg_attr(feature = "full", diesel(check_for_backend(diesel::pg::Pg)))]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(optional_fields, export))]
#[serde(rename_all = "camelCase")]
/// A student's application to a posted internship. Passes through the
/// two-stage review workflow.
pub struct InternshipApplication {
  pub id: InternshipApplicationId,
  pub person_id: PersonId,
  pub posting_id: PostingId,
  pub resume_url: String,
  pub cover_letter: Option<String>,
  pub status: SubmissionStatus,
  pub reviewer_comments: Option<String>,
  pub rejection_reason: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new)]
#[cfg_attr(feature = "full", derive(Insertable, Serialize, Deserialize))]
#[cfg_attr(feature = "full", diesel(table_name = internship_application))]
pub struct InternshipApplicationInsertForm {
  pub person_id: PersonId,
  pub posting_id: PostingId,
  pub resume_url: String,
  #[new(default)]
  pub cover_letter: Option<String>,
  #[new(default)]
  pub status: Option<SubmissionStatus>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "full", derive(AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = internship_application))]
pub struct InternshipApplicationUpdateForm {
  pub status: Option<SubmissionStatus>,
  pub reviewer_comments: Option<Option<String>>,
  pub rejection_reason: Option<Option<String>>,
  pub updated_at: Option<DateTime<Utc>>,
}
