use crate::newtypes::{CertificateId, PersonId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[cfg(feature = "full")]
use internport_db_schema_file::schema::completion_certificate;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = completion_certificate))]
#[cfg_attr(feature = "full", diesel(check_for_backend(diesel::pg::Pg)))]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(optional_fields, export))]
#[serde(rename_all = "camelCase")]
/// A certificate uploaded by a student at the end of an internship,
/// verified by a T&P officer.
pub struct CompletionCertificate {
  pub id: CertificateId,
  pub person_id: PersonId,
  pub certificate_url: String,
  pub issued_on: NaiveDate,
  pub remarks: Option<String>,
  pub verified_by: Option<PersonId>,
  pub verified_at: Option<DateTime<Utc>>,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new)]
#[cfg_attr(feature = "full", derive(Insertable, Serialize, Deserialize))]
#[cfg_attr(feature = "full", diesel(table_name = completion_certificate))]
pub struct CompletionCertificateInsertForm {
  pub person_id: PersonId,
  pub certificate_url: String,
  pub issued_on: NaiveDate,
  #[new(default)]
  pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "full", derive(AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = completion_certificate))]
pub struct CompletionCertificateUpdateForm {
  pub remarks: Option<Option<String>>,
  pub verified_by: Option<Option<PersonId>>,
  pub verified_at: Option<Option<DateTime<Utc>>>,
}
