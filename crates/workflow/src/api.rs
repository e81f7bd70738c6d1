use crate::state::Decision;
use chrono::NaiveDate;
use internport_db_schema::newtypes::{InternshipApplicationId, NocRequestId, PostingId};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(optional_fields, export))]
#[serde(rename_all = "camelCase")]
/// Payload of a new NOC request.
pub struct CreateNocRequest {
  pub company_name: String,
  pub role_title: String,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub stipend: Option<f64>,
  pub offer_letter_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(optional_fields, export))]
#[serde(rename_all = "camelCase")]
/// Payload of a new application to a posted internship.
pub struct CreateInternshipApplication {
  pub posting_id: PostingId,
  pub resume_url: String,
  pub cover_letter: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(optional_fields, export))]
#[serde(rename_all = "camelCase")]
/// A reviewer's verdict on an NOC request.
pub struct ReviewNocRequest {
  pub id: NocRequestId,
  pub approve: bool,
  pub reason: Option<String>,
  pub comment: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(optional_fields, export))]
#[serde(rename_all = "camelCase")]
/// A reviewer's verdict on an internship application.
pub struct ReviewInternshipApplication {
  pub id: InternshipApplicationId,
  pub approve: bool,
  pub reason: Option<String>,
  pub comment: Option<String>,
}

impl ReviewNocRequest {
  pub fn decision(&self) -> Decision {
    if self.approve {
      Decision::Approve
    } else {
      Decision::Reject
    }
  }
}

impl ReviewInternshipApplication {
  pub fn decision(&self) -> Decision {
    if self.approve {
      Decision::Approve
    } else {
      Decision::Reject
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn review_request_maps_to_decision() {
    let review = ReviewNocRequest {
      id: NocRequestId(1),
      approve: true,
      ..Default::default()
    };
    assert_eq!(Decision::Approve, review.decision());

    let review = ReviewInternshipApplication {
      id: InternshipApplicationId(2),
      approve: false,
      reason: Some("resume outdated".into()),
      ..Default::default()
    };
    assert_eq!(Decision::Reject, review.decision());
  }

  #[test]
  fn create_noc_request_serializes_camel_case() -> Result<(), serde_json::Error> {
    let payload = CreateNocRequest {
      company_name: "Acme Corp".into(),
      role_title: "SWE Intern".into(),
      start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default(),
      end_date: NaiveDate::from_ymd_opt(2026, 6, 26).unwrap_or_default(),
      stipend: None,
      offer_letter_url: None,
    };
    let json = serde_json::to_string(&payload)?;
    assert!(json.contains("companyName"));
    assert!(!json.contains("stipend"));
    Ok(())
  }
}
