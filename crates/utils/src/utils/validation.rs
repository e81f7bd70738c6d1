use crate::{
  error::{PortalErrorType, PortalResult},
  REVIEW_TEXT_MAX_LENGTH,
};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

const ALLOWED_URL_SCHEMES: [&str; 2] = ["http", "https"];

const URL_MAX_LENGTH: usize = 2000;
const REPORT_SUMMARY_MAX_LENGTH: usize = 4000;
/// Academic weeks in an internship term.
const WEEK_NUMBER_MAX: i32 = 52;

fn max_length_check(item: &str, max_length: usize, max_msg: PortalErrorType) -> PortalResult<()> {
  if item.len() > max_length {
    Err(max_msg.into())
  } else {
    Ok(())
  }
}

fn min_length_check(item: &str, min_length: usize, min_msg: PortalErrorType) -> PortalResult<()> {
  if item.len() < min_length {
    Err(min_msg.into())
  } else {
    Ok(())
  }
}

/// Checks that a free-text field the submitter must fill is present after trimming.
pub fn is_required_text(item: &str, missing_msg: PortalErrorType) -> PortalResult<()> {
  min_length_check(item.trim(), 1, missing_msg)
}

pub fn is_valid_email(email: &str) -> bool {
  // This is a reasonable basic email regex
  #[allow(clippy::expect_used)]
  static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("compile regex"));
  EMAIL_REGEX.is_match(email)
}

/// Validates an uploaded-document reference (resume, offer letter, report, certificate).
pub fn is_valid_document_url(url: &str) -> PortalResult<Url> {
  max_length_check(url, URL_MAX_LENGTH, PortalErrorType::InvalidUrl)?;
  let url = Url::parse(url).map_err(|_| PortalErrorType::InvalidUrl)?;
  if !ALLOWED_URL_SCHEMES.contains(&url.scheme()) {
    return Err(PortalErrorType::InvalidUrl.into());
  }
  Ok(url)
}

pub fn is_valid_review_text(text: &str) -> PortalResult<()> {
  max_length_check(text, REVIEW_TEXT_MAX_LENGTH, PortalErrorType::ReviewTextTooLong)
}

pub fn is_valid_report_summary(summary: &str) -> PortalResult<()> {
  is_required_text(summary, PortalErrorType::EmptyReportSummary)?;
  max_length_check(
    summary,
    REPORT_SUMMARY_MAX_LENGTH,
    PortalErrorType::EmptyReportSummary,
  )
}

pub fn is_valid_week_number(week_number: i32) -> PortalResult<()> {
  if (1..=WEEK_NUMBER_MAX).contains(&week_number) {
    Ok(())
  } else {
    Err(PortalErrorType::InvalidWeekNumber.into())
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::*;
  use crate::error::PortalResult;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_valid_email() {
    assert!(is_valid_email("student@university.edu"));
    assert!(is_valid_email("t.officer+noc@tnp.university.edu"));
    assert!(!is_valid_email("no-at-sign"));
    assert!(!is_valid_email("spaces in@mail.edu"));
    assert!(!is_valid_email("missing@tld"));
  }

  #[test]
  fn test_document_url() -> PortalResult<()> {
    assert!(is_valid_document_url("https://files.university.edu/resume.pdf").is_ok());
    assert!(is_valid_document_url("http://files.university.edu/offer.pdf").is_ok());
    assert!(is_valid_document_url("ftp://files.university.edu/resume.pdf").is_err());
    assert!(is_valid_document_url("not a url").is_err());

    let too_long = format!("https://files.university.edu/{}", "a".repeat(URL_MAX_LENGTH));
    assert!(is_valid_document_url(&too_long).is_err());
    Ok(())
  }

  #[test]
  fn test_required_text() {
    assert!(is_required_text("Acme Corp", PortalErrorType::CompanyNameRequired).is_ok());
    assert_eq!(
      PortalErrorType::CompanyNameRequired,
      is_required_text("   ", PortalErrorType::CompanyNameRequired)
        .unwrap_err()
        .error_type
    );
  }

  #[test]
  fn test_week_number() {
    assert!(is_valid_week_number(1).is_ok());
    assert!(is_valid_week_number(52).is_ok());
    assert!(is_valid_week_number(0).is_err());
    assert!(is_valid_week_number(53).is_err());
    assert!(is_valid_week_number(-3).is_err());
  }

  #[test]
  fn test_review_text_length() {
    assert!(is_valid_review_text("looks complete").is_ok());
    assert!(is_valid_review_text(&"x".repeat(REVIEW_TEXT_MAX_LENGTH + 1)).is_err());
  }
}
