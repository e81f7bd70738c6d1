use chrono::Utc;
use internport_db_schema::{
  newtypes::{CertificateId, WeeklyReportId},
  source::{
    completion_certificate::{CompletionCertificate, CompletionCertificateUpdateForm},
    person::Person,
    weekly_report::{WeeklyReport, WeeklyReportUpdateForm},
  },
  traits::Crud,
  utils::{diesel_string_update, DbPool},
};
use internport_notify::NotificationSink;
use internport_utils::{
  error::{PortalErrorType, PortalResult},
  utils::validation::{is_required_text, is_valid_review_text},
};

/// Teacher signs off a weekly progress report with a comment.
pub async fn review_weekly_report<N: NotificationSink>(
  pool: &mut DbPool<'_>,
  sink: &N,
  reviewer: &Person,
  report_id: WeeklyReportId,
  comment: &str,
) -> PortalResult<WeeklyReport> {
  reviewer.require_teacher()?;
  is_required_text(comment, PortalErrorType::InvalidField("comment".into()))?;
  is_valid_review_text(comment)?;

  let form = WeeklyReportUpdateForm {
    teacher_comment: diesel_string_update(Some(comment.trim())),
    reviewed_at: Some(Some(Utc::now())),
    updated_at: Some(Utc::now()),
    ..Default::default()
  };
  let report = WeeklyReport::update(pool, report_id, &form).await?;

  let body = format!("Your week {} report was reviewed by your teacher", report.week_number);
  if let Err(e) = sink.notify(report.person_id, &body).await {
    tracing::warn!("Couldn't deliver report-review notification: {e}");
  }

  Ok(report)
}

/// T&P officer verifies an uploaded completion certificate.
pub async fn verify_certificate<N: NotificationSink>(
  pool: &mut DbPool<'_>,
  sink: &N,
  verifier: &Person,
  certificate_id: CertificateId,
  remarks: Option<&str>,
) -> PortalResult<CompletionCertificate> {
  verifier.require_tp_officer()?;
  if let Some(remarks) = remarks {
    is_valid_review_text(remarks)?;
  }

  let form = CompletionCertificateUpdateForm {
    remarks: diesel_string_update(remarks),
    verified_by: Some(Some(verifier.id)),
    verified_at: Some(Some(Utc::now())),
  };
  let certificate = CompletionCertificate::update(pool, certificate_id, &form).await?;

  let body = "Your completion certificate was verified by the T&P cell".to_string();
  if let Err(e) = sink.notify(certificate.person_id, &body).await {
    tracing::warn!("Couldn't deliver certificate-verification notification: {e}");
  }

  Ok(certificate)
}
