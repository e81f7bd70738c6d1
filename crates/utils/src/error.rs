use cfg_if::cfg_if;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::{Display, EnumIter};

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[cfg_attr(feature = "ts-rs", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts-rs", ts(export))]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum PortalErrorType {
  NotFound,
  /// The submission is in a terminal state, the actor is not the reviewer
  /// authorized for the current state, or another reviewer acted first.
  ForbiddenTransition,
  RejectionReasonRequired,
  ReviewTextTooLong,
  CompanyNameRequired,
  RoleTitleRequired,
  ResumeRequired,
  InvalidDateRange,
  EmptyReportSummary,
  InvalidWeekNumber,
  CertificateUrlRequired,
  EmptyName,
  InvalidEmail,
  EmailAlreadyExists,
  NotATeacher,
  NotATpOfficer,
  NotASuperAdmin,
  PostingClosed,
  AlreadyApplied,
  CouldntCreateNocRequest,
  CouldntUpdateNocRequest,
  CouldntCreateApplication,
  CouldntUpdateApplication,
  CouldntCreatePosting,
  CouldntUpdatePosting,
  CouldntCreateWeeklyReport,
  CouldntUpdateWeeklyReport,
  CouldntCreateCertificate,
  CouldntUpdateCertificate,
  CouldntCreatePerson,
  CouldntUpdatePerson,
  CouldntCreateNotification,
  CouldntConnectDatabase,
  DatabaseError,
  InvalidUrl,
  InvalidField(String),
  Unknown(String),
}

cfg_if! {
  if #[cfg(feature = "full")] {

    use std::{fmt, backtrace::Backtrace};
    pub type PortalResult<T> = Result<T, PortalError>;

    pub struct PortalError {
      pub error_type: PortalErrorType,
      pub inner: anyhow::Error,
      pub context: Backtrace,
    }

    impl<T> From<T> for PortalError
    where
      T: Into<anyhow::Error>,
    {
      fn from(t: T) -> Self {
        let cause = t.into();
        let error_type = match cause.downcast_ref::<diesel::result::Error>() {
          Some(&diesel::NotFound) => PortalErrorType::NotFound,
          _ => PortalErrorType::Unknown(format!("{}", &cause))
        };
        PortalError {
          error_type,
          inner: cause,
          context: Backtrace::capture(),
        }
      }
    }

    impl Debug for PortalError {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortalError")
         .field("message", &self.error_type)
         .field("inner", &self.inner)
         .field("context", &self.context)
         .finish()
      }
    }

    impl fmt::Display for PortalError {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", &self.error_type)?;
        writeln!(f, "{}", self.inner)?;
        fmt::Display::fmt(&self.context, f)
      }
    }

    impl From<PortalErrorType> for PortalError {
      fn from(error_type: PortalErrorType) -> Self {
        let inner = anyhow::anyhow!("{}", error_type);
        PortalError {
          error_type,
          inner,
          context: Backtrace::capture(),
        }
      }
    }

    pub trait PortalErrorExt<T, E: Into<anyhow::Error>> {
      fn with_portal_type(self, error_type: PortalErrorType) -> PortalResult<T>;
    }

    impl<T, E: Into<anyhow::Error>> PortalErrorExt<T, E> for Result<T, E> {
      fn with_portal_type(self, error_type: PortalErrorType) -> PortalResult<T> {
        self.map_err(|error| PortalError {
          error_type,
          inner: error.into(),
          context: Backtrace::capture(),
        })
      }
    }

    pub trait PortalErrorExt2<T> {
      fn with_portal_type(self, error_type: PortalErrorType) -> PortalResult<T>;
      fn into_anyhow(self) -> Result<T, anyhow::Error>;
    }

    impl<T> PortalErrorExt2<T> for PortalResult<T> {
      fn with_portal_type(self, error_type: PortalErrorType) -> PortalResult<T> {
        self.map_err(|mut e| {
          e.error_type = error_type;
          e
        })
      }
      // this function can't be an impl From or similar because it would conflict with one of the
      // other broad Into<> implementations
      fn into_anyhow(self) -> Result<T, anyhow::Error> {
        self.map_err(|e| e.inner)
      }
    }

  }
}
