pub mod error;
#[cfg(feature = "full")]
pub mod settings;
#[cfg(feature = "full")]
pub mod utils;

/// Maximum length accepted for free-text review fields (comments, reasons).
pub const REVIEW_TEXT_MAX_LENGTH: usize = 2000;
