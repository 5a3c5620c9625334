//! Error types for the flash message queue

use crate::session::SessionError;
use thiserror::Error;

/// Text shown to the end user when a request halts because no redirect
/// target was configured.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors raised by flash message operations
///
/// Empty message text, unrecognised types and a missing session namespace are
/// not errors; they are reported through [`AddOutcome`](crate::AddOutcome) and
/// [`RenderOutcome`](crate::RenderOutcome) instead.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FlashError {
	/// A message was queued but no redirect target was ever configured
	#[error("no redirect target configured for queued flash messages")]
	MisconfiguredRedirect,

	#[error("invalid flash configuration: {0}")]
	InvalidConfig(String),

	#[error("session error: {0}")]
	Session(#[from] SessionError),

	#[error("flash message serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("failed to parse flash configuration: {0}")]
	ConfigParse(#[from] toml::de::Error),

	#[error("failed to write rendered flash messages: {0}")]
	Io(#[from] std::io::Error),
}

impl FlashError {
	/// Whether the current request must stop and show the generic failure page
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_core::FlashError;
	///
	/// assert!(FlashError::MisconfiguredRedirect.halts_request());
	/// assert!(!FlashError::InvalidConfig("bad".into()).halts_request());
	/// ```
	pub fn halts_request(&self) -> bool {
		matches!(self, FlashError::MisconfiguredRedirect)
	}
}

/// Result type for flash message operations
pub type FlashResult<T> = Result<T, FlashError>;
