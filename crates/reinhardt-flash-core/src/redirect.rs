//! Redirect instructions produced by the finalize step

use std::fmt;

/// Where the host should send the user after flash messages were queued
///
/// The host turns this into an HTTP redirect and stops processing the current
/// request; see `reinhardt-flash-http` for a ready-made response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
	location: String,
}

impl Redirect {
	pub fn new(location: impl Into<String>) -> Self {
		Self {
			location: location.into(),
		}
	}

	/// Target URL for the `Location` header
	pub fn location(&self) -> &str {
		&self.location
	}

	pub fn into_location(self) -> String {
		self.location
	}
}

impl fmt::Display for Redirect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "redirect to {}", self.location)
	}
}
