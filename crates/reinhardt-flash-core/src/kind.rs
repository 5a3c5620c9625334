//! Flash message type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a flash message
///
/// Each type has a single-character key that is used as the bucket name in
/// session state. The declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashType {
	#[serde(alias = "e")]
	Error,
	#[serde(alias = "w")]
	Warning,
	#[serde(alias = "s")]
	Success,
	#[serde(alias = "i")]
	Info,
}

impl FlashType {
	/// Type used when an unrecognised type is supplied
	pub const DEFAULT: FlashType = FlashType::Info;

	/// Canonical display order
	pub const DISPLAY_ORDER: [FlashType; 4] = [
		FlashType::Error,
		FlashType::Warning,
		FlashType::Success,
		FlashType::Info,
	];

	/// Returns the single-character bucket key
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_core::FlashType;
	///
	/// assert_eq!(FlashType::Error.key(), 'e');
	/// assert_eq!(FlashType::Info.key(), 'i');
	/// ```
	pub fn key(self) -> char {
		match self {
			FlashType::Error => 'e',
			FlashType::Warning => 'w',
			FlashType::Success => 's',
			FlashType::Info => 'i',
		}
	}

	/// Returns the bucket key as a string slice
	pub fn key_str(self) -> &'static str {
		match self {
			FlashType::Error => "e",
			FlashType::Warning => "w",
			FlashType::Success => "s",
			FlashType::Info => "i",
		}
	}

	/// Returns the type name
	pub fn as_str(self) -> &'static str {
		match self {
			FlashType::Error => "error",
			FlashType::Warning => "warning",
			FlashType::Success => "success",
			FlashType::Info => "info",
		}
	}

	/// Looks up a type by its exact bucket key
	pub fn from_key(key: char) -> Option<Self> {
		match key {
			'e' => Some(FlashType::Error),
			'w' => Some(FlashType::Warning),
			's' => Some(FlashType::Success),
			'i' => Some(FlashType::Info),
			_ => None,
		}
	}

	/// Looks up a type by its exact bucket key given as a string
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_core::FlashType;
	///
	/// assert_eq!(FlashType::from_key_str("w"), Some(FlashType::Warning));
	/// assert_eq!(FlashType::from_key_str("warning"), None);
	/// assert_eq!(FlashType::from_key_str("W"), None);
	/// ```
	pub fn from_key_str(key: &str) -> Option<Self> {
		let mut chars = key.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Self::from_key(c),
			_ => None,
		}
	}

	/// Normalises a type given when queueing a message
	///
	/// Inputs longer than one character (after trimming) are reduced to their
	/// first character, lower-cased. Anything that does not then name a known
	/// key falls back to [`FlashType::DEFAULT`].
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_core::FlashType;
	///
	/// assert_eq!(FlashType::coerce("success"), FlashType::Success);
	/// assert_eq!(FlashType::coerce("Error"), FlashType::Error);
	/// assert_eq!(FlashType::coerce("w"), FlashType::Warning);
	/// assert_eq!(FlashType::coerce("x"), FlashType::Info);
	/// assert_eq!(FlashType::coerce("Z"), FlashType::Info);
	/// ```
	pub fn coerce(input: &str) -> Self {
		let candidate = if input.trim().chars().count() > 1 {
			input.chars().next().map(|c| c.to_ascii_lowercase())
		} else {
			let mut chars = input.chars();
			match (chars.next(), chars.next()) {
				(Some(c), None) => Some(c),
				_ => None,
			}
		};

		match candidate.and_then(Self::from_key) {
			Some(kind) => kind,
			None => {
				tracing::debug!(
					requested = input,
					fallback = %Self::DEFAULT,
					"Unrecognized flash type, using default"
				);
				Self::DEFAULT
			}
		}
	}

	/// Resolves a type named in a display or clear selection
	///
	/// Only the first character matters and it is compared case-insensitively.
	/// Unlike [`FlashType::coerce`] there is no fallback.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_core::FlashType;
	///
	/// assert_eq!(FlashType::lookup("warning"), Some(FlashType::Warning));
	/// assert_eq!(FlashType::lookup("E"), Some(FlashType::Error));
	/// assert_eq!(FlashType::lookup("x"), None);
	/// assert_eq!(FlashType::lookup(""), None);
	/// ```
	pub fn lookup(input: &str) -> Option<Self> {
		input
			.chars()
			.next()
			.map(|c| c.to_ascii_lowercase())
			.and_then(Self::from_key)
	}
}

impl Default for FlashType {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl fmt::Display for FlashType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<&str> for FlashType {
	fn from(input: &str) -> Self {
		Self::coerce(input)
	}
}

impl From<&String> for FlashType {
	fn from(input: &String) -> Self {
		Self::coerce(input)
	}
}

impl From<String> for FlashType {
	fn from(input: String) -> Self {
		Self::coerce(&input)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_type_is_info() {
		assert_eq!(FlashType::default(), FlashType::Info);
		assert_eq!(FlashType::DEFAULT, FlashType::Info);
	}

	#[rstest]
	#[case("e", FlashType::Error)]
	#[case("w", FlashType::Warning)]
	#[case("s", FlashType::Success)]
	#[case("i", FlashType::Info)]
	#[case("error", FlashType::Error)]
	#[case("Warning", FlashType::Warning)]
	#[case("SUCCESS", FlashType::Success)]
	#[case("info", FlashType::Info)]
	#[case("something", FlashType::Success)]
	fn test_coerce_known(#[case] input: &str, #[case] expected: FlashType) {
		assert_eq!(FlashType::coerce(input), expected);
	}

	#[rstest]
	#[case("x")]
	#[case("Z")]
	#[case("")]
	#[case("zebra")]
	#[case(" e")]
	#[case("  error")]
	fn test_coerce_falls_back_to_default(#[case] input: &str) {
		assert_eq!(FlashType::coerce(input), FlashType::Info);
	}

	#[rstest]
	fn test_single_uppercase_key_is_not_recognized_when_queueing() {
		// A single character is used verbatim, so "E" is not the error key
		assert_eq!(FlashType::coerce("E"), FlashType::Info);
		assert_eq!(FlashType::lookup("E"), Some(FlashType::Error));
	}

	#[rstest]
	fn test_keys_round_trip() {
		for kind in FlashType::DISPLAY_ORDER {
			assert_eq!(FlashType::from_key(kind.key()), Some(kind));
			assert_eq!(FlashType::from_key_str(kind.key_str()), Some(kind));
		}
	}

	#[rstest]
	fn test_display_order() {
		assert_eq!(
			FlashType::DISPLAY_ORDER,
			[
				FlashType::Error,
				FlashType::Warning,
				FlashType::Success,
				FlashType::Info
			]
		);
	}

	#[rstest]
	fn test_serde_accepts_names_and_keys() {
		let from_name: FlashType = serde_json::from_str("\"warning\"").unwrap();
		let from_key: FlashType = serde_json::from_str("\"w\"").unwrap();
		assert_eq!(from_name, FlashType::Warning);
		assert_eq!(from_key, FlashType::Warning);
		assert_eq!(serde_json::to_string(&FlashType::Error).unwrap(), "\"error\"");
	}
}
