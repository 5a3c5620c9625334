//! Two-slot wrapper template
//!
//! A wrapper surrounds every rendered message. It uses printf-style `%s`
//! placeholders: the first receives the CSS class string, the second the
//! message body. `%%` produces a literal percent sign.

use crate::error::{FlashError, FlashResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DEFAULT_WRAPPER: &str = "<div class='%s'>%s</div>\n";

/// Parsed wrapper template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WrapperTemplate {
	source: String,
	prefix: String,
	infix: String,
	suffix: String,
}

impl WrapperTemplate {
	/// Parse a wrapper template
	///
	/// The template must contain exactly two `%s` placeholders.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_core::WrapperTemplate;
	///
	/// let wrapper = WrapperTemplate::new("<p class=\"%s\">%s</p>").unwrap();
	/// assert_eq!(wrapper.render("note", "Hi"), "<p class=\"note\">Hi</p>");
	///
	/// assert!(WrapperTemplate::new("<p>%s</p>").is_err());
	/// ```
	pub fn new(source: impl Into<String>) -> FlashResult<Self> {
		let source = source.into();
		let mut parts = vec![String::new()];
		let mut chars = source.chars().peekable();

		while let Some(c) = chars.next() {
			if c != '%' {
				push_char(&mut parts, c);
				continue;
			}
			match chars.peek() {
				Some('s') => {
					chars.next();
					parts.push(String::new());
				}
				Some('%') => {
					chars.next();
					push_char(&mut parts, '%');
				}
				_ => push_char(&mut parts, '%'),
			}
		}

		if parts.len() != 3 {
			return Err(FlashError::InvalidConfig(format!(
				"wrapper template must contain exactly two %s placeholders, found {}",
				parts.len() - 1
			)));
		}

		let suffix = parts.pop().unwrap_or_default();
		let infix = parts.pop().unwrap_or_default();
		let prefix = parts.pop().unwrap_or_default();
		Ok(Self {
			source,
			prefix,
			infix,
			suffix,
		})
	}

	/// Fill the template with a class string and a body
	pub fn render(&self, class: &str, body: &str) -> String {
		let mut out = String::with_capacity(
			self.prefix.len() + class.len() + self.infix.len() + body.len() + self.suffix.len(),
		);
		out.push_str(&self.prefix);
		out.push_str(class);
		out.push_str(&self.infix);
		out.push_str(body);
		out.push_str(&self.suffix);
		out
	}

	/// The template as it was written
	pub fn as_str(&self) -> &str {
		&self.source
	}
}

fn push_char(parts: &mut Vec<String>, c: char) {
	if let Some(last) = parts.last_mut() {
		last.push(c);
	}
}

impl Default for WrapperTemplate {
	fn default() -> Self {
		Self {
			source: DEFAULT_WRAPPER.to_string(),
			prefix: "<div class='".to_string(),
			infix: "'>".to_string(),
			suffix: "</div>\n".to_string(),
		}
	}
}

impl FromStr for WrapperTemplate {
	type Err = FlashError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl TryFrom<String> for WrapperTemplate {
	type Error = FlashError;

	fn try_from(source: String) -> Result<Self, Self::Error> {
		Self::new(source)
	}
}

impl From<WrapperTemplate> for String {
	fn from(template: WrapperTemplate) -> Self {
		template.source
	}
}

impl fmt::Display for WrapperTemplate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}
