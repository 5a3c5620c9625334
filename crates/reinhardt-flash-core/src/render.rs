//! Message formatting and bucket rendering

use crate::config::FlashConfig;
use crate::kind::FlashType;
use crate::message::{FlashBuckets, FlashMessage};
use crate::sanitize::HtmlSanitizer;

/// Result of a display call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
	/// The session holds no flash namespace at all
	Unavailable,
	/// Sanitized output; empty when no selected type had messages
	Html(String),
}

impl RenderOutcome {
	/// The rendered HTML, or `None` when the session had no flash namespace
	pub fn html(&self) -> Option<&str> {
		match self {
			RenderOutcome::Unavailable => None,
			RenderOutcome::Html(html) => Some(html),
		}
	}

	pub fn into_html(self) -> Option<String> {
		match self {
			RenderOutcome::Unavailable => None,
			RenderOutcome::Html(html) => Some(html),
		}
	}

	/// Whether nothing was rendered
	pub fn is_empty(&self) -> bool {
		self.html().is_none_or(str::is_empty)
	}
}

/// Formats messages with a [`FlashConfig`] and sanitizes the assembled output
pub struct Renderer<'a> {
	config: &'a FlashConfig,
	sanitizer: &'a dyn HtmlSanitizer,
}

impl<'a> Renderer<'a> {
	pub fn new(config: &'a FlashConfig, sanitizer: &'a dyn HtmlSanitizer) -> Self {
		Self { config, sanitizer }
	}

	/// Format a single message
	///
	/// No escaping happens here; the aggregate output is sanitized once by
	/// [`Renderer::render`].
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_core::render::Renderer;
	/// use reinhardt_flash_core::sanitize::TrustedSanitizer;
	/// use reinhardt_flash_core::{FlashConfig, FlashMessage, FlashType};
	///
	/// let config = FlashConfig::builder().close_button("[x]").build().unwrap();
	/// let renderer = Renderer::new(&config, &TrustedSanitizer);
	///
	/// assert_eq!(
	///     renderer.format_message(&FlashMessage::new("Hi"), FlashType::Info),
	///     "<div class='alert dismissable alert-info'>[x]Hi</div>\n"
	/// );
	/// assert_eq!(
	///     renderer.format_message(&FlashMessage::sticky("Hi"), FlashType::Info),
	///     "<div class='alert dismissable alert-info sticky'>Hi</div>\n"
	/// );
	/// ```
	pub fn format_message(&self, message: &FlashMessage, kind: FlashType) -> String {
		let mut class = format!(
			"{} {}",
			self.config.message_class(),
			self.config.class_for(kind)
		);

		let body = if message.is_sticky() {
			class.push(' ');
			class.push_str(self.config.sticky_class());
			format!(
				"{}{}{}",
				self.config.before(),
				message.text(),
				self.config.after()
			)
		} else {
			format!(
				"{}{}{}{}",
				self.config.close_button(),
				self.config.before(),
				message.text(),
				self.config.after()
			)
		};

		self.config.wrapper().render(&class, &body)
	}

	/// Render and remove the buckets for `order`
	///
	/// Buckets that are absent or empty are skipped and left untouched. Returns
	/// the sanitized output and the types whose buckets were consumed.
	pub fn render(&self, buckets: &mut FlashBuckets, order: &[FlashType]) -> Rendered {
		let mut raw = String::new();
		let mut consumed = Vec::new();

		for &kind in order {
			let Some(messages) = buckets.take(kind) else {
				continue;
			};
			for message in &messages {
				raw.push_str(&self.format_message(message, kind));
			}
			consumed.push((kind, messages.len()));
		}

		Rendered {
			html: self.sanitizer.sanitize(&raw),
			consumed,
		}
	}
}

/// Output of [`Renderer::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
	pub html: String,
	/// Consumed types with the number of messages rendered for each
	pub consumed: Vec<(FlashType, usize)>,
}
