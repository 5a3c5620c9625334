//! Output sanitization
//!
//! Rendered flash output is passed through an [`HtmlSanitizer`] exactly once,
//! after every message has been decorated and concatenated. Configured
//! wrapper, decoration and close-button markup is therefore subject to the
//! same policy as message text.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Turns assembled HTML into HTML that is safe to emit
pub trait HtmlSanitizer: Send + Sync {
	fn sanitize(&self, html: &str) -> String;
}

impl<F> HtmlSanitizer for F
where
	F: Fn(&str) -> String + Send + Sync,
{
	fn sanitize(&self, html: &str) -> String {
		self(html)
	}
}

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use reinhardt_flash_core::sanitize::escape_html;
///
/// assert_eq!(escape_html("<b>\"Hi\" & 'bye'</b>"), "&lt;b&gt;&quot;Hi&quot; &amp; &#x27;bye&#x27;&lt;/b&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Whether a URL uses a safe scheme or is a same-site path
///
/// # Examples
///
/// ```
/// use reinhardt_flash_core::sanitize::is_safe_url;
///
/// assert!(is_safe_url("/account"));
/// assert!(is_safe_url("https://example.com"));
/// assert!(is_safe_url("#top"));
/// assert!(!is_safe_url("javascript:alert(1)"));
/// assert!(!is_safe_url("../secrets"));
/// ```
pub fn is_safe_url(url: &str) -> bool {
	let url = url.trim();
	if url.starts_with('/') || url.starts_with("./") || url.starts_with('#') {
		return true;
	}
	let lower = url.to_ascii_lowercase();
	["http://", "https://", "mailto:", "ftp://", "ftps://"]
		.iter()
		.any(|scheme| lower.starts_with(scheme))
}

/// Escapes everything; no markup survives
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeSanitizer;

impl HtmlSanitizer for EscapeSanitizer {
	fn sanitize(&self, html: &str) -> String {
		escape_html(html)
	}
}

/// Emits output unchanged
///
/// Only for hosts that sanitize the response body elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustedSanitizer;

impl HtmlSanitizer for TrustedSanitizer {
	fn sanitize(&self, html: &str) -> String {
		html.to_string()
	}
}

const POST_TAGS: &[&str] = &[
	"a",
	"abbr",
	"b",
	"blockquote",
	"br",
	"button",
	"code",
	"del",
	"div",
	"em",
	"h1",
	"h2",
	"h3",
	"h4",
	"h5",
	"h6",
	"hr",
	"i",
	"li",
	"ol",
	"p",
	"pre",
	"s",
	"small",
	"span",
	"strong",
	"sub",
	"sup",
	"u",
	"ul",
];

const POST_ATTRIBUTES: &[&str] = &[
	"class", "href", "id", "lang", "rel", "role", "target", "title", "type",
];

// Elements whose content is dropped together with the tags
const RAW_TEXT_TAGS: &[&str] = &["script", "style", "iframe", "object", "embed", "template"];

const URL_ATTRIBUTES: &[&str] = &["href", "src", "action", "formaction"];

static ATTRIBUTE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn attribute_pattern() -> &'static Regex {
	ATTRIBUTE_PATTERN.get_or_init(|| {
		Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
			.expect("attribute pattern is a valid regex")
	})
}

/// Allowlist sanitizer for post-style content
///
/// Keeps a fixed set of formatting tags with a fixed set of attributes
/// (plus `data-*` and `aria-*`), drops event handlers and unsafe URLs, removes
/// script-like elements together with their content, strips comments and every
/// other tag, and escapes stray `<` characters. Kept attributes retain their
/// original quoting.
///
/// # Examples
///
/// ```
/// use reinhardt_flash_core::sanitize::{AllowlistSanitizer, HtmlSanitizer};
///
/// let sanitizer = AllowlistSanitizer::new();
/// assert_eq!(
///     sanitizer.sanitize("<div class='alert'>Hi<script>alert(1)</script></div>"),
///     "<div class='alert'>Hi</div>"
/// );
/// assert_eq!(
///     sanitizer.sanitize(r#"<a href="javascript:x()" onclick="y()">go</a>"#),
///     "<a>go</a>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AllowlistSanitizer {
	tags: BTreeSet<String>,
	attributes: BTreeSet<String>,
}

impl AllowlistSanitizer {
	/// Create a sanitizer with the default post-content allowlist
	pub fn new() -> Self {
		Self {
			tags: POST_TAGS.iter().map(|tag| tag.to_string()).collect(),
			attributes: POST_ATTRIBUTES.iter().map(|attr| attr.to_string()).collect(),
		}
	}

	/// Allow an additional tag
	pub fn allow_tag(mut self, tag: impl Into<String>) -> Self {
		self.tags.insert(tag.into().to_ascii_lowercase());
		self
	}

	/// Allow an additional attribute on every allowed tag
	pub fn allow_attribute(mut self, attribute: impl Into<String>) -> Self {
		self.attributes.insert(attribute.into().to_ascii_lowercase());
		self
	}

	fn attribute_allowed(&self, attribute: &Attribute<'_>) -> bool {
		let name = attribute.name.as_str();
		if name.starts_with("on") {
			return false;
		}
		let listed = self.attributes.contains(name)
			|| name.starts_with("data-")
			|| name.starts_with("aria-");
		if !listed {
			return false;
		}
		if URL_ATTRIBUTES.contains(&name) {
			return attribute.value.is_some_and(is_safe_url);
		}
		true
	}

	fn rebuild(&self, tag: &Tag<'_>) -> String {
		if tag.closing {
			return format!("</{}>", tag.name);
		}
		let mut out = format!("<{}", tag.name);
		for attribute in &tag.attributes {
			if !self.attribute_allowed(attribute) {
				tracing::warn!(
					tag = %tag.name,
					attribute = %attribute.name,
					"Stripped disallowed attribute from flash output"
				);
				continue;
			}
			out.push(' ');
			out.push_str(&attribute.name);
			if let Some(value) = attribute.value {
				let quote = attribute.quote.unwrap_or('"');
				out.push('=');
				out.push(quote);
				out.push_str(value);
				out.push(quote);
			}
		}
		if tag.self_closing {
			out.push_str(" /");
		}
		out.push('>');
		out
	}
}

impl Default for AllowlistSanitizer {
	fn default() -> Self {
		Self::new()
	}
}

impl HtmlSanitizer for AllowlistSanitizer {
	fn sanitize(&self, html: &str) -> String {
		let bytes = html.as_bytes();
		let mut out = String::with_capacity(html.len());
		let mut text_start = 0;
		let mut i = 0;

		while i < bytes.len() {
			if bytes[i] != b'<' {
				i += 1;
				continue;
			}
			out.push_str(&html[text_start..i]);

			if html[i..].starts_with("<!--") {
				i = match html[i + 4..].find("-->") {
					Some(end) => i + 4 + end + 3,
					None => bytes.len(),
				};
				text_start = i;
				continue;
			}

			let opens_tag = bytes
				.get(i + 1)
				.is_some_and(|&b| b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?'));
			if !opens_tag {
				out.push_str("&lt;");
				i += 1;
				text_start = i;
				continue;
			}

			let end = tag_end(bytes, i + 1);
			match parse_tag(&html[i..end]) {
				Some(tag) if RAW_TEXT_TAGS.contains(&tag.name.as_str()) => {
					tracing::warn!(tag = %tag.name, "Stripped unsafe element from flash output");
					i = if tag.closing || tag.self_closing {
						end
					} else {
						skip_element(html, end, &tag.name)
					};
					text_start = i;
					continue;
				}
				Some(tag) if self.tags.contains(&tag.name) => out.push_str(&self.rebuild(&tag)),
				Some(tag) => {
					tracing::debug!(tag = %tag.name, "Dropped tag outside the allowlist");
				}
				None => {}
			}
			i = end;
			text_start = i;
		}

		out.push_str(&html[text_start..]);
		out
	}
}

struct Tag<'a> {
	name: String,
	closing: bool,
	self_closing: bool,
	attributes: Vec<Attribute<'a>>,
}

struct Attribute<'a> {
	name: String,
	value: Option<&'a str>,
	quote: Option<char>,
}

// Index just past the `>` closing the tag opened before `start`, honouring
// quoted attribute values; the input length if the tag never closes.
fn tag_end(bytes: &[u8], start: usize) -> usize {
	let mut quote: Option<u8> = None;
	let mut i = start;
	while i < bytes.len() {
		match (quote, bytes[i]) {
			(None, b'"' | b'\'') => quote = Some(bytes[i]),
			(Some(q), b) if b == q => quote = None,
			(None, b'>') => return i + 1,
			_ => {}
		}
		i += 1;
	}
	bytes.len()
}

fn skip_element(html: &str, from: usize, name: &str) -> usize {
	let closing = format!("</{name}");
	// ASCII lower-casing keeps byte offsets intact
	let lower = html[from..].to_ascii_lowercase();
	match lower.find(&closing) {
		Some(offset) => tag_end(html.as_bytes(), from + offset + 1),
		None => html.len(),
	}
}

fn parse_tag(raw: &str) -> Option<Tag<'_>> {
	let inner = raw.strip_prefix('<')?;
	let inner = inner.strip_suffix('>').unwrap_or(inner);
	let (closing, inner) = match inner.strip_prefix('/') {
		Some(rest) => (true, rest),
		None => (false, inner),
	};

	let name_len = inner
		.find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
		.unwrap_or(inner.len());
	if name_len == 0 {
		return None;
	}
	let name = inner[..name_len].to_ascii_lowercase();

	let rest = inner[name_len..].trim_end();
	let (self_closing, rest) = match rest.strip_suffix('/') {
		Some(rest) => (true, rest),
		None => (false, rest),
	};

	let attributes = if closing {
		Vec::new()
	} else {
		attribute_pattern()
			.captures_iter(rest)
			.filter_map(|caps| {
				let name = caps.get(1)?.as_str().to_ascii_lowercase();
				let (value, quote) = if let Some(v) = caps.get(2) {
					(Some(v.as_str()), Some('"'))
				} else if let Some(v) = caps.get(3) {
					(Some(v.as_str()), Some('\''))
				} else {
					(caps.get(4).map(|v| v.as_str()), None)
				};
				Some(Attribute { name, value, quote })
			})
			.collect()
	};

	Some(Tag {
		name,
		closing,
		self_closing,
		attributes,
	})
}
