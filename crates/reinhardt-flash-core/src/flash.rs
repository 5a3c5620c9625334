//! Flash message manager
//!
//! [`FlashMessages`] queues messages into the session, renders and consumes
//! them on a later request, and answers non-consuming queries.
//!
//! Queueing and redirecting are separate steps: `add` only records the
//! message (and optionally the redirect target); the caller then invokes
//! [`FlashMessages::finalize`] once to obtain the redirect.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_flash_core::{FlashMessages, InMemorySession, RenderOutcome};
//!
//! let session = InMemorySession::new();
//!
//! // Request A: queue and redirect
//! let mut flash = FlashMessages::new(session.clone()).unwrap();
//! flash.success("Saved!", Some("/thanks"), false).unwrap();
//! let redirect = flash.finalize().unwrap();
//! assert_eq!(redirect.location(), "/thanks");
//!
//! // Request B: render once
//! let flash = FlashMessages::new(session).unwrap();
//! let html = flash.display(None).unwrap();
//! assert_eq!(
//!     html,
//!     RenderOutcome::Html("<div class='alert dismissable alert-success'>Saved!</div>\n".into())
//! );
//! assert!(flash.display(None).unwrap().is_empty());
//! ```

use crate::config::FlashConfig;
use crate::error::{FlashError, FlashResult};
use crate::kind::FlashType;
use crate::message::{FlashBuckets, FlashMessage};
use crate::redirect::Redirect;
use crate::render::{RenderOutcome, Renderer};
use crate::sanitize::{AllowlistSanitizer, HtmlSanitizer};
use crate::selection::TypeSelection;
use crate::session::{FLASH_SESSION_KEY, SessionStore};
use crate::writer::ResponseWriter;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Result of queueing a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
	/// The message was appended; `pending` counts the messages now queued
	/// for `kind`
	Queued { kind: FlashType, pending: usize },
	/// The message text was empty; nothing was stored
	Rejected,
}

impl AddOutcome {
	pub fn is_queued(&self) -> bool {
		matches!(self, AddOutcome::Queued { .. })
	}
}

/// Non-consuming view of pending messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
	Empty,
	Messages {
		kind: FlashType,
		messages: Vec<FlashMessage>,
	},
}

impl Pending {
	pub fn is_empty(&self) -> bool {
		matches!(self, Pending::Empty)
	}

	pub fn messages(&self) -> &[FlashMessage] {
		match self {
			Pending::Empty => &[],
			Pending::Messages { messages, .. } => messages,
		}
	}

	pub fn kind(&self) -> Option<FlashType> {
		match self {
			Pending::Empty => None,
			Pending::Messages { kind, .. } => Some(*kind),
		}
	}
}

/// Session-backed flash message queue
///
/// Holds no copy of the queued messages; every call reads and writes the
/// session store.
pub struct FlashMessages<S> {
	id: Uuid,
	session: S,
	config: Arc<FlashConfig>,
	sanitizer: Arc<dyn HtmlSanitizer>,
	redirect_target: Option<String>,
}

impl<S: SessionStore> FlashMessages<S> {
	/// Create a manager with the default configuration
	pub fn new(session: S) -> FlashResult<Self> {
		Self::with_config(session, FlashConfig::default())
	}

	/// Create a manager with the given configuration
	///
	/// Creates the empty flash namespace in the session if it is missing.
	pub fn with_config(session: S, config: impl Into<Arc<FlashConfig>>) -> FlashResult<Self> {
		let flash = Self {
			id: Uuid::new_v4(),
			session,
			config: config.into(),
			sanitizer: Arc::new(AllowlistSanitizer::new()),
			redirect_target: None,
		};
		if flash.load_buckets()?.is_none() {
			flash.store_buckets(&FlashBuckets::new())?;
		}
		Ok(flash)
	}

	/// Replace the output sanitizer
	pub fn with_sanitizer(mut self, sanitizer: impl HtmlSanitizer + 'static) -> Self {
		self.sanitizer = Arc::new(sanitizer);
		self
	}

	/// Share an existing sanitizer
	pub fn with_shared_sanitizer(mut self, sanitizer: Arc<dyn HtmlSanitizer>) -> Self {
		self.sanitizer = sanitizer;
		self
	}

	/// Identifier unique to this manager instance
	pub fn id(&self) -> Uuid {
		self.id
	}

	pub fn config(&self) -> &FlashConfig {
		&self.config
	}

	pub fn session(&self) -> &S {
		&self.session
	}

	/// Pending redirect target, if one was recorded
	pub fn redirect_target(&self) -> Option<&str> {
		self.redirect_target.as_deref()
	}

	/// Record the redirect target, replacing any previous one
	pub fn set_redirect(&mut self, target: impl Into<String>) -> &mut Self {
		self.redirect_target = Some(target.into());
		self
	}

	/// Queue a message
	///
	/// `kind` accepts a [`FlashType`] or any string (see
	/// [`FlashType::coerce`]). A supplied `redirect_to` replaces the pending
	/// redirect target. Empty text is rejected without touching the session or
	/// the redirect target.
	pub fn add(
		&mut self,
		text: &str,
		kind: impl Into<FlashType>,
		redirect_to: Option<&str>,
		sticky: bool,
	) -> FlashResult<AddOutcome> {
		if text.is_empty() {
			tracing::debug!(flash_id = %self.id, "Rejected empty flash message");
			return Ok(AddOutcome::Rejected);
		}

		let kind = kind.into();
		let message = if sticky {
			FlashMessage::sticky(text)
		} else {
			FlashMessage::new(text)
		};

		let mut buckets = self.load_buckets()?.unwrap_or_default();
		let pending = buckets.push(kind, message);
		self.store_buckets(&buckets)?;

		if let Some(target) = redirect_to {
			self.redirect_target = Some(target.to_string());
		}

		tracing::debug!(
			flash_id = %self.id,
			kind = %kind,
			sticky,
			pending,
			"Queued flash message"
		);
		Ok(AddOutcome::Queued { kind, pending })
	}

	pub fn info(
		&mut self,
		text: &str,
		redirect_to: Option<&str>,
		sticky: bool,
	) -> FlashResult<AddOutcome> {
		self.add(text, FlashType::Info, redirect_to, sticky)
	}

	pub fn success(
		&mut self,
		text: &str,
		redirect_to: Option<&str>,
		sticky: bool,
	) -> FlashResult<AddOutcome> {
		self.add(text, FlashType::Success, redirect_to, sticky)
	}

	pub fn warning(
		&mut self,
		text: &str,
		redirect_to: Option<&str>,
		sticky: bool,
	) -> FlashResult<AddOutcome> {
		self.add(text, FlashType::Warning, redirect_to, sticky)
	}

	pub fn error(
		&mut self,
		text: &str,
		redirect_to: Option<&str>,
		sticky: bool,
	) -> FlashResult<AddOutcome> {
		self.add(text, FlashType::Error, redirect_to, sticky)
	}

	/// Queue a sticky message (rendered without a close button)
	pub fn add_sticky(
		&mut self,
		text: &str,
		kind: impl Into<FlashType>,
		redirect_to: Option<&str>,
	) -> FlashResult<AddOutcome> {
		self.add(text, kind, redirect_to, true)
	}

	/// Produce the redirect that must follow queueing
	///
	/// Fails with [`FlashError::MisconfiguredRedirect`] when no non-empty
	/// redirect target was recorded; the host must then stop the request with
	/// a generic failure page.
	pub fn finalize(&self) -> FlashResult<Redirect> {
		match self.redirect_target.as_deref() {
			Some(target) if !target.is_empty() => {
				tracing::debug!(flash_id = %self.id, location = target, "Finalizing with redirect");
				Ok(Redirect::new(target))
			}
			_ => {
				tracing::error!(
					flash_id = %self.id,
					"Flash messages queued without a redirect target"
				);
				Err(FlashError::MisconfiguredRedirect)
			}
		}
	}

	/// Render the selected types and remove what was rendered
	///
	/// Returns [`RenderOutcome::Unavailable`] when the session has no flash
	/// namespace.
	pub fn display(&self, types: impl Into<TypeSelection>) -> FlashResult<RenderOutcome> {
		let Some(mut buckets) = self.load_buckets()? else {
			tracing::debug!(flash_id = %self.id, "No flash namespace in session");
			return Ok(RenderOutcome::Unavailable);
		};

		let order = types.into().resolve(self.config.display_order());
		let renderer = Renderer::new(&self.config, self.sanitizer.as_ref());
		let rendered = renderer.render(&mut buckets, &order);

		if !rendered.consumed.is_empty() {
			self.store_buckets(&buckets)?;
		}
		for (kind, count) in &rendered.consumed {
			tracing::debug!(flash_id = %self.id, kind = %kind, count, "Consumed flash messages");
		}

		Ok(RenderOutcome::Html(rendered.html))
	}

	/// Render the selected types straight into a response writer
	///
	/// Returns `false` when the session has no flash namespace and nothing was
	/// written.
	pub fn display_to<W>(&self, types: impl Into<TypeSelection>, writer: &mut W) -> FlashResult<bool>
	where
		W: ResponseWriter + ?Sized,
	{
		match self.display(types)? {
			RenderOutcome::Unavailable => Ok(false),
			RenderOutcome::Html(html) => {
				writer.write_html(&html)?;
				Ok(true)
			}
		}
	}

	/// Whether error messages are pending
	pub fn has_errors(&self) -> FlashResult<bool> {
		Ok(self
			.load_buckets()?
			.is_some_and(|buckets| buckets.has(FlashType::Error)))
	}

	/// Pending messages without consuming them
	///
	/// Takes the same selections as [`FlashMessages::display`]. Returns the
	/// first non-empty bucket among the selected types: the given type, the
	/// listed types in order, or every type in display order.
	pub fn has_messages(&self, types: impl Into<TypeSelection>) -> FlashResult<Pending> {
		let Some(buckets) = self.load_buckets()? else {
			return Ok(Pending::Empty);
		};

		Ok(types
			.into()
			.resolve(self.config.display_order())
			.into_iter()
			.find(|kind| buckets.has(*kind))
			.map_or(Pending::Empty, |kind| Pending::Messages {
				kind,
				messages: buckets.get(kind).to_vec(),
			}))
	}

	/// Remove pending messages
	///
	/// Selecting every type removes the whole flash namespace from the
	/// session.
	pub fn clear(&self, types: impl Into<TypeSelection>) -> FlashResult<()> {
		let types = types.into();
		if types.is_all() {
			self.session.remove(FLASH_SESSION_KEY)?;
			tracing::debug!(flash_id = %self.id, "Cleared flash namespace");
			return Ok(());
		}

		let Some(mut buckets) = self.load_buckets()? else {
			return Ok(());
		};
		for kind in types.resolve(self.config.display_order()) {
			buckets.remove(kind);
		}
		self.store_buckets(&buckets)
	}

	fn load_buckets(&self) -> FlashResult<Option<FlashBuckets>> {
		match self.session.get(FLASH_SESSION_KEY)? {
			None | Some(Value::Null) => Ok(None),
			Some(value) => Ok(Some(serde_json::from_value(value)?)),
		}
	}

	fn store_buckets(&self, buckets: &FlashBuckets) -> FlashResult<()> {
		self.session
			.set(FLASH_SESSION_KEY, serde_json::to_value(buckets)?)?;
		Ok(())
	}
}

impl<S> fmt::Debug for FlashMessages<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FlashMessages")
			.field("id", &self.id)
			.field("config", &self.config)
			.field("redirect_target", &self.redirect_target)
			.finish_non_exhaustive()
	}
}
