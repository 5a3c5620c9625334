//! Session-backed flash messages for Reinhardt
//!
//! Flash messages are one-shot notices queued during one request and shown on
//! the next, typically after a redirect.
//!
//! ## Features
//!
//! - **Typed buckets**: error, warning, success and info messages, each kept
//!   in insertion order under the session's `flash_messages` namespace
//! - **Consume on display**: rendering a type removes its messages
//! - **Configurable markup**: wrapper template, CSS classes, close button and
//!   decorations via an immutable [`FlashConfig`]
//! - **Sanitized output**: the aggregate HTML goes through an
//!   [`HtmlSanitizer`] exactly once
//! - **Explicit redirect step**: queueing never ends the request; the caller
//!   obtains a [`Redirect`] from [`FlashMessages::finalize`]
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_flash_core::{FlashMessages, FlashType, InMemorySession};
//!
//! let session = InMemorySession::new();
//! let mut flash = FlashMessages::new(session.clone()).unwrap();
//!
//! flash.add("Disk almost full", "warning", None, false).unwrap();
//! flash.add("Profile saved", FlashType::Success, Some("/profile"), false).unwrap();
//!
//! assert!(!flash.has_errors().unwrap());
//! assert_eq!(flash.finalize().unwrap().location(), "/profile");
//! ```

pub mod config;
pub mod error;
pub mod flash;
pub mod kind;
pub mod message;
pub mod redirect;
pub mod render;
pub mod sanitize;
pub mod selection;
pub mod session;
pub mod template;
pub mod writer;

pub use config::{FlashConfig, FlashConfigBuilder};
pub use error::{FlashError, FlashResult, GENERIC_FAILURE_MESSAGE};
pub use flash::{AddOutcome, FlashMessages, Pending};
pub use kind::FlashType;
pub use message::{FlashBuckets, FlashMessage};
pub use redirect::Redirect;
pub use render::{RenderOutcome, Renderer};
pub use sanitize::{AllowlistSanitizer, EscapeSanitizer, HtmlSanitizer, TrustedSanitizer};
pub use selection::TypeSelection;
pub use session::{FLASH_SESSION_KEY, InMemorySession, SessionError, SessionStore};
pub use template::WrapperTemplate;
pub use writer::{IoWriter, ResponseWriter};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::config::*;
	pub use crate::error::*;
	pub use crate::flash::*;
	pub use crate::kind::*;
	pub use crate::redirect::*;
	pub use crate::render::RenderOutcome;
	pub use crate::selection::*;
	pub use crate::session::*;
}
