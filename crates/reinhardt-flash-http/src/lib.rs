//! HTTP integration for Reinhardt flash messages
//!
//! Turns the outcomes of [`reinhardt_flash_core`] into `http` responses:
//!
//! - [`finalize_response`]: `302 Found` to the recorded target, or the
//!   generic `500` page when no target was recorded
//! - [`render_response`]: rendered messages as a `text/html` body
//! - [`flash_from_request`]: a manager over the session store attached to the
//!   request extensions
//!
//! ## Example
//!
//! ```rust
//! use http::{Request, StatusCode};
//! use reinhardt_flash_core::InMemorySession;
//! use reinhardt_flash_http::{attach_session, finalize_response, flash_from_request};
//!
//! let mut request = Request::new(());
//! attach_session(request.extensions_mut(), InMemorySession::new());
//!
//! let mut flash = flash_from_request::<InMemorySession, _>(&request).unwrap();
//! flash.success("Saved!", Some("/thanks"), false).unwrap();
//!
//! let response = finalize_response(&flash);
//! assert_eq!(response.status(), StatusCode::FOUND);
//! ```

pub mod error;
pub mod request;
pub mod response;

pub use error::{FlashHttpError, FlashHttpResult};
pub use request::{attach_config, attach_session, flash_from_request, session_from_extensions};
pub use response::{
	FlashResponse, HtmlBody, failure_response, finalize_response, redirect_response,
	render_response,
};
