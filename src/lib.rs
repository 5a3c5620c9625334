//! # Reinhardt Flash
//!
//! One-shot notices ("flash messages") for server-rendered applications.
//!
//! A handler queues typed messages into the user's session and redirects; the
//! next page renders them once, after which they are gone.
//!
//! ## Feature Flags
//!
//! - `http` (default) - `http` response builders and request-extension lookup
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_flash::prelude::*;
//!
//! let session = InMemorySession::new();
//!
//! // Form handler: queue, then redirect
//! let mut flash = FlashMessages::new(session.clone()).unwrap();
//! flash.error("Email is required", Some("/signup"), false).unwrap();
//! let redirect = flash.finalize().unwrap();
//! assert_eq!(redirect.location(), "/signup");
//!
//! // Next request: render pending errors only
//! let flash = FlashMessages::new(session).unwrap();
//! let html = flash.display(FlashType::Error).unwrap();
//! assert!(html.html().unwrap().contains("Email is required"));
//! ```

pub use reinhardt_flash_core::*;

#[cfg(feature = "http")]
pub mod http {
	//! HTTP response integration
	pub use reinhardt_flash_http::*;
}

/// Re-export commonly used types
pub mod prelude {
	pub use reinhardt_flash_core::prelude::*;

	#[cfg(feature = "http")]
	pub use reinhardt_flash_http::{
		FlashHttpError, HtmlBody, finalize_response, flash_from_request, render_response,
	};
}
