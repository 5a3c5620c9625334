//! Per-request access to the session and configuration
//!
//! Host middleware attaches the request's session store (and optionally a
//! shared [`FlashConfig`]) as [`http::Extensions`]; handlers then build a
//! [`FlashMessages`] manager from the request.
//!
//! Extensions are keyed by type, so the store type used when attaching is the
//! one handlers must ask for. Hosts with several backends can attach an
//! `Arc<dyn SessionStore>`.

use crate::error::{FlashHttpError, FlashHttpResult};
use http::{Extensions, Request};
use reinhardt_flash_core::{FlashConfig, FlashMessages, SessionStore};
use std::sync::Arc;

/// Attach a session store to request extensions
pub fn attach_session<S>(extensions: &mut Extensions, session: S)
where
	S: SessionStore + Clone + 'static,
{
	extensions.insert(session);
}

/// Attach a shared flash configuration to request extensions
pub fn attach_config(extensions: &mut Extensions, config: Arc<FlashConfig>) {
	extensions.insert(config);
}

/// The session store of type `S` attached to a request, if any
pub fn session_from_extensions<S>(extensions: &Extensions) -> Option<S>
where
	S: SessionStore + Clone + 'static,
{
	extensions.get::<S>().cloned()
}

/// Build a flash manager over the session store of type `S` attached to a
/// request
///
/// Uses the attached configuration when present, the defaults otherwise.
///
/// # Examples
///
/// ```
/// use http::Request;
/// use reinhardt_flash_core::{FlashMessages, InMemorySession};
/// use reinhardt_flash_http::{attach_session, flash_from_request};
///
/// let mut request = Request::new(());
/// attach_session(request.extensions_mut(), InMemorySession::new());
///
/// let mut flash: FlashMessages<InMemorySession> = flash_from_request(&request).unwrap();
/// flash.info("Welcome back", None, false).unwrap();
/// ```
pub fn flash_from_request<S, B>(request: &Request<B>) -> FlashHttpResult<FlashMessages<S>>
where
	S: SessionStore + Clone + 'static,
{
	let extensions = request.extensions();
	let session = session_from_extensions::<S>(extensions).ok_or_else(|| {
		tracing::warn!(
			uri = %request.uri(),
			store = std::any::type_name::<S>(),
			"Flash messages requested without a session"
		);
		FlashHttpError::MissingSession
	})?;

	let flash = match extensions.get::<Arc<FlashConfig>>() {
		Some(config) => FlashMessages::with_config(session, Arc::clone(config))?,
		None => FlashMessages::new(session)?,
	};
	Ok(flash)
}

#[cfg(test)]
mod tests {
	use super::*;
	use parking_lot::Mutex;
	use reinhardt_flash_core::{FlashType, InMemorySession, SessionError};
	use rstest::rstest;
	use serde_json::Value;
	use std::collections::BTreeMap;

	// Host-side store unrelated to `InMemorySession`
	#[derive(Debug, Clone, Default)]
	struct HostSession {
		values: Arc<Mutex<BTreeMap<String, Value>>>,
	}

	impl SessionStore for HostSession {
		fn get(&self, key: &str) -> Result<Option<Value>, SessionError> {
			Ok(self.values.lock().get(key).cloned())
		}

		fn set(&self, key: &str, value: Value) -> Result<(), SessionError> {
			self.values.lock().insert(key.to_string(), value);
			Ok(())
		}

		fn remove(&self, key: &str) -> Result<(), SessionError> {
			self.values.lock().remove(key);
			Ok(())
		}
	}

	#[rstest]
	fn test_missing_session() {
		let request = Request::new(());
		assert!(matches!(
			flash_from_request::<InMemorySession, _>(&request),
			Err(FlashHttpError::MissingSession)
		));
	}

	#[rstest]
	fn test_attached_session_is_shared() {
		let session = InMemorySession::new();
		let mut request = Request::new(());
		attach_session(request.extensions_mut(), session.clone());

		let mut flash = flash_from_request::<InMemorySession, _>(&request).unwrap();
		flash.error("Oops", None, false).unwrap();

		let again = FlashMessages::new(session).unwrap();
		assert!(again.has_errors().unwrap());
	}

	#[rstest]
	fn test_custom_session_store() {
		let session = HostSession::default();
		let mut request = Request::new(());
		attach_session(request.extensions_mut(), session.clone());

		let mut flash = flash_from_request::<HostSession, _>(&request).unwrap();
		flash.warning("Stored by the host", None, false).unwrap();

		assert!(session.values.lock().contains_key("flash_messages"));
		let next = flash_from_request::<HostSession, _>(&request).unwrap();
		assert_eq!(
			next.has_messages(FlashType::Warning).unwrap().messages()[0].text(),
			"Stored by the host"
		);
		assert!(session_from_extensions::<InMemorySession>(request.extensions()).is_none());
	}

	#[rstest]
	fn test_trait_object_session_store() {
		let session: Arc<dyn SessionStore> = Arc::new(HostSession::default());
		let mut request = Request::new(());
		attach_session(request.extensions_mut(), Arc::clone(&session));

		let mut flash = flash_from_request::<Arc<dyn SessionStore>, _>(&request).unwrap();
		flash.success("Done", None, false).unwrap();

		assert!(session.contains("flash_messages").unwrap());
	}

	#[rstest]
	fn test_attached_config_is_used() {
		let config = FlashConfig::builder()
			.class_for(FlashType::Error, "flash-error")
			.build()
			.unwrap();
		let mut request = Request::new(());
		attach_session(request.extensions_mut(), InMemorySession::new());
		attach_config(request.extensions_mut(), Arc::new(config));

		let flash = flash_from_request::<InMemorySession, _>(&request).unwrap();
		assert_eq!(flash.config().class_for(FlashType::Error), "flash-error");
	}
}
