//! Request and session helpers for flash message integration tests

use http::Request;
use reinhardt_flash::http::attach_session;
use reinhardt_flash::{FLASH_SESSION_KEY, InMemorySession, SessionStore};
use serde_json::Value;

/// Request carrying a fresh session, plus a handle to that session
pub fn request_with_session() -> (Request<()>, InMemorySession) {
	let session = InMemorySession::new();
	let mut request = Request::new(());
	attach_session(request.extensions_mut(), session.clone());
	(request, session)
}

/// Follow-up request sharing an existing session
pub fn next_request(session: &InMemorySession) -> Request<()> {
	let mut request = Request::new(());
	attach_session(request.extensions_mut(), session.clone());
	request
}

/// Raw flash namespace currently stored in the session
pub fn stored_flash(session: &InMemorySession) -> Option<Value> {
	session.get(FLASH_SESSION_KEY).ok().flatten()
}
