//! Session store abstraction
//!
//! Flash messages live in the host's session under [`FLASH_SESSION_KEY`].
//! The manager never caches bucket contents: every operation goes through a
//! [`SessionStore`], so several managers over the same session see the same
//! state.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_flash_core::session::{InMemorySession, SessionStore};
//! use serde_json::json;
//!
//! let session = InMemorySession::new();
//! session.set("user_id", json!(42)).unwrap();
//!
//! // Clones share the same underlying state
//! let other = session.clone();
//! assert_eq!(other.get("user_id").unwrap(), Some(json!(42)));
//! ```

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Session key owning all flash message buckets
pub const FLASH_SESSION_KEY: &str = "flash_messages";

/// Session store errors
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SessionError {
	#[error("Session backend error: {0}")]
	Backend(String),
	#[error("Invalid session snapshot: {0}")]
	InvalidSnapshot(String),
}

/// Key/value session storage provided by the host
///
/// Implementations use interior mutability; writes made through one handle
/// must be visible to every other handle of the same session.
pub trait SessionStore: Send + Sync {
	/// Load the value stored under `key`
	fn get(&self, key: &str) -> Result<Option<Value>, SessionError>;

	/// Store `value` under `key`, replacing any previous value
	fn set(&self, key: &str, value: Value) -> Result<(), SessionError>;

	/// Remove `key` from the session
	fn remove(&self, key: &str) -> Result<(), SessionError>;

	/// Check whether `key` holds a value
	fn contains(&self, key: &str) -> Result<bool, SessionError> {
		Ok(self.get(key)?.is_some())
	}
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
	fn get(&self, key: &str) -> Result<Option<Value>, SessionError> {
		(**self).get(key)
	}

	fn set(&self, key: &str, value: Value) -> Result<(), SessionError> {
		(**self).set(key, value)
	}

	fn remove(&self, key: &str) -> Result<(), SessionError> {
		(**self).remove(key)
	}

	fn contains(&self, key: &str) -> Result<bool, SessionError> {
		(**self).contains(key)
	}
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
	fn get(&self, key: &str) -> Result<Option<Value>, SessionError> {
		(**self).get(key)
	}

	fn set(&self, key: &str, value: Value) -> Result<(), SessionError> {
		(**self).set(key, value)
	}

	fn remove(&self, key: &str) -> Result<(), SessionError> {
		(**self).remove(key)
	}

	fn contains(&self, key: &str) -> Result<bool, SessionError> {
		(**self).contains(key)
	}
}

/// In-memory session
///
/// Cloning is cheap and every clone shares the same data, which mirrors how a
/// host framework hands the same session to several components of one request.
/// Concurrent writers race with last-write-wins semantics.
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
	data: Arc<RwLock<HashMap<String, Value>>>,
}

impl InMemorySession {
	/// Create an empty session
	pub fn new() -> Self {
		Self::default()
	}

	/// Restore a session from a JSON object snapshot
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_core::session::{InMemorySession, SessionStore};
	/// use serde_json::json;
	///
	/// let session = InMemorySession::from_json(json!({
	///     "flash_messages": { "e": [{ "sticky": false, "message": "Oops" }] }
	/// }))
	/// .unwrap();
	/// assert!(session.contains("flash_messages").unwrap());
	///
	/// assert!(InMemorySession::from_json(json!([1, 2, 3])).is_err());
	/// ```
	pub fn from_json(snapshot: Value) -> Result<Self, SessionError> {
		match snapshot {
			Value::Object(map) => Ok(Self {
				data: Arc::new(RwLock::new(map.into_iter().collect())),
			}),
			other => Err(SessionError::InvalidSnapshot(format!(
				"expected a JSON object, got {}",
				json_type_name(&other)
			))),
		}
	}

	/// Snapshot the whole session as a JSON object
	pub fn to_json(&self) -> Value {
		let data = self.data.read();
		let map: Map<String, Value> = data
			.iter()
			.map(|(key, value)| (key.clone(), value.clone()))
			.collect();
		Value::Object(map)
	}

	/// Number of keys stored in the session
	pub fn len(&self) -> usize {
		self.data.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.read().is_empty()
	}
}

impl SessionStore for InMemorySession {
	fn get(&self, key: &str) -> Result<Option<Value>, SessionError> {
		Ok(self.data.read().get(key).cloned())
	}

	fn set(&self, key: &str, value: Value) -> Result<(), SessionError> {
		self.data.write().insert(key.to_string(), value);
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<(), SessionError> {
		self.data.write().remove(key);
		Ok(())
	}

	fn contains(&self, key: &str) -> Result<bool, SessionError> {
		Ok(self.data.read().contains_key(key))
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
