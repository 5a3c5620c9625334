//! Flash message records and per-type buckets

use crate::kind::FlashType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A queued flash message
///
/// Serialized as `{"sticky": bool, "message": string}`, the record shape kept
/// in session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
	#[serde(default)]
	sticky: bool,
	#[serde(rename = "message")]
	text: String,
}

impl FlashMessage {
	/// Create a dismissable message
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_core::FlashMessage;
	///
	/// let msg = FlashMessage::new("Saved!");
	/// assert_eq!(msg.text(), "Saved!");
	/// assert!(!msg.is_sticky());
	/// ```
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			sticky: false,
			text: text.into(),
		}
	}

	/// Create a sticky message (rendered without a close button)
	pub fn sticky(text: impl Into<String>) -> Self {
		Self {
			sticky: true,
			text: text.into(),
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn is_sticky(&self) -> bool {
		self.sticky
	}
}

/// Pending messages grouped by type key
///
/// Keys are the single-character type keys. Entries under keys this crate does
/// not know are kept as-is so that writing the buckets back never loses data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlashBuckets {
	buckets: BTreeMap<String, Vec<FlashMessage>>,
}

impl FlashBuckets {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a message to the bucket for `kind`, creating it if absent
	///
	/// Returns the number of messages now pending for that type.
	pub fn push(&mut self, kind: FlashType, message: FlashMessage) -> usize {
		let bucket = self.buckets.entry(kind.key_str().to_string()).or_default();
		bucket.push(message);
		bucket.len()
	}

	/// Messages pending for `kind`, oldest first
	pub fn get(&self, kind: FlashType) -> &[FlashMessage] {
		self.buckets
			.get(kind.key_str())
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	/// Whether at least one message is pending for `kind`
	pub fn has(&self, kind: FlashType) -> bool {
		!self.get(kind).is_empty()
	}

	/// Remove and return the bucket for `kind` if it holds messages
	///
	/// An empty bucket is left in place.
	pub fn take(&mut self, kind: FlashType) -> Option<Vec<FlashMessage>> {
		if !self.has(kind) {
			return None;
		}
		self.buckets.remove(kind.key_str())
	}

	/// Remove the bucket for `kind` whether or not it holds messages
	pub fn remove(&mut self, kind: FlashType) -> Option<Vec<FlashMessage>> {
		self.buckets.remove(kind.key_str())
	}

	/// Whether no known type has a pending message
	pub fn is_empty(&self) -> bool {
		FlashType::DISPLAY_ORDER.iter().all(|kind| !self.has(*kind))
	}

	/// Total number of pending messages across known types
	pub fn len(&self) -> usize {
		FlashType::DISPLAY_ORDER
			.iter()
			.map(|kind| self.get(*kind).len())
			.sum()
	}
}
