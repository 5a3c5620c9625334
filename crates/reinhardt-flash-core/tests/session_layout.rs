//! Persisted session layout and interoperability with existing session data

use reinhardt_flash_core::{
	FLASH_SESSION_KEY, FlashMessages, FlashType, InMemorySession, SessionStore,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn test_queued_messages_layout() {
	let session = InMemorySession::new();
	let mut flash = FlashMessages::new(session.clone()).unwrap();

	flash.error("Oops", None, false).unwrap();
	flash.add_sticky("Read me", FlashType::Info, None).unwrap();
	flash.info("Later", None, false).unwrap();

	assert_eq!(
		session.get(FLASH_SESSION_KEY).unwrap(),
		Some(json!({
			"e": [{ "sticky": false, "message": "Oops" }],
			"i": [
				{ "sticky": true, "message": "Read me" },
				{ "sticky": false, "message": "Later" }
			]
		}))
	);
}

#[rstest]
fn test_other_session_keys_untouched() {
	let session = InMemorySession::from_json(json!({ "user_id": 7, "cart": ["a"] })).unwrap();
	let mut flash = FlashMessages::new(session.clone()).unwrap();

	flash.success("Added", None, false).unwrap();
	flash.display(None).unwrap();
	flash.clear(None).unwrap();

	assert_eq!(session.to_json(), json!({ "user_id": 7, "cart": ["a"] }));
}

#[rstest]
fn test_reads_messages_written_by_earlier_request() {
	let session = InMemorySession::from_json(json!({
		"flash_messages": {
			"w": [{ "sticky": true, "message": "Heads up" }],
			"s": [{ "message": "Done" }]
		}
	}))
	.unwrap();
	let flash = FlashMessages::new(session).unwrap();

	assert_eq!(
		flash.display(None).unwrap().into_html().unwrap(),
		concat!(
			"<div class='alert dismissable alert-warning sticky'>Heads up</div>\n",
			"<div class='alert dismissable alert-success'>Done</div>\n",
		)
	);
}

#[rstest]
fn test_unknown_bucket_keys_are_preserved() {
	let session = InMemorySession::from_json(json!({
		"flash_messages": {
			"d": [{ "sticky": false, "message": "debug note" }],
			"e": [{ "sticky": false, "message": "Oops" }]
		}
	}))
	.unwrap();
	let flash = FlashMessages::new(session.clone()).unwrap();

	let output = flash.display(None).unwrap().into_html().unwrap();

	assert!(!output.contains("debug note"));
	assert_eq!(
		session.get(FLASH_SESSION_KEY).unwrap(),
		Some(json!({ "d": [{ "sticky": false, "message": "debug note" }] }))
	);
}

#[rstest]
fn test_empty_buckets_are_left_in_place() {
	let session = InMemorySession::from_json(json!({
		"flash_messages": { "e": [], "i": [{ "sticky": false, "message": "x" }] }
	}))
	.unwrap();
	let flash = FlashMessages::new(session.clone()).unwrap();

	flash.display(None).unwrap();

	assert_eq!(
		session.get(FLASH_SESSION_KEY).unwrap(),
		Some(json!({ "e": [] }))
	);
}

#[rstest]
fn test_null_namespace_is_recreated() {
	let session = InMemorySession::from_json(json!({ "flash_messages": null })).unwrap();
	let _flash = FlashMessages::new(session.clone()).unwrap();

	assert_eq!(session.get(FLASH_SESSION_KEY).unwrap(), Some(json!({})));
}
