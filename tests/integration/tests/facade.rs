//! Facade re-exports cover a full request round trip

use reinhardt_flash::prelude::*;
use reinhardt_flash_integration_tests::flash_helpers::{
	next_request, request_with_session, stored_flash,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn test_round_trip_through_facade() {
	let session = InMemorySession::new();
	let config = FlashConfig::from_toml_str("close_button = \"<button class='close'>x</button>\"")
		.unwrap();

	let mut flash = FlashMessages::with_config(session.clone(), config.clone()).unwrap();
	flash.warning("Check your input", Some("/form"), false).unwrap();
	assert_eq!(flash.finalize().unwrap().location(), "/form");

	let flash = FlashMessages::with_config(session.clone(), config).unwrap();
	assert_eq!(
		flash.display(None).unwrap(),
		RenderOutcome::Html(
			"<div class='alert dismissable alert-warning'><button class='close'>x</button>Check your input</div>\n"
				.to_string()
		)
	);
	assert_eq!(stored_flash(&session), Some(json!({})));
}

#[rstest]
fn test_request_round_trip_over_http() {
	let (request, session) = request_with_session();

	let mut flash = flash_from_request::<InMemorySession, _>(&request).unwrap();
	flash.error("Email is required", Some("/signup"), false).unwrap();
	let redirect = finalize_response(&flash);
	assert_eq!(redirect.status(), 302);
	assert_eq!(redirect.headers()["location"], "/signup");

	let follow_up = next_request(&session);
	let flash = flash_from_request::<InMemorySession, _>(&follow_up).unwrap();
	assert!(flash.has_errors().unwrap());
	assert_eq!(
		render_response(&flash, "error").unwrap().status(),
		200
	);
	assert_eq!(stored_flash(&session), Some(json!({})));
}

#[rstest]
fn test_missing_redirect_is_generic_failure() {
	let (request, _session) = request_with_session();

	let mut flash = flash_from_request::<InMemorySession, _>(&request).unwrap();
	flash.info("Queued without a target", None, false).unwrap();

	let response = reinhardt_flash::http::finalize_response(&flash);
	assert_eq!(response.status(), 500);
}
