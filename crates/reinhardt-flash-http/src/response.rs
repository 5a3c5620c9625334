//! Response construction for the redirect, failure and render paths

use crate::error::FlashHttpResult;
use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue, LOCATION};
use http::{Response, StatusCode};
use http_body_util::Full;
use reinhardt_flash_core::{
	FlashError, FlashMessages, FlashResult, GENERIC_FAILURE_MESSAGE, Redirect, ResponseWriter,
	SessionStore, TypeSelection,
};

/// Response type produced by this crate
pub type FlashResponse = Response<Full<Bytes>>;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Build a `302 Found` response pointing at the redirect target
///
/// # Examples
///
/// ```
/// use http::StatusCode;
/// use reinhardt_flash_core::Redirect;
/// use reinhardt_flash_http::redirect_response;
///
/// let response = redirect_response(&Redirect::new("/thanks")).unwrap();
/// assert_eq!(response.status(), StatusCode::FOUND);
/// assert_eq!(response.headers()["location"], "/thanks");
/// ```
pub fn redirect_response(redirect: &Redirect) -> FlashHttpResult<FlashResponse> {
	let location = HeaderValue::try_from(redirect.location())?;
	let response = Response::builder()
		.status(StatusCode::FOUND)
		.header(LOCATION, location)
		.body(Full::new(Bytes::new()))?;
	Ok(response)
}

/// Build the generic `500` page shown when a request must stop
pub fn failure_response() -> FlashResponse {
	let mut response = Response::new(Full::new(Bytes::from_static(
		GENERIC_FAILURE_MESSAGE.as_bytes(),
	)));
	*response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
	response
		.headers_mut()
		.insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_CONTENT_TYPE));
	response
}

/// Finish a request that queued flash messages
///
/// Redirects to the recorded target. A missing target, or one that cannot be
/// sent as a `Location` header, halts the request with [`failure_response`].
pub fn finalize_response<S: SessionStore>(flash: &FlashMessages<S>) -> FlashResponse {
	let redirect = match flash.finalize() {
		Ok(redirect) => redirect,
		Err(FlashError::MisconfiguredRedirect) => return failure_response(),
		Err(err) => {
			tracing::error!(error = %err, "Failed to finalize flash messages");
			return failure_response();
		}
	};

	match redirect_response(&redirect) {
		Ok(response) => response,
		Err(err) => {
			tracing::error!(
				flash_id = %flash.id(),
				location = redirect.location(),
				error = %err,
				"Cannot redirect to flash target"
			);
			failure_response()
		}
	}
}

/// Buffered HTML response body
///
/// # Examples
///
/// ```
/// use reinhardt_flash_core::ResponseWriter;
/// use reinhardt_flash_http::HtmlBody;
///
/// let mut body = HtmlBody::new();
/// body.write_html("<main>").unwrap();
/// body.write_html("</main>").unwrap();
///
/// let response = body.into_response();
/// assert_eq!(response.headers()["content-type"], "text/html; charset=utf-8");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlBody {
	html: String,
}

impl HtmlBody {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn as_str(&self) -> &str {
		&self.html
	}

	pub fn is_empty(&self) -> bool {
		self.html.is_empty()
	}

	/// Wrap the buffered HTML in a `200 OK` response
	pub fn into_response(self) -> FlashResponse {
		let mut response = Response::new(Full::new(Bytes::from(self.html)));
		response
			.headers_mut()
			.insert(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));
		response
	}
}

impl ResponseWriter for HtmlBody {
	fn write_html(&mut self, html: &str) -> FlashResult<()> {
		self.html.push_str(html);
		Ok(())
	}
}

/// Render the selected flash messages as a complete HTML response
///
/// A session without a flash namespace yields an empty body.
pub fn render_response<S: SessionStore>(
	flash: &FlashMessages<S>,
	types: impl Into<TypeSelection>,
) -> FlashHttpResult<FlashResponse> {
	let mut body = HtmlBody::new();
	flash.display_to(types, &mut body)?;
	Ok(body.into_response())
}
