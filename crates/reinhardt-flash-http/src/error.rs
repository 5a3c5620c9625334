//! Errors raised while turning flash results into HTTP responses

use reinhardt_flash_core::FlashError;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FlashHttpError {
	#[error(transparent)]
	Flash(#[from] FlashError),
	#[error("Redirect target is not a valid Location header: {0}")]
	InvalidLocation(#[from] http::header::InvalidHeaderValue),
	#[error("Failed to build response: {0}")]
	Http(#[from] http::Error),
	#[error("No session attached to the request")]
	MissingSession,
}

pub type FlashHttpResult<T> = Result<T, FlashHttpError>;
