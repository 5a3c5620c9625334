//! Response writers for emitting rendered flash output

use crate::error::FlashResult;
use std::io;

/// Sink accepting rendered HTML as (part of) a response body
pub trait ResponseWriter {
	fn write_html(&mut self, html: &str) -> FlashResult<()>;
}

impl ResponseWriter for String {
	fn write_html(&mut self, html: &str) -> FlashResult<()> {
		self.push_str(html);
		Ok(())
	}
}

impl ResponseWriter for Vec<u8> {
	fn write_html(&mut self, html: &str) -> FlashResult<()> {
		self.extend_from_slice(html.as_bytes());
		Ok(())
	}
}

impl<W: ResponseWriter + ?Sized> ResponseWriter for &mut W {
	fn write_html(&mut self, html: &str) -> FlashResult<()> {
		(**self).write_html(html)
	}
}

/// Adapter writing rendered HTML to any [`io::Write`]
///
/// # Examples
///
/// ```
/// use reinhardt_flash_core::writer::{IoWriter, ResponseWriter};
///
/// let mut writer = IoWriter::new(Vec::new());
/// writer.write_html("<p>hi</p>").unwrap();
/// assert_eq!(writer.into_inner(), b"<p>hi</p>");
/// ```
#[derive(Debug)]
pub struct IoWriter<W> {
	inner: W,
}

impl<W: io::Write> IoWriter<W> {
	pub fn new(inner: W) -> Self {
		Self { inner }
	}

	pub fn into_inner(self) -> W {
		self.inner
	}
}

impl<W: io::Write> ResponseWriter for IoWriter<W> {
	fn write_html(&mut self, html: &str) -> FlashResult<()> {
		self.inner.write_all(html.as_bytes())?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FlashError;
	use rstest::rstest;

	struct FailingWriter;

	impl io::Write for FailingWriter {
		fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
			Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away"))
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[rstest]
	fn test_string_writer_appends() {
		let mut body = String::from("<main>");
		body.write_html("<p>a</p>").unwrap();
		body.write_html("<p>b</p>").unwrap();
		assert_eq!(body, "<main><p>a</p><p>b</p>");
	}

	#[rstest]
	fn test_io_errors_propagate() {
		let mut writer = IoWriter::new(FailingWriter);
		let result = writer.write_html("x");
		assert!(matches!(result, Err(FlashError::Io(_))));
	}
}
