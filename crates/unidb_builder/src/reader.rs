//! Line tokenizer for the UCD text formats.

use std::io::BufRead;

use unidb_info::pool::BufferPool;

use crate::{BuildError, Result};

static SCRATCH_POOL : BufferPool = BufferPool::new(BufferPool::DEFAULT_MAX_POOLED);

/// Field delimiter of a file.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Delimiter {
	/// `UnicodeData.txt`, `PropList.txt` and most other UCD files.
	Semicolon,
	/// Unihan files and `NamesList.txt`.
	Tab,
}

impl Delimiter {
	const fn as_char(self) -> char {
		match self {
			Delimiter::Semicolon => ';',
			Delimiter::Tab => '\t',
		}
	}
}

/// A single non-empty line of a source file.
#[derive(Clone, Copy, Debug)]
pub struct Line<'a> {
	file:      &'a str,
	number:    usize,
	text:      &'a str,
	delimiter: Delimiter,
}

impl<'a> Line<'a> {
	/// 1-based line number.
	pub fn number(&self) -> usize {
		self.number
	}

	/// Text of the line without the trailing comment and line ending.
	pub fn text(&self) -> &'a str {
		self.text
	}

	/// Get a trimmed field.
	pub fn field(&self, idx: usize) -> Option<&'a str> {
		self.text.split(self.delimiter.as_char()).nth(idx).map(str::trim)
	}

	/// Get a trimmed field that must be present.
	pub fn required(&self, idx: usize) -> Result<&'a str> {
		match self.field(idx) {
			Some(field) => Ok(field),
			None => Err(self.error(format!("missing required field {idx}"))),
		}
	}

	/// Iterate over the trimmed fields.
	pub fn fields(&self) -> impl Iterator<Item = &'a str> + 'a {
		self.text.split(self.delimiter.as_char()).map(str::trim)
	}

	pub fn field_count(&self) -> usize {
		self.text.split(self.delimiter.as_char()).count()
	}

	/// Create a parse error pointing at this line.
	pub fn error(&self, message: impl Into<String>) -> BuildError {
		BuildError::parse(self.file, self.number, message)
	}

	pub fn file(&self) -> &'a str {
		self.file
	}

	#[cfg(test)]
	pub(crate) fn for_tests(text: &'a str) -> Self {
		Self { file: "test.txt", number: 1, text, delimiter: Delimiter::Semicolon }
	}
}

/// Streaming reader that hands out one [`Line`] at a time.
///
/// Bytes are gathered in a pooled scratch buffer, which is decoded once per line and returned to the pool after the
/// line was processed.
pub struct LineReader<'f, R> {
	file:      &'f str,
	reader:    R,
	delimiter: Delimiter,
	raw:       bool,
	line:      usize,
}

impl<'f, R: BufRead> LineReader<'f, R> {
	pub fn new(file: &'f str, reader: R, delimiter: Delimiter) -> Self {
		Self { file, reader, delimiter, raw: false, line: 0 }
	}

	/// Keep `#` and everything after it, for files where `#` is not a comment marker.
	pub fn raw(mut self) -> Self {
		self.raw = true;
		self
	}

	/// Call `f` for every line which has any content left after removing comments.
	pub fn for_each(&mut self, mut f: impl FnMut(&Line<'_>) -> Result<()>) -> Result<()> {
		loop {
			let mut buffer = SCRATCH_POOL.acquire();
			let read = self.reader.read_until(b'\n', &mut *buffer).map_err(|err| BuildError::io(self.file, err))?;
			if read == 0 {
				return Ok(());
			}
			self.line += 1;

			let text = core::str::from_utf8(&buffer[..]).map_err(|_| BuildError::parse(self.file, self.line, "invalid UTF-8"))?;
			let text = match (self.raw, text.find('#')) {
				(false, Some(comment)) => &text[..comment],
				_ => text,
			};
			let text = text.trim_end_matches(['\n', '\r']);
			if text.trim().is_empty() {
				continue;
			}

			f(&Line { file: self.file, number: self.line, text, delimiter: self.delimiter })?;
		}
	}

	/// Number of lines read so far.
	pub fn lines_read(&self) -> usize {
		self.line
	}
}
