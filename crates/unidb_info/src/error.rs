use core::fmt;

/// Unicode database error
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Error {
	/// The database bytes are malformed: bad magic or version, truncated data, invalid flags or out of range values.
	CorruptData(&'static str),
	/// The code point is outside of `0..=0x10FFFF`.
	CodePointOutOfRange(u32),
	/// The radical index is outside of `1..=214`.
	RadicalIndexOutOfRange(u32),
	/// A Hangul syllable name was requested for a code point outside of `U+AC00..=U+D7A3`.
	NotHangulSyllable(u32),
	/// The code point is not part of any CJK ideograph range known to the Unihan packer.
	NotUnihanCodePoint(u32),
	/// The destination buffer can't hold the rendered string.
	BufferTooSmall { required: usize },
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::CorruptData(context) => f.write_fmt(format_args!("Corrupt unicode data: {context}")),
			Error::CodePointOutOfRange(cp) => f.write_fmt(format_args!("Code point {cp:#X} is outside of the unicode range")),
			Error::RadicalIndexOutOfRange(idx) => f.write_fmt(format_args!("Radical index {idx} is outside of the range 1..=214")),
			Error::NotHangulSyllable(cp) => f.write_fmt(format_args!("U+{cp:04X} is not a Hangul syllable")),
			Error::NotUnihanCodePoint(cp) => f.write_fmt(format_args!("U+{cp:04X} is not in a CJK ideograph range")),
			Error::BufferTooSmall { required } => f.write_fmt(format_args!("Buffer too small, {required} bytes are required")),
		}
	}
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
