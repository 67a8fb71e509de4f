use core::fmt;
use std::io;

use unidb_info::CodePointRange;

/// Error while building a database, every error aborts the build.
#[derive(Debug)]
pub enum BuildError {
	/// A source file could not be opened or read.
	Io { file: String, error: io::Error },
	/// A line is malformed, misses a required field or holds an invalid value.
	Parse { file: String, line: usize, message: String },
	/// A range overlaps a range that was already ingested.
	Overlap { file: String, line: usize, range: CodePointRange, existing: CodePointRange },
	/// A property name is not known to the database.
	UnknownProperty { file: String, line: usize, name: String },
	/// A value can't be represented, e.g. a Unihan code point outside of the CJK ranges.
	Encoding { file: String, line: usize, error: unidb_info::Error },
	/// `CJKRadicals.txt` has no traditional form for a radical.
	MissingRadical(u8),
	/// A count or string length does not fit its field in the database.
	TooLarge(&'static str),
}

impl BuildError {
	pub(crate) fn parse(file: &str, line: usize, message: impl Into<String>) -> Self {
		BuildError::Parse { file: file.to_string(), line, message: message.into() }
	}

	pub(crate) fn io(file: &str, error: io::Error) -> Self {
		BuildError::Io { file: file.to_string(), error }
	}
}

impl fmt::Display for BuildError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BuildError::Io { file, error } => f.write_fmt(format_args!("Failed to read '{file}': {error}")),
			BuildError::Parse { file, line, message } => f.write_fmt(format_args!("{file}:{line}: {message}")),
			BuildError::Overlap { file, line, range, existing } => f.write_fmt(format_args!("{file}:{line}: {range} overlaps {existing}")),
			BuildError::UnknownProperty { file, line, name } => f.write_fmt(format_args!("{file}:{line}: unknown property '{name}'")),
			BuildError::Encoding { file, line, error } => f.write_fmt(format_args!("{file}:{line}: {error}")),
			BuildError::MissingRadical(index) => f.write_fmt(format_args!("Radical {index} has no traditional form")),
			BuildError::TooLarge(what) => f.write_fmt(format_args!("Too large to encode: {what}")),
		}
	}
}

impl std::error::Error for BuildError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			BuildError::Io { error, .. } => Some(error),
			BuildError::Encoding { error, .. } => Some(error),
			_ => None,
		}
	}
}

pub type Result<T> = core::result::Result<T, BuildError>;
