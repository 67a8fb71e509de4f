//! Compact, queryable encoding of the Unicode Character Database, Unihan and emoji property data.
//!
//! The data lives in a single immutable byte buffer, produced by `unidb_builder`, and is queried through a
//! [`UnicodeDatabase`]. Query results only hold offsets into that buffer, strings are materialized on request.
//!
//! Official info:
//! https://www.unicode.org/reports/tr44/
//! https://www.unicode.org/reports/tr38/
//! https://www.unicode.org/reports/tr51/

#[macro_use]
extern crate static_assertions as sa;

use core::fmt;

mod error;
pub use error::*;

pub mod codec;
pub mod names;
pub mod packer;
pub mod pool;
pub mod range;
pub mod record;

mod props;
pub use props::*;

mod string;
pub use string::*;

mod block;
pub use block::*;

mod radical;
pub use radical::*;

mod database;
pub use database::*;

pub use range::CodePointRange;

/// Highest valid code point.
pub const MAX_CODE_POINT : u32 = 0x10FFFF;

/// Version of the binary format, stored after the `"UCD"` magic.
pub const FORMAT_VERSION : u8 = 1;

/// Magic bytes at the start of every database.
pub const MAGIC : [u8; 3] = *b"UCD";

/// Check that a code point lies in `0..=0x10FFFF`.
pub fn validate_code_point(code_point: u32) -> Result<u32> {
	if code_point <= MAX_CODE_POINT {
		Ok(code_point)
	} else {
		Err(Error::CodePointOutOfRange(code_point))
	}
}

//==============================================================

/// Version of the Unicode standard a database was built from.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct UnicodeVersion {
	pub major: u16,
	pub minor: u8,
	pub patch: u8,
}

impl UnicodeVersion {
	pub const fn new(major: u16, minor: u8, patch: u8) -> Self {
		Self { major, minor, patch }
	}

	/// Parse a `major.minor.patch` version, the minor and patch components are optional.
	pub fn parse(s: &str) -> Option<Self> {
		let mut parts = s.trim().split('.');
		let major = parts.next()?.parse().ok()?;
		let minor = parts.next().map_or(Some(0), |part| part.parse().ok())?;
		let patch = parts.next().map_or(Some(0), |part| part.parse().ok())?;
		if parts.next().is_some() {
			return None;
		}
		Some(Self { major, minor, patch })
	}
}

impl fmt::Display for UnicodeVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("{}.{}.{}", self.major, self.minor, self.patch))
	}
}
