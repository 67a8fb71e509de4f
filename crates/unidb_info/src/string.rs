use core::fmt;

use crate::{Error, Result, names, pool::BufferPool};

/// Where the bytes of a packed string come from.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum StringOrigin {
	/// String section of the character records.
	Ucd,
	/// String section of the Unihan records.
	Unihan,
	/// Block name section.
	Blocks,
	/// Strings compiled into the crate.
	Builtin,
	/// Generated Hangul syllable name, the offset holds the code point.
	HangulSyllable,
	/// Generated `"<PREFIX>-<HEX>"` name, the offset holds the code point.
	CjkSequence,
}

impl StringOrigin {
	/// First origin which generates its bytes on request.
	pub const FIRST_GENERATOR : StringOrigin = StringOrigin::HangulSyllable;
}

const BUILTIN_STRINGS : &str = "No_Block";

/// Reference to a string that lives in one of the database sections, or that is generated on request.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PackedStringRef {
	origin: StringOrigin,
	len:    u16,
	offset: u32,
}
assert_eq_size!(PackedStringRef, u64);

impl PackedStringRef {
	/// Absent string.
	pub const EMPTY : PackedStringRef = PackedStringRef { origin: StringOrigin::Builtin, len: 0, offset: 0 };
	/// Name reported for code points outside of any block.
	pub const NO_BLOCK : PackedStringRef = PackedStringRef { origin: StringOrigin::Builtin, len: BUILTIN_STRINGS.len() as u16, offset: 0 };

	/// Reference `len` bytes at `offset` in the section of `origin`.
	pub const fn new_static(origin: StringOrigin, offset: u32, len: u16) -> Self {
		debug_assert!((origin as u8) < StringOrigin::FIRST_GENERATOR as u8);
		Self { origin, len, offset }
	}

	/// Reference the generated name of a Hangul syllable.
	pub fn hangul_syllable(code_point: u32) -> Result<Self> {
		let len = names::hangul_name_len(code_point)?;
		Ok(Self { origin: StringOrigin::HangulSyllable, len: len as u16, offset: code_point })
	}

	/// Reference the generated sequence name of a code point, `None` if it is not in a sequence named range.
	pub fn cjk_sequence(code_point: u32) -> Option<Self> {
		let len = names::sequence_name_len(code_point)?;
		Some(Self { origin: StringOrigin::CjkSequence, len: len as u16, offset: code_point })
	}

	pub const fn origin(&self) -> StringOrigin {
		self.origin
	}

	pub const fn is_lazy(&self) -> bool {
		self.origin as u8 >= StringOrigin::FIRST_GENERATOR as u8
	}

	/// Length of the string in bytes, also for generated strings.
	pub const fn len(&self) -> usize {
		self.len as usize
	}

	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Offset into the section, meaningless for generated strings.
	pub const fn offset(&self) -> u32 {
		self.offset
	}

	/// Code point a generated string is generated from.
	pub const fn code_point(&self) -> Option<u32> {
		if self.is_lazy() {
			Some(self.offset)
		} else {
			None
		}
	}
}

impl Default for PackedStringRef {
	fn default() -> Self {
		Self::EMPTY
	}
}

//==============================================================

/// The string sections of a database.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringBuffers<'a> {
	pub ucd:    &'a [u8],
	pub unihan: &'a [u8],
	pub blocks: &'a [u8],
}

impl<'a> StringBuffers<'a> {
	/// Get the bytes a static origin refers into, generated origins have no backing bytes.
	pub fn section(&self, origin: StringOrigin) -> &'a [u8] {
		match origin {
			StringOrigin::Ucd => self.ucd,
			StringOrigin::Unihan => self.unihan,
			StringOrigin::Blocks => self.blocks,
			StringOrigin::Builtin => BUILTIN_STRINGS.as_bytes(),
			StringOrigin::HangulSyllable |
			StringOrigin::CjkSequence => &[],
		}
	}

	/// Get the bytes of a static string, `None` for generated strings.
	pub fn as_bytes(&self, string: PackedStringRef) -> Option<&'a [u8]> {
		if string.is_lazy() {
			return None;
		}
		let start = string.offset as usize;
		self.section(string.origin).get(start..start + string.len())
	}

	/// Write the bytes of a string into `dest`, returning the number of bytes written.
	pub fn render(&self, string: PackedStringRef, dest: &mut [u8]) -> Result<usize> {
		render(string, self.section(string.origin), dest)
	}
}

fn render(string: PackedStringRef, section: &[u8], dest: &mut [u8]) -> Result<usize> {
	match string.origin {
		StringOrigin::HangulSyllable => names::write_hangul_name(string.offset, dest),
		StringOrigin::CjkSequence => {
			let prefix = names::sequence_prefix(string.offset).ok_or(Error::CorruptData("no sequence name for code point"))?;
			names::write_sequence_name(prefix, string.offset, dest)
		},
		_ => {
			let start = string.offset as usize;
			let bytes = section.get(start..start + string.len()).ok_or(Error::CorruptData("string outside of its section"))?;
			if dest.len() < bytes.len() {
				return Err(Error::BufferTooSmall { required: bytes.len() });
			}
			dest[..bytes.len()].copy_from_slice(bytes);
			Ok(bytes.len())
		},
	}
}

//==============================================================

static SCRATCH_POOL : BufferPool = BufferPool::new(BufferPool::DEFAULT_MAX_POOLED);

/// A string in a database.
///
/// Static strings can be borrowed directly with [`PackedStr::as_str`], generated strings need to be written into
/// a buffer with [`PackedStr::write_to`]. `Display` and `to_string` work for both.
#[derive(Clone, Copy)]
pub struct PackedStr<'a> {
	string:  PackedStringRef,
	section: &'a [u8],
}

impl<'a> PackedStr<'a> {
	pub fn new(string: PackedStringRef, buffers: &StringBuffers<'a>) -> Self {
		Self { string, section: buffers.section(string.origin) }
	}

	pub fn string_ref(&self) -> PackedStringRef {
		self.string
	}

	pub fn is_lazy(&self) -> bool {
		self.string.is_lazy()
	}

	pub fn len(&self) -> usize {
		self.string.len()
	}

	pub fn is_empty(&self) -> bool {
		self.string.is_empty()
	}

	/// Borrow the bytes of a static string.
	pub fn as_bytes(&self) -> Option<&'a [u8]> {
		if self.is_lazy() {
			return None;
		}
		let start = self.string.offset as usize;
		self.section.get(start..start + self.string.len())
	}

	/// Borrow a static string, `None` for generated strings.
	pub fn as_str(&self) -> Option<&'a str> {
		self.as_bytes().and_then(|bytes| core::str::from_utf8(bytes).ok())
	}

	/// Write the string into `dest`, returning the number of bytes written.
	///
	/// Fails with [`Error::BufferTooSmall`] when `dest` is shorter than [`PackedStr::len`].
	pub fn write_to(&self, dest: &mut [u8]) -> Result<usize> {
		render(self.string, self.section, dest)
	}
}

impl PartialEq for PackedStr<'_> {
	/// Strings are equal when they refer to the same bytes, not when their contents match.
	fn eq(&self, other: &Self) -> bool {
		self.string == other.string && core::ptr::eq(self.section.as_ptr(), other.section.as_ptr())
	}
}

impl Eq for PackedStr<'_> {}

impl fmt::Display for PackedStr<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(s) = self.as_str() {
			return f.write_str(s);
		}

		let mut buffer = SCRATCH_POOL.acquire_zeroed(self.len());
		let len = self.write_to(&mut buffer).map_err(|_| fmt::Error)?;
		let s = core::str::from_utf8(&buffer[..len]).map_err(|_| fmt::Error)?;
		f.write_str(s)
	}
}

impl fmt::Debug for PackedStr<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "\"{self}\"")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const UCD : &[u8] = b"LATIN CAPITAL LETTER AMALAYALAM FRACTION ONE SIXTEENTH";

	fn buffers() -> StringBuffers<'static> {
		StringBuffers { ucd: UCD, unihan: b"one", blocks: b"Basic Latin" }
	}

	#[test]
	pub fn static_strings() {
		let buffers = buffers();
		let string = PackedStringRef::new_static(StringOrigin::Ucd, 0, 22);
		assert!(!string.is_lazy());
		assert_eq!(string.code_point(), None);

		let view = PackedStr::new(string, &buffers);
		assert_eq!(view.as_str(), Some("LATIN CAPITAL LETTER A"));
		assert_eq!(view.to_string(), "LATIN CAPITAL LETTER A");

		let mut dest = [0u8; 22];
		assert_eq!(view.write_to(&mut dest), Ok(22));
		assert_eq!(view.write_to(&mut dest[..4]), Err(Error::BufferTooSmall { required: 22 }));

		let blocks = PackedStringRef::new_static(StringOrigin::Blocks, 0, 11);
		assert_eq!(buffers.as_bytes(blocks), Some(&b"Basic Latin"[..]));
		assert_eq!(PackedStr::new(PackedStringRef::NO_BLOCK, &buffers).as_str(), Some("No_Block"));
		assert!(PackedStr::new(PackedStringRef::EMPTY, &buffers).is_empty());
	}

	#[test]
	pub fn generated_strings() {
		let buffers = buffers();
		let hangul = PackedStringRef::hangul_syllable(0xD4DB).unwrap();
		assert!(hangul.is_lazy());
		assert_eq!(hangul.code_point(), Some(0xD4DB));
		assert_eq!(hangul.len(), "HANGUL SYLLABLE PWILH".len());

		let view = PackedStr::new(hangul, &buffers);
		assert_eq!(view.as_str(), None);
		assert_eq!(view.to_string(), "HANGUL SYLLABLE PWILH");

		let mut dest = [0u8; 8];
		assert_eq!(view.write_to(&mut dest), Err(Error::BufferTooSmall { required: 21 }));
		let mut dest = vec![0u8; view.len()];
		assert_eq!(buffers.render(hangul, &mut dest), Ok(21));

		let cjk = PackedStringRef::cjk_sequence(0x20000).unwrap();
		assert_eq!(PackedStr::new(cjk, &buffers).to_string(), "CJK UNIFIED IDEOGRAPH-20000");
		assert!(PackedStringRef::cjk_sequence(0x41).is_none());
		assert_eq!(PackedStringRef::hangul_syllable(0x41), Err(Error::NotHangulSyllable(0x41)));
	}

	#[test]
	pub fn equality_is_by_address() {
		let first_bytes = *b"NAME NAME";
		let second_bytes = *b"NAME NAME";
		let first = StringBuffers { ucd: &first_bytes, ..Default::default() };
		let second = StringBuffers { ucd: &second_bytes, ..Default::default() };
		let string = PackedStringRef::new_static(StringOrigin::Ucd, 0, 4);
		assert_eq!(PackedStr::new(string, &first), PackedStr::new(string, &first));
		assert_ne!(PackedStr::new(string, &first), PackedStr::new(string, &second));
		assert_ne!(PackedStr::new(string, &second), PackedStr::new(PackedStringRef::new_static(StringOrigin::Ucd, 5, 4), &second));
	}
}
