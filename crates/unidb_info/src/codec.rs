//! Low level encodings used by the database format.
//!
//! - Code points are stored in 1 to 3 bytes, the top 3 bits of the first byte select the form:
//!   `0xxx_xxxx`/`100x_xxxx`: 1 byte, value `0x00..0xA0`;
//!   `101x_xxxx`: 2 bytes, value `0xA0..0x20A0`;
//!   `110x_xxxx`: 2 bytes, value `0x20A0..0x40A0`;
//!   `111x_xxxx`: 3 bytes, value `0x40A0..0x2040A0`.
//! - Counts and lengths are LEB128 style varints, capped to the width of the field they are read into.
//! - The combined core+emoji property word uses a control byte with 6 data bits, followed by up to 3 more bytes.

use crate::{Error, Result, MAX_CODE_POINT, CoreProperties, EmojiProperties, CORE_PROPERTY_BITS};

const TWO_BYTE_BASE   : u32 = 0xA0;
const SECOND_TWO_BASE : u32 = 0x20A0;
const THREE_BYTE_BASE : u32 = 0x40A0;

/// Largest value the code point encoding can represent.
pub const MAX_ENCODED_VALUE : u32 = THREE_BYTE_BASE + 0x1F_FFFF;

/// Number of bytes needed to encode a value with the code point encoding.
pub const fn code_point_len(value: u32) -> usize {
	if value < TWO_BYTE_BASE {
		1
	} else if value < THREE_BYTE_BASE {
		2
	} else {
		3
	}
}

/// Append a value using the code point encoding.
///
/// The value must not be larger than [`MAX_ENCODED_VALUE`].
pub fn write_code_point(buf: &mut Vec<u8>, value: u32) {
	debug_assert!(value <= MAX_ENCODED_VALUE);
	if value < TWO_BYTE_BASE {
		buf.push(value as u8);
	} else if value < SECOND_TWO_BASE {
		let val = value - TWO_BYTE_BASE;
		buf.extend_from_slice(&[(val >> 8) as u8 | 0xA0, val as u8]);
	} else if value < THREE_BYTE_BASE {
		let val = value - SECOND_TWO_BASE;
		buf.extend_from_slice(&[(val >> 8) as u8 | 0xC0, val as u8]);
	} else {
		let val = value - THREE_BYTE_BASE;
		buf.extend_from_slice(&[(val >> 16) as u8 | 0xE0, (val >> 8) as u8, val as u8]);
	}
}

/// Decode a value using the code point encoding, returning the value and the number of bytes consumed.
pub fn decode_code_point(bytes: &[u8]) -> Result<(u32, usize)> {
	const TRUNCATED : Error = Error::CorruptData("truncated code point");

	let first = *bytes.first().ok_or(TRUNCATED)? as u32;
	match first >> 5 {
		0..=4 => Ok((first, 1)),
		5 | 6 => {
			let second = *bytes.get(1).ok_or(TRUNCATED)? as u32;
			let base = if first >> 5 == 5 { TWO_BYTE_BASE } else { SECOND_TWO_BASE };
			Ok(((((first & 0x1F) << 8) | second) + base, 2))
		},
		_ => match bytes.get(1..3) {
			Some(&[second, third]) => Ok((((first & 0x1F) << 16 | (second as u32) << 8 | third as u32) + THREE_BYTE_BASE, 3)),
			_ => Err(TRUNCATED),
		},
	}
}

/// Append an unsigned varint.
pub fn write_var_u64(buf: &mut Vec<u8>, mut value: u64) {
	while value >= 0x80 {
		buf.push(value as u8 | 0x80);
		value >>= 7;
	}
	buf.push(value as u8);
}

/// Append a zig-zag encoded signed varint.
pub fn write_var_i64(buf: &mut Vec<u8>, value: i64) {
	write_var_u64(buf, ((value << 1) ^ (value >> 63)) as u64);
}

/// Append a varint length followed by the string bytes.
pub fn write_str(buf: &mut Vec<u8>, s: &str) {
	write_var_u64(buf, s.len() as u64);
	buf.extend_from_slice(s.as_bytes());
}

pub fn write_u16(buf: &mut Vec<u8>, value: u16) {
	buf.extend_from_slice(&value.to_le_bytes());
}

pub fn write_u24(buf: &mut Vec<u8>, value: u32) {
	debug_assert!(value < 1 << 24);
	buf.extend_from_slice(&value.to_le_bytes()[..3]);
}

/// Combine core and emoji properties into a single word.
pub const fn pack_property_word(core: CoreProperties, emoji: EmojiProperties) -> u32 {
	core.bits() | (emoji.bits() as u32) << CORE_PROPERTY_BITS
}

/// Split a property word into core and emoji properties.
pub fn unpack_property_word(word: u32) -> Result<(CoreProperties, EmojiProperties)> {
	let core = CoreProperties::from_bits(word & ((1 << CORE_PROPERTY_BITS) - 1));
	let emoji_bits = word >> CORE_PROPERTY_BITS;
	if !core.is_valid() || emoji_bits > u8::MAX as u32 {
		return Err(Error::CorruptData("unknown core or emoji property bits"));
	}
	let emoji = EmojiProperties::from_bits(emoji_bits as u8);
	if !emoji.is_valid() {
		return Err(Error::CorruptData("unknown core or emoji property bits"));
	}
	Ok((core, emoji))
}

/// Append a property word: a control byte (`more:1, reserved:1, data:6`), up to 2 bytes (`more:1, data:7`) and a final data byte.
pub fn write_property_word(buf: &mut Vec<u8>, word: u32) {
	debug_assert!(word < 1 << 28);

	let mut rest = word >> 6;
	if rest == 0 {
		buf.push(word as u8 & 0x3F);
		return;
	}
	buf.push(word as u8 & 0x3F | 0x80);

	for _ in 0..2 {
		let data = rest as u8 & 0x7F;
		rest >>= 7;
		if rest == 0 {
			buf.push(data);
			return;
		}
		buf.push(data | 0x80);
	}
	buf.push(rest as u8);
}

//==============================================================

/// Cursor over the database bytes, every read fails with [`Error::CorruptData`] when running out of data.
#[derive(Clone, Copy, Debug)]
pub struct ByteReader<'a> {
	data: &'a [u8],
	pos:  usize,
}

impl<'a> ByteReader<'a> {
	pub const fn new(data: &'a [u8]) -> Self {
		Self { data, pos: 0 }
	}

	/// Create a reader starting at `pos`.
	pub const fn at(data: &'a [u8], pos: usize) -> Self {
		Self { data, pos }
	}

	pub const fn position(&self) -> usize {
		self.pos
	}

	pub const fn is_empty(&self) -> bool {
		self.pos >= self.data.len()
	}

	pub fn read_u8(&mut self) -> Result<u8> {
		let byte = *self.data.get(self.pos).ok_or(Error::CorruptData("unexpected end of data"))?;
		self.pos += 1;
		Ok(byte)
	}

	pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
		let end = self.pos.checked_add(len).ok_or(Error::CorruptData("unexpected end of data"))?;
		let bytes = self.data.get(self.pos..end).ok_or(Error::CorruptData("unexpected end of data"))?;
		self.pos = end;
		Ok(bytes)
	}

	pub fn skip(&mut self, len: usize) -> Result<()> {
		self.read_bytes(len).map(|_| ())
	}

	pub fn read_u16(&mut self) -> Result<u16> {
		let bytes = self.read_bytes(2)?;
		Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
	}

	pub fn read_u24(&mut self) -> Result<u32> {
		let bytes = self.read_bytes(3)?;
		Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]))
	}

	/// Read a code point, rejecting values above `0x10FFFF`.
	pub fn read_code_point(&mut self) -> Result<u32> {
		let value = self.read_encoded_value()?;
		if value > MAX_CODE_POINT {
			return Err(Error::CorruptData("code point out of range"));
		}
		Ok(value)
	}

	/// Read a count or packed ordinal stored with the code point encoding.
	pub fn read_encoded_value(&mut self) -> Result<u32> {
		let (value, len) = decode_code_point(&self.data[self.pos.min(self.data.len())..])?;
		self.pos += len;
		Ok(value)
	}

	fn read_var(&mut self, bits: u32) -> Result<u64> {
		const OVERFLOW : Error = Error::CorruptData("varint overflow");

		let mut result = 0u64;
		let mut shift = 0;
		loop {
			let byte = self.read_u8()?;
			let data = (byte & 0x7F) as u64;
			if bits - shift < 7 && data >> (bits - shift) != 0 {
				return Err(OVERFLOW);
			}
			result |= data << shift;
			if byte & 0x80 == 0 {
				return Ok(result);
			}
			shift += 7;
			if shift >= bits {
				return Err(OVERFLOW);
			}
		}
	}

	pub fn read_var_u16(&mut self) -> Result<u16> {
		self.read_var(16).map(|val| val as u16)
	}

	pub fn read_var_u32(&mut self) -> Result<u32> {
		self.read_var(32).map(|val| val as u32)
	}

	pub fn read_var_u64(&mut self) -> Result<u64> {
		self.read_var(64)
	}

	pub fn read_var_i64(&mut self) -> Result<i64> {
		let val = self.read_var(64)?;
		Ok((val >> 1) as i64 ^ -((val & 1) as i64))
	}

	/// Read a varint length prefixed UTF-8 string, returning its offset and length.
	pub fn read_str_span(&mut self) -> Result<(usize, u16)> {
		let len = self.read_var_u16()?;
		let offset = self.pos;
		let bytes = self.read_bytes(len as usize)?;
		if core::str::from_utf8(bytes).is_err() {
			return Err(Error::CorruptData("string is not valid UTF-8"));
		}
		Ok((offset, len))
	}

	/// Read a property word written by [`write_property_word`].
	pub fn read_property_word(&mut self) -> Result<u32> {
		let control = self.read_u8()?;
		if control & 0x40 != 0 {
			return Err(Error::CorruptData("reserved bit set in property word"));
		}

		let mut word = (control & 0x3F) as u32;
		if control & 0x80 == 0 {
			return Ok(word);
		}

		let mut shift = 6;
		for _ in 0..2 {
			let byte = self.read_u8()?;
			word |= ((byte & 0x7F) as u32) << shift;
			if byte & 0x80 == 0 {
				return Ok(word);
			}
			shift += 7;
		}
		Ok(word | (self.read_u8()? as u32) << shift)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	pub fn code_point_round_trip_all() {
		let mut buf = Vec::with_capacity(4);
		for cp in 0..=MAX_CODE_POINT {
			buf.clear();
			write_code_point(&mut buf, cp);
			assert_eq!(buf.len(), code_point_len(cp));
			assert_eq!(decode_code_point(&buf), Ok((cp, buf.len())), "U+{cp:04X}");
		}
	}

	#[test]
	pub fn code_point_boundaries() {
		let encode = |cp| {
			let mut buf = Vec::new();
			write_code_point(&mut buf, cp);
			buf
		};
		assert_eq!(encode(0x9F), [0x9F]);
		assert_eq!(encode(0xA0), [0xA0, 0x00]);
		assert_eq!(encode(0x209F), [0xBF, 0xFF]);
		assert_eq!(encode(0x20A0), [0xC0, 0x00]);
		assert_eq!(encode(0x409F), [0xDF, 0xFF]);
		assert_eq!(encode(0x40A0), [0xE0, 0x00, 0x00]);
		assert_eq!(encode(MAX_ENCODED_VALUE), [0xFF, 0xFF, 0xFF]);

		assert_eq!(decode_code_point(&[0xE0, 0x00]), Err(Error::CorruptData("truncated code point")));
		assert!(decode_code_point(&[]).is_err());
		assert!(ByteReader::new(&[0xFF, 0xFF, 0xFF]).read_code_point().is_err());
		assert_eq!(ByteReader::new(&[0xFF, 0xFF, 0xFF]).read_encoded_value(), Ok(MAX_ENCODED_VALUE));
	}

	#[test]
	pub fn varints() {
		let mut buf = Vec::new();
		write_var_u64(&mut buf, 300);
		write_var_u64(&mut buf, u16::MAX as u64);
		write_var_i64(&mut buf, -3);
		write_var_i64(&mut buf, 1_000_000_000_000);
		write_var_u64(&mut buf, u64::MAX);
		assert_eq!(&buf[..2], &[0xAC, 0x02]);

		let mut reader = ByteReader::new(&buf);
		assert_eq!(reader.read_var_u16(), Ok(300));
		assert_eq!(reader.read_var_u16(), Ok(u16::MAX));
		assert_eq!(reader.read_var_i64(), Ok(-3));
		assert_eq!(reader.read_var_i64(), Ok(1_000_000_000_000));
		assert_eq!(reader.read_var_u64(), Ok(u64::MAX));
		assert!(reader.is_empty());

		let mut too_wide = Vec::new();
		write_var_u64(&mut too_wide, u16::MAX as u64 + 1);
		assert!(ByteReader::new(&too_wide).read_var_u16().is_err());
		assert!(ByteReader::new(&too_wide).read_var_u32().is_ok());
		assert!(ByteReader::new(&[0x80, 0x80]).read_var_u32().is_err());
	}

	#[test]
	pub fn property_word_sizes() {
		let sizes = [(0, 1), (0x3F, 1), (0x40, 2), (0x1FFF, 2), (0x2000, 3), (0xF_FFFF, 3), (0x10_0000, 4), ((1 << 28) - 1, 4)];
		for (word, len) in sizes {
			let mut buf = Vec::new();
			write_property_word(&mut buf, word);
			assert_eq!(buf.len(), len, "{word:#X}");
			let mut reader = ByteReader::new(&buf);
			assert_eq!(reader.read_property_word(), Ok(word));
			assert!(reader.is_empty());
		}
		assert!(ByteReader::new(&[0x40]).read_property_word().is_err());
	}

	#[test]
	pub fn property_word_split() {
		let core = CoreProperties::Alphabetic | CoreProperties::InCbExtend;
		let emoji = EmojiProperties::ExtendedPictographic;
		let word = pack_property_word(core, emoji);
		assert_eq!(unpack_property_word(word), Ok((core, emoji)));
		assert!(unpack_property_word(1 << 21).is_err());
		assert!(unpack_property_word(1 << 28).is_err());
	}

	#[test]
	pub fn strings() {
		let mut buf = Vec::new();
		write_str(&mut buf, "HANGUL");
		buf.extend_from_slice(&[2, 0xFF, 0xFE]);
		let mut reader = ByteReader::new(&buf);
		assert_eq!(reader.read_str_span(), Ok((1, 6)));
		assert!(reader.read_str_span().is_err());
	}
}
