use crate::{codec::ByteReader, Error, Result};

/// Number of Kangxi radicals.
pub const RADICAL_COUNT : u8 = 214;

/// Bit in the traditional radical code point marking that a simplified form follows.
pub const HAS_SIMPLIFIED_FLAG : u16 = 0x8000;

/// Radical code point together with the ideograph it corresponds to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RadicalForm {
	/// Code point in the Kangxi Radicals or CJK Radicals Supplement block.
	pub radical:   u32,
	/// Corresponding CJK unified ideograph.
	pub character: u32,
}

/// CJK radical info from `CJKRadicals.txt`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CjkRadicalInfo {
	/// Radical number in `1..=214`.
	pub index:       u8,
	pub traditional: RadicalForm,
	pub simplified:  Option<RadicalForm>,
}

impl CjkRadicalInfo {
	/// Check a radical number, returning it as an index into the radical table.
	pub fn table_index(index: u32) -> Result<usize> {
		if index == 0 || index > RADICAL_COUNT as u32 {
			Err(Error::RadicalIndexOutOfRange(index))
		} else {
			Ok(index as usize - 1)
		}
	}

	pub fn decode(reader: &mut ByteReader<'_>, index: u8) -> Result<Self> {
		let radical = reader.read_u16()?;
		let character = reader.read_u16()?;
		let traditional = RadicalForm { radical: (radical & !HAS_SIMPLIFIED_FLAG) as u32, character: character as u32 };

		let simplified = if radical & HAS_SIMPLIFIED_FLAG != 0 {
			let radical = reader.read_u16()? as u32;
			let character = reader.read_u16()? as u32;
			Some(RadicalForm { radical, character })
		} else {
			None
		};

		Ok(Self { index, traditional, simplified })
	}
}
