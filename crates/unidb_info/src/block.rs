use crate::{
	codec::ByteReader,
	range::RangeKeyed,
	Error, Result, CodePointRange, PackedStringRef, PackedStr, StringOrigin,
};

/// A Unicode block, as stored in the database.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct UnicodeBlock {
	pub range: CodePointRange,
	pub name:  PackedStringRef,
}

impl UnicodeBlock {
	/// Decode a block, the name offset is relative to the data of the reader.
	pub fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
		let first = reader.read_code_point()?;
		let last = reader.read_code_point()?;
		if last < first {
			return Err(Error::CorruptData("reversed block range"));
		}
		let (offset, len) = reader.read_str_span()?;
		let offset = u32::try_from(offset).map_err(|_| Error::CorruptData("string offset too large"))?;
		Ok(Self { range: CodePointRange::new(first, last), name: PackedStringRef::new_static(StringOrigin::Blocks, offset, len) })
	}
}

impl RangeKeyed for UnicodeBlock {
	fn range(&self) -> CodePointRange {
		self.range
	}
}

/// Block returned by database queries.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockInfo<'a> {
	pub range: CodePointRange,
	pub name:  PackedStr<'a>,
}
