//! Variable length record layouts.
//!
//! Every record starts with a flag word, each flag gates one optional field. Absent fields take no bytes, fields
//! are always stored in the order of the flags documented on [`UcdFields`] and [`UnihanFields`].

use unidb_base::EnumFromIndexT;
use unidb_macros::flags;

use crate::{
	codec::ByteReader,
	Error, Result, CodePointRange, PackedStringRef, StringOrigin,
	Category, CanonicalCombiningClass, BidirectionalClass, DecompositionType, NumericType, Rational, NameAliasKind,
	ContributoryProperties, CoreProperties, EmojiProperties, UnihanNumericType,
};

/// Fields present in a character record, stored as a 24-bit word.
///
/// Field order: first code point, last code point (`CodePointRange` only), name, aliases, category, combining class,
/// bidi class, decomposition, numeric value (when the numeric type is not `None`), old name, upper, lower and title
/// mappings, contributory properties, core+emoji properties, cross references.
#[flags(u32)]
pub enum UcdFields {
	/// The record covers more than 1 code point.
	CodePointRange,
	Name,
	NameAliases,
	Category,
	CanonicalCombiningClass,
	BidirectionalClass,
	Decomposition,
	/// Has no payload.
	BidirectionalMirrored,
	OldName,
	SimpleUpperCaseMapping,
	SimpleLowerCaseMapping,
	SimpleTitleCaseMapping,
	ContributoryProperties,
	CoreProperties,
	CrossReferences,
	/// 2-bit [`NumericType`].
	NumericType = 0x18000,
}

impl UcdFields {
	/// Number of bits the flag word takes on the wire.
	pub const WIRE_BITS : u32 = 24;
	const NUMERIC_SHIFT : u32 = 15;

	pub fn numeric_type(self) -> NumericType {
		NumericType::from_idx_or(((self.bits() & UcdFields::NumericType.bits()) >> Self::NUMERIC_SHIFT) as usize, NumericType::None)
	}

	pub fn with_numeric_type(self, numeric_type: NumericType) -> Self {
		let bits = (self.bits() & !UcdFields::NumericType.bits()) | (numeric_type as u32) << Self::NUMERIC_SHIFT;
		UcdFields::from_bits(bits)
	}
}
const_assert!(UcdFields::all().bits() < 1 << UcdFields::WIRE_BITS);

/// Fields present in a Unihan record.
///
/// Field order: packed code point, numeric value, radical/stroke counts, then the strings in flag order.
#[flags]
pub enum UnihanFields {
	Definition,
	MandarinReading,
	CantoneseReading,
	JapaneseKunReading,
	JapaneseOnReading,
	KoreanReading,
	HangulReading,
	VietnameseReading,
	SimplifiedVariant,
	TraditionalVariant,
	/// 2-bit [`UnihanNumericType`].
	NumericType = 0x0C00,
	/// 2-bit number of radical/stroke entries, 3 means an explicit count byte follows.
	RadicalStrokeCount = 0x3000,
}

impl UnihanFields {
	const NUMERIC_SHIFT : u32 = 10;
	const RS_SHIFT : u32 = 12;

	/// Order in which the strings are stored.
	pub const STRINGS : [UnihanFields; 10] = [
		UnihanFields::Definition,
		UnihanFields::MandarinReading,
		UnihanFields::CantoneseReading,
		UnihanFields::JapaneseKunReading,
		UnihanFields::JapaneseOnReading,
		UnihanFields::KoreanReading,
		UnihanFields::HangulReading,
		UnihanFields::VietnameseReading,
		UnihanFields::SimplifiedVariant,
		UnihanFields::TraditionalVariant,
	];

	pub fn numeric_type(self) -> UnihanNumericType {
		UnihanNumericType::from_idx_or(((self.bits() & UnihanFields::NumericType.bits()) >> Self::NUMERIC_SHIFT) as usize, UnihanNumericType::None)
	}

	pub fn with_numeric_type(self, numeric_type: UnihanNumericType) -> Self {
		let bits = (self.bits() & !UnihanFields::NumericType.bits()) | (numeric_type as u16) << Self::NUMERIC_SHIFT;
		UnihanFields::from_bits(bits)
	}

	/// Number of radical/stroke entries, 3 stands for 3 or more.
	pub fn radical_stroke_cardinality(self) -> u8 {
		((self.bits() & UnihanFields::RadicalStrokeCount.bits()) >> Self::RS_SHIFT) as u8
	}

	pub fn with_radical_stroke_cardinality(self, count: usize) -> Self {
		let cardinality = count.min(3) as u16;
		UnihanFields::from_bits((self.bits() & !UnihanFields::RadicalStrokeCount.bits()) | cardinality << Self::RS_SHIFT)
	}
}

//==============================================================

/// Radical and additional stroke count of an ideograph (`kRSUnicode`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RadicalStrokeCount {
	/// Radical index in `1..=214`.
	pub radical:       u8,
	/// The simplified form of the radical is used.
	pub is_simplified: bool,
	/// Strokes in addition to the radical, may be negative.
	pub strokes:       i8,
}

impl RadicalStrokeCount {
	pub const MIN_STROKES : i8 = -64;
	pub const MAX_STROKES : i8 = 63;

	/// Parse an entry like `9.2`, `120'.4` or `213''.-1`.
	pub fn parse(s: &str) -> Option<Self> {
		let (radical, strokes) = s.split_once('.')?;
		let trimmed = radical.trim_end_matches('\'');
		let is_simplified = trimmed.len() != radical.len();
		let radical = trimmed.parse::<u8>().ok()?;
		let strokes = strokes.parse::<i8>().ok()?;
		if radical == 0 || radical > crate::RADICAL_COUNT || !(Self::MIN_STROKES..=Self::MAX_STROKES).contains(&strokes) {
			return None;
		}
		Some(Self { radical, is_simplified, strokes })
	}

	/// Stroke byte: the top bit marks a simplified radical, the low 7 bits hold the signed stroke count.
	pub fn stroke_byte(&self) -> u8 {
		(self.is_simplified as u8) << 7 | (self.strokes as u8 & 0x7F)
	}

	/// Decode a radical byte and stroke byte.
	pub fn from_bytes(radical: u8, strokes: u8) -> Result<Self> {
		if radical == 0 || radical > crate::RADICAL_COUNT {
			return Err(Error::CorruptData("radical index out of range"));
		}
		Ok(Self {
			radical,
			is_simplified: strokes & 0x80 != 0,
			strokes: ((strokes << 1) as i8) >> 1,
		})
	}
}

//==============================================================

/// Code points stored in a record, e.g. a decomposition mapping.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CodePointList {
	offset: u32,
	count:  u8,
}

impl CodePointList {
	pub fn len(&self) -> usize {
		self.count as usize
	}

	pub fn is_empty(&self) -> bool {
		self.count == 0
	}

	pub fn iter<'a>(&self, section: &'a [u8]) -> CodePoints<'a> {
		CodePoints { reader: ByteReader::at(section, self.offset as usize), remaining: self.count }
	}

	fn read(reader: &mut ByteReader<'_>) -> Result<Self> {
		let count = reader.read_u8()?;
		let offset = reader.position() as u32;
		for _ in 0..count {
			reader.read_code_point()?;
		}
		Ok(Self { offset, count })
	}
}

/// Iterator over the code points of a [`CodePointList`].
#[derive(Clone, Debug)]
pub struct CodePoints<'a> {
	reader:    ByteReader<'a>,
	remaining: u8,
}

impl Iterator for CodePoints<'_> {
	type Item = u32;

	fn next(&mut self) -> Option<u32> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;
		self.reader.read_code_point().ok()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining as usize, Some(self.remaining as usize))
	}
}

/// A formal name alias.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NameAliasRef {
	pub kind: NameAliasKind,
	pub name: PackedStringRef,
}

/// Name aliases stored in a record.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NameAliasList {
	offset: u32,
	count:  u8,
}

impl NameAliasList {
	pub fn len(&self) -> usize {
		self.count as usize
	}

	pub fn is_empty(&self) -> bool {
		self.count == 0
	}

	pub fn iter<'a>(&self, section: &'a [u8]) -> NameAliases<'a> {
		NameAliases { reader: ByteReader::at(section, self.offset as usize), remaining: self.count }
	}

	fn read(reader: &mut ByteReader<'_>) -> Result<Self> {
		let count = reader.read_u8()?;
		let offset = reader.position() as u32;
		for _ in 0..count {
			read_alias(reader)?;
		}
		Ok(Self { offset, count })
	}
}

fn read_alias(reader: &mut ByteReader<'_>) -> Result<NameAliasRef> {
	let kind = NameAliasKind::from_idx(reader.read_u8()? as usize).ok_or(Error::CorruptData("unknown name alias kind"))?;
	let name = read_string(reader, StringOrigin::Ucd)?;
	Ok(NameAliasRef { kind, name })
}

/// Iterator over the aliases of a [`NameAliasList`].
#[derive(Clone, Debug)]
pub struct NameAliases<'a> {
	reader:    ByteReader<'a>,
	remaining: u8,
}

impl Iterator for NameAliases<'_> {
	type Item = NameAliasRef;

	fn next(&mut self) -> Option<NameAliasRef> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;
		read_alias(&mut self.reader).ok()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining as usize, Some(self.remaining as usize))
	}
}

/// Radical/stroke entries stored in a Unihan record.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RadicalStrokeList {
	offset: u32,
	count:  u8,
}

impl RadicalStrokeList {
	pub fn len(&self) -> usize {
		self.count as usize
	}

	pub fn is_empty(&self) -> bool {
		self.count == 0
	}

	pub fn iter<'a>(&self, section: &'a [u8]) -> impl Iterator<Item = RadicalStrokeCount> + 'a {
		let start = self.offset as usize;
		section.get(start..start + self.len() * 2)
			.unwrap_or_default()
			.chunks_exact(2)
			.filter_map(|pair| RadicalStrokeCount::from_bytes(pair[0], pair[1]).ok())
	}
}

//==============================================================

fn read_string(reader: &mut ByteReader<'_>, origin: StringOrigin) -> Result<PackedStringRef> {
	let (offset, len) = reader.read_str_span()?;
	let offset = u32::try_from(offset).map_err(|_| Error::CorruptData("string offset too large"))?;
	Ok(PackedStringRef::new_static(origin, offset, len))
}

fn read_optional_string(reader: &mut ByteReader<'_>, present: bool, origin: StringOrigin) -> Result<PackedStringRef> {
	if present {
		read_string(reader, origin)
	} else {
		Ok(PackedStringRef::EMPTY)
	}
}

fn read_optional_code_point(reader: &mut ByteReader<'_>, present: bool) -> Result<Option<u32>> {
	if present {
		reader.read_code_point().map(Some)
	} else {
		Ok(None)
	}
}

/// A decoded character record, absent fields hold their default value.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CharacterRecord {
	pub fields:             UcdFields,
	pub range:              CodePointRange,
	/// Explicit name, [`PackedStringRef::EMPTY`] when the record has none.
	pub name:               PackedStringRef,
	pub aliases:            NameAliasList,
	pub category:           Category,
	pub combining_class:    CanonicalCombiningClass,
	pub bidi_class:         Option<BidirectionalClass>,
	pub decomposition_type: DecompositionType,
	pub decomposition:      CodePointList,
	pub numeric_value:      Option<Rational>,
	pub old_name:           PackedStringRef,
	pub upper_case:         Option<u32>,
	pub lower_case:         Option<u32>,
	pub title_case:         Option<u32>,
	pub contributory:       ContributoryProperties,
	pub core:               CoreProperties,
	pub emoji:              EmojiProperties,
	pub cross_references:   CodePointList,
}

impl CharacterRecord {
	/// Record used for code points that are not covered by any stored record.
	pub fn unassigned(code_point: u32) -> Self {
		Self {
			fields:             UcdFields::none(),
			range:              CodePointRange::single(code_point),
			name:               PackedStringRef::EMPTY,
			aliases:            NameAliasList::default(),
			category:           Category::Unassigned,
			combining_class:    CanonicalCombiningClass::NOT_REORDERED,
			bidi_class:         None,
			decomposition_type: DecompositionType::Canonical,
			decomposition:      CodePointList::default(),
			numeric_value:      None,
			old_name:           PackedStringRef::EMPTY,
			upper_case:         None,
			lower_case:         None,
			title_case:         None,
			contributory:       ContributoryProperties::none(),
			core:               CoreProperties::none(),
			emoji:              EmojiProperties::none(),
			cross_references:   CodePointList::default(),
		}
	}

	pub fn numeric_type(&self) -> NumericType {
		self.fields.numeric_type()
	}

	pub fn is_mirrored(&self) -> bool {
		self.fields.contains(UcdFields::BidirectionalMirrored)
	}

	/// Decode a record, string and list offsets are relative to the data of the reader.
	pub fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
		let fields = UcdFields::from_bits(reader.read_u24()?);
		if !fields.is_valid() {
			return Err(Error::CorruptData("unknown character record flags"));
		}

		let first = reader.read_code_point()?;
		let range = if fields.contains(UcdFields::CodePointRange) {
			let last = reader.read_code_point()?;
			if last <= first {
				return Err(Error::CorruptData("record range is empty or reversed"));
			}
			CodePointRange::new(first, last)
		} else {
			CodePointRange::single(first)
		};

		if fields.contains(UcdFields::Name) && !range.is_single() {
			return Err(Error::CorruptData("named record covers a range"));
		}
		let name = read_optional_string(reader, fields.contains(UcdFields::Name), StringOrigin::Ucd)?;

		let aliases = if fields.contains(UcdFields::NameAliases) {
			NameAliasList::read(reader)?
		} else {
			NameAliasList::default()
		};

		let category = if fields.contains(UcdFields::Category) {
			Category::from_idx(reader.read_u8()? as usize).ok_or(Error::CorruptData("unknown category"))?
		} else {
			Category::Unassigned
		};

		let combining_class = if fields.contains(UcdFields::CanonicalCombiningClass) {
			CanonicalCombiningClass(reader.read_u8()?)
		} else {
			CanonicalCombiningClass::NOT_REORDERED
		};

		let bidi_class = if fields.contains(UcdFields::BidirectionalClass) {
			Some(BidirectionalClass::from_idx(reader.read_u8()? as usize).ok_or(Error::CorruptData("unknown bidirectional class"))?)
		} else {
			None
		};

		let (decomposition_type, decomposition) = if fields.contains(UcdFields::Decomposition) {
			let ty = DecompositionType::from_idx(reader.read_u8()? as usize).ok_or(Error::CorruptData("unknown decomposition type"))?;
			(ty, CodePointList::read(reader)?)
		} else {
			(DecompositionType::Canonical, CodePointList::default())
		};

		let numeric_value = if fields.numeric_type() != NumericType::None {
			let numerator = reader.read_var_i64()?;
			let denominator = reader.read_var_u16()?;
			if denominator == 0 {
				return Err(Error::CorruptData("zero denominator"));
			}
			Some(Rational::new(numerator, denominator))
		} else {
			None
		};

		let old_name = read_optional_string(reader, fields.contains(UcdFields::OldName), StringOrigin::Ucd)?;
		let upper_case = read_optional_code_point(reader, fields.contains(UcdFields::SimpleUpperCaseMapping))?;
		let lower_case = read_optional_code_point(reader, fields.contains(UcdFields::SimpleLowerCaseMapping))?;
		let title_case = read_optional_code_point(reader, fields.contains(UcdFields::SimpleTitleCaseMapping))?;

		let contributory = if fields.contains(UcdFields::ContributoryProperties) {
			let props = ContributoryProperties::from_bits(reader.read_var_u64()?);
			if !props.is_valid() {
				return Err(Error::CorruptData("unknown contributory property bits"));
			}
			props
		} else {
			ContributoryProperties::none()
		};

		let (core, emoji) = if fields.contains(UcdFields::CoreProperties) {
			crate::codec::unpack_property_word(reader.read_property_word()?)?
		} else {
			(CoreProperties::none(), EmojiProperties::none())
		};

		let cross_references = if fields.contains(UcdFields::CrossReferences) {
			CodePointList::read(reader)?
		} else {
			CodePointList::default()
		};

		Ok(Self {
			fields,
			range,
			name,
			aliases,
			category,
			combining_class,
			bidi_class,
			decomposition_type,
			decomposition,
			numeric_value,
			old_name,
			upper_case,
			lower_case,
			title_case,
			contributory,
			core,
			emoji,
			cross_references,
		})
	}
}

/// A decoded Unihan record.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UnihanRecord {
	pub fields:          UnihanFields,
	/// Packed code point, see [`crate::packer`].
	pub packed:          u32,
	pub code_point:      u32,
	pub numeric_value:   Option<u64>,
	pub radical_strokes: RadicalStrokeList,
	/// Strings in the order of [`UnihanFields::STRINGS`], [`PackedStringRef::EMPTY`] when absent.
	pub strings:         [PackedStringRef; 10],
}

impl UnihanRecord {
	pub fn numeric_type(&self) -> UnihanNumericType {
		self.fields.numeric_type()
	}

	/// Get a string field.
	pub fn string(&self, field: UnihanFields) -> PackedStringRef {
		UnihanFields::STRINGS.iter()
			.position(|&string_field| string_field == field)
			.map_or(PackedStringRef::EMPTY, |idx| self.strings[idx])
	}

	pub fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
		let fields = UnihanFields::from_bits(reader.read_u16()?);
		if !fields.is_valid() {
			return Err(Error::CorruptData("unknown Unihan record flags"));
		}

		let packed = reader.read_encoded_value()?;
		let code_point = crate::packer::unpack(packed)?;

		let numeric_value = if fields.numeric_type() != UnihanNumericType::None {
			Some(reader.read_var_u64()?)
		} else {
			None
		};

		let radical_strokes = match fields.radical_stroke_cardinality() {
			0 => RadicalStrokeList::default(),
			cardinality => {
				let count = if cardinality == 3 {
					let count = reader.read_u8()?;
					if count < 3 {
						return Err(Error::CorruptData("radical/stroke overflow count below 3"));
					}
					count
				} else {
					cardinality
				};
				let offset = reader.position() as u32;
				for _ in 0..count {
					let radical = reader.read_u8()?;
					let strokes = reader.read_u8()?;
					RadicalStrokeCount::from_bytes(radical, strokes)?;
				}
				RadicalStrokeList { offset, count }
			},
		};

		let mut strings = [PackedStringRef::EMPTY; 10];
		for (string, field) in strings.iter_mut().zip(UnihanFields::STRINGS) {
			*string = read_optional_string(reader, fields.contains(field), StringOrigin::Unihan)?;
		}

		Ok(Self { fields, packed, code_point, numeric_value, radical_strokes, strings })
	}
}
