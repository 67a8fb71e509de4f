use core::ops::Range;
use std::borrow::Cow;

use once_cell::sync::OnceCell;
use unidb_logging::{LogCategory, log_info};

use crate::{
	codec::ByteReader,
	names,
	packer,
	range::{RangeIndex, RangeKeyed},
	record::{CharacterRecord, CodePoints, RadicalStrokeCount, UnihanFields, UnihanRecord},
	Error, Result, MAGIC, FORMAT_VERSION, RADICAL_COUNT,
	BlockInfo, CjkRadicalInfo, CodePointRange, PackedStr, PackedStringRef, StringBuffers, UnicodeBlock, UnicodeVersion,
	Category, CanonicalCombiningClass, BidirectionalClass, DecompositionType, NumericType, Rational, NameAliasKind,
	ContributoryProperties, CoreProperties, EmojiProperties, IndicConjunctBreak, UnihanNumericType,
	validate_code_point,
};

const LOG_CAT : LogCategory = LogCategory::new("Unicode Database");

static GLOBAL : OnceCell<UnicodeDatabase> = OnceCell::new();

/// Size of the magic, format version and unicode version.
pub const HEADER_SIZE : usize = 8;

#[derive(Clone, Copy, Debug)]
struct UcdEntry {
	range:    CodePointRange,
	offset:   u32,
	category: Category,
}

impl RangeKeyed for UcdEntry {
	fn range(&self) -> CodePointRange {
		self.range
	}
}

#[derive(Clone, Copy, Debug)]
struct UnihanEntry {
	packed: u32,
	offset: u32,
}

/// Read-only Unicode character database.
///
/// All data stays in the original byte buffer, the database only keeps small indices into it. The buffer is fully
/// validated when the database is created, so queries can only fail because of invalid input.
pub struct UnicodeDatabase {
	data:     Cow<'static, [u8]>,
	version:  UnicodeVersion,
	ucd:      Range<usize>,
	blocks:   Range<usize>,
	unihan:   Range<usize>,
	records:  RangeIndex<UcdEntry>,
	block_index: RangeIndex<UnicodeBlock>,
	radicals: Vec<CjkRadicalInfo>,
	unihan_index: Vec<UnihanEntry>,
}

impl UnicodeDatabase {
	/// Load a database, this can be an embedded static buffer or an owned buffer read from a file.
	pub fn new(data: impl Into<Cow<'static, [u8]>>) -> Result<Self> {
		let data = data.into();
		let mut reader = ByteReader::new(&data);

		if reader.read_bytes(MAGIC.len())? != MAGIC {
			return Err(Error::CorruptData("invalid magic"));
		}
		if reader.read_u8()? != FORMAT_VERSION {
			return Err(Error::CorruptData("unsupported format version"));
		}
		let version = UnicodeVersion::new(reader.read_u16()?, reader.read_u8()?, reader.read_u8()?);

		// Character records
		let count = reader.read_encoded_value()? as usize;
		let ucd_start = reader.position();
		let mut section = ByteReader::new(&data[ucd_start..]);
		let mut entries = Vec::with_capacity(count);
		for _ in 0..count {
			let offset = section.position() as u32;
			let record = CharacterRecord::decode(&mut section)?;
			entries.push(UcdEntry { range: record.range, offset, category: record.category });
		}
		let records = RangeIndex::from_sorted(entries).map_err(|_| Error::CorruptData("character records are not sorted"))?;
		let ucd = ucd_start..ucd_start + section.position();

		// Blocks
		let mut reader = ByteReader::at(&data, ucd.end);
		let count = reader.read_u16()? as usize;
		let blocks_start = reader.position();
		let mut section = ByteReader::new(&data[blocks_start..]);
		let mut blocks = Vec::with_capacity(count);
		for _ in 0..count {
			blocks.push(UnicodeBlock::decode(&mut section)?);
		}
		let block_index = RangeIndex::from_sorted(blocks).map_err(|_| Error::CorruptData("blocks are not sorted"))?;
		let blocks = blocks_start..blocks_start + section.position();

		// Radicals
		let mut reader = ByteReader::at(&data, blocks.end);
		if reader.read_u8()? != RADICAL_COUNT {
			return Err(Error::CorruptData("unexpected radical count"));
		}
		let mut radicals = Vec::with_capacity(RADICAL_COUNT as usize);
		for index in 1..=RADICAL_COUNT {
			radicals.push(CjkRadicalInfo::decode(&mut reader, index)?);
		}

		// Unihan records
		let count = reader.read_encoded_value()? as usize;
		let unihan_start = reader.position();
		let mut section = ByteReader::new(&data[unihan_start..]);
		let mut unihan_index = Vec::<UnihanEntry>::with_capacity(count);
		for _ in 0..count {
			let offset = section.position() as u32;
			let record = UnihanRecord::decode(&mut section)?;
			if unihan_index.last().map_or(false, |last| last.packed >= record.packed) {
				return Err(Error::CorruptData("Unihan records are not sorted"));
			}
			unihan_index.push(UnihanEntry { packed: record.packed, offset });
		}
		let unihan = unihan_start..unihan_start + section.position();

		if unihan.end != data.len() {
			return Err(Error::CorruptData("trailing data"));
		}

		log_info!(LOG_CAT, "Loaded unicode {} database: {} character records, {} blocks, {} Unihan records",
			version, records.len(), block_index.len(), unihan_index.len());

		Ok(Self { data, version, ucd, blocks, unihan, records, block_index, radicals, unihan_index })
	}

	/// Install a database as the process-wide database.
	///
	/// Returns the database back when one was already installed.
	pub fn install_global(database: UnicodeDatabase) -> core::result::Result<&'static UnicodeDatabase, UnicodeDatabase> {
		GLOBAL.try_insert(database).map_err(|(_, database)| database)
	}

	/// Get the process-wide database, if one was installed.
	pub fn global() -> Option<&'static UnicodeDatabase> {
		GLOBAL.get()
	}

	/// Raw bytes of the database.
	pub fn bytes(&self) -> &[u8] {
		&self.data
	}

	/// Version of the Unicode standard the database was built from.
	pub fn unicode_version(&self) -> UnicodeVersion {
		self.version
	}

	pub fn string_buffers(&self) -> StringBuffers<'_> {
		StringBuffers {
			ucd: &self.data[self.ucd.clone()],
			unihan: &self.data[self.unihan.clone()],
			blocks: &self.data[self.blocks.clone()],
		}
	}

	/// Resolve a string reference.
	pub fn string(&self, string: PackedStringRef) -> PackedStr<'_> {
		PackedStr::new(string, &self.string_buffers())
	}

	fn ucd_section(&self) -> &[u8] {
		&self.data[self.ucd.clone()]
	}

	fn unihan_section(&self) -> &[u8] {
		&self.data[self.unihan.clone()]
	}

	fn decode_record(&self, offset: u32) -> Result<CharacterRecord> {
		CharacterRecord::decode(&mut ByteReader::at(self.ucd_section(), offset as usize))
	}

	/// Number of character records, a record may cover a range of code points.
	pub fn record_count(&self) -> usize {
		self.records.len()
	}

	/// Number of leading records that can be indexed directly by code point.
	pub fn max_contiguous_index(&self) -> usize {
		self.records.max_contiguous_index()
	}

	/// Look up the record of a code point.
	///
	/// Returns `Ok(None)` when no record covers the code point.
	pub fn lookup(&self, code_point: u32) -> Result<Option<CharacterInfo<'_>>> {
		validate_code_point(code_point)?;
		match self.records.get(code_point) {
			Some(entry) => Ok(Some(CharacterInfo { db: self, code_point, record: self.decode_record(entry.offset)? })),
			None => Ok(None),
		}
	}

	/// Get the info of a code point, code points without a record are reported as unassigned.
	pub fn char_info(&self, code_point: u32) -> Result<CharacterInfo<'_>> {
		Ok(match self.lookup(code_point)? {
			Some(info) => info,
			None => CharacterInfo { db: self, code_point, record: CharacterRecord::unassigned(code_point) },
		})
	}

	/// Get the general category of a code point, without decoding its record.
	pub fn category(&self, code_point: u32) -> Result<Category> {
		validate_code_point(code_point)?;
		Ok(self.records.get(code_point).map_or(Category::Unassigned, |entry| entry.category))
	}

	/// Get the name of a code point, generated names are resolved transparently.
	pub fn name(&self, code_point: u32) -> Result<Option<PackedStr<'_>>> {
		Ok(self.lookup(code_point)?.and_then(|info| info.name()))
	}

	/// Iterate over all character records, the code point of each info is the first code point of its record.
	pub fn characters(&self) -> impl Iterator<Item = CharacterInfo<'_>> + '_ {
		self.records.iter().filter_map(move |entry| {
			let record = self.decode_record(entry.offset).ok()?;
			Some(CharacterInfo { db: self, code_point: entry.range.first, record })
		})
	}

	//--------------------------------------------------------------

	/// Get the block a code point is in.
	pub fn block(&self, code_point: u32) -> Result<Option<BlockInfo<'_>>> {
		validate_code_point(code_point)?;
		Ok(self.block_index.get(code_point).map(|block| self.block_info(block)))
	}

	/// Get the name of the block a code point is in, `"No_Block"` when it is not in any block.
	pub fn block_name(&self, code_point: u32) -> Result<PackedStr<'_>> {
		Ok(match self.block(code_point)? {
			Some(block) => block.name,
			None => self.string(PackedStringRef::NO_BLOCK),
		})
	}

	pub fn blocks(&self) -> impl ExactSizeIterator<Item = BlockInfo<'_>> + '_ {
		self.block_index.iter().map(move |block| self.block_info(block))
	}

	fn block_info(&self, block: &UnicodeBlock) -> BlockInfo<'_> {
		BlockInfo { range: block.range, name: self.string(block.name) }
	}

	//--------------------------------------------------------------

	/// Get info about a CJK radical, `index` is the radical number in `1..=214`.
	pub fn radical_info(&self, index: u32) -> Result<CjkRadicalInfo> {
		let idx = CjkRadicalInfo::table_index(index)?;
		self.radicals.get(idx).copied().ok_or(Error::RadicalIndexOutOfRange(index))
	}

	pub fn radicals(&self) -> impl ExactSizeIterator<Item = &CjkRadicalInfo> {
		self.radicals.iter()
	}

	//--------------------------------------------------------------

	/// Get the Unihan data of an ideograph.
	///
	/// Returns `Ok(None)` for code points outside the CJK ideograph ranges and for ideographs without Unihan data.
	pub fn unihan(&self, code_point: u32) -> Result<Option<UnihanInfo<'_>>> {
		validate_code_point(code_point)?;
		let packed = match packer::pack(code_point) {
			Ok(packed) => packed,
			Err(_) => return Ok(None),
		};
		match self.unihan_index.binary_search_by_key(&packed, |entry| entry.packed) {
			Ok(idx) => self.decode_unihan(self.unihan_index[idx].offset).map(Some),
			Err(_) => Ok(None),
		}
	}

	/// Number of ideographs with Unihan data.
	pub fn unihan_count(&self) -> usize {
		self.unihan_index.len()
	}

	/// Iterate over all Unihan records, in packed order.
	pub fn unihan_characters(&self) -> impl Iterator<Item = UnihanInfo<'_>> + '_ {
		self.unihan_index.iter().filter_map(move |entry| self.decode_unihan(entry.offset).ok())
	}

	fn decode_unihan(&self, offset: u32) -> Result<UnihanInfo<'_>> {
		let record = UnihanRecord::decode(&mut ByteReader::at(self.unihan_section(), offset as usize))?;
		Ok(UnihanInfo { db: self, record })
	}
}

//==============================================================

/// A formal name alias of a character.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NameAlias<'a> {
	pub kind: NameAliasKind,
	pub name: PackedStr<'a>,
}

/// Info about a code point.
#[derive(Clone, Copy)]
pub struct CharacterInfo<'a> {
	db:         &'a UnicodeDatabase,
	code_point: u32,
	record:     CharacterRecord,
}

impl<'a> CharacterInfo<'a> {
	/// Code point the info was queried for.
	pub fn code_point(&self) -> u32 {
		self.code_point
	}

	/// Range of the record the code point belongs to.
	pub fn range(&self) -> CodePointRange {
		self.record.range
	}

	pub fn record(&self) -> &CharacterRecord {
		&self.record
	}

	/// Get the name, generating it for Hangul syllables and sequence named ideographs.
	pub fn name(&self) -> Option<PackedStr<'a>> {
		if !self.record.name.is_empty() {
			return Some(self.db.string(self.record.name));
		}
		if self.record.category == Category::Unassigned {
			return None;
		}
		if names::HANGUL_SYLLABLES.contains(self.code_point) {
			return PackedStringRef::hangul_syllable(self.code_point).ok().map(|string| self.db.string(string));
		}
		PackedStringRef::cjk_sequence(self.code_point).map(|string| self.db.string(string))
	}

	pub fn aliases(&self) -> impl Iterator<Item = NameAlias<'a>> + 'a {
		let db = self.db;
		self.record.aliases.iter(db.ucd_section()).map(move |alias| NameAlias { kind: alias.kind, name: db.string(alias.name) })
	}

	pub fn category(&self) -> Category {
		self.record.category
	}

	pub fn combining_class(&self) -> CanonicalCombiningClass {
		self.record.combining_class
	}

	pub fn bidi_class(&self) -> Option<BidirectionalClass> {
		self.record.bidi_class
	}

	pub fn decomposition_type(&self) -> DecompositionType {
		self.record.decomposition_type
	}

	/// Decomposition mapping, empty when the character doesn't decompose.
	pub fn decomposition(&self) -> CodePoints<'a> {
		self.record.decomposition.iter(self.db.ucd_section())
	}

	pub fn numeric_type(&self) -> NumericType {
		self.record.numeric_type()
	}

	pub fn numeric_value(&self) -> Option<Rational> {
		self.record.numeric_value
	}

	pub fn is_mirrored(&self) -> bool {
		self.record.is_mirrored()
	}

	/// Unicode 1.0 name.
	pub fn old_name(&self) -> Option<PackedStr<'a>> {
		(!self.record.old_name.is_empty()).then(|| self.db.string(self.record.old_name))
	}

	pub fn simple_uppercase(&self) -> Option<u32> {
		self.record.upper_case
	}

	pub fn simple_lowercase(&self) -> Option<u32> {
		self.record.lower_case
	}

	pub fn simple_titlecase(&self) -> Option<u32> {
		self.record.title_case
	}

	pub fn contributory_properties(&self) -> ContributoryProperties {
		self.record.contributory
	}

	pub fn core_properties(&self) -> CoreProperties {
		self.record.core
	}

	pub fn emoji_properties(&self) -> EmojiProperties {
		self.record.emoji
	}

	pub fn indic_conjunct_break(&self) -> IndicConjunctBreak {
		self.record.core.indic_conjunct_break()
	}

	/// Related characters listed in `NamesList.txt`.
	pub fn cross_references(&self) -> CodePoints<'a> {
		self.record.cross_references.iter(self.db.ucd_section())
	}

	pub fn block(&self) -> Option<BlockInfo<'a>> {
		self.db.block_index.get(self.code_point).map(|block| self.db.block_info(block))
	}
}

impl core::fmt::Debug for CharacterInfo<'_> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("CharacterInfo")
			.field("code_point", &format_args!("U+{:04X}", self.code_point))
			.field("name", &self.name())
			.field("category", &self.record.category)
			.finish_non_exhaustive()
	}
}

/// Unihan data of an ideograph.
#[derive(Clone, Copy)]
pub struct UnihanInfo<'a> {
	db:     &'a UnicodeDatabase,
	record: UnihanRecord,
}

impl<'a> UnihanInfo<'a> {
	pub fn code_point(&self) -> u32 {
		self.record.code_point
	}

	pub fn record(&self) -> &UnihanRecord {
		&self.record
	}

	/// Which numeric property holds [`UnihanInfo::numeric_value`].
	pub fn numeric_type(&self) -> UnihanNumericType {
		self.record.numeric_type()
	}

	pub fn numeric_value(&self) -> Option<u64> {
		self.record.numeric_value
	}

	pub fn radical_stroke_counts(&self) -> impl Iterator<Item = RadicalStrokeCount> + 'a {
		self.record.radical_strokes.iter(self.db.unihan_section())
	}

	fn string(&self, field: UnihanFields) -> Option<PackedStr<'a>> {
		let string = self.record.string(field);
		(!string.is_empty()).then(|| self.db.string(string))
	}

	pub fn definition(&self) -> Option<PackedStr<'a>> {
		self.string(UnihanFields::Definition)
	}

	pub fn mandarin(&self) -> Option<PackedStr<'a>> {
		self.string(UnihanFields::MandarinReading)
	}

	pub fn cantonese(&self) -> Option<PackedStr<'a>> {
		self.string(UnihanFields::CantoneseReading)
	}

	pub fn japanese_kun(&self) -> Option<PackedStr<'a>> {
		self.string(UnihanFields::JapaneseKunReading)
	}

	pub fn japanese_on(&self) -> Option<PackedStr<'a>> {
		self.string(UnihanFields::JapaneseOnReading)
	}

	pub fn korean(&self) -> Option<PackedStr<'a>> {
		self.string(UnihanFields::KoreanReading)
	}

	pub fn hangul(&self) -> Option<PackedStr<'a>> {
		self.string(UnihanFields::HangulReading)
	}

	pub fn vietnamese(&self) -> Option<PackedStr<'a>> {
		self.string(UnihanFields::VietnameseReading)
	}

	pub fn simplified_variant(&self) -> Option<PackedStr<'a>> {
		self.string(UnihanFields::SimplifiedVariant)
	}

	pub fn traditional_variant(&self) -> Option<PackedStr<'a>> {
		self.string(UnihanFields::TraditionalVariant)
	}
}

impl core::fmt::Debug for UnihanInfo<'_> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("UnihanInfo")
			.field("code_point", &format_args!("U+{:04X}", self.record.code_point))
			.field("definition", &self.definition())
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{codec::*, record::UcdFields};

	fn minimal_database() -> Vec<u8> {
		let mut buf = Vec::new();
		buf.extend_from_slice(&MAGIC);
		buf.push(FORMAT_VERSION);
		write_u16(&mut buf, 15);
		buf.extend_from_slice(&[1, 0]);

		write_code_point(&mut buf, 3);
		write_u24(&mut buf, (UcdFields::Name | UcdFields::Category).bits());
		write_code_point(&mut buf, 0);
		write_str(&mut buf, "NULL");
		buf.push(Category::Control as u8);
		write_u24(&mut buf, UcdFields::Category.bits());
		write_code_point(&mut buf, 1);
		buf.push(Category::Control as u8);
		write_u24(&mut buf, (UcdFields::CodePointRange | UcdFields::Category).bits());
		write_code_point(&mut buf, 0xAC00);
		write_code_point(&mut buf, 0xD7A3);
		buf.push(Category::OtherLetter as u8);

		write_u16(&mut buf, 1);
		write_code_point(&mut buf, 0xAC00);
		write_code_point(&mut buf, 0xD7AF);
		write_str(&mut buf, "Hangul Syllables");

		buf.push(RADICAL_COUNT);
		for idx in 0..RADICAL_COUNT as u16 {
			write_u16(&mut buf, 0x2F00 + idx);
			write_u16(&mut buf, 0x4E00 + idx);
		}

		write_code_point(&mut buf, 0);
		buf
	}

	#[test]
	pub fn load_and_query() {
		let db = UnicodeDatabase::new(minimal_database()).unwrap();
		assert_eq!(db.unicode_version(), UnicodeVersion::new(15, 1, 0));
		assert_eq!(db.record_count(), 3);
		assert_eq!(db.max_contiguous_index(), 2);

		assert_eq!(db.name(0).unwrap().and_then(|name| name.as_str()), Some("NULL"));
		assert_eq!(db.name(1).unwrap(), None);
		assert_eq!(db.name(0xD4DB).unwrap().map(|name| name.to_string()), Some("HANGUL SYLLABLE PWILH".to_string()));
		assert_eq!(db.category(0xD311), Ok(Category::OtherLetter));
		assert_eq!(db.category(2), Ok(Category::Unassigned));
		assert!(db.lookup(2).unwrap().is_none());
		assert_eq!(db.char_info(2).unwrap().category(), Category::Unassigned);
		assert_eq!(db.category(0x110000), Err(Error::CodePointOutOfRange(0x110000)));

		assert_eq!(db.block_name(0xD311).unwrap().as_str(), Some("Hangul Syllables"));
		assert_eq!(db.block_name(0x41).unwrap().as_str(), Some("No_Block"));
		assert_eq!(db.blocks().count(), 1);

		assert_eq!(db.radical_info(214).unwrap().traditional.character, 0x4E00 + 213);
		assert_eq!(db.radical_info(0), Err(Error::RadicalIndexOutOfRange(0)));
		assert_eq!(db.radicals().len(), 214);

		assert!(db.unihan(0x4E00).unwrap().is_none());
		assert_eq!(db.characters().map(|info| info.code_point()).collect::<Vec<_>>(), [0, 1, 0xAC00]);
	}

	#[test]
	pub fn reject_corrupt_data() {
		let data = minimal_database();

		let mut bad_magic = data.clone();
		bad_magic[0] = b'X';
		assert_eq!(UnicodeDatabase::new(bad_magic).err(), Some(Error::CorruptData("invalid magic")));

		let mut bad_version = data.clone();
		bad_version[3] = FORMAT_VERSION + 1;
		assert!(UnicodeDatabase::new(bad_version).is_err());

		for len in [0, HEADER_SIZE, data.len() / 2, data.len() - 1] {
			assert!(UnicodeDatabase::new(data[..len].to_vec()).is_err(), "truncated to {len}");
		}

		let mut trailing = data.clone();
		trailing.push(0);
		assert_eq!(UnicodeDatabase::new(trailing).err(), Some(Error::CorruptData("trailing data")));
	}
}
