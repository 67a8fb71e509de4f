//! Encoding of the builder tables into the database format.

use unidb_info::{
	codec::{self, MAX_ENCODED_VALUE},
	record::{UcdFields, UnihanFields},
	CjkRadicalInfo, NumericType, UnicodeVersion, UnihanNumericType,
	FORMAT_VERSION, HAS_SIMPLIFIED_FLAG, MAGIC, RADICAL_COUNT,
};

use crate::{
	table::{BlockEntry, CharacterEntry, UnihanEntry},
	BuildError, Result,
};

fn write_string(buf: &mut Vec<u8>, s: &str, what: &'static str) -> Result<()> {
	if s.len() > u16::MAX as usize {
		return Err(BuildError::TooLarge(what));
	}
	codec::write_str(buf, s);
	Ok(())
}

fn write_count(buf: &mut Vec<u8>, count: usize, what: &'static str) -> Result<()> {
	let count = u8::try_from(count).map_err(|_| BuildError::TooLarge(what))?;
	buf.push(count);
	Ok(())
}

fn write_code_points(buf: &mut Vec<u8>, code_points: &[u32], what: &'static str) -> Result<()> {
	write_count(buf, code_points.len(), what)?;
	for &cp in code_points {
		codec::write_code_point(buf, cp);
	}
	Ok(())
}

pub fn write_header(buf: &mut Vec<u8>, version: UnicodeVersion) {
	buf.extend_from_slice(&MAGIC);
	buf.push(FORMAT_VERSION);
	codec::write_u16(buf, version.major);
	buf.push(version.minor);
	buf.push(version.patch);
}

/// Fields a character record will be written with.
pub fn character_fields(entry: &CharacterEntry) -> UcdFields {
	let mut fields = UcdFields::none();
	fields.set(UcdFields::CodePointRange, !entry.range.is_single());
	fields.set(UcdFields::Name, entry.name.is_some() && entry.range.is_single());
	fields.set(UcdFields::NameAliases, !entry.aliases.is_empty());
	fields.set(UcdFields::Category, entry.category.is_some());
	fields.set(UcdFields::CanonicalCombiningClass, entry.combining_class.is_some());
	fields.set(UcdFields::BidirectionalClass, entry.bidi_class.is_some());
	fields.set(UcdFields::Decomposition, entry.decomposition.is_some());
	fields.set(UcdFields::BidirectionalMirrored, entry.mirrored);
	fields.set(UcdFields::OldName, entry.old_name.is_some());
	fields.set(UcdFields::SimpleUpperCaseMapping, entry.upper_case.is_some());
	fields.set(UcdFields::SimpleLowerCaseMapping, entry.lower_case.is_some());
	fields.set(UcdFields::SimpleTitleCaseMapping, entry.title_case.is_some());
	fields.set(UcdFields::ContributoryProperties, !entry.contributory.is_none());
	fields.set(UcdFields::CoreProperties, codec::pack_property_word(entry.core, entry.emoji) != 0);
	fields.set(UcdFields::CrossReferences, !entry.cross_references.is_empty());
	fields.with_numeric_type(entry.numeric.map_or(NumericType::None, |(ty, _)| ty))
}

pub fn write_character(buf: &mut Vec<u8>, entry: &CharacterEntry) -> Result<()> {
	let fields = character_fields(entry);
	codec::write_u24(buf, fields.bits());

	codec::write_code_point(buf, entry.range.first);
	if fields.contains(UcdFields::CodePointRange) {
		codec::write_code_point(buf, entry.range.last);
	}
	if let Some(name) = entry.name.as_deref().filter(|_| fields.contains(UcdFields::Name)) {
		write_string(buf, name, "character name")?;
	}
	if fields.contains(UcdFields::NameAliases) {
		write_count(buf, entry.aliases.len(), "name alias count")?;
		for (kind, alias) in &entry.aliases {
			buf.push(*kind as u8);
			write_string(buf, alias, "name alias")?;
		}
	}
	if let Some(category) = entry.category {
		buf.push(category as u8);
	}
	if let Some(combining_class) = entry.combining_class {
		buf.push(combining_class.0);
	}
	if let Some(bidi_class) = entry.bidi_class {
		buf.push(bidi_class as u8);
	}
	if let Some((ty, mapping)) = &entry.decomposition {
		buf.push(*ty as u8);
		write_code_points(buf, mapping, "decomposition length")?;
	}
	if let Some((_, value)) = entry.numeric {
		codec::write_var_i64(buf, value.numerator);
		codec::write_var_u64(buf, value.denominator as u64);
	}
	if let Some(old_name) = &entry.old_name {
		write_string(buf, old_name, "unicode 1.0 name")?;
	}
	for mapping in [entry.upper_case, entry.lower_case, entry.title_case].into_iter().flatten() {
		codec::write_code_point(buf, mapping);
	}
	if fields.contains(UcdFields::ContributoryProperties) {
		codec::write_var_u64(buf, entry.contributory.bits());
	}
	if fields.contains(UcdFields::CoreProperties) {
		codec::write_property_word(buf, codec::pack_property_word(entry.core, entry.emoji));
	}
	if fields.contains(UcdFields::CrossReferences) {
		write_code_points(buf, &entry.cross_references, "cross reference count")?;
	}
	Ok(())
}

pub fn write_block(buf: &mut Vec<u8>, block: &BlockEntry) -> Result<()> {
	codec::write_code_point(buf, block.range.first);
	codec::write_code_point(buf, block.range.last);
	write_string(buf, &block.name, "block name")
}

pub fn write_radical(buf: &mut Vec<u8>, radical: &CjkRadicalInfo) -> Result<()> {
	const TOO_LARGE : BuildError = BuildError::TooLarge("radical code point");

	let traditional = u16::try_from(radical.traditional.radical).ok()
		.filter(|&cp| cp & HAS_SIMPLIFIED_FLAG == 0)
		.ok_or(TOO_LARGE)?;
	let flag = if radical.simplified.is_some() { HAS_SIMPLIFIED_FLAG } else { 0 };
	codec::write_u16(buf, traditional | flag);
	codec::write_u16(buf, u16::try_from(radical.traditional.character).map_err(|_| TOO_LARGE)?);

	if let Some(simplified) = radical.simplified {
		codec::write_u16(buf, u16::try_from(simplified.radical).map_err(|_| TOO_LARGE)?);
		codec::write_u16(buf, u16::try_from(simplified.character).map_err(|_| TOO_LARGE)?);
	}
	Ok(())
}

/// Fields a Unihan record will be written with.
pub fn unihan_fields(entry: &UnihanEntry) -> UnihanFields {
	let mut fields = UnihanFields::none();
	for (field, string) in UnihanFields::STRINGS.into_iter().zip(&entry.strings) {
		fields.set(field, string.is_some());
	}
	fields
		.with_numeric_type(entry.numeric.map_or(UnihanNumericType::None, |(ty, _)| ty))
		.with_radical_stroke_cardinality(entry.radical_strokes.len())
}

pub fn write_unihan(buf: &mut Vec<u8>, entry: &UnihanEntry) -> Result<()> {
	let fields = unihan_fields(entry);
	codec::write_u16(buf, fields.bits());
	codec::write_code_point(buf, entry.packed);

	if let Some((_, value)) = entry.numeric {
		codec::write_var_u64(buf, value);
	}
	if fields.radical_stroke_cardinality() == 3 {
		write_count(buf, entry.radical_strokes.len(), "radical/stroke count")?;
	}
	for rs in &entry.radical_strokes {
		buf.push(rs.radical);
		buf.push(rs.stroke_byte());
	}
	for string in entry.strings.iter().flatten() {
		write_string(buf, string, "Unihan string")?;
	}
	Ok(())
}

/// Tables that make up a database.
pub struct Tables<'a> {
	pub version:    UnicodeVersion,
	pub characters: &'a [CharacterEntry],
	pub blocks:     &'a [BlockEntry],
	pub radicals:   &'a [CjkRadicalInfo],
	pub unihan:     &'a [UnihanEntry],
}

/// Write a complete database.
pub fn write_database(buf: &mut Vec<u8>, tables: &Tables<'_>) -> Result<()> {
	write_header(buf, tables.version);

	if tables.characters.len() > MAX_ENCODED_VALUE as usize {
		return Err(BuildError::TooLarge("character record count"));
	}
	codec::write_code_point(buf, tables.characters.len() as u32);
	for entry in tables.characters {
		write_character(buf, entry)?;
	}

	let block_count = u16::try_from(tables.blocks.len()).map_err(|_| BuildError::TooLarge("block count"))?;
	codec::write_u16(buf, block_count);
	for block in tables.blocks {
		write_block(buf, block)?;
	}

	buf.push(RADICAL_COUNT);
	for index in 1..=RADICAL_COUNT {
		let radical = tables.radicals.get(index as usize - 1).ok_or(BuildError::MissingRadical(index))?;
		write_radical(buf, radical)?;
	}

	if tables.unihan.len() > MAX_ENCODED_VALUE as usize {
		return Err(BuildError::TooLarge("Unihan record count"));
	}
	codec::write_code_point(buf, tables.unihan.len() as u32);
	for entry in tables.unihan {
		write_unihan(buf, entry)?;
	}
	Ok(())
}
