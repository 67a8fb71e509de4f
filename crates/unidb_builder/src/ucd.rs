//! Processors for the UCD and emoji data files.

use std::io::BufRead;

use unidb_base::EnumFromNameT;
use unidb_info::{
	names,
	range::{RangeIndex, RangeOverlap},
	validate_code_point,
	BidirectionalClass, CanonicalCombiningClass, Category, CjkRadicalInfo, CodePointRange, ContributoryProperties,
	CoreProperties, DecompositionType, EmojiProperties, IndicConjunctBreak, NameAliasKind, NumericType, RadicalForm,
	Rational, RADICAL_COUNT,
};
use unidb_logging::{LogCategory, log_info, log_verbose, log_warning};

use crate::{
	reader::{Delimiter, Line, LineReader},
	table::{BlockEntry, CharacterEntry, CharacterTable},
	BuildError, Result, UcdSource,
};

const LOG_CAT : LogCategory = LogCategory::new_with_sub("Builder", "UCD");

pub const UNICODE_DATA : &str = "UnicodeData.txt";
pub const PROP_LIST : &str = "PropList.txt";
pub const DERIVED_CORE_PROPERTIES : &str = "DerivedCoreProperties.txt";
pub const EMOJI_DATA : &str = "emoji/emoji-data.txt";
pub const CJK_RADICALS : &str = "CJKRadicals.txt";
pub const NAME_ALIASES : &str = "NameAliases.txt";
pub const NAMES_LIST : &str = "NamesList.txt";
pub const BLOCKS : &str = "Blocks.txt";

pub(crate) fn open<'s>(source: &'s dyn UcdSource, file: &str) -> Result<Box<dyn BufRead + 's>> {
	source.open(file).map_err(|err| BuildError::io(file, err))
}

pub(crate) fn parse_code_point(line: &Line<'_>, s: &str) -> Result<u32> {
	u32::from_str_radix(s, 16).ok()
		.and_then(|cp| validate_code_point(cp).ok())
		.ok_or_else(|| line.error(format!("invalid code point '{s}'")))
}

/// Parse `XXXX` or `XXXX..YYYY`.
pub(crate) fn parse_range(line: &Line<'_>, s: &str) -> Result<CodePointRange> {
	match s.split_once("..") {
		Some((first, last)) => {
			let first = parse_code_point(line, first.trim())?;
			let last = parse_code_point(line, last.trim())?;
			if last < first {
				return Err(line.error(format!("reversed range '{s}'")));
			}
			Ok(CodePointRange::new(first, last))
		},
		None => parse_code_point(line, s).map(CodePointRange::single),
	}
}

fn overlap_error(line: &Line<'_>, range: CodePointRange, existing: CodePointRange) -> BuildError {
	BuildError::Overlap { file: line.file().to_string(), line: line.number(), range, existing }
}

fn update(table: &mut CharacterTable, line: &Line<'_>, range: CodePointRange, f: impl FnMut(&mut CharacterEntry)) -> Result<()> {
	table.update_range(range, f).map_err(|RangeOverlap { existing }| overlap_error(line, range, table.entries()[existing].range))
}

//==============================================================

/// Read `UnicodeData.txt`, the base of every character record.
pub fn read_unicode_data(source: &dyn UcdSource, table: &mut CharacterTable) -> Result<()> {
	let mut range_start : Option<CharacterEntry> = None;
	let mut reader = LineReader::new(UNICODE_DATA, open(source, UNICODE_DATA)?, Delimiter::Semicolon);
	reader.for_each(|line| {
		if line.field_count() != 15 {
			return Err(line.error("expected 15 fields"));
		}
		let code_point = parse_code_point(line, line.required(0)?)?;
		let name = line.required(1)?;
		let mut entry = parse_unicode_data_fields(line, code_point)?;

		if name.ends_with(", First>") {
			if range_start.is_some() {
				return Err(line.error("range start without end"));
			}
			range_start = Some(entry);
			return Ok(());
		}

		if name.ends_with(", Last>") {
			let first = range_start.take().ok_or_else(|| line.error("range end without start"))?;
			if code_point <= first.range.first {
				return Err(line.error("range end before its start"));
			}
			entry = CharacterEntry { range: CodePointRange::new(first.range.first, code_point), ..first };
		} else {
			if range_start.is_some() {
				return Err(line.error("range start without end"));
			}
			entry.name = explicit_name(code_point, name);
		}

		let range = entry.range;
		table.insert(entry).map_err(|RangeOverlap { existing }| overlap_error(line, range, table.entries()[existing].range))?;
		Ok(())
	})?;

	if range_start.is_some() {
		return Err(BuildError::parse(UNICODE_DATA, reader.lines_read(), "range start without end"));
	}
	log_info!(LOG_CAT, "Processed '{}': {} character records", UNICODE_DATA, table.len());
	Ok(())
}

/// Names in angle brackets are labels, names that equal the generated name are left for the generator.
fn explicit_name(code_point: u32, name: &str) -> Option<String> {
	if name.is_empty() || name.starts_with('<') {
		return None;
	}
	if let Some(prefix) = names::sequence_prefix(code_point) {
		if name == format!("{prefix}-{code_point:04X}") {
			return None;
		}
	}
	Some(name.to_string())
}

fn parse_unicode_data_fields(line: &Line<'_>, code_point: u32) -> Result<CharacterEntry> {
	let mut entry = CharacterEntry::new(CodePointRange::single(code_point));

	let category = line.required(2)?;
	entry.category = Some(Category::parse(category).ok_or_else(|| line.error(format!("unknown general category '{category}'")))?);

	let combining_class = line.required(3)?;
	let combining_class = combining_class.parse::<u8>().map_err(|_| line.error(format!("invalid combining class '{combining_class}'")))?;
	if combining_class != 0 {
		entry.combining_class = Some(CanonicalCombiningClass(combining_class));
	}

	let bidi = line.required(4)?;
	entry.bidi_class = Some(BidirectionalClass::parse(bidi).ok_or_else(|| line.error(format!("unknown bidirectional class '{bidi}'")))?);

	let decomposition = line.required(5)?;
	if !decomposition.is_empty() {
		let mut parts = decomposition.split_ascii_whitespace().peekable();
		let ty = match parts.peek() {
			Some(&tag) if tag.starts_with('<') => {
				let ty = DecompositionType::parse(tag).ok_or_else(|| line.error(format!("unknown decomposition tag '{tag}'")))?;
				parts.next();
				ty
			},
			_ => DecompositionType::Canonical,
		};
		let mapping = parts.map(|cp| parse_code_point(line, cp)).collect::<Result<Vec<_>>>()?;
		if mapping.is_empty() {
			return Err(line.error("decomposition without code points"));
		}
		entry.decomposition = Some((ty, mapping));
	}

	entry.numeric = parse_numeric(line, line.required(6)?, line.required(7)?, line.required(8)?)?;

	entry.mirrored = match line.required(9)? {
		"Y" => true,
		"N" => false,
		mirrored => return Err(line.error(format!("invalid mirrored value '{mirrored}'"))),
	};

	let old_name = line.required(10)?;
	if !old_name.is_empty() {
		entry.old_name = Some(old_name.to_string());
	}

	entry.upper_case = parse_optional_code_point(line, line.required(12)?)?;
	entry.lower_case = parse_optional_code_point(line, line.required(13)?)?;
	entry.title_case = parse_optional_code_point(line, line.required(14)?)?;
	Ok(entry)
}

fn parse_optional_code_point(line: &Line<'_>, s: &str) -> Result<Option<u32>> {
	if s.is_empty() {
		Ok(None)
	} else {
		parse_code_point(line, s).map(Some)
	}
}

/// Decimal digits fill all 3 numeric fields, digits the last 2, other numerics only the last.
fn parse_numeric(line: &Line<'_>, decimal: &str, digit: &str, numeric: &str) -> Result<Option<(NumericType, Rational)>> {
	let ty = match (decimal.is_empty(), digit.is_empty(), numeric.is_empty()) {
		(true, true, true) => return Ok(None),
		(false, false, false) => NumericType::Decimal,
		(true, false, false) => NumericType::Digit,
		(true, true, false) => NumericType::Numeric,
		_ => return Err(line.error("malformed numeric triple")),
	};
	let value = Rational::parse(numeric).ok_or_else(|| line.error(format!("invalid numeric value '{numeric}'")))?;
	if ty != NumericType::Numeric && (digit.parse::<i64>().ok() != Some(value.numerator) || value.denominator != 1) {
		return Err(line.error("malformed numeric triple"));
	}
	Ok(Some((ty, value)))
}

//==============================================================

fn read_binary_properties<P: Copy>(
	source: &dyn UcdSource,
	table: &mut CharacterTable,
	file: &str,
	parse: impl Fn(&Line<'_>) -> Result<P>,
	apply: impl Fn(&mut CharacterEntry, P),
) -> Result<()> {
	let mut count = 0;
	let mut reader = LineReader::new(file, open(source, file)?, Delimiter::Semicolon);
	reader.for_each(|line| {
		let range = parse_range(line, line.required(0)?)?;
		let property = parse(line)?;
		update(table, line, range, |entry| apply(entry, property))?;
		count += 1;
		Ok(())
	})?;
	log_info!(LOG_CAT, "Processed '{}': {} ranges", file, count);
	Ok(())
}

fn unknown_property(line: &Line<'_>, name: &str) -> BuildError {
	BuildError::UnknownProperty { file: line.file().to_string(), line: line.number(), name: name.to_string() }
}

/// Read the binary properties of `PropList.txt`.
pub fn read_contributory_properties(source: &dyn UcdSource, table: &mut CharacterTable) -> Result<()> {
	read_binary_properties(source, table, PROP_LIST,
		|line| {
			let name = line.required(1)?;
			ContributoryProperties::parse(name).ok_or_else(|| unknown_property(line, name))
		},
		|entry, property| entry.contributory |= property,
	)
}

/// Read `DerivedCoreProperties.txt`, including the `InCB` values.
pub fn read_core_properties(source: &dyn UcdSource, table: &mut CharacterTable) -> Result<()> {
	read_binary_properties(source, table, DERIVED_CORE_PROPERTIES,
		|line| {
			let name = line.required(1)?;
			if name == "InCB" {
				let value = line.required(2)?;
				return match IndicConjunctBreak::parse(value) {
					Some(IndicConjunctBreak::None) | None => Err(unknown_property(line, &format!("InCB={value}"))),
					Some(value) => Ok(CoreProperties::from_indic_conjunct_break(value)),
				};
			}
			CoreProperties::parse(name).ok_or_else(|| unknown_property(line, name))
		},
		|entry, property| entry.core |= property,
	)
}

/// Read the emoji properties of `emoji-data.txt`.
pub fn read_emoji_properties(source: &dyn UcdSource, table: &mut CharacterTable) -> Result<()> {
	read_binary_properties(source, table, EMOJI_DATA,
		|line| {
			let name = line.required(1)?;
			EmojiProperties::parse(name).ok_or_else(|| unknown_property(line, name))
		},
		|entry, property| entry.emoji |= property,
	)
}

//==============================================================

/// Read `CJKRadicals.txt`, every radical needs a traditional form.
pub fn read_cjk_radicals(source: &dyn UcdSource) -> Result<Vec<CjkRadicalInfo>> {
	let mut traditional = [None; RADICAL_COUNT as usize];
	let mut simplified = [None; RADICAL_COUNT as usize];

	let mut reader = LineReader::new(CJK_RADICALS, open(source, CJK_RADICALS)?, Delimiter::Semicolon);
	reader.for_each(|line| {
		let number = line.required(0)?;
		let digits = number.trim_end_matches('\'');
		let primes = number.len() - digits.len();
		let index = digits.parse::<u32>().map_err(|_| line.error(format!("invalid radical number '{number}'")))?;
		let idx = CjkRadicalInfo::table_index(index)
			.map_err(|error| BuildError::Encoding { file: CJK_RADICALS.to_string(), line: line.number(), error })?;

		let form = RadicalForm {
			radical: parse_code_point(line, line.required(1)?)?,
			character: parse_code_point(line, line.required(2)?)?,
		};

		let slot = match primes {
			0 => &mut traditional[idx],
			1 => &mut simplified[idx],
			_ => {
				log_warning!(LOG_CAT, "Ignoring second simplified form of radical {}", number);
				return Ok(());
			},
		};
		if slot.is_some() {
			log_warning!(LOG_CAT, "Ignoring duplicate radical {}", number);
		} else {
			*slot = Some(form);
		}
		Ok(())
	})?;

	let radicals = (0..RADICAL_COUNT).map(|idx| {
		let traditional = traditional[idx as usize].ok_or(BuildError::MissingRadical(idx + 1))?;
		Ok(CjkRadicalInfo { index: idx + 1, traditional, simplified: simplified[idx as usize] })
	}).collect::<Result<Vec<_>>>()?;

	log_info!(LOG_CAT, "Processed '{}': {} radicals, {} with a simplified form",
		CJK_RADICALS, radicals.len(), radicals.iter().filter(|radical| radical.simplified.is_some()).count());
	Ok(radicals)
}

//==============================================================

/// Read `NameAliases.txt`.
pub fn read_name_aliases(source: &dyn UcdSource, table: &mut CharacterTable) -> Result<()> {
	let mut count = 0;
	let mut reader = LineReader::new(NAME_ALIASES, open(source, NAME_ALIASES)?, Delimiter::Semicolon);
	reader.for_each(|line| {
		let code_point = parse_code_point(line, line.required(0)?)?;
		let alias = line.required(1)?;
		let kind = line.required(2)?;
		let kind = NameAliasKind::parse(kind).ok_or_else(|| line.error(format!("unknown alias kind '{kind}'")))?;
		if alias.is_empty() {
			return Err(line.error("empty name alias"));
		}
		update(table, line, CodePointRange::single(code_point), |entry| entry.aliases.push((kind, alias.to_string())))?;
		count += 1;
		Ok(())
	})?;
	log_info!(LOG_CAT, "Processed '{}': {} aliases", NAME_ALIASES, count);
	Ok(())
}

/// Read the cross references from `NamesList.txt`.
///
/// Only `x (name - XXXX)` and `x XXXX` lines that refer to a single code point are used, and only for characters
/// that have a record of their own.
pub fn read_names_list(source: &dyn UcdSource, table: &mut CharacterTable) -> Result<()> {
	let mut current = None;
	let mut count = 0;
	let mut reader = LineReader::new(NAMES_LIST, open(source, NAMES_LIST)?, Delimiter::Tab).raw();
	reader.for_each(|line| {
		let text = line.text();
		if let Some(reference) = text.strip_prefix("\tx ") {
			let Some(code_point) = current else {
				return Ok(());
			};
			let Some(target) = parse_cross_reference(reference) else {
				log_verbose!(LOG_CAT, "Skipping cross reference '{}' of U+{:04X} at line {}", reference.trim(), code_point, line.number());
				return Ok(());
			};
			match table.get_mut(code_point) {
				Some(entry) if entry.range.is_single() => {
					entry.cross_references.push(target);
					count += 1;
				},
				_ => log_verbose!(LOG_CAT, "Skipping cross reference of U+{:04X}, it has no record of its own", code_point),
			}
			return Ok(());
		}

		if !text.starts_with(['\t', '@', ';']) {
			current = line.field(0)
				.and_then(|cp| u32::from_str_radix(cp, 16).ok())
				.filter(|&cp| validate_code_point(cp).is_ok());
		}
		Ok(())
	})?;
	log_info!(LOG_CAT, "Processed '{}': {} cross references", NAMES_LIST, count);
	Ok(())
}

fn parse_cross_reference(reference: &str) -> Option<u32> {
	let reference = reference.trim();
	let target = match reference.strip_prefix('(').and_then(|inner| inner.strip_suffix(')')) {
		Some(inner) => inner.rsplit_once(" - ")?.1,
		None => reference,
	};
	let target = u32::from_str_radix(target.trim(), 16).ok()?;
	validate_code_point(target).ok()
}

//==============================================================

/// Read `Blocks.txt`.
pub fn read_blocks(source: &dyn UcdSource) -> Result<RangeIndex<BlockEntry>> {
	let mut blocks = RangeIndex::new();
	let mut reader = LineReader::new(BLOCKS, open(source, BLOCKS)?, Delimiter::Semicolon);
	reader.for_each(|line| {
		let range = parse_range(line, line.required(0)?)?;
		let name = line.required(1)?;
		if name.is_empty() {
			return Err(line.error("block without a name"));
		}
		blocks.insert(BlockEntry { range, name: name.to_string() })
			.map_err(|RangeOverlap { existing }| overlap_error(line, range, blocks.entries()[existing].range))?;
		Ok(())
	})?;
	log_info!(LOG_CAT, "Processed '{}': {} blocks", BLOCKS, blocks.len());
	Ok(blocks)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::MemorySource;

	const UNICODE_DATA_SAMPLE : &str = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
00BD;VULGAR FRACTION ONE HALF;No;0;ON;<fraction> 0031 2044 0032;;;1/2;N;FRACTION ONE HALF;;;;
0028;LEFT PARENTHESIS;Ps;0;ON;;;;;Y;OPENING PARENTHESIS;;;;
0035;DIGIT FIVE;Nd;0;EN;;5;5;5;N;;;;;
3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;
4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;
F900;CJK COMPATIBILITY IDEOGRAPH-F900;Lo;0;L;8C48;;;;N;;;;;
";

	#[test]
	pub fn unicode_data() {
		let source = MemorySource::new().with_file(UNICODE_DATA, UNICODE_DATA_SAMPLE);
		let mut table = CharacterTable::new();
		read_unicode_data(&source, &mut table).unwrap();
		assert_eq!(table.len(), 6);

		let a = table.get(0x41).unwrap();
		assert_eq!(a.name.as_deref(), Some("LATIN CAPITAL LETTER A"));
		assert_eq!(a.lower_case, Some(0x61));
		assert_eq!(a.upper_case, None);
		assert_eq!(a.combining_class, None);
		assert!(!a.property_only);

		let half = table.get(0xBD).unwrap();
		assert_eq!(half.numeric, Some((NumericType::Numeric, Rational::new(1, 2))));
		assert_eq!(half.decomposition, Some((DecompositionType::Fraction, vec![0x31, 0x2044, 0x32])));
		assert_eq!(half.old_name.as_deref(), Some("FRACTION ONE HALF"));

		assert!(table.get(0x28).unwrap().mirrored);
		assert_eq!(table.get(0x35).unwrap().numeric, Some((NumericType::Decimal, Rational::new(5, 1))));

		let ext_a = table.get(0x4000).unwrap();
		assert_eq!(ext_a.range, CodePointRange::new(0x3400, 0x4DBF));
		assert_eq!(ext_a.name, None);
		assert_eq!(ext_a.category, Some(Category::OtherLetter));

		let compat = table.get(0xF900).unwrap();
		assert_eq!(compat.name, None);
		assert_eq!(compat.decomposition, Some((DecompositionType::Canonical, vec![0x8C48])));
	}

	#[test]
	pub fn unicode_data_errors() {
		let cases = [
			"0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061\n",
			"0041;LATIN CAPITAL LETTER A;Xx;0;L;;;;;N;;;;0061;\n",
			"0041;A;Lu;0;L;;5;;;N;;;;;\n",
			"0041;A;Lu;0;L;;;;;N;;;;;\n0041;A;Lu;0;L;;;;;N;;;;;\n",
			"3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;\n",
			"110000;A;Lu;0;L;;;;;N;;;;;\n",
		];
		for case in cases {
			let source = MemorySource::new().with_file(UNICODE_DATA, case);
			assert!(read_unicode_data(&source, &mut CharacterTable::new()).is_err(), "{case}");
		}

		let source = MemorySource::new().with_file(UNICODE_DATA, "0041;A;Lu;0;L;;;;;N;;;;;\n0041;A;Lu;0;L;;;;;N;;;;;\n");
		assert!(matches!(read_unicode_data(&source, &mut CharacterTable::new()), Err(BuildError::Overlap { line: 2, .. })));
	}

	#[test]
	pub fn properties() {
		let source = MemorySource::new()
			.with_file(UNICODE_DATA, UNICODE_DATA_SAMPLE)
			.with_file(PROP_LIST, "0041 ; Hex_Digit\n3400..4DBF ; Ideographic\n")
			.with_file(DERIVED_CORE_PROPERTIES, "0041 ; Alphabetic\n0300..036F ; InCB; Extend\n")
			.with_file(EMOJI_DATA, "1F000..1F0FF ; Extended_Pictographic\n");
		let mut table = CharacterTable::new();
		read_unicode_data(&source, &mut table).unwrap();
		read_contributory_properties(&source, &mut table).unwrap();
		read_core_properties(&source, &mut table).unwrap();
		read_emoji_properties(&source, &mut table).unwrap();

		assert_eq!(table.get(0x41).unwrap().contributory, ContributoryProperties::HexDigit);
		assert_eq!(table.get(0x41).unwrap().core, CoreProperties::Alphabetic);
		assert_eq!(table.get(0x3500).unwrap().contributory, ContributoryProperties::Ideographic);
		let combining = table.get(0x301).unwrap();
		assert!(combining.property_only);
		assert_eq!(combining.range, CodePointRange::new(0x300, 0x36F));
		assert_eq!(combining.core.indic_conjunct_break(), IndicConjunctBreak::Extend);
		assert_eq!(table.get(0x1F0AB).unwrap().emoji, EmojiProperties::ExtendedPictographic);

		let source = source.with_file(PROP_LIST, "0041 ; Not_A_Property\n");
		assert!(matches!(read_contributory_properties(&source, &mut table), Err(BuildError::UnknownProperty { line: 1, .. })));
		let source = source.with_file(PROP_LIST, "3400..3500 ; Radical\n");
		assert!(matches!(read_contributory_properties(&source, &mut table), Err(BuildError::Overlap { .. })));
	}

	#[test]
	pub fn radicals() {
		let mut data = String::new();
		for idx in 1..=214u32 {
			data.push_str(&format!("{idx}; {:04X}; {:04X}\n", 0x2F00 + idx - 1, 0x4E00 + idx));
		}
		data.push_str("90'; 2EA6; 4E2C\n90''; 2EA7; 4E2D\n");
		let radicals = read_cjk_radicals(&MemorySource::new().with_file(CJK_RADICALS, data.as_str())).unwrap();
		assert_eq!(radicals.len(), 214);
		assert_eq!(radicals[0].traditional, RadicalForm { radical: 0x2F00, character: 0x4E01 });
		assert_eq!(radicals[89].simplified, Some(RadicalForm { radical: 0x2EA6, character: 0x4E2C }));

		let data = data.replace("214; 2FD5; 4ED6\n", "");
		let result = read_cjk_radicals(&MemorySource::new().with_file(CJK_RADICALS, data));
		assert!(matches!(result, Err(BuildError::MissingRadical(214))));

		let result = read_cjk_radicals(&MemorySource::new().with_file(CJK_RADICALS, "215; 2FD5; 9FA0\n"));
		assert!(matches!(result, Err(BuildError::Encoding { error: unidb_info::Error::RadicalIndexOutOfRange(215), .. })));
	}

	#[test]
	pub fn names_list_cross_references() {
		let source = MemorySource::new()
			.with_file(UNICODE_DATA, UNICODE_DATA_SAMPLE)
			.with_file(NAMES_LIST, "@@\t0000\tC0 Controls\n0041\tLATIN CAPITAL LETTER A\n\tx (latin small letter a - 0061)\n\tx 0391\n\tx 0041 0301\n3400\t<CJK Ideograph Extension A>\n\tx 4E00\n");
		let mut table = CharacterTable::new();
		read_unicode_data(&source, &mut table).unwrap();
		read_names_list(&source, &mut table).unwrap();
		assert_eq!(table.get(0x41).unwrap().cross_references, [0x61, 0x391]);
		assert!(table.get(0x3400).unwrap().cross_references.is_empty());
	}

	#[test]
	pub fn helpers() {
		let line = Line::for_tests("0000..001F");
		assert_eq!(parse_range(&line, "0000..001F").unwrap(), CodePointRange::new(0, 0x1F));
		assert_eq!(parse_range(&line, "1F600").unwrap(), CodePointRange::single(0x1F600));
		assert!(parse_range(&line, "0020..0010").is_err());
		assert!(parse_range(&line, "ZZ").is_err());

		assert_eq!(explicit_name(0xF900, "CJK COMPATIBILITY IDEOGRAPH-F900"), None);
		assert_eq!(explicit_name(0x41, "<control>"), None);
		assert_eq!(explicit_name(0x41, "LATIN CAPITAL LETTER A").as_deref(), Some("LATIN CAPITAL LETTER A"));

		assert_eq!(parse_cross_reference("(greek capital letter alpha - 0391)"), Some(0x391));
		assert_eq!(parse_cross_reference("2E2E"), Some(0x2E2E));
		assert_eq!(parse_cross_reference("0041 0301"), None);
	}
}
