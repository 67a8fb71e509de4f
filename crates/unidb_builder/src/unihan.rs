//! Processors for the Unihan database files.
//!
//! Every Unihan line holds one property of one ideograph: `U+XXXX<TAB>kProperty<TAB>value`.

use unidb_base::EnumFromNameT;
use unidb_info::{record::RadicalStrokeCount, validate_code_point, UnihanNumericType};
use unidb_logging::{LogCategory, log_info, log_verbose};

use crate::{
	reader::{Delimiter, Line, LineReader},
	table::{UnihanEntry, UnihanTable},
	ucd::open,
	BuildError, Result, UcdSource,
};

const LOG_CAT : LogCategory = LogCategory::new_with_sub("Builder", "Unihan");

pub const NUMERIC_VALUES : &str = "Unihan_NumericValues.txt";
pub const READINGS : &str = "Unihan_Readings.txt";
pub const VARIANTS : &str = "Unihan_Variants.txt";
pub const IRG_SOURCES : &str = "Unihan_IRGSources.txt";

/// Unihan files, in the order they are merged.
pub const UNIHAN_FILES : [&str; 4] = [NUMERIC_VALUES, READINGS, VARIANTS, IRG_SOURCES];

/// String properties, in the order of [`unidb_info::record::UnihanFields::STRINGS`].
const STRING_PROPERTIES : [&str; 10] = [
	"kDefinition",
	"kMandarin",
	"kCantonese",
	"kJapaneseKun",
	"kJapaneseOn",
	"kKorean",
	"kHangul",
	"kVietnamese",
	"kSimplifiedVariant",
	"kTraditionalVariant",
];

const FIRST_VARIANT : usize = 8;

/// Merge one Unihan file into `table`.
pub fn read_unihan_file(source: &dyn UcdSource, table: &mut UnihanTable, file: &str) -> Result<()> {
	let mut skipped = Vec::<String>::new();
	let mut count = 0;
	let mut reader = LineReader::new(file, open(source, file)?, Delimiter::Tab);
	reader.for_each(|line| {
		let code_point = parse_unihan_code_point(line, line.required(0)?)?;
		let property = line.required(1)?;
		let value = line.required(2)?;

		if let Some(numeric_type) = UnihanNumericType::parse(property).filter(|&ty| ty != UnihanNumericType::None) {
			let number = value.split_ascii_whitespace().next().unwrap_or(value);
			let number = number.parse::<u64>().map_err(|_| line.error(format!("invalid {property} value '{value}'")))?;
			let entry = entry(table, line, code_point)?;
			match entry.numeric {
				Some((existing, _)) => log_verbose!(LOG_CAT, "U+{:04X} already has a {:?} numeric value, ignoring {}", code_point, existing, property),
				None => entry.numeric = Some((numeric_type, number)),
			}
		} else if property == "kRSUnicode" {
			let counts = value.split_ascii_whitespace()
				.map(|rs| RadicalStrokeCount::parse(rs).ok_or_else(|| line.error(format!("invalid radical/stroke count '{rs}'"))))
				.collect::<Result<Vec<_>>>()?;
			entry(table, line, code_point)?.radical_strokes = counts;
		} else if let Some(idx) = STRING_PROPERTIES.iter().position(|&name| name == property) {
			let value = if idx >= FIRST_VARIANT {
				variant_characters(line, value)?
			} else {
				value.to_string()
			};
			entry(table, line, code_point)?.strings[idx] = Some(value);
		} else {
			if !skipped.iter().any(|name| name == property) {
				log_verbose!(LOG_CAT, "Skipping Unihan property '{}' in '{}'", property, file);
				skipped.push(property.to_string());
			}
			return Ok(());
		}
		count += 1;
		Ok(())
	})?;
	log_info!(LOG_CAT, "Processed '{}': {} values, {} Unihan records in total", file, count, table.len());
	Ok(())
}

fn entry<'t>(table: &'t mut UnihanTable, line: &Line<'_>, code_point: u32) -> Result<&'t mut UnihanEntry> {
	table.entry(code_point).map_err(|error| BuildError::Encoding { file: line.file().to_string(), line: line.number(), error })
}

/// Parse a `U+XXXX` code point.
fn parse_unihan_code_point(line: &Line<'_>, s: &str) -> Result<u32> {
	s.strip_prefix("U+")
		.and_then(|hex| u32::from_str_radix(hex, 16).ok())
		.and_then(|cp| validate_code_point(cp).ok())
		.ok_or_else(|| line.error(format!("invalid code point '{s}'")))
}

/// Variants are stored as the variant characters themselves, `U+4E07 U+842C` becomes `"万萬"`.
fn variant_characters(line: &Line<'_>, value: &str) -> Result<String> {
	value.split_ascii_whitespace()
		.map(|variant| {
			let code_point = parse_unihan_code_point(line, variant)?;
			char::from_u32(code_point).ok_or_else(|| line.error(format!("variant '{variant}' is not a character")))
		})
		.collect()
}
