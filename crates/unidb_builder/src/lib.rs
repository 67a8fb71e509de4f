//! Offline builder for the `unidb_info` database.
//!
//! Source files are read from a [`UcdSource`] into mutable tables, which are serialized once into the final byte
//! stream. Files are processed in dependency order: `UnicodeData.txt` first, property files after it, so property
//! ranges merge into the records that already exist.

use std::io;

use unidb_info::{
	range::RangeIndex,
	CjkRadicalInfo, PackedStringRef, UnicodeDatabase, UnicodeVersion,
	record::{UcdFields, UnihanFields},
};
use unidb_logging::{LogCategory, log_info};

mod error;
pub use error::*;

mod source;
pub use source::*;

mod settings;
pub use settings::*;

pub mod reader;
pub mod table;
pub mod ucd;
pub mod unihan;
pub mod serialize;

use table::{BlockEntry, CharacterEntry, CharacterTable, UnihanEntry, UnihanTable};

const LOG_CAT : LogCategory = LogCategory::new("Builder");

/// Tables of a database under construction.
#[derive(Clone, Debug)]
pub struct UnicodeDataBuilder {
	version:    UnicodeVersion,
	characters: CharacterTable,
	blocks:     RangeIndex<BlockEntry>,
	radicals:   Vec<CjkRadicalInfo>,
	unihan:     UnihanTable,
}

impl UnicodeDataBuilder {
	/// Build the tables from the files in `source`.
	pub fn build(source: &dyn UcdSource, version: UnicodeVersion) -> Result<Self> {
		log_info!(LOG_CAT, "Building unicode {} database", version);

		let mut characters = CharacterTable::new();
		ucd::read_unicode_data(source, &mut characters)?;
		ucd::read_contributory_properties(source, &mut characters)?;
		ucd::read_core_properties(source, &mut characters)?;
		ucd::read_emoji_properties(source, &mut characters)?;
		let radicals = ucd::read_cjk_radicals(source)?;
		ucd::read_name_aliases(source, &mut characters)?;
		ucd::read_names_list(source, &mut characters)?;
		let blocks = ucd::read_blocks(source)?;

		let mut unihan = UnihanTable::new();
		for file in unihan::UNIHAN_FILES {
			unihan::read_unihan_file(source, &mut unihan, file)?;
		}

		let builder = Self { version, characters, blocks, radicals, unihan };
		log_info!(LOG_CAT, "Built {} character records, {} blocks, {} radicals, {} Unihan records",
			builder.characters.len(), builder.blocks.len(), builder.radicals.len(), builder.unihan.len());
		Ok(builder)
	}

	/// Rebuild the tables of a loaded database.
	///
	/// Field presence follows the flags of the stored records, so serializing the result reproduces the database bytes.
	pub fn from_database(db: &UnicodeDatabase) -> Self {
		let characters = db.characters().map(|info| {
			let record = info.record();
			let fields = record.fields;
			let string = |present: bool, string: PackedStringRef| present.then(|| db.string(string).as_str().map(str::to_string)).flatten();

			CharacterEntry {
				range: record.range,
				name: string(fields.contains(UcdFields::Name), record.name),
				aliases: info.aliases().map(|alias| (alias.kind, alias.name.as_str().unwrap_or_default().to_string())).collect(),
				category: fields.contains(UcdFields::Category).then_some(record.category),
				combining_class: fields.contains(UcdFields::CanonicalCombiningClass).then_some(record.combining_class),
				bidi_class: record.bidi_class,
				decomposition: fields.contains(UcdFields::Decomposition).then(|| (record.decomposition_type, info.decomposition().collect())),
				numeric: record.numeric_value.map(|value| (record.numeric_type(), value)),
				mirrored: record.is_mirrored(),
				old_name: string(fields.contains(UcdFields::OldName), record.old_name),
				upper_case: record.upper_case,
				lower_case: record.lower_case,
				title_case: record.title_case,
				contributory: record.contributory,
				core: record.core,
				emoji: record.emoji,
				cross_references: info.cross_references().collect(),
				property_only: !fields.contains(UcdFields::Category),
			}
		}).collect::<Vec<_>>();
		// Records come out of a validated database, so they are sorted and don't overlap.
		let characters = CharacterTable::from_entries(characters).unwrap_or_default();

		let blocks = db.blocks()
			.map(|block| BlockEntry { range: block.range, name: block.name.as_str().unwrap_or_default().to_string() })
			.collect::<Vec<_>>();
		let blocks = RangeIndex::from_sorted(blocks).unwrap_or_default();

		let mut unihan = UnihanTable::new();
		for info in db.unihan_characters() {
			let record = info.record();
			let mut strings : [Option<String>; 10] = Default::default();
			for ((string, field), stored) in strings.iter_mut().zip(UnihanFields::STRINGS).zip(record.strings) {
				if record.fields.contains(field) {
					*string = db.string(stored).as_str().map(str::to_string);
				}
			}
			unihan.push_sorted(UnihanEntry {
				packed: record.packed,
				code_point: record.code_point,
				numeric: record.numeric_value.map(|value| (record.numeric_type(), value)),
				radical_strokes: info.radical_stroke_counts().collect(),
				strings,
			});
		}

		Self {
			version: db.unicode_version(),
			characters,
			blocks,
			radicals: db.radicals().copied().collect(),
			unihan,
		}
	}

	pub fn version(&self) -> UnicodeVersion {
		self.version
	}

	pub fn characters(&self) -> &CharacterTable {
		&self.characters
	}

	pub fn blocks(&self) -> &[BlockEntry] {
		self.blocks.entries()
	}

	pub fn radicals(&self) -> &[CjkRadicalInfo] {
		&self.radicals
	}

	pub fn unihan(&self) -> &UnihanTable {
		&self.unihan
	}

	/// Serialize the database into a new buffer.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		let mut buf = Vec::new();
		serialize::write_database(&mut buf, &serialize::Tables {
			version: self.version,
			characters: self.characters.entries(),
			blocks: self.blocks.entries(),
			radicals: &self.radicals,
			unihan: self.unihan.entries(),
		})?;
		log_info!(LOG_CAT, "Serialized database: {} bytes", buf.len());
		Ok(buf)
	}

	/// Serialize the database into `writer`.
	pub fn serialize(&self, writer: &mut impl io::Write) -> Result<()> {
		let bytes = self.to_bytes()?;
		writer.write_all(&bytes)
			.and_then(|_| writer.flush())
			.map_err(|err| BuildError::io("<output>", err))
	}
}
