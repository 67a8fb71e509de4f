mod common;

use unidb_builder::{
	table::{CharacterEntry, CharacterTable},
	ucd, BuildError, MemorySource, UnicodeDataBuilder,
};
use unidb_info::{
	range::RangeOverlap,
	BidirectionalClass, CanonicalCombiningClass, Category, CodePointRange, ContributoryProperties, CoreProperties,
	DecompositionType, EmojiProperties, Error, IndicConjunctBreak, NameAliasKind, NumericType, Rational,
	RadicalForm, UnicodeDatabase, UnihanNumericType, MAX_CODE_POINT,
	record::RadicalStrokeCount,
};

#[test]
pub fn hangul_syllables() {
	let db = common::database();
	assert_eq!(db.name(0xD4DB).unwrap().unwrap().to_string(), "HANGUL SYLLABLE PWILH");
	assert_eq!(db.name(0xAC00).unwrap().unwrap().to_string(), "HANGUL SYLLABLE GA");
	assert_eq!(db.block_name(0xD311).unwrap().to_string(), "Hangul Syllables");
	assert_eq!(db.category(0xD311).unwrap(), Category::OtherLetter);

	let info = db.char_info(0xD4DB).unwrap();
	assert!(info.name().unwrap().is_lazy());
	assert_eq!(info.range(), CodePointRange::new(0xAC00, 0xD7A3));
}

#[test]
pub fn numeric_values() {
	let db = common::database();
	let info = db.char_info(0x0D76).unwrap();
	assert_eq!(info.category(), Category::OtherNumber);
	assert_eq!(info.numeric_type(), NumericType::Numeric);
	assert_eq!(info.numeric_value(), Some(Rational::new(1, 16)));
	assert_eq!(info.name().unwrap().as_str(), Some("MALAYALAM FRACTION ONE SIXTEENTH"));

	let zero = db.char_info(0x30).unwrap();
	assert_eq!(zero.numeric_type(), NumericType::Decimal);
	assert_eq!(zero.numeric_value(), Some(Rational::new(0, 1)));

	let half = db.char_info(0xBD).unwrap();
	assert_eq!(half.numeric_value(), Some(Rational::new(1, 2)));
	assert_eq!(half.decomposition_type(), DecompositionType::Fraction);
	assert_eq!(half.decomposition().collect::<Vec<_>>(), [0x31, 0x2044, 0x32]);
	assert_eq!(half.old_name().unwrap().as_str(), Some("FRACTION ONE HALF"));

	assert_eq!(db.char_info(0x41).unwrap().numeric_value(), None);
}

#[test]
pub fn radicals() {
	let db = common::database();
	let first = db.radical_info(1).unwrap();
	assert_eq!(first.traditional, RadicalForm { radical: 0x2F00, character: 0x4E00 });
	assert_eq!(first.simplified, None);

	let last = db.radical_info(214).unwrap();
	assert_eq!(last.traditional, RadicalForm { radical: 0x2FD5, character: 0x9FA0 });

	let simplified = db.radical_info(90).unwrap();
	assert_eq!(simplified.simplified, Some(RadicalForm { radical: 0x2EA6, character: 0x4E2C }));

	assert_eq!(db.radical_info(0), Err(Error::RadicalIndexOutOfRange(0)));
	assert_eq!(db.radical_info(215), Err(Error::RadicalIndexOutOfRange(215)));
	assert_eq!(db.radicals().len(), 214);
}

#[test]
pub fn lookup_matches_linear_scan() {
	let builder = common::builder();
	let db = UnicodeDatabase::new(builder.to_bytes().unwrap()).unwrap();
	let entries = builder.characters().entries();

	for code_point in 0..=MAX_CODE_POINT {
		let expected = entries.iter().find(|entry| entry.range.contains(code_point)).map(|entry| entry.range);
		let found = db.lookup(code_point).unwrap().map(|info| info.range());
		assert_eq!(found, expected, "U+{code_point:04X}");
	}
	assert_eq!(db.lookup(MAX_CODE_POINT + 1).err(), Some(Error::CodePointOutOfRange(MAX_CODE_POINT + 1)));
	assert_eq!(db.category(0x0378).unwrap(), Category::Unassigned);
	assert_eq!(db.block_name(0x0378).unwrap().to_string(), "No_Block");
}

#[test]
pub fn ranges_are_sorted_and_disjoint() {
	let builder = common::builder();
	for pair in builder.characters().entries().windows(2) {
		assert!(pair[0].range.last < pair[1].range.first, "{} and {}", pair[0].range, pair[1].range);
	}
	for pair in builder.blocks().windows(2) {
		assert!(pair[0].range.last < pair[1].range.first);
	}

	let db = UnicodeDatabase::new(builder.to_bytes().unwrap()).unwrap();
	let ranges = db.characters().map(|info| info.range()).collect::<Vec<_>>();
	assert_eq!(ranges.len(), db.record_count());
	assert!(ranges.windows(2).all(|pair| pair[0].last < pair[1].first));
}

#[test]
pub fn serialization_is_idempotent() {
	let bytes = common::builder().to_bytes().unwrap();
	let db = UnicodeDatabase::new(bytes.clone()).unwrap();
	let rebuilt = UnicodeDataBuilder::from_database(&db);
	assert_eq!(rebuilt.to_bytes().unwrap(), bytes);

	let mut written = Vec::new();
	rebuilt.serialize(&mut written).unwrap();
	assert_eq!(written, bytes);
}

#[test]
pub fn overlapping_insert_is_rejected() {
	let mut table = common::builder().characters().clone();
	let before = table.entries().to_vec();

	let result = table.insert(CharacterEntry::new(CodePointRange::new(0x4D00, 0x4E10)));
	assert!(matches!(result, Err(RangeOverlap { .. })));
	assert_eq!(table.entries(), &before[..]);

	let mut table = CharacterTable::new();
	table.insert(CharacterEntry::new(CodePointRange::single(0x41))).unwrap();
	assert_eq!(table.insert(CharacterEntry::new(CodePointRange::single(0x41))), Err(RangeOverlap { existing: 0 }));
	assert_eq!(table.len(), 1);
}

#[test]
pub fn partial_overlap_fails_the_build() {
	let source = common::source().with_file(ucd::PROP_LIST, "3300..3500 ; Ideographic\n");
	match UnicodeDataBuilder::build(&source, common::VERSION) {
		Err(BuildError::Overlap { file, line, range, existing }) => {
			assert_eq!(file, ucd::PROP_LIST);
			assert_eq!(line, 1);
			assert_eq!(range, CodePointRange::new(0x3300, 0x3500));
			assert_eq!(existing, CodePointRange::new(0x3400, 0x4DBF));
		},
		result => panic!("expected an overlap, got {:?}", result.err()),
	}

	let source = common::source().with_file(ucd::PROP_LIST, "0041 ; Not_A_Property\n");
	assert!(matches!(UnicodeDataBuilder::build(&source, common::VERSION), Err(BuildError::UnknownProperty { .. })));

	let source = MemorySource::new().with_file(ucd::UNICODE_DATA, common::UNICODE_DATA);
	assert!(matches!(UnicodeDataBuilder::build(&source, common::VERSION), Err(BuildError::Io { .. })));
}

#[test]
pub fn character_properties() {
	let db = common::database();
	assert_eq!(db.unicode_version(), common::VERSION);

	let a = db.char_info(0x41).unwrap();
	assert_eq!(a.name().unwrap().as_str(), Some("LATIN CAPITAL LETTER A"));
	assert_eq!(a.bidi_class(), Some(BidirectionalClass::LeftToRight));
	assert_eq!(a.simple_lowercase(), Some(0x61));
	assert_eq!(a.simple_uppercase(), None);
	assert!(a.core_properties().contains(CoreProperties::Alphabetic));
	assert!(a.core_properties().contains(CoreProperties::Uppercase));
	assert!(a.contributory_properties().contains(ContributoryProperties::HexDigit));
	assert_eq!(a.cross_references().collect::<Vec<_>>(), [0x61, 0x1D400]);
	assert_eq!(a.block().unwrap().name.to_string(), "Basic Latin");

	let small_a = db.char_info(0x61).unwrap();
	assert_eq!(small_a.simple_uppercase(), Some(0x41));
	assert_eq!(small_a.simple_titlecase(), Some(0x41));

	assert!(db.char_info(0x28).unwrap().is_mirrored());
	assert!(!a.is_mirrored());

	let grave = db.char_info(0x300).unwrap();
	assert_eq!(grave.combining_class(), CanonicalCombiningClass::ABOVE);
	assert_eq!(grave.indic_conjunct_break(), IndicConjunctBreak::Extend);
	assert!(grave.contributory_properties().contains(ContributoryProperties::Diacritic));
	assert_eq!(a.indic_conjunct_break(), IndicConjunctBreak::None);
	assert_eq!(a.combining_class(), CanonicalCombiningClass::NOT_REORDERED);

	let face = db.char_info(0x1F600).unwrap();
	assert_eq!(face.emoji_properties(), EmojiProperties::Emoji | EmojiProperties::EmojiPresentation | EmojiProperties::ExtendedPictographic);

	let digit = db.char_info(0x35).unwrap();
	assert_eq!(digit.range(), CodePointRange::new(0x31, 0x39));
	assert_eq!(digit.category(), Category::Unassigned);
	assert!(digit.name().is_none());
	assert!(digit.emoji_properties().contains(EmojiProperties::EmojiComponent));
	assert!(digit.contributory_properties().contains(ContributoryProperties::AsciiHexDigit));

	let noncharacter = db.char_info(MAX_CODE_POINT).unwrap();
	assert!(noncharacter.contributory_properties().contains(ContributoryProperties::NoncharacterCodePoint));
}

#[test]
pub fn names_and_aliases() {
	let db = common::database();

	let null = db.char_info(0).unwrap();
	assert!(null.name().is_none());
	assert_eq!(null.old_name().unwrap().as_str(), Some("NULL"));
	let aliases = null.aliases().map(|alias| (alias.kind, alias.name.to_string())).collect::<Vec<_>>();
	assert_eq!(aliases, [(NameAliasKind::Control, "NULL".to_string()), (NameAliasKind::Abbreviation, "NUL".to_string())]);

	assert_eq!(db.name(0x4E01).unwrap().unwrap().to_string(), "CJK UNIFIED IDEOGRAPH-4E01");
	assert_eq!(db.name(0x3400).unwrap().unwrap().to_string(), "CJK UNIFIED IDEOGRAPH-3400");
	assert_eq!(db.name(0x2A6D6).unwrap().unwrap().to_string(), "CJK UNIFIED IDEOGRAPH-2A6D6");
	assert!(db.char_info(0x4E01).unwrap().cross_references().next().is_none());

	// Compatibility ideographs listed by name only store the generated name.
	let compat = db.char_info(0xF900).unwrap();
	assert!(compat.record().name.is_empty());
	assert_eq!(compat.name().unwrap().to_string(), "CJK COMPATIBILITY IDEOGRAPH-F900");
	assert_eq!(compat.decomposition().collect::<Vec<_>>(), [0x8C48]);

	assert!(db.name(0x0378).unwrap().is_none());
}

#[test]
pub fn blocks() {
	let db = common::database();
	assert_eq!(db.blocks().len(), 11);
	assert_eq!(db.block_name(0x0D76).unwrap().to_string(), "Malayalam");
	assert_eq!(db.block(0x2153).unwrap().unwrap().range, CodePointRange::new(0x2150, 0x218F));
	assert_eq!(db.block_name(0x10FFFF).unwrap().to_string(), "No_Block");
	assert!(db.block(0x10FFFF).unwrap().is_none());
}

#[test]
pub fn unihan_data() {
	let db = common::database();
	assert_eq!(db.unihan_count(), 4);

	let one = db.unihan(0x4E00).unwrap().unwrap();
	assert_eq!(one.numeric_type(), UnihanNumericType::Primary);
	assert_eq!(one.numeric_value(), Some(1));
	assert_eq!(one.definition().unwrap().as_str(), Some("one; a, an; alone"));
	assert_eq!(one.mandarin().unwrap().as_str(), Some("yī"));
	assert_eq!(one.cantonese().unwrap().as_str(), Some("jat1"));
	assert!(one.korean().is_none());
	assert_eq!(one.radical_stroke_counts().collect::<Vec<_>>(), [RadicalStrokeCount { radical: 1, is_simplified: false, strokes: 0 }]);

	let wan = db.unihan(0x4E07).unwrap().unwrap();
	assert_eq!(wan.traditional_variant().unwrap().as_str(), Some("萬"));
	let traditional = db.unihan(0x842C).unwrap().unwrap();
	assert_eq!(traditional.numeric_type(), UnihanNumericType::Accounting);
	assert_eq!(traditional.simplified_variant().unwrap().as_str(), Some("万"));

	let ext_b = db.unihan(0x2A6D6).unwrap().unwrap();
	assert_eq!(ext_b.radical_stroke_counts().collect::<Vec<_>>(), [
		RadicalStrokeCount { radical: 213, is_simplified: true, strokes: -1 },
		RadicalStrokeCount { radical: 9, is_simplified: false, strokes: 2 },
		RadicalStrokeCount { radical: 120, is_simplified: true, strokes: 4 },
	]);
	assert_eq!(ext_b.numeric_value(), None);

	assert!(db.unihan(0x4E01).unwrap().is_none());
	assert!(db.unihan(0x41).unwrap().is_none());
	let packed_order = db.unihan_characters().map(|info| info.code_point()).collect::<Vec<_>>();
	assert_eq!(packed_order, [0x4E00, 0x4E07, 0x842C, 0x2A6D6]);
}
