#![allow(dead_code)]

use unidb_builder::{ucd, unihan, MemorySource, UnicodeDataBuilder};
use unidb_info::{UnicodeDatabase, UnicodeVersion};

pub const VERSION : UnicodeVersion = UnicodeVersion::new(15, 1, 0);

pub const UNICODE_DATA : &str = "\
0000;<control>;Cc;0;BN;;;;;N;NULL;;;;
0020;SPACE;Zs;0;WS;;;;;N;;;;;
0028;LEFT PARENTHESIS;Ps;0;ON;;;;;Y;OPENING PARENTHESIS;;;;
0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041
00BD;VULGAR FRACTION ONE HALF;No;0;ON;<fraction> 0031 2044 0032;;;1/2;N;FRACTION ONE HALF;;;;
0300;COMBINING GRAVE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING GRAVE;;;;
0D76;MALAYALAM FRACTION ONE SIXTEENTH;No;0;L;;;;1/16;N;;;;;
0DE6;SINHALA LITH DIGIT ZERO;Nd;0;L;;0;0;0;N;;;;;
2153;VULGAR FRACTION ONE THIRD;No;0;ON;<fraction> 0031 2044 0033;;;1/3;N;FRACTION ONE THIRD;;;;
3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;
4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;
4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;
9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;
AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;
D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
F900;CJK COMPATIBILITY IDEOGRAPH-F900;Lo;0;L;8C48;;;;N;;;;;
1F600;GRINNING FACE;So;0;ON;;;;;N;;;;;
20000;<CJK Ideograph Extension B, First>;Lo;0;L;;;;;N;;;;;
2A6DF;<CJK Ideograph Extension B, Last>;Lo;0;L;;;;;N;;;;;
";

pub const PROP_LIST : &str = "\
# PropList-15.1.0.txt

0020          ; White_Space # Zs       SPACE
0030..0039    ; ASCII_Hex_Digit # Nd  [10] DIGIT ZERO..DIGIT NINE
0030..0039    ; Hex_Digit # Nd  [10] DIGIT ZERO..DIGIT NINE
0041          ; Hex_Digit # L&       LATIN CAPITAL LETTER A
0300          ; Diacritic # Mn       COMBINING GRAVE ACCENT
3400..4DBF    ; Ideographic # Lo [6592] CJK UNIFIED IDEOGRAPH-3400..CJK UNIFIED IDEOGRAPH-4DBF
3400..4DBF    ; Unified_Ideograph # Lo [6592] CJK UNIFIED IDEOGRAPH-3400..CJK UNIFIED IDEOGRAPH-4DBF
FDD0..FDEF    ; Noncharacter_Code_Point # Cn  [32] <noncharacter-FDD0>..<noncharacter-FDEF>
10FFFE..10FFFF; Noncharacter_Code_Point # Cn   [2] <noncharacter-10FFFE>..<noncharacter-10FFFF>
";

pub const DERIVED_CORE_PROPERTIES : &str = "\
# DerivedCoreProperties-15.1.0.txt

0041          ; Alphabetic # L&       LATIN CAPITAL LETTER A
0061          ; Alphabetic # L&       LATIN SMALL LETTER A
0041          ; Uppercase # L&       LATIN CAPITAL LETTER A
0061          ; Lowercase # L&       LATIN SMALL LETTER A
3400..4DBF    ; Alphabetic # Lo [6592] CJK UNIFIED IDEOGRAPH-3400..CJK UNIFIED IDEOGRAPH-4DBF
0300          ; Grapheme_Extend # Mn       COMBINING GRAVE ACCENT
0300          ; InCB; Extend # Mn       COMBINING GRAVE ACCENT
";

pub const EMOJI_DATA : &str = "\
# emoji-data.txt

0030..0039    ; Emoji_Component      # E0.0   [10] (0️..9️)    digit zero..digit nine
1F600         ; Emoji                # E1.0   [1] (😀)       grinning face
1F600         ; Emoji_Presentation   # E1.0   [1] (😀)       grinning face
1F000..1F0FF  ; Extended_Pictographic# E0.0 [256] (🀀..🃿)    <reserved-1F000>..<reserved-1F0FF>
1F600         ; Extended_Pictographic# E1.0   [1] (😀)       grinning face
";

pub const NAME_ALIASES : &str = "\
# NameAliases-15.1.0.txt
0000;NULL;control
0000;NUL;abbreviation
0020;SP;abbreviation
";

pub const NAMES_LIST : &str = "\
@@@\tThe Unicode Standard 15.1
@@\t0000\tC0 Controls and Basic Latin (Basic Latin)\t007F
@\t\tC0 controls
0000\t<control>
\t= NULL
0028\tLEFT PARENTHESIS
\t= opening parenthesis
\tx 0029
0041\tLATIN CAPITAL LETTER A
\tx (latin small letter a - 0061)
\tx (mathematical bold capital a - 1D400)
4E00\t<CJK Ideograph, First>
\tx (a cross reference on a range - 4E01)
";

pub const BLOCKS : &str = "\
# Blocks-15.1.0.txt
0000..007F; Basic Latin
0080..00FF; Latin-1 Supplement
0300..036F; Combining Diacritical Marks
0D00..0D7F; Malayalam
2150..218F; Number Forms
3400..4DBF; CJK Unified Ideographs Extension A
4E00..9FFF; CJK Unified Ideographs
AC00..D7AF; Hangul Syllables
F900..FAFF; CJK Compatibility Ideographs
1F600..1F64F; Emoticons
20000..2A6DF; CJK Unified Ideographs Extension B
";

pub const UNIHAN_NUMERIC_VALUES : &str = "\
U+4E00\tkPrimaryNumeric\t1
U+4E07\tkPrimaryNumeric\t10000
U+842C\tkAccountingNumeric\t10000
";

pub const UNIHAN_READINGS : &str = "\
U+4E00\tkDefinition\tone; a, an; alone
U+4E00\tkMandarin\tyī
U+4E00\tkCantonese\tjat1
U+4E07\tkDefinition\tten thousand; innumerable
U+4E07\tkTang\tmiuɛn
";

pub const UNIHAN_VARIANTS : &str = "\
U+4E07\tkTraditionalVariant\tU+842C
U+842C\tkSimplifiedVariant\tU+4E07
";

pub const UNIHAN_IRG_SOURCES : &str = "\
U+4E00\tkRSUnicode\t1.0
U+4E07\tkRSUnicode\t1.2
U+842C\tkRSUnicode\t140.9
U+2A6D6\tkRSUnicode\t213''.-1 9.2 120'.4
";

/// `CJKRadicals.txt` with all 214 radicals, radical 90 has a simplified form.
pub fn cjk_radicals() -> String {
	let mut radicals = String::from("# CJKRadicals-15.1.0.txt\n\n");
	for index in 1..=214u32 {
		let character = if index == 214 { 0x9FA0 } else { 0x4E00 + index - 1 };
		if index == 90 {
			radicals.push_str("90'; 2EA6; 4E2C\n");
		}
		radicals.push_str(&format!("{index}; {:04X}; {character:04X}\n", 0x2F00 + index - 1));
	}
	radicals
}

pub fn source() -> MemorySource {
	MemorySource::new()
		.with_file(ucd::UNICODE_DATA, UNICODE_DATA)
		.with_file(ucd::PROP_LIST, PROP_LIST)
		.with_file(ucd::DERIVED_CORE_PROPERTIES, DERIVED_CORE_PROPERTIES)
		.with_file(ucd::EMOJI_DATA, EMOJI_DATA)
		.with_file(ucd::CJK_RADICALS, cjk_radicals())
		.with_file(ucd::NAME_ALIASES, NAME_ALIASES)
		.with_file(ucd::NAMES_LIST, NAMES_LIST)
		.with_file(ucd::BLOCKS, BLOCKS)
		.with_file(unihan::NUMERIC_VALUES, UNIHAN_NUMERIC_VALUES)
		.with_file(unihan::READINGS, UNIHAN_READINGS)
		.with_file(unihan::VARIANTS, UNIHAN_VARIANTS)
		.with_file(unihan::IRG_SOURCES, UNIHAN_IRG_SOURCES)
}

pub fn builder() -> UnicodeDataBuilder {
	UnicodeDataBuilder::build(&source(), VERSION).unwrap()
}

pub fn database() -> UnicodeDatabase {
	UnicodeDatabase::new(builder().to_bytes().unwrap()).unwrap()
}
