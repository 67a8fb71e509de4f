//! Property values stored in character records.
//!
//! Enums carry the short names used in the data files, `parse` accepts exactly those names.

use core::fmt;

use unidb_macros::{flags, EnumCount, EnumDisplay, EnumFromIndex, EnumFromName};

/// `General_Category`, stored as its index.
///
/// Variants are grouped by major class, in the order of the table in UAX #44, so group checks are range checks.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumCount, EnumFromIndex, EnumFromName, EnumDisplay)]
pub enum Category {
	#[parse_name("Lu")] #[display("Lu")] UppercaseLetter,
	#[parse_name("Ll")] #[display("Ll")] LowercaseLetter,
	/// Digraphs like U+01C5, starting with an uppercase part.
	#[parse_name("Lt")] #[display("Lt")] TitlecaseLetter,
	#[parse_name("Lm")] #[display("Lm")] ModifierLetter,
	/// Syllables, ideographs and letters of unicase scripts.
	#[parse_name("Lo")] #[display("Lo")] OtherLetter,
	/// Combining mark without advance width.
	#[parse_name("Mn")] #[display("Mn")] NonspacingMark,
	/// Combining mark with advance width.
	#[parse_name("Mc")] #[display("Mc")] SpacingMark,
	#[parse_name("Me")] #[display("Me")] EnclosingMark,
	#[parse_name("Nd")] #[display("Nd")] DecimalNumber,
	/// Roman numerals and other numbers that look like letters.
	#[parse_name("Nl")] #[display("Nl")] LetterNumber,
	/// Fractions, superscripts and other numbers.
	#[parse_name("No")] #[display("No")] OtherNumber,
	#[parse_name("Pc")] #[display("Pc")] ConnectorPunctuation,
	#[parse_name("Pd")] #[display("Pd")] DashPunctuation,
	#[parse_name("Ps")] #[display("Ps")] OpenPunctuation,
	#[parse_name("Pe")] #[display("Pe")] ClosePunctuation,
	/// Opening quotation mark, which side it is on depends on the language.
	#[parse_name("Pi")] #[display("Pi")] InitialPunctuation,
	/// Closing quotation mark, which side it is on depends on the language.
	#[parse_name("Pf")] #[display("Pf")] FinalPunctuation,
	#[parse_name("Po")] #[display("Po")] OtherPunctuation,
	#[parse_name("Sm")] #[display("Sm")] MathSymbol,
	#[parse_name("Sc")] #[display("Sc")] CurrencySymbol,
	/// Spacing accents and other modifiers that aren't letters.
	#[parse_name("Sk")] #[display("Sk")] ModifierSymbol,
	#[parse_name("So")] #[display("So")] OtherSymbol,
	#[parse_name("Zs")] #[display("Zs")] SpaceSeparator,
	/// Only U+2028.
	#[parse_name("Zl")] #[display("Zl")] LineSeparator,
	/// Only U+2029.
	#[parse_name("Zp")] #[display("Zp")] ParagraphSeparator,
	#[parse_name("Cc")] #[display("Cc")] Control,
	#[parse_name("Cf")] #[display("Cf")] Format,
	#[parse_name("Cs")] #[display("Cs")] Surrogate,
	#[parse_name("Co")] #[display("Co")] PrivateUse,
	/// Reserved code points and noncharacters, the value of every code point without a record.
	#[parse_name("Cn")] #[display("Cn")] #[default] Unassigned,
}

impl Category {
	/// `L` group.
	pub const fn is_letter(self) -> bool {
		self.between(Category::UppercaseLetter, Category::OtherLetter)
	}

	/// `LC` group: `Lu`, `Ll` and `Lt`.
	pub const fn is_cased_letter(self) -> bool {
		self.between(Category::UppercaseLetter, Category::TitlecaseLetter)
	}

	pub const fn is_mark(self) -> bool {
		self.between(Category::NonspacingMark, Category::EnclosingMark)
	}

	pub const fn is_number(self) -> bool {
		self.between(Category::DecimalNumber, Category::OtherNumber)
	}

	pub const fn is_punctuation(self) -> bool {
		self.between(Category::ConnectorPunctuation, Category::OtherPunctuation)
	}

	pub const fn is_symbol(self) -> bool {
		self.between(Category::MathSymbol, Category::OtherSymbol)
	}

	pub const fn is_separator(self) -> bool {
		self.between(Category::SpaceSeparator, Category::ParagraphSeparator)
	}

	/// `C` group, which includes unassigned code points.
	pub const fn is_other(self) -> bool {
		self.between(Category::Control, Category::Unassigned)
	}

	const fn between(self, first: Category, last: Category) -> bool {
		self as u8 >= first as u8 && self as u8 <= last as u8
	}
}

/// `Canonical_Combining_Class`.
///
/// Any byte is a valid class, the associated constants only name the classes that have a fixed meaning.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct CanonicalCombiningClass(pub u8);

impl CanonicalCombiningClass {
	/// Starters, and marks that never reorder.
	pub const NOT_REORDERED        : Self = Self(0);
	pub const OVERLAY              : Self = Self(1);
	pub const HAN_READING          : Self = Self(6);
	pub const NUKTA                : Self = Self(7);
	pub const KANA_VOICING         : Self = Self(8);
	pub const VIRAMA               : Self = Self(9);
	pub const ATTACHED_BELOW_LEFT  : Self = Self(200);
	pub const ATTACHED_BELOW       : Self = Self(202);
	pub const ATTACHED_ABOVE       : Self = Self(214);
	pub const ATTACHED_ABOVE_RIGHT : Self = Self(216);
	pub const BELOW_LEFT           : Self = Self(218);
	pub const BELOW                : Self = Self(220);
	pub const BELOW_RIGHT          : Self = Self(222);
	pub const LEFT                 : Self = Self(224);
	pub const RIGHT                : Self = Self(226);
	pub const ABOVE_LEFT           : Self = Self(228);
	pub const ABOVE                : Self = Self(230);
	pub const ABOVE_RIGHT          : Self = Self(232);
	/// Marks spanning the bottom of 2 base characters.
	pub const DOUBLE_BELOW         : Self = Self(233);
	/// Marks spanning the top of 2 base characters.
	pub const DOUBLE_ABOVE         : Self = Self(234);
	/// U+0345 COMBINING GREEK YPOGEGRAMMENI.
	pub const IOTA_SUBSCRIPT       : Self = Self(240);

	/// Classes 10..=199, assigned to individual marks of specific scripts.
	pub const fn is_fixed_position(self) -> bool {
		self.0 >= 10 && self.0 <= 199
	}
}

/// `Bidi_Class`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumFromIndex, EnumFromName)]
pub enum BidirectionalClass {
	// Strong
	#[parse_name("L")]   LeftToRight,
	#[parse_name("R")]   RightToLeft,
	/// Right-to-left letters of Arabic, Syriac and Thaana.
	#[parse_name("AL")]  ArabicLetter,
	// Weak
	#[parse_name("EN")]  EuropeanNumber,
	/// `+` and `-` signs.
	#[parse_name("ES")]  EuropeanSeparator,
	/// Currency, degree and percent signs, and other number suffixes.
	#[parse_name("ET")]  EuropeanTerminator,
	#[parse_name("AN")]  ArabicNumber,
	#[parse_name("CS")]  CommonSeparator,
	#[parse_name("NSM")] NonspacingMark,
	/// Default ignorables and controls that don't separate text.
	#[parse_name("BN")]  BoundaryNeutral,
	// Neutral
	#[parse_name("B")]   ParagraphSeparator,
	/// Tabs.
	#[parse_name("S")]   SegmentSeparator,
	#[parse_name("WS")]  WhiteSpace,
	#[parse_name("ON")]  OtherNeutral,
	// Explicit formatting characters, U+202A..=U+202E and U+2066..=U+2069
	#[parse_name("LRE")] LeftToRightEmbedding,
	#[parse_name("LRO")] LeftToRightOverride,
	#[parse_name("RLE")] RightToLeftEmbedding,
	#[parse_name("RLO")] RightToLeftOverride,
	#[parse_name("PDF")] PopDirectionalFormat,
	#[parse_name("LRI")] LeftToRightIsolate,
	#[parse_name("RLI")] RightToLeftIsolate,
	#[parse_name("FSI")] FirstStrongIsolate,
	#[parse_name("PDI")] PopDirectionalIsolate,
}

/// Tag of a decomposition mapping, canonical mappings are written without a tag.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumFromIndex, EnumFromName)]
pub enum DecompositionType {
	#[default]
	Canonical,
	#[parse_name("<font>")]     Font,
	#[parse_name("<noBreak>")]  NoBreak,
	#[parse_name("<initial>")]  Initial,
	#[parse_name("<medial>")]   Medial,
	#[parse_name("<final>")]    Final,
	#[parse_name("<isolated>")] Isolated,
	#[parse_name("<circle>")]   Circle,
	#[parse_name("<super>")]    Super,
	#[parse_name("<sub>")]      Sub,
	#[parse_name("<vertical>")] Vertical,
	#[parse_name("<wide>")]     Wide,
	#[parse_name("<narrow>")]   Narrow,
	#[parse_name("<small>")]    Small,
	#[parse_name("<square>")]   Square,
	#[parse_name("<fraction>")] Fraction,
	#[parse_name("<compat>")]   Compat,
}

/// Which of the 3 numeric fields of `UnicodeData.txt` a value came from.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumFromIndex)]
pub enum NumericType {
	#[default]
	None,
	/// Field 6, digits in a contiguous `0..=9` run usable in positional notation.
	Decimal,
	/// Field 7, digits that need special handling, like circled or superscript digits.
	Digit,
	/// Field 8, every other numeric value, possibly a fraction.
	Numeric,
}

/// Unihan property a numeric value of a Han character came from.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumFromIndex, EnumFromName)]
pub enum UnihanNumericType {
	#[default]
	None,
	#[parse_name("kPrimaryNumeric")]    Primary,
	/// Anti-fraud forms used when writing amounts of money.
	#[parse_name("kAccountingNumeric")] Accounting,
	#[parse_name("kOtherNumeric")]      Other,
}

/// Type of an entry in `NameAliases.txt`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumFromIndex, EnumFromName)]
pub enum NameAliasKind {
	/// Fixes a published name that contains a serious error.
	#[parse_name("correction")]   Correction,
	/// Name of a control function.
	#[parse_name("control")]      Control,
	#[parse_name("alternate")]    Alternate,
	/// Label of a C1 control that was documented but never standardized.
	#[parse_name("figment")]      Figment,
	#[parse_name("abbreviation")] Abbreviation,
}

/// Exact numeric value of a character.
///
/// Values are not reduced, `1/2` and `2/4` are different values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rational {
	pub numerator:   i64,
	pub denominator: u16,
}

impl Rational {
	pub const fn new(numerator: i64, denominator: u16) -> Self {
		Self { numerator, denominator }
	}

	/// Parse `N` or `N/D`, a zero denominator is rejected.
	pub fn parse(s: &str) -> Option<Self> {
		let (numerator, denominator) = s.split_once('/').unwrap_or((s, "1"));
		let denominator = denominator.trim().parse::<u16>().ok().filter(|den| *den != 0)?;
		Some(Self { numerator: numerator.trim().parse().ok()?, denominator })
	}

	pub fn to_f64(self) -> f64 {
		self.numerator as f64 / self.denominator as f64
	}
}

impl fmt::Display for Rational {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.numerator)?;
		match self.denominator {
			1 => Ok(()),
			den => write!(f, "/{den}"),
		}
	}
}

//==============================================================

/// Binary properties of `PropList.txt`.
#[flags(parse_from_name)]
pub enum ContributoryProperties {
	/// `0-9`, `A-F` and `a-f`.
	#[parse_name("ASCII_Hex_Digit")]                    AsciiHexDigit,
	#[parse_name("Bidi_Control")]                       BidiControl,
	Dash,
	Deprecated,
	Diacritic,
	/// Lengthens or repeats the preceding letter, like U+3005.
	Extender,
	/// Hex digits including their fullwidth forms.
	#[parse_name("Hex_Digit")]                          HexDigit,
	/// Only present in older data files.
	Hyphen,
	Ideographic,
	#[parse_name("ID_Compat_Math_Start")]               IdCompatMathStart,
	#[parse_name("ID_Compat_Math_Continue")]            IdCompatMathContinue,
	#[parse_name("IDS_Unary_Operator")]                 IdsUnaryOperator,
	#[parse_name("IDS_Binary_Operator")]                IdsBinaryOperator,
	#[parse_name("IDS_Trinary_Operator")]               IdsTrinaryOperator,
	/// ZWJ and ZWNJ.
	#[parse_name("Join_Control")]                       JoinControl,
	/// Thai, Lao and Tai Viet vowels written before the consonant they follow in speech.
	#[parse_name("Logical_Order_Exception")]            LogicalOrderException,
	#[parse_name("Modifier_Combining_Mark")]            ModifierCombiningMark,
	#[parse_name("Noncharacter_Code_Point")]            NoncharacterCodePoint,
	// Contributors to the derived core properties
	#[parse_name("Other_Alphabetic")]                   OtherAlphabetic,
	#[parse_name("Other_Default_Ignorable_Code_Point")] OtherDefaultIgnorableCodePoint,
	#[parse_name("Other_Grapheme_Extend")]              OtherGraphemeExtend,
	#[parse_name("Other_ID_Continue")]                  OtherIdContinue,
	#[parse_name("Other_ID_Start")]                     OtherIdStart,
	#[parse_name("Other_Lowercase")]                    OtherLowercase,
	#[parse_name("Other_Math")]                         OtherMath,
	#[parse_name("Other_Uppercase")]                    OtherUppercase,
	#[parse_name("Pattern_Syntax")]                     PatternSyntax,
	#[parse_name("Pattern_White_Space")]                PatternWhiteSpace,
	/// Number signs like U+0600 that span the digits after them.
	#[parse_name("Prepended_Concatenation_Mark")]       PrependedConcatenationMark,
	#[parse_name("Quotation_Mark")]                     QuotationMark,
	/// CJK radicals usable in ideographic description sequences.
	Radical,
	/// U+1F1E6..=U+1F1FF.
	#[parse_name("Regional_Indicator")]                 RegionalIndicator,
	#[parse_name("Sentence_Terminal")]                  SentenceTerminal,
	/// Loses its dot when an accent is placed above, like `i`.
	#[parse_name("Soft_Dotted")]                        SoftDotted,
	#[parse_name("Terminal_Punctuation")]               TerminalPunctuation,
	#[parse_name("Unified_Ideograph")]                  UnifiedIdeograph,
	#[parse_name("Variation_Selector")]                 VariationSelector,
	#[parse_name("White_Space")]                        WhiteSpace,
}

/// Properties of `DerivedCoreProperties.txt`.
///
/// `Indic_Conjunct_Break` takes the last 2 used bits, read it with [`CoreProperties::indic_conjunct_break`].
#[flags(u32, parse_from_name)]
pub enum CoreProperties {
	Math,
	Alphabetic,
	Lowercase,
	Uppercase,
	Cased,
	#[parse_name("Case_Ignorable")]               CaseIgnorable,
	#[parse_name("Changes_When_Lowercased")]      ChangesWhenLowercased,
	#[parse_name("Changes_When_Uppercased")]      ChangesWhenUppercased,
	#[parse_name("Changes_When_Titlecased")]      ChangesWhenTitlecased,
	#[parse_name("Changes_When_Casefolded")]      ChangesWhenCasefolded,
	#[parse_name("Changes_When_Casemapped")]      ChangesWhenCasemapped,
	#[parse_name("ID_Start")]                     IdStart,
	#[parse_name("ID_Continue")]                  IdContinue,
	#[parse_name("XID_Start")]                    XidStart,
	#[parse_name("XID_Continue")]                 XidContinue,
	#[parse_name("Default_Ignorable_Code_Point")] DefaultIgnorableCodePoint,
	#[parse_name("Grapheme_Extend")]              GraphemeExtend,
	#[parse_name("Grapheme_Base")]                GraphemeBase,
	/// Only present in older data files.
	#[parse_name("Grapheme_Link")]                GraphemeLink,
	#[parse_name("InCB=Linker")]                  InCbLinker,
	#[parse_name("InCB=Consonant")]               InCbConsonant,
	#[parse_name("InCB=Extend")]                  InCbExtend = InCbLinker | InCbConsonant,
}

/// Number of bits used by [`CoreProperties`] in the packed core+emoji word.
pub const CORE_PROPERTY_BITS : u32 = 22;
const_assert!(CoreProperties::all().bits() < 1 << CORE_PROPERTY_BITS);

impl CoreProperties {
	const INCB_SHIFT : u32 = 19;

	pub const fn indic_conjunct_break(self) -> IndicConjunctBreak {
		match (self.bits() >> Self::INCB_SHIFT) & 0x3 {
			1 => IndicConjunctBreak::Linker,
			2 => IndicConjunctBreak::Consonant,
			3 => IndicConjunctBreak::Extend,
			_ => IndicConjunctBreak::None,
		}
	}

	/// Flags storing an `Indic_Conjunct_Break` value.
	pub const fn from_indic_conjunct_break(value: IndicConjunctBreak) -> Self {
		match value {
			IndicConjunctBreak::None      => CoreProperties::none(),
			IndicConjunctBreak::Linker    => CoreProperties::InCbLinker,
			IndicConjunctBreak::Consonant => CoreProperties::InCbConsonant,
			IndicConjunctBreak::Extend    => CoreProperties::InCbExtend,
		}
	}
}

/// `Indic_Conjunct_Break`, written as `InCB; <value>` in `DerivedCoreProperties.txt`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumFromName)]
pub enum IndicConjunctBreak {
	Linker,
	Consonant,
	Extend,
	#[default]
	None,
}

/// Properties of `emoji-data.txt`.
#[flags(parse_from_name)]
pub enum EmojiProperties {
	Emoji,
	/// Shown as an emoji by default, instead of as text.
	#[parse_name("Emoji_Presentation")]    EmojiPresentation,
	/// Skin tone modifiers.
	#[parse_name("Emoji_Modifier")]        EmojiModifier,
	#[parse_name("Emoji_Modifier_Base")]   EmojiModifierBase,
	/// Parts of emoji sequences, like keycap digits and tag characters.
	#[parse_name("Emoji_Component")]       EmojiComponent,
	/// Pictographs, and reserved code points in blocks set aside for them.
	#[parse_name("Extended_Pictographic")] ExtendedPictographic,
}

/// Number of bits used by [`EmojiProperties`] in the packed core+emoji word.
pub const EMOJI_PROPERTY_BITS : u32 = 6;
const_assert!(EmojiProperties::all().bits() < 1 << EMOJI_PROPERTY_BITS);

#[cfg(test)]
mod tests {
	use super::*;
	use unidb_base::{EnumCountT, EnumFromIndexT, EnumFromNameT};

	#[test]
	pub fn category_names() {
		assert_eq!(Category::COUNT, 30);
		assert_eq!(Category::parse("No"), Some(Category::OtherNumber));
		assert_eq!(Category::parse("LC"), None);
		assert_eq!(Category::from_idx(Category::Unassigned as usize), Some(Category::Unassigned));
		assert_eq!(Category::from_idx(30), None);
		assert_eq!(Category::OtherNumber.to_string(), "No");
		assert!(Category::TitlecaseLetter.is_cased_letter());
		assert!(!Category::ModifierLetter.is_cased_letter());
		assert!(Category::OtherLetter.is_letter());
		assert!(Category::OtherNumber.is_number());
		assert!(Category::Unassigned.is_other());
		assert!(!Category::OtherSymbol.is_other());
		assert_eq!(Category::default(), Category::Unassigned);
	}

	#[test]
	pub fn property_flags() {
		let props = ContributoryProperties::parse("White_Space | Pattern_White_Space").unwrap();
		assert!(props.contains(ContributoryProperties::WhiteSpace));
		assert!(!props.contains(ContributoryProperties::Dash));
		assert!(ContributoryProperties::parse("Not_A_Property").is_none());
		assert!(ContributoryProperties::all().bits() > u32::MAX as u64);

		assert_eq!(CoreProperties::from_indic_conjunct_break(IndicConjunctBreak::Extend).indic_conjunct_break(), IndicConjunctBreak::Extend);
		assert_eq!((CoreProperties::Alphabetic | CoreProperties::InCbLinker).indic_conjunct_break(), IndicConjunctBreak::Linker);
		assert_eq!(CoreProperties::Math.indic_conjunct_break(), IndicConjunctBreak::None);
		assert_eq!(format!("{:?}", EmojiProperties::Emoji | EmojiProperties::EmojiComponent), "Emoji | EmojiComponent");
		assert_eq!(format!("{:?}", EmojiProperties::none()), "None");
	}

	#[test]
	pub fn rational_values() {
		assert_eq!(Rational::parse("1/16"), Some(Rational::new(1, 16)));
		assert_eq!(Rational::parse("-1/2"), Some(Rational::new(-1, 2)));
		assert_eq!(Rational::parse("1000000000000"), Some(Rational::new(1_000_000_000_000, 1)));
		assert_eq!(Rational::parse("1/0"), None);
		assert_eq!(Rational::parse("1/x"), None);
		assert_ne!(Rational::new(1, 2), Rational::new(2, 4));
		assert_eq!(Rational::new(1, 320).to_string(), "1/320");
		assert_eq!(Rational::new(-7, 1).to_string(), "-7");
	}

	#[test]
	pub fn enum_names() {
		assert_eq!(BidirectionalClass::parse("NSM"), Some(BidirectionalClass::NonspacingMark));
		assert_eq!(BidirectionalClass::from_idx(BidirectionalClass::PopDirectionalIsolate as usize), Some(BidirectionalClass::PopDirectionalIsolate));
		assert_eq!(DecompositionType::parse("<fraction>"), Some(DecompositionType::Fraction));
		assert_eq!(DecompositionType::parse("<unknown>"), None);
		assert_eq!(NameAliasKind::parse("figment"), Some(NameAliasKind::Figment));
		assert_eq!(UnihanNumericType::parse("kOtherNumeric"), Some(UnihanNumericType::Other));
		assert_eq!(IndicConjunctBreak::parse("Consonant"), Some(IndicConjunctBreak::Consonant));
	}
}
