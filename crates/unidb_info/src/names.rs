//! Algorithmic character names.
//!
//! Hangul syllables and most ideographs are not named individually in the data, their names are generated from the
//! code point when requested.

use crate::{Error, Result, CodePointRange};

pub const HANGUL_S_BASE : u32 = 0xAC00;
pub const HANGUL_L_COUNT : u32 = 19;
pub const HANGUL_V_COUNT : u32 = 21;
pub const HANGUL_T_COUNT : u32 = 28;
pub const HANGUL_N_COUNT : u32 = HANGUL_V_COUNT * HANGUL_T_COUNT;
pub const HANGUL_S_COUNT : u32 = HANGUL_L_COUNT * HANGUL_N_COUNT;

/// All Hangul syllables.
pub const HANGUL_SYLLABLES : CodePointRange = CodePointRange::new(HANGUL_S_BASE, HANGUL_S_BASE + HANGUL_S_COUNT - 1);

const HANGUL_PREFIX : &[u8] = b"HANGUL SYLLABLE ";

// Every jamo short name is a slice of this buffer.
const JAMO_BUFFER : &[u8] = b"WAEYAEWEOYEOLGGGYILTGSNHEUBSLBNJSSLMLPLHJJLSDDYOWIOEBBNGYUCRK";

// (offset, length) into `JAMO_BUFFER`
const LEAD_JAMO : [(u8, u8); HANGUL_L_COUNT as usize] = [
	(13, 1), (13, 2), (22, 1), (44, 1), (44, 2), (59, 1), (35, 1), (26, 1), (52, 2), (21, 1),
	(32, 2), (0, 0), (31, 1), (40, 2), (58, 1), (60, 1), (19, 1), (37, 1), (23, 1),
];
const VOWEL_JAMO : [(u8, u8); HANGUL_V_COUNT as usize] = [
	(1, 1), (1, 2), (3, 2), (3, 3), (7, 2), (2, 1), (9, 3), (9, 2), (8, 1), (0, 2),
	(0, 3), (50, 2), (46, 2), (25, 1), (6, 3), (6, 2), (48, 2), (56, 2), (24, 2), (16, 2),
	(17, 1),
];
const TRAIL_JAMO : [(u8, u8); HANGUL_T_COUNT as usize] = [
	(0, 0), (13, 1), (13, 2), (20, 2), (22, 1), (30, 2), (22, 2), (44, 1), (12, 1), (12, 2),
	(34, 2), (28, 2), (42, 2), (18, 2), (36, 2), (38, 2), (35, 1), (26, 1), (26, 2), (21, 1),
	(32, 2), (54, 2), (31, 1), (58, 1), (60, 1), (19, 1), (37, 1), (23, 1),
];

fn jamo(table: &[(u8, u8)], idx: u32) -> &'static [u8] {
	let (offset, len) = table[idx as usize];
	&JAMO_BUFFER[offset as usize..(offset + len) as usize]
}

fn hangul_jamo(code_point: u32) -> Result<[&'static [u8]; 3]> {
	if !HANGUL_SYLLABLES.contains(code_point) {
		return Err(Error::NotHangulSyllable(code_point));
	}
	let s = code_point - HANGUL_S_BASE;
	Ok([
		jamo(&LEAD_JAMO, s / HANGUL_N_COUNT),
		jamo(&VOWEL_JAMO, (s % HANGUL_N_COUNT) / HANGUL_T_COUNT),
		jamo(&TRAIL_JAMO, s % HANGUL_T_COUNT),
	])
}

/// Length in bytes of the name of a Hangul syllable.
pub fn hangul_name_len(code_point: u32) -> Result<usize> {
	let parts = hangul_jamo(code_point)?;
	Ok(HANGUL_PREFIX.len() + parts.iter().map(|part| part.len()).sum::<usize>())
}

/// Write the name of a Hangul syllable, e.g. `HANGUL SYLLABLE PWILH` for U+D4DB, returning the number of bytes written.
pub fn write_hangul_name(code_point: u32, dest: &mut [u8]) -> Result<usize> {
	let parts = hangul_jamo(code_point)?;
	let required = HANGUL_PREFIX.len() + parts.iter().map(|part| part.len()).sum::<usize>();
	if dest.len() < required {
		return Err(Error::BufferTooSmall { required });
	}

	let mut pos = 0;
	for part in [HANGUL_PREFIX].into_iter().chain(parts) {
		dest[pos..pos + part.len()].copy_from_slice(part);
		pos += part.len();
	}
	Ok(pos)
}

//==============================================================

/// Range of ideographs whose names are `"<PREFIX>-<HEX CODE POINT>"`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SequenceNameRange {
	pub range:  CodePointRange,
	pub prefix: &'static str,
}

const CJK_UNIFIED : &str = "CJK UNIFIED IDEOGRAPH";
const CJK_COMPATIBILITY : &str = "CJK COMPATIBILITY IDEOGRAPH";

/// Sequence named ranges, sorted by code point.
pub const SEQUENCE_NAME_RANGES : [SequenceNameRange; 14] = [
	SequenceNameRange { range: CodePointRange::new(0x3400, 0x4DBF), prefix: CJK_UNIFIED },
	SequenceNameRange { range: CodePointRange::new(0x4E00, 0x9FFF), prefix: CJK_UNIFIED },
	SequenceNameRange { range: CodePointRange::new(0xF900, 0xFAFF), prefix: CJK_COMPATIBILITY },
	SequenceNameRange { range: CodePointRange::new(0x13460, 0x143FF), prefix: "EGYPTIAN HIEROGLYPH" },
	SequenceNameRange { range: CodePointRange::new(0x17000, 0x187FF), prefix: "TANGUT IDEOGRAPH" },
	SequenceNameRange { range: CodePointRange::new(0x18B00, 0x18CFF), prefix: "KHITAN SMALL SCRIPT CHARACTER" },
	SequenceNameRange { range: CodePointRange::new(0x18D00, 0x18D7F), prefix: "TANGUT IDEOGRAPH" },
	SequenceNameRange { range: CodePointRange::new(0x1B170, 0x1B2FF), prefix: "NUSHU CHARACTER" },
	SequenceNameRange { range: CodePointRange::new(0x20000, 0x2A6DF), prefix: CJK_UNIFIED },
	SequenceNameRange { range: CodePointRange::new(0x2A700, 0x2EBEF), prefix: CJK_UNIFIED },
	SequenceNameRange { range: CodePointRange::new(0x2EBF0, 0x2EE5F), prefix: CJK_UNIFIED },
	SequenceNameRange { range: CodePointRange::new(0x2F800, 0x2FA1F), prefix: CJK_COMPATIBILITY },
	SequenceNameRange { range: CodePointRange::new(0x30000, 0x3134F), prefix: CJK_UNIFIED },
	SequenceNameRange { range: CodePointRange::new(0x31350, 0x323AF), prefix: CJK_UNIFIED },
];

/// Get the prefix used to generate the name of a code point, if it lies in a sequence named range.
pub fn sequence_prefix(code_point: u32) -> Option<&'static str> {
	SEQUENCE_NAME_RANGES.binary_search_by(|entry| entry.range.compare_code_point(code_point))
		.ok()
		.map(|idx| SEQUENCE_NAME_RANGES[idx].prefix)
}

fn hex_digits(code_point: u32) -> usize {
	if code_point > 0xFFFFF {
		6
	} else if code_point > 0xFFFF {
		5
	} else {
		4
	}
}

/// Length in bytes of a sequence name, `None` if the code point is not in a sequence named range.
pub fn sequence_name_len(code_point: u32) -> Option<usize> {
	sequence_prefix(code_point).map(|prefix| prefix.len() + 1 + hex_digits(code_point))
}

/// Write `"<prefix>-<hex>"` with 4 to 6 uppercase hex digits, returning the number of bytes written.
pub fn write_sequence_name(prefix: &str, code_point: u32, dest: &mut [u8]) -> Result<usize> {
	const HEX : &[u8; 16] = b"0123456789ABCDEF";

	let digits = hex_digits(code_point);
	let required = prefix.len() + 1 + digits;
	if dest.len() < required {
		return Err(Error::BufferTooSmall { required });
	}

	dest[..prefix.len()].copy_from_slice(prefix.as_bytes());
	dest[prefix.len()] = b'-';
	let hex = &mut dest[prefix.len() + 1..required];
	for (i, byte) in hex.iter_mut().rev().enumerate() {
		*byte = HEX[(code_point >> (i * 4)) as usize & 0xF];
	}
	Ok(required)
}
