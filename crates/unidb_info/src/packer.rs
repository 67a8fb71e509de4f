//! Dense remapping of CJK ideograph code points.
//!
//! Unihan records are keyed by a packed ordinal instead of their code point: the CJK ranges are laid out one after
//! another, most frequently used first, so common ideographs get small ordinals and the table has no gaps.

use crate::{Error, Result, CodePointRange};

struct Segment {
	range: CodePointRange,
	base:  u32,
}

const fn segments<const N: usize>(ranges: [CodePointRange; N]) -> [Segment; N] {
	let mut segments = [const { Segment { range: CodePointRange::new(0, 0), base: 0 } }; N];
	let mut base = 0;
	let mut i = 0;
	while i < N {
		segments[i] = Segment { range: ranges[i], base };
		base += ranges[i].len();
		i += 1;
	}
	segments
}

/// Ranges in packed order.
const SEGMENTS : [Segment; 9] = segments([
	// CJK Unified Ideographs
	CodePointRange::new(0x4E00, 0x9FFF),
	// Extension A
	CodePointRange::new(0x3400, 0x4DBF),
	// CJK Compatibility Ideographs
	CodePointRange::new(0xF900, 0xFAFF),
	// Extension B
	CodePointRange::new(0x20000, 0x2A6DF),
	// Extension C, D, E and F
	CodePointRange::new(0x2A700, 0x2EBEF),
	// CJK Compatibility Ideographs Supplement
	CodePointRange::new(0x2F800, 0x2FA1F),
	// Extension G
	CodePointRange::new(0x30000, 0x3134F),
	// Extension H
	CodePointRange::new(0x31350, 0x323AF),
	// Extension I
	CodePointRange::new(0x2EBF0, 0x2EE5F),
]);

/// Number of packed ordinals, every value below this unpacks to a code point.
pub const PACKED_COUNT : u32 = {
	let last = &SEGMENTS[SEGMENTS.len() - 1];
	last.base + last.range.len()
};

/// Check whether a code point can be packed.
pub fn is_packable(code_point: u32) -> bool {
	SEGMENTS.iter().any(|segment| segment.range.contains(code_point))
}

/// Map a CJK ideograph code point to its packed ordinal.
pub fn pack(code_point: u32) -> Result<u32> {
	SEGMENTS.iter()
		.find(|segment| segment.range.contains(code_point))
		.map(|segment| segment.base + code_point - segment.range.first)
		.ok_or(Error::NotUnihanCodePoint(code_point))
}

/// Map a packed ordinal back to its code point.
pub fn unpack(packed: u32) -> Result<u32> {
	SEGMENTS.iter()
		.find(|segment| packed >= segment.base && packed - segment.base < segment.range.len())
		.map(|segment| segment.range.first + packed - segment.base)
		.ok_or(Error::CorruptData("packed Unihan code point out of range"))
}
