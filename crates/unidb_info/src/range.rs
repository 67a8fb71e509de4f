//! Code point ranges and the sorted range index used by every code point keyed table.

use core::{cmp::Ordering, fmt};

/// Inclusive range of code points.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CodePointRange {
	pub first: u32,
	pub last:  u32,
}

impl CodePointRange {
	pub const fn new(first: u32, last: u32) -> Self {
		Self { first, last }
	}

	pub const fn single(code_point: u32) -> Self {
		Self { first: code_point, last: code_point }
	}

	pub const fn is_single(&self) -> bool {
		self.first == self.last
	}

	/// Number of code points in the range.
	pub const fn len(&self) -> u32 {
		self.last - self.first + 1
	}

	pub const fn contains(&self, code_point: u32) -> bool {
		self.first <= code_point && code_point <= self.last
	}

	/// Check if `other` lies completely inside this range.
	pub const fn contains_range(&self, other: CodePointRange) -> bool {
		self.first <= other.first && other.last <= self.last
	}

	pub const fn intersects(&self, other: CodePointRange) -> bool {
		self.first <= other.last && other.first <= self.last
	}

	/// Order of the range relative to a code point: `Less` when the range lies before it, `Greater` when after it.
	pub const fn compare_code_point(&self, code_point: u32) -> Ordering {
		if self.last < code_point {
			Ordering::Less
		} else if self.first > code_point {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	}

	/// Order of the range relative to another range, overlapping ranges compare `Equal`.
	pub const fn compare_range(&self, other: CodePointRange) -> Ordering {
		if self.last < other.first {
			Ordering::Less
		} else if self.first > other.last {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = u32> {
		self.first..=self.last
	}
}

impl fmt::Debug for CodePointRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_single() {
			write!(f, "CodePointRange({:#07X}         )", self.first)
		} else {
			write!(f, "CodePointRange({:#07X}, {:#07X})", self.first, self.last)
		}
	}
}

impl fmt::Display for CodePointRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_single() {
			write!(f, "U+{:04X}", self.first)
		} else {
			write!(f, "U+{:04X}..U+{:04X}", self.first, self.last)
		}
	}
}

//==============================================================

/// An entry that is keyed by a code point range.
pub trait RangeKeyed {
	fn range(&self) -> CodePointRange;
}

impl RangeKeyed for CodePointRange {
	fn range(&self) -> CodePointRange {
		*self
	}
}

/// A range could not be inserted, because it overlaps the entry at index `existing`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RangeOverlap {
	pub existing: usize,
}

/// Number of leading entries whose index equals their (single) code point.
pub fn max_contiguous_index<T: RangeKeyed>(entries: &[T]) -> usize {
	extend_contiguous(entries, 0)
}

fn extend_contiguous<T: RangeKeyed>(entries: &[T], mut max_contiguous: usize) -> usize {
	while let Some(entry) = entries.get(max_contiguous) {
		if entry.range() != CodePointRange::single(max_contiguous as u32) {
			break;
		}
		max_contiguous += 1;
	}
	max_contiguous
}

/// Find the index of the entry containing `code_point`.
///
/// Entries below `max_contiguous` are indexed directly by code point, the rest is binary searched.
pub fn find_index<T: RangeKeyed>(entries: &[T], max_contiguous: usize, code_point: u32) -> Option<usize> {
	if (code_point as usize) < max_contiguous {
		return Some(code_point as usize);
	}
	let tail = entries.get(max_contiguous..)?;
	tail.binary_search_by(|entry| entry.range().compare_code_point(code_point))
		.ok()
		.map(|idx| idx + max_contiguous)
}

/// Find the index a range should be inserted at to keep the entries sorted.
pub fn find_insertion_index<T: RangeKeyed>(entries: &[T], range: CodePointRange) -> Result<usize, RangeOverlap> {
	match entries.binary_search_by(|entry| entry.range().compare_range(range)) {
		Ok(existing) => Err(RangeOverlap { existing }),
		Err(idx) => Ok(idx),
	}
}

/// Check that entries are sorted ascending and don't overlap, returning the index of the first offending entry.
pub fn validate_sorted<T: RangeKeyed>(entries: &[T]) -> Result<(), usize> {
	for (idx, pair) in entries.windows(2).enumerate() {
		let (prev, next) = (pair[0].range(), pair[1].range());
		if prev.first > prev.last || prev.last >= next.first {
			return Err(idx + 1);
		}
	}
	match entries.last() {
		Some(entry) if entry.range().first > entry.range().last => Err(entries.len() - 1),
		_ => Ok(()),
	}
}

/// Sorted table of non-overlapping range keyed entries.
#[derive(Clone, Debug)]
pub struct RangeIndex<T> {
	entries:        Vec<T>,
	max_contiguous: usize,
}

impl<T: RangeKeyed> RangeIndex<T> {
	pub const fn new() -> Self {
		Self { entries: Vec::new(), max_contiguous: 0 }
	}

	/// Create an index from entries that are expected to be sorted, returning the index of the first offending entry when they are not.
	pub fn from_sorted(entries: Vec<T>) -> Result<Self, usize> {
		validate_sorted(&entries)?;
		let max_contiguous = max_contiguous_index(&entries);
		Ok(Self { entries, max_contiguous })
	}

	/// Insert an entry, the index is left untouched when the entry overlaps an existing one.
	pub fn insert(&mut self, entry: T) -> Result<usize, RangeOverlap> {
		let idx = find_insertion_index(&self.entries, entry.range())?;
		self.entries.insert(idx, entry);
		if idx <= self.max_contiguous {
			self.max_contiguous = extend_contiguous(&self.entries, idx.min(self.max_contiguous));
		}
		Ok(idx)
	}

	/// Remove the entry at `idx`.
	pub fn remove(&mut self, idx: usize) -> T {
		let entry = self.entries.remove(idx);
		if idx < self.max_contiguous {
			self.max_contiguous = idx;
		}
		entry
	}

	pub fn find(&self, code_point: u32) -> Option<usize> {
		find_index(&self.entries, self.max_contiguous, code_point)
	}

	pub fn get(&self, code_point: u32) -> Option<&T> {
		self.find(code_point).map(|idx| &self.entries[idx])
	}

	/// Get an entry by index.
	///
	/// The range of the entry must not be modified through the returned reference.
	pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
		self.entries.get_mut(idx)
	}

	pub fn entries(&self) -> &[T] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn max_contiguous_index(&self) -> usize {
		self.max_contiguous
	}

	pub fn iter(&self) -> core::slice::Iter<'_, T> {
		self.entries.iter()
	}

	pub fn into_vec(self) -> Vec<T> {
		self.entries
	}
}

impl<T: RangeKeyed> Default for RangeIndex<T> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> RangeIndex<CodePointRange> {
		let mut index = RangeIndex::new();
		for cp in (0..0x80).rev() {
			index.insert(CodePointRange::single(cp)).unwrap();
		}
		index.insert(CodePointRange::new(0x3400, 0x4DBF)).unwrap();
		index.insert(CodePointRange::single(0x00A0)).unwrap();
		index.insert(CodePointRange::new(0xAC00, 0xD7A3)).unwrap();
		index.insert(CodePointRange::single(0x0D76)).unwrap();
		index
	}

	#[test]
	pub fn range_basics() {
		let range = CodePointRange::new(0xAC00, 0xD7A3);
		assert!(!range.is_single());
		assert_eq!(range.len(), 11172);
		assert!(range.contains(0xD4DB));
		assert!(!range.contains(0xD7A4));
		assert!(range.intersects(CodePointRange::new(0xD7A3, 0xD7FF)));
		assert!(!range.intersects(CodePointRange::new(0xD7A4, 0xD7FF)));
		assert!(range.contains_range(CodePointRange::single(0xAC00)));
		assert_eq!(range.compare_code_point(0xABFF), Ordering::Greater);
		assert_eq!(range.compare_code_point(0xD7A4), Ordering::Less);
		assert_eq!(range.to_string(), "U+AC00..U+D7A3");
		assert_eq!(CodePointRange::single(0x41).to_string(), "U+0041");
	}

	#[test]
	pub fn contiguous_fast_path() {
		let index = sample();
		assert_eq!(index.max_contiguous_index(), 0x80);
		assert_eq!(index.find(0x41), Some(0x41));
		assert_eq!(index.find(0xA0), Some(0x80));
		assert_eq!(index.find(0x0D76), Some(0x81));
		assert_eq!(index.find(0x3400), Some(0x82));
		assert_eq!(index.find(0xD7A3), Some(0x83));
	}

	#[test]
	pub fn lookup_matches_linear_scan() {
		let index = sample();
		assert!(validate_sorted(index.entries()).is_ok());
		for cp in 0..0x11000 {
			let expected = index.entries().iter().position(|range| range.contains(cp));
			assert_eq!(index.find(cp), expected, "U+{cp:04X}");
		}
		assert_eq!(index.get(0x10FFFF), None);
	}

	#[test]
	pub fn overlap_is_rejected_without_mutation() {
		let mut index = sample();
		let before = index.entries().to_vec();
		assert_eq!(index.insert(CodePointRange::new(0x4DBF, 0x4E00)), Err(RangeOverlap { existing: 0x82 }));
		assert_eq!(index.insert(CodePointRange::single(0x20)), Err(RangeOverlap { existing: 0x20 }));
		assert!(index.insert(CodePointRange::new(0x0, 0x10FFFF)).is_err());
		assert_eq!(index.entries(), &before[..]);
		assert_eq!(index.max_contiguous_index(), 0x80);
	}

	#[test]
	pub fn remove_resets_fast_path() {
		let mut index = sample();
		index.remove(0x10);
		assert_eq!(index.max_contiguous_index(), 0x10);
		assert_eq!(index.find(0x10), None);
		assert_eq!(index.find(0x11), Some(0x10));
		index.insert(CodePointRange::single(0x10)).unwrap();
		assert_eq!(index.max_contiguous_index(), 0x80);
	}

	#[test]
	pub fn from_sorted_validates() {
		let ranges = vec![CodePointRange::single(0), CodePointRange::new(2, 5), CodePointRange::new(5, 6)];
		assert_eq!(RangeIndex::from_sorted(ranges).err(), Some(2));
		let ranges = vec![CodePointRange::single(0), CodePointRange::new(3, 2)];
		assert!(RangeIndex::from_sorted(ranges).is_err());
		let index = RangeIndex::from_sorted(vec![CodePointRange::single(0), CodePointRange::single(1), CodePointRange::single(3)]).unwrap();
		assert_eq!(index.max_contiguous_index(), 2);
	}
}
