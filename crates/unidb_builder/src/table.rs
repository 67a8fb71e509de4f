//! In-memory tables the source files are ingested into.

use unidb_info::{
	packer,
	range::{find_insertion_index, RangeIndex, RangeKeyed, RangeOverlap},
	record::RadicalStrokeCount,
	BidirectionalClass, CanonicalCombiningClass, Category, CodePointRange, ContributoryProperties, CoreProperties,
	DecompositionType, EmojiProperties, NameAliasKind, NumericType, Rational, UnihanNumericType,
};

/// A character record under construction.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CharacterEntry {
	pub range:              CodePointRange,
	pub name:               Option<String>,
	pub aliases:            Vec<(NameAliasKind, String)>,
	pub category:           Option<Category>,
	pub combining_class:    Option<CanonicalCombiningClass>,
	pub bidi_class:         Option<BidirectionalClass>,
	pub decomposition:      Option<(DecompositionType, Vec<u32>)>,
	pub numeric:            Option<(NumericType, Rational)>,
	pub mirrored:           bool,
	pub old_name:           Option<String>,
	pub upper_case:         Option<u32>,
	pub lower_case:         Option<u32>,
	pub title_case:         Option<u32>,
	pub contributory:       ContributoryProperties,
	pub core:               CoreProperties,
	pub emoji:              EmojiProperties,
	pub cross_references:   Vec<u32>,
	/// The record only exists because a property file addressed its range, it can still be split.
	pub property_only:      bool,
}

impl CharacterEntry {
	pub fn new(range: CodePointRange) -> Self {
		Self { range, ..Default::default() }
	}

	/// Create a record for a range that is only known from a property file.
	pub fn property_only(range: CodePointRange) -> Self {
		Self { range, property_only: true, ..Default::default() }
	}

	fn with_range(&self, range: CodePointRange) -> Self {
		Self { range, ..self.clone() }
	}
}

impl RangeKeyed for CharacterEntry {
	fn range(&self) -> CodePointRange {
		self.range
	}
}

/// Sorted character records.
#[derive(Clone, Debug, Default)]
pub struct CharacterTable {
	index: RangeIndex<CharacterEntry>,
}

impl CharacterTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_entries(entries: Vec<CharacterEntry>) -> Result<Self, usize> {
		RangeIndex::from_sorted(entries).map(|index| Self { index })
	}

	pub fn insert(&mut self, entry: CharacterEntry) -> Result<usize, RangeOverlap> {
		self.index.insert(entry)
	}

	pub fn get(&self, code_point: u32) -> Option<&CharacterEntry> {
		self.index.get(code_point)
	}

	pub fn get_mut(&mut self, code_point: u32) -> Option<&mut CharacterEntry> {
		let idx = self.index.find(code_point)?;
		self.index.get_mut(idx)
	}

	pub fn entries(&self) -> &[CharacterEntry] {
		self.index.entries()
	}

	pub fn len(&self) -> usize {
		self.index.len()
	}

	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	pub fn iter(&self) -> core::slice::Iter<'_, CharacterEntry> {
		self.index.iter()
	}

	/// Apply `f` to every record in `range`.
	///
	/// Gaps get a new property-only record. A property-only record that sticks out of `range` is split, so that only
	/// the addressed part is modified. Any other record that only partially lies inside `range` can't be split, the
	/// overlap is returned as an error and the records before it are already modified.
	pub fn update_range(&mut self, range: CodePointRange, mut f: impl FnMut(&mut CharacterEntry)) -> Result<(), RangeOverlap> {
		let mut cur = range.first;
		while cur <= range.last {
			let end = match self.index.find(cur) {
				Some(idx) => {
					let existing = self.index.entries()[idx].range;
					let end = existing.last.min(range.last);
					let idx = if range.contains_range(existing) {
						idx
					} else if self.index.entries()[idx].property_only {
						self.split(idx, CodePointRange::new(cur, end))
					} else {
						return Err(RangeOverlap { existing: idx });
					};
					if let Some(entry) = self.index.get_mut(idx) {
						f(entry);
					}
					end
				},
				None => {
					let next = find_insertion_index(self.index.entries(), CodePointRange::single(cur))
						.ok()
						.and_then(|idx| self.index.entries().get(idx))
						.map_or(u32::MAX, |entry| entry.range.first);
					let end = range.last.min(next.saturating_sub(1));
					let mut entry = CharacterEntry::property_only(CodePointRange::new(cur, end));
					f(&mut entry);
					self.index.insert(entry)?;
					end
				},
			};

			match end.checked_add(1) {
				Some(next) => cur = next,
				None => break,
			}
		}
		Ok(())
	}

	/// Split the record at `idx` so `part` becomes a record of its own, returning its index.
	fn split(&mut self, idx: usize, part: CodePointRange) -> usize {
		let entry = self.index.remove(idx);
		let mut part_idx = idx;
		if entry.range.first < part.first {
			// The ranges come from a record that was just removed, so they can't overlap anything.
			_ = self.index.insert(entry.with_range(CodePointRange::new(entry.range.first, part.first - 1)));
			part_idx += 1;
		}
		_ = self.index.insert(entry.with_range(part));
		if part.last < entry.range.last {
			_ = self.index.insert(entry.with_range(CodePointRange::new(part.last + 1, entry.range.last)));
		}
		part_idx
	}

	pub fn into_entries(self) -> Vec<CharacterEntry> {
		self.index.into_vec()
	}
}

//==============================================================

/// A block under construction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BlockEntry {
	pub range: CodePointRange,
	pub name:  String,
}

impl RangeKeyed for BlockEntry {
	fn range(&self) -> CodePointRange {
		self.range
	}
}

//==============================================================

/// A Unihan record under construction.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct UnihanEntry {
	pub packed:          u32,
	pub code_point:      u32,
	pub numeric:         Option<(UnihanNumericType, u64)>,
	pub radical_strokes: Vec<RadicalStrokeCount>,
	/// Strings in the order of [`unidb_info::record::UnihanFields::STRINGS`].
	pub strings:         [Option<String>; 10],
}

/// Unihan records sorted by packed code point.
#[derive(Clone, Debug, Default)]
pub struct UnihanTable {
	entries: Vec<UnihanEntry>,
}

impl UnihanTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Get the record of a code point, creating it when it doesn't exist yet.
	pub fn entry(&mut self, code_point: u32) -> unidb_info::Result<&mut UnihanEntry> {
		let packed = packer::pack(code_point)?;
		let idx = match self.entries.binary_search_by_key(&packed, |entry| entry.packed) {
			Ok(idx) => idx,
			Err(idx) => {
				self.entries.insert(idx, UnihanEntry { packed, code_point, ..Default::default() });
				idx
			},
		};
		Ok(&mut self.entries[idx])
	}

	pub fn get(&self, code_point: u32) -> Option<&UnihanEntry> {
		let packed = packer::pack(code_point).ok()?;
		self.entries.binary_search_by_key(&packed, |entry| entry.packed).ok().map(|idx| &self.entries[idx])
	}

	pub fn entries(&self) -> &[UnihanEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Append a record, records must be pushed in packed order.
	pub(crate) fn push_sorted(&mut self, entry: UnihanEntry) {
		debug_assert!(self.entries.last().map_or(true, |last| last.packed < entry.packed));
		self.entries.push(entry);
	}
}
