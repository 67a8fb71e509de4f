//! Traits behind the `unidb_macros` enum derives.

/// Number of variants of an enum.
pub trait EnumCountT {
    const COUNT : usize;
}

/// Conversion from the index an enum is stored as.
pub trait EnumFromIndexT: Sized {
    /// Variant stored at `idx`, if any.
    fn from_idx(idx: usize) -> Option<Self>;

    /// Variant stored at `idx`, falling back to `fallback` for unknown indices.
    fn from_idx_or(idx: usize, fallback: Self) -> Self {
        match Self::from_idx(idx) {
            Some(value) => value,
            None => fallback,
        }
    }
}

/// Conversion from the short or long name a value has in the Unicode data files.
pub trait EnumFromNameT: Sized {
    fn parse(s: &str) -> Option<Self>;
}
