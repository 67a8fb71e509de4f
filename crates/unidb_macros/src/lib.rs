//! Procedural macros for the unidb crates.
//!
//! - `#[flags]` turns a field-less enum into a bit-flag struct.
//! - `EnumCount`, `EnumFromIndex`, `EnumFromName` and `EnumDisplay` derive the traits in `unidb_base`
//!   (and `core::fmt::Display`) for plain enums.

use proc_macro::TokenStream;

mod derive;
mod flags;

/// Convert an enum into a bit-flag struct.
///
/// Variants without a discriminant get the next free bit, variants can also be an integer literal or an or-ed
/// combination of earlier variants (`Both = A | B`).
///
/// Arguments:
/// - `u8`, `u16`, `u32`, `u64` or `u128`: force the backing type, otherwise the smallest fitting type is used.
/// - `parse_from_name`: generate a `parse` function, mapping names (or a `#[parse_name("..")]` override) to flags,
///   multiple names can be combined with `|`.
#[proc_macro_attribute]
pub fn flags(args: TokenStream, input: TokenStream) -> TokenStream {
	flags::flags(args.into(), input.into()).into()
}

/// Implement `unidb_base::EnumCountT`.
#[proc_macro_derive(EnumCount)]
pub fn enum_count(item: TokenStream) -> TokenStream {
	derive::enum_count(item.into()).into()
}

/// Implement `unidb_base::EnumFromIndexT`, using the discriminant of each variant as its index.
#[proc_macro_derive(EnumFromIndex)]
pub fn enum_from_index(item: TokenStream) -> TokenStream {
	derive::enum_from_index(item.into()).into()
}

/// Implement `core::fmt::Display`, a variant can override its text with `#[display("..")]`.
#[proc_macro_derive(EnumDisplay, attributes(display))]
pub fn enum_display(item: TokenStream) -> TokenStream {
	derive::enum_display(item.into()).into()
}

/// Implement `unidb_base::EnumFromNameT`, a variant can have one or more `#[parse_name("..")]` attributes.
#[proc_macro_derive(EnumFromName, attributes(parse_name))]
pub fn enum_from_name(item: TokenStream) -> TokenStream {
	derive::enum_from_name(item.into()).into()
}
