//! Traits implemented by the `unidb_macros` derives, usable from `#![no_std]` code.
#![no_std]

mod macro_traits;
pub use macro_traits::*;
