#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
//! Compile-time lookup tables for fieldless enums.
//!
//! Given the `(name, value)` pairs of an enum in declaration order,
//! [`enum_tables!`] runs the whole pipeline during constant evaluation:
//!
//! - canonicalization into three orderings ([`Canonical`]),
//! - a value table split around its longest run of consecutive values
//!   ([`ValueSearchTable`]),
//! - a name table that is direct-indexed by `hash % modulo` when the
//!   hashes allow it ([`NameHashTable`]),
//! - compact JSON renderings and a stable type hash.
//!
//! The result is an [`EnumTables`] in static storage. Most users reach it
//! through `#[derive(Enumeration)]` in the `enumtab` crate.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($tt:tt)*) => { ::tracing::trace!($($tt)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}

mod canonical;
pub use canonical::*;

mod entry;
pub use entry::*;

mod error;
pub use error::*;

mod hash;
pub use hash::{BKDR_SEED, bkdr_hash, bkdr_hash_str};

mod macros;

mod name_table;
pub use name_table::*;

mod search;
pub use search::*;

mod sort;

mod tables;
pub use tables::*;

pub mod text;

mod thresholds;
pub use thresholds::*;

mod value_table;
pub use value_table::*;

/// A fieldless enum whose variants are described by static [`EnumTables`].
///
/// Implemented by `#[derive(Enumeration)]`. Aliases count as enumerators:
/// their index in declaration order maps back to the variant they alias.
pub trait Enumeration: Sized + 'static {
    /// The tables describing every enumerator of `Self`.
    const TABLES: &'static EnumTables;

    /// The variant declared at `index` in declaration order.
    fn from_index(index: usize) -> Option<Self>;

    /// The value of `self`, widened to `i128`.
    fn discriminant(&self) -> i128;
}
