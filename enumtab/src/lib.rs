#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![doc = include_str!("../README.md")]

// lets the derive's `::enumtab` paths resolve inside this crate's own tests
extern crate self as enumtab;

pub use enumtab_core::*;

/// Derives [`Enumeration`] for a fieldless enum.
///
/// See the crate documentation for the accepted `#[enumtab(...)]` keys.
pub use enumtab_macros::Enumeration;

mod query;
pub use query::*;

mod switch;
pub use switch::*;
