#![warn(missing_docs)]
//! Parsing and code generation behind `#[derive(Enumeration)]`.
//!
//! This is a plain library so it can be unit-tested; `enumtab-macros`
//! is the proc-macro shim around [`derive_enumeration`].

mod grammar;
pub use grammar::*;

mod parsed;
pub use parsed::*;

mod rename;
pub use rename::RenameRule;

mod process_enum;

mod derive;
pub use derive::*;
