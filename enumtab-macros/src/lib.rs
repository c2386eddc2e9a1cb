//! `#[derive(Enumeration)]`, re-exported by the `enumtab` crate.

/// Derives `enumtab::Enumeration` for a fieldless enum.
///
/// See the `enumtab` crate for the `#[enumtab(...)]` attributes.
#[proc_macro_derive(Enumeration, attributes(enumtab))]
pub fn enumeration(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    enumtab_macros_impl::derive_enumeration(input.into()).into()
}
