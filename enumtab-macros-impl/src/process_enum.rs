use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote, quote_spanned};

use crate::{EnumDecl, PEnum};

/// Generates the `Enumeration` impl (and optionally `FromStr`) for an enum.
pub(crate) fn process_enum(decl: EnumDecl) -> TokenStream {
    let pe = PEnum::parse(&decl);

    if !pe.errors.is_empty() {
        let errors = pe.errors.iter().map(|e| {
            let msg = &e.message;
            let span = e.span;
            quote_spanned! { span => compile_error!(#msg); }
        });
        return quote! { #(#errors)* };
    }

    let enumtab = pe.attrs.enumtab_crate();
    let ident = &pe.ident;
    let type_name = &pe.type_name;

    let setters = pe.attrs.thresholds.iter().map(|(field, value)| {
        let setter = format_ident!("with_{}", field);
        let value = Literal::usize_unsuffixed(*value);
        quote! { .#setter(#value) }
    });

    let policy = if pe.attrs.unique {
        quote! { #enumtab::DuplicatePolicy::Reject }
    } else {
        quote! { #enumtab::DuplicatePolicy::FirstDeclared }
    };

    // one entry per name; aliases follow the variant they alias
    let mut entries = Vec::with_capacity(pe.entry_count());
    let mut index_arms = Vec::with_capacity(pe.entry_count());
    for variant in &pe.variants {
        let variant_ident = &variant.ident;
        for name in core::iter::once(&variant.name).chain(&variant.aliases) {
            let index = Literal::usize_unsuffixed(entries.len());
            entries.push(quote! {
                #enumtab::RawEntry::new(#name, #ident::#variant_ident as i128)
            });
            index_arms.push(quote! {
                #index => ::core::option::Option::Some(#ident::#variant_ident),
            });
        }
    }

    let discriminant_body = if pe.variants.is_empty() {
        quote! { match *self {} }
    } else {
        let arms = pe.variants.iter().map(|v| {
            let variant_ident = &v.ident;
            quote! { #ident::#variant_ident => #ident::#variant_ident as i128, }
        });
        quote! { match self { #(#arms)* } }
    };

    let from_str = pe.attrs.from_str.then(|| {
        quote! {
            #[automatically_derived]
            impl ::core::str::FromStr for #ident {
                type Err = #enumtab::EnumError;

                fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                    #enumtab::enum_try_cast_from_name::<Self>(s)
                }
            }
        }
    });

    quote! {
        #[automatically_derived]
        impl #enumtab::Enumeration for #ident {
            const TABLES: &'static #enumtab::EnumTables = #enumtab::enum_tables! {
                type_name: #type_name,
                thresholds: #enumtab::Thresholds::BUILD #(#setters)*,
                policy: #policy,
                entries: [#(#entries),*],
            };

            fn from_index(index: usize) -> ::core::option::Option<Self> {
                match index {
                    #(#index_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn discriminant(&self) -> i128 {
                #discriminant_body
            }
        }

        #from_str
    }
}
