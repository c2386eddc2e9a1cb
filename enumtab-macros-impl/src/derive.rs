use proc_macro2::{Delimiter, Group, TokenStream, TokenTree};
use quote::quote;

use crate::grammar::*;
use crate::process_enum::process_enum;

/// Recursively unwraps `Delimiter::None` groups, which `macro_rules!`
/// wrappers leave around captured fragments such as `$vis:vis`.
fn flatten_transparent_groups(input: TokenStream) -> TokenStream {
    input
        .into_iter()
        .flat_map(|tt| match tt {
            TokenTree::Group(group) if group.delimiter() == Delimiter::None => {
                flatten_transparent_groups(group.stream())
            }
            TokenTree::Group(group) => {
                let mut flattened =
                    Group::new(group.delimiter(), flatten_transparent_groups(group.stream()));
                flattened.set_span(group.span());
                core::iter::once(TokenTree::Group(flattened)).collect()
            }
            other => core::iter::once(other).collect(),
        })
        .collect()
}

/// Entry point of `#[derive(Enumeration)]`.
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
    let input = flatten_transparent_groups(input);
    let mut it = input.to_token_iter();
    match it.parse::<Cons<EnumDecl, EndOfStream>>() {
        Ok(parsed) => process_enum(parsed.first),
        Err(_) => quote! {
            compile_error!("#[derive(Enumeration)] only supports fieldless enums");
        },
    }
}
