//! The `#[enumtab_testhelpers::test]` attribute.

use proc_macro2::TokenStream;
use quote::quote;
use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    /// Everything in front of `fn`: attributes, visibility, qualifiers
    struct Prelude {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    /// Everything between the name and the body: generics, arguments, return type
    struct Signature {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        prelude: Prelude,
        _fn: KFn,
        name: Ident,
        signature: Signature,
        body: BraceGroup,
    }
}

fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut it = item.to_token_iter();
    let test_fn = match it.parse::<Cons<TestFn, EndOfStream>>() {
        Ok(parsed) => parsed.first,
        Err(_) => {
            return quote! {
                compile_error!("#[enumtab_testhelpers::test] expects a function");
            };
        }
    };

    let prelude = test_fn.prelude.items.to_token_stream();
    let name = &test_fn.name;
    let signature = test_fn.signature.items.to_token_stream();
    let body = test_fn.body.0.stream();

    let test_attr = if attr.is_empty() {
        quote! { #[::core::prelude::rust_2024::test] }
    } else {
        quote! { #[#attr] }
    };

    quote! {
        #test_attr
        #prelude fn #name #signature {
            ::enumtab_testhelpers::setup();

            #body
        }
    }
}

/// Runs the test after installing the shared tracing subscriber.
///
/// ```ignore
/// #[enumtab_testhelpers::test]
/// fn finds_green() {
///     assert_eq!(enum_cast_from_name::<Color>("GREEN"), Some(Color::Green));
/// }
/// ```
///
/// A different test attribute can be passed as an argument, e.g.
/// `#[enumtab_testhelpers::test(tokio::test)]`.
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    expand(attr.into(), item.into()).into()
}
