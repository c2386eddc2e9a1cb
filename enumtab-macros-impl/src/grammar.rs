//! unsynn grammar for the derive input and for `#[enumtab(...)]` contents.

pub use unsynn::*;

keyword! {
    /// The "enum" keyword.
    pub KEnum = "enum";
    /// The "pub" keyword.
    pub KPub = "pub";
    /// The "enumtab" attribute name.
    pub KEnumtab = "enumtab";
}

operator! {
    /// Represents the '=' operator.
    pub Eq = "=";
}

unsynn! {
    /// Outer attribute: `#[...]`
    pub struct Attribute {
        /// The `#`
        pub _pound: Pound,
        /// Everything inside the brackets
        pub body: BracketGroup,
    }

    /// Visibility: `pub`, `pub(crate)`, `pub(in path)`
    pub enum Vis {
        /// `pub(...)`
        PubIn(Cons<KPub, ParenthesisGroup>),
        /// `pub`
        Pub(KPub),
    }

    /// An enum declaration as handed to a derive macro.
    pub struct EnumDecl {
        /// Outer attributes, doc comments included
        pub attributes: Vec<Attribute>,
        /// Visibility
        pub vis: Option<Vis>,
        /// The `enum` keyword
        pub _kw_enum: KEnum,
        /// Name of the enum
        pub name: Ident,
        /// Generic parameters and where clauses, if any
        pub generics: Any<Cons<Except<BraceGroup>, TokenTree>>,
        /// The variants
        pub body: BraceGroupContaining<CommaDelimitedVec<Variant>>,
    }

    /// One variant: `#[attrs] Name`, `Name(..)`, `Name { .. }`, `Name = expr`
    pub struct Variant {
        /// Outer attributes
        pub attributes: Vec<Attribute>,
        /// Name of the variant
        pub name: Ident,
        /// Fields, which make the variant unusable here
        pub fields: Option<VariantFields>,
        /// Explicit discriminant
        pub discriminant: Option<VariantDiscriminant>,
    }

    /// Tuple or struct fields of a variant
    pub enum VariantFields {
        /// `(..)`
        Tuple(ParenthesisGroup),
        /// `{ .. }`
        Struct(BraceGroup),
    }

    /// `= expr`
    pub struct VariantDiscriminant {
        /// The `=`
        pub _eq: Eq,
        /// The expression, up to the next top-level comma
        pub expr: Any<Cons<Except<Comma>, TokenTree>>,
    }

    /// The contents of an `#[enumtab(...)]` attribute
    pub struct EnumtabAttr {
        /// The `enumtab` name
        pub _name: KEnumtab,
        /// Comma-separated items
        pub items: ParenthesisGroupContaining<CommaDelimitedVec<AttrItem>>,
    }

    /// `key` or `key = value`
    pub struct AttrItem {
        /// The key, e.g. `rename`
        pub key: Ident,
        /// The value, if any
        pub value: Option<AttrValue>,
    }

    /// `= tokens`
    pub struct AttrValue {
        /// The `=`
        pub _eq: Eq,
        /// The value, up to the next top-level comma
        pub tokens: Any<Cons<Except<Comma>, TokenTree>>,
    }
}

impl Attribute {
    /// Name of the attribute path's first segment, e.g. `repr` for `#[repr(u8)]`.
    pub fn name(&self) -> Option<String> {
        match self.body.0.stream().into_iter().next() {
            Some(TokenTree::Ident(ident)) => Some(ident.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn parses_a_plain_enum() {
        let input = quote! {
            /// Primary colors
            #[repr(u8)]
            pub(crate) enum Color {
                Red = 1,
                #[enumtab(alias = "LIME")]
                Green,
                Blue = 1 << 3,
            }
        };
        let decl = input
            .to_token_iter()
            .parse::<Cons<EnumDecl, EndOfStream>>()
            .expect("enum should parse")
            .first;

        assert_eq!(decl.name.to_string(), "Color");
        assert_eq!(decl.attributes.len(), 2);
        assert_eq!(decl.attributes[1].name().as_deref(), Some("repr"));
        assert!(decl.generics.to_token_stream().is_empty());

        let variants: Vec<_> = decl.body.content.iter().map(|d| &d.value).collect();
        assert_eq!(variants.len(), 3);
        assert_eq!(variants[1].name.to_string(), "Green");
        assert_eq!(variants[1].attributes.len(), 1);
        assert!(variants[1].discriminant.is_none());
        let blue = variants[2]
            .discriminant
            .as_ref()
            .expect("Blue has a discriminant");
        assert_eq!(blue.expr.tokens_to_string(), "1 << 3");
    }

    #[test]
    fn captures_generics_and_fields() {
        let input = quote! {
            enum Wrapper<T: Into<u8>> where T: Copy {
                Unit,
                Tuple(T),
                Named { inner: T },
            }
        };
        let decl = input
            .to_token_iter()
            .parse::<Cons<EnumDecl, EndOfStream>>()
            .expect("enum should parse")
            .first;
        assert!(!decl.generics.to_token_stream().is_empty());
        let variants: Vec<_> = decl.body.content.iter().map(|d| &d.value).collect();
        assert!(variants[0].fields.is_none());
        assert!(matches!(variants[1].fields, Some(VariantFields::Tuple(_))));
        assert!(matches!(variants[2].fields, Some(VariantFields::Struct(_))));
    }

    #[test]
    fn parses_attribute_items() {
        let input = quote! { enumtab(crate = ::my::enumtab, unique, rename_all = "snake_case",) };
        let attr = input
            .to_token_iter()
            .parse::<Cons<EnumtabAttr, EndOfStream>>()
            .expect("attribute should parse")
            .first;
        let items: Vec<_> = attr.items.content.iter().map(|d| &d.value).collect();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].key.to_string(), "crate");
        assert_eq!(
            items[0]
                .value
                .as_ref()
                .map(|v| v.tokens.to_token_stream().to_string()),
            Some(quote!(::my::enumtab).to_string())
        );
        assert!(items[1].value.is_none());
    }
}
