use std::collections::HashSet;

use proc_macro2::{Delimiter, Span, TokenStream, TokenTree};
use quote::quote;

use crate::RenameRule;
use crate::grammar::*;

/// A compile error to be emitted during code generation
#[derive(Debug, Clone)]
pub struct CompileError {
    /// The error message
    pub message: String,
    /// The span where the error occurred
    pub span: Span,
}

impl CompileError {
    fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// Names of the threshold keys accepted on the container, which are also the
/// field names of `Thresholds`.
pub const THRESHOLD_KEYS: [&str; 6] = [
    "value_run_min",
    "value_binary_min",
    "name_table_min",
    "name_table_max",
    "name_binary_min",
    "inv_min_load_factor",
];

/// One `key` or `key = value` from an `#[enumtab(...)]` attribute.
#[derive(Debug, Clone)]
pub struct PEnumtabAttr {
    /// The key
    pub key: proc_macro2::Ident,
    /// The value tokens, if any
    pub value: Option<TokenStream>,
}

impl PEnumtabAttr {
    fn from_item(item: &AttrItem) -> Self {
        Self {
            key: item.key.clone(),
            value: item.value.as_ref().map(|v| v.tokens.to_token_stream()),
        }
    }

    fn key_str(&self) -> String {
        self.key.to_string()
    }

    fn value_span(&self) -> Span {
        self.value
            .as_ref()
            .and_then(|v| v.clone().into_iter().next())
            .map(|t| t.span())
            .unwrap_or_else(|| self.key.span())
    }

    fn expect_flag(&self, errors: &mut Vec<CompileError>) {
        if self.value.is_some() {
            errors.push(CompileError::new(
                self.key.span(),
                format!("`{}` takes no value", self.key),
            ));
        }
    }

    fn expect_value(&self, errors: &mut Vec<CompileError>) -> Option<&TokenStream> {
        if self.value.is_none() {
            errors.push(CompileError::new(
                self.key.span(),
                format!("`{}` expects a value, e.g. `{} = ...`", self.key, self.key),
            ));
        }
        self.value.as_ref()
    }

    fn string(&self, errors: &mut Vec<CompileError>) -> Option<String> {
        let tokens = self.expect_value(errors)?;
        match string_literal(tokens) {
            Some(s) => Some(s),
            None => {
                errors.push(CompileError::new(
                    self.value_span(),
                    format!(
                        "`{}` expects a string literal without escape sequences",
                        self.key
                    ),
                ));
                None
            }
        }
    }

    fn integer(&self, errors: &mut Vec<CompileError>) -> Option<usize> {
        let tokens = self.expect_value(errors)?;
        match integer_literal(tokens) {
            Some(n) => Some(n),
            None => {
                errors.push(CompileError::new(
                    self.value_span(),
                    format!("`{}` expects an unsigned integer literal", self.key),
                ));
                None
            }
        }
    }
}

/// Reads the contents of a plain or raw string literal. Escapes are refused:
/// the names end up verbatim in JSON output.
fn string_literal(tokens: &TokenStream) -> Option<String> {
    let mut iter = tokens.clone().into_iter();
    let lit = match (iter.next(), iter.next()) {
        (Some(TokenTree::Literal(lit)), None) => lit.to_string(),
        _ => return None,
    };
    if let Some(rest) = lit.strip_prefix('r') {
        let hashes = rest.len() - rest.trim_start_matches('#').len();
        let inner = rest.get(hashes..rest.len().checked_sub(hashes)?)?;
        return inner
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .map(str::to_string);
    }
    let inner = lit.strip_prefix('"')?.strip_suffix('"')?;
    if inner.contains('\\') {
        return None;
    }
    Some(inner.to_string())
}

fn integer_literal(tokens: &TokenStream) -> Option<usize> {
    let mut iter = tokens.clone().into_iter();
    let lit = match (iter.next(), iter.next()) {
        (Some(TokenTree::Literal(lit)), None) => lit.to_string(),
        _ => return None,
    };
    let digits = lit.strip_suffix("usize").unwrap_or(&lit).replace('_', "");
    digits.parse().ok()
}

/// Checks that `name` can be used as an enumerator name.
fn check_name(name: &str, span: Span, errors: &mut Vec<CompileError>) {
    if name.is_empty() {
        errors.push(CompileError::new(span, "enumerator names must not be empty"));
    } else if let Some(c) = name
        .chars()
        .find(|c| *c == '"' || *c == '\\' || c.is_control())
    {
        errors.push(CompileError::new(
            span,
            format!("enumerator name {name:?} contains {c:?}, which JSON output would need to escape"),
        ));
    }
}

/// Collects every `#[enumtab(...)]` item in `attrs`.
fn enumtab_attrs(attrs: &[Attribute], errors: &mut Vec<CompileError>) -> Vec<PEnumtabAttr> {
    let mut out = Vec::new();
    for attr in attrs {
        if attr.name().as_deref() != Some("enumtab") {
            continue;
        }
        let mut it = attr.body.0.stream().to_token_iter();
        match it.parse::<Cons<EnumtabAttr, EndOfStream>>() {
            Ok(parsed) => out.extend(
                parsed
                    .first
                    .items
                    .content
                    .iter()
                    .map(|d| PEnumtabAttr::from_item(&d.value)),
            ),
            Err(_) => errors.push(CompileError::new(
                attr.body.0.span(),
                "malformed attribute, expected `#[enumtab(key, key = value, ...)]`",
            )),
        }
    }
    out
}

/// Container-level settings.
#[derive(Debug, Clone, Default)]
pub struct PContainerAttrs {
    /// `crate = path`
    pub crate_path: Option<TokenStream>,
    /// `rename_all = "rule"`
    pub rename_all: Option<RenameRule>,
    /// `unique`
    pub unique: bool,
    /// `from_str`
    pub from_str: bool,
    /// Threshold overrides, as `(field, value)`
    pub thresholds: Vec<(String, usize)>,
}

impl PContainerAttrs {
    fn parse(attrs: &[Attribute], errors: &mut Vec<CompileError>) -> Self {
        let mut out = Self::default();
        for attr in enumtab_attrs(attrs, errors) {
            let key = attr.key_str();
            match key.as_str() {
                "crate" => out.crate_path = attr.expect_value(errors).cloned(),
                "rename_all" => {
                    if let Some(rule) = attr.string(errors) {
                        match RenameRule::parse(&rule) {
                            Some(rule) => out.rename_all = Some(rule),
                            None => errors.push(CompileError::new(
                                attr.value_span(),
                                format!(
                                    "unknown rename_all rule `{rule}`. Valid options: {}",
                                    RenameRule::NAMES
                                ),
                            )),
                        }
                    }
                }
                "unique" => {
                    attr.expect_flag(errors);
                    out.unique = true;
                }
                "from_str" => {
                    attr.expect_flag(errors);
                    out.from_str = true;
                }
                k if THRESHOLD_KEYS.contains(&k) => {
                    if let Some(value) = attr.integer(errors) {
                        if k == "inv_min_load_factor" && value == 0 {
                            errors.push(CompileError::new(
                                attr.value_span(),
                                "inv_min_load_factor must be at least 1",
                            ));
                        }
                        out.thresholds.push((k.to_string(), value));
                    }
                }
                "rename" | "alias" => errors.push(CompileError::new(
                    attr.key.span(),
                    format!("`{key}` belongs on a variant, not on the enum"),
                )),
                _ => errors.push(CompileError::new(
                    attr.key.span(),
                    format!(
                        "unknown #[enumtab] attribute `{key}`. Valid options: crate, \
                         rename_all, unique, from_str, {}",
                        THRESHOLD_KEYS.join(", ")
                    ),
                )),
            }
        }
        out
    }

    /// The enumtab crate path, defaulting to `::enumtab`
    pub fn enumtab_crate(&self) -> TokenStream {
        self.crate_path
            .clone()
            .unwrap_or_else(|| quote! { ::enumtab })
    }
}

/// A declared variant, with the names it is known by.
#[derive(Debug, Clone)]
pub struct PVariant {
    /// The variant identifier
    pub ident: proc_macro2::Ident,
    /// Its enumerator name after `rename` / `rename_all`
    pub name: String,
    /// Extra enumerator names sharing its value
    pub aliases: Vec<String>,
}

impl PVariant {
    fn parse(
        variant: &Variant,
        rename_all: Option<RenameRule>,
        errors: &mut Vec<CompileError>,
    ) -> Self {
        let ident = variant.name.clone();
        let raw = ident.to_string();
        let raw = raw.trim_start_matches("r#");

        if variant.fields.is_some() {
            errors.push(CompileError::new(
                ident.span(),
                format!(
                    "#[derive(Enumeration)] only supports unit variants, but `{raw}` has fields"
                ),
            ));
        }

        let mut name = match rename_all {
            Some(rule) => rule.apply(raw),
            None => raw.to_string(),
        };
        let mut aliases = Vec::new();

        for attr in enumtab_attrs(&variant.attributes, errors) {
            let key = attr.key_str();
            match key.as_str() {
                "rename" => {
                    if let Some(renamed) = attr.string(errors) {
                        name = renamed;
                    }
                }
                "alias" => {
                    if let Some(alias) = attr.string(errors) {
                        check_name(&alias, attr.value_span(), errors);
                        aliases.push(alias);
                    }
                }
                _ => errors.push(CompileError::new(
                    attr.key.span(),
                    format!("unknown #[enumtab] variant attribute `{key}`. Valid options: rename, alias"),
                )),
            }
        }

        check_name(&name, ident.span(), errors);

        Self {
            ident,
            name,
            aliases,
        }
    }
}

/// A parsed enum, ready for code emission unless `errors` is non-empty.
#[derive(Debug, Clone)]
pub struct PEnum {
    /// The enum identifier
    pub ident: proc_macro2::Ident,
    /// The enum name without any `r#`
    pub type_name: String,
    /// Container settings
    pub attrs: PContainerAttrs,
    /// Variants in declaration order
    pub variants: Vec<PVariant>,
    /// Everything wrong with the input
    pub errors: Vec<CompileError>,
}

impl PEnum {
    /// Parses a declaration, collecting errors rather than stopping at the first.
    pub fn parse(decl: &EnumDecl) -> Self {
        let mut errors = Vec::new();
        let ident = decl.name.clone();
        let type_name = ident.to_string().trim_start_matches("r#").to_string();

        if let Some(first) = decl.generics.to_token_stream().into_iter().next() {
            errors.push(CompileError::new(
                first.span(),
                "#[derive(Enumeration)] does not support generic enums",
            ));
        }
        check_repr(&decl.attributes, &mut errors);

        let attrs = PContainerAttrs::parse(&decl.attributes, &mut errors);
        let variants: Vec<PVariant> = decl
            .body
            .content
            .iter()
            .map(|d| PVariant::parse(&d.value, attrs.rename_all, &mut errors))
            .collect();

        let mut seen = HashSet::new();
        for variant in &variants {
            for name in core::iter::once(&variant.name).chain(&variant.aliases) {
                if !seen.insert(name.as_str()) {
                    errors.push(CompileError::new(
                        variant.ident.span(),
                        format!("duplicate enumerator name `{name}`"),
                    ));
                }
            }
        }

        Self {
            ident,
            type_name,
            attrs,
            variants,
            errors,
        }
    }

    /// Number of enumerators, aliases included.
    pub fn entry_count(&self) -> usize {
        self.variants.iter().map(|v| 1 + v.aliases.len()).sum()
    }
}

/// Refuses `#[repr(u128)]`: its values don't all fit the `i128` table domain.
fn check_repr(attrs: &[Attribute], errors: &mut Vec<CompileError>) {
    for attr in attrs {
        if attr.name().as_deref() != Some("repr") {
            continue;
        }
        for tt in attr.body.0.stream() {
            let TokenTree::Group(group) = tt else {
                continue;
            };
            if group.delimiter() != Delimiter::Parenthesis {
                continue;
            }
            for inner in group.stream() {
                if let TokenTree::Ident(ident) = inner
                    && ident == "u128"
                {
                    errors.push(CompileError::new(
                        ident.span(),
                        "#[derive(Enumeration)] does not support #[repr(u128)]",
                    ));
                }
            }
        }
    }
}
