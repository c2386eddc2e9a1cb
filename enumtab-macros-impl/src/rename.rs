/// Case conversion applied to variant names by `#[enumtab(rename_all = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// camelCase
    CamelCase,
    /// snake_case
    SnakeCase,
    /// kebab-case
    KebabCase,
    /// PascalCase
    PascalCase,
    /// SCREAMING_SNAKE_CASE
    ScreamingSnakeCase,
    /// SCREAMING-KEBAB-CASE
    ScreamingKebabCase,
    /// lowercase
    Lowercase,
    /// UPPERCASE
    Uppercase,
}

impl RenameRule {
    /// Every rule, as spelled in the attribute.
    pub const NAMES: &'static str = "camelCase, snake_case, kebab-case, PascalCase, \
         SCREAMING_SNAKE_CASE, SCREAMING-KEBAB-CASE, lowercase, UPPERCASE";

    /// Parses a rule from its attribute spelling.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "camelCase" => RenameRule::CamelCase,
            "snake_case" => RenameRule::SnakeCase,
            "kebab-case" => RenameRule::KebabCase,
            "PascalCase" => RenameRule::PascalCase,
            "SCREAMING_SNAKE_CASE" => RenameRule::ScreamingSnakeCase,
            "SCREAMING-KEBAB-CASE" => RenameRule::ScreamingKebabCase,
            "lowercase" => RenameRule::Lowercase,
            "UPPERCASE" => RenameRule::Uppercase,
            _ => return None,
        })
    }

    /// Converts an identifier.
    pub fn apply(self, ident: &str) -> String {
        let words = words(ident);
        match self {
            RenameRule::CamelCase => {
                let mut out = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        push_capitalized(&mut out, word);
                    }
                }
                out
            }
            RenameRule::PascalCase => {
                let mut out = String::new();
                for word in &words {
                    push_capitalized(&mut out, word);
                }
                out
            }
            RenameRule::SnakeCase => join(&words, "_", str::to_lowercase),
            RenameRule::KebabCase => join(&words, "-", str::to_lowercase),
            RenameRule::ScreamingSnakeCase => join(&words, "_", str::to_uppercase),
            RenameRule::ScreamingKebabCase => join(&words, "-", str::to_uppercase),
            RenameRule::Lowercase => ident.to_lowercase(),
            RenameRule::Uppercase => ident.to_uppercase(),
        }
    }
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

fn join(words: &[String], sep: &str, case: fn(&str) -> String) -> String {
    words
        .iter()
        .map(|w| case(w))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Splits on `_`/`-` and on lower-to-upper transitions. A run of capitals
/// stays one word, with its last capital starting the next word when a
/// lowercase letter follows (`HTTPServer` is `HTTP`, `Server`).
fn words(ident: &str) -> Vec<String> {
    let chars: Vec<char> = ident.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' || ch == '-' {
            if !current.is_empty() {
                words.push(core::mem::take(&mut current));
            }
            continue;
        }
        if ch.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if !prev.is_uppercase() || next_is_lower {
                words.push(core::mem::take(&mut current));
            }
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
