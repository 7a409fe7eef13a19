//! Quoting for zsh's single- and double-quoted words
//!
//! Control characters and newlines are passed through untouched; callers must
//! not feed them in.

use once_cell::sync::Lazy;
use regex::Regex;
use zcomp_types::QuoteDialect;

/// Words made only of these characters never need quoting
static SAFE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_+-]*$").unwrap());

/// Characters that stay special inside double quotes
static DOUBLE_SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r#"([!$\\"`])"#).unwrap());

/// Quote `value` as a complete word in the given dialect
pub fn quote(value: &str, dialect: QuoteDialect) -> String {
    quote_with(value, false, dialect)
}

/// Escape `value` for interpolation inside an existing quoted word
///
/// The caller supplies the surrounding quote characters.
pub fn escape(value: &str, dialect: QuoteDialect) -> String {
    quote_with(value, true, dialect)
}

/// Quote or, with `embed`, only escape `value`
pub fn quote_with(value: &str, embed: bool, dialect: QuoteDialect) -> String {
    if SAFE_PATTERN.is_match(value) {
        return value.to_string();
    }

    let body = match dialect {
        QuoteDialect::Single => value.replace('\'', r"'\''"),
        QuoteDialect::Double => DOUBLE_SPECIAL.replace_all(value, r"\${1}").into_owned(),
    };

    if embed {
        body
    } else {
        let quote = dialect.quote_char();
        format!("{}{}{}", quote, body, quote)
    }
}

/// Backslash-escape a character that `_arguments` treats as structure
pub(crate) fn escape_char(value: &str, special: char) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == special {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
