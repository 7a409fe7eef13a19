//! Shell quoting dialect definitions

/// Quoting dialects understood by zsh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuoteDialect {
    /// `'…'`, where only the single quote itself needs escaping
    #[default]
    Single,
    /// `"…"`, with backslash escapes for expansion characters
    Double,
}

impl QuoteDialect {
    /// The character wrapped around a quoted word
    pub fn quote_char(&self) -> char {
        match self {
            QuoteDialect::Single => '\'',
            QuoteDialect::Double => '"',
        }
    }
}
