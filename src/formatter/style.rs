//! Style configuration
//!
//! A [`Style`] is supplied when a context is constructed and stays fixed
//! for the lifetime of one render. Only paren spacing is configurable for
//! operators and punctuation; symbolic operators always bind tight and
//! word operators are always spaced.

/// Casing applied to keywords (and word operators)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordCase {
    #[default]
    Upper,
    Lower,
    /// Emit keywords exactly as the tree carries them.
    AsWritten,
}

/// When identifiers get wrapped in double quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierQuoting {
    /// Quote only reserved words and names that need escaping.
    #[default]
    OnConflictOnly,
    Always,
    Never,
}

/// Whitespace inside grouping parens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParenSpacing {
    /// `(a, b)`
    #[default]
    Tight,
    /// `( a, b )`
    Spaced,
}

/// Formatting style for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub keyword_case: KeywordCase,
    pub identifier_quoting: IdentifierQuoting,
    /// Spaces per indent level.
    pub indent_width: usize,
    pub paren_spacing: ParenSpacing,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            keyword_case: KeywordCase::Upper,
            identifier_quoting: IdentifierQuoting::OnConflictOnly,
            indent_width: 4,
            paren_spacing: ParenSpacing::Tight,
        }
    }
}
