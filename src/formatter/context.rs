//! Output accumulation and indentation state
//!
//! A [`FormatContext`] lives for exactly one top-level render: it owns the
//! output buffer, decides how adjacent tokens are separated (glued, single
//! space, or fresh indented line), and tracks the indent scope stack shared
//! by the expression formatter and the statement-level collaborator.

use crate::ast::Value;
use crate::error::{Error, Result};
use crate::formatter::keywords;
use crate::formatter::style::{IdentifierQuoting, KeywordCase, ParenSpacing, Style};

/// What to place before the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    /// Attach directly to the previous token.
    Glue,
    /// Single separating space, suppressed at buffer start.
    Space,
    /// Line break followed by the current indent.
    Line,
}

/// One entry on the indent scope stack. The tag names the construct that
/// opened the scope, which keeps imbalance reports readable.
#[derive(Debug)]
struct IndentScope {
    tag: Option<&'static str>,
}

/// Mutable accumulator of output text and indentation state for one render.
pub struct FormatContext<'a> {
    style: &'a Style,
    out: String,
    indents: Vec<IndentScope>,
    sep: Separator,
}

impl<'a> FormatContext<'a> {
    pub fn new(style: &'a Style) -> Self {
        Self {
            style,
            out: String::new(),
            indents: Vec::new(),
            sep: Separator::Glue,
        }
    }

    /// Append one token, honoring the pending separator. Every emission
    /// funnels through here so spacing stays consistent.
    fn push_token(&mut self, text: &str) {
        match self.sep {
            Separator::Glue => {}
            Separator::Space => {
                if !self.out.is_empty() {
                    self.out.push(' ');
                }
            }
            Separator::Line => {
                self.out.push('\n');
                let width = self.indents.len() * self.style.indent_width;
                self.out.extend(std::iter::repeat(' ').take(width));
            }
        }
        self.out.push_str(text);
        self.sep = Separator::Space;
    }

    /// Append a keyword with the configured casing.
    pub fn emit_keyword(&mut self, keyword: &str) {
        let cased = match self.style.keyword_case {
            KeywordCase::Upper => keyword.to_ascii_uppercase(),
            KeywordCase::Lower => keyword.to_ascii_lowercase(),
            KeywordCase::AsWritten => keyword.to_string(),
        };
        self.push_token(&cased);
    }

    /// Append an operator token. Symbolic operators bind tight to both
    /// operands; word operators get keyword treatment.
    pub fn emit_operator(&mut self, token: &str) {
        if token.chars().any(|c| c.is_ascii_alphabetic()) {
            self.emit_keyword(token);
        } else {
            if self.sep == Separator::Space {
                self.sep = Separator::Glue;
            }
            self.push_token(token);
            self.sep = Separator::Glue;
        }
    }

    /// Append a literal with the quoting/escaping rule for its type.
    pub fn emit_literal(&mut self, value: &Value) {
        match value {
            Value::Null => self.emit_keyword("NULL"),
            Value::Boolean(true) => self.emit_keyword("TRUE"),
            Value::Boolean(false) => self.emit_keyword("FALSE"),
            Value::Integer(n) => self.push_token(&n.to_string()),
            Value::Real(f) => {
                // SQLite prints whole reals with a trailing .0
                let text = if f.is_finite() && f.fract() == 0.0 {
                    format!("{f:.1}")
                } else {
                    f.to_string()
                };
                self.push_token(&text);
            }
            Value::Text(s) => {
                let escaped = s.replace('\'', "''");
                self.push_token(&format!("'{escaped}'"));
            }
            Value::Blob(bytes) => {
                let hex: String = bytes.iter().map(|b| format!("{b:02X}")).collect();
                self.push_token(&format!("X'{hex}'"));
            }
        }
    }

    /// Append a bind-parameter placeholder verbatim; the token already
    /// carries its own marker.
    pub fn emit_bind_param(&mut self, token: &str) {
        self.push_token(token);
    }

    /// Append an identifier, quoting it per the configured policy.
    pub fn emit_identifier(&mut self, name: &str) {
        let quote = match self.style.identifier_quoting {
            IdentifierQuoting::Always => true,
            IdentifierQuoting::Never => false,
            IdentifierQuoting::OnConflictOnly => keywords::requires_quoting(name),
        };
        if quote {
            let escaped = name.replace('"', "\"\"");
            self.push_token(&format!("\"{escaped}\""));
        } else {
            self.push_token(name);
        }
    }

    /// Append the `.` qualifier separator, glued on both sides.
    pub fn emit_identifier_separator(&mut self) {
        self.sep = Separator::Glue;
        self.push_token(".");
        self.sep = Separator::Glue;
    }

    /// Append a list comma: glued to the previous token, one space after.
    pub fn emit_comma(&mut self) {
        self.sep = Separator::Glue;
        self.push_token(",");
    }

    fn paren_inner_sep(&self) -> Separator {
        match self.style.paren_spacing {
            ParenSpacing::Tight => Separator::Glue,
            ParenSpacing::Spaced => Separator::Space,
        }
    }

    /// Grouping paren, separated like a word from what precedes it.
    pub fn open_expression_parens(&mut self) {
        self.push_token("(");
        self.sep = self.paren_inner_sep();
    }

    pub fn close_expression_parens(&mut self) {
        self.sep = self.paren_inner_sep();
        self.push_token(")");
    }

    /// Argument-list paren, glued to the function name before it.
    pub fn open_function_parens(&mut self) {
        self.sep = Separator::Glue;
        self.push_token("(");
        self.sep = Separator::Glue;
    }

    pub fn close_function_parens(&mut self) {
        self.sep = Separator::Glue;
        self.push_token(")");
    }

    /// Subquery/definition paren: the body starts on a fresh indented line.
    pub fn open_definition_parens(&mut self) {
        self.push_token("(");
        self.sep = Separator::Line;
    }

    /// Closes on a fresh line at whatever indent is current, so callers pop
    /// their indent scope first.
    pub fn close_definition_parens(&mut self) {
        self.sep = Separator::Line;
        self.push_token(")");
    }

    /// Start a fresh line before the next token.
    pub fn newline(&mut self) {
        self.sep = Separator::Line;
    }

    pub fn push_indent(&mut self, tag: Option<&'static str>) {
        self.indents.push(IndentScope { tag });
    }

    /// Close the most recent indent scope. Every push must be matched by
    /// exactly one pop within the same render.
    pub fn pop_indent(&mut self) -> Result<()> {
        match self.indents.pop() {
            Some(_) => Ok(()),
            None => Err(Error::IndentImbalance {
                detail: "pop_indent called with no open scope".to_string(),
            }),
        }
    }

    /// Current indent scope depth. Zero before and after a balanced render.
    pub fn depth(&self) -> usize {
        self.indents.len()
    }

    /// Text accumulated so far. Tests peek at this mid-render; callers
    /// should read the result through [`FormatContext::finish`].
    pub fn buffer(&self) -> &str {
        &self.out
    }

    /// Consume the context and return the accumulated text, failing if any
    /// indent scope is still open.
    pub fn finish(self) -> Result<String> {
        if !self.indents.is_empty() {
            let names: Vec<&str> = self
                .indents
                .iter()
                .map(|scope| scope.tag.unwrap_or("<untagged>"))
                .collect();
            return Err(Error::IndentImbalance {
                detail: format!(
                    "{} scope(s) still open at end of render: {}",
                    names.len(),
                    names.join(", ")
                ),
            });
        }
        Ok(self.out)
    }
}
