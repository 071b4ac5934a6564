//! sqlitefmt - renders parsed SQLite expression trees back to canonical,
//! indented SQL source text
//!
//! The input tree comes from an external parser and is only read, never
//! mutated. Statement-level constructs nested inside expressions (SELECT
//! bodies, column types, RAISE clauses) are delegated to a
//! [`StatementFormatter`] supplied by the caller; everything else is
//! rendered here. A render is a pure function of the tree and the
//! [`Style`]: it either returns a fully-formed string or fails atomically.

pub mod ast;
pub mod error;
pub mod formatter;

pub use error::{Error, Result};
pub use formatter::context::FormatContext;
pub use formatter::style::{IdentifierQuoting, KeywordCase, ParenSpacing, Style};
pub use formatter::{format_expr, ExprFormatter, StatementFormatter};

/// Render an expression tree with the default style.
pub fn format<S: StatementFormatter>(expr: &ast::Expr, statements: &mut S) -> Result<String> {
    format_expr(expr, &Style::default(), statements)
}
