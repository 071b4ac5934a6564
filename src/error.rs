//! Error types for sqlitefmt

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for sqlitefmt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sqlitefmt
///
/// No variant is recoverable mid-render: a format call either returns a
/// fully-formed string or fails atomically.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// The input tree violates the expression-node contract, e.g. an IN
    /// node whose value list is empty. Signals a defect in the upstream
    /// parser, not something to retry.
    #[error("malformed expression: {message}")]
    #[diagnostic(code(sqlitefmt::malformed_expression))]
    MalformedExpression { message: String },

    /// Indent scopes opened and closed unevenly during a render. Always a
    /// logic defect, never silently corrected.
    #[error("indent scope imbalance: {detail}")]
    #[diagnostic(code(sqlitefmt::indent_imbalance))]
    IndentImbalance { detail: String },

    /// The statement-level collaborator failed while formatting a nested
    /// SELECT, column type, or RAISE clause.
    #[error("statement formatter failed: {message}")]
    #[diagnostic(code(sqlitefmt::statement_error))]
    StatementError { message: String },
}
