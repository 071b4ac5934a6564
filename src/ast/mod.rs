//! AST node definitions for SQLite expressions
//!
//! The tree is produced by an external parser; this crate only reads it.
//! Each [`Expr`] variant selects exactly one syntactic form, and the
//! formatter matches exhaustively, so an unhandled form is a compile error
//! rather than silent partial output.

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Placeholder the parser produces for an absent sub-expression.
    /// Renders nothing at any depth.
    Empty,
    Literal(Value),
    CurrentTime(TimeKeyword),
    /// Bind-parameter placeholder, emitted verbatim. The token already
    /// carries its marker: `?`, `?1`, `:name`, `@name`, `$name`.
    BindParam(String),
    /// Possibly-qualified column reference. Absent qualifiers are simply
    /// omitted, so `column` alone renders as a bare name.
    Column {
        database: Option<String>,
        table: Option<String>,
        column: String,
    },
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
    /// No precedence-driven parenthesization happens here; the parser uses
    /// [`Expr::Parenthesized`] wherever explicit grouping is required.
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    FunctionCall {
        name: String,
        args: Vec<Expr>,
    },
    /// Explicit grouping parens around a sub-expression.
    Parenthesized(Box<Expr>),
    Cast {
        operand: Box<Expr>,
        target: ColumnType,
    },
    Collate {
        operand: Box<Expr>,
        collation: String,
    },
    /// LIKE family: LIKE / GLOB / REGEXP / MATCH, with optional ESCAPE.
    Like {
        operand: Box<Expr>,
        negated: bool,
        verb: LikeVerb,
        pattern: Box<Expr>,
        escape: Option<Box<Expr>>,
    },
    /// Null-check shorthand (`ISNULL`, `NOT NULL`, `NOTNULL`); `None` is
    /// the parser's absent sub-case and renders nothing.
    NullCheck(Option<NullCheck>),
    Is {
        left: Box<Expr>,
        negated: bool,
        right: Box<Expr>,
    },
    Between {
        operand: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },
    In {
        operand: Box<Expr>,
        negated: bool,
        set: InSet,
    },
    Exists(Box<SelectStmt>),
    /// CASE expression. `branches` is a flat list alternating WHEN
    /// condition / THEN result, starting with a WHEN condition; the parser
    /// may hand over an odd-length list.
    Case {
        subject: Option<Box<Expr>>,
        branches: Vec<Expr>,
        else_expr: Option<Box<Expr>>,
    },
    /// Scalar subquery.
    Subquery(Box<SelectStmt>),
    Raise(RaiseFunction),
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// Current date/time keyword functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKeyword {
    CurrentTime,
    CurrentDate,
    CurrentTimestamp,
}

impl TimeKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeKeyword::CurrentTime => "CURRENT_TIME",
            TimeKeyword::CurrentDate => "CURRENT_DATE",
            TimeKeyword::CurrentTimestamp => "CURRENT_TIMESTAMP",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Minus,
    Plus,
    BitNot,
    Not,
}

impl UnaryOperator {
    pub fn token(self) -> &'static str {
        match self {
            UnaryOperator::Minus => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::BitNot => "~",
            UnaryOperator::Not => "NOT",
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Concat,
    Multiply,
    Divide,
    Modulo,
    Plus,
    Minus,
    ShiftLeft,
    ShiftRight,
    BitAnd,
    BitOr,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    And,
    Or,
}

impl BinaryOperator {
    pub fn token(self) -> &'static str {
        match self {
            BinaryOperator::Concat => "||",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::Eq => "=",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
        }
    }
}

/// The matching verb of a LIKE-family expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeVerb {
    Like,
    Glob,
    Regexp,
    Match,
}

impl LikeVerb {
    pub fn keyword(self) -> &'static str {
        match self {
            LikeVerb::Like => "LIKE",
            LikeVerb::Glob => "GLOB",
            LikeVerb::Regexp => "REGEXP",
            LikeVerb::Match => "MATCH",
        }
    }
}

/// Null-check shorthand forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullCheck {
    /// `ISNULL`
    IsNull,
    /// `NOT NULL` (two keywords)
    NotNull,
    /// `NOTNULL` (single keyword)
    Notnull,
}

/// The right-hand side of an IN expression. The three forms are mutually
/// exclusive by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum InSet {
    Subquery(Box<SelectStmt>),
    /// Must be non-empty; an empty list is a malformed tree.
    List(Vec<Expr>),
    /// Bare table reference, optionally database-qualified. No parens.
    Table {
        database: Option<String>,
        table: String,
    },
}

/// A nested SELECT. Statement-level formatting belongs to the
/// [`StatementFormatter`](crate::StatementFormatter) collaborator; this
/// crate passes these nodes through without walking their fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectStmt {
    pub distinct: bool,
    pub columns: Vec<Expr>,
    pub from: Option<String>,
    pub where_clause: Option<Expr>,
}

/// Declared column type, the target of a CAST
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnType {
    pub name: String,
    pub size: Option<i64>,
    pub precision: Option<i64>,
}

/// RAISE function call inside a trigger expression
#[derive(Debug, Clone, PartialEq)]
pub struct RaiseFunction {
    pub action: RaiseAction,
    pub message: Option<String>,
}

/// RAISE actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaiseAction {
    Ignore,
    Rollback,
    Abort,
    Fail,
}

impl RaiseAction {
    pub fn keyword(self) -> &'static str {
        match self {
            RaiseAction::Ignore => "IGNORE",
            RaiseAction::Rollback => "ROLLBACK",
            RaiseAction::Abort => "ABORT",
            RaiseAction::Fail => "FAIL",
        }
    }
}
