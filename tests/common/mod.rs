//! Shared test support
//!
//! A small statement formatter standing in for the statement-level renderer
//! this crate delegates to, plus helpers for building expression trees.

#![allow(dead_code)]

use sqlitefmt::ast::{ColumnType, Expr, RaiseFunction, SelectStmt, Value};
use sqlitefmt::{Error, ExprFormatter, FormatContext, Result, StatementFormatter};

/// Renders just enough of SELECT / column types / RAISE for expression
/// tests. Everything stays on one line; line placement around subqueries is
/// the expression formatter's job.
pub struct StubStatements;

impl StatementFormatter for StubStatements {
    fn format_select(&mut self, select: &SelectStmt, ctx: &mut FormatContext<'_>) -> Result<()> {
        ctx.emit_keyword("SELECT");
        if select.distinct {
            ctx.emit_keyword("DISTINCT");
        }
        for (i, column) in select.columns.iter().enumerate() {
            if i > 0 {
                ctx.emit_comma();
            }
            ExprFormatter::new(ctx, self).format(column)?;
        }
        if let Some(from) = &select.from {
            ctx.emit_keyword("FROM");
            ctx.emit_identifier(from);
        }
        if let Some(where_clause) = &select.where_clause {
            ctx.emit_keyword("WHERE");
            ExprFormatter::new(ctx, self).format(where_clause)?;
        }
        Ok(())
    }

    fn format_column_type(
        &mut self,
        column_type: &ColumnType,
        ctx: &mut FormatContext<'_>,
    ) -> Result<()> {
        ctx.emit_keyword(&column_type.name);
        if let Some(size) = column_type.size {
            ctx.open_function_parens();
            ctx.emit_literal(&Value::Integer(size));
            if let Some(precision) = column_type.precision {
                ctx.emit_comma();
                ctx.emit_literal(&Value::Integer(precision));
            }
            ctx.close_function_parens();
        }
        Ok(())
    }

    fn format_raise(&mut self, raise: &RaiseFunction, ctx: &mut FormatContext<'_>) -> Result<()> {
        ctx.emit_keyword("RAISE");
        ctx.open_function_parens();
        ctx.emit_keyword(raise.action.keyword());
        if let Some(message) = &raise.message {
            ctx.emit_comma();
            ctx.emit_literal(&Value::Text(message.clone()));
        }
        ctx.close_function_parens();
        Ok(())
    }
}

/// Fails every call, for error-propagation tests.
pub struct FailingStatements;

impl StatementFormatter for FailingStatements {
    fn format_select(&mut self, _select: &SelectStmt, _ctx: &mut FormatContext<'_>) -> Result<()> {
        Err(Error::StatementError {
            message: "unsupported select shape".to_string(),
        })
    }

    fn format_column_type(
        &mut self,
        _column_type: &ColumnType,
        _ctx: &mut FormatContext<'_>,
    ) -> Result<()> {
        Err(Error::StatementError {
            message: "unsupported column type".to_string(),
        })
    }

    fn format_raise(&mut self, _raise: &RaiseFunction, _ctx: &mut FormatContext<'_>) -> Result<()> {
        Err(Error::StatementError {
            message: "unsupported raise clause".to_string(),
        })
    }
}

/// Violates the indent contract by leaving an extra scope open.
pub struct LeakyStatements;

impl StatementFormatter for LeakyStatements {
    fn format_select(&mut self, _select: &SelectStmt, ctx: &mut FormatContext<'_>) -> Result<()> {
        ctx.push_indent(Some("select"));
        ctx.emit_keyword("SELECT");
        Ok(())
    }

    fn format_column_type(
        &mut self,
        column_type: &ColumnType,
        ctx: &mut FormatContext<'_>,
    ) -> Result<()> {
        ctx.emit_keyword(&column_type.name);
        Ok(())
    }

    fn format_raise(&mut self, _raise: &RaiseFunction, ctx: &mut FormatContext<'_>) -> Result<()> {
        ctx.emit_keyword("RAISE");
        Ok(())
    }
}

/// Violates the indent contract in the other direction: closes a scope it
/// never opened.
pub struct PoppingStatements;

impl StatementFormatter for PoppingStatements {
    fn format_select(&mut self, _select: &SelectStmt, ctx: &mut FormatContext<'_>) -> Result<()> {
        ctx.pop_indent()?;
        ctx.emit_keyword("SELECT");
        Ok(())
    }

    fn format_column_type(
        &mut self,
        column_type: &ColumnType,
        ctx: &mut FormatContext<'_>,
    ) -> Result<()> {
        ctx.emit_keyword(&column_type.name);
        Ok(())
    }

    fn format_raise(&mut self, _raise: &RaiseFunction, ctx: &mut FormatContext<'_>) -> Result<()> {
        ctx.emit_keyword("RAISE");
        Ok(())
    }
}

pub fn column(name: &str) -> Expr {
    Expr::Column {
        database: None,
        table: None,
        column: name.to_string(),
    }
}

pub fn int(value: i64) -> Expr {
    Expr::Literal(Value::Integer(value))
}

pub fn text(value: &str) -> Expr {
    Expr::Literal(Value::Text(value.to_string()))
}

/// `SELECT id FROM users`
pub fn users_select() -> SelectStmt {
    SelectStmt {
        distinct: false,
        columns: vec![column("id")],
        from: Some("users".to_string()),
        where_clause: None,
    }
}
