//! SQL expression rendering
//!
//! [`ExprFormatter`] dispatches on the expression variant and emits the
//! variant-specific token sequence through a shared [`FormatContext`],
//! recursing into child expressions. Statement-level sub-nodes (SELECT
//! bodies, column types, RAISE clauses) are delegated to a
//! [`StatementFormatter`] supplied by the caller; it writes through the same
//! context so indentation stays coherent across the whole render.

pub mod context;
mod keywords;
pub mod style;

use crate::ast::{ColumnType, Expr, InSet, NullCheck, RaiseFunction, SelectStmt};
use crate::error::{Error, Result};
use context::FormatContext;
use style::Style;

/// Statement-level formatting collaborator.
///
/// Implementations must leave the context's indent stack exactly as deep as
/// they found it; the expression formatter checks this after every call and
/// fails the render on drift. Errors propagate unchanged to the caller of
/// the top-level format call.
pub trait StatementFormatter {
    fn format_select(&mut self, select: &SelectStmt, ctx: &mut FormatContext<'_>) -> Result<()>;

    fn format_column_type(
        &mut self,
        column_type: &ColumnType,
        ctx: &mut FormatContext<'_>,
    ) -> Result<()>;

    fn format_raise(&mut self, raise: &RaiseFunction, ctx: &mut FormatContext<'_>) -> Result<()>;
}

/// Render one expression tree to SQL text.
///
/// The render either completes and returns a fully-formed string or fails
/// atomically; no partial output is observable.
pub fn format_expr<S: StatementFormatter>(
    expr: &Expr,
    style: &Style,
    statements: &mut S,
) -> Result<String> {
    let mut ctx = FormatContext::new(style);
    ExprFormatter::new(&mut ctx, statements).format(expr)?;
    ctx.finish()
}

/// Dispatches on an expression's variant and emits its token sequence.
pub struct ExprFormatter<'c, 'a, S: StatementFormatter> {
    ctx: &'c mut FormatContext<'a>,
    statements: &'c mut S,
    /// Trail of named child scopes, reported in malformed-input errors.
    scopes: Vec<&'static str>,
}

impl<'c, 'a, S: StatementFormatter> ExprFormatter<'c, 'a, S> {
    pub fn new(ctx: &'c mut FormatContext<'a>, statements: &'c mut S) -> Self {
        Self {
            ctx,
            statements,
            scopes: Vec::new(),
        }
    }

    /// Emit one expression node. Recurses through child expressions; each
    /// node is visited exactly once.
    pub fn format(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Empty => {}
            Expr::Literal(value) => self.ctx.emit_literal(value),
            Expr::CurrentTime(keyword) => self.ctx.emit_keyword(keyword.as_str()),
            Expr::BindParam(token) => self.ctx.emit_bind_param(token),
            Expr::Column {
                database,
                table,
                column,
            } => {
                if let Some(database) = database {
                    self.ctx.emit_identifier(database);
                    self.ctx.emit_identifier_separator();
                }
                if let Some(table) = table {
                    self.ctx.emit_identifier(table);
                    self.ctx.emit_identifier_separator();
                }
                self.ctx.emit_identifier(column);
            }
            Expr::UnaryOp { op, operand } => {
                self.ctx.emit_operator(op.token());
                self.child(operand, Some("unaryOp"))?;
            }
            Expr::BinaryOp { left, op, right } => {
                self.format(left)?;
                self.ctx.emit_operator(op.token());
                self.child(right, Some("binaryOp"))?;
            }
            Expr::FunctionCall { name, args } => {
                self.ctx.emit_identifier(name);
                self.ctx.open_function_parens();
                self.child_list(args, Some("funcArgs"))?;
                self.ctx.close_function_parens();
            }
            Expr::Parenthesized(inner) => {
                self.ctx.open_expression_parens();
                self.ctx.push_indent(None);
                self.format(inner)?;
                self.ctx.pop_indent()?;
                self.ctx.close_expression_parens();
            }
            Expr::Cast { operand, target } => {
                self.ctx.emit_keyword("CAST");
                self.ctx.open_expression_parens();
                self.ctx.push_indent(None);
                self.format(operand)?;
                self.ctx.emit_keyword("AS");
                self.delegated(|statements, ctx| statements.format_column_type(target, ctx))?;
                self.ctx.pop_indent()?;
                self.ctx.close_expression_parens();
            }
            Expr::Collate { operand, collation } => {
                self.format(operand)?;
                self.ctx.emit_keyword("COLLATE");
                self.ctx.emit_identifier(collation);
            }
            Expr::Like {
                operand,
                negated,
                verb,
                pattern,
                escape,
            } => {
                self.format(operand)?;
                if *negated {
                    self.ctx.emit_keyword("NOT");
                }
                self.ctx.emit_keyword(verb.keyword());
                self.child(pattern, Some("like"))?;
                if let Some(escape) = escape {
                    self.ctx.emit_keyword("ESCAPE");
                    self.child(escape, Some("likeEscape"))?;
                }
            }
            Expr::NullCheck(check) => match check {
                Some(NullCheck::IsNull) => self.ctx.emit_keyword("ISNULL"),
                Some(NullCheck::NotNull) => {
                    self.ctx.emit_keyword("NOT");
                    self.ctx.emit_keyword("NULL");
                }
                Some(NullCheck::Notnull) => self.ctx.emit_keyword("NOTNULL"),
                None => {}
            },
            Expr::Is {
                left,
                negated,
                right,
            } => {
                self.format(left)?;
                self.ctx.emit_keyword("IS");
                if *negated {
                    self.ctx.emit_keyword("NOT");
                }
                self.child(right, Some("is"))?;
            }
            Expr::Between {
                operand,
                negated,
                low,
                high,
            } => {
                self.format(operand)?;
                if *negated {
                    self.ctx.emit_keyword("NOT");
                }
                self.ctx.emit_keyword("BETWEEN");
                self.child(low, Some("between1"))?;
                self.ctx.emit_keyword("AND");
                self.child(high, Some("between2"))?;
            }
            Expr::In {
                operand,
                negated,
                set,
            } => {
                self.format(operand)?;
                if *negated {
                    self.ctx.emit_keyword("NOT");
                }
                self.ctx.emit_keyword("IN");
                match set {
                    InSet::Subquery(select) => {
                        self.ctx.open_definition_parens();
                        self.ctx.push_indent(None);
                        self.delegated(|statements, ctx| statements.format_select(select, ctx))?;
                        self.ctx.pop_indent()?;
                        self.ctx.close_definition_parens();
                    }
                    InSet::List(items) => {
                        if items.is_empty() {
                            return Err(self.malformed("IN list has no elements"));
                        }
                        self.ctx.open_expression_parens();
                        self.ctx.push_indent(None);
                        self.child_list(items, None)?;
                        self.ctx.pop_indent()?;
                        self.ctx.close_expression_parens();
                    }
                    InSet::Table { database, table } => {
                        if table.is_empty() {
                            return Err(self.malformed("IN table reference has no table name"));
                        }
                        if let Some(database) = database {
                            self.ctx.emit_identifier(database);
                            self.ctx.emit_identifier_separator();
                        }
                        self.ctx.emit_identifier(table);
                    }
                }
            }
            Expr::Exists(select) => {
                self.ctx.emit_keyword("EXISTS");
                self.ctx.open_definition_parens();
                self.ctx.push_indent(None);
                self.delegated(|statements, ctx| statements.format_select(select, ctx))?;
                self.ctx.pop_indent()?;
                self.ctx.close_definition_parens();
            }
            Expr::Case {
                subject,
                branches,
                else_expr,
            } => {
                self.ctx.emit_keyword("CASE");
                if let Some(subject) = subject {
                    self.child(subject, Some("case"))?;
                }
                // Branches alternate WHEN condition / THEN result. Each WHEN
                // opens a fresh line one level below CASE; its THEN stays on
                // the same line.
                for (position, branch) in branches.iter().enumerate() {
                    self.ctx.push_indent(Some("case"));
                    if position % 2 == 0 {
                        self.ctx.newline();
                        self.ctx.emit_keyword("WHEN");
                    } else {
                        self.ctx.emit_keyword("THEN");
                    }
                    self.format(branch)?;
                    self.ctx.pop_indent()?;
                }
                if let Some(else_expr) = else_expr {
                    self.ctx.push_indent(Some("case"));
                    self.ctx.newline();
                    self.ctx.emit_keyword("ELSE");
                    self.format(else_expr)?;
                    self.ctx.pop_indent()?;
                }
                self.ctx.newline();
                self.ctx.emit_keyword("END");
            }
            Expr::Subquery(select) => {
                self.ctx.open_definition_parens();
                self.ctx.push_indent(None);
                self.delegated(|statements, ctx| statements.format_select(select, ctx))?;
                self.ctx.pop_indent()?;
                self.ctx.close_definition_parens();
            }
            Expr::Raise(raise) => {
                self.delegated(|statements, ctx| statements.format_raise(raise, ctx))?;
            }
        }
        Ok(())
    }

    /// Format a child expression under a named scope. The tag never affects
    /// output content; it only labels the scope trail for diagnostics.
    fn child(&mut self, expr: &Expr, scope: Option<&'static str>) -> Result<()> {
        if let Some(scope) = scope {
            self.scopes.push(scope);
        }
        let result = self.format(expr);
        if scope.is_some() {
            self.scopes.pop();
        }
        result
    }

    /// Format an ordered list of child expressions, comma-and-space
    /// separated.
    fn child_list(&mut self, exprs: &[Expr], scope: Option<&'static str>) -> Result<()> {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.ctx.emit_comma();
            }
            self.child(expr, scope)?;
        }
        Ok(())
    }

    /// Run one collaborator call and verify it left the indent stack as
    /// deep as it found it.
    fn delegated<F>(&mut self, call: F) -> Result<()>
    where
        F: FnOnce(&mut S, &mut FormatContext<'a>) -> Result<()>,
    {
        let depth = self.ctx.depth();
        call(self.statements, self.ctx)?;
        if self.ctx.depth() != depth {
            return Err(Error::IndentImbalance {
                detail: format!(
                    "statement formatter changed indent depth from {} to {}",
                    depth,
                    self.ctx.depth()
                ),
            });
        }
        Ok(())
    }

    fn malformed(&self, message: &str) -> Error {
        let message = if self.scopes.is_empty() {
            message.to_string()
        } else {
            format!("{message} (in {})", self.scopes.join(" > "))
        };
        Error::MalformedExpression { message }
    }
}
