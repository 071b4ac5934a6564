//! Style configuration tests
//!
//! Each axis of the style struct, exercised through whole-expression
//! renders rather than single primitives.

mod common;

use common::{column, int, text, users_select, StubStatements};
use pretty_assertions::assert_eq;
use sqlitefmt::ast::{BinaryOperator, Expr, InSet};
use sqlitefmt::{format_expr, IdentifierQuoting, KeywordCase, ParenSpacing, Style};

fn render_with(expr: &Expr, style: &Style) -> String {
    format_expr(expr, style, &mut StubStatements).expect("render should succeed")
}

fn sample_case() -> Expr {
    Expr::Case {
        subject: Some(Box::new(column("x"))),
        branches: vec![int(1), text("one")],
        else_expr: Some(Box::new(text("many"))),
    }
}

#[test]
fn default_style_uppercases_keywords() {
    assert_eq!(
        render_with(&sample_case(), &Style::default()),
        "CASE x\n    WHEN 1 THEN 'one'\n    ELSE 'many'\nEND"
    );
}

#[test]
fn lower_keywords_leave_identifiers_alone() {
    let style = Style {
        keyword_case: KeywordCase::Lower,
        ..Style::default()
    };
    let expr = Expr::Between {
        operand: Box::new(column("Price")),
        negated: true,
        low: Box::new(int(1)),
        high: Box::new(int(10)),
    };
    assert_eq!(render_with(&expr, &style), "Price not between 1 and 10");
}

#[test]
fn lower_keywords_in_case_layout() {
    let style = Style {
        keyword_case: KeywordCase::Lower,
        ..Style::default()
    };
    assert_eq!(
        render_with(&sample_case(), &style),
        "case x\n    when 1 then 'one'\n    else 'many'\nend"
    );
}

#[test]
fn indent_width_applies_to_nested_lines() {
    let style = Style {
        indent_width: 2,
        ..Style::default()
    };
    let expr = Expr::Exists(Box::new(users_select()));
    assert_eq!(
        render_with(&expr, &style),
        "EXISTS (\n  SELECT id FROM users\n)"
    );
}

#[test]
fn spaced_parens_pad_grouping_and_in_lists() {
    let style = Style {
        paren_spacing: ParenSpacing::Spaced,
        ..Style::default()
    };
    let grouped = Expr::Parenthesized(Box::new(Expr::BinaryOp {
        left: Box::new(column("a")),
        op: BinaryOperator::Plus,
        right: Box::new(column("b")),
    }));
    assert_eq!(render_with(&grouped, &style), "( a+b )");

    let in_list = Expr::In {
        operand: Box::new(column("x")),
        negated: false,
        set: InSet::List(vec![int(1), int(2)]),
    };
    assert_eq!(render_with(&in_list, &style), "x IN ( 1, 2 )");
}

#[test]
fn spaced_parens_do_not_touch_function_calls() {
    let style = Style {
        paren_spacing: ParenSpacing::Spaced,
        ..Style::default()
    };
    let expr = Expr::FunctionCall {
        name: "COUNT".to_string(),
        args: vec![column("x")],
    };
    assert_eq!(render_with(&expr, &style), "COUNT(x)");
}

#[test]
fn always_quoting_wraps_every_identifier() {
    let style = Style {
        identifier_quoting: IdentifierQuoting::Always,
        ..Style::default()
    };
    let expr = Expr::Column {
        database: Some("main".to_string()),
        table: None,
        column: "id".to_string(),
    };
    assert_eq!(render_with(&expr, &style), "\"main\".\"id\"");
}

#[test]
fn never_quoting_leaves_reserved_words_bare() {
    let style = Style {
        identifier_quoting: IdentifierQuoting::Never,
        ..Style::default()
    };
    assert_eq!(render_with(&column("order"), &style), "order");
}

#[test]
fn same_tree_and_style_produce_identical_text() {
    let expr = sample_case();
    let style = Style {
        keyword_case: KeywordCase::Lower,
        identifier_quoting: IdentifierQuoting::Always,
        indent_width: 8,
        paren_spacing: ParenSpacing::Spaced,
    };
    assert_eq!(render_with(&expr, &style), render_with(&expr, &style));
}
