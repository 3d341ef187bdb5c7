//! Expression parsing: precedence, associativity, atoms and displays.

use pretty_assertions::assert_eq;
use sere_ir::ast::{
    Arg, BinaryOp, BoolOp, CmpOp, ComprehensionKind, DictItem, Expr, ExprKind, Literal, UnaryOp,
};
use sere_ir::{Span, StringInterner};

use super::Parsed;

fn int(parsed: &Parsed, expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Literal(Literal::Int(text)) => parsed.text(*text).to_string(),
        other => panic!("expected int literal, got {other:?}"),
    }
}

fn name(parsed: &Parsed, expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Name(name) => parsed.text(*name).to_string(),
        other => panic!("expected name, got {other:?}"),
    }
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let parsed = Parsed::new("1 + 2 * 3\n");
    let expr = parsed.only_expr();

    let ExprKind::BinOp {
        op: BinaryOp::Add,
        left,
        right,
    } = &expr.kind
    else {
        panic!("expected addition, got {:?}", expr.kind);
    };
    assert_eq!(int(&parsed, left), "1");
    let ExprKind::BinOp {
        op: BinaryOp::Mul,
        left: two,
        right: three,
    } = &right.kind
    else {
        panic!("expected multiplication, got {:?}", right.kind);
    };
    assert_eq!(int(&parsed, two), "2");
    assert_eq!(int(&parsed, three), "3");
    assert_eq!(expr.span, Span::new(0, 9));
}

#[test]
fn test_subtraction_is_left_associative() {
    let parsed = Parsed::new("a - b - c");
    let expr = parsed.only_expr();

    let ExprKind::BinOp {
        op: BinaryOp::Sub,
        left,
        right,
    } = &expr.kind
    else {
        panic!("expected subtraction");
    };
    assert!(matches!(left.kind, ExprKind::BinOp { op: BinaryOp::Sub, .. }));
    assert_eq!(name(&parsed, right), "c");
}

#[test]
fn test_power_is_right_associative() {
    let parsed = Parsed::new("2 ** 3 ** 2");
    let expr = parsed.only_expr();

    let ExprKind::BinOp {
        op: BinaryOp::Pow,
        left,
        right,
    } = &expr.kind
    else {
        panic!("expected power");
    };
    assert_eq!(int(&parsed, left), "2");
    let ExprKind::BinOp {
        op: BinaryOp::Pow,
        left: three,
        right: two,
    } = &right.kind
    else {
        panic!("expected nested power on the right");
    };
    assert_eq!(int(&parsed, three), "3");
    assert_eq!(int(&parsed, two), "2");
}

#[test]
fn test_unary_minus_applies_to_power() {
    let parsed = Parsed::new("-2 ** 2");
    let expr = parsed.only_expr();

    let ExprKind::UnaryOp {
        op: UnaryOp::Neg,
        operand,
    } = &expr.kind
    else {
        panic!("expected negation, got {:?}", expr.kind);
    };
    assert!(matches!(operand.kind, ExprKind::BinOp { op: BinaryOp::Pow, .. }));
}

#[test]
fn test_comparison_chain_is_one_node() {
    let parsed = Parsed::new("a < b <= c");
    let expr = parsed.only_expr();

    let ExprKind::Compare { operands, ops } = &expr.kind else {
        panic!("expected comparison");
    };
    assert_eq!(ops, &vec![CmpOp::Lt, CmpOp::LtEq]);
    let names: Vec<String> = operands.iter().map(|e| name(&parsed, e)).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_two_word_comparison_operators() {
    let parsed = Parsed::new("a not in b is not c");
    let ExprKind::Compare { ops, .. } = &parsed.only_expr().kind else {
        panic!("expected comparison");
    };
    assert_eq!(ops, &vec![CmpOp::NotIn, CmpOp::IsNot]);
}

#[test]
fn test_boolean_operators_flatten_by_precedence() {
    let parsed = Parsed::new("a or b or c and d");
    let ExprKind::BoolOp { op, values } = &parsed.only_expr().kind else {
        panic!("expected boolean operation");
    };
    assert_eq!(*op, BoolOp::Or);
    assert_eq!(values.len(), 3);
    assert!(matches!(
        &values[2].kind,
        ExprKind::BoolOp { op: BoolOp::And, values } if values.len() == 2
    ));
}

#[test]
fn test_not_binds_looser_than_comparison() {
    let parsed = Parsed::new("not a == b");
    let ExprKind::UnaryOp {
        op: UnaryOp::Not,
        operand,
    } = &parsed.only_expr().kind
    else {
        panic!("expected `not`");
    };
    assert!(matches!(operand.kind, ExprKind::Compare { .. }));
}

#[test]
fn test_conditional_expression() {
    let parsed = Parsed::new("x if c else y");
    let ExprKind::Conditional { test, body, orelse } = &parsed.only_expr().kind else {
        panic!("expected conditional");
    };
    assert_eq!(name(&parsed, test), "c");
    assert_eq!(name(&parsed, body), "x");
    assert_eq!(name(&parsed, orelse), "y");
}

#[test]
fn test_lambda_with_default() {
    let parsed = Parsed::new("lambda x, y=1: x + y");
    let ExprKind::Lambda { params, body } = &parsed.only_expr().kind else {
        panic!("expected lambda");
    };
    assert_eq!(params.args.len(), 2);
    assert!(params.args[0].default.is_none());
    assert!(params.args[1].default.is_some());
    assert!(matches!(body.kind, ExprKind::BinOp { op: BinaryOp::Add, .. }));
}

#[test]
fn test_named_expression_in_parentheses() {
    let parsed = Parsed::new("(n := 10)");
    let ExprKind::Named { target, value } = &parsed.only_expr().kind else {
        panic!("expected named expression");
    };
    assert_eq!(*target, parsed.name("n"));
    assert_eq!(int(&parsed, value), "10");
}

#[test]
fn test_tuples() {
    let parsed = Parsed::new("()\n(1,)\n(1, 2)\n(1)\n");
    assert!(!parsed.output.has_errors());
    let exprs: Vec<&ExprKind> = parsed
        .body()
        .iter()
        .map(|stmt| match &stmt.kind {
            sere_ir::ast::StmtKind::Expr(expr) => &expr.kind,
            other => panic!("expected expression statement, got {other:?}"),
        })
        .collect();

    assert!(matches!(exprs[0], ExprKind::Tuple(items) if items.is_empty()));
    assert!(matches!(exprs[1], ExprKind::Tuple(items) if items.len() == 1));
    assert!(matches!(exprs[2], ExprKind::Tuple(items) if items.len() == 2));
    assert!(matches!(exprs[3], ExprKind::Literal(Literal::Int(_))));
}

#[test]
fn test_bare_tuple_statement() {
    let parsed = Parsed::new("a, *b");
    let ExprKind::Tuple(items) = &parsed.only_expr().kind else {
        panic!("expected tuple");
    };
    assert_eq!(items.len(), 2);
    assert!(matches!(items[1].kind, ExprKind::Star(_)));
}

#[test]
fn test_list_comprehension_with_condition() {
    let parsed = Parsed::new("[x * 2 for x in xs if x]");
    let ExprKind::Comprehension(comp) = &parsed.only_expr().kind else {
        panic!("expected comprehension");
    };
    assert_eq!(comp.kind, ComprehensionKind::List);
    assert_eq!(comp.clauses.len(), 1);
    assert!(!comp.clauses[0].is_async);
    assert_eq!(name(&parsed, &comp.clauses[0].target), "x");
    assert_eq!(name(&parsed, &comp.clauses[0].iter), "xs");
    assert_eq!(comp.clauses[0].conditions.len(), 1);
}

#[test]
fn test_nested_comprehension_clauses() {
    let parsed = Parsed::new("[y for x in xs for y in x]");
    let ExprKind::Comprehension(comp) = &parsed.only_expr().kind else {
        panic!("expected comprehension");
    };
    assert_eq!(comp.clauses.len(), 2);
}

#[test]
fn test_dict_comprehension_with_tuple_target() {
    let parsed = Parsed::new("{k: v for k, v in items}");
    let ExprKind::Comprehension(comp) = &parsed.only_expr().kind else {
        panic!("expected comprehension");
    };
    assert_eq!(comp.kind, ComprehensionKind::Dict);
    assert!(comp.value.is_some());
    assert!(matches!(&comp.clauses[0].target.kind, ExprKind::Tuple(t) if t.len() == 2));
}

#[test]
fn test_set_and_dict_displays() {
    let parsed = Parsed::new("{1, 2}\n{}\n{**a, 'b': 1}\n");
    assert!(!parsed.output.has_errors());
    let kinds: Vec<&ExprKind> = parsed
        .body()
        .iter()
        .map(|stmt| match &stmt.kind {
            sere_ir::ast::StmtKind::Expr(expr) => &expr.kind,
            other => panic!("expected expression statement, got {other:?}"),
        })
        .collect();

    assert!(matches!(kinds[0], ExprKind::Set(items) if items.len() == 2));
    assert!(matches!(kinds[1], ExprKind::Dict(items) if items.is_empty()));
    let ExprKind::Dict(items) = kinds[2] else {
        panic!("expected dict");
    };
    assert!(matches!(items[0], DictItem::Unpack(_)));
    assert!(matches!(items[1], DictItem::Pair { .. }));
}

#[test]
fn test_call_arguments() {
    let parsed = Parsed::new("f(a, *b, c=1, **d)");
    let ExprKind::Call { func, args } = &parsed.only_expr().kind else {
        panic!("expected call");
    };
    assert_eq!(name(&parsed, func), "f");
    assert_eq!(args.len(), 4);
    assert!(matches!(args[0], Arg::Positional(_)));
    assert!(matches!(args[1], Arg::Starred(_)));
    assert!(matches!(&args[2], Arg::Keyword { name, .. } if *name == parsed.name("c")));
    assert!(matches!(args[3], Arg::DoubleStarred(_)));
}

#[test]
fn test_bare_generator_argument() {
    let parsed = Parsed::new("sum(x for x in xs)");
    let ExprKind::Call { args, .. } = &parsed.only_expr().kind else {
        panic!("expected call");
    };
    assert_eq!(args.len(), 1);
    assert!(matches!(
        &args[0],
        Arg::Positional(Expr { kind: ExprKind::Comprehension(comp), .. })
            if comp.kind == ComprehensionKind::Generator
    ));
}

#[test]
fn test_slices_in_subscript() {
    let parsed = Parsed::new("x[1:2, ::3]");
    let ExprKind::Subscript { value, index } = &parsed.only_expr().kind else {
        panic!("expected subscript");
    };
    assert_eq!(name(&parsed, value), "x");
    let ExprKind::Tuple(parts) = &index.kind else {
        panic!("expected tuple index, got {:?}", index.kind);
    };
    assert!(matches!(
        &parts[0].kind,
        ExprKind::Slice { lower: Some(_), upper: Some(_), step: None }
    ));
    assert!(matches!(
        &parts[1].kind,
        ExprKind::Slice { lower: None, upper: None, step: Some(_) }
    ));
}

#[test]
fn test_attribute_chain_and_call() {
    let parsed = Parsed::new("a.b.c()");
    let ExprKind::Call { func, args } = &parsed.only_expr().kind else {
        panic!("expected call");
    };
    assert!(args.is_empty());
    let ExprKind::Attribute { value, attr } = &func.kind else {
        panic!("expected attribute");
    };
    assert_eq!(parsed.text(*attr), "c");
    assert!(matches!(value.kind, ExprKind::Attribute { .. }));
}

#[test]
fn test_await_binds_to_primary() {
    let parsed = Parsed::new("await f() + 1");
    let ExprKind::BinOp { left, .. } = &parsed.only_expr().kind else {
        panic!("expected addition");
    };
    assert!(matches!(left.kind, ExprKind::Await(_)));
}

#[test]
fn test_soft_keywords_are_names_in_expressions() {
    let parsed = Parsed::new("match + case");
    let ExprKind::BinOp { left, right, .. } = &parsed.only_expr().kind else {
        panic!("expected addition");
    };
    assert_eq!(name(&parsed, left), "match");
    assert_eq!(name(&parsed, right), "case");
}

#[test]
fn test_literals_keep_source_text() {
    let parsed = Parsed::new("0x1F");
    assert_eq!(int(&parsed, parsed.only_expr()), "0x1F");
}

#[test]
fn test_expression_entry_point() {
    let interner = StringInterner::new();
    let tokens = sere_lexer::lex("1, 2\n", &interner);
    let output = crate::parse_expression_only(&tokens, &interner);

    assert!(!output.has_errors());
    assert!(matches!(
        output.node.map(|e| e.kind),
        Some(ExprKind::Tuple(items)) if items.len() == 2
    ));
}

#[test]
fn test_expression_entry_point_rejects_statements() {
    let interner = StringInterner::new();
    let tokens = sere_lexer::lex("x = 1", &interner);
    let output = crate::parse_expression_only(&tokens, &interner);

    assert!(output.node.is_some());
    assert_eq!(output.errors.len(), 1);
    assert!(output.errors[0].skipped.is_some());
}
