//! Error kinds, partial trees and statement resynchronization.

use pretty_assertions::assert_eq;
use sere_diagnostic::ErrorCode;
use sere_ir::ast::StmtKind;
use sere_ir::{StringInterner, Token, TokenKind, TokenList};

use super::Parsed;
use crate::ParseErrorKind;

#[test]
fn test_unterminated_block_keeps_if() {
    let parsed = Parsed::new("if x:\n");
    assert_eq!(parsed.error_kinds(), vec![ParseErrorKind::UnterminatedBlock]);
    assert_eq!(parsed.body().len(), 1);
    assert!(matches!(
        &parsed.body()[0].kind,
        StmtKind::If { body, .. } if body.is_empty()
    ));
}

#[test]
fn test_unindented_body_is_parsed_after_error() {
    let parsed = Parsed::new("while x:\ny = 1\n");
    assert_eq!(parsed.error_kinds(), vec![ParseErrorKind::UnterminatedBlock]);
    assert_eq!(parsed.body().len(), 2);
    assert!(matches!(parsed.body()[1].kind, StmtKind::Assign { .. }));
}

#[test]
fn test_missing_operand_points_at_operator() {
    let parsed = Parsed::new("x = 1 +\n");
    assert_eq!(parsed.error_kinds(), vec![ParseErrorKind::ExpectedExpression]);
    assert_eq!(parsed.output.errors[0].span.to_range(), 6..7);
}

#[test]
fn test_recovery_resumes_at_next_line() {
    let parsed = Parsed::new("x = = 1\ny = 2\n");
    assert_eq!(parsed.output.errors.len(), 1);
    assert!(parsed.output.errors[0].skipped.is_some());
    assert_eq!(parsed.body().len(), 1);
    let StmtKind::Assign { targets, .. } = &parsed.body()[0].kind else {
        panic!("expected the second assignment");
    };
    assert_eq!(targets[0].span.start, 8);
}

#[test]
fn test_recovery_skips_indented_block_of_bad_header() {
    let parsed = Parsed::new("if x y:\n    a = 1\n    b = 2\nc = 3\n");
    assert_eq!(parsed.output.errors.len(), 1);
    assert_eq!(parsed.body().len(), 1);
}

#[test]
fn test_errors_inside_block_stay_inside() {
    let parsed = Parsed::new("def f():\n    return )\n    pass\nx = 1\n");
    assert_eq!(parsed.output.errors.len(), 1);
    assert_eq!(parsed.body().len(), 2);
    let StmtKind::FunctionDef(def) = &parsed.body()[0].kind else {
        panic!("expected def");
    };
    assert_eq!(def.body.len(), 1);
    assert!(matches!(def.body[0].kind, StmtKind::Pass));
}

#[test]
fn test_several_errors_in_one_module() {
    let parsed = Parsed::new("1 +\nok = 1\n2 *\n");
    assert_eq!(
        parsed.error_kinds(),
        vec![
            ParseErrorKind::ExpectedExpression,
            ParseErrorKind::ExpectedExpression,
        ]
    );
    assert_eq!(parsed.body().len(), 1);
}

#[test]
fn test_try_without_handler_keeps_node() {
    let parsed = Parsed::new("try:\n    f()\nx = 1\n");
    assert_eq!(parsed.error_kinds(), vec![ParseErrorKind::TryWithoutHandler]);
    assert_eq!(parsed.body().len(), 2);
    assert!(matches!(parsed.body()[0].kind, StmtKind::Try { .. }));
}

#[test]
fn test_decorator_without_target() {
    let parsed = Parsed::new("@cache\nx = 1\n");
    assert_eq!(
        parsed.error_kinds(),
        vec![ParseErrorKind::DecoratorWithoutTarget]
    );
    assert_eq!(parsed.body().len(), 1);
    assert!(matches!(parsed.body()[0].kind, StmtKind::Assign { .. }));
}

#[test]
fn test_invalid_parameter_orders() {
    let cases = [
        "def f(a=1, b):\n    pass\n",
        "def f(*a, *b):\n    pass\n",
        "def f(**k, a):\n    pass\n",
        "def f(**k, *a):\n    pass\n",
        "def f(*):\n    pass\n",
    ];
    for source in cases {
        let parsed = Parsed::new(source);
        assert_eq!(
            parsed.error_kinds(),
            vec![ParseErrorKind::InvalidParameters],
            "for {source:?}"
        );
        assert!(matches!(parsed.body()[0].kind, StmtKind::FunctionDef(_)));
    }
}

#[test]
fn test_lambda_star_after_double_star() {
    let parsed = Parsed::new("f = lambda **k, *a: 0\n");
    assert_eq!(parsed.error_kinds(), vec![ParseErrorKind::InvalidParameters]);
    assert_eq!(parsed.output.errors[0].span.to_range(), 16..17);
}

#[test]
fn test_invalid_assignment_targets() {
    let cases = [
        ("f() = 1\n", "cannot assign to a function call"),
        ("1 = x\n", "cannot assign to a literal"),
        ("a, b += 1\n", "cannot assign to a tuple"),
        ("del a + b\n", "cannot delete an operator expression"),
        ("for 1 in x:\n    pass\n", "cannot assign to a literal"),
    ];
    for (source, message) in cases {
        let parsed = Parsed::new(source);
        assert_eq!(
            parsed.error_kinds(),
            vec![ParseErrorKind::InvalidAssignmentTarget],
            "for {source:?}"
        );
        assert_eq!(parsed.output.errors[0].message, message);
    }
}

#[test]
fn test_unexpected_dedent_at_top_level() {
    let parsed = Parsed::new("    x = 1\ny = 2\n");
    assert!(parsed.output.has_errors());
    assert!(parsed
        .body()
        .iter()
        .any(|stmt| matches!(stmt.kind, StmtKind::Assign { .. })));
}

#[test]
fn test_unclosed_bracket() {
    let parsed = Parsed::new("x = [1, 2");
    assert_eq!(parsed.error_kinds(), vec![ParseErrorKind::EndOfInput]);
    assert!(parsed.body().is_empty());

    for source in ["x = (", "x = (1 +", "f(a,\n", "d = {'k':"] {
        let parsed = Parsed::new(source);
        assert_eq!(
            parsed.error_kinds(),
            vec![ParseErrorKind::EndOfInput],
            "for {source:?}"
        );
    }
}

#[test]
fn test_unclosed_bracket_inside_block() {
    let parsed = Parsed::new("if x:\n    f(a,\n");
    assert_eq!(parsed.error_kinds(), vec![ParseErrorKind::EndOfInput]);
    assert!(matches!(
        &parsed.body()[0].kind,
        StmtKind::If { body, .. } if body.is_empty()
    ));
}

#[test]
fn test_end_of_input_in_block() {
    // A token stream cut off before the block's `Dedent`.
    let interner = StringInterner::new();
    let tokens = TokenList::from_vec(vec![
        Token::dummy(TokenKind::If),
        Token::dummy(TokenKind::Ident(interner.intern("x"))),
        Token::dummy(TokenKind::Colon),
        Token::dummy(TokenKind::Newline),
        Token::dummy(TokenKind::Indent),
        Token::dummy(TokenKind::Pass),
        Token::dummy(TokenKind::Newline),
        Token::dummy(TokenKind::Eof),
    ]);
    let output = crate::parse_module(&tokens, &interner);

    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, ParseErrorKind::EndOfInput);
    assert!(matches!(
        &output.node.body[0].kind,
        StmtKind::If { body, .. } if body.len() == 1
    ));
}

#[test]
fn test_diagnostics_carry_parser_codes() {
    let parsed = Parsed::new("if x:\n");
    let diagnostics = parsed.output.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics.as_slice()[0];
    assert_eq!(diagnostic.code, ErrorCode::E1003);
    assert!(diagnostic.code.is_parser_error());
}
