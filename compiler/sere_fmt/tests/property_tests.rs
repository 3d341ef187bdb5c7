//! Property-based tests for the printer.
//!
//! Generated code is fully parenthesized, so it exercises every place the
//! printer has to decide whether parentheses can be dropped. For each input:
//! 1. the printed output parses without errors, to the same tree up to
//!    positions
//! 2. printing is idempotent: format(parse(format(code))) == format(code)
//!
//! Arbitrary text is also fed through the parser and printer to check that
//! neither panics on malformed input.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use sere_fmt::format_module;
use sere_ir::ast::Module;
use sere_ir::StringInterner;

// -- Code Generation Strategies --

fn is_keyword(s: &str) -> bool {
    matches!(
        s,
        "and"
            | "as"
            | "assert"
            | "async"
            | "await"
            | "break"
            | "class"
            | "continue"
            | "def"
            | "del"
            | "elif"
            | "else"
            | "except"
            | "finally"
            | "for"
            | "from"
            | "global"
            | "if"
            | "import"
            | "in"
            | "is"
            | "lambda"
            | "nonlocal"
            | "not"
            | "or"
            | "pass"
            | "raise"
            | "return"
            | "try"
            | "while"
            | "with"
            | "yield"
    )
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,8}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| !is_keyword(s))
}

fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0.0f64..100.0).prop_map(|f| format!("{:.2}", f)),
        (1u32..50).prop_map(|n| format!("{n}j")),
        Just("'text'".to_string()),
        Just("None".to_string()),
        Just("True".to_string()),
        Just("False".to_string()),
    ]
}

fn leaf_strategy() -> impl Strategy<Value = String> {
    prop_oneof![identifier_strategy(), literal_strategy()]
}

const BINARY_OPS: &[&str] = &[
    "+", "-", "*", "/", "//", "%", "**", "<<", ">>", "&", "|", "^", "and", "or", "<", "<=", "==",
    "!=", "in", "not in", "is", "is not",
];

/// Fully parenthesized expressions.
fn expr_strategy() -> impl Strategy<Value = String> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(BINARY_OPS), inner.clone())
                .prop_map(|(l, op, r)| format!("({l} {op} {r})")),
            (prop::sample::select(&["-", "+", "~", "not "][..]), inner.clone())
                .prop_map(|(op, e)| format!("({op}{e})")),
            (inner.clone(), inner.clone(), inner.clone())
                .prop_map(|(a, b, c)| format!("({a} if {b} else {c})")),
            (identifier_strategy(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(f, args)| format!("{f}({})", args.join(", "))),
            (identifier_strategy(), inner.clone()).prop_map(|(v, i)| format!("{v}[{i}]")),
            (identifier_strategy(), identifier_strategy()).prop_map(|(v, a)| format!("{v}.{a}")),
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|items| format!("[{}]", items.join(", "))),
            prop::collection::vec(inner.clone(), 2..4)
                .prop_map(|items| format!("({})", items.join(", "))),
            (identifier_strategy(), inner.clone())
                .prop_map(|(x, e)| format!("[{x} for {x} in {e}]")),
            (identifier_strategy(), inner.clone())
                .prop_map(|(x, e)| format!("(lambda {x}: {e})")),
        ]
    })
}

fn statement_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (identifier_strategy(), expr_strategy()).prop_map(|(t, e)| format!("{t} = {e}\n")),
        expr_strategy().prop_map(|e| format!("{e}\n")),
        (expr_strategy(), identifier_strategy(), expr_strategy())
            .prop_map(|(c, t, e)| format!("if {c}:\n    {t} = {e}\nelse:\n    pass\n")),
        (identifier_strategy(), expr_strategy())
            .prop_map(|(x, e)| format!("for {x} in {e}:\n    print({x})\n")),
        (identifier_strategy(), identifier_strategy(), expr_strategy()).prop_map(|(f, a, e)| {
            format!("def {f}({a}):\n    return {e}\n")
        }),
    ]
}

fn module_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(statement_strategy(), 1..5).prop_map(|stmts| stmts.concat())
}

// -- Helpers --

fn parse_checked(source: &str, interner: &StringInterner) -> Module {
    let parsed = sere_parse::parse_source(source, interner);
    assert!(
        !parsed.has_errors(),
        "errors in {:?}: {:?} {:?}",
        source,
        parsed.lex_errors,
        parsed.parse_errors
    );
    parsed.module
}

/// The tree's debug rendering with every `span` field removed.
fn shape(module: &Module) -> String {
    format!("{module:#?}")
        .lines()
        .filter(|line| !line.trim_start().starts_with("span: "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print `source`, reparse the output, and check that the tree survived and
/// that printing again is stable.
fn check_round_trip(source: &str) -> Result<(), TestCaseError> {
    let interner = StringInterner::new();
    let first = parse_checked(source, &interner);
    let once = format_module(&first, &interner);
    let second = parse_checked(&once, &interner);
    prop_assert_eq!(shape(&second), shape(&first));
    let twice = format_module(&second, &interner);
    prop_assert_eq!(twice, once);
    Ok(())
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn formatted_expressions_reparse(expr in expr_strategy()) {
        check_round_trip(&format!("{expr}\n"))?;
    }

    #[test]
    fn formatted_modules_are_idempotent(source in module_strategy()) {
        check_round_trip(&source)?;
    }

    #[test]
    fn malformed_input_does_not_panic(source in "[a-z0-9 ()\\[\\]{}:=+*,|.\n]{0,64}") {
        let interner = StringInterner::new();
        let parsed = sere_parse::parse_source(&source, &interner);
        let _ = format_module(&parsed.module, &interner);
    }

    #[test]
    fn malformed_match_does_not_panic(
        body in "[a-z0-9 ()\\[\\]{}:*,|_=]{0,24}",
        guard in proptest::option::of(identifier_strategy()),
    ) {
        let guard = guard.map(|g| format!(" if {g}")).unwrap_or_default();
        let source = format!("match x:\n    case {body}{guard}:\n        pass\n");
        let interner = StringInterner::new();
        let parsed = sere_parse::parse_source(&source, &interner);
        let _ = format_module(&parsed.module, &interner);
    }
}
