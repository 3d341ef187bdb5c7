//! Match statements and case patterns.

use pretty_assertions::assert_eq;
use sere_ir::ast::{BinaryOp, ExprKind, Literal, MatchStmt, Pattern, PatternKind, StmtKind};

use super::Parsed;
use crate::ParseErrorKind;

fn match_stmt(parsed: &Parsed) -> &MatchStmt {
    match &parsed.only_stmt().kind {
        StmtKind::Match(stmt) => stmt,
        other => panic!("expected match statement, got {other:?}"),
    }
}

/// Parse `match s:` with one case whose pattern is `pattern`.
fn single_case(pattern: &str) -> Parsed {
    Parsed::new(&format!("match s:\n    case {pattern}:\n        pass\n"))
}

fn case_pattern(parsed: &Parsed) -> &Pattern {
    &match_stmt(parsed).cases[0].pattern
}

#[test]
fn test_match_with_four_case_kinds() {
    let parsed = Parsed::new(
        "match x:\n    case [1, *rest]:\n        a\n    case {\"k\": v, **r}:\n        b\n    case Point(x=0, y=0):\n        c\n    case _:\n        d\n",
    );
    let stmt = match_stmt(&parsed);
    assert_eq!(stmt.subject.kind, ExprKind::Name(parsed.name("x")));
    assert_eq!(stmt.cases.len(), 4);

    let PatternKind::Sequence(elements) = &stmt.cases[0].pattern.kind else {
        panic!("expected sequence pattern");
    };
    assert!(matches!(elements[0].kind, PatternKind::Literal(_)));
    assert_eq!(elements[1].kind, PatternKind::Star(Some(parsed.name("rest"))));

    let PatternKind::Mapping { entries, rest } = &stmt.cases[1].pattern.kind else {
        panic!("expected mapping pattern");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].pattern.kind, PatternKind::Capture(parsed.name("v")));
    assert_eq!(*rest, Some(parsed.name("r")));

    let PatternKind::Class {
        cls,
        positional,
        keywords,
    } = &stmt.cases[2].pattern.kind
    else {
        panic!("expected class pattern");
    };
    assert_eq!(cls.parts, vec![parsed.name("Point")]);
    assert!(positional.is_empty());
    let names: Vec<&str> = keywords.iter().map(|k| parsed.text(k.name)).collect();
    assert_eq!(names, vec!["x", "y"]);

    assert_eq!(stmt.cases[3].pattern.kind, PatternKind::Wildcard);
    assert!(stmt.cases.iter().all(|case| case.body.len() == 1));
}

#[test]
fn test_tuple_subject() {
    let parsed = Parsed::new("match a, *b:\n    case _:\n        pass\n");
    assert!(matches!(
        &match_stmt(&parsed).subject.kind,
        ExprKind::Tuple(items) if items.len() == 2
    ));
}

#[test]
fn test_match_subscript_assignment_is_not_a_match() {
    let parsed = Parsed::new("match[0] = 1\n");
    let StmtKind::Assign { targets, .. } = &parsed.only_stmt().kind else {
        panic!("expected assignment");
    };
    assert!(matches!(targets[0].kind, ExprKind::Subscript { .. }));
}

#[test]
fn test_match_header_without_case_block_is_an_error() {
    // Without an indented `case` the line is an ordinary statement, which
    // cannot end in `:`.
    let parsed = Parsed::new("match x:\n    pass\n");
    assert!(parsed.output.has_errors());
    assert!(parsed
        .body()
        .iter()
        .all(|stmt| !matches!(stmt.kind, StmtKind::Match(_))));
}

#[test]
fn test_guard_and_open_sequence() {
    let parsed = Parsed::new("match p:\n    case a, b if a > b:\n        pass\n");
    let case = &match_stmt(&parsed).cases[0];
    assert!(matches!(&case.pattern.kind, PatternKind::Sequence(e) if e.len() == 2));
    assert!(matches!(
        case.guard.as_ref().map(|g| &g.kind),
        Some(ExprKind::Compare { .. })
    ));
}

#[test]
fn test_literal_patterns() {
    let parsed = single_case("-1 | 1.5 | 2 + 3j | \"s\" | None | True");
    let PatternKind::Or(alternatives) = &case_pattern(&parsed).kind else {
        panic!("expected or-pattern");
    };
    assert_eq!(alternatives.len(), 6);
    let literal = |index: usize| match &alternatives[index].kind {
        PatternKind::Literal(expr) => &expr.kind,
        other => panic!("expected literal pattern, got {other:?}"),
    };
    assert!(matches!(literal(0), ExprKind::UnaryOp { .. }));
    assert!(matches!(literal(1), ExprKind::Literal(Literal::Float(_))));
    assert!(matches!(literal(2), ExprKind::BinOp { op: BinaryOp::Add, .. }));
    assert!(matches!(literal(3), ExprKind::Literal(Literal::Str(_))));
    assert!(matches!(literal(4), ExprKind::Literal(Literal::None)));
    assert!(matches!(literal(5), ExprKind::Literal(Literal::True)));
}

#[test]
fn test_value_pattern() {
    let parsed = single_case("Color.RED");
    let PatternKind::Value(name) = &case_pattern(&parsed).kind else {
        panic!("expected value pattern");
    };
    assert!(name.is_qualified());
    assert_eq!(parsed.text(name.parts[1]), "RED");
}

#[test]
fn test_group_sequence_and_as() {
    let parsed = Parsed::new(
        "match s:\n    case (x):\n        pass\n    case (x,):\n        pass\n    case ():\n        pass\n    case [a, b] as pair:\n        pass\n",
    );
    let cases = &match_stmt(&parsed).cases;
    assert!(matches!(cases[0].pattern.kind, PatternKind::Group(_)));
    assert!(matches!(&cases[1].pattern.kind, PatternKind::Sequence(e) if e.len() == 1));
    assert!(matches!(&cases[2].pattern.kind, PatternKind::Sequence(e) if e.is_empty()));
    let PatternKind::As { pattern, name } = &cases[3].pattern.kind else {
        panic!("expected as-pattern");
    };
    assert_eq!(*name, parsed.name("pair"));
    assert!(matches!(pattern.kind, PatternKind::Sequence(_)));
}

#[test]
fn test_class_pattern_with_positional_and_keyword() {
    let parsed = single_case("mod.Point(0, y=[_, *_])");
    let PatternKind::Class {
        cls,
        positional,
        keywords,
    } = &case_pattern(&parsed).kind
    else {
        panic!("expected class pattern");
    };
    assert_eq!(cls.parts.len(), 2);
    assert_eq!(positional.len(), 1);
    assert_eq!(keywords.len(), 1);
    assert!(matches!(
        &keywords[0].pattern.kind,
        PatternKind::Sequence(e) if e[1].kind == PatternKind::Star(None)
    ));
}

#[test]
fn test_soft_keywords_as_capture_names() {
    let parsed = single_case("[match, case]");
    let PatternKind::Sequence(elements) = &case_pattern(&parsed).kind else {
        panic!("expected sequence");
    };
    assert_eq!(elements[0].kind, PatternKind::Capture(parsed.name("match")));
    assert_eq!(elements[1].kind, PatternKind::Capture(parsed.name("case")));
}

#[test]
fn test_alternatives_binding_different_names() {
    let parsed = single_case("1 | x");
    assert_eq!(
        parsed.error_kinds(),
        vec![ParseErrorKind::InconsistentPatternBindings]
    );
    // The case is kept.
    assert_eq!(parsed.body().len(), 1);
}

#[test]
fn test_alternatives_binding_same_names() {
    let parsed = single_case("[x, 1] | [1, x]");
    assert!(!parsed.output.has_errors());
}

#[test]
fn test_two_stars_in_sequence() {
    let parsed = single_case("[*a, *b]");
    assert_eq!(
        parsed.error_kinds(),
        vec![ParseErrorKind::MultipleStarPatterns]
    );
}

#[test]
fn test_duplicate_mapping_key() {
    let parsed = single_case("{\"k\": 1, \"k\": 2}");
    assert_eq!(
        parsed.error_kinds(),
        vec![ParseErrorKind::DuplicateMappingKey]
    );
}

#[test]
fn test_duplicate_keys_compare_by_value() {
    let duplicates = [
        "{\"k\": 1, 'k': 2}",
        "{'k': a, '''k''': b}",
        "{'ab': a, 'a' \"b\": b}",
        "{'\\x41': a, 'A': b}",
        "{b'k': a, b\"k\": b}",
        "{1: a, 0x1: b}",
        "{10: a, 1_0: b}",
        "{1: a, 1.0: b}",
        "{1: a, True: b}",
        "{0: a, -0: b}",
        "{-2.5: a, -2.50: b}",
        "{1 + 2j: a, 1.0 + 2.0j: b}",
        "{None: a, None: b}",
        "{0: a, False: b}",
    ];
    for key_pair in duplicates {
        let parsed = single_case(key_pair);
        assert_eq!(
            parsed.error_kinds(),
            vec![ParseErrorKind::DuplicateMappingKey],
            "for {key_pair:?}"
        );
    }
}

#[test]
fn test_distinct_keys_pass() {
    let distinct = [
        "{'k': a, b'k': b}",
        "{'k': a, 'K': b}",
        "{1: a, 1.5: b}",
        "{1: a, 1j: b}",
        "{1 + 2j: a, 1 - 2j: b}",
        "{None: a, 0: b}",
        "{99999999999999999999: a, 99999999999999999998: b}",
    ];
    for key_pair in distinct {
        let parsed = single_case(key_pair);
        assert!(!parsed.output.has_errors(), "for {key_pair:?}");
    }
}

#[test]
fn test_imaginary_real_part_rejected() {
    for source in ["1j + 2j", "-1j - 2j"] {
        let parsed = single_case(source);
        assert_eq!(
            parsed.error_kinds(),
            vec![ParseErrorKind::InvalidPattern],
            "for {source:?}"
        );
        assert!(matches!(
            case_pattern(&parsed).kind,
            PatternKind::Literal(_)
        ));
    }
}

#[test]
fn test_negative_and_positive_keys_differ() {
    let parsed = single_case("{1: a, -1: b}");
    assert!(!parsed.output.has_errors());
}

#[test]
fn test_duplicate_class_keyword() {
    let parsed = single_case("P(x=a, x=b)");
    assert_eq!(
        parsed.error_kinds(),
        vec![ParseErrorKind::DuplicateKeywordPattern]
    );
}

#[test]
fn test_name_bound_twice() {
    let parsed = single_case("[x, x]");
    assert_eq!(parsed.error_kinds(), vec![ParseErrorKind::DuplicateBinding]);
}

#[test]
fn test_positional_after_keyword() {
    let parsed = single_case("P(x=1, 2)");
    assert_eq!(parsed.error_kinds(), vec![ParseErrorKind::InvalidPattern]);
}

#[test]
fn test_star_outside_sequence() {
    let parsed = single_case("*rest");
    assert_eq!(parsed.error_kinds(), vec![ParseErrorKind::InvalidPattern]);
}

#[test]
fn test_mapping_rest_must_be_last() {
    let parsed = single_case("{**r, \"k\": v}");
    assert!(parsed.error_kinds().contains(&ParseErrorKind::InvalidPattern));
}

#[test]
fn test_as_wildcard_rejected() {
    let parsed = single_case("x as _");
    assert_eq!(parsed.error_kinds(), vec![ParseErrorKind::InvalidPattern]);
}

#[test]
fn test_bad_case_does_not_lose_later_cases() {
    let parsed = Parsed::new(
        "match s:\n    case [1 2]:\n        pass\n    case y:\n        pass\nz = 1\n",
    );
    assert_eq!(parsed.output.errors.len(), 1);
    assert_eq!(parsed.body().len(), 2);
    let StmtKind::Match(stmt) = &parsed.body()[0].kind else {
        panic!("expected match");
    };
    assert_eq!(stmt.cases.len(), 1);
    assert_eq!(stmt.cases[0].pattern.kind, PatternKind::Capture(parsed.name("y")));
}
