use pretty_assertions::assert_eq;

use super::Fixture;
use crate::CompileError;

fn compile_error(source: &str) -> CompileError {
    Fixture::new(source)
        .try_plan()
        .expect_err("plan should be rejected")
}

#[test]
fn test_plan_has_one_entry_per_case() {
    let fixture = Fixture::new(
        "match x:\n    case 1:\n        pass\n    case [a, *_] if a:\n        pass\n    case _:\n        pass\n",
    );
    let plan = fixture.plan();
    assert_eq!(plan.len(), 3);
    assert!(!plan.is_empty());
}

#[test]
fn test_capture_before_last_case_is_unreachable() {
    let error = compile_error("match x:\n    case y:\n        pass\n    case 1:\n        pass\n");
    assert!(matches!(
        &error,
        CompileError::Unreachable { what, .. } if what == "name capture `y`"
    ));
    assert_eq!(
        error.to_string(),
        format!(
            "name capture `y` makes remaining patterns unreachable at {}",
            error.span()
        )
    );
}

#[test]
fn test_irrefutable_forms() {
    let wildcard = compile_error("match x:\n    case _:\n        pass\n    case 1:\n        pass\n");
    assert!(matches!(wildcard, CompileError::Unreachable { what, .. } if what == "wildcard"));

    let through_as =
        compile_error("match x:\n    case (y as z):\n        pass\n    case 1:\n        pass\n");
    assert!(matches!(through_as, CompileError::Unreachable { what, .. } if what == "name capture `y`"));

    let alternative = compile_error("match x:\n    case 1 | _ | 2:\n        pass\n");
    assert!(matches!(alternative, CompileError::Unreachable { what, .. } if what == "wildcard"));
}

#[test]
fn test_guarded_or_last_irrefutable_case_is_fine() {
    let fixture = Fixture::new(
        "match x:\n    case y if y:\n        pass\n    case z:\n        pass\n",
    );
    assert!(fixture.try_plan().is_ok());
}

#[test]
fn test_literal_errors() {
    assert!(matches!(
        compile_error("match x:\n    case 99999999999999999999:\n        pass\n"),
        CompileError::IntegerOutOfRange { text, .. } if text == "99999999999999999999"
    ));
    assert!(matches!(
        compile_error("match x:\n    case f\"a\":\n        pass\n"),
        CompileError::FormattedString { .. }
    ));
    assert!(matches!(
        compile_error("match x:\n    case b\"a\" \"b\":\n        pass\n"),
        CompileError::MixedBytes { .. }
    ));
}
