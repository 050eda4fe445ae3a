use crate::checker::{AnswerChecker, CheckError};
use crate::expression::{ExpressionError, Value};

#[test]
fn test_accepts_twenty_four() {
    let checker = AnswerChecker::default();
    assert!(checker.check("(6 * 4) + 0").is_ok());
    assert!(checker.check("(8 - 4) * (7 - 1)").is_ok());
    assert!(checker.check("8 / (3 - 8 / 3)").is_ok());
}

#[test]
fn test_reports_wrong_value() {
    let checker = AnswerChecker::default();
    let result = checker.check(" (6 * 4) + 1 ");
    assert_eq!(
        result,
        Err(CheckError::WrongValue {
            expression: "(6 * 4) + 1".to_string(),
            value: Value::from_integer(25),
            target: 24,
        })
    );
    if let Err(e) = result {
        assert_eq!(e.to_string(), "Expression (6 * 4) + 1 evaluates to 25, not 24");
    }
}

#[test]
fn test_reports_fractional_value() {
    let checker = AnswerChecker::default();
    let result = checker.check("49 / 2");
    assert!(matches!(
        result,
        Err(CheckError::WrongValue { ref value, .. }) if *value == Value::new(49, 2)
    ));
}

#[test]
fn test_division_by_zero_is_reported() {
    let checker = AnswerChecker::default();
    let result = checker.check("8 / (4 - 4)");
    assert_eq!(
        result,
        Err(CheckError::Evaluation(ExpressionError::DivisionByZero))
    );
    if let Err(e) = result {
        assert_eq!(e.to_string(), "Evaluation failed: Division by zero");
    }
}

#[test]
fn test_rejects_code_injection() {
    let checker = AnswerChecker::default();
    for input in [
        "__import__('os').system('rm -rf /')",
        "open('/etc/passwd').read()",
        "exec('24')",
        "(24).__class__",
        "24 if True else 0",
        "2 ** 5 - 8",
    ] {
        assert!(
            matches!(checker.check(input), Err(CheckError::Rejected(_))),
            "expected rejection for {input}"
        );
    }
}

#[test]
fn test_rejects_malformed_input() {
    let checker = AnswerChecker::default();
    assert_eq!(
        checker.check(""),
        Err(CheckError::Rejected(ExpressionError::EmptyExpression))
    );
    assert!(matches!(
        checker.check("(6 * 4"),
        Err(CheckError::Rejected(
            ExpressionError::UnbalancedParenthesis { .. }
        ))
    ));
}

#[test]
fn test_custom_target() {
    let checker = AnswerChecker::new(10);
    assert_eq!(checker.target(), 10);
    assert!(checker.check("1 + 2 + 3 + 4").is_ok());
    assert!(checker.check("(6 * 4) + 0").is_err());
}

#[test]
fn test_check_for_puzzle_accepts_valid_answer() {
    let checker = AnswerChecker::default();
    assert!(
        checker
            .check_for_puzzle("(8 - 4) * (7 - 1)", &[4, 1, 8, 7])
            .is_ok()
    );
    assert!(
        checker
            .check_for_puzzle("(4 * (1 + 7)) - 8", &[4, 1, 8, 7])
            .is_ok()
    );
}

#[test]
fn test_check_for_puzzle_rejects_other_numbers() {
    let checker = AnswerChecker::default();
    assert_eq!(
        checker.check_for_puzzle("6 * 4", &[4, 1, 8, 7]),
        Err(CheckError::NumbersMismatch {
            expected: "[1, 4, 7, 8]".to_string(),
            found: "[4, 6]".to_string(),
        })
    );
    assert!(matches!(
        checker.check_for_puzzle("(8 - 4) * (7 - 1) * 1", &[4, 1, 8, 7]),
        Err(CheckError::NumbersMismatch { .. })
    ));
}

#[test]
fn test_check_for_puzzle_rejects_negation() {
    let checker = AnswerChecker::default();
    assert_eq!(
        checker.check_for_puzzle("-(1 - 7) * (8 - 4)", &[4, 1, 8, 7]),
        Err(CheckError::Negation)
    );
}

#[test]
fn test_check_for_puzzle_reports_wrong_value() {
    let checker = AnswerChecker::default();
    assert!(matches!(
        checker.check_for_puzzle("4 + 1 + 8 + 7", &[4, 1, 8, 7]),
        Err(CheckError::WrongValue { ref value, .. }) if *value == Value::from_integer(20)
    ));
}

#[test]
fn test_min_intermediate_is_overflow_not_panic() {
    let checker = AnswerChecker::default();
    assert_eq!(
        checker.check("0 / ((0 - 2147483648 * 2147483648 - 2147483648 * 2147483648) / 3)"),
        Err(CheckError::Evaluation(ExpressionError::Overflow))
    );
    assert_eq!(
        checker.check("(1 / 3) * (0 - 2147483648 * 2147483648 - 2147483648 * 2147483648)"),
        Err(CheckError::Evaluation(ExpressionError::Overflow))
    );
    assert_eq!(
        checker.check("(1 / (2147483648 * 2147483648)) / (0 - 2)"),
        Err(CheckError::Evaluation(ExpressionError::Overflow))
    );
}
