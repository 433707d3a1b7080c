//! Case runners.
//!
//! Each runner takes `(source, expected)` pairs and names the failing
//! source in the assertion message.

use mang_eval::{evaluate, evaluate_all, evaluate_types, reformat, EvalError};
use pretty_assertions::assert_eq;

/// Type pass, then value pass; compares the value.
pub fn check_all(cases: &[(&str, &str)]) {
    for &(source, expected) in cases {
        let actual = evaluate_all(source)
            .unwrap_or_else(|error| panic!("evaluate_all({source}) failed: {error}"));
        assert_eq!(actual, expected, "evaluate_all({source})");
    }
}

/// Value pass only.
pub fn check_values(cases: &[(&str, &str)]) {
    for &(source, expected) in cases {
        let actual =
            evaluate(source).unwrap_or_else(|error| panic!("evaluate({source}) failed: {error}"));
        assert_eq!(actual, expected, "evaluate({source})");
    }
}

/// Type pass only.
pub fn check_types(cases: &[(&str, &str)]) {
    for &(source, expected) in cases {
        let actual = evaluate_types(source)
            .unwrap_or_else(|error| panic!("evaluate_types({source}) failed: {error}"));
        assert_eq!(actual, expected, "evaluate_types({source})");
    }
}

pub fn check_reformat(cases: &[(&str, &str)]) {
    for &(source, expected) in cases {
        let actual =
            reformat(source).unwrap_or_else(|error| panic!("reformat({source}) failed: {error}"));
        assert_eq!(actual, expected, "reformat({source})");
    }
}

/// Error of `evaluate_all`; panics if the program succeeds.
pub fn fail_all(source: &str) -> EvalError {
    match evaluate_all(source) {
        Ok(value) => panic!("evaluate_all({source}) should fail, got {value}"),
        Err(error) => error,
    }
}

/// Error of the value pass alone.
pub fn fail_value(source: &str) -> EvalError {
    match evaluate(source) {
        Ok(value) => panic!("evaluate({source}) should fail, got {value}"),
        Err(error) => error,
    }
}
