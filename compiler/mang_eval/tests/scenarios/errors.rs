//! Failures of both passes.

use mang_diagnostic::ErrorCode;
use mang_eval::EvalError;
use pretty_assertions::assert_eq;

use crate::common::{fail_all, fail_value};

#[test]
fn test_parse_errors_surface_unchanged() {
    let error = fail_all("{a=");
    assert!(matches!(error, EvalError::Parse(_)), "{error:?}");
    assert!(matches!(fail_all("[1 2"), EvalError::Parse(_)));
}

#[test]
fn test_missing_symbols() {
    let error = fail_all("x");
    assert_eq!(
        error.to_string(),
        "Cannot find symbol x in environment of type ANY"
    );
    assert_eq!(error.code(), ErrorCode::E6001);

    assert_eq!(
        fail_all("a@{b=1}").to_string(),
        "Cannot find symbol a in dictionary"
    );
    assert_eq!(
        fail_all("a@{f=in {x} out x a=f!{y=1}}").to_string(),
        "Cannot find symbol x in dictionary"
    );
}

#[test]
fn test_static_type_errors() {
    let error = fail_all("Number:'a'");
    assert_eq!(
        error.to_string(),
        "Static type error in typed expression. NUMBER is not a supertype for CHARACTER"
    );
    assert_eq!(error.code(), ErrorCode::E2001);

    assert_eq!(
        fail_all("if yes then 'a' else 1").to_string(),
        "Static type error in if. NUMBER is not a supertype for CHARACTER"
    );
    assert_eq!(
        fail_all("inc!'a'").to_string(),
        "Static type error in function call. CHARACTER is not a supertype for NUMBER"
    );

    let error = fail_all("{while 'a' end}");
    assert_eq!(
        error.to_string(),
        "Static type error.\nCannot convert type CHARACTER to boolean."
    );
    assert_eq!(error.code(), ErrorCode::E2002);
}

#[test]
fn test_dynamic_escapes_the_type_pass() {
    // The type pass sees ANY and lets the branch through; the value pass
    // picks the `then` branch without checking it against `else`.
    assert_eq!(
        mang_eval::evaluate_all("if yes then dynamic 'a' else 1").unwrap(),
        "'a'"
    );
}

#[test]
fn test_value_pass_errors() {
    assert_eq!(
        fail_value("{while 'a' end}").to_string(),
        "Unexpected expression CHARACTER for boolean operation"
    );

    let error = fail_all("a@{f=in (x y) out x a=f!(1 2 3)}");
    assert_eq!(error.to_string(), "Wrong number of input to function");
    assert_eq!(error.code(), ErrorCode::E6004);

    assert_eq!(
        fail_all("take![]").to_string(),
        "Unexpected expression EMPTY_STACK for take"
    );
    assert_eq!(
        fail_all("take!<>").to_string(),
        "Cannot take item from empty table"
    );
    assert_eq!(
        fail_all("character!-1").to_string(),
        "Cannot convert -1 to a character"
    );
}

#[test]
fn test_indexing_errors() {
    assert_eq!(
        fail_all("a@{c=<(1 2)> a=c!3}").to_string(),
        "Cannot find key 3 in table"
    );
    assert_eq!(
        fail_all("a@{c=(1 2) a=c!5}").to_string(),
        "Tuple of size 2 indexed with 5"
    );
    assert_eq!(
        fail_all("a@{c=[1 2] a=c!5}").to_string(),
        "Stack index out of range"
    );
    assert_eq!(
        fail_all("a@{c=\"ab\" a=c!5}").to_string(),
        "String index out of range"
    );
    assert_eq!(
        fail_all("a@{c=[] a=c!0}").to_string(),
        "I caught a run-time error when trying to index an empty stack."
    );
    let error = fail_all("a@{c=[1] a=c!-1}");
    assert_eq!(error.to_string(), "Cannot have negative index: -1.000000");
    assert_eq!(error.code(), ErrorCode::E6005);
}

#[test]
fn test_errors_carry_a_span_inside_the_source() {
    let source = "{a=1 b=missing_name}";
    let error = fail_all(source);
    let span = error.span();
    assert_eq!(&source[span.start as usize..span.end as usize], "missing_name");
}

#[test]
fn test_strings_only_take_characters() {
    for source in ["put!(1 \"ab\")", "{s=\"a\" s+=1}", "{s=\"\" s++=[1 2]}"] {
        let error = fail_all(source);
        assert_eq!(error.code(), ErrorCode::E2001, "{source}");
        assert_eq!(
            error.to_string(),
            "I found a static type error for the operation put!(item STRING). \
             It expects the item to be a CHARACTER, but now it got a NUMBER.",
            "{source}"
        );

        let error = fail_value(source);
        assert_eq!(error.code(), ErrorCode::E6003, "{source}");
        assert_eq!(
            error.to_string(),
            "I found a dynamic type error for the operation put!(item STRING). \
             It expects the item to be a CHARACTER, but now it got a NUMBER.",
            "{source}"
        );
    }
}

#[test]
fn test_loop_over_missing_name_fails_the_type_pass() {
    let error = mang_eval::evaluate_types("{for i in zzz end}").unwrap_err();
    assert!(
        matches!(error, EvalError::MissingSymbol { ref name, .. } if name == "zzz"),
        "{error:?}"
    );
    let error = mang_eval::evaluate_types("{for zzz end}").unwrap_err();
    assert!(
        matches!(error, EvalError::MissingSymbol { ref name, .. } if name == "zzz"),
        "{error:?}"
    );
}

#[test]
fn test_statement_errors_point_at_the_statement() {
    let source = "{f=in x out x f--}";
    for error in [fail_all(source), fail_value(source)] {
        let span = error.span();
        assert_eq!(&source[span.start as usize..span.end as usize], "f--", "{error}");
    }
}
