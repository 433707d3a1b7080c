#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

#[test]
fn test_evaluate_all_returns_the_value() {
    assert_eq!(evaluate_all("add!(1 2)").unwrap(), "3");
    assert_eq!(evaluate_all("{a=[1] a+=2}").unwrap(), "{a=[2 1]}");
}

#[test]
fn test_single_passes() {
    assert_eq!(evaluate("{a=1 b=[a]}").unwrap(), "{a=1 b=[1]}");
    assert_eq!(evaluate_types("{a=1 b=[a]}").unwrap(), "{a=NUMBER b=[NUMBER]}");
}

#[test]
fn test_evaluate_all_stops_at_the_type_pass() {
    // The value pass alone would pick the first branch and succeed.
    let source = "if yes then 'a' else 1";
    assert_eq!(evaluate(source).unwrap(), "'a'");
    assert!(matches!(
        evaluate_all(source),
        Err(EvalError::StaticType { .. })
    ));
}

#[test]
fn test_reformat_does_not_evaluate() {
    assert_eq!(reformat("{ a = add!( 1  2 ) }").unwrap(), "{a=add!(1 2)}");
    assert_eq!(reformat("x@{}").unwrap(), "x@{}");
    assert!(matches!(reformat("{a="), Err(EvalError::Parse(_))));
}

#[test]
fn test_runs_do_not_share_read_sites() {
    // The same text in two runs binds its read sites afresh each time.
    assert_eq!(evaluate("a@{b=2 a=b}").unwrap(), "2");
    assert_eq!(evaluate("a@{x={b=3} b=5 a=b}").unwrap(), "5");
    assert_eq!(evaluate("a@{b=2 a=b}").unwrap(), "2");
}

#[test]
fn test_prelude_parses_and_binds_the_library() {
    let mut interpreter = Interpreter::new();
    let frame = interpreter.prelude(EvalMode::Value).unwrap();
    for name in ["inc", "fold", "map_stack", "merge_sorted", "pi", "Number"] {
        let name = interpreter.arena_mut().intern(name);
        assert!(interpreter.arena().frame_lookup(frame, name).is_some());
    }
    assert_eq!(reformat(PRELUDE).map(|text| text.is_empty()), Ok(false));
}

proptest! {
    #[test]
    fn sums_match_integer_arithmetic(a in -1000i32..1000, b in -1000i32..1000) {
        let source = format!("add!({a} {b})");
        prop_assert_eq!(evaluate_all(&source).unwrap(), (a + b).to_string());
    }

    #[test]
    fn range_counts_up_to_n(n in 0u32..40) {
        let source = format!("count!range!{n}");
        prop_assert_eq!(evaluate_all(&source).unwrap(), n.to_string());
    }

    #[test]
    fn reversing_twice_is_identity(items in prop::collection::vec(0u8..100, 0..12)) {
        let stack = items.iter().map(u8::to_string).collect::<Vec<_>>().join(" ");
        let source = format!("reverse!reverse![{stack}]");
        prop_assert_eq!(evaluate_all(&source).unwrap(), format!("[{stack}]"));
    }
}
