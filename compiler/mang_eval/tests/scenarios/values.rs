//! Literals and their type samples.

use crate::common::{check_all, check_reformat, check_types};

#[test]
fn test_numbers() {
    check_all(&[
        ("-1", "-1"),
        ("-1.0", "-1"),
        ("-0", "-0"),
        ("-0.0", "-0"),
        ("0", "0"),
        ("0.0", "0"),
        ("+0", "0"),
        ("+0.0", "0"),
        ("1", "1"),
        ("+1.0", "1"),
        ("0.25", "0.25"),
        ("123456", "123456"),
    ]);
    check_types(&[("-1", "NUMBER"), ("0.0", "NUMBER"), ("+1", "NUMBER")]);
}

#[test]
fn test_characters() {
    check_all(&[
        ("'a'", "'a'"),
        ("'1'", "'1'"),
        ("'+'", "'+'"),
        ("'\"'", "'\"'"),
        ("')'", "')'"),
        ("'{'", "'{'"),
    ]);
    check_types(&[("'a'", "CHARACTER"), ("'}'", "CHARACTER")]);
}

#[test]
fn test_booleans() {
    check_all(&[("yes", "yes"), ("no", "no")]);
    check_types(&[("yes", "BOOLEAN"), ("no", "BOOLEAN")]);
}

#[test]
fn test_strings() {
    check_all(&[
        ("\"\"", "\"\""),
        ("\"a\"", "\"a\""),
        ("\"abc\"", "\"abc\""),
        ("\"-1\"", "\"-1\""),
        ("\"()\"", "\"()\""),
        ("\"{}\"", "\"{}\""),
    ]);
    check_types(&[("\"\"", "EMPTY_STRING"), ("\"a\"", "STRING"), ("\"abc\"", "STRING")]);
}

#[test]
fn test_stacks() {
    check_all(&[
        ("[]", "[]"),
        ("[  ]", "[]"),
        ("[1]", "[1]"),
        ("[ 1 ]", "[1]"),
        ("[1  2]", "[1 2]"),
        ("[[]]", "[[]]"),
        ("[[] []]", "[[] []]"),
        ("[[[]]]", "[[[]]]"),
        ("[add!(1 1) 'a']", "[2 'a']"),
    ]);
    check_types(&[
        ("[]", "EMPTY_STACK"),
        ("[1]", "[NUMBER]"),
        ("[1 2]", "[NUMBER]"),
        ("[[]]", "[EMPTY_STACK]"),
        ("[[] []]", "[EMPTY_STACK]"),
        ("[[[]]]", "[[EMPTY_STACK]]"),
    ]);
}

#[test]
fn test_tuples() {
    check_all(&[
        ("()", "()"),
        ("( )", "()"),
        ("(1)", "(1)"),
        ("( 1  2 )", "(1 2)"),
        ("(())", "(())"),
        ("(() ())", "(() ())"),
        ("((()))", "((()))"),
    ]);
    check_types(&[
        ("()", "()"),
        ("(1)", "(NUMBER)"),
        ("(1 'a')", "(NUMBER CHARACTER)"),
        ("(() ())", "(() ())"),
    ]);
}

#[test]
fn test_tables() {
    check_all(&[
        ("<>", "<>"),
        ("<(1 2)>", "<(1 2)>"),
        ("< ( 1 2 ) >", "<(1 2)>"),
        ("<(<> <>)>", "<(<> <>)>"),
        ("<((0 0) (1 1))>", "<((0 0) (1 1))>"),
        ("<(inc!0 inc!1)>", "<(1 2)>"),
        ("<(3 6) (4 8) (1 2) (2 4)>", "<(1 2) (2 4) (3 6) (4 8)>"),
        ("<(1 2) (1 3)>", "<(1 3)>"),
    ]);
    check_types(&[
        ("<>", "<>"),
        ("<(1 2)>", "<(NUMBER NUMBER)>"),
        ("<(<> <>)>", "<(<> <>)>"),
        ("<((0 0) (1 1))>", "<((NUMBER NUMBER) (NUMBER NUMBER))>"),
        ("<(inc!0 inc!1)>", "<(NUMBER NUMBER)>"),
        ("<(3 6) (4 8) (1 2) (2 4)>", "<(NUMBER NUMBER)>"),
    ]);
}

#[test]
fn test_dynamic_hides_the_value_from_the_type_pass() {
    check_all(&[("dynamic 1", "1"), ("{a=dynamic 'x'}", "{a='x'}")]);
    check_types(&[
        ("dynamic 1", "ANY"),
        ("{a=dynamic 1}", "{a=ANY}"),
        ("{xs=dynamic [1] for x in xs end}", "{xs=ANY x=ANY}"),
        ("{xs=dynamic [1] for xs end}", "{xs=ANY}"),
    ]);
}

#[test]
fn test_reformat_literals() {
    check_reformat(&[
        ("( 1  2 )", "(1 2)"),
        ("[ [ ] ]", "[[]]"),
        ("< ( 1 2 ) >", "<(1 2)>"),
        ("<(inc!0 inc!1)>", "<(inc!0 inc!1)>"),
        ("if  1  then  2  else  3", "if 1 then 2 else 3"),
        ("is 0 0 then 0 1 then 1 else 0", "is 0 0 then 0 1 then 1 else 0"),
        ("{a=1 b=a}", "{a=1 b=a}"),
        ("add!(1 2)", "add!(1 2)"),
        ("in  {  x    y  }  out  x", "in {x y} out x"),
    ]);
}
