//! Child lookup, the four function shapes and container indexing.

use crate::common::{check_all, check_types, check_values};

#[test]
fn test_child_lookup() {
    check_all(&[
        ("a@{a=1}", "1"),
        ("A_0@{A_0=1}", "1"),
        ("_0@{_0=1}", "1"),
        ("y@{x=5 y=x}", "5"),
        ("c@{a=1 b=a c=b}", "1"),
        ("y@x@{x = {y = 1}}", "1"),
        ("b@x@{x={a=1 b=2}}", "2"),
        ("w@z@y@x@{x = {y = {z = {w=1}}}}", "1"),
        ("b@{a={f=in x out 1} g=f@a b=g!3}", "1"),
        ("c@{a={b={f=in x out inc!x}} g=f@b@a c = g!3}", "4"),
        ("ABBA@{ABBA = 1 PADDA = 2}", "1"),
    ]);
    check_types(&[
        ("a@{a=1}", "NUMBER"),
        ("b@x@{x={a=no b=2}}", "NUMBER"),
        ("b@{a={f = in x out inc!x} g=f@a b = g!3}", "NUMBER"),
    ]);
}

#[test]
fn test_names_starting_with_keywords() {
    check_all(&[
        ("input@{input=5}", "5"),
        ("output@{output=5}", "5"),
        ("iffy@{iffy=5}", "5"),
        ("thenner@{thenner=5}", "5"),
        ("elsewhere@{elsewhere=5}", "5"),
        ("whiler@{whiler=5}", "5"),
        ("endar@{endar=5}", "5"),
        ("isle@{isle=5}", "5"),
        ("yesterday@{yesterday=5}", "5"),
    ]);
}

#[test]
fn test_function_values() {
    check_all(&[
        ("in x out x", "in x out x"),
        ("f@{f=in x out x}", "in x out x"),
        ("in {x y} out x", "in {x y} out x"),
        ("in  (  x    y  )  out  x", "in (x y) out x"),
        ("in Number:x out x", "in Number:x out x"),
    ]);
    check_types(&[
        ("in x out x", "FUNCTION"),
        ("in {x} out x", "FUNCTION_DICTIONARY"),
        ("in (x y) out x", "FUNCTION_TUPLE"),
        ("add", "FUNCTION_BUILT_IN"),
    ]);
}

#[test]
fn test_calls() {
    check_all(&[
        ("a@{f=in x out x a=f!0}", "0"),
        ("a@{f=in x out x a=f![]}", "[]"),
        ("z@{f=in x out y@{y = 3} z=f!2}", "3"),
        ("z@{f=in x out result@{y=3 result=add!(x y)}  z=f!2}", "5"),
        ("z@{y=2 f=in x out result@{y=3 result=add!(x y)} z=f!2}", "5"),
        ("x@{a={b=1 f=in x out b} b=2 f=f@a x=f![]}", "1"),
        ("x@{f=in a out 1 g = in b out f!b x = g!2}", "1"),
        ("y@{apply=in (f x) out f!x y = apply!(inc 2)}", "3"),
        (
            "y@{apply=in (f x) out f!x id=in x out apply!(in x out x x) y = id!1}",
            "1",
        ),
        ("a@{call=in f out f![] g=in x out 0 a=call!g}", "0"),
        ("a@{call=in f out f![] b={a=0 g=in x out a} g=g@b a=call!g}", "0"),
        ("b@{a={a=0 f=in x out a} g=f@a b=g!1}", "0"),
        ("y@{f=in stack out map_stack!(in y out 2 stack) y=f![0 0]}", "[2 2]"),
        ("y@{a=1 f=in stack out map_stack!(in y out a stack) y=f![0 0]}", "[1 1]"),
        ("y@{f=in (x stack) out map_stack!(in y out x stack) y=f!(2 [0 0])}", "[2 2]"),
    ]);
    check_types(&[
        ("a@{f=in x out x a=f!0}", "NUMBER"),
        ("a@{f=in x out x a=f![]}", "EMPTY_STACK"),
        ("y@{apply=in (f x) out f!x y = apply!(inc 2)}", "NUMBER"),
        ("y@{f=in stack out map_stack!(in y out 2 stack) y=f![0 0]}", "[NUMBER]"),
    ]);
}

#[test]
fn test_dictionary_and_tuple_functions() {
    check_all(&[
        ("a@{f=in {x} out x a=f!{x=0}}", "0"),
        ("a@{f=in {x y} out add!(x y) a=f!{x=2 y=3}}", "5"),
        ("a@{b=2 f=in {x} out add!(b x) a=f!{x=0}}", "2"),
        ("a@{f=in {x} out x a=f!{y=1 x=7}}", "7"),
        ("a@{f=in (x) out x a=f!(0)}", "0"),
        ("a@{f=in (x y) out add!(x y) a=f!(2 3)}", "5"),
        ("a@{f=in (Number:x Character:c) out c a=f!(1 'q')}", "'q'"),
    ]);
    check_types(&[
        ("a@{f=in {x} out x a=f!{x=0}}", "NUMBER"),
        ("a@{f=in (x y) out add!(x y) a=f!(2 3)}", "NUMBER"),
    ]);
}

#[test]
fn test_recursion() {
    check_values(&[
        ("y@{f=in x out if x then add!(x f!dec!x) else 0 y=f!3}", "6"),
        (
            "y@{fib=in n out if less?(n 2) then n else add!(fib!sub!(n 1) fib!sub!(n 2)) y=fib!10}",
            "55",
        ),
    ]);
}

#[test]
fn test_indexing_containers() {
    check_all(&[
        ("a@{c=(3 2 1) a=c!0}", "3"),
        ("a@{c=(3 2 1) a=c!2}", "1"),
        ("a@{i=1 c=(3 2 1) a=c!i}", "2"),
        ("a@{c=[3 2 1] a=c!0}", "3"),
        ("a@{c=[3 2 1] a=c!2}", "1"),
        ("a@{c=range!100 a=c!99}", "99"),
        ("a@{c=\"abc\" a=c!1}", "'b'"),
        ("a@{c=<(2 3) (4 5)> a=c!2}", "3"),
        ("a@{c=<(2 3) (4 5)> a=c!4}", "5"),
        ("a@{c=<('x' 1)> a=c!'x'}", "1"),
    ]);
    check_types(&[
        ("a@{c=(3 'b') a=c!1}", "CHARACTER"),
        ("a@{c=[3 2 1] a=c!2}", "NUMBER"),
        ("a@{c=\"abc\" a=c!1}", "CHARACTER"),
        ("a@{c=<(2 3)> a=c!2}", "NUMBER"),
    ]);
}

#[test]
fn test_typed_expressions() {
    check_all(&[
        ("Number:1", "1"),
        ("String:\"ab\"", "\"ab\""),
        ("Numbers:[1 2]", "[1 2]"),
        ("Stack:[]", "[]"),
        ("inc!2", "3"),
    ]);
    check_types(&[("Number:1", "NUMBER"), ("Boolean:yes", "BOOLEAN")]);
}
