//! Builtins and the standard library.

use crate::common::{check_all, check_types};

#[test]
fn test_arithmetic() {
    check_all(&[
        ("add!(1 0)", "1"),
        ("add!(-1 +1)", "0"),
        ("mul!(2 3)", "6"),
        ("mul!(-1 +1)", "-1"),
        ("sub!(4 8)", "-4"),
        ("div!(9 3)", "3"),
        ("div!(1 4)", "0.25"),
        ("mod!(7 3)", "1"),
        ("less?(0 1)", "yes"),
        ("less?(1 0)", "no"),
        ("less?(-1 -1)", "no"),
        ("inc!0", "1"),
        ("dec!0", "-1"),
        ("neg!3", "-3"),
        ("abs!-1", "1"),
        ("abs!0", "0"),
        ("abs!1", "1"),
        ("sqrt!4", "2"),
        ("min!(3 4)", "3"),
        ("max!(3 4)", "4"),
    ]);
    check_types(&[("add!(1 0)", "NUMBER"), ("less?(0 1)", "BOOLEAN")]);
}

#[test]
fn test_rounding() {
    check_all(&[
        ("round!-0.9", "-1"),
        ("round!-0.4", "-0"),
        ("round!0.4", "0"),
        ("round!0.6", "1"),
        ("round_up!-0.9", "-0"),
        ("round_up!0.1", "1"),
        ("round_down!-0.1", "-1"),
        ("round_down!0.9", "0"),
    ]);
}

#[test]
fn test_number_constants() {
    check_all(&[
        ("inf", "inf"),
        ("-inf", "-inf"),
        ("nan", "nan"),
        ("pi", "3.14159265359"),
        ("tau", "6.28318530718"),
    ]);
    check_types(&[("inf", "NUMBER"), ("-inf", "NUMBER"), ("pi", "NUMBER")]);
}

#[test]
fn test_characters() {
    check_all(&[
        ("number!'0'", "48"),
        ("number!'z'", "122"),
        ("character!65", "'A'"),
        ("character!122", "'z'"),
        ("is_digit?'0'", "yes"),
        ("is_digit?'A'", "no"),
        ("is_upper?'Z'", "yes"),
        ("is_upper?'a'", "no"),
        ("is_lower?'a'", "yes"),
        ("is_letter?'9'", "no"),
        ("to_upper!'a'", "'A'"),
        ("to_upper!'0'", "'0'"),
        ("to_lower!'Z'", "'z'"),
        ("parse_digit!'7'", "7"),
        (r#"parse_natural_number!"123""#, "123"),
        (r#"parse_natural_number!"20""#, "20"),
        ("serialize_natural_number!123", r#""123""#),
        ("serialize_natural_number!0", r#""0""#),
    ]);
    check_types(&[("is_digit?'A'", "BOOLEAN")]);
}

#[test]
fn test_logic() {
    check_all(&[
        ("boolean!-2", "yes"),
        ("boolean!0", "no"),
        ("boolean![]", "no"),
        ("boolean![0]", "yes"),
        (r#"boolean!"""#, "no"),
        (r#"boolean!"a""#, "yes"),
        ("not?0", "yes"),
        ("not?[0 1]", "no"),
        ("and?[yes no]", "no"),
        ("and?[yes yes]", "yes"),
        ("or?[no no]", "no"),
        ("or?[no yes]", "yes"),
        ("all?[]", "yes"),
        ("all?[0 1]", "no"),
        ("any?[]", "no"),
        ("any?[0 1]", "yes"),
        ("none?[0 0]", "yes"),
        ("none?[1 1]", "no"),
    ]);
    check_types(&[("all?[0 1]", "BOOLEAN"), ("any?[]", "BOOLEAN")]);
}

#[test]
fn test_equality() {
    check_all(&[
        ("equal?(0 0)", "yes"),
        ("equal?(1 0)", "no"),
        ("unequal?(0 1)", "yes"),
        ("equal?('a' 'a')", "yes"),
        ("unequal?('a' 'b')", "yes"),
        ("equal?(yes no)", "no"),
        ("equal?([] [])", "yes"),
        ("equal?([0 1] [0 1])", "yes"),
        ("equal?([0 1] [0])", "no"),
        (r#"equal?("ab" "ab")"#, "yes"),
        (r#"equal?("abc" "ab")"#, "no"),
        (r#"unequal?("" "a")"#, "yes"),
    ]);
    check_types(&[("equal?([0 1] [0])", "BOOLEAN")]);
}

#[test]
fn test_container_builtins() {
    check_all(&[
        ("clear![1 2]", "[]"),
        ("clear!<(1 11)>", "<>"),
        (r#"clear!"ab""#, r#""""#),
        ("take![3 4]", "3"),
        (r#"take!"ab""#, "'a'"),
        ("drop![4]", "[]"),
        ("drop![4 3 7]", "[3 7]"),
        (r#"drop!"abc""#, r#""bc""#),
        ("put!(4 [6 8])", "[4 6 8]"),
        (r#"put!('a' "bc")"#, r#""abc""#),
        ("put!((1 11) <>)", "<(1 11)>"),
        ("put!((0 1) <(0 2)>)", "<(0 1)>"),
        ("put!((0 5) <(2 3) (1 2) (0 1)>)", "<(0 5) (1 2) (2 3)>"),
        ("get!(0 <> 2)", "2"),
        ("get!(0 <(0 1)> 2)", "1"),
        ("get!(1 <(0 1)> 2)", "2"),
        ("get!((3) <((1) [1]) ((2) [2]) ((3) [3])> [])", "[3]"),
    ]);
    check_types(&[
        ("clear![1]", "[NUMBER]"),
        ("clear![]", "EMPTY_STACK"),
        (r#"clear!"a""#, "STRING"),
        ("take![3 4]", "NUMBER"),
        (r#"take!"ab""#, "CHARACTER"),
        ("drop![4 3]", "[NUMBER]"),
        ("put!(3 [])", "[NUMBER]"),
        (r#"put!('a' "")"#, "STRING"),
    ]);
}

#[test]
fn test_tables() {
    check_all(&[
        ("get_keys!<>", "[]"),
        ("get_keys!<(2 3) (0 1)>", "[0 2]"),
        ("get_values!<(3 0) (2 1) (1 2)>", "[2 1 0]"),
        ("get_items!<(4 1) (2 3) (0 5)>", "[(0 5) (2 3) (4 1)]"),
        ("count!<(1 1) (1 1)>", "1"),
        ("count!<(1 1) (2 2)>", "2"),
        ("make_table![(3 33) (1 11) (2 22)]", "<(1 11) (2 22) (3 33)>"),
        ("make_stack!<(3 33) (1 11) (2 22)>", "[(1 11) (2 22) (3 33)]"),
        ("map_table!(in x out (x x) [1 2])", "<(1 1) (2 2)>"),
        ("map_table!(in (x y) out (x inc!y) <(1 11) (2 22)>)", "<(1 12) (2 23)>"),
        ("count_if!(less <(0 0) (1 2) (2 3) (4 5) (7 6)>)", "3"),
        ("clear_if!(less <(0 0) (1 2) (2 3) (5 4)>)", "<(0 0) (5 4)>"),
        ("put_each!(<(1 11) (3 33)> <(2 22) (4 44)>)", "<(1 11) (2 22) (3 33) (4 44)>"),
        ("merge_stack![[(1 11)] <(2 22)>]", "[(1 11) (2 22)]"),
        ("unique![1 1 2 3 1 4 2 4 0]", "[0 1 2 3 4]"),
        ("count_elements![1 1 2 3 1 4 2 4 0]", "<(0 1) (1 3) (2 2) (3 1) (4 2)>"),
    ]);
}

#[test]
fn test_stacks() {
    check_all(&[
        ("range!0", "[]"),
        ("range!3", "[0 1 2]"),
        ("count!range!100", "100"),
        ("sum!range!100", "4950"),
        ("product![1 2 3]", "6"),
        ("product![]", "1"),
        ("count_item!(1 [1 0 1])", "2"),
        ("count_if!(in x out equal?(x 3) [3 2 3])", "2"),
        ("reverse![0 1 2]", "[2 1 0]"),
        ("make_stack![3 1 2]", "[3 1 2]"),
        ("map_stack!(inc [0 1])", "[1 2]"),
        ("a@{b=2 f=in x out b a=map_stack!(f [0 0])}", "[2 2]"),
        ("clear_if!(in x out less?(x 5) [7 4 6 1 9 3 2])", "[7 6 9]"),
        ("clear_item!(1 [1 7 1 2 7 1 1])", "[7 2 7]"),
        ("replace!(1 [0 1 0 1 1])", "[1 1 1 1 1]"),
        ("replace_item!(1 2 [0 1 0 1 1])", "[0 2 0 2 2]"),
        ("replace_if!(in x out equal?(x 1) 2 [0 1 0 1 1])", "[0 2 0 2 2]"),
        ("enumerate![4 3]", "[(0 4) (1 3)]"),
        ("split!(0 [])", "[[]]"),
        ("split!(0 [0 0])", "[[] [] []]"),
        ("split!(0 [1 0 2])", "[[1] [2]]"),
        ("cartesian_product2!([1 2] [3 4])", "[(2 4) (1 4) (2 3) (1 3)]"),
        ("put_column!([1 2] [[3] [4]])", "[[1 3] [2 4]]"),
        ("transpose![[1 2] [3 4]]", "[[1 3] [2 4]]"),
        ("put_each!([1 2 3] [4 5 6])", "[3 2 1 4 5 6]"),
        ("merge_stack![[1] [2 3] [4 5 6]]", "[1 2 3 4 5 6]"),
        ("zip2!([0 1 2] [3 4 5])", "[(0 3) (1 4) (2 5)]"),
        ("zip3!([0 1 2] [3 4 5] [6 7 8])", "[(0 3 6) (1 4 7) (2 5 8)]"),
        ("zip4!([0 1] [2 3] [4 5] [6 7])", "[(0 2 4 6) (1 3 5 7)]"),
        ("consecutive_pairs![6 4 8]", "[(6 4) (4 8)]"),
        ("merge_sorted!([0 2] [1 3])", "[0 1 2 3]"),
        ("take_many!(2 [5 6 7])", "[5 6]"),
        ("drop_many!(2 [5 6 7])", "[7]"),
        ("take_while!(in x out less?(x 3) [1 2 3 1])", "[1 2]"),
        ("drop_until_item!(3 [1 2 3 1])", "[3 1]"),
        ("get0![11 12 13]", "11"),
        ("get2!(11 12 13)", "13"),
        ("is_increasing?[]", "yes"),
        ("is_increasing?[0 1 2 3 3]", "yes"),
        ("is_increasing?[1 0]", "no"),
    ]);
    check_types(&[
        ("range!3", "[NUMBER]"),
        ("count![[] []]", "NUMBER"),
        ("sum![1 2 3]", "NUMBER"),
        ("map_stack!(inc [0 1])", "[NUMBER]"),
    ]);
}

#[test]
fn test_extrema() {
    check_all(&[
        ("min_item![]", "inf"),
        ("min_item![7 -3 8 -9]", "-9"),
        ("max_item![]", "-inf"),
        ("max_item![3 6 1]", "6"),
        ("min_key!(in (w h) out mul!(w h) [(1 2) (2 2) (3 1)])", "(1 2)"),
        ("max_key!(in (w h) out mul!(w h) [(1 2) (2 2) (3 1)])", "(2 2)"),
        (
            "min_predicate!(in (a b) out less?(mul!a mul!b) [(1 2) (2 2) (3 1)])",
            "(1 2)",
        ),
        (
            "max_predicate!(in (a b) out less?(mul!a mul!b) [(1 2) (2 2) (3 1)])",
            "(2 2)",
        ),
    ]);
    check_types(&[("min_item![0 1]", "NUMBER")]);
}

#[test]
fn test_strings() {
    check_all(&[
        (r#"count!"ab""#, "2"),
        (r#"count_item!('a' "aba")"#, "2"),
        (r#"reverse!"abc""#, r#""cba""#),
        (r#"make_stack!"cab""#, "['c' 'a' 'b']"),
        ("make_string!['c' 'a' 'b']", r#""cab""#),
        (r#"map_string!(to_upper "abc")"#, r#""ABC""#),
        (r#"clear_if!(in x out equal?(x 'a') "bab")"#, r#""bb""#),
        (r#"replace!('a' "ab_ba")"#, r#""aaaaa""#),
        (r#"replace_item!('a' 'b' "ab_ba")"#, r#""bb_bb""#),
        (r#"enumerate!"ab""#, "[(0 'a') (1 'b')]"),
        (r#"split!(',' "a,b,cd")"#, r#"["a" "b" "cd"]"#),
        (r#"split!(',' ",a")"#, r#"["" "a"]"#),
        (r#"put_each!("abc" "def")"#, r#""cbadef""#),
        (r#"merge_stack![['a'] "b"]"#, "['a' 'b']"),
        (r#"get1!"abc""#, "'b'"),
    ]);
    check_types(&[
        (r#"count!"ab""#, "NUMBER"),
        (r#"map_string!(to_upper "abc")"#, "STRING"),
    ]);
}
