//! Dictionaries: definitions, write targets, loops and `return`.

use crate::common::{check_all, check_reformat, check_types, check_values};

#[test]
fn test_definitions() {
    check_all(&[
        ("{}", "{}"),
        ("{ }", "{}"),
        ("{a=1}", "{a=1}"),
        ("{a0=1}", "{a0=1}"),
        ("{a_0=1}", "{a_0=1}"),
        ("{ a = 1 }", "{a=1}"),
        ("{a=1 a=2}", "{a=2}"),
        ("{a=1 b=2}", "{a=1 b=2}"),
        ("{a=1 b=a}", "{a=1 b=1}"),
        ("{a=1 b={c=a}}", "{a=1 b={c=1}}"),
        ("{a=1 b={c={d=a}}}", "{a=1 b={c={d=1}}}"),
        ("{a=1 b=[[a]]}", "{a=1 b=[[1]]}"),
        ("{a=1 b=c@{c=a}}", "{a=1 b=1}"),
        ("{a=1 b=add!(a a)}", "{a=1 b=2}"),
        ("{a=1 b=if a then a else 2}", "{a=1 b=1}"),
    ]);
    check_types(&[
        ("{}", "{}"),
        ("{a=1}", "{a=NUMBER}"),
        ("{a=1 a=2}", "{a=NUMBER}"),
        ("{a=1 b=a}", "{a=NUMBER b=NUMBER}"),
        ("{a=1 b={c=a}}", "{a=NUMBER b={c=NUMBER}}"),
        ("{a=1 b=[a]}", "{a=NUMBER b=[NUMBER]}"),
        ("{a=1 b=c@{c=a}}", "{a=NUMBER b=NUMBER}"),
        ("{a=1 b=if a then a else 2}", "{a=NUMBER b=NUMBER}"),
    ]);
}

#[test]
fn test_put_and_drop_targets() {
    check_all(&[
        ("{a=[] a+=1}", "{a=[1]}"),
        ("{a=[1] a+=2 a+=3}", "{a=[3 2 1]}"),
        ("{a=[] a++=[1 2 3]}", "{a=[3 2 1]}"),
        ("{a=\"\" a++=\"ab\"}", "{a=\"ba\"}"),
        ("{a=[1 2] a--}", "{a=[2]}"),
        ("{n=3 n--}", "{n=2}"),
        ("{n=3 n+=4}", "{n=7}"),
        ("{t=<> t+=(1 'a') t+=(0 'b')}", "{t=<(0 'b') (1 'a')>}"),
    ]);
    check_types(&[
        ("{a=[] a+=1}", "{a=[NUMBER]}"),
        ("{a=[1] a+=2 a+=3}", "{a=[NUMBER]}"),
        ("{a=[] a++=[1 2 3]}", "{a=[NUMBER]}"),
        ("{n=3 n--}", "{n=NUMBER}"),
    ]);
}

#[test]
fn test_while_loops() {
    check_all(&[
        ("{i=2 while i i=dec!i end}", "{i=0}"),
        ("{i=2 while i i=dec!i end j=1}", "{i=0 j=1}"),
        ("{i=2 tot=0 while i tot=add!(tot i) i=dec!i end}", "{i=0 tot=3}"),
        (
            "{i=1000 tot=0 while i tot=add!(tot i) i=dec!i end}",
            "{i=0 tot=500500}",
        ),
        ("{i=2 c=[] while i c+=i i=dec!i end}", "{i=0 c=[1 2]}"),
    ]);
    check_types(&[
        ("{while 1 end}", "{}"),
        ("{i=2 while i i=dec!i end}", "{i=NUMBER}"),
        ("{i=10 while i i=dec!i end j=1}", "{i=NUMBER j=NUMBER}"),
    ]);
}

#[test]
fn test_for_loops() {
    check_all(&[
        ("{c=[] for i in c end}", "{c=[]}"),
        ("{c=[1] for i in c end}", "{c=[] i=1}"),
        ("{c=[1 2] for i in c end}", "{c=[] i=2}"),
        ("{a=[] c=[1 2 3] for i in c a+=i end}", "{a=[3 2 1] c=[] i=3}"),
        (
            "{c=[1 2] for i in c d=[2 3] for j in d end end}",
            "{c=[] i=2 d=[] j=3}",
        ),
        ("{s=\"ab\" t=\"\" for x in s t+=x end}", "{s=\"\" t=\"ba\" x='b'}"),
        ("{n=3 t=0 for n t+=1 end}", "{n=0 t=3}"),
    ]);
    check_types(&[
        ("{c=[] for i in c end}", "{c=EMPTY_STACK i=ANY}"),
        ("{c=<> for i in c end}", "{c=<> i=(ANY ANY)}"),
        ("{c=<> d=<> for i in c d+=i end}", "{c=<> d=<(ANY ANY)> i=(ANY ANY)}"),
        ("{n=3 t=0 for n t+=1 end}", "{n=NUMBER t=NUMBER}"),
    ]);
}

#[test]
fn test_for_reads_an_unwritten_container_from_the_enclosing_scope() {
    check_all(&[
        ("r@{f=in c out {for i in c end} r=f![]}", "{}"),
        ("r@{f=in c out {for i in c end} r=f![1]}", "{i=1 c=[]}"),
    ]);
}

#[test]
fn test_return_stops_the_dictionary() {
    check_values(&[
        ("{a=1 return b=2}", "{a=1}"),
        ("{i=0 while yes i=inc!i return end}", "{i=1}"),
    ]);
}

#[test]
fn test_reformat_statements() {
    check_reformat(&[
        ("{while 1 end}", "{while 1 end}"),
        ("{i=2 while i i=dec!i end}", "{i=2 while i i=dec!i end}"),
        ("{for i in c end}", "{for i in c end}"),
        ("{a+=1 b++=c d--}", "{a+=1 b++=c d--}"),
        ("{ a = 1  return }", "{a=1 return}"),
    ]);
}
