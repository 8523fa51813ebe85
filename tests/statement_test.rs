mod common;
use common::*;
use simple::mach::{compile, Runtime};

#[test]
fn test_print_string_and_expression() {
    let src = "10 let a = 3\n20 print \"a is \", a, \"!\"\n30 end";
    assert_eq!(run(src), "a is 3!\n");
}

#[test]
fn test_print_empty_line() {
    assert_eq!(run("10 print\n20 print 1\n30 end"), "\n1\n");
}

#[test]
fn test_rem_emits_nothing() {
    let image = compile("10 rem print 1\n20 end").unwrap();
    assert_eq!(image[0], 4300);
    assert_eq!(run("10 rem print 1\n20 end"), "");
}

#[test]
fn test_goto_forward() {
    let src = "10 goto 30\n20 print 1\n30 print 2\n40 end";
    assert_eq!(run(src), "2\n");
}

#[test]
fn test_duplicate_line_uses_first() {
    let src = "10 goto 30\n20 end\n30 print 1\n40 end\n30 print 2\n50 end";
    assert_eq!(run(src), "1\n");
}

#[test]
fn test_for_loop_counts_up() {
    let src = "10 for i = 1 to 3\n20 print i\n30 next i\n40 end";
    assert_eq!(run(src), "1\n2\n3\n");
}

#[test]
fn test_for_loop_negative_step() {
    let src = "10 for i = 5 to 1 step -1\n20 print i\n30 next i\n40 end";
    assert_eq!(run(src), "5\n4\n3\n2\n1\n");
}

#[test]
fn test_for_loop_step_two() {
    let src = "10 for i = 1 to 6 step 2\n20 print i\n30 next i\n40 end";
    assert_eq!(run(src), "1\n3\n5\n");
}

#[test]
fn test_for_loop_always_runs_once() {
    let src = "10 for i = 3 to 0\n20 print i\n30 next i\n40 end";
    assert_eq!(run(src), "3\n");
}

#[test]
fn test_sum_loop() {
    let src = "\
10 let s = 0
20 for i = 1 to 5
30 let s = s + i
40 next i
50 print s
60 end";
    assert_eq!(run(src), "15\n");
}

#[test]
fn test_nested_for() {
    let src = "\
10 for i = 1 to 2
20 for j = 1 to 2
30 print i, j
40 next j
50 next i
60 end";
    assert_eq!(run(src), "11\n12\n21\n22\n");
}

#[test]
fn test_countdown_with_if() {
    let src = "\
10 let n = 3
20 print n
30 let n = n - 1
40 if n > 0 goto 20
50 end";
    assert_eq!(run(src), "3\n2\n1\n");
}

fn relation(lhs: i32, rel: &str, rhs: i32) -> String {
    let src = format!(
        "10 if {} {} {} goto 40\n20 print 0\n30 goto 50\n40 print 1\n50 end",
        lhs, rel, rhs
    );
    run(&src)
}

#[test]
fn test_if_equal() {
    assert_eq!(relation(2, "==", 2), "1\n");
    assert_eq!(relation(2, "==", 3), "0\n");
    assert_eq!(relation(2, "=", 2), "1\n");
}

#[test]
fn test_if_not_equal() {
    assert_eq!(relation(2, "!=", 3), "1\n");
    assert_eq!(relation(3, "!=", 2), "1\n");
    assert_eq!(relation(2, "!=", 2), "0\n");
}

#[test]
fn test_if_less() {
    assert_eq!(relation(2, "<", 3), "1\n");
    assert_eq!(relation(3, "<", 2), "0\n");
    assert_eq!(relation(2, "<", 2), "0\n");
}

#[test]
fn test_if_greater() {
    assert_eq!(relation(3, ">", 2), "1\n");
    assert_eq!(relation(2, ">", 3), "0\n");
    assert_eq!(relation(2, ">", 2), "0\n");
}

#[test]
fn test_if_less_equal() {
    assert_eq!(relation(2, "<=", 3), "1\n");
    assert_eq!(relation(2, "<=", 2), "1\n");
    assert_eq!(relation(3, "<=", 2), "0\n");
}

#[test]
fn test_if_greater_equal() {
    assert_eq!(relation(3, ">=", 2), "1\n");
    assert_eq!(relation(2, ">=", 2), "1\n");
    assert_eq!(relation(2, ">=", 3), "0\n");
}

#[test]
fn test_arrays() {
    let src = "\
10 let a(3) = 7
20 let b = a(3) + 1
30 print b, a(5)
40 end";
    assert_eq!(run(src), "80\n");
}

#[test]
fn test_array_sized_by_first_use() {
    let src = "10 let a(12) = 1\n20 let a(12) = 2\n30 print a(12)\n40 end";
    assert_eq!(run(src), "2\n");
}

#[test]
fn test_input() {
    let src = "10 input a, b\n20 print a + b\n30 end";
    let mut r = Runtime::new();
    r.load(&compile(src).unwrap());
    assert_eq!(exec(&mut r), "? ");
    r.enter("3, 4");
    assert_eq!(exec(&mut r), "7\n");
}

#[test]
fn test_input_one_at_a_time() {
    let src = "10 input a, b\n20 print a * b\n30 end";
    let mut r = Runtime::new();
    r.load(&compile(src).unwrap());
    assert_eq!(exec(&mut r), "? ");
    r.enter("6");
    assert_eq!(exec(&mut r), "? ");
    r.enter("7");
    assert_eq!(exec(&mut r), "42\n");
}

#[test]
fn test_input_queued() {
    let src = "10 input a(2)\n20 print a(2)\n30 end";
    assert_eq!(run_with_input(src, &["-9"]), "-9\n");
}

#[test]
fn test_invalid_input() {
    let src = "10 input a\n20 end";
    assert_eq!(
        run_with_input(src, &["abc"]),
        "INVALID INPUT AT 00; EXPECTED INTEGER, GOT \"abc\"\n"
    );
}

#[test]
fn test_let_then_print() {
    assert_eq!(run("10 let x=5\n20 print x\n30 end"), "5\n");
}
