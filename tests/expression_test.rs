mod common;
use common::*;

fn eval(expr: &str) -> String {
    run(&format!("10 print {}\n20 end", expr))
}

#[test]
fn test_precedence() {
    assert_eq!(eval("2 + 3 * 4"), "14\n");
    assert_eq!(eval("(2 + 3) * 4"), "20\n");
    assert_eq!(eval("10 - 4 - 3"), "3\n");
    assert_eq!(eval("2 * 3 ^ 2"), "18\n");
}

#[test]
fn test_division_truncates() {
    assert_eq!(eval("7 / 2"), "3\n");
    assert_eq!(eval("-7 / 2"), "-3\n");
    assert_eq!(eval("100 / 10 / 5"), "2\n");
}

#[test]
fn test_modulus() {
    assert_eq!(eval("7 % 3"), "1\n");
    assert_eq!(eval("-7 % 3"), "-1\n");
    assert_eq!(eval("9 % 3"), "0\n");
}

#[test]
fn test_power() {
    assert_eq!(eval("2 ^ 5"), "32\n");
    assert_eq!(eval("5 ^ 0"), "1\n");
    assert_eq!(eval("2 ^ -1"), "1\n");
    assert_eq!(eval("2 ^ 3 ^ 2"), "512\n");
}

#[test]
fn test_unary_minus() {
    assert_eq!(eval("-3 + 5"), "2\n");
    assert_eq!(eval("-(2 + 3)"), "-5\n");
    assert_eq!(eval("- -4"), "4\n");
    assert_eq!(eval("-2 ^ 2"), "4\n");
    assert_eq!(eval("+6"), "6\n");
}

#[test]
fn test_float_literal_truncates() {
    assert_eq!(eval("7.9"), "7\n");
    assert_eq!(eval("2.5 * 2"), "4\n");
}

#[test]
fn test_variables_start_at_zero() {
    assert_eq!(eval("z + 1"), "1\n");
}

#[test]
fn test_overflow_at_runtime() {
    let src = "10 let a = 2000000000\n20 let b = a + a\n30 end";
    assert_eq!(run(src), "OVERFLOW AT 07\n");
}

#[test]
fn test_division_by_zero() {
    let src = "10 let x = 10\n20 let y = 0\n30 let z = x / y\n40 end";
    assert_eq!(run(src), "DIVISION BY ZERO AT 09\n");
}

#[test]
fn test_modulo_by_zero() {
    assert_eq!(eval("1 % 0"), "MODULO BY ZERO AT 05\n");
}
