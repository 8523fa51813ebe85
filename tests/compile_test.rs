use simple::lang::ErrorCode;
use simple::mach::{compile, Compiler, SymbolKind};

#[test]
fn test_let_and_end_image() {
    let image = compile("10 let x = 5\n20 end").unwrap();
    assert_eq!(&image.cells()[0..3], &[2098, 2199, 4300]);
    assert_eq!(image[98], 5);
    assert_eq!(image[99], 0);
}

#[test]
fn test_symbol_table() {
    let mut c = Compiler::new();
    c.compile("10 let x = 5\n20 end").unwrap();
    assert_eq!(
        c.symbols().to_string(),
        "  LINE      10 -> loc 00\n  VAR      'x' -> loc 99\n  CONST      5 -> loc 98\n  LINE      20 -> loc 02\n"
    );
}

#[test]
fn test_listing() {
    let mut c = Compiler::new();
    c.compile("10 let x = 5\n20 end").unwrap();
    assert_eq!(
        c.listing().to_string(),
        "  00: +2098  LOAD       98    ; 10\n\
         \x20 01: +2199  STORE      99\n\
         \x20 02: +4300  HALT       00    ; 20\n\
         \x20 --\n\
         \x20 98: +0005  5\n\
         \x20 99: +0000  x\n"
    );
}

#[test]
fn test_goto_backward_and_forward() {
    let image = compile("10 goto 30\n20 goto 10\n30 end").unwrap();
    assert_eq!(&image.cells()[0..3], &[4002, 4000, 4300]);
}

#[test]
fn test_string_layout() {
    let image = compile("10 print \"hi\"\n20 end").unwrap();
    assert_eq!(&image.cells()[0..3], &[1399, 1200, 4300]);
    assert_eq!(image[99], 2);
    assert_eq!(image[98], 'h' as i32);
    assert_eq!(image[97], 'i' as i32);
}

#[test]
fn test_repeated_string_is_shared() {
    let image = compile("10 print \"a\"\n20 print \"a\"\n30 end").unwrap();
    assert_eq!(image[0], 1399);
    assert_eq!(image[2], 1399);
}

#[test]
fn test_array_symbol() {
    let mut c = Compiler::new();
    c.compile("10 let a(12) = 1\n20 end").unwrap();
    let array = c
        .symbols()
        .iter()
        .find(|s| matches!(s.kind, SymbolKind::Array { .. }))
        .unwrap();
    assert_eq!(array.kind, SymbolKind::Array { index: 0, size: 13 });
    assert_eq!(array.location, 99);
    assert_eq!(c.program().data_counter(), 99 - 13 - 1);
}

#[test]
fn test_undefined_line() {
    let e = compile("10 goto 99\n20 end").unwrap_err();
    assert_eq!(e.code(), ErrorCode::UndefinedLine);
    assert_eq!(e.to_string(), "UNDEFINED LINE IN 10 (5..7); GOTO 99");
}

#[test]
fn test_syntax_error() {
    let e = compile("10 let x = \n").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.line_number(), Some(10));
    let e = compile("10 paint 1").unwrap_err();
    assert_eq!(
        e.to_string(),
        "SYNTAX ERROR IN 10 (0..5); EXPECTED STATEMENT; MISSING LET?"
    );
}

#[test]
fn test_missing_line_number() {
    let e = compile("10 end\nend").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.to_string(), "SYNTAX ERROR; MISSING LINE NUMBER");
}

#[test]
fn test_invalid_variable() {
    let e = compile("10 let ab = 1").unwrap_err();
    assert_eq!(e.code(), ErrorCode::InvalidVariable);
}

#[test]
fn test_literal_overflow() {
    let e = compile("10 let a = 3000000000").unwrap_err();
    assert_eq!(e.code(), ErrorCode::Overflow);
}

#[test]
fn test_float_literal_overflow() {
    let e = compile("10 print 99999999999.5\n20 end").unwrap_err();
    assert_eq!(e.to_string(), "OVERFLOW IN 10 (6..19)");
    assert!(compile("10 print 2147483647.5\n20 end").is_ok());
}

#[test]
fn test_deeply_nested_expression() {
    let src = format!("10 print {}1{}\n20 end", "(".repeat(20000), ")".repeat(20000));
    let e = compile(&src).unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.line_number(), Some(10));
}

#[test]
fn test_string_too_long() {
    let src = format!("10 print \"{}\"", "x".repeat(64));
    let e = compile(&src).unwrap_err();
    assert_eq!(e.code(), ErrorCode::StringTooLong);
    let src = format!("10 print \"{}\"\n20 end", "x".repeat(63));
    assert!(compile(&src).is_ok());
}

#[test]
fn test_subscript_out_of_range() {
    let e = compile("10 let a(2) = 1\n20 let a(10) = 2").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SubscriptOutOfRange);
    assert_eq!(e.line_number(), Some(20));
}

#[test]
fn test_non_constant_subscript() {
    let e = compile("10 let a(i) = 1").unwrap_err();
    assert_eq!(e.code(), ErrorCode::NonConstantSubscript);
}

#[test]
fn test_next_errors() {
    let e = compile("10 next i").unwrap_err();
    assert_eq!(e.code(), ErrorCode::NextWithoutFor);
    let e = compile("10 for i = 1 to 2\n20 next j").unwrap_err();
    assert_eq!(e.code(), ErrorCode::MismatchedNext);
    assert_eq!(e.line_number(), Some(20));
}

#[test]
fn test_out_of_memory() {
    let mut src = String::new();
    for i in 1..=40 {
        src.push_str(&format!("{} let x = {}\n", i * 10, 1000 + i));
    }
    let e = compile(&src).unwrap_err();
    assert_eq!(e.code(), ErrorCode::OutOfMemory);
}

#[test]
fn test_symbol_table_full() {
    let mut src = String::new();
    for i in 1..=101 {
        src.push_str(&format!("{} rem\n", i));
    }
    let e = compile(&src).unwrap_err();
    assert_eq!(e.code(), ErrorCode::SymbolTableFull);
    assert_eq!(e.line_number(), Some(101));
}

#[test]
fn test_for_nested_too_deep() {
    let mut src = String::new();
    for (i, var) in "abcdefghijk".chars().enumerate() {
        src.push_str(&format!("{} for {} = 1 to 2\n", (i + 1) * 10, var));
    }
    let e = compile(&src).unwrap_err();
    assert_eq!(e.code(), ErrorCode::ForNestedTooDeep);
    assert_eq!(e.line_number(), Some(110));
}

#[test]
fn test_constants_are_pooled() {
    let mut c = Compiler::new();
    c.compile("10 let a = 7\n20 let b = 7 + 7\n30 print 7\n40 end")
        .unwrap();
    let sevens = c
        .symbols()
        .iter()
        .filter(|s| s.kind == SymbolKind::Constant(7))
        .count();
    assert_eq!(sevens, 1);
}
