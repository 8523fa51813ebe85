//! # Simple
//!
//! A line numbered BASIC compiled to Simpletron Machine Language.
//!
//! Source is compiled in two passes into a 100 cell memory image which
//! the virtual machine then executes. The same image can be written to
//! an `.sml` file and run later without the compiler.
//!
//! Begin by opening a terminal and running the executable. If you get the
//! following, you have achieved success.
//! ```text
//! Simple
//! Type help for commands.
//! > █
//! ```
//!
//! The library can also be used directly.
//! ```
//! use simple::mach::{compile, Runtime};
//!
//! let image = compile("10 print 6 * 7\n20 end").unwrap();
//! let mut runtime = Runtime::new();
//! runtime.load(&image);
//! let mut output = vec![];
//! runtime.run(&b""[..], &mut output).unwrap();
//! assert_eq!(output, b"42\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
