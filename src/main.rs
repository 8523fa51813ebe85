//! # Simple
//!
//! Compiles the Simple language to Simpletron Machine Language and runs it.
//!

mod term;

fn main() {
    term::main()
}
