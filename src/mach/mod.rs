/*!
## Rust Machine Module

This Rust module is a compiler and virtual machine for Simple.
Programs compile to Simpletron Machine Language (SML) which shares
a single 100 cell memory with the data it operates on.

*/

pub type Address = usize;
pub type Cell = i32;

pub const MEMORY_SIZE: usize = 100;
pub const MAX_SYMBOLS: usize = 100;
pub const MAX_FORWARD_REFS: usize = 100;
pub const MAX_FOR_DEPTH: usize = 10;
pub const MAX_STRING_LEN: usize = 63;
pub const MAX_CYCLES: usize = 100_000;

mod codegen;
mod compile;
mod image;
mod link;
mod listing;
mod opcode;
mod program;
mod runtime;
mod stack;
mod statement;
mod symbol;

pub use compile::compile;
pub use compile::Compiler;
pub use image::Image;
pub use link::ForwardRef;
pub use link::Link;
pub use listing::Listing;
pub use opcode::Instruction;
pub use opcode::Opcode;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Registers;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use symbol::Symbol;
pub use symbol::SymbolKind;
pub use symbol::SymbolTable;
