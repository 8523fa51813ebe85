use super::{Address, Cell};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Simpletron machine instruction set
///
/// Every instruction is a signed decimal word `opcode * 100 + operand`.
/// The operand is always a memory address. There is a single
/// accumulator register and no stack.
///
/// For example: `let y = x + 1` compiles to
/// `LOAD x, STORE t1, LOAD one, STORE t2, LOAD t1, ADD t2, STORE y`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Input/output
    /// Read an integer from the terminal into memory.
    Read = 10,
    /// Write a memory cell to the terminal as a decimal number.
    Write = 11,
    /// Write a line break. The operand is ignored.
    Newline = 12,
    /// Write the length prefixed string stored at the operand.
    /// Characters follow the length cell at descending addresses.
    Writes = 13,

    // *** Load/store
    Load = 20,
    Store = 21,

    // *** Arithmetic, result left in the accumulator
    Add = 30,
    Subtract = 31,
    Divide = 32,
    Multiply = 33,
    Modulus = 34,

    // *** Transfer of control
    Branch = 40,
    BranchNeg = 41,
    BranchZero = 42,
    Halt = 43,
}

impl Opcode {
    pub fn from_code(code: Cell) -> Option<Opcode> {
        use Opcode::*;
        Some(match code {
            10 => Read,
            11 => Write,
            12 => Newline,
            13 => Writes,
            20 => Load,
            21 => Store,
            30 => Add,
            31 => Subtract,
            32 => Divide,
            33 => Multiply,
            34 => Modulus,
            40 => Branch,
            41 => BranchNeg,
            42 => BranchZero,
            43 => Halt,
            _ => return None,
        })
    }

    pub fn code(self) -> Cell {
        self as Cell
    }

    pub fn encode(self, operand: Address) -> Cell {
        debug_assert!(operand < 100);
        self.code() * 100 + operand as Cell
    }

    pub fn is_branch(self) -> bool {
        matches!(self, Opcode::Branch | Opcode::BranchNeg | Opcode::BranchZero)
    }

    pub fn mnemonic(self) -> &'static str {
        use Opcode::*;
        match self {
            Read => "READ",
            Write => "WRITE",
            Newline => "NEWLINE",
            Writes => "WRITES",
            Load => "LOAD",
            Store => "STORE",
            Add => "ADD",
            Subtract => "SUB",
            Divide => "DIV",
            Multiply => "MUL",
            Modulus => "MOD",
            Branch => "BRANCH",
            BranchNeg => "BRANCHNEG",
            BranchZero => "BRANCHZERO",
            Halt => "HALT",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// A decoded memory cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operand: Address,
}

impl Instruction {
    pub fn decode(cell: Cell) -> Result<Instruction> {
        if cell < 0 {
            return Err(error!(IllegalInstruction; &format!("{:+05}", cell)));
        }
        match Opcode::from_code(cell / 100) {
            Some(opcode) => Ok(Instruction {
                opcode,
                operand: (cell % 100) as Address,
            }),
            None => Err(error!(IllegalInstruction; &format!("{:+05}", cell))),
        }
    }

    pub fn encode(&self) -> Cell {
        self.opcode.encode(self.operand)
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<10} {:02}", self.opcode.mnemonic(), self.operand)
    }
}
