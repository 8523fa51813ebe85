use super::{Address, Cell, Image, Opcode, SymbolKind, SymbolTable, MAX_STRING_LEN, MEMORY_SIZE};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Program memory
///
/// Instructions are emitted upward from address 0 while variables,
/// constants, arrays, strings and temporaries are allocated downward
/// from address 99. The two counters may never cross.

#[derive(Debug, Clone)]
pub struct Program {
    image: Image,
    instruction_counter: Address,
    data_counter: Address,
    symbols: SymbolTable,
}

impl Default for Program {
    fn default() -> Program {
        Program {
            image: Image::default(),
            instruction_counter: 0,
            data_counter: MEMORY_SIZE - 1,
            symbols: SymbolTable::default(),
        }
    }
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn clear(&mut self) {
        *self = Program::default();
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn instruction_counter(&self) -> Address {
        self.instruction_counter
    }

    pub fn data_counter(&self) -> Address {
        self.data_counter
    }

    pub fn emit(&mut self, opcode: Opcode, operand: Address) -> Result<Address> {
        if self.instruction_counter >= self.data_counter {
            return Err(error!(OutOfMemory; "PROGRAM OVERLAPS DATA"));
        }
        let address = self.instruction_counter;
        self.image[address] = opcode.encode(operand);
        self.instruction_counter += 1;
        Ok(address)
    }

    /// Rewrite the operand of an emitted instruction, keeping its opcode.
    pub fn patch(&mut self, address: Address, operand: Address) {
        debug_assert!(address < self.instruction_counter);
        let opcode = self.image[address] / 100;
        self.image[address] = opcode * 100 + operand as Cell;
    }

    pub fn alloc_data(&mut self) -> Result<Address> {
        if self.data_counter <= self.instruction_counter {
            return Err(error!(OutOfMemory; "DATA OVERLAPS PROGRAM"));
        }
        let address = self.data_counter;
        self.data_counter -= 1;
        Ok(address)
    }

    pub fn declare_line(&mut self, number: u16) -> Result<()> {
        self.symbols
            .insert(SymbolKind::Line(number), self.instruction_counter)
    }

    pub fn line(&self, number: u16) -> Option<Address> {
        self.symbols.line(number)
    }

    pub fn intern_variable(&mut self, index: usize) -> Result<Address> {
        if let Some(address) = self.symbols.variable(index) {
            return Ok(address);
        }
        let address = self.alloc_data()?;
        self.symbols.insert(SymbolKind::Variable(index), address)?;
        Ok(address)
    }

    pub fn intern_constant(&mut self, value: Cell) -> Result<Address> {
        if let Some(address) = self.symbols.constant(value) {
            return Ok(address);
        }
        let address = self.alloc_data()?;
        self.symbols.insert(SymbolKind::Constant(value), address)?;
        self.image[address] = value;
        Ok(address)
    }

    /// Element `i` lives at `base - i`.
    pub fn declare_array(&mut self, index: usize, size: usize) -> Result<Address> {
        if let Some((base, _)) = self.symbols.array(index) {
            return Ok(base);
        }
        let base = self.data_counter;
        for _ in 0..size {
            self.alloc_data()?;
        }
        self.symbols
            .insert(SymbolKind::Array { index, size }, base)?;
        Ok(base)
    }

    /// An array is sized on first use to hold at least ten elements.
    pub fn array_element(&mut self, index: usize, subscript: Cell) -> Result<Address> {
        if subscript < 0 {
            return Err(error!(SubscriptOutOfRange));
        }
        let subscript = subscript as usize;
        let (base, size) = match self.symbols.array(index) {
            Some(found) => found,
            None => {
                let size = std::cmp::max(subscript + 1, 10);
                (self.declare_array(index, size)?, size)
            }
        };
        if subscript >= size {
            return Err(error!(SubscriptOutOfRange));
        }
        Ok(base - subscript)
    }

    /// Length cell first, then one character per cell at descending addresses.
    pub fn intern_string(&mut self, text: &str) -> Result<Address> {
        if let Some(address) = self.symbols.string(text) {
            return Ok(address);
        }
        let len = text.chars().count();
        if len > MAX_STRING_LEN {
            return Err(error!(StringTooLong));
        }
        let address = self.alloc_data()?;
        self.image[address] = len as Cell;
        for ch in text.chars() {
            let cell = self.alloc_data()?;
            self.image[cell] = ch as Cell;
        }
        self.symbols
            .insert(SymbolKind::String(text.to_string()), address)?;
        Ok(address)
    }
}
