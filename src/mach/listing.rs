use super::{Address, Image, Instruction, Program, SymbolKind, MEMORY_SIZE};
use std::collections::BTreeMap;

/// ## Compiler listing
///
/// Instructions from address 0 followed by the data region, each data
/// cell annotated with the symbol that owns it.

#[derive(Debug, Clone)]
pub struct Listing {
    image: Image,
    instruction_counter: Address,
    data_counter: Address,
    lines: BTreeMap<Address, u16>,
    labels: BTreeMap<Address, String>,
}

impl Listing {
    pub fn new(prog: &Program) -> Listing {
        let mut lines = BTreeMap::new();
        let mut labels = BTreeMap::new();
        for symbol in prog.symbols().iter() {
            match &symbol.kind {
                SymbolKind::Line(n) => {
                    lines.entry(symbol.location).or_insert(*n);
                }
                SymbolKind::Variable(i) => {
                    labels.insert(symbol.location, format!("{}", letter(*i)));
                }
                SymbolKind::Constant(c) => {
                    labels.insert(symbol.location, format!("{}", c));
                }
                SymbolKind::Array { index, size } => {
                    for i in 0..*size {
                        labels.insert(symbol.location - i, format!("{}({})", letter(*index), i));
                    }
                }
                SymbolKind::String(s) => {
                    labels.insert(symbol.location, format!("{:?}", s));
                }
            }
        }
        Listing {
            image: prog.image().clone(),
            instruction_counter: prog.instruction_counter(),
            data_counter: prog.data_counter(),
            lines,
            labels,
        }
    }

    pub fn instruction_count(&self) -> usize {
        self.instruction_counter
    }

    pub fn data_count(&self) -> usize {
        MEMORY_SIZE - 1 - self.data_counter
    }
}

fn letter(index: usize) -> char {
    (b'a' + index as u8) as char
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for address in 0..self.instruction_counter {
            let cell = self.image[address];
            write!(f, "  {:02}: {:+05}  ", address, cell)?;
            match Instruction::decode(cell) {
                Ok(instruction) => write!(f, "{}", instruction)?,
                Err(_) => write!(f, "{:<10} ??", "DATA")?,
            }
            if let Some(number) = self.lines.get(&address) {
                write!(f, "    ; {}", number)?;
            }
            writeln!(f)?;
        }
        if self.data_counter + 1 < MEMORY_SIZE {
            writeln!(f, "  --")?;
        }
        for address in (self.data_counter + 1)..MEMORY_SIZE {
            let cell = self.image[address];
            write!(f, "  {:02}: {:+05}", address, cell)?;
            match self.labels.get(&address) {
                Some(label) => writeln!(f, "  {}", label)?,
                None if (32..127).contains(&cell) => writeln!(f, "  '{}'", cell as u8 as char)?,
                None => writeln!(f)?,
            }
        }
        Ok(())
    }
}
