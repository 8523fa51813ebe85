use super::{Address, Cell, MAX_SYMBOLS};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    Line(u16),
    /// 0 for `a` through 25 for `z`.
    Variable(usize),
    Constant(Cell),
    Array { index: usize, size: usize },
    String(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub location: Address,
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        fn letter(index: usize) -> char {
            (b'a' + index as u8) as char
        }
        let (kind, key) = match &self.kind {
            SymbolKind::Line(n) => ("LINE", n.to_string()),
            SymbolKind::Variable(i) => ("VAR", format!("'{}'", letter(*i))),
            SymbolKind::Constant(c) => ("CONST", c.to_string()),
            SymbolKind::Array { index, size } => ("ARRAY", format!("'{}'[{}]", letter(*index), size)),
            SymbolKind::String(s) => ("STRING", format!("{:?}", s)),
        };
        write!(f, "{:<6} {:>5} -> loc {:02}", kind, key, self.location)
    }
}

/// ## Symbol table
///
/// Insertion ordered with a fixed capacity. Lookups return the first match.

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn insert(&mut self, kind: SymbolKind, location: Address) -> Result<()> {
        if self.symbols.len() >= MAX_SYMBOLS {
            return Err(error!(SymbolTableFull));
        }
        self.symbols.push(Symbol { kind, location });
        Ok(())
    }

    fn find<F: Fn(&SymbolKind) -> bool>(&self, pred: F) -> Option<&Symbol> {
        self.symbols.iter().find(|s| pred(&s.kind))
    }

    pub fn line(&self, number: u16) -> Option<Address> {
        self.find(|k| *k == SymbolKind::Line(number))
            .map(|s| s.location)
    }

    pub fn variable(&self, index: usize) -> Option<Address> {
        self.find(|k| *k == SymbolKind::Variable(index))
            .map(|s| s.location)
    }

    pub fn constant(&self, value: Cell) -> Option<Address> {
        self.find(|k| *k == SymbolKind::Constant(value))
            .map(|s| s.location)
    }

    /// Base address and size.
    pub fn array(&self, index: usize) -> Option<(Address, usize)> {
        self.symbols.iter().find_map(|s| match s.kind {
            SymbolKind::Array { index: i, size } if i == index => Some((s.location, size)),
            _ => None,
        })
    }

    pub fn string(&self, text: &str) -> Option<Address> {
        self.symbols.iter().find_map(|s| match &s.kind {
            SymbolKind::String(t) if t == text => Some(s.location),
            _ => None,
        })
    }
}

impl std::fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for symbol in self.symbols.iter() {
            writeln!(f, "  {}", symbol)?;
        }
        Ok(())
    }
}
