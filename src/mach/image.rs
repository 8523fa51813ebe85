use super::{Address, Cell, MEMORY_SIZE};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Memory image
///
/// The 100 cells shared by program and data. This is what the compiler
/// produces, what the machine loads, and what `.sml` files contain.

#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    cells: [Cell; MEMORY_SIZE],
}

impl Default for Image {
    fn default() -> Image {
        Image {
            cells: [0; MEMORY_SIZE],
        }
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}

impl std::ops::Index<Address> for Image {
    type Output = Cell;
    fn index(&self, address: Address) -> &Cell {
        &self.cells[address]
    }
}

impl std::ops::IndexMut<Address> for Image {
    fn index_mut(&mut self, address: Address) -> &mut Cell {
        &mut self.cells[address]
    }
}

impl Image {
    pub fn new() -> Image {
        Image::default()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, address: Address) -> Option<Cell> {
        self.cells.get(address).copied()
    }

    /// One signed four digit word per line, `+1007`.
    pub fn to_sml(&self) -> String {
        let mut s = String::with_capacity(MEMORY_SIZE * 6);
        for cell in self.cells.iter() {
            s.push_str(&format!("{:+05}\n", cell));
        }
        s
    }

    /// Blank lines are ignored. Missing trailing cells stay zero.
    pub fn from_sml(s: &str) -> Result<Image> {
        let mut image = Image::default();
        let mut address = 0;
        for (index, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if address >= MEMORY_SIZE {
                return Err(error!(BadFileFormat; "MORE THAN 100 CELLS"));
            }
            match line.parse::<Cell>() {
                Ok(cell) => image.cells[address] = cell,
                Err(_) => {
                    let msg = format!("NOT A NUMBER IN LINE {} OF THE FILE", index + 1);
                    return Err(error!(BadFileFormat; &msg));
                }
            }
            address += 1;
        }
        Ok(image)
    }

    /// Ten rows of ten cells labelled by base address.
    pub fn grid(&self) -> String {
        let mut s = String::from("    ");
        for col in 0..10 {
            s.push_str(&format!("{:>6}", col));
        }
        s.push('\n');
        for (row, cells) in self.cells.chunks(10).enumerate() {
            s.push_str(&format!("{:>2}  ", row * 10));
            for cell in cells {
                s.push_str(&format!(" {:+05}", cell));
            }
            s.push('\n');
        }
        s
    }
}
