use super::{Address, Opcode, Program, Stack, MAX_FORWARD_REFS};
use crate::error;
use crate::lang::{Column, Error, ErrorCode, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// A branch emitted before its target line was seen.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardRef {
    pub address: Address,
    pub target: u16,
    pub origin: LineNumber,
    pub column: Column,
}

/// ## Branch linker
///
/// Branches to lines already compiled resolve immediately. The rest are
/// emitted with operand 00 and patched once every line has an address.

#[derive(Debug)]
pub struct Link {
    unlinked: Stack<ForwardRef>,
}

impl Default for Link {
    fn default() -> Link {
        Link {
            unlinked: Stack::new(MAX_FORWARD_REFS, ErrorCode::TooManyForwardRefs),
        }
    }
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn clear(&mut self) {
        self.unlinked.clear();
    }

    pub fn unlinked(&self) -> std::slice::Iter<'_, ForwardRef> {
        self.unlinked.iter()
    }

    pub fn branch(
        &mut self,
        prog: &mut Program,
        opcode: Opcode,
        target: u16,
        origin: LineNumber,
        column: &Column,
    ) -> Result<Address> {
        debug_assert!(opcode.is_branch());
        if let Some(dest) = prog.line(target) {
            return prog.emit(opcode, dest);
        }
        let address = prog.emit(opcode, 0)?;
        self.unlinked.push(ForwardRef {
            address,
            target,
            origin,
            column: column.clone(),
        })?;
        Ok(address)
    }

    pub fn link(&mut self, prog: &mut Program) -> Result<()> {
        for fref in self.unlinked.drain() {
            match prog.line(fref.target) {
                Some(dest) => prog.patch(fref.address, dest),
                None => {
                    let msg = format!("GOTO {}", fref.target);
                    return Err(error!(UndefinedLine, fref.origin, ..&fref.column; &msg));
                }
            }
        }
        Ok(())
    }
}
