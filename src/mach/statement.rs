use super::codegen::{expression, variable_address};
use super::{Address, Link, Opcode, Program, Stack, MAX_FOR_DEPTH};
use crate::error;
use crate::lang::ast::{self, Expression, Ident, PrintItem, Relation, Statement, Step, Target, Variable};
use crate::lang::{Column, Error, ErrorCode, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// An open `for` waiting for its `next`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopFrame {
    pub variable: char,
    pub var_addr: Address,
    pub end_addr: Address,
    pub step_addr: Address,
    pub loop_start: Address,
    pub step_is_negative: bool,
}

/// ## Statement code generator
///
/// Emits the SML for one statement at a time and remembers the
/// cross-line state: unresolved branches and open `for` loops.

#[derive(Debug)]
pub struct Generator {
    link: Link,
    loops: Stack<LoopFrame>,
}

impl Default for Generator {
    fn default() -> Generator {
        Generator {
            link: Link::default(),
            loops: Stack::new(MAX_FOR_DEPTH, ErrorCode::ForNestedTooDeep),
        }
    }
}

impl Generator {
    pub fn clear(&mut self) {
        self.link.clear();
        self.loops.clear();
    }

    /// Second pass. Patches every forward branch.
    pub fn link(&mut self, prog: &mut Program) -> Result<()> {
        self.link.link(prog)
    }

    pub fn statement(
        &mut self,
        prog: &mut Program,
        line: LineNumber,
        statement: &Statement,
    ) -> Result<()> {
        let r = match statement {
            Statement::Rem(_) => Ok(()),
            Statement::Input(_, vars) => self.r#input(prog, vars),
            Statement::Print(_, items) => self.r#print(prog, items),
            Statement::Let(_, var, expr) => self.r#let(prog, var, expr),
            Statement::Goto(_, target) => self.r#goto(prog, line, target),
            Statement::If(_, lhs, rel, rhs, target) => {
                self.r#if(prog, line, lhs, *rel, rhs, target)
            }
            Statement::For(_, ident, from, to, step) => {
                self.r#for(prog, ident, from, to, step.as_ref())
            }
            Statement::Next(_, ident) => self.r#next(prog, ident),
            Statement::End(_) => self.r#end(prog),
        };
        r.map_err(|e| e.in_column(&Generator::column(statement)))
    }

    fn column(statement: &Statement) -> Column {
        use Statement::*;
        match statement {
            Rem(col) | Input(col, _) | Print(col, _) | Let(col, ..) | Goto(col, _) | End(col) => {
                col.clone()
            }
            If(col, ..) | For(col, ..) | Next(col, _) => col.clone(),
        }
    }

    fn r#input(&mut self, prog: &mut Program, vars: &[Variable]) -> Result<()> {
        for var in vars {
            let address = variable_address(prog, var)?;
            prog.emit(Opcode::Read, address)?;
        }
        Ok(())
    }

    fn r#print(&mut self, prog: &mut Program, items: &[PrintItem]) -> Result<()> {
        for item in items {
            match item {
                PrintItem::String(col, s) => {
                    let address = prog.intern_string(s).map_err(|e| e.in_column(col))?;
                    prog.emit(Opcode::Writes, address)?;
                }
                PrintItem::Expression(expr) => {
                    expression(prog, expr)?;
                    let temp = prog.alloc_data()?;
                    prog.emit(Opcode::Store, temp)?;
                    prog.emit(Opcode::Write, temp)?;
                }
            }
        }
        prog.emit(Opcode::Newline, 0)?;
        Ok(())
    }

    fn r#let(&mut self, prog: &mut Program, var: &Variable, expr: &Expression) -> Result<()> {
        let address = variable_address(prog, var)?;
        expression(prog, expr)?;
        prog.emit(Opcode::Store, address)?;
        Ok(())
    }

    fn r#goto(&mut self, prog: &mut Program, line: LineNumber, target: &Target) -> Result<()> {
        let (col, number) = target;
        self.link.branch(prog, Opcode::Branch, *number, line, col)?;
        Ok(())
    }

    fn r#if(
        &mut self,
        prog: &mut Program,
        line: LineNumber,
        lhs: &Expression,
        rel: Relation,
        rhs: &Expression,
        target: &Target,
    ) -> Result<()> {
        let (col, number) = target;
        let branch = |this: &mut Generator, prog: &mut Program, opcode: Opcode| {
            this.link.branch(prog, opcode, *number, line, col).map(|_| ())
        };
        expression(prog, lhs)?;
        let left = prog.alloc_data()?;
        prog.emit(Opcode::Store, left)?;
        expression(prog, rhs)?;
        let right = prog.alloc_data()?;
        prog.emit(Opcode::Store, right)?;
        prog.emit(Opcode::Load, left)?;
        prog.emit(Opcode::Subtract, right)?;
        match rel {
            Relation::Equal => branch(self, prog, Opcode::BranchZero)?,
            Relation::Less => branch(self, prog, Opcode::BranchNeg)?,
            Relation::Greater => {
                prog.emit(Opcode::Load, right)?;
                prog.emit(Opcode::Subtract, left)?;
                branch(self, prog, Opcode::BranchNeg)?;
            }
            Relation::LessEqual => {
                branch(self, prog, Opcode::BranchNeg)?;
                branch(self, prog, Opcode::BranchZero)?;
            }
            Relation::GreaterEqual => {
                branch(self, prog, Opcode::BranchZero)?;
                prog.emit(Opcode::Load, right)?;
                prog.emit(Opcode::Subtract, left)?;
                branch(self, prog, Opcode::BranchNeg)?;
            }
            Relation::NotEqual => {
                branch(self, prog, Opcode::BranchNeg)?;
                prog.emit(Opcode::Load, right)?;
                prog.emit(Opcode::Subtract, left)?;
                branch(self, prog, Opcode::BranchNeg)?;
            }
        }
        Ok(())
    }

    fn r#for(
        &mut self,
        prog: &mut Program,
        ident: &Ident,
        from: &Expression,
        to: &Expression,
        step: Option<&Step>,
    ) -> Result<()> {
        let (col, variable) = ident;
        if self.loops.is_full() {
            return Err(error!(ForNestedTooDeep, ..col));
        }
        let var_addr = prog.intern_variable(ast::letter_index(*variable))?;
        expression(prog, from)?;
        prog.emit(Opcode::Store, var_addr)?;
        expression(prog, to)?;
        let end_addr = prog.alloc_data()?;
        prog.emit(Opcode::Store, end_addr)?;
        let step = step.map(|(_, n)| *n).unwrap_or(1);
        let step_addr = prog.intern_constant(step)?;
        self.loops.push(LoopFrame {
            variable: *variable,
            var_addr,
            end_addr,
            step_addr,
            loop_start: prog.instruction_counter(),
            step_is_negative: step < 0,
        })
    }

    fn r#next(&mut self, prog: &mut Program, ident: &Ident) -> Result<()> {
        let (col, variable) = ident;
        let frame = match self.loops.last() {
            None => return Err(error!(NextWithoutFor, ..col)),
            Some(frame) if frame.variable != *variable => {
                let msg = format!("EXPECTED NEXT {}", frame.variable);
                return Err(error!(MismatchedNext, ..col; &msg));
            }
            Some(frame) => frame.clone(),
        };
        prog.emit(Opcode::Load, frame.var_addr)?;
        prog.emit(Opcode::Add, frame.step_addr)?;
        prog.emit(Opcode::Store, frame.var_addr)?;
        if frame.step_is_negative {
            prog.emit(Opcode::Load, frame.end_addr)?;
            prog.emit(Opcode::Subtract, frame.var_addr)?;
        } else {
            prog.emit(Opcode::Load, frame.var_addr)?;
            prog.emit(Opcode::Subtract, frame.end_addr)?;
        }
        prog.emit(Opcode::BranchNeg, frame.loop_start)?;
        prog.emit(Opcode::BranchZero, frame.loop_start)?;
        self.loops.pop()?;
        Ok(())
    }

    fn r#end(&mut self, prog: &mut Program) -> Result<()> {
        prog.emit(Opcode::Halt, 0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Line;

    fn compile_lines(lines: &[&str]) -> Result<(Program, Generator)> {
        let mut prog = Program::new();
        let mut gen = Generator::default();
        for s in lines {
            let line = Line::new(s);
            prog.declare_line(line.number().unwrap())?;
            gen.statement(&mut prog, line.number(), &line.ast()?)?;
        }
        Ok((prog, gen))
    }

    #[test]
    fn test_for_pushes_frame() {
        let (prog, gen) = compile_lines(&["10 for i = 1 to 3"]).unwrap();
        let frame = gen.loops.iter().next().unwrap();
        assert_eq!(frame.variable, 'i');
        assert_eq!(frame.loop_start, prog.instruction_counter());
        assert!(!frame.step_is_negative);
        assert_eq!(prog.image()[frame.step_addr], 1);
    }

    #[test]
    fn test_next_without_for() {
        let e = compile_lines(&["10 next i"]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::NextWithoutFor);
        assert_eq!(e.column(), 5..6);
    }

    #[test]
    fn test_next_mismatch() {
        let e = compile_lines(&["10 for i = 1 to 3", "20 next j"]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::MismatchedNext);
    }

    #[test]
    fn test_if_greater_swaps_operands() {
        let (prog, _) = compile_lines(&["10 if a > b goto 10"]).unwrap();
        let image = prog.image();
        assert_eq!(&image.cells()[4..9], &[2098, 3196, 2096, 3198, 4100]);
    }

    #[test]
    fn test_print_string_then_newline() {
        let (prog, _) = compile_lines(&["10 print \"ok\""]).unwrap();
        assert_eq!(prog.image()[0], 1399);
        assert_eq!(prog.image()[1], 1200);
        assert_eq!(prog.image()[99], 2);
    }
}
