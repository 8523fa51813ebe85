use super::{Address, Cell, Opcode, Program};
use crate::error;
use crate::lang::ast::{Expression, Variable};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Compile an expression so its value is left in the accumulator.
///
/// Every operator spills its operands to fresh temporaries. Nothing is
/// ever reused so deep expressions consume data memory quickly.
pub fn expression(prog: &mut Program, expr: &Expression) -> Result<()> {
    fn literal(prog: &mut Program, value: Cell) -> Result<()> {
        let address = prog.intern_constant(value)?;
        prog.emit(Opcode::Load, address)?;
        Ok(())
    }
    fn spill(prog: &mut Program) -> Result<Address> {
        let temp = prog.alloc_data()?;
        prog.emit(Opcode::Store, temp)?;
        Ok(temp)
    }
    fn binary(prog: &mut Program, lhs: &Expression, rhs: &Expression, op: Opcode) -> Result<()> {
        expression(prog, lhs)?;
        let lhs = spill(prog)?;
        expression(prog, rhs)?;
        let rhs = spill(prog)?;
        prog.emit(Opcode::Load, lhs)?;
        prog.emit(op, rhs)?;
        Ok(())
    }
    fn negation(prog: &mut Program, operand: &Expression) -> Result<()> {
        expression(prog, operand)?;
        let zero = prog.intern_constant(0)?;
        let operand = spill(prog)?;
        prog.emit(Opcode::Load, zero)?;
        prog.emit(Opcode::Subtract, operand)?;
        Ok(())
    }
    fn power(prog: &mut Program, base: &Expression, exponent: &Expression) -> Result<()> {
        expression(prog, base)?;
        let base = spill(prog)?;
        expression(prog, exponent)?;
        let exponent = spill(prog)?;
        let result = prog.alloc_data()?;
        let one = prog.intern_constant(1)?;
        prog.emit(Opcode::Load, one)?;
        prog.emit(Opcode::Store, result)?;
        let loop_start = prog.instruction_counter();
        prog.emit(Opcode::Load, exponent)?;
        let exit_zero = prog.emit(Opcode::BranchZero, 0)?;
        let exit_neg = prog.emit(Opcode::BranchNeg, 0)?;
        prog.emit(Opcode::Load, result)?;
        prog.emit(Opcode::Multiply, base)?;
        prog.emit(Opcode::Store, result)?;
        prog.emit(Opcode::Load, exponent)?;
        prog.emit(Opcode::Subtract, one)?;
        prog.emit(Opcode::Store, exponent)?;
        prog.emit(Opcode::Branch, loop_start)?;
        let loop_end = prog.instruction_counter();
        prog.patch(exit_zero, loop_end);
        prog.patch(exit_neg, loop_end);
        prog.emit(Opcode::Load, result)?;
        Ok(())
    }
    let r = match expr {
        Expression::Integer(_, n) => literal(prog, *n),
        Expression::Float(_, f) => literal(prog, f.trunc() as Cell),
        Expression::Variable(var) => match variable_address(prog, var) {
            Ok(address) => prog.emit(Opcode::Load, address).map(|_| ()),
            Err(e) => Err(e),
        },
        Expression::Negation(_, operand) => negation(prog, operand),
        Expression::Power(_, lhs, rhs) => power(prog, lhs, rhs),
        Expression::Multiply(_, lhs, rhs) => binary(prog, lhs, rhs, Opcode::Multiply),
        Expression::Divide(_, lhs, rhs) => binary(prog, lhs, rhs, Opcode::Divide),
        Expression::Modulus(_, lhs, rhs) => binary(prog, lhs, rhs, Opcode::Modulus),
        Expression::Add(_, lhs, rhs) => binary(prog, lhs, rhs, Opcode::Add),
        Expression::Subtract(_, lhs, rhs) => binary(prog, lhs, rhs, Opcode::Subtract),
    };
    r.map_err(|e| e.in_column(&expr.column()))
}

/// Memory address of a variable or array element.
/// Array subscripts must be integer literals; SML has no indirect addressing.
pub fn variable_address(prog: &mut Program, var: &Variable) -> Result<Address> {
    let r = match var {
        Variable::Unary(..) => prog.intern_variable(var.index()),
        Variable::Array(_, _, subscript) => match **subscript {
            Expression::Integer(_, n) => prog.array_element(var.index(), n),
            _ => Err(error!(NonConstantSubscript, ..&subscript.column())),
        },
    };
    r.map_err(|e| e.in_column(&var.column()))
}
