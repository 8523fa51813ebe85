use super::{Address, Cell, Image, Instruction, Opcode, MAX_CYCLES, MEMORY_SIZE};
use crate::error;
use crate::lang::Error;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

type Result<T> = std::result::Result<T, Error>;

/// ## Simpletron virtual machine
///
/// Fetch, decode and execute against a single accumulator until `HALT`
/// or the first error. The machine never blocks: a `READ` with no queued
/// input suspends execution and reports `Event::Input` until `enter`
/// supplies values.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

/// Events are used to communicate with the front end.
#[derive(Debug, PartialEq)]
pub enum Event {
    Running,
    Print(String),
    Input(String),
    Trace(String),
    Error(Error),
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Runtime {
    memory: Image,
    accumulator: Cell,
    program_counter: Address,
    instruction_register: Cell,
    opcode: Option<Opcode>,
    operand: Address,
    state: State,
    cycle_count: usize,
    cycle_limit: usize,
    error: Option<Error>,
    error_reported: bool,
    input: VecDeque<Cell>,
    awaiting_input: bool,
    print_buffer: String,
    tron: bool,
    trace_buffer: String,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime {
            memory: Image::default(),
            accumulator: 0,
            program_counter: 0,
            instruction_register: 0,
            opcode: None,
            operand: 0,
            state: State::Halted,
            cycle_count: 0,
            cycle_limit: MAX_CYCLES,
            error: None,
            error_reported: false,
            input: VecDeque::new(),
            awaiting_input: false,
            print_buffer: String::new(),
            tron: false,
            trace_buffer: String::new(),
        }
    }
}

/// Snapshot of the machine registers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Registers {
    pub accumulator: Cell,
    pub program_counter: Address,
    pub instruction_register: Cell,
    pub opcode: Option<Opcode>,
    pub operand: Address,
    pub cycle_count: usize,
}

impl std::fmt::Display for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "REGISTERS:")?;
        writeln!(f, "  accumulator          {:+05}", self.accumulator)?;
        writeln!(f, "  programCounter          {:02}", self.program_counter)?;
        writeln!(f, "  instructionRegister  {:+05}", self.instruction_register)?;
        writeln!(
            f,
            "  operationCode           {:02}",
            self.opcode.map(|o| o.code()).unwrap_or(0)
        )?;
        writeln!(f, "  operand                 {:02}", self.operand)?;
        writeln!(f, "  cycles              {:>6}", self.cycle_count)
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn with_cycle_limit(cycle_limit: usize) -> Runtime {
        Runtime {
            cycle_limit,
            ..Runtime::default()
        }
    }

    /// Copy an image into memory and reset every register.
    pub fn load(&mut self, image: &Image) {
        *self = Runtime {
            memory: image.clone(),
            state: State::Running,
            cycle_limit: self.cycle_limit,
            tron: self.tron,
            ..Runtime::default()
        };
    }

    pub fn memory(&self) -> &Image {
        &self.memory
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycle_count
    }

    pub fn is_awaiting_input(&self) -> bool {
        self.awaiting_input && self.input.is_empty()
    }

    pub fn set_trace(&mut self, tron: bool) {
        self.tron = tron;
    }

    pub fn registers(&self) -> Registers {
        Registers {
            accumulator: self.accumulator,
            program_counter: self.program_counter,
            instruction_register: self.instruction_register,
            opcode: self.opcode,
            operand: self.operand,
            cycle_count: self.cycle_count,
        }
    }

    /// Stop a running program with BREAK.
    pub fn interrupt(&mut self) {
        if self.state == State::Running {
            self.halt_with(error!(Break @ self.program_counter));
        }
    }

    /// Queue integers for `READ`, separated by whitespace or commas.
    pub fn enter(&mut self, s: &str) {
        let mut values = vec![];
        for word in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if word.is_empty() {
                continue;
            }
            match word.parse::<Cell>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    if self.state == State::Running {
                        let msg = format!("EXPECTED INTEGER, GOT {:?}", word);
                        self.halt_with(error!(InvalidInput @ self.program_counter; &msg));
                    }
                    return;
                }
            }
        }
        self.input.extend(values);
    }

    /// Execute one instruction. Returns false once the machine halts or
    /// while a `READ` is waiting for `enter`.
    pub fn step(&mut self) -> bool {
        if self.state != State::Running {
            return false;
        }
        if let Err(error) = self.cycle() {
            self.halt_with(error);
        }
        self.state == State::Running && !self.is_awaiting_input()
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if !self.trace_buffer.is_empty() {
                return Event::Trace(std::mem::take(&mut self.trace_buffer));
            }
            if !self.print_buffer.is_empty() {
                return Event::Print(std::mem::take(&mut self.print_buffer));
            }
            if self.state != State::Running {
                break;
            }
            if self.is_awaiting_input() {
                return Event::Input("? ".to_string());
            }
            self.step();
        }
        if !self.trace_buffer.is_empty() {
            return Event::Trace(std::mem::take(&mut self.trace_buffer));
        }
        if !self.print_buffer.is_empty() {
            return Event::Print(std::mem::take(&mut self.print_buffer));
        }
        if !self.error_reported {
            if let Some(error) = &self.error {
                self.error_reported = true;
                return Event::Error(error.clone());
            }
        }
        match self.state {
            State::Running => Event::Running,
            State::Halted => Event::Stopped,
        }
    }

    /// Run to completion over blocking std I/O.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        loop {
            match self.execute(5000) {
                Event::Running => {}
                Event::Print(s) | Event::Trace(s) => output.write_all(s.as_bytes())?,
                Event::Input(prompt) => {
                    output.write_all(prompt.as_bytes())?;
                    output.flush()?;
                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        let error = error!(InvalidInput @ self.program_counter; "END OF INPUT");
                        self.halt_with(error);
                    } else {
                        self.enter(&line);
                    }
                }
                Event::Error(error) => {
                    output.flush()?;
                    return Err(error);
                }
                Event::Stopped => {
                    output.flush()?;
                    return Ok(());
                }
            }
        }
    }

    fn halt_with(&mut self, error: Error) {
        self.state = State::Halted;
        self.error = Some(error);
        self.error_reported = false;
    }

    fn cycle(&mut self) -> Result<()> {
        let pc = self.program_counter;
        if pc >= MEMORY_SIZE {
            return Err(error!(InvalidProgramCounter @ pc));
        }
        self.instruction_register = self.memory[pc];
        let instruction = match Instruction::decode(self.instruction_register) {
            Ok(instruction) => instruction,
            Err(e) => return Err(e.at_address(pc)),
        };
        self.opcode = Some(instruction.opcode);
        self.operand = instruction.operand;
        let op = instruction.operand;
        let mut next = pc + 1;
        match instruction.opcode {
            Opcode::Read => match self.input.pop_front() {
                Some(value) => {
                    self.memory[op] = value;
                    self.awaiting_input = false;
                }
                None => {
                    self.awaiting_input = true;
                    return Ok(());
                }
            },
            Opcode::Write => {
                let s = self.memory[op].to_string();
                self.print_buffer.push_str(&s);
            }
            Opcode::Newline => self.print_buffer.push('\n'),
            Opcode::Writes => {
                let len = self.memory[op];
                if len < 0 || len as usize > op {
                    return Err(error!(InvalidOperand @ pc; "STRING OUTSIDE MEMORY"));
                }
                for i in 0..len as usize {
                    let cell = self.memory[op - 1 - i];
                    let ch = std::char::from_u32(cell as u32).unwrap_or('?');
                    self.print_buffer.push(ch);
                }
            }
            Opcode::Load => self.accumulator = self.memory[op],
            Opcode::Store => self.memory[op] = self.accumulator,
            Opcode::Add => self.arithmetic(pc, op, Cell::checked_add)?,
            Opcode::Subtract => self.arithmetic(pc, op, Cell::checked_sub)?,
            Opcode::Multiply => self.arithmetic(pc, op, Cell::checked_mul)?,
            Opcode::Divide => {
                if self.memory[op] == 0 {
                    return Err(error!(DivisionByZero @ pc));
                }
                self.arithmetic(pc, op, Cell::checked_div)?
            }
            Opcode::Modulus => {
                if self.memory[op] == 0 {
                    return Err(error!(ModuloByZero @ pc));
                }
                self.arithmetic(pc, op, Cell::checked_rem)?
            }
            Opcode::Branch => next = op,
            Opcode::BranchNeg => {
                if self.accumulator < 0 {
                    next = op
                }
            }
            Opcode::BranchZero => {
                if self.accumulator == 0 {
                    next = op
                }
            }
            Opcode::Halt => {
                self.trace(pc, &instruction);
                self.state = State::Halted;
                return Ok(());
            }
        }
        self.trace(pc, &instruction);
        self.program_counter = next;
        self.cycle_count += 1;
        if self.cycle_count >= self.cycle_limit {
            let msg = format!("{} CYCLES", self.cycle_count);
            return Err(error!(CyclesExceeded @ pc; &msg));
        }
        Ok(())
    }

    fn arithmetic(&mut self, pc: Address, op: Address, f: fn(Cell, Cell) -> Option<Cell>) -> Result<()> {
        match f(self.accumulator, self.memory[op]) {
            Some(value) => {
                self.accumulator = value;
                Ok(())
            }
            None => Err(error!(Overflow @ pc)),
        }
    }

    fn trace(&mut self, pc: Address, instruction: &Instruction) {
        if self.tron {
            self.trace_buffer.push_str(&format!(
                "[{:02}] {:+05} {} ACC={:+05}\n",
                pc,
                instruction.encode(),
                instruction,
                self.accumulator
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn image(cells: &[Cell]) -> Image {
        let mut image = Image::new();
        for (address, cell) in cells.iter().enumerate() {
            image[address] = *cell;
        }
        image
    }

    #[test]
    fn test_halt_does_not_count() {
        let mut r = Runtime::new();
        r.load(&image(&[4300]));
        assert!(!r.step());
        assert_eq!(r.cycle_count(), 0);
        assert_eq!(r.state(), State::Halted);
        assert!(r.error().is_none());
    }

    #[test]
    fn test_read_blocks_until_enter() {
        let mut r = Runtime::new();
        r.load(&image(&[1099, 1199, 4300]));
        assert_eq!(r.execute(10), Event::Input("? ".to_string()));
        assert!(r.is_awaiting_input());
        r.enter("42");
        assert_eq!(r.execute(10), Event::Print("42".to_string()));
        assert_eq!(r.execute(10), Event::Stopped);
        assert_eq!(r.memory()[99], 42);
    }

    #[test]
    fn test_step_stops_at_empty_read() {
        let mut r = Runtime::new();
        r.load(&image(&[1099, 4300]));
        assert!(!r.step());
        assert!(!r.step());
        assert_eq!(r.registers().program_counter, 0);
        assert_eq!(r.cycle_count(), 0);
        assert_eq!(r.state(), State::Running);
        r.enter("5");
        assert!(r.step());
        assert_eq!(r.memory()[99], 5);
        assert!(!r.step());
        assert_eq!(r.state(), State::Halted);
    }

    #[test]
    fn test_illegal_instruction() {
        let mut r = Runtime::new();
        r.load(&image(&[2099, 9900]));
        assert!(r.step());
        assert!(!r.step());
        let e = r.error().unwrap();
        assert_eq!(e.code(), ErrorCode::IllegalInstruction);
        assert_eq!(e.address(), Some(1));
    }

    #[test]
    fn test_registers() {
        let mut r = Runtime::new();
        r.load(&image(&[2003, 3003, 4300, 21]));
        r.step();
        r.step();
        let regs = r.registers();
        assert_eq!(regs.accumulator, 42);
        assert_eq!(regs.program_counter, 2);
        assert_eq!(regs.opcode, Some(Opcode::Add));
        assert_eq!(regs.cycle_count, 2);
        assert!(regs.to_string().contains("accumulator          +0042"));
    }

    #[test]
    fn test_overflow() {
        let mut r = Runtime::new();
        let mut img = image(&[2099, 3399, 4300]);
        img[99] = 1_000_000;
        r.load(&img);
        r.step();
        assert!(!r.step());
        assert_eq!(r.error().unwrap().code(), ErrorCode::Overflow);
    }

    #[test]
    fn test_trace() {
        let mut r = Runtime::new();
        r.set_trace(true);
        r.load(&image(&[2099, 4300]));
        assert_eq!(
            r.execute(10),
            Event::Trace("[00] +2099 LOAD       99 ACC=+0000\n".to_string())
        );
    }
}
