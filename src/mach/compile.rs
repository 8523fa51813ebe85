use super::statement::Generator;
use super::{Image, Listing, Program, SymbolTable};
use crate::error;
use crate::lang::{Error, Line};

type Result<T> = std::result::Result<T, Error>;

/// Compile Simple source text to a memory image.
pub fn compile(source: &str) -> Result<Image> {
    Compiler::new().compile(source)
}

/// ## Two pass compiler
///
/// Pass one walks the source in physical order. Each line number is
/// bound to the current instruction counter before its statement is
/// compiled, so branches to earlier lines resolve immediately. Pass two
/// patches the branches that referred forward.

#[derive(Debug, Default)]
pub struct Compiler {
    program: Program,
    gen: Generator,
}

impl Compiler {
    pub fn new() -> Compiler {
        Compiler::default()
    }

    pub fn clear(&mut self) {
        self.program.clear();
        self.gen.clear();
    }

    pub fn compile(&mut self, source: &str) -> Result<Image> {
        self.clear();
        for s in source.lines() {
            let line = Line::new(s);
            if line.is_empty() && line.number().is_none() {
                continue;
            }
            self.line(&line)?;
        }
        self.gen.link(&mut self.program)?;
        Ok(self.program.image().clone())
    }

    fn line(&mut self, line: &Line) -> Result<()> {
        let number = match line.number() {
            Some(number) => number,
            None => return Err(error!(SyntaxError; "MISSING LINE NUMBER")),
        };
        let statement = line.ast()?;
        self.program
            .declare_line(number)
            .map_err(|e| e.in_line_number(line.number()))?;
        self.gen
            .statement(&mut self.program, line.number(), &statement)
            .map_err(|e| e.in_line_number(line.number()))
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn image(&self) -> &Image {
        self.program.image()
    }

    pub fn symbols(&self) -> &SymbolTable {
        self.program.symbols()
    }

    pub fn listing(&self) -> Listing {
        Listing::new(&self.program)
    }
}
