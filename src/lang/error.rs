use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    address: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident @ $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident @ $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            address: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn address(&self) -> Option<usize> {
        self.address
    }

    /// Errors keep the innermost location they were given.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        if self.column != (0..0) {
            return self;
        }
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn at_address(self, address: usize) -> Error {
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLine = 8,
    SubscriptOutOfRange = 9,
    ModuloByZero = 10,
    DivisionByZero = 11,
    InvalidVariable = 13,
    StringTooLong = 15,
    NonConstantSubscript = 16,
    SymbolTableFull = 17,
    TooManyForwardRefs = 18,
    ForNestedTooDeep = 19,
    MismatchedNext = 20,
    InvalidProgramCounter = 30,
    InvalidOperand = 31,
    IllegalInstruction = 32,
    CyclesExceeded = 33,
    InvalidInput = 34,
    Break = 35,
    InternalError = 51,
    FileNotFound = 53,
    IoError = 57,
    BadFileFormat = 64,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            NextWithoutFor => "NEXT WITHOUT FOR",
            SyntaxError => "SYNTAX ERROR",
            Overflow => "OVERFLOW",
            OutOfMemory => "OUT OF MEMORY",
            UndefinedLine => "UNDEFINED LINE",
            SubscriptOutOfRange => "SUBSCRIPT OUT OF RANGE",
            ModuloByZero => "MODULO BY ZERO",
            DivisionByZero => "DIVISION BY ZERO",
            InvalidVariable => "INVALID VARIABLE",
            StringTooLong => "STRING TOO LONG",
            NonConstantSubscript => "NON-CONSTANT SUBSCRIPT",
            SymbolTableFull => "SYMBOL TABLE FULL",
            TooManyForwardRefs => "TOO MANY FORWARD REFERENCES",
            ForNestedTooDeep => "FOR NESTED TOO DEEP",
            MismatchedNext => "NEXT VARIABLE MISMATCH",
            InvalidProgramCounter => "INVALID PROGRAM COUNTER",
            InvalidOperand => "INVALID OPERAND",
            IllegalInstruction => "ILLEGAL INSTRUCTION",
            CyclesExceeded => "EXECUTION CYCLES EXCEEDED",
            InvalidInput => "INVALID INPUT",
            Break => "BREAK",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
            IoError => "I/O ERROR",
            BadFileFormat => "BAD FILE FORMAT",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if let Some(address) = self.address {
            suffix.push_str(&format!(" AT {:02}", address));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        let msg = error.to_string();
        match error.kind() {
            std::io::ErrorKind::NotFound => Error::new(ErrorCode::FileNotFound).message(&msg),
            _ => Error::new(ErrorCode::IoError).message(&msg),
        }
    }
}
