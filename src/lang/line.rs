use super::{ast::*, lex::*, parse::*, token::*, Error, LineNumber};

/// One physical line of Simple source.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let (number, tokens) = lex(s);
        Line { number, tokens }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn ast(&self) -> Result<Statement, Error> {
        parse(self.number, &self.tokens)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: String = self.tokens.iter().map(|s| s.to_string()).collect();
        match self.number {
            Some(number) if s.is_empty() => write!(f, "{}", number),
            Some(number) => write!(f, "{} {}", number, s),
            None => write!(f, "{}", s),
        }
    }
}
