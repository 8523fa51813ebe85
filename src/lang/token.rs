#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(String),
    LParen,
    RParen,
    Comma,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        if let Some(word) = Word::from_string(s) {
            return Some(Token::Word(word));
        }
        use Operator::*;
        Some(match s {
            "(" => Token::LParen,
            ")" => Token::RParen,
            "," => Token::Comma,
            "+" => Token::Operator(Plus),
            "-" => Token::Operator(Minus),
            "*" => Token::Operator(Multiply),
            "/" => Token::Operator(Divide),
            "%" => Token::Operator(Modulus),
            "^" => Token::Operator(Caret),
            "=" => Token::Operator(Assign),
            "==" => Token::Operator(Equal),
            "!=" => Token::Operator(NotEqual),
            "<" => Token::Operator(Less),
            ">" => Token::Operator(Greater),
            "<=" => Token::Operator(LessEqual),
            ">=" => Token::Operator(GreaterEqual),
            _ => return None,
        })
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(String),
    Float(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(s) => write!(f, "{}", s),
            Float(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    End,
    For,
    Goto,
    If,
    Input,
    Let,
    Next,
    Print,
    Rem,
    Step,
    To,
}

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        use Word::*;
        Some(match s.to_ascii_lowercase().as_str() {
            "end" => End,
            "for" => For,
            "goto" => Goto,
            "if" => If,
            "input" => Input,
            "let" => Let,
            "next" => Next,
            "print" => Print,
            "rem" => Rem,
            "step" => Step,
            "to" => To,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            End => write!(f, "end"),
            For => write!(f, "for"),
            Goto => write!(f, "goto"),
            If => write!(f, "if"),
            Input => write!(f, "input"),
            Let => write!(f, "let"),
            Next => write!(f, "next"),
            Print => write!(f, "print"),
            Rem => write!(f, "rem"),
            Step => write!(f, "step"),
            To => write!(f, "to"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Modulus,
    Plus,
    Minus,
    Assign,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn is_relation(&self) -> bool {
        use Operator::*;
        match self {
            Assign | Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => true,
            Caret | Multiply | Divide | Modulus | Plus | Minus => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "%"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Assign => write!(f, "="),
            Equal => write!(f, "=="),
            NotEqual => write!(f, "!="),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let t = Token::from_string("REM");
        assert_eq!(t, Some(Token::Word(Word::Rem)));
        let t = Token::from_string("<=");
        assert_eq!(t, Some(Token::Operator(Operator::LessEqual)));
        let t = Token::from_string("PICKLES");
        assert_eq!(t, None);
    }

    #[test]
    fn test_display_keeps_source_width() {
        for s in &["goto", "==", "!=", ">=", "(", ","] {
            let t = Token::from_string(s).unwrap();
            assert_eq!(t.to_string().len(), s.len());
        }
    }
}
