use super::{token::*, LineNumber};

pub fn lex(s: &str) -> (LineNumber, Vec<Token>) {
    SimpleLexer::lex(s)
}

fn is_simple_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_simple_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_simple_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_simple_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some(pk) = self.chars().peek() {
                if is_simple_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(&ch) = self.chars().peek() {
            if !is_simple_digit(ch) {
                break;
            }
            s.push(ch);
            self.chars().next();
        }
        if let Some('.') = self.chars().peek() {
            let mut ahead = self.chars().clone();
            ahead.next();
            if let Some(true) = ahead.peek().map(|c| is_simple_digit(*c)) {
                s.push('.');
                self.chars().next();
                while let Some(&ch) = self.chars().peek() {
                    if !is_simple_digit(ch) {
                        break;
                    }
                    s.push(ch);
                    self.chars().next();
                }
                return Some(Token::Literal(Literal::Float(s)));
            }
        }
        Some(Token::Literal(Literal::Integer(s)))
    }

    fn string(&mut self) -> Option<Token> {
        let mut s = String::new();
        self.chars().next();
        loop {
            match self.chars().next() {
                Some('"') => return Some(Token::Literal(Literal::String(s))),
                Some(ch) => s.push(ch),
                None => return Some(Token::Unknown(format!("\"{}", s))),
            }
        }
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(&ch) = self.chars().peek() {
            if !is_simple_alphanumeric(ch) {
                break;
            }
            s.push(ch.to_ascii_lowercase());
            self.chars().next();
        }
        match Word::from_string(&s) {
            Some(word) => Some(Token::Word(word)),
            None => Some(Token::Ident(s)),
        }
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        let mut s = ch.to_string();
        if let Some(&pk) = self.chars().peek() {
            s.push(pk);
            if let Some(t) = Token::from_string(&s) {
                self.chars().next();
                return Some(t);
            }
            s.pop();
        }
        match Token::from_string(&s) {
            Some(t) => Some(t),
            None => Some(Token::Unknown(s)),
        }
    }
}

struct SimpleLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    remark: bool,
}

impl<'a> Tokenizers<'a> for SimpleLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for SimpleLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = self.chars.peek()?;
        if self.remark {
            return Some(Token::Unknown(self.chars.by_ref().collect::<String>()));
        }
        if is_simple_whitespace(*pk) {
            return self.whitespace();
        }
        if is_simple_digit(*pk) {
            return self.number();
        }
        if is_simple_alphabetic(*pk) {
            let r = self.alphabetic();
            if let Some(Token::Word(Word::Rem)) = r {
                self.remark = true;
            }
            return r;
        }
        if *pk == '"' {
            return self.string();
        }
        self.minutia()
    }
}

impl<'a> SimpleLexer<'a> {
    fn lex(s: &str) -> (LineNumber, Vec<Token>) {
        let mut line_number = None;
        let mut s = s.trim_start_matches(is_simple_whitespace);
        let digits = s.chars().take_while(|c| is_simple_digit(*c)).count();
        if digits > 0 {
            if let Ok(n) = s[..digits].parse::<u16>() {
                line_number = Some(n);
                s = &s[digits..];
                if let Some(' ') = s.chars().next() {
                    s = &s[1..];
                }
            }
        }
        let mut tokens = SimpleLexer {
            chars: s.chars().peekable(),
            remark: false,
        }
        .collect();
        SimpleLexer::trim_end(&mut tokens);
        (line_number, tokens)
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
        if let Some(Token::Unknown(_)) = tokens.last() {
            if let Some(Token::Unknown(s)) = tokens.pop() {
                tokens.push(Token::Unknown(s.trim_end().to_string()));
            }
        }
    }
}
