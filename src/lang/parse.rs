use super::{ast::*, token::*, Column, Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

const MAX_NESTING: usize = 256;

pub fn parse(line_number: LineNumber, tokens: &[Token]) -> Result<Statement> {
    match Parser::parse(tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Statement> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
            depth: 0,
        };
        let statement = match parse.statement() {
            Ok(s) => s,
            Err(e) => return Err(e.in_column(&parse.col)),
        };
        if parse.next().is_some() {
            return Err(error!(SyntaxError, ..&parse.col; "UNEXPECTED TOKEN"));
        }
        Ok(statement)
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.next() {
            None => Ok(Statement::Rem(self.column())),
            Some(Token::Word(word)) => Statement::for_word(self, word),
            Some(Token::Ident(_)) => Err(error!(SyntaxError; "EXPECTED STATEMENT; MISSING LET?")),
            Some(_) => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = this.unary()?;
            loop {
                let op = match this.peek() {
                    Some(Token::Operator(op)) => *op,
                    _ => break,
                };
                let op_precedence = match Expression::op_precedence(&op) {
                    Some(p) => p,
                    None => break,
                };
                if op_precedence < precedence {
                    break;
                }
                this.next();
                let column = this.column();
                let rhs = if op == Operator::Caret {
                    parse(this, op_precedence)?
                } else {
                    parse(this, op_precedence + 1)?
                };
                lhs = Expression::for_binary_op(column, &op, lhs, rhs);
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn unary(&mut self) -> Result<Expression> {
        if self.depth >= MAX_NESTING {
            return Err(error!(SyntaxError; "EXPRESSION NESTED TOO DEEP"));
        }
        self.depth += 1;
        let r = self.signed();
        self.depth -= 1;
        r
    }

    fn signed(&mut self) -> Result<Expression> {
        match self.peek() {
            Some(Token::Operator(Operator::Minus)) => {
                self.next();
                let column = self.column();
                let expr = self.unary()?;
                Ok(Expression::Negation(column, Box::new(expr)))
            }
            Some(Token::Operator(Operator::Plus)) => {
                self.next();
                self.unary()
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expression> {
        if let Some(Token::Ident(_)) = self.peek() {
            return Ok(Expression::Variable(self.variable()?));
        }
        match self.next() {
            Some(Token::LParen) => {
                let expr = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            Some(Token::Literal(Literal::Integer(s))) => match s.parse::<i32>() {
                Ok(n) => Ok(Expression::Integer(self.column(), n)),
                Err(_) => Err(error!(Overflow, ..&self.column())),
            },
            Some(Token::Literal(Literal::Float(s))) => match s.parse::<f64>() {
                Ok(n) if n.trunc() < i32::MIN as f64 || n.trunc() > i32::MAX as f64 => {
                    Err(error!(Overflow, ..&self.column()))
                }
                Ok(n) => Ok(Expression::Float(self.column(), n)),
                Err(_) => Err(error!(SyntaxError, ..&self.column(); "INVALID NUMBER")),
            },
            Some(Token::Literal(Literal::String(_))) => {
                Err(error!(SyntaxError; "STRING NOT ALLOWED IN EXPRESSION"))
            }
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn variable(&mut self) -> Result<Variable> {
        let (column, ch) = self.ident()?;
        if let Some(Token::LParen) = self.peek() {
            self.next();
            let index = self.expression()?;
            self.expect(Token::RParen)?;
            let column = column.start..self.col.end;
            return Ok(Variable::Array(column, ch, Box::new(index)));
        }
        Ok(Variable::Unary(column, ch))
    }

    fn variable_list(&mut self) -> Result<Vec<Variable>> {
        let mut v: Vec<Variable> = vec![];
        loop {
            v.push(self.variable()?);
            match self.peek() {
                Some(Token::Comma) => {
                    self.next();
                }
                _ => return Ok(v),
            }
        }
    }

    fn print_list(&mut self) -> Result<Vec<PrintItem>> {
        let mut v: Vec<PrintItem> = vec![];
        if self.peek().is_none() {
            return Ok(v);
        }
        loop {
            match self.peek() {
                Some(Token::Literal(Literal::String(s))) => {
                    let s = s.clone();
                    self.next();
                    v.push(PrintItem::String(self.column(), s));
                }
                _ => v.push(PrintItem::Expression(self.expression()?)),
            }
            match self.peek() {
                Some(Token::Comma) => {
                    self.next();
                }
                _ => return Ok(v),
            }
        }
    }

    fn ident(&mut self) -> Result<Ident> {
        match self.next() {
            Some(Token::Ident(s)) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_lowercase() => Ok((self.column(), ch)),
                    _ => Err(error!(InvalidVariable, ..&self.column())),
                }
            }
            _ => Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        }
    }

    fn line_number(&mut self) -> Result<Target> {
        match self.next() {
            Some(Token::Literal(Literal::Integer(s))) => match s.parse::<u16>() {
                Ok(n) => Ok((self.column(), n)),
                Err(_) => Err(error!(Overflow, ..&self.column(); "INVALID LINE NUMBER")),
            },
            _ => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn relation(&mut self) -> Result<Relation> {
        use Operator::*;
        match self.next() {
            Some(Token::Operator(op)) if op.is_relation() => Ok(match op {
                Assign | Equal => Relation::Equal,
                NotEqual => Relation::NotEqual,
                Less => Relation::Less,
                Greater => Relation::Greater,
                LessEqual => Relation::LessEqual,
                _ => Relation::GreaterEqual,
            }),
            _ => Err(error!(SyntaxError; "EXPECTED RELATIONAL OPERATOR")),
        }
    }

    fn step(&mut self) -> Result<Option<Step>> {
        match self.peek() {
            Some(Token::Word(Word::Step)) => {
                self.next();
            }
            _ => return Ok(None),
        }
        let mut negative = false;
        if let Some(Token::Operator(Operator::Minus)) = self.peek() {
            self.next();
            negative = true;
        }
        let start = self.col.start;
        match self.next() {
            Some(Token::Literal(Literal::Integer(s))) => {
                let column = if negative { start..self.col.end } else { self.column() };
                match s.parse::<i32>() {
                    Ok(n) if negative => Ok(Some((column, -n))),
                    Ok(n) => Ok(Some((column, n))),
                    Err(_) => Err(error!(Overflow, ..&self.column())),
                }
            }
            _ => Err(error!(SyntaxError; "STEP MUST BE AN INTEGER CONSTANT")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        Err(error!(SyntaxError;
            match token {
                Token::Unknown(_) | Token::Whitespace(_) => "UNEXPECTED TOKEN",
                Token::Literal(_) => "EXPECTED LITERAL",
                Token::Word(Word::To) => "EXPECTED TO",
                Token::Word(Word::Goto) => "EXPECTED GOTO",
                Token::Word(_) => "EXPECTED RESERVED WORD",
                Token::Operator(_) => "EXPECTED OPERATOR",
                Token::Ident(_) => "EXPECTED IDENTIFIER",
                Token::LParen => "EXPECTED LEFT PARENTHESIS",
                Token::RParen => "EXPECTED RIGHT PARENTHESIS",
                Token::Comma => "EXPECTED COMMA",
            }
        ))
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: &Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        match op {
            Caret => Expression::Power(col, Box::new(lhs), Box::new(rhs)),
            Multiply => Expression::Multiply(col, Box::new(lhs), Box::new(rhs)),
            Divide => Expression::Divide(col, Box::new(lhs), Box::new(rhs)),
            Modulus => Expression::Modulus(col, Box::new(lhs), Box::new(rhs)),
            Plus => Expression::Add(col, Box::new(lhs), Box::new(rhs)),
            _ => Expression::Subtract(col, Box::new(lhs), Box::new(rhs)),
        }
    }

    fn op_precedence(op: &Operator) -> Option<usize> {
        use Operator::*;
        match op {
            Plus | Minus => Some(10),
            Multiply | Divide | Modulus => Some(20),
            Caret => Some(30),
            Assign | Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => None,
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Word) -> Result<Statement> {
        let column = parse.column();
        use Word::*;
        match word {
            Rem => Self::r#rem(parse, column),
            Input => Self::r#input(parse, column),
            Print => Self::r#print(parse, column),
            Let => Self::r#let(parse, column),
            Goto => Self::r#goto(parse, column),
            If => Self::r#if(parse, column),
            For => Self::r#for(parse, column),
            Next => Self::r#next(parse, column),
            End => Ok(Statement::End(column)),
            Step | To => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#rem(parse: &mut Parser, column: Column) -> Result<Statement> {
        while parse.next().is_some() {}
        Ok(Statement::Rem(column))
    }

    fn r#input(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Input(column, parse.variable_list()?))
    }

    fn r#print(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Print(column, parse.print_list()?))
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        let var = parse.variable()?;
        parse.expect(Token::Operator(Operator::Assign))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(column, var, expr))
    }

    fn r#goto(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Goto(column, parse.line_number()?))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let lhs = parse.expression()?;
        let relation = parse.relation()?;
        let rhs = parse.expression()?;
        parse.expect(Token::Word(Word::Goto))?;
        let target = parse.line_number()?;
        Ok(Statement::If(column, lhs, relation, rhs, target))
    }

    fn r#for(parse: &mut Parser, column: Column) -> Result<Statement> {
        let ident = parse.ident()?;
        parse.expect(Token::Operator(Operator::Assign))?;
        let from = parse.expression()?;
        parse.expect(Token::Word(Word::To))?;
        let to = parse.expression()?;
        let step = parse.step()?;
        Ok(Statement::For(column, ident, from, to, step))
    }

    fn r#next(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Next(column, parse.ident()?))
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex::*;
    use super::*;

    fn parse_str(s: &str) -> Statement {
        let (lin, tokens) = lex(s);
        match parse(lin, &tokens) {
            Ok(s) => s,
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    fn parse_err(s: &str) -> Error {
        let (lin, tokens) = lex(s);
        match parse(lin, &tokens) {
            Ok(s) => panic!("{:?}", s),
            Err(e) => e,
        }
    }

    #[test]
    fn test_let_x_eq_y() {
        let answer = Statement::Let(
            0..3,
            Variable::Unary(4..5, 'x'),
            Expression::Variable(Variable::Unary(8..9, 'y')),
        );
        assert_eq!(parse_str("10 let x = y"), answer);
    }

    #[test]
    fn test_precedence_and_paren() {
        let answer = Statement::Let(
            0..3,
            Variable::Unary(4..5, 'a'),
            Expression::Subtract(
                8..9,
                Box::new(Expression::Integer(7..8, 2)),
                Box::new(Expression::Multiply(
                    14..15,
                    Box::new(Expression::Add(
                        11..12,
                        Box::new(Expression::Integer(10..11, 3)),
                        Box::new(Expression::Variable(Variable::Unary(12..13, 'b'))),
                    )),
                    Box::new(Expression::Integer(15..16, 4)),
                )),
            ),
        );
        assert_eq!(parse_str("1 let a=(2-(3+b)*4)"), answer);
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        match parse_str("1 let a=9-3-2") {
            Statement::Let(_, _, Expression::Subtract(_, lhs, rhs)) => {
                assert!(matches!(*lhs, Expression::Subtract(..)));
                assert_eq!(*rhs, Expression::Integer(10..11, 2));
            }
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn test_power_is_right_associative() {
        match parse_str("1 let a=2^3^2") {
            Statement::Let(_, _, Expression::Power(_, lhs, rhs)) => {
                assert_eq!(*lhs, Expression::Integer(6..7, 2));
                assert!(matches!(*rhs, Expression::Power(..)));
            }
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn test_if_accepts_single_equals() {
        match parse_str("5 if a = 3 goto 50") {
            Statement::If(_, _, rel, _, (_, 50)) => assert_eq!(rel, Relation::Equal),
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn test_for_with_negative_step() {
        match parse_str("5 for i = 10 to 1 step -2") {
            Statement::For(_, (_, 'i'), _, _, Some((_, step))) => assert_eq!(step, -2),
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn test_print_list() {
        assert_eq!(
            parse_str("9 print \"x=\", x"),
            Statement::Print(
                0..5,
                vec![
                    PrintItem::String(6..10, "x=".to_string()),
                    PrintItem::Expression(Expression::Variable(Variable::Unary(12..13, 'x'))),
                ]
            )
        );
        assert_eq!(parse_str("9 print"), Statement::Print(0..5, vec![]));
    }

    #[test]
    fn test_errors() {
        let e = parse_err("10 let ab = 1");
        assert_eq!(e.code(), crate::lang::ErrorCode::InvalidVariable);
        assert_eq!(e.to_string(), "INVALID VARIABLE IN 10 (4..6)");
        let e = parse_err("10 end 5");
        assert_eq!(e.to_string(), "SYNTAX ERROR IN 10 (4..5); UNEXPECTED TOKEN");
        let e = parse_err("10 let a = 99999999999");
        assert_eq!(e.code(), crate::lang::ErrorCode::Overflow);
        let e = parse_err("10 for i = 1 to 9 step k");
        assert_eq!(e.code(), crate::lang::ErrorCode::SyntaxError);
    }

    #[test]
    fn test_float_out_of_range() {
        let e = parse_err("10 print 99999999999.5");
        assert_eq!(e.to_string(), "OVERFLOW IN 10 (6..19)");
        let e = parse_err("10 print -2147483649.0");
        assert_eq!(e.code(), crate::lang::ErrorCode::Overflow);
        assert_eq!(
            parse_str("10 print 2147483647.9"),
            Statement::Print(
                0..5,
                vec![PrintItem::Expression(Expression::Float(6..18, 2147483647.9))]
            )
        );
    }

    #[test]
    fn test_nesting_limit() {
        let deep = format!("10 print {}1{}", "(".repeat(20000), ")".repeat(20000));
        let e = parse_err(&deep);
        assert_eq!(e.code(), crate::lang::ErrorCode::SyntaxError);
        let e = parse_err(&format!("10 print {}1", "-".repeat(20000)));
        assert_eq!(e.code(), crate::lang::ErrorCode::SyntaxError);
        let ok = format!("10 print {}1{}", "(".repeat(100), ")".repeat(100));
        assert!(parse(Some(10), &lex(&ok).1).is_ok());
    }
}
