use super::Column;

/// One statement per Simple source line.
#[derive(Debug, PartialEq)]
pub enum Statement {
    Rem(Column),
    Input(Column, Vec<Variable>),
    Print(Column, Vec<PrintItem>),
    Let(Column, Variable, Expression),
    Goto(Column, Target),
    If(Column, Expression, Relation, Expression, Target),
    For(Column, Ident, Expression, Expression, Option<Step>),
    Next(Column, Ident),
    End(Column),
}

/// A single letter variable name, `a` through `z`.
pub type Ident = (Column, char);

/// Line number named by `goto`.
pub type Target = (Column, u16);

/// Literal `step` value of a `for` loop.
pub type Step = (Column, i32);

#[derive(Debug, PartialEq)]
pub enum Variable {
    Unary(Column, char),
    Array(Column, char, Box<Expression>),
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Integer(Column, i32),
    Float(Column, f64),
    Variable(Variable),
    Negation(Column, Box<Expression>),
    Power(Column, Box<Expression>, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
    Modulus(Column, Box<Expression>, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Relation {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

#[derive(Debug, PartialEq)]
pub enum PrintItem {
    String(Column, String),
    Expression(Expression),
}

impl Variable {
    pub fn column(&self) -> Column {
        match self {
            Variable::Unary(col, _) | Variable::Array(col, ..) => col.clone(),
        }
    }

    /// Index 0 for `a` through 25 for `z`.
    pub fn index(&self) -> usize {
        match self {
            Variable::Unary(_, ch) | Variable::Array(_, ch, _) => letter_index(*ch),
        }
    }
}

impl Expression {
    pub fn column(&self) -> Column {
        use Expression::*;
        match self {
            Integer(col, _) | Float(col, _) | Negation(col, _) => col.clone(),
            Expression::Variable(var) => var.column(),
            Power(col, ..)
            | Multiply(col, ..)
            | Divide(col, ..)
            | Modulus(col, ..)
            | Add(col, ..)
            | Subtract(col, ..) => col.clone(),
        }
    }
}

pub fn letter_index(ch: char) -> usize {
    debug_assert!(ch.is_ascii_lowercase());
    (ch as u8 - b'a') as usize
}
