use std::fmt;
use std::str::FromStr;

use crate::error::EvalErr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn from_symbol(symbol: char) -> Option<Op> {
        match symbol {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// `l` is the left hand operand, ie: the one pushed first.
    pub fn apply(self, l: f64, r: f64) -> Result<f64, EvalErr> {
        match self {
            Op::Add => Ok(l + r),
            Op::Sub => Ok(l - r),
            Op::Mul => Ok(l * r),
            Op::Div if r == 0.0 => Err(EvalErr::DivisionByZero),
            Op::Div => Ok(l / r),
        }
    }
}

impl FromStr for Op {
    type Err = EvalErr;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let op = match (chars.next(), chars.next()) {
            (Some(c), None) => Op::from_symbol(c),
            _ => None,
        };
        op.ok_or_else(|| EvalErr::UnsupportedOperation(s.to_string()))
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Func {
    Log,
    Sin,
    Cos,
    Tan,
}

impl Func {
    pub fn name(self) -> &'static str {
        match self {
            Func::Log => "log",
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
        }
    }

    // natural log and radians. log outside its domain gives NaN or -inf
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Func::Log => x.ln(),
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Tan => x.tan(),
        }
    }
}

impl FromStr for Func {
    type Err = EvalErr;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" => Ok(Func::Log),
            "sin" => Ok(Func::Sin),
            "cos" => Ok(Func::Cos),
            "tan" => Ok(Func::Tan),
            _ => Err(EvalErr::UnsupportedFunction(s.to_string())),
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Op(Op),
    Func(Func),
    Number(f64),
}

impl Token {
    /// Operators win over functions, functions over literals. Anything that
    /// is neither an operator nor a function must parse as a number.
    pub fn classify(word: &str) -> Result<Token, EvalErr> {
        if let Ok(op) = word.parse() {
            Ok(Token::Op(op))
        } else if let Ok(func) = word.parse() {
            Ok(Token::Func(func))
        } else {
            word.parse()
                .map(Token::Number)
                .map_err(|_| EvalErr::InvalidNumber(word.to_string()))
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Op(op) => write!(f, "{}", op),
            Token::Func(func) => write!(f, "{}", func),
            Token::Number(n) => write!(f, "{}", n),
        }
    }
}

pub fn is_operator(token: &str) -> bool {
    token.parse::<Op>().is_ok()
}

pub fn is_function(token: &str) -> bool {
    token.parse::<Func>().is_ok()
}

pub fn apply_operation(a: f64, b: f64, op: char) -> Result<f64, EvalErr> {
    Op::from_symbol(op)
        .ok_or_else(|| EvalErr::UnsupportedOperation(op.to_string()))?
        .apply(a, b)
}

pub fn apply_function(name: &str, x: f64) -> Result<f64, EvalErr> {
    Ok(name.parse::<Func>()?.apply(x))
}

///////////////////////////////////////////////////////////////////////////////
