//! Argument handling for the `deriv` and `integ` commands of the rpn shell.

use crate::calculus::{self, DEFAULT_INTERVALS};
use crate::error::EvalErr;
use crate::rpneval::{evaluate_str, tokenize};

pub enum Command {
    Deriv,
    Integ,
    Eval,
}

impl Command {
    pub fn from_line(line: &str) -> Command {
        match line.trim() {
            "deriv" => Command::Deriv,
            "integ" => Command::Integ,
            _ => Command::Eval,
        }
    }

    pub fn run(&self, args: &str) -> Result<f64, EvalErr> {
        match self {
            Command::Deriv => deriv(args),
            Command::Integ => integ(args),
            Command::Eval => evaluate_str(args),
        }
    }
}

fn number(word: Option<&String>) -> Result<f64, EvalErr> {
    let word = word.ok_or(EvalErr::InvalidExpression)?;
    word.parse().map_err(|_| EvalErr::InvalidNumber(word.clone()))
}

/// `<func> <x>`, trailing words are ignored.
pub fn deriv(args: &str) -> Result<f64, EvalErr> {
    let words = tokenize(args);
    let func = words.first().ok_or(EvalErr::InvalidExpression)?;
    calculus::derivative(func, number(words.get(1))?)
}

/// `<func> <a> <b> [n]`
pub fn integ(args: &str) -> Result<f64, EvalErr> {
    let words = tokenize(args);
    let func = words.first().ok_or(EvalErr::InvalidExpression)?;
    let a = number(words.get(1))?;
    let b = number(words.get(2))?;
    let n = match words.get(3) {
        Some(n) => n.parse().map_err(|_| EvalErr::InvalidNumber(n.clone()))?,
        None => DEFAULT_INTERVALS,
    };
    calculus::integral(func, a, b, n)
}

pub fn report(result: Result<f64, EvalErr>) -> String {
    match result {
        Ok(value) => format!("Result: {}", value),
        Err(e) => format!("Error: {}", e),
    }
}
