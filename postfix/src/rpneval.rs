use std::fmt;

use lexers::WordTokenizer;
use tracing::{debug, trace};

use crate::error::EvalErr;
use crate::ops::Token;

/// A postfix expression whose words have already been classified.
#[derive(Clone, Debug, PartialEq)]
pub struct RPNExpr(pub Vec<Token>);

impl RPNExpr {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, EvalErr> {
        WordTokenizer::new(expr.chars())
            .map(|word| Token::classify(&word))
            .collect::<Result<Vec<_>, _>>()
            .map(RPNExpr)
    }

    pub fn eval(&self) -> Result<f64, EvalErr> {
        eval_tokens(self.0.iter().copied().map(Ok))
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 { f.write_str(" ")?; }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

pub fn tokenize(input: &str) -> Vec<String> {
    WordTokenizer::new(input.chars()).collect()
}

/// Evaluate already split words left to right. Words are classified as they
/// are reached so the first failure in reading order is the one reported.
pub fn evaluate_postfix<S: AsRef<str>>(tokens: &[S]) -> Result<f64, EvalErr> {
    eval_tokens(tokens.iter().map(|word| Token::classify(word.as_ref())))
}

pub fn evaluate_str(input: &str) -> Result<f64, EvalErr> {
    eval_tokens(WordTokenizer::new(input.chars()).map(|word| Token::classify(&word)))
}

fn eval_tokens<I>(tokens: I) -> Result<f64, EvalErr>
    where I: Iterator<Item = Result<Token, EvalErr>>
{
    let result = run_stack(tokens);
    match &result {
        Ok(value) => debug!(value = *value, "evaluated postfix expression"),
        Err(e) => debug!(error = %e, "postfix evaluation failed"),
    }
    result
}

fn run_stack<I>(tokens: I) -> Result<f64, EvalErr>
    where I: Iterator<Item = Result<Token, EvalErr>>
{
    let mut operands = Vec::new();

    for token in tokens {
        let token = token?;
        trace!(%token, depth = operands.len(), "rpn step");
        match token {
            Token::Number(num) => operands.push(num),
            Token::Op(op) => {
                let r = operands.pop().ok_or(EvalErr::InvalidExpression)?;
                let l = operands.pop().ok_or(EvalErr::InvalidExpression)?;
                operands.push(op.apply(l, r)?);
            },
            Token::Func(func) => {
                let x = operands.pop().ok_or(EvalErr::InvalidExpression)?;
                operands.push(func.apply(x));
            },
        }
    }
    match operands.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalErr::InvalidExpression),
    }
}
