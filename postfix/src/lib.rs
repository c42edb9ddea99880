//! Postfix (RPN) calculator: `+ - * /` over reals, `log sin cos tan`, plus
//! numeric derivative and integral of those functions.

pub use error::EvalErr;
pub use ops::{apply_function, apply_operation, is_function, is_operator};
pub use ops::{Func, Op, Token};
pub use rpneval::{evaluate_postfix, evaluate_str, tokenize, RPNExpr};
pub use calculus::{derivative, integral, DEFAULT_INTERVALS, DERIVATIVE_STEP};

mod error;
pub mod ops;
mod rpneval;
#[cfg(test)]
mod rpneval_test;
pub mod calculus;
pub mod shell;
