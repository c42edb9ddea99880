use crate::error::EvalErr;
use crate::ops::{Func, Op, Token};
use crate::rpneval::{evaluate_postfix, evaluate_str, tokenize, RPNExpr};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

#[test]
fn test_eval_basic() {
    assert_eq!(evaluate_postfix(&["3", "4", "+"]), Ok(7.0));
    assert_eq!(evaluate_postfix(&["3", "4", "+", "2", "*", "7", "/"]), Ok(2.0));
    fuzzy_eq!(
        evaluate_postfix(&["3", "4", "+", "2", "*", "7", "/", "log"]).unwrap(),
        std::f64::consts::LN_2
    );
}

#[test]
fn test_eval_operand_order() {
    assert_eq!(evaluate_postfix(&["10", "4", "-"]), Ok(6.0));
    assert_eq!(evaluate_postfix(&["1", "4", "/"]), Ok(0.25));
    // 5 - (1 + 2) * 4
    assert_eq!(evaluate_str("5 1 2 + 4 * -"), Ok(-7.0));
    // (2 - 8) / (1 + 2)
    assert_eq!(evaluate_str("2 8 - 1 2 + /"), Ok(-2.0));
}

#[test]
fn test_eval_functions() {
    fuzzy_eq!(evaluate_str("0.345 sin 0.345 sin * 0.345 cos 0.345 cos * +").unwrap(), 1.0);
    fuzzy_eq!(evaluate_str("1 tan").unwrap(), 1.0f64.tan());
    fuzzy_eq!(evaluate_str("0 cos log").unwrap(), 0.0);
    assert_eq!(evaluate_str("-3.5"), Ok(-3.5));
}

#[test]
fn test_eval_errors() {
    assert_eq!(evaluate_postfix(&["5", "0", "/"]), Err(EvalErr::DivisionByZero));
    assert_eq!(evaluate_postfix(&["+"]), Err(EvalErr::InvalidExpression));
    assert_eq!(evaluate_postfix(&["3", "+"]), Err(EvalErr::InvalidExpression));
    assert_eq!(evaluate_postfix(&["sin"]), Err(EvalErr::InvalidExpression));
    assert_eq!(evaluate_postfix(&["3", "4"]), Err(EvalErr::InvalidExpression));
    assert_eq!(evaluate_postfix::<&str>(&[]), Err(EvalErr::InvalidExpression));
    assert_eq!(evaluate_postfix(&["abc"]), Err(EvalErr::InvalidNumber(format!("abc"))));
    assert_eq!(evaluate_str("1 2 % 3"), Err(EvalErr::InvalidNumber(format!("%"))));
}

#[test]
fn test_eval_first_failure_wins() {
    assert_eq!(evaluate_str("+ abc"), Err(EvalErr::InvalidExpression));
    assert_eq!(evaluate_str("1 0 / abc"), Err(EvalErr::DivisionByZero));
    assert_eq!(evaluate_str("abc 1 0 /"), Err(EvalErr::InvalidNumber(format!("abc"))));
}

#[test]
fn test_eval_nan_propagates() {
    assert!(evaluate_str("-1 log").unwrap().is_nan());
    assert!(evaluate_str("-1 log 2 +").unwrap().is_nan());
    assert_eq!(evaluate_str("0 log"), Ok(f64::NEG_INFINITY));
}

#[test]
fn test_parse_str() {
    let expr = RPNExpr::parse_str(" 3 4\t+ sin ").unwrap();
    assert_eq!(expr, RPNExpr(vec![
        Token::Number(3.0),
        Token::Number(4.0),
        Token::Op(Op::Add),
        Token::Func(Func::Sin),
    ]));
    assert_eq!(expr.to_string(), "3 4 + sin");
    fuzzy_eq!(expr.eval().unwrap(), 7.0f64.sin());
    assert_eq!(RPNExpr::parse_str("+ x"), Err(EvalErr::InvalidNumber(format!("x"))));
    assert_eq!(RPNExpr::parse_str("3 4").unwrap().eval(), Err(EvalErr::InvalidExpression));
}

#[test]
fn test_tokenize() {
    assert_eq!(tokenize("3 4 + 2 * 7 / log"), ["3", "4", "+", "2", "*", "7", "/", "log"]);
    assert!(tokenize("").is_empty());
    let words = tokenize("\t1   2\n+ ");
    assert_eq!(tokenize(&words.join(" ")), words);
}
