use tracing::debug;

use crate::error::EvalErr;
use crate::ops::Func;

/// Fixed step for the forward difference.
pub const DERIVATIVE_STEP: f64 = 1e-5;
/// Subintervals used by the trapezoidal rule when the caller has no opinion.
pub const DEFAULT_INTERVALS: usize = 1000;

/// Forward difference `(f(x+h) - f(x)) / h`, error is O(h).
pub fn derivative_fn<F: Fn(f64) -> f64>(f: F, x: f64) -> f64 {
    (f(x + DERIVATIVE_STEP) - f(x)) / DERIVATIVE_STEP
}

/// Composite trapezoidal rule over `n` equal subintervals of `[a, b]`.
///
/// `a > b` is allowed and gives the negated area since the step goes
/// negative. Error shrinks as O(1/n²) for smooth `f`.
pub fn integral_fn<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, n: usize) -> Result<f64, EvalErr> {
    if n == 0 {
        return Err(EvalErr::InvalidIntervals(n));
    }
    let step = (b - a) / n as f64;
    Ok((0..n)
        .map(|i| {
            let x1 = a + i as f64 * step;
            let x2 = a + (i + 1) as f64 * step;
            0.5 * (f(x1) + f(x2)) * step
        })
        .sum())
}

pub fn derivative(name: &str, x: f64) -> Result<f64, EvalErr> {
    let func: Func = name.parse()?;
    let slope = derivative_fn(|x| func.apply(x), x);
    debug!(%func, x, slope, "derivative");
    Ok(slope)
}

pub fn integral(name: &str, a: f64, b: f64, n: usize) -> Result<f64, EvalErr> {
    let func: Func = name.parse()?;
    let area = integral_fn(|x| func.apply(x), a, b, n)?;
    debug!(%func, a, b, n, area, "integral");
    Ok(area)
}
