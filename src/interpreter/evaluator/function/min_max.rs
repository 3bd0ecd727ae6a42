use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::expect_numbers},
        value::core::{Group, Value},
    },
};

/// Picks the extremum of one or more numbers.
///
/// `prefer(candidate, best)` decides whether `candidate` replaces the current
/// best. Ties keep the earlier argument.
fn extremum(name: &'static str, args: Group, prefer: fn(f64, f64) -> bool) -> EvalResult<Value> {
    let numbers = expect_numbers(name, args)?;
    let best = numbers.into_iter()
                      .reduce(|best, candidate| if prefer(candidate, best) { candidate } else { best });
    best.map(Value::Number)
        .ok_or(RuntimeError::MissingArguments { function: name })
}

/// Returns the largest argument.
///
/// # Example
/// ```
/// use lioliosh::interpreter::{evaluator::function::min_max::max,
///                             value::core::{Group, Value}};
///
/// let args: Group = [3.0, 7.5, -1.0].into_iter().map(Value::Number).collect();
/// assert_eq!(max(args).unwrap(), Value::Number(7.5));
/// ```
pub fn max(args: Group) -> EvalResult<Value> {
    extremum("max", args, |candidate, best| best < candidate)
}

/// Returns the smallest argument.
pub fn min(args: Group) -> EvalResult<Value> {
    extremum("min", args, |candidate, best| best > candidate)
}
