use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::expect_numbers},
        value::core::{Group, Value},
    },
};

/// Folds the numeric arguments of `function` from left to right.
///
/// The first argument seeds the accumulator; `step` combines it with each
/// following argument in order and may abort the fold with an error, in
/// which case the remaining operands are dropped unread.
fn fold(function: &'static str,
        args: Group,
        step: impl Fn(f64, f64) -> EvalResult<f64>)
        -> EvalResult<f64> {
    let numbers = expect_numbers(function, args)?;
    let (first, rest) = numbers.split_first()
                               .ok_or(RuntimeError::MissingArguments { function })?;

    rest.iter().try_fold(*first, |acc, &y| step(acc, y))
}

/// Sums the arguments left to right.
///
/// # Example
/// ```
/// use lioliosh::interpreter::{evaluator::function::arithmetic::add,
///                             value::core::{Group, Value}};
///
/// let args: Group = [1.0, 2.0, 3.0].into_iter().map(Value::Number).collect();
/// assert_eq!(add(args).unwrap(), Value::Number(6.0));
/// ```
pub fn add(args: Group) -> EvalResult<Value> {
    fold("add", args, |x, y| Ok(x + y)).map(Value::Number)
}

/// Subtracts each following argument from the first.
///
/// With exactly one argument the result is its negation.
pub fn sub(args: Group) -> EvalResult<Value> {
    if args.len() == 1 {
        return fold("sub", args, |x, _| Ok(x)).map(|x| Value::Number(-x));
    }
    fold("sub", args, |x, y| Ok(x - y)).map(Value::Number)
}

/// Multiplies the arguments left to right.
pub fn mul(args: Group) -> EvalResult<Value> {
    fold("mul", args, |x, y| Ok(x * y)).map(Value::Number)
}

/// Divides the first argument by each following one.
///
/// # Errors
/// `DivisionByZero` on the first zero divisor; later operands are not
/// examined.
pub fn div(args: Group) -> EvalResult<Value> {
    fold("div", args, |x, y| {
        if y == 0.0 {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(x / y)
    }).map(Value::Number)
}

/// Floored remainder, left to right: `x = ((x % y) + y) % y`.
///
/// The result takes the sign of the divisor, so for positive `y` it lies in
/// `[0, y)`.
///
/// # Errors
/// `DivisionByZero` on the first zero divisor, exactly as [`div`].
pub fn modulo(args: Group) -> EvalResult<Value> {
    fold("mod", args, |x, y| {
        if y == 0.0 {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(((x % y) + y) % y)
    }).map(Value::Number)
}

/// Raises the accumulator to each following argument: `x = x ^ y`.
pub fn exp(args: Group) -> EvalResult<Value> {
    fold("exp", args, |x, y| Ok(x.powf(y))).map(Value::Number)
}
