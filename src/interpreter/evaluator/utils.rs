use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Group, Value},
    },
};

/// Checks that a builtin received exactly `expected` arguments.
///
/// # Errors
/// `RuntimeError::ArgumentCountMismatch` naming `function`.
pub fn check_arity(function: &'static str, args: &Group, expected: usize) -> EvalResult<()> {
    if args.len() != expected {
        return Err(RuntimeError::ArgumentCountMismatch { function, expected });
    }
    Ok(())
}

/// Unwraps a quoted group argument.
///
/// # Errors
/// `RuntimeError::IncorrectType` for any other variant.
pub fn expect_quoted(function: &'static str, value: Value) -> EvalResult<Group> {
    match value {
        Value::QuotedGroup(group) => Ok(group),
        _ => Err(RuntimeError::IncorrectType { function }),
    }
}

/// Unwraps a non-empty quoted group argument.
///
/// # Errors
/// `IncorrectType` for other variants, `EmptyList` for `{}`.
pub fn expect_non_empty_list(function: &'static str, value: Value) -> EvalResult<Group> {
    let group = expect_quoted(function, value)?;
    if group.is_empty() {
        return Err(RuntimeError::EmptyList { function });
    }
    Ok(group)
}

/// Collects the arguments of a numeric builtin.
///
/// # Errors
/// - `MissingArguments` if there are none.
/// - `IncorrectType` if any argument is not a number.
pub fn expect_numbers(function: &'static str, args: Group) -> EvalResult<Vec<f64>> {
    if args.is_empty() {
        return Err(RuntimeError::MissingArguments { function });
    }
    args.into_iter()
        .map(|arg| match arg {
            Value::Number(n) => Ok(n),
            _ => Err(RuntimeError::IncorrectType { function }),
        })
        .collect()
}
