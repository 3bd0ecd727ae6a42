use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::call_builtin,
        value::core::{Group, Value},
    },
};

/// Result type used by the builtins.
///
/// Builtins return either a value or a `RuntimeError`; the dispatcher turns
/// the error into a `Value::Error` so it flows on as an ordinary value.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a value.
///
/// Only ordered groups are reduced. Numbers, operations, errors and quoted
/// groups are returned unchanged; a quoted group is never descended into.
///
/// # Example
/// ```
/// use lioliosh::interpreter::{evaluator::core::evaluate, value::core::Value};
///
/// let expr = Value::ordered().with(Value::operation("+"))
///                            .with(Value::Number(1.0))
///                            .with(Value::Number(2.0));
/// assert_eq!(evaluate(expr), Value::Number(3.0));
/// ```
pub fn evaluate(value: Value) -> Value {
    match value {
        Value::OrderedGroup(group) => evaluate_group(group),
        other => other,
    }
}

/// Reduces an ordered group to one value.
///
/// 1. Every child is evaluated in place, left to right.
/// 2. The first error child wins; everything else is dropped.
/// 3. An empty group is returned as is, a single child is unwrapped.
/// 4. Otherwise the first child must be an operation, which is applied to the
///    remaining children.
fn evaluate_group(mut group: Group) -> Value {
    group.map_in_place(evaluate);

    if let Some(index) = group.position_of_error() {
        return group.take(index);
    }

    match group.len() {
        0 => return Value::OrderedGroup(group),
        1 => return group.take(0),
        _ => {},
    }

    let Value::Operation(name) = group.pop(0) else {
        return RuntimeError::ExpectedOperator.into();
    };

    tracing::trace!(operation = %name, arguments = group.len(), "dispatching");
    call_builtin(&name, group)
}
