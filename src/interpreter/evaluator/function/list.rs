use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, evaluate},
            utils::{check_arity, expect_non_empty_list, expect_quoted},
        },
        value::core::{Group, Value},
    },
};

/// Turns the argument group itself into a quoted group. Nothing is copied.
///
/// # Example
/// ```
/// use lioliosh::interpreter::{evaluator::function::list::list,
///                             value::core::{Group, Value}};
///
/// let args: Group = [1.0, 2.0].into_iter().map(Value::Number).collect();
/// assert_eq!(list(args).unwrap().to_string(), "{1 2}");
/// ```
#[allow(clippy::unnecessary_wraps)]
pub fn list(args: Group) -> EvalResult<Value> {
    Ok(Value::QuotedGroup(args))
}

/// Keeps only the first element of a non-empty list.
pub fn head(args: Group) -> EvalResult<Value> {
    check_arity("head", &args, 1)?;
    let mut items = expect_non_empty_list("head", args.take(0))?;
    items.truncate(1);
    Ok(Value::QuotedGroup(items))
}

/// Drops the first element of a non-empty list.
pub fn tail(args: Group) -> EvalResult<Value> {
    check_arity("tail", &args, 1)?;
    let mut items = expect_non_empty_list("tail", args.take(0))?;
    drop(items.pop(0));
    Ok(Value::QuotedGroup(items))
}

/// Concatenates every list argument, left to right.
///
/// # Errors
/// `IncorrectType` if any argument is not a quoted group.
pub fn join(args: Group) -> EvalResult<Value> {
    if args.is_empty() {
        return Err(RuntimeError::MissingArguments { function: "join" });
    }

    let mut joined = Group::new();
    for arg in args {
        joined = joined.join(expect_quoted("join", arg)?);
    }
    Ok(Value::QuotedGroup(joined))
}

/// Prepends a number onto a list: `(cons 1 {2 3})` is `{1 2 3}`.
pub fn cons(mut args: Group) -> EvalResult<Value> {
    check_arity("cons", &args, 2)?;
    if !matches!(args.first(), Some(Value::Number(_))) {
        return Err(RuntimeError::IncorrectType { function: "cons" });
    }

    let mut items = expect_quoted("cons", args.pop(1))?;
    items.prepend(args.take(0));
    Ok(Value::QuotedGroup(items))
}

/// Evaluates a quoted group as if it were an ordered group.
///
/// # Example
/// ```
/// use lioliosh::run_line;
///
/// assert_eq!(run_line("(eval {+ 1 2})").unwrap(), "3");
/// assert_eq!(run_line("(eval {head {5 6}})").unwrap(), "{5}");
/// ```
pub fn eval(args: Group) -> EvalResult<Value> {
    check_arity("eval", &args, 1)?;
    let body = expect_quoted("eval", args.take(0))?;
    Ok(evaluate(Value::OrderedGroup(body)))
}
