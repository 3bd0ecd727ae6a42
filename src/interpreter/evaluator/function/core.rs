use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{arithmetic, list, min_max},
        },
        value::core::{Group, Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin takes ownership of its evaluated arguments and consumes them
/// exactly once, returning a result or the error that stopped it.
pub type BuiltinFn = fn(Group) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - the canonical name, used in error messages,
/// - symbol aliases that dispatch to the same builtin,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of canonical names, which the lexer
///   must accept as operators).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                aliases: [$($alias:literal),* $(,)?],
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:    &'static str,
            aliases: &'static [&'static str],
            func:    BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, aliases: &[$($alias),*], func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "list" => { aliases: [],    func: list::list },
    "head" => { aliases: [],    func: list::head },
    "tail" => { aliases: [],    func: list::tail },
    "join" => { aliases: [],    func: list::join },
    "eval" => { aliases: [],    func: list::eval },
    "cons" => { aliases: [],    func: list::cons },
    "max"  => { aliases: [],    func: min_max::max },
    "min"  => { aliases: [],    func: min_max::min },
    "add"  => { aliases: ["+"], func: arithmetic::add },
    "sub"  => { aliases: ["-"], func: arithmetic::sub },
    "mul"  => { aliases: ["*"], func: arithmetic::mul },
    "div"  => { aliases: ["/"], func: arithmetic::div },
    "mod"  => { aliases: ["%"], func: arithmetic::modulo },
    "exp"  => { aliases: ["^"], func: arithmetic::exp },
}

impl BuiltinDef {
    fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }
}

/// Calls the builtin registered under `name` with `args`.
///
/// An unknown name drops the arguments and yields
/// `Error("Unknown Function")`. A builtin that rejects its arguments yields
/// the corresponding error value.
///
/// # Example
/// ```
/// use lioliosh::interpreter::{evaluator::function::core::call_builtin,
///                             value::core::{Group, Value}};
///
/// let args: Group = [6.0, 3.0].into_iter().map(Value::Number).collect();
/// assert_eq!(call_builtin("/", args), Value::Number(2.0));
/// assert_eq!(call_builtin("sqrt", Group::new()), Value::error("Unknown Function"));
/// ```
pub fn call_builtin(name: &str, args: Group) -> Value {
    let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.answers_to(name)) else {
        tracing::debug!(name, known = ?BUILTIN_FUNCTIONS, "unknown function");
        return RuntimeError::UnknownFunction.into();
    };

    (builtin.func)(args).unwrap_or_else(|e| {
                            tracing::debug!(builtin = builtin.name, error = %e, "builtin rejected its arguments");
                            e.into()
                        })
}
