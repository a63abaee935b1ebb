use std::{collections::HashMap, fmt, sync::Arc};

/// A unary real-valued function callable from an expression.
///
/// Shared behind an `Arc` so a calculator can be cloned and evaluated from
/// several threads at once.
pub type UnaryFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Signature of the built-in functions.
type BuiltinFn = fn(f64) -> f64;

/// Defines the built-in functions by generating a lookup table and a name
/// list.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static name/function pairs),
/// - `BUILTIN_FUNCTIONS` (public list of built-in names).
macro_rules! builtin_functions {
    ($($name:literal => $func:expr),* $(,)?) => {
        static BUILTIN_TABLE: &[(&str, BuiltinFn)] = &[
            $(($name, $func),)*
        ];
        /// Names of every built-in function, in registration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[$($name,)*];
    };
}

builtin_functions! {
    "sin" => |x: f64| x.to_radians().sin(),
    "cos" => |x: f64| x.to_radians().cos(),
    "tan" => |x: f64| x.to_radians().tan(),
    "asin" => |x: f64| x.asin().to_degrees(),
    "acos" => |x: f64| x.acos().to_degrees(),
    "atan" => |x: f64| x.atan().to_degrees(),
    "sqrt" => f64::sqrt,
    "ln" => f64::ln,
    "log" => f64::log10,
    "exp" => f64::exp,
    "abs" => f64::abs,
    "floor" => f64::floor,
    "ceil" => f64::ceil,
    "round" => f64::round,
}

/// Mapping from function name to implementation.
///
/// Names are matched exactly, so `Cos` does not resolve to `cos`. Angles for
/// the trigonometric built-ins are in degrees.
///
/// # Example
/// ```
/// use calcula::interpreter::functions::{BUILTIN_FUNCTIONS, FunctionTable};
///
/// assert!(!FunctionTable::new().contains("cos"));
///
/// let mut table = FunctionTable::with_builtins();
/// assert!(BUILTIN_FUNCTIONS.iter().all(|name| table.contains(name)));
/// table.register("double", |x| x * 2.0);
///
/// assert_eq!(table.get("double").map(|f| f(21.0)), Some(42.0));
/// assert!((table.get("cos").unwrap()(60.0) - 0.5).abs() < 1e-12);
/// assert!(table.get("COS").is_none());
/// ```
#[derive(Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<String, UnaryFn>,
}

impl FunctionTable {
    /// Creates a table with no functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding every entry of [`BUILTIN_FUNCTIONS`].
    #[must_use]
    pub fn with_builtins() -> Self {
        let functions = BUILTIN_TABLE.iter()
                                     .map(|&(name, func)| (name.to_string(), Arc::new(func) as UnaryFn))
                                     .collect();
        Self { functions }
    }

    /// Adds `func` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, func: F)
        where F: Fn(f64) -> f64 + Send + Sync + 'static
    {
        self.functions.insert(name.into(), Arc::new(func));
    }

    /// Looks up a function by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&UnaryFn> {
        self.functions.get(name)
    }

    /// Whether a function is registered under exactly `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Iterates over the registered names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FunctionTable").field("functions", &names).finish()
    }
}
