use crate::value::Value;
use log::warn;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type UnaryFunction<T> = Arc<dyn Fn(T) -> T + Send + Sync>;
pub type BinaryFunction<T> = Arc<dyn Fn(T, T) -> T + Send + Sync>;

/// Decides whether `next` continues a numeric literal whose already scanned
/// text is `prefix`.
pub type LiteralPredicate = Arc<dyn Fn(&str, char) -> bool + Send + Sync>;

/// Named functions and the literal policy shared by the parser and the
/// evaluator.
///
/// A registry is populated once by its owner and then only read: parsing and
/// evaluation borrow it immutably, so it can be shared across threads (behind
/// an `Arc` or a plain reference) once population is done.
pub struct Registry<T> {
    pub(crate) funcs1: HashMap<String, UnaryFunction<T>>,
    pub(crate) funcs2: HashMap<String, BinaryFunction<T>>,
    pub(crate) is_literal_char: LiteralPredicate,
}

/// Digits, plus a single `.` per literal. Exponent notation is not accepted
/// so that `e` stays available as an identifier.
pub fn default_literal_predicate(prefix: &str, next: char) -> bool {
    next.is_ascii_digit() || (next == '.' && !prefix.contains('.'))
}

impl<T: Value> Registry<T> {
    /// An empty registry with the default literal predicate.
    pub fn new() -> Self {
        Self {
            funcs1: HashMap::new(),
            funcs2: HashMap::new(),
            is_literal_char: Arc::new(default_literal_predicate),
        }
    }

    pub fn register_unary<F>(&mut self, name: &str, function: F)
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        if self.funcs1.insert(name.to_string(), Arc::new(function)).is_some() {
            warn!("Replacing previously registered function '{}'", name);
        }
    }

    pub fn register_binary<F>(&mut self, name: &str, function: F)
    where
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        if self.funcs2.insert(name.to_string(), Arc::new(function)).is_some() {
            warn!("Replacing previously registered function '{}'", name);
        }
    }

    pub fn set_literal_predicate<F>(&mut self, predicate: F)
    where
        F: Fn(&str, char) -> bool + Send + Sync + 'static,
    {
        self.is_literal_char = Arc::new(predicate);
    }

    pub fn unary(&self, name: &str) -> Option<&UnaryFunction<T>> {
        self.funcs1.get(name)
    }

    pub fn binary(&self, name: &str) -> Option<&BinaryFunction<T>> {
        self.funcs2.get(name)
    }

    /// True when `name` is registered with either arity.
    pub fn is_function(&self, name: &str) -> bool {
        self.funcs1.contains_key(name) || self.funcs2.contains_key(name)
    }

    pub fn accepts_literal_char(&self, prefix: &str, next: char) -> bool {
        (self.is_literal_char)(prefix, next)
    }
}

impl<T: Value> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut unary: Vec<_> = self.funcs1.keys().collect();
        let mut binary: Vec<_> = self.funcs2.keys().collect();
        unary.sort();
        binary.sort();
        f.debug_struct("Registry")
            .field("unary", &unary)
            .field("binary", &binary)
            .finish_non_exhaustive()
    }
}
