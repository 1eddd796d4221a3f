use crate::ast::{Error, EvalError, Expr, Node, Registry, SyntaxError};
use crate::value::Value;
use log::trace;
use lru::LruCache;
use rayon::prelude::*;
use std::collections::HashMap;
use std::num::NonZeroUsize;

impl<T: Value> Node<T> {
    /// Evaluates the subtree against `vars`, stopping at the first error.
    ///
    /// The tree is only read, so the same tree can be evaluated from several
    /// threads at once as long as each call brings its own bindings.
    pub fn evaluate(&self, vars: &HashMap<String, T>, registry: &Registry<T>) -> Result<T, EvalError> {
        match self {
            Node::Literal(value) => Ok(value.clone()),

            Node::Variable(name) => vars
                .get(name)
                .cloned()
                .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),

            Node::Group(inner) => inner.evaluate(vars, registry),

            Node::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left_value = left.evaluate(vars, registry)?;
                let right_value = right.evaluate(vars, registry)?;
                Ok(operator.apply(left_value, right_value))
            }

            Node::FunctionCall { name, arg1, arg2 } => {
                if let Some(function) = registry.unary(name) {
                    return Ok(function(arg1.evaluate(vars, registry)?));
                }

                if let Some(function) = registry.binary(name) {
                    let arg2 = arg2
                        .as_ref()
                        .ok_or_else(|| EvalError::ArityMismatch(name.clone()))?;
                    let first = arg1.evaluate(vars, registry)?;
                    let second = arg2.evaluate(vars, registry)?;
                    return Ok(function(first, second));
                }

                Err(EvalError::UndefinedFunction(name.clone()))
            }
        }
    }
}

/// Owns a registry and remembers recently parsed expressions by their text.
pub struct Evaluator<T> {
    registry: Registry<T>,
    cache: LruCache<String, Expr<T>>,
}

impl<T: Value> Evaluator<T> {
    /// Creates an `Evaluator` with an empty registry, caching up to
    /// `max_cache_size` parsed expressions (at least one).
    pub fn new(max_cache_size: usize) -> Self {
        Self::with_registry(Registry::new(), max_cache_size)
    }

    pub fn with_registry(registry: Registry<T>, max_cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(max_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            registry,
            cache: LruCache::new(capacity),
        }
    }

    pub fn registry(&self) -> &Registry<T> {
        &self.registry
    }

    /// Registers a 1-arg function. Cached parses are dropped since the name
    /// may now read differently.
    pub fn register_unary<F>(&mut self, name: &str, function: F)
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.registry.register_unary(name, function);
        self.cache.clear();
    }

    pub fn register_binary<F>(&mut self, name: &str, function: F)
    where
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        self.registry.register_binary(name, function);
        self.cache.clear();
    }

    pub fn set_literal_predicate<F>(&mut self, predicate: F)
    where
        F: Fn(&str, char) -> bool + Send + Sync + 'static,
    {
        self.registry.set_literal_predicate(predicate);
        self.cache.clear();
    }

    /// Number of parsed expressions currently cached.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Parse an expression string, reusing a cached tree when possible.
    pub fn parse_expression(&mut self, expression: &str) -> Result<Expr<T>, SyntaxError> {
        self.with_expression(expression, |expr, _| expr.clone())
    }

    /// Evaluates a given expression string against a provided context.
    ///
    /// # Returns
    ///
    /// * `Ok(T)` if the evaluation succeeds.
    /// * `Err(Error)` if parsing or evaluation fails.
    pub fn evaluate_expression(
        &mut self,
        expression: &str,
        context: &HashMap<String, T>,
    ) -> Result<T, Error> {
        Ok(self.with_expression(expression, |expr, registry| {
            expr.evaluate(context, registry)
        })??)
    }

    /// Evaluates an already parsed expression.
    pub fn evaluate(&self, expr: &Expr<T>, context: &HashMap<String, T>) -> Result<T, EvalError> {
        expr.evaluate(context, &self.registry)
    }

    /// Parses `expression` once and evaluates it against every context in
    /// parallel. Results keep the order of `contexts`.
    pub fn evaluate_batch(
        &mut self,
        expression: &str,
        contexts: &[HashMap<String, T>],
    ) -> Result<Vec<Result<T, EvalError>>, SyntaxError> {
        self.with_expression(expression, |expr, registry| {
            contexts
                .par_iter()
                .map(|context| expr.evaluate(context, registry))
                .collect()
        })
    }

    fn with_expression<R>(
        &mut self,
        expression: &str,
        f: impl FnOnce(&Expr<T>, &Registry<T>) -> R,
    ) -> Result<R, SyntaxError> {
        if let Some(expr) = self.cache.get(expression) {
            trace!("Cache hit for '{}'", expression);
            return Ok(f(expr, &self.registry));
        }

        let expr = Expr::parse(expression, &self.registry)?;
        let result = f(&expr, &self.registry);
        self.cache.put(expression.to_string(), expr);
        Ok(result)
    }
}
