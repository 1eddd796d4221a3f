//! Function sets the plotting host registers before parsing anything.

pub mod elementary;
pub mod ordering;
pub mod parts;
pub mod real;

use crate::ast::Registry;
use num_complex::Complex64;

/// Registers every standard complex function.
pub fn register_functions(registry: &mut Registry<Complex64>) {
    elementary::register(registry);
    parts::register(registry);
    ordering::register(registry);
}

impl Registry<Complex64> {
    /// A registry holding the standard complex functions.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        register_functions(&mut registry);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_names() {
        let registry = Registry::<Complex64>::standard();
        for name in [
            "sin", "cos", "tan", "asin", "acos", "atan", "exp", "log", "ln", "sqrt", "abs", "re",
            "im", "conj",
        ] {
            assert!(registry.unary(name).is_some(), "missing 1-arg '{}'", name);
        }
        for name in ["max", "min"] {
            assert!(registry.binary(name).is_some(), "missing 2-arg '{}'", name);
        }
    }
}
