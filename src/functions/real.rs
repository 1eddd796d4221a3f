use crate::ast::Registry;

/// Real-valued counterparts of the standard complex functions, for hosts
/// that evaluate over `f64`. Functions leave their domain as NaN.
pub fn register(registry: &mut Registry<f64>) {
    registry.register_unary("sin", f64::sin);
    registry.register_unary("cos", f64::cos);
    registry.register_unary("tan", f64::tan);
    registry.register_unary("asin", f64::asin);
    registry.register_unary("acos", f64::acos);
    registry.register_unary("atan", f64::atan);
    registry.register_unary("exp", f64::exp);
    registry.register_unary("log", f64::ln);
    registry.register_unary("ln", f64::ln);
    registry.register_unary("sqrt", f64::sqrt);
    registry.register_unary("abs", f64::abs);
    registry.register_unary("re", |x| x);
    registry.register_unary("im", |_| 0.0);
    registry.register_unary("conj", |x| x);
    registry.register_binary("max", f64::max);
    registry.register_binary("min", f64::min);
}

impl Registry<f64> {
    /// A registry holding the real-valued standard functions.
    pub fn standard_real() -> Self {
        let mut registry = Self::new();
        register(&mut registry);
        registry
    }
}
