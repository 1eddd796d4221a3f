use crate::ast::Registry;
use num_complex::Complex64;

pub fn register(registry: &mut Registry<Complex64>) {
    registry.register_unary("sin", Complex64::sin);
    registry.register_unary("cos", Complex64::cos);
    registry.register_unary("tan", Complex64::tan);
    registry.register_unary("asin", Complex64::asin);
    registry.register_unary("acos", Complex64::acos);
    registry.register_unary("atan", Complex64::atan);
    registry.register_unary("exp", Complex64::exp);
    // principal branch
    registry.register_unary("log", Complex64::ln);
    registry.register_unary("ln", Complex64::ln);
    registry.register_unary("sqrt", Complex64::sqrt);
}
