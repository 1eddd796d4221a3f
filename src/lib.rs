//! Parsing and evaluation of arithmetic expressions such as
//! `2sqrt(max(0,1-x^2-y^2))` over a pluggable numeric type.
//!
//! ```
//! use plotexpr::{evaluate_expression, Complex64};
//! use std::collections::HashMap;
//!
//! let vars = HashMap::from([("x".to_string(), Complex64::new(-4.0, 0.0))]);
//! let value = evaluate_expression("sqrt(x)", &vars).unwrap();
//! assert_eq!(value, Complex64::new(0.0, 2.0));
//! ```

pub mod ast;
pub mod functions;
pub mod plot;
pub mod value;

pub use ast::{
    Error, EvalError, Evaluator, Expr, Node, Operator, Parser, Registry, SyntaxError, MAX_DEPTH,
};
pub use num_complex::Complex64;
pub use value::Value;

use std::collections::HashMap;

/// Parses and evaluates `expression` once with the standard complex functions.
pub fn evaluate_expression(
    expression: &str,
    context: &HashMap<String, Complex64>,
) -> Result<Complex64, Error> {
    let registry = Registry::<Complex64>::standard();
    let expr = Expr::parse(expression, &registry)?;
    Ok(expr.evaluate(context, &registry)?)
}
