use crate::ast::Registry;
use num_complex::Complex64;

/// `max` and `min` compare real parts only and return the chosen argument
/// unchanged, imaginary part included. On a tie the second argument wins.
pub fn register(registry: &mut Registry<Complex64>) {
    registry.register_binary("max", |a, b| if a.re > b.re { a } else { b });
    registry.register_binary("min", |a, b| if a.re < b.re { a } else { b });
}
