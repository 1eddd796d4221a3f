use crate::ast::Registry;
use num_complex::Complex64;

/// Functions that split a complex number into real quantities. Results are
/// returned as complex numbers with a zero imaginary part.
pub fn register(registry: &mut Registry<Complex64>) {
    registry.register_unary("abs", |z| Complex64::from(z.norm()));
    registry.register_unary("re", |z| Complex64::from(z.re));
    registry.register_unary("im", |z| Complex64::from(z.im));
    registry.register_unary("conj", |z| z.conj());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let mut registry = Registry::new();
        register(&mut registry);
        let z = Complex64::new(3.0, -4.0);
        let call = |name: &str| (registry.unary(name).unwrap())(z);

        assert_eq!(call("abs"), Complex64::new(5.0, 0.0));
        assert_eq!(call("re"), Complex64::new(3.0, 0.0));
        assert_eq!(call("im"), Complex64::new(-4.0, 0.0));
        assert_eq!(call("conj"), Complex64::new(3.0, 4.0));
    }
}
