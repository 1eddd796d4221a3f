use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt::{self, Debug};
use std::ops::{Add, Div, Mul, Sub};

/// Numeric type an expression can be evaluated over.
///
/// The parser and evaluator only need the four field operations, a power
/// operation and a way to read a scanned literal.
pub trait Value:
    Clone
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    fn zero() -> Self;

    /// Reads a literal accepted by the registry's literal predicate.
    /// Returns `None` when the text does not denote a value (e.g. a lone `.`).
    fn from_literal(literal: &str) -> Option<Self>;

    fn pow(self, exponent: Self) -> Self;

    /// Writes the value as expression text that parses back to it.
    fn write_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Value for f64 {
    fn zero() -> Self {
        0.0
    }

    fn from_literal(literal: &str) -> Option<Self> {
        literal.parse().ok()
    }

    fn pow(self, exponent: Self) -> Self {
        self.powf(exponent)
    }

    /// Negative values are parenthesised since a literal carries no sign.
    fn write_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sign_negative() {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl Value for Complex64 {
    fn zero() -> Self {
        <Complex64 as Zero>::zero()
    }

    fn from_literal(literal: &str) -> Option<Self> {
        literal.parse::<f64>().ok().map(|re| Complex64::new(re, 0.0))
    }

    /// `0^0` is one. Any other power of zero is zero when the exponent has a
    /// positive real part, infinite when it is negative and undefined (NaN)
    /// on the imaginary axis. Integer exponents use repeated multiplication,
    /// everything else the principal branch of `exp(exponent * ln(self))`.
    fn pow(self, exponent: Self) -> Self {
        if self.is_zero() {
            return if exponent.is_zero() {
                <Complex64 as One>::one()
            } else if exponent.re > 0.0 {
                self
            } else if exponent.re < 0.0 {
                Complex64::new(f64::INFINITY, 0.0)
            } else {
                Complex64::new(f64::NAN, f64::NAN)
            };
        }
        let integral = exponent.im == 0.0 && exponent.re.fract() == 0.0;
        if integral && exponent.re.abs() <= i32::MAX as f64 {
            return self.powi(exponent.re as i32);
        }
        self.powc(exponent)
    }

    /// Real values print as real literals. Anything else prints as
    /// `(re+im i)`, which reads back wherever `i` is bound to the imaginary
    /// unit.
    fn write_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im == 0.0 {
            return self.re.write_literal(f);
        }
        f.write_str("(")?;
        self.re.write_literal(f)?;
        f.write_str("+")?;
        self.im.write_literal(f)?;
        f.write_str("i)")
    }
}
