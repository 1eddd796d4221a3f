use crate::ast::{Operator, Registry};
use crate::value::Value;

/// Cursor over whitespace-free source text.
///
/// Scanning only moves the cursor and hands out slices of the source.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'a> {
    source: &'a str,
    position: usize,
}

/// What the character under the cursor can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    Literal,
    Letter,
    /// One of `( ) , + - * / ^`.
    Structural(char),
    Other(char),
    End,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Consumes `expected` if it is the next character.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes the next character if it is the symbol of one of `operators`.
    pub(crate) fn eat_operator(&mut self, operators: &[Operator]) -> Option<Operator> {
        let operator = self
            .peek()
            .and_then(|c| Operator::try_from(c).ok())
            .filter(|operator| operators.contains(operator))?;
        self.position += operator.symbol().len_utf8();
        Some(operator)
    }

    pub(crate) fn classify<T: Value>(&self, registry: &Registry<T>) -> CharClass {
        match self.peek() {
            None => CharClass::End,
            Some(c) if registry.accepts_literal_char("", c) => CharClass::Literal,
            Some(c) if c.is_ascii_alphabetic() => CharClass::Letter,
            Some(c) if "(),+-*/^".contains(c) => CharClass::Structural(c),
            Some(c) => CharClass::Other(c),
        }
    }

    /// True when the next character can open an operand without an operator
    /// in front of it: a literal, an identifier or `(`.
    pub(crate) fn at_operand_start<T: Value>(&self, registry: &Registry<T>) -> bool {
        matches!(
            self.classify(registry),
            CharClass::Literal | CharClass::Letter | CharClass::Structural('(')
        )
    }

    /// Scans a literal greedily while the registry's predicate accepts the
    /// next character.
    pub(crate) fn scan_literal<T: Value>(&mut self, registry: &Registry<T>) -> &'a str {
        let start = self.position;
        while let Some(c) = self.peek() {
            if !registry.accepts_literal_char(&self.source[start..self.position], c) {
                break;
            }
            self.position += c.len_utf8();
        }
        &self.source[start..self.position]
    }

    /// Scans a maximal run of ASCII letters.
    pub(crate) fn scan_identifier(&mut self) -> &'a str {
        let start = self.position;
        let len = self.source[start..]
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(self.source.len() - start);
        self.position += len;
        &self.source[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_literal_stops_at_second_dot() {
        let registry = Registry::<f64>::new();
        let mut scanner = Scanner::new("3.14.15");
        assert_eq!(scanner.scan_literal(&registry), "3.14");
        assert_eq!(scanner.position(), 4);
        assert_eq!(scanner.peek(), Some('.'));
    }

    #[test]
    fn test_scan_literal_does_not_take_exponent() {
        let registry = Registry::<f64>::new();
        let mut scanner = Scanner::new("2e3");
        assert_eq!(scanner.scan_literal(&registry), "2");
        assert_eq!(scanner.scan_identifier(), "e");
        assert_eq!(scanner.scan_literal(&registry), "3");
        assert_eq!(scanner.classify(&registry), CharClass::End);
    }

    #[test]
    fn test_identifiers_are_letters_only() {
        let mut scanner = Scanner::new("xy2z");
        assert_eq!(scanner.scan_identifier(), "xy");
        assert_eq!(scanner.peek(), Some('2'));

        let mut scanner = Scanner::new("abc");
        assert_eq!(scanner.scan_identifier(), "abc");
        assert_eq!(scanner.peek(), None);
    }

    #[test]
    fn test_classify() {
        let registry = Registry::<f64>::new();
        let classes: Vec<_> = ["1", ".", "q", "(", "^", "#", ""]
            .iter()
            .map(|s| Scanner::new(s).classify(&registry))
            .collect();
        assert_eq!(
            classes,
            vec![
                CharClass::Literal,
                CharClass::Literal,
                CharClass::Letter,
                CharClass::Structural('('),
                CharClass::Structural('^'),
                CharClass::Other('#'),
                CharClass::End,
            ]
        );
    }

    #[test]
    fn test_eat() {
        let mut scanner = Scanner::new("*/x");
        assert_eq!(
            scanner.eat_operator(&[Operator::Add, Operator::Subtract]),
            None
        );
        assert_eq!(
            scanner.eat_operator(&[Operator::Multiply, Operator::Divide]),
            Some(Operator::Multiply)
        );
        assert!(!scanner.eat('*'));
        assert!(scanner.eat('/'));
        assert!(scanner.at_operand_start(&Registry::<f64>::new()));
    }
}
