use crate::ast::scanner::{CharClass, Scanner};
use crate::ast::{Expr, Node, Operator, Registry, SyntaxError};
use crate::value::Value;
use log::{debug, trace};

/// Tallest tree the parser builds, counted in nodes from root to leaf.
/// Parsing, evaluating and dropping a tree each recurse once per level.
pub const MAX_DEPTH: usize = 256;

const ADDITIVE: [Operator; 2] = [Operator::Add, Operator::Subtract];
const MULTIPLICATIVE: [Operator; 2] = [Operator::Multiply, Operator::Divide];

/// A node under construction together with its height.
struct Subtree<T> {
    node: Node<T>,
    height: usize,
}

impl<T> Subtree<T> {
    fn leaf(node: Node<T>) -> Self {
        Self { node, height: 1 }
    }
}

/// Recursive-descent parser over five precedence levels: sums, factors
/// (with implicit multiplication), powers (right-associative), operands and
/// function calls.
///
/// Whether an identifier is a function call or a variable depends on the
/// registry, so a parser is tied to one.
///
/// `depth` in the methods below counts the nodes that will sit above the
/// subtree being parsed; it bounds the recursion.
pub struct Parser<'r, T> {
    registry: &'r Registry<T>,
}

impl<'r, T: Value> Parser<'r, T> {
    pub fn new(registry: &'r Registry<T>) -> Self {
        Self { registry }
    }

    pub fn parse_expression(&self, input: &str) -> Result<Expr<T>, SyntaxError> {
        debug!("Parsing expression: {}", input);
        let source: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let mut scanner = Scanner::new(&source);

        let root = self.parse_sum(&mut scanner, 0)?;
        if let Some(found) = scanner.peek() {
            return Err(SyntaxError::UnexpectedCharacter {
                found,
                position: scanner.position(),
            });
        }

        debug!("Parse result: {:?}", root.node);
        Ok(Expr::from(root.node))
    }

    /// `[+|-] factor { (+|-) factor }`
    ///
    /// A leading sign reads as `0 + factor` or `0 - factor`.
    fn parse_sum(&self, scanner: &mut Scanner, depth: usize) -> Result<Subtree<T>, SyntaxError> {
        let position = scanner.position();
        let mut tree = match scanner.eat_operator(&ADDITIVE) {
            Some(sign) => {
                let right = self.parse_factor(scanner, depth)?;
                fold(Subtree::leaf(Node::Literal(T::zero())), sign, right, position)?
            }
            None => self.parse_factor(scanner, depth)?,
        };

        loop {
            let position = scanner.position();
            let Some(operator) = scanner.eat_operator(&ADDITIVE) else {
                break;
            };
            let right = self.parse_factor(scanner, depth)?;
            trace!("Folding '{}' at sum level", operator.symbol());
            tree = fold(tree, operator, right, position)?;
        }

        Ok(tree)
    }

    /// `power { [*|/] power }`; a missing operator in front of a literal,
    /// identifier or `(` is an implicit `*`.
    fn parse_factor(&self, scanner: &mut Scanner, depth: usize) -> Result<Subtree<T>, SyntaxError> {
        let mut tree = self.parse_power(scanner, depth)?;

        loop {
            let position = scanner.position();
            let operator = match scanner.eat_operator(&MULTIPLICATIVE) {
                Some(operator) => operator,
                None if scanner.at_operand_start(self.registry) => {
                    trace!("Implicit '*' at position {}", position);
                    Operator::Multiply
                }
                None => break,
            };
            let right = self.parse_power(scanner, depth)?;
            tree = fold(tree, operator, right, position)?;
        }

        Ok(tree)
    }

    /// `operand [^ power]`, so `a^b^c` is `a^(b^c)`.
    fn parse_power(&self, scanner: &mut Scanner, depth: usize) -> Result<Subtree<T>, SyntaxError> {
        let base = self.parse_operand(scanner, depth)?;
        let position = scanner.position();
        if scanner.eat_operator(&[Operator::Power]).is_some() {
            let exponent = self.parse_power(scanner, depth + 1)?;
            return fold(base, Operator::Power, exponent, position);
        }
        Ok(base)
    }

    fn parse_operand(&self, scanner: &mut Scanner, depth: usize) -> Result<Subtree<T>, SyntaxError> {
        let position = scanner.position();
        if depth >= MAX_DEPTH {
            return Err(SyntaxError::TooDeep { position });
        }

        match scanner.classify(self.registry) {
            CharClass::Structural('(') => {
                // A second argument only means something to a function call.
                let (inner, _) = self.parse_arguments(scanner, depth + 1)?;
                let height = inner.height;
                build(Node::Group(Box::new(inner.node)), height, position)
            }
            CharClass::Literal => {
                let literal = scanner.scan_literal(self.registry);
                T::from_literal(literal)
                    .map(|value| Subtree::leaf(Node::Literal(value)))
                    .ok_or_else(|| SyntaxError::InvalidLiteral {
                        literal: literal.to_string(),
                        position,
                    })
            }
            CharClass::Letter => self.parse_identifier(scanner, depth),
            CharClass::Other(found) => Err(SyntaxError::UnexpectedCharacter { found, position }),
            CharClass::Structural(_) | CharClass::End => {
                Err(SyntaxError::ExpectedOperand { position })
            }
        }
    }

    /// A registered function name must be followed by its argument list;
    /// any other name is a variable.
    fn parse_identifier(&self, scanner: &mut Scanner, depth: usize) -> Result<Subtree<T>, SyntaxError> {
        let position = scanner.position();
        let name = scanner.scan_identifier();

        if !self.registry.is_function(name) {
            return Ok(Subtree::leaf(Node::Variable(name.to_string())));
        }

        if scanner.peek() != Some('(') {
            return Err(SyntaxError::ExpectedParen {
                name: name.to_string(),
                position: scanner.position(),
            });
        }

        let (arg1, arg2) = self.parse_arguments(scanner, depth + 1)?;
        let height = arg2
            .as_ref()
            .map_or(arg1.height, |arg2| arg1.height.max(arg2.height));
        let call = Node::FunctionCall {
            name: name.to_string(),
            arg1: Box::new(arg1.node),
            arg2: arg2.map(|arg2| Box::new(arg2.node)),
        };
        build(call, height, position)
    }

    /// `( sum [, sum] )`, with the cursor on the `(`.
    fn parse_arguments(
        &self,
        scanner: &mut Scanner,
        depth: usize,
    ) -> Result<(Subtree<T>, Option<Subtree<T>>), SyntaxError> {
        scanner.eat('(');
        let first = self.parse_sum(scanner, depth)?;
        let second = if scanner.eat(',') {
            Some(self.parse_sum(scanner, depth)?)
        } else {
            None
        };

        if !scanner.eat(')') {
            return Err(SyntaxError::MissingClosingParen {
                position: scanner.position(),
            });
        }

        Ok((first, second))
    }
}

/// Puts `node` over children at most `child_height` tall, or fails when the
/// result would be taller than `MAX_DEPTH`.
fn build<T>(node: Node<T>, child_height: usize, position: usize) -> Result<Subtree<T>, SyntaxError> {
    let height = child_height + 1;
    if height > MAX_DEPTH {
        return Err(SyntaxError::TooDeep { position });
    }
    Ok(Subtree { node, height })
}

/// Moves `left` and `right` under a new operator node.
fn fold<T>(
    left: Subtree<T>,
    operator: Operator,
    right: Subtree<T>,
    position: usize,
) -> Result<Subtree<T>, SyntaxError> {
    let height = left.height.max(right.height);
    let node = Node::BinaryOperation {
        left: Box::new(left.node),
        operator,
        right: Box::new(right.node),
    };
    build(node, height, position)
}
