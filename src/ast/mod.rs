use crate::value::Value;
use std::collections::HashMap;
use std::fmt;

mod error;
mod evaluator;
mod parser;
mod registry;
mod scanner;

pub use error::*;
pub use evaluator::Evaluator;
pub use parser::{Parser, MAX_DEPTH};
pub use registry::*;

/// A node of an expression tree. Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    Literal(T),
    /// Resolved against the caller's bindings at evaluation time.
    Variable(String),
    /// Parenthesised sub-expression.
    Group(Box<Node<T>>),
    BinaryOperation {
        left: Box<Node<T>>,
        operator: Operator,
        right: Box<Node<T>>,
    },
    /// Resolved against the registry at evaluation time.
    FunctionCall {
        name: String,
        arg1: Box<Node<T>>,
        arg2: Option<Box<Node<T>>>,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn apply<T: Value>(&self, left: T, right: T) -> T {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Power => left.pow(right),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    /// Binding strength, tighter is higher.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Power => 3,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        matches!(self, Operator::Power)
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '^' => Ok(Operator::Power),
            _ => Err(value),
        }
    }
}

/// A parsed expression, ready to be evaluated any number of times.
///
/// Cloning performs a deep copy: two `Expr` values never share nodes.
///
/// ```
/// use plotexpr::ast::{Expr, Registry};
/// use std::collections::HashMap;
///
/// let mut registry = Registry::<f64>::new();
/// registry.register_unary("sqrt", f64::sqrt);
///
/// let expr = Expr::parse("2sqrt(x)", &registry).unwrap();
/// let vars = HashMap::from([("x".to_string(), 16.0)]);
/// assert_eq!(expr.evaluate(&vars, &registry), Ok(8.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr<T> {
    root: Node<T>,
}

impl<T: Value> Expr<T> {
    /// Parses `text` using the functions and literal policy of `registry`.
    /// Whitespace is ignored.
    pub fn parse(text: &str, registry: &Registry<T>) -> Result<Self, SyntaxError> {
        Parser::new(registry).parse_expression(text)
    }

    pub fn evaluate(
        &self,
        vars: &HashMap<String, T>,
        registry: &Registry<T>,
    ) -> Result<T, EvalError> {
        self.root.evaluate(vars, registry)
    }
}

impl<T> Expr<T> {
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    pub fn into_root(self) -> Node<T> {
        self.root
    }
}

impl<T> From<Node<T>> for Expr<T> {
    fn from(root: Node<T>) -> Self {
        Self { root }
    }
}

impl<T: Value> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

impl<T: Value> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => value.write_literal(f),
            Node::Variable(name) => f.write_str(name),
            Node::Group(inner) => write!(f, "({})", inner),
            Node::BinaryOperation {
                left,
                operator,
                right,
            } => {
                write_operand(f, left, *operator, false)?;
                write!(f, "{}", operator.symbol())?;
                write_operand(f, right, *operator, true)
            }
            Node::FunctionCall { name, arg1, arg2 } => match arg2 {
                Some(arg2) => write!(f, "{}({},{})", name, arg1, arg2),
                None => write!(f, "{}({})", name, arg1),
            },
        }
    }
}

/// Writes a binary operand, adding parentheses where the tree shape would
/// otherwise be lost.
fn write_operand<T: Value>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    parent: Operator,
    is_right: bool,
) -> fmt::Result {
    let needs_parens = match node {
        Node::BinaryOperation { operator, .. } => {
            operator.precedence() < parent.precedence()
                || (operator.precedence() == parent.precedence()
                    && is_right != parent.is_right_associative())
        }
        _ => false,
    };
    if needs_parens {
        write!(f, "({})", node)
    } else {
        write!(f, "{}", node)
    }
}
