use crate::ast::MAX_DEPTH;
use thiserror::Error;

/// Grammar violation found while parsing. Positions are byte offsets
/// into the input with whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Function '{name}' expects '(' at position {position}")]
    ExpectedParen { name: String, position: usize },

    #[error("Missing closing ')' at position {position}")]
    MissingClosingParen { position: usize },

    #[error("Expected an operand at position {position}")]
    ExpectedOperand { position: usize },

    #[error("Invalid numeric literal '{literal}' at position {position}")]
    InvalidLiteral { literal: String, position: usize },

    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },

    #[error(
        "Expression nests deeper than {max} levels at position {position}",
        max = MAX_DEPTH
    )]
    TooDeep { position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Variable '{0}' is undefined")]
    UndefinedVariable(String),

    #[error("Function '{0}' is undefined")]
    UndefinedFunction(String),

    #[error("Function '{0}' expects two arguments")]
    ArityMismatch(String),
}

/// Either failure of a parse-then-evaluate round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}
