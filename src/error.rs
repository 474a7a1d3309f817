//! Errors reported while parsing and evaluating statements.
//!
//! Every parse failure is a [`MalformedExpressionError`]: the input is pure
//! text supplied by the caller, so nothing here is transient or retryable.

use thiserror::Error;

use crate::operator::Operator;
use crate::types::Var;

/// A statement could not be parsed.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum MalformedExpressionError {
    /// Implication and equivalence appear unparenthesized in the same scope.
    #[error(
        "In expression '{expression}': Precedence is not defined between implication (=>) and \
         equivalence (<=>) operators. Please use parentheses to clarify your statement."
    )]
    AmbiguousPrecedence { expression: String },

    #[error("No variables and no operator in expression: \"{expression}\"")]
    NoVariables { expression: String },

    #[error("Multiple variables but no operator in expression: \"{expression}\"")]
    MultipleVariables { expression: String },

    #[error("In expression '{expression}': '{token}' is not a valid token")]
    InvalidToken { token: String, expression: String },

    #[error("Unbalanced parentheses in expression: \"{expression}\"")]
    UnbalancedParentheses { expression: String },

    #[error("Operator '{operator}' is missing an operand in expression: \"{expression}\"")]
    MissingOperand { operator: Operator, expression: String },

    #[error("Unary operator '{operator}' takes no left operand in expression: \"{expression}\"")]
    UnexpectedOperand { operator: Operator, expression: String },
}

impl MalformedExpressionError {
    /// The (sub-)expression the error was raised for.
    pub fn expression(&self) -> &str {
        match self {
            MalformedExpressionError::AmbiguousPrecedence { expression }
            | MalformedExpressionError::NoVariables { expression }
            | MalformedExpressionError::MultipleVariables { expression }
            | MalformedExpressionError::InvalidToken { expression, .. }
            | MalformedExpressionError::UnbalancedParentheses { expression }
            | MalformedExpressionError::MissingOperand { expression, .. }
            | MalformedExpressionError::UnexpectedOperand { expression, .. } => expression,
        }
    }

    pub fn is_ambiguous_precedence(&self) -> bool {
        matches!(self, MalformedExpressionError::AmbiguousPrecedence { .. })
    }
}

/// Evaluation hit a variable the assignment does not bind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("Variable '{0}' is not assigned a value")]
pub struct UnassignedVariable(pub Var);
