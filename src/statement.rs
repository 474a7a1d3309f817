//! Logical statements and the expression parser.
//!
//! A [`Statement`] is a node of a strictly binary expression tree. For
//! example, `not A or B` is represented as:
//!
//! ```text
//!        or
//!      /    \
//!   not      B
//!     \
//!      A
//! ```
//!
//! # Parsing
//!
//! The parser works on token spans. For every span it:
//!
//! 1. strips redundant outer parentheses ([`unwrap_parentheses`]),
//! 2. scans the tokens at nesting depth 0 for the loosest-binding operator
//!    (the first one wins among equals, so chains nest to the right),
//! 3. splits the span at that operator and recurses into both sides.
//!
//! Implication and equivalence have no relative precedence: two of them in
//! the same scope are rejected with
//! [`MalformedExpressionError::AmbiguousPrecedence`].

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::MalformedExpressionError;
use crate::format::Formatting;
use crate::operator::Operator;
use crate::token::{is_balanced, tokenize, unwrap_parentheses, CLOSE, OPEN};
use crate::types::{Var, VarSet};

/// A parsed logical statement.
///
/// Every node keeps the literal text it was parsed from (used to render
/// table headers) and the set of free variables beneath it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Statement {
    literal: String,
    variables: VarSet,
    node: Node,
}

/// Shape of a [`Statement`] node.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Variable(Var),
    Not(Box<Statement>),
    Binary {
        op: Operator,
        left: Box<Statement>,
        right: Box<Statement>,
    },
}

fn join_tokens<T: AsRef<str>>(tokens: &[T]) -> String {
    tokens.iter().map(|t| t.as_ref()).collect::<Vec<&str>>().join(" ")
}

impl Statement {
    /// Creates a statement consisting of the single variable `var`.
    pub fn variable(var: Var) -> Self {
        Statement {
            literal: var.to_string(),
            variables: VarSet::singleton(var),
            node: Node::Variable(var),
        }
    }

    /// Parses a statement from text.
    ///
    /// All tokens except parentheses must be separated by spaces.
    ///
    /// ```
    /// use truth_tables::operator::Operator;
    /// use truth_tables::statement::Statement;
    ///
    /// let s = Statement::parse("not A or B").unwrap();
    /// assert_eq!(s.operator(), Operator::Or);
    /// assert_eq!(s.variables().len(), 2);
    /// ```
    pub fn parse(expression: &str) -> Result<Self, MalformedExpressionError> {
        let literal = expression.trim();
        if let Some(var) = Var::parse(literal) {
            return Ok(Statement::variable(var));
        }

        let tokens = tokenize(literal);
        Self::parse_checked(literal.to_string(), &tokens).map_err(|e| match e {
            MalformedExpressionError::AmbiguousPrecedence { .. } => MalformedExpressionError::AmbiguousPrecedence {
                expression: literal.to_string(),
            },
            e => e,
        })
    }

    /// Parses a statement from an already split token list.
    ///
    /// The literal of the resulting statement is the tokens joined by spaces.
    pub fn from_tokens<T: AsRef<str>>(tokens: &[T]) -> Result<Self, MalformedExpressionError> {
        Self::parse_checked(join_tokens(tokens), tokens)
    }

    fn parse_checked<T: AsRef<str>>(literal: String, tokens: &[T]) -> Result<Self, MalformedExpressionError> {
        if !is_balanced(tokens) {
            return Err(MalformedExpressionError::UnbalancedParentheses { expression: literal });
        }
        Self::parse_span(literal, tokens)
    }

    /// Parses a span whose parentheses are known to be balanced.
    fn parse_span<T: AsRef<str>>(literal: String, tokens: &[T]) -> Result<Self, MalformedExpressionError> {
        let tokens = unwrap_parentheses(tokens);

        let mut split: Option<(usize, Operator)> = None;
        let mut depth = 0;
        let mut n_vars = 0;

        for (i, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            match token {
                OPEN => {
                    depth += 1;
                    continue;
                }
                CLOSE => {
                    depth -= 1;
                    continue;
                }
                _ => {}
            }
            if depth == 0 {
                if let Some(op) = Operator::from_macro(token) {
                    if let Some((_, loosest)) = split {
                        if loosest.is_conditional() && op.is_conditional() {
                            return Err(MalformedExpressionError::AmbiguousPrecedence {
                                expression: join_tokens(tokens),
                            });
                        }
                    }
                    if split.map_or(true, |(_, loosest)| op.rank() > loosest.rank()) {
                        split = Some((i, op));
                    }
                }
            }
            if Var::parse(token).is_some() {
                n_vars += 1;
            }
        }

        let Some((k, op)) = split else {
            return Self::parse_leaf(literal, tokens, n_vars);
        };
        debug!("parse: split '{}' at '{}' (token {})", literal, op, k);

        let left = unwrap_parentheses(&tokens[..k]);
        let right = unwrap_parentheses(&tokens[k + 1..]);
        if right.is_empty() {
            return Err(MalformedExpressionError::MissingOperand {
                operator: op,
                expression: join_tokens(tokens),
            });
        }

        if op == Operator::Not {
            if !left.is_empty() {
                return Err(MalformedExpressionError::UnexpectedOperand {
                    operator: op,
                    expression: join_tokens(tokens),
                });
            }
            let right = Self::parse_span(join_tokens(right), right)?;
            return Ok(Statement {
                literal,
                variables: right.variables,
                node: Node::Not(Box::new(right)),
            });
        }

        if left.is_empty() {
            return Err(MalformedExpressionError::MissingOperand {
                operator: op,
                expression: join_tokens(tokens),
            });
        }
        let left = Self::parse_span(join_tokens(left), left)?;
        let right = Self::parse_span(join_tokens(right), right)?;
        Ok(Statement {
            literal,
            variables: left.variables.union(right.variables),
            node: Node::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        })
    }

    /// Handles a span without any operator at depth 0.
    fn parse_leaf<T: AsRef<str>>(
        literal: String,
        tokens: &[T],
        n_vars: usize,
    ) -> Result<Self, MalformedExpressionError> {
        match n_vars {
            0 => Err(MalformedExpressionError::NoVariables {
                expression: join_tokens(tokens),
            }),
            1 => {
                if let [token] = tokens {
                    if let Some(var) = Var::parse(token.as_ref()) {
                        return Ok(Statement {
                            literal,
                            variables: VarSet::singleton(var),
                            node: Node::Variable(var),
                        });
                    }
                }
                let words: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
                let is_var = |t: &&str| Var::parse(t).is_some();
                let offending = words
                    .iter()
                    .find(|t| !is_var(t) && **t != OPEN && **t != CLOSE)
                    .or_else(|| words.iter().find(|t| !is_var(t)))
                    .map_or_else(String::new, |t| t.to_string());
                Err(MalformedExpressionError::InvalidToken {
                    token: offending,
                    expression: words.join(" "),
                })
            }
            _ => Err(MalformedExpressionError::MultipleVariables {
                expression: join_tokens(tokens),
            }),
        }
    }

    /// The literal text this statement was parsed from.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Free variables of the statement.
    pub fn variables(&self) -> VarSet {
        self.variables
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Root operator; [`Operator::None`] for a bare variable.
    pub fn operator(&self) -> Operator {
        match &self.node {
            Node::Variable(_) => Operator::None,
            Node::Not(_) => Operator::Not,
            Node::Binary { op, .. } => *op,
        }
    }

    /// Left operand, present only for binary operators.
    pub fn left(&self) -> Option<&Statement> {
        match &self.node {
            Node::Binary { left, .. } => Some(left),
            _ => None,
        }
    }

    /// Right operand; absent only for a bare variable.
    pub fn right(&self) -> Option<&Statement> {
        match &self.node {
            Node::Variable(_) => None,
            Node::Not(right) | Node::Binary { right, .. } => Some(right),
        }
    }

    /// Height of the tree (0 for a variable).
    pub fn depth(&self) -> usize {
        match &self.node {
            Node::Variable(_) => 0,
            Node::Not(e) => 1 + e.depth(),
            Node::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Renders the literal with operator macros replaced by the symbols of `mode`.
    ///
    /// Tokens are separated by single spaces, except inside parentheses and
    /// after a symbolic negation: `not ( A or B )` renders as `¬(A ∨ B)`.
    pub fn format(&self, mode: Formatting) -> String {
        let mut out = String::with_capacity(self.literal.len());
        let mut glue = true;
        for token in tokenize(&self.literal) {
            let op = Operator::from_macro(token);
            let rendered = op.map_or(token, |op| mode.symbol(op));
            if !glue && token != CLOSE {
                out.push(' ');
            }
            out.push_str(rendered);
            glue = token == OPEN
                || (op == Some(Operator::Not) && !rendered.ends_with(|c: char| c.is_ascii_alphabetic()));
        }
        out
    }
}

impl FromStr for Statement {
    type Err = MalformedExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Statement::parse(s)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn var(name: char) -> Var {
        Var::new(name)
    }

    #[test]
    fn test_parse_single_variable() {
        let s = Statement::parse("  A ").unwrap();
        assert_eq!(s.node(), &Node::Variable(var('A')));
        assert_eq!(s.operator(), Operator::None);
        assert_eq!(s.literal(), "A");
        assert_eq!(s.variables().to_vec(), vec![var('A')]);
        assert!(s.left().is_none());
        assert!(s.right().is_none());
    }

    #[test]
    fn test_parse_parenthesized_variable() {
        let s = Statement::parse("( ( B ) )").unwrap();
        assert_eq!(s.node(), &Node::Variable(var('B')));
        assert_eq!(s.literal(), "( ( B ) )");
    }

    #[test]
    fn test_parse_precedence() {
        // `or` binds looser than `and`, `and` looser than `not`.
        let s = Statement::parse("not A and B or C").unwrap();
        assert_eq!(s.operator(), Operator::Or);
        let left = s.left().unwrap();
        assert_eq!(left.operator(), Operator::And);
        assert_eq!(left.literal(), "not A and B");
        assert_eq!(left.left().unwrap().operator(), Operator::Not);
        assert_eq!(s.right().unwrap().literal(), "C");

        let s = Statement::parse("A or B and C").unwrap();
        assert_eq!(s.operator(), Operator::Or);
        assert_eq!(s.right().unwrap().operator(), Operator::And);
    }

    #[test]
    fn test_parse_implication_is_loosest() {
        let s = Statement::parse("A and B => C or D").unwrap();
        assert_eq!(s.operator(), Operator::Implies);
        assert_eq!(s.left().unwrap().literal(), "A and B");
        assert_eq!(s.right().unwrap().literal(), "C or D");

        let s = Statement::parse("A eq not B").unwrap();
        assert_eq!(s.operator(), Operator::Equivalent);
        assert_eq!(s.right().unwrap().operator(), Operator::Not);
    }

    #[test]
    fn test_parse_chain_nests_right() {
        let s = Statement::parse("A and B and C").unwrap();
        assert_eq!(s.left().unwrap().literal(), "A");
        assert_eq!(s.right().unwrap().literal(), "B and C");
        assert_eq!(s.depth(), 2);
    }

    #[test]
    fn test_parse_double_negation() {
        let s = Statement::parse("not not A").unwrap();
        assert_eq!(s.operator(), Operator::Not);
        assert!(s.left().is_none());
        let inner = s.right().unwrap();
        assert_eq!(inner.operator(), Operator::Not);
        assert_eq!(inner.right().unwrap().node(), &Node::Variable(var('A')));
    }

    #[test]
    fn test_parse_separate_groups_are_not_unwrapped() {
        let s = Statement::parse("( A ) and ( B )").unwrap();
        assert_eq!(s.operator(), Operator::And);
        assert_eq!(s.left().unwrap().node(), &Node::Variable(var('A')));
        assert_eq!(s.right().unwrap().node(), &Node::Variable(var('B')));
    }

    #[test]
    fn test_parse_parentheses_override_precedence() {
        let s = Statement::parse("A and (B or C)").unwrap();
        assert_eq!(s.operator(), Operator::And);
        let right = s.right().unwrap();
        assert_eq!(right.operator(), Operator::Or);
        assert_eq!(right.literal(), "B or C");
        assert_eq!(s.variables().to_vec(), vec![var('A'), var('B'), var('C')]);
    }

    #[test]
    fn test_parse_both_conditionals_in_parentheses() {
        let s = Statement::parse("(A <=> B) and (B => C)").unwrap();
        assert_eq!(s.operator(), Operator::And);
        assert_eq!(s.left().unwrap().operator(), Operator::Equivalent);
        assert_eq!(s.right().unwrap().operator(), Operator::Implies);
    }

    #[test]
    fn test_parse_from_tokens() {
        let s = Statement::from_tokens(&["(", "A", "impl", "B", ")"]).unwrap();
        assert_eq!(s.literal(), "( A impl B )");
        assert_eq!(s.operator(), Operator::Implies);
    }

    #[test]
    fn test_parse_from_str() {
        let s: Statement = "A or B".parse().unwrap();
        assert_eq!(s.to_string(), "A or B");
    }

    #[test]
    fn test_ambiguous_precedence() {
        for input in ["A => B <=> C", "A impl B eq C", "A <=> B => C", "A => B => C", "A eq B and C impl D"] {
            let err = Statement::parse(input).unwrap_err();
            assert!(err.is_ambiguous_precedence(), "{:?} gave {:?}", input, err);
            assert_eq!(err.expression(), input);
        }
    }

    #[test]
    fn test_ambiguous_precedence_reports_full_literal() {
        let err = Statement::parse("C and (A => B <=> C)").unwrap_err();
        assert_eq!(
            err,
            MalformedExpressionError::AmbiguousPrecedence {
                expression: "C and (A => B <=> C)".to_string()
            }
        );
    }

    #[test]
    fn test_ambiguous_precedence_from_tokens_keeps_subspan() {
        let err = Statement::from_tokens(&["C", "and", "(", "A", "=>", "B", "<=>", "C", ")"]).unwrap_err();
        assert_eq!(err.expression(), "A => B <=> C");
    }

    #[test]
    fn test_no_variables() {
        let err = Statement::parse("").unwrap_err();
        assert!(matches!(err, MalformedExpressionError::NoVariables { .. }));
        let err = Statement::parse("( )").unwrap_err();
        assert!(matches!(err, MalformedExpressionError::NoVariables { .. }));
        let err = Statement::parse("A and foo").unwrap_err();
        assert_eq!(
            err,
            MalformedExpressionError::NoVariables {
                expression: "foo".to_string()
            }
        );
    }

    #[test]
    fn test_multiple_variables() {
        let err = Statement::parse("A B").unwrap_err();
        assert_eq!(
            err,
            MalformedExpressionError::MultipleVariables {
                expression: "A B".to_string()
            }
        );
        let err = Statement::parse("( A ) ( B )").unwrap_err();
        assert!(matches!(err, MalformedExpressionError::MultipleVariables { .. }));
    }

    #[test]
    fn test_invalid_token() {
        let err = Statement::parse("A xor").unwrap_err();
        assert_eq!(
            err,
            MalformedExpressionError::InvalidToken {
                token: "xor".to_string(),
                expression: "A xor".to_string()
            }
        );
        let err = Statement::parse("a and B").unwrap_err();
        assert!(matches!(err, MalformedExpressionError::NoVariables { .. }));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        for input in ["( A and B", "A and B )", ") A (", "( ( A )"] {
            let err = Statement::parse(input).unwrap_err();
            assert!(
                matches!(err, MalformedExpressionError::UnbalancedParentheses { .. }),
                "{:?} gave {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_missing_operand() {
        let err = Statement::parse("A and").unwrap_err();
        assert!(matches!(err, MalformedExpressionError::MissingOperand { operator: Operator::And, .. }));
        let err = Statement::parse("or B").unwrap_err();
        assert!(matches!(err, MalformedExpressionError::MissingOperand { operator: Operator::Or, .. }));
        let err = Statement::parse("not").unwrap_err();
        assert!(matches!(err, MalformedExpressionError::MissingOperand { operator: Operator::Not, .. }));
        let err = Statement::parse("A => ( )").unwrap_err();
        assert!(matches!(err, MalformedExpressionError::MissingOperand { .. }));
    }

    #[test]
    fn test_unexpected_operand_before_not() {
        let err = Statement::parse("A not B").unwrap_err();
        assert!(matches!(err, MalformedExpressionError::UnexpectedOperand { operator: Operator::Not, .. }));
    }

    #[test]
    fn test_format_human() {
        let s = Statement::parse("not A or B").unwrap();
        assert_eq!(s.format(Formatting::Human), "¬A ∨ B");
        let s = Statement::parse("(A <=> B) and (B <=> C)").unwrap();
        assert_eq!(s.format(Formatting::Human), "(A ⇔ B) ∧ (B ⇔ C)");
        let s = Statement::parse("not ( A impl B )").unwrap();
        assert_eq!(s.format(Formatting::Human), "¬(A ⇒ B)");
        let s = Statement::parse("A eq B").unwrap();
        assert_eq!(s.format(Formatting::Human), "A ⇔ B");
    }

    #[test]
    fn test_format_latex() {
        let s = Statement::parse("not A or B").unwrap();
        assert_eq!(s.format(Formatting::Latex), "\\lnot A \\lor B");
        let s = Statement::parse("A => (B and C)").unwrap();
        assert_eq!(s.format(Formatting::Latex), "A \\Rightarrow (B \\land C)");
    }

    #[test]
    fn test_format_variable() {
        let s = Statement::variable(var('K'));
        assert_eq!(s.format(Formatting::Human), "K");
        assert_eq!(s.format(Formatting::Latex), "K");
    }
}
