//! Logical connectives and their spellings.
//!
//! Each connective has a precedence [rank](Operator::rank): the higher the
//! rank, the looser the operator binds, and the closer it ends up to the root
//! of the expression tree. Implication and equivalence share the loosest rank
//! and are never allowed to appear side by side without parentheses.

use std::fmt;

/// A logical connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    /// Identity, used for a statement that is a bare variable.
    None,
    Not,
    And,
    Or,
    Implies,
    Equivalent,
}

/// Textual macros accepted in expressions, in substitution order.
pub const OPERATOR_MACROS: [(&str, Operator); 7] = [
    ("not", Operator::Not),
    ("and", Operator::And),
    ("or", Operator::Or),
    ("eq", Operator::Equivalent),
    ("<=>", Operator::Equivalent),
    ("impl", Operator::Implies),
    ("=>", Operator::Implies),
];

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::None,
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Implies,
        Operator::Equivalent,
    ];

    /// Looks up the operator spelled by `token`.
    ///
    /// Matching is by exact string equality.
    pub fn from_macro(token: &str) -> Option<Self> {
        OPERATOR_MACROS
            .iter()
            .find(|(spelling, _)| *spelling == token)
            .map(|&(_, op)| op)
    }

    /// Precedence rank. Higher rank binds looser.
    pub const fn rank(self) -> u8 {
        match self {
            Operator::None => 0,
            Operator::Not => 1,
            Operator::And => 2,
            Operator::Or => 3,
            Operator::Implies | Operator::Equivalent => 4,
        }
    }

    /// Number of operands the operator takes.
    pub const fn arity(self) -> usize {
        match self {
            Operator::None | Operator::Not => 1,
            Operator::And | Operator::Or | Operator::Implies | Operator::Equivalent => 2,
        }
    }

    pub const fn is_binary(self) -> bool {
        self.arity() == 2
    }

    /// Returns true for the two operators with no relative precedence.
    pub const fn is_conditional(self) -> bool {
        matches!(self, Operator::Implies | Operator::Equivalent)
    }

    /// Mathematical glyph used in human-readable output.
    pub const fn glyph(self) -> &'static str {
        match self {
            Operator::None => "",
            Operator::Not => "¬",
            Operator::And => "∧",
            Operator::Or => "∨",
            Operator::Implies => "⇒",
            Operator::Equivalent => "⇔",
        }
    }

    /// LaTeX math-mode macro.
    pub const fn latex(self) -> &'static str {
        match self {
            Operator::None => "",
            Operator::Not => "\\lnot",
            Operator::And => "\\land",
            Operator::Or => "\\lor",
            Operator::Implies => "\\Rightarrow",
            Operator::Equivalent => "\\Leftrightarrow",
        }
    }

    /// Canonical macro spelling, as accepted by the parser.
    pub const fn name(self) -> &'static str {
        match self {
            Operator::None => "",
            Operator::Not => "not",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Implies => "=>",
            Operator::Equivalent => "<=>",
        }
    }

    /// Applies the operator to already evaluated operands.
    ///
    /// Unary operators ignore `lhs`.
    pub const fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Operator::None => rhs,
            Operator::Not => !rhs,
            Operator::And => lhs && rhs,
            Operator::Or => lhs || rhs,
            Operator::Implies => !lhs || rhs,
            Operator::Equivalent => lhs == rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
