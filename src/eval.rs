use crate::error::UnassignedVariable;
use crate::statement::{Node, Statement};
use crate::types::{Assignment, Var};

/// Something whose truth value can be computed under an [`Assignment`].
pub trait Eval {
    fn eval(&self, assignment: &Assignment) -> Result<bool, UnassignedVariable>;
}

impl Assignment {
    pub fn eval(&self, value: &impl Eval) -> Result<bool, UnassignedVariable> {
        value.eval(self)
    }
}

impl Eval for Var {
    fn eval(&self, assignment: &Assignment) -> Result<bool, UnassignedVariable> {
        assignment.get(*self).ok_or(UnassignedVariable(*self))
    }
}

impl Eval for Statement {
    fn eval(&self, assignment: &Assignment) -> Result<bool, UnassignedVariable> {
        match self.node() {
            Node::Variable(var) => var.eval(assignment),
            Node::Not(inner) => Ok(!inner.eval(assignment)?),
            Node::Binary { op, left, right } => {
                let lhs = left.eval(assignment)?;
                let rhs = right.eval(assignment)?;
                Ok(op.apply(lhs, rhs))
            }
        }
    }
}
