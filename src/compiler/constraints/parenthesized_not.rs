use super::{Constraint, ConstraintViolation};
use crate::structures::tree::TreeNode;

/// Rejects a negation applied directly to another negation.
///
/// `~~x` is rejected; `~(~x)` is allowed, as the inner negation is wrapped in
/// a parenthesis node.
/// The restriction is purely syntactic --- double negation remains a semantic
/// identity, and an expression built as `Not(Not(x))` evaluates as `x`.
pub struct ParenthesizedNot;

impl Constraint for ParenthesizedNot {
    fn visit_unary(&self, node: &TreeNode) -> Option<ConstraintViolation> {
        if let TreeNode::Unary { operand, .. } = node {
            if matches!(operand.as_ref(), TreeNode::Unary { .. }) {
                return Some(ConstraintViolation {
                    node: node.clone(),
                    message: "the 'not' operator may not be applied directly to the result of \
                              another 'not' operator"
                        .to_owned(),
                });
            }
        }

        None
    }
}
