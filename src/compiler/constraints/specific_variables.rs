use super::{Constraint, ConstraintViolation};
use crate::db::names::NameComparison;
use crate::structures::tree::TreeNode;

/// Restricts variables to a fixed allow-list, compared under a configurable
/// policy.
///
/// Useful when a formula is written against a known universe --- a hand of
/// cards, say --- and a stray name is an input mistake rather than a fresh
/// variable.
pub struct SpecificVariables {
    allowed: Vec<String>,
    comparison: NameComparison,
}

impl SpecificVariables {
    /// A constraint admitting only the given names.
    pub fn new<S: Into<String>>(
        allowed: impl IntoIterator<Item = S>,
        comparison: NameComparison,
    ) -> Self {
        SpecificVariables {
            allowed: allowed.into_iter().map(Into::into).collect(),
            comparison,
        }
    }
}

impl Constraint for SpecificVariables {
    fn visit_variable(&self, node: &TreeNode) -> Option<ConstraintViolation> {
        if let TreeNode::Variable { token } = node {
            let permitted = self
                .allowed
                .iter()
                .any(|name| self.comparison.same(name, &token.text));

            if !permitted {
                return Some(ConstraintViolation {
                    node: node.clone(),
                    message: format!("the variable name '{}' is not allowed", token.text),
                });
            }
        }

        None
    }
}
