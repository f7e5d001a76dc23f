/*!
Constraints --- pluggable checks over parse-tree nodes.

A [Constraint] is consulted once per node, through the method matching the
node's variant, and either accepts (`None`) or reports a
[ConstraintViolation] naming the node and a user-facing message.

Two traversals exist, selected by the caller's use case:

- The [compiler](crate::compiler::Compiler) checks every configured
  constraint at each node *before* descending into the node's children, and
  aborts on the first violation anywhere in the tree.
- [collect_violations] runs one constraint over the whole tree and
  accumulates every violation without stopping --- suited to diagnostics,
  where a consumer wants all of a formula's problems at once.

```rust
# use trivalent::compiler::constraints::{self, SpecificVariables};
# use trivalent::db::names::NameComparison;
# use trivalent::parser::Parser;
let tree = Parser::default().parse("A & B & Q").unwrap();
let allowed = SpecificVariables::new(["A", "B", "C", "D"], NameComparison::Exact);

let violations = constraints::collect_violations(&tree, &allowed);
assert_eq!(violations.len(), 1);
assert!(violations[0].message.contains("'Q'"));
```
*/

mod parenthesized_not;
pub use parenthesized_not::ParenthesizedNot;

mod specific_variables;
pub use specific_variables::SpecificVariables;

use crate::structures::tree::{ParseTree, TreeNode};

/// A violation of a constraint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstraintViolation {
    /// The offending node.
    pub node: TreeNode,

    /// A user-facing description of the violation.
    pub message: String,
}

/// A check over parse-tree nodes.
///
/// One method per node variant, each handed the whole node so spans and
/// children are in reach; the default for every method accepts.
pub trait Constraint {
    /// Consulted for each binary operator node.
    fn visit_binary(&self, _node: &TreeNode) -> Option<ConstraintViolation> {
        None
    }

    /// Consulted for each unary operator node.
    fn visit_unary(&self, _node: &TreeNode) -> Option<ConstraintViolation> {
        None
    }

    /// Consulted for each parenthesis node.
    fn visit_parenthesis(&self, _node: &TreeNode) -> Option<ConstraintViolation> {
        None
    }

    /// Consulted for each variable node.
    fn visit_variable(&self, _node: &TreeNode) -> Option<ConstraintViolation> {
        None
    }
}

/// Consults the constraint on the given node, dispatching to the method of
/// the node's variant.
pub fn check_node(constraint: &dyn Constraint, node: &TreeNode) -> Option<ConstraintViolation> {
    match node {
        TreeNode::Binary { .. } => constraint.visit_binary(node),
        TreeNode::Unary { .. } => constraint.visit_unary(node),
        TreeNode::Parenthesis { .. } => constraint.visit_parenthesis(node),
        TreeNode::Variable { .. } => constraint.visit_variable(node),
    }
}

/// Every violation of the constraint across the whole tree, in pre-order,
/// without stopping at the first.
pub fn collect_violations(tree: &ParseTree, constraint: &dyn Constraint) -> Vec<ConstraintViolation> {
    let mut violations = Vec::new();
    collect_node(tree.root(), constraint, &mut violations);
    violations
}

fn collect_node(
    node: &TreeNode,
    constraint: &dyn Constraint,
    violations: &mut Vec<ConstraintViolation>,
) {
    if let Some(violation) = check_node(constraint, node) {
        violations.push(violation);
    }

    match node {
        TreeNode::Binary { left, right, .. } => {
            collect_node(left, constraint, violations);
            collect_node(right, constraint, violations);
        }

        TreeNode::Unary { operand, .. } => collect_node(operand, constraint, violations),

        TreeNode::Parenthesis { contained, .. } => collect_node(contained, constraint, violations),

        TreeNode::Variable { .. } => {}
    }
}
