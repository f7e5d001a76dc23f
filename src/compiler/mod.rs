/*!
The compiler --- parse trees to expressions.

A [Compiler] makes a pre-order walk of a parse tree.
At each node every configured [constraint](constraints) is checked before the
node's children are compiled, and the first violation anywhere in the tree
aborts compilation as a [CompileError].

Node translation:

- A variable resolves through the caller-supplied [NameTable], appending the
  name if it is fresh, and compiles to the resolved index.
- A unary node compiles its operand and wraps it in a negation.
- A binary node compiles both operands and dispatches on the node's
  [connective](crate::config::operators::Connective).
- A parenthesis node compiles to its contained expression unchanged ---
  grouping is already captured by the shape of the tree.

The node variants are a closed sum, so there is no unrecognized-node case:
any tree the parser can produce, the compiler can translate.

The name table is the one piece of state which outlives a call.
Compiling several formulas against a shared table is what aligns variable
indices across them:

```rust
# use trivalent::compiler::Compiler;
# use trivalent::db::names::NameTable;
# use trivalent::parser::Parser;
let parser = Parser::default();
let compiler = Compiler::default();
let mut names = NameTable::new();

let first = parser.parse("A > B").unwrap();
let second = parser.parse("B > A").unwrap();
compiler.compile(&first, &mut names).unwrap();
compiler.compile(&second, &mut names).unwrap();

assert_eq!(names.index_of("A"), Some(0));
assert_eq!(names.index_of("B"), Some(1));
```
*/

pub mod constraints;

use constraints::{Constraint, ParenthesizedNot};

use crate::db::names::NameTable;
use crate::misc::log::targets;
use crate::structures::expression::Expression;
use crate::structures::tree::{ParseTree, TreeNode};
use crate::types::err::CompileError;

/// Compiles parse trees to expressions, subject to an ordered list of
/// constraints.
pub struct Compiler {
    constraints: Vec<Box<dyn Constraint>>,
}

impl Default for Compiler {
    /// A compiler with only the [ParenthesizedNot] constraint.
    fn default() -> Self {
        Compiler::new(vec![Box::new(ParenthesizedNot)])
    }
}

impl Compiler {
    /// A compiler checking the given constraints, in order, at every node.
    pub fn new(constraints: Vec<Box<dyn Constraint>>) -> Self {
        Compiler { constraints }
    }

    /// A compiler with no constraints.
    pub fn unconstrained() -> Self {
        Compiler::new(Vec::new())
    }

    /// Compiles the tree to an expression, resolving variables through the
    /// given name table.
    pub fn compile(
        &self,
        tree: &ParseTree,
        names: &mut NameTable,
    ) -> Result<Expression, CompileError> {
        self.compile_node(tree.root(), names)
    }

    fn check(&self, node: &TreeNode) -> Result<(), CompileError> {
        for constraint in &self.constraints {
            if let Some(violation) = constraints::check_node(constraint.as_ref(), node) {
                return Err(CompileError {
                    node: violation.node,
                    message: violation.message,
                });
            }
        }
        Ok(())
    }

    fn compile_node(
        &self,
        node: &TreeNode,
        names: &mut NameTable,
    ) -> Result<Expression, CompileError> {
        self.check(node)?;

        match node {
            TreeNode::Variable { token } => {
                let index = names.resolve(&token.text);
                log::trace!(target: targets::COMPILER, "variable '{}' resolved to index {index}", token.text);
                Ok(Expression::Variable(index))
            }

            TreeNode::Unary { operand, .. } => {
                let operand = self.compile_node(operand, names)?;
                Ok(Expression::Not(Box::new(operand)))
            }

            TreeNode::Binary {
                left,
                connective,
                right,
                ..
            } => {
                let left = self.compile_node(left, names)?;
                let right = self.compile_node(right, names)?;
                Ok(connective.expression(left, right))
            }

            TreeNode::Parenthesis { contained, .. } => self.compile_node(contained, names),
        }
    }
}
