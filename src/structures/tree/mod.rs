/*!
Parse trees.

A parse tree records the syntactic structure of a formula, before any name
resolution has taken place.
Each node keeps the tokens it was built from, so every node can be tied back
to a span of the source text --- constraint violations and compile errors point
at nodes for exactly this reason.

Trees are immutable once built, each node exclusively owns its children, and
the only producer of trees is the [parser](crate::parser::Parser).

Parenthesis nodes are retained rather than dissolved during parsing: grouping
already shapes the tree, but some [constraints](crate::compiler::constraints)
distinguish `~~x` from `~(~x)`, and rendering a tree back over its source
requires the parenthesis tokens.
*/

use crate::config::operators::Connective;
use crate::structures::token::{Span, Token};

/// A node of a parse tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode {
    /// A bare variable, the only atomic leaf.
    Variable {
        /// The variable token.
        token: Token,
    },

    /// A unary operator applied to an operand.
    Unary {
        /// The operator token.
        operator: Token,

        /// The operand the operator applies to.
        operand: Box<TreeNode>,
    },

    /// A binary operator applied to a pair of operands.
    Binary {
        /// The left operand.
        left: Box<TreeNode>,

        /// The operator token, as written in the source.
        operator: Token,

        /// The identity of the operator, resolved from the operator table.
        connective: Connective,

        /// The right operand.
        right: Box<TreeNode>,
    },

    /// A parenthesized expression.
    Parenthesis {
        /// The opening parenthesis token.
        left_paren: Token,

        /// The contained expression.
        contained: Box<TreeNode>,

        /// The closing parenthesis token.
        right_paren: Token,
    },
}

impl TreeNode {
    /// A binary node over the given operands.
    pub fn binary(left: TreeNode, operator: Token, connective: Connective, right: TreeNode) -> Self {
        TreeNode::Binary {
            left: Box::new(left),
            operator,
            connective,
            right: Box::new(right),
        }
    }

    /// The span of source text the node covers.
    pub fn span(&self) -> Span {
        match self {
            Self::Variable { token } => token.span,

            Self::Unary { operator, operand } => {
                let start = operator.span.start;
                Span::new(start, operand.span().end() - start)
            }

            Self::Binary { left, right, .. } => {
                let start = left.span().start;
                Span::new(start, right.span().end() - start)
            }

            Self::Parenthesis {
                left_paren,
                right_paren,
                ..
            } => {
                let start = left_paren.span.start;
                Span::new(start, right_paren.span.end() - start)
            }
        }
    }
}

/// A parsed formula: the source text together with the root node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseTree {
    source: String,
    root: TreeNode,
}

impl ParseTree {
    /// A tree over the given source with the given root.
    pub fn new(source: impl Into<String>, root: TreeNode) -> Self {
        ParseTree {
            source: source.into(),
            root,
        }
    }

    /// The source text the tree was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The root node of the tree.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }
}
