/*!
The structures of the pipeline.

Source text moves through the library in one direction, and each stage has a
structure of its own:

- [Token]s (and the [Span]s tying them to source text) are read by the
  [scanner](crate::parser::Scanner).
- A [ParseTree] of [TreeNode]s is built by the [parser](crate::parser::Parser).
- An [Expression] is emitted by the [compiler](crate::compiler::Compiler).
- A [valuation](crate::structures::valuation) maps variable indices to
  tri-state [Value]s, and is what an expression is evaluated against.

All structures are immutable once built, and each node of a tree exclusively
owns its children.

[Token]: token::Token
[Span]: token::Span
[ParseTree]: tree::ParseTree
[TreeNode]: tree::TreeNode
[Expression]: expression::Expression
[Value]: valuation::Value
*/

pub mod expression;
pub mod token;
pub mod tree;
pub mod valuation;
