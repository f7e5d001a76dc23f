/*!
The parser --- token sequences to parse trees.

A [Parser] climbs the configured [operator table](OperatorTable) by
precedence.
For a table of *N* descriptors the grammar is, informally:

```text
Expr(k)   = Expr(k+1) { SymbolAt(k) Expr(k+1) }*     for k in 0..N
Expr(N)   = NotExpr
NotExpr   = '~' NotExpr | ParenExpr
ParenExpr = '(' Expr(0) ')' | Variable
```

Each level collects one operand, then as many (operator, operand) pairs as
the level's symbols allow, and combines them under the descriptor's
associativity:

- A lone operand is returned unchanged --- no node is created.
- Two operands become a single binary node, whatever the associativity.
- Three or more operands fold left or right per the descriptor, or, for a
  non-associative operator, fail with a parse error at the operator which
  extends the chain past two operands.

After the top-level expression the next token must be end of input; anything
else is an unexpected-token error at its offset.

```rust
# use trivalent::parser::Parser;
let parser = Parser::default();

assert!(parser.parse("~(A ∧ B) -> C").is_ok());
assert!(parser.parse("A & & B").is_err());
```
*/

mod scanner;
pub use scanner::Scanner;

use crate::config::operators::{Associativity, OperatorDescriptor, OperatorTable};
use crate::misc::log::targets;
use crate::structures::token::{Token, TokenKind};
use crate::structures::tree::{ParseTree, TreeNode};
use crate::types::err::{ParseError, ParseErrorKind};

/// A parser over a table of binary operators.
#[derive(Clone, Debug, Default)]
pub struct Parser {
    operators: OperatorTable,
}

impl Parser {
    /// A parser over the given operator table.
    pub fn new(operators: OperatorTable) -> Self {
        Parser { operators }
    }

    /// The operator table the parser climbs.
    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Parses source text to a parse tree.
    pub fn parse(&self, source: &str) -> Result<ParseTree, ParseError> {
        let mut stream = TokenStream::open(Scanner::new(source, &self.operators))?;

        let root = self.parse_level(&mut stream, 0)?;

        if stream.current.kind != TokenKind::EndOfInput {
            return Err(stream.unexpected(&[TokenKind::EndOfInput]));
        }

        log::debug!(target: targets::PARSER, "parsed {:?} over {} bytes", root.span(), source.len());

        Ok(ParseTree::new(source, root))
    }

    /// One precedence level: an operand at the next level, then every
    /// (operator, operand) pair the level's symbols admit.
    fn parse_level(
        &self,
        stream: &mut TokenStream<'_>,
        level: usize,
    ) -> Result<TreeNode, ParseError> {
        let Some(descriptor) = self.operators.descriptor(level) else {
            return self.parse_not(stream);
        };

        let first = self.parse_level(stream, level + 1)?;

        let mut rest: Vec<(Token, TreeNode)> = Vec::new();
        while stream.current.kind == TokenKind::BinaryOperator
            && descriptor.matches(&stream.current.text)
        {
            let operator = stream.advance()?;
            let operand = self.parse_level(stream, level + 1)?;
            rest.push((operator, operand));
        }

        combine(first, rest, descriptor)
    }

    /// Negation is right-recursive, so `~~x` scans (though the default
    /// constraint later rejects it).
    fn parse_not(&self, stream: &mut TokenStream<'_>) -> Result<TreeNode, ParseError> {
        if stream.current.kind == TokenKind::UnaryOperator {
            let operator = stream.advance()?;
            let operand = self.parse_not(stream)?;
            Ok(TreeNode::Unary {
                operator,
                operand: Box::new(operand),
            })
        } else {
            self.parse_paren(stream)
        }
    }

    fn parse_paren(&self, stream: &mut TokenStream<'_>) -> Result<TreeNode, ParseError> {
        if stream.current.kind == TokenKind::LeftParen {
            let left_paren = stream.advance()?;

            let contained = self.parse_level(stream, 0)?;

            if stream.current.kind != TokenKind::RightParen {
                return Err(stream.unexpected(&[TokenKind::RightParen]));
            }
            let right_paren = stream.advance()?;

            Ok(TreeNode::Parenthesis {
                left_paren,
                contained: Box::new(contained),
                right_paren,
            })
        } else {
            self.parse_variable(stream)
        }
    }

    fn parse_variable(&self, stream: &mut TokenStream<'_>) -> Result<TreeNode, ParseError> {
        if stream.current.kind == TokenKind::Variable {
            let token = stream.advance()?;
            Ok(TreeNode::Variable { token })
        } else {
            Err(stream.unexpected(&[
                TokenKind::Variable,
                TokenKind::UnaryOperator,
                TokenKind::LeftParen,
            ]))
        }
    }
}

/// Combines the operands collected at one level under the descriptor's
/// associativity.
fn combine(
    first: TreeNode,
    mut rest: Vec<(Token, TreeNode)>,
    descriptor: &OperatorDescriptor,
) -> Result<TreeNode, ParseError> {
    // With fewer than three operands associativity makes no difference.
    if rest.len() < 2 {
        return Ok(match rest.pop() {
            None => first,
            Some((operator, second)) => {
                TreeNode::binary(first, operator, descriptor.connective, second)
            }
        });
    }

    match descriptor.associativity {
        Associativity::None => {
            // The second operator is the one which extends the chain past
            // two operands.
            let offset = rest[1].0.span.start;
            Err(ParseError {
                offset,
                kind: ParseErrorKind::NonAssociativeChain {
                    operator: descriptor.connective.name(),
                },
            })
        }

        Associativity::Left => Ok(rest.into_iter().fold(first, |accumulator, (operator, operand)| {
            TreeNode::binary(accumulator, operator, descriptor.connective, operand)
        })),

        Associativity::Right => Ok(fold_right(first, rest, descriptor)),
    }
}

fn fold_right(first: TreeNode, mut rest: Vec<(Token, TreeNode)>, descriptor: &OperatorDescriptor) -> TreeNode {
    if rest.is_empty() {
        return first;
    }
    let (operator, second) = rest.remove(0);
    TreeNode::binary(
        first,
        operator,
        descriptor.connective,
        fold_right(second, rest, descriptor),
    )
}

/// A token stream: the scanner, plus the one token of lookahead the grammar
/// needs.
struct TokenStream<'s> {
    scanner: Scanner<'s>,
    current: Token,
}

impl<'s> TokenStream<'s> {
    /// Opens the stream by reading the first token.
    fn open(mut scanner: Scanner<'s>) -> Result<Self, ParseError> {
        let current = scanner.read()?;
        Ok(TokenStream { scanner, current })
    }

    /// Takes the current token, reading the next into its place.
    ///
    /// Callers only advance over a token the grammar accepted, so the stream
    /// never reads past end of input.
    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.scanner.read()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// An unexpected-token error at the current token.
    fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        ParseError {
            offset: self.current.span.start,
            kind: ParseErrorKind::UnexpectedToken {
                found: self.current.kind,
                expected: expected.to_vec(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::operators::{Connective, OperatorDescriptor};

    #[test]
    fn lone_operand_creates_no_node() {
        let tree = Parser::default().parse("(A)").unwrap();
        assert!(matches!(tree.root(), TreeNode::Parenthesis { .. }));
    }

    #[test]
    fn left_fold_leans_left() {
        let tree = Parser::default().parse("A & B & C").unwrap();
        let TreeNode::Binary { left, right, .. } = tree.root() else {
            panic!("expected a binary root");
        };
        assert!(matches!(left.as_ref(), TreeNode::Binary { .. }));
        assert!(matches!(right.as_ref(), TreeNode::Variable { .. }));
    }

    #[test]
    fn right_fold_leans_right() {
        let table = OperatorTable::new(vec![OperatorDescriptor::new(
            Connective::Then,
            Associativity::Right,
            [">"],
        )]);
        let tree = Parser::new(table).parse("A > B > C").unwrap();
        let TreeNode::Binary { left, right, .. } = tree.root() else {
            panic!("expected a binary root");
        };
        assert!(matches!(left.as_ref(), TreeNode::Variable { .. }));
        assert!(matches!(right.as_ref(), TreeNode::Binary { .. }));
    }

    #[test]
    fn non_associative_chain_fails_at_second_operator() {
        let table = OperatorTable::new(vec![OperatorDescriptor::new(
            Connective::And,
            Associativity::None,
            ["&"],
        )]);
        let error = Parser::new(table).parse("A & B & C").unwrap_err();
        assert_eq!(error.offset, 6);

        // Two operands are fine under any associativity.
        let table = OperatorTable::new(vec![OperatorDescriptor::new(
            Connective::And,
            Associativity::None,
            ["&"],
        )]);
        assert!(Parser::new(table).parse("A & B").is_ok());
    }

    #[test]
    fn trailing_token_is_an_error() {
        let error = Parser::default().parse("A B").unwrap_err();
        assert_eq!(error.offset, 2);
        assert_eq!(error.expected(), &[TokenKind::EndOfInput]);
    }

    #[test]
    fn missing_right_paren() {
        let error = Parser::default().parse("(A & B").unwrap_err();
        assert_eq!(error.offset, 6);
        assert_eq!(error.expected(), &[TokenKind::RightParen]);
    }

    #[test]
    fn empty_source_expects_a_leaf() {
        let error = Parser::default().parse("").unwrap_err();
        assert_eq!(error.offset, 0);
        assert!(error.expected().contains(&TokenKind::Variable));
        assert!(error.expected().contains(&TokenKind::LeftParen));
    }
}
