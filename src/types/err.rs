/*!
Error types used in the library.

Each stage of the pipeline has an error type of its own, wrapped by
[ErrorKind] at the boundary of a [context](crate::context):

- [ParseError] --- scanning or parsing failed; carries the byte offset of the
  failure and, where applicable, the token kinds which were acceptable
  there, enabling caret-style highlighting against the originating input.
- [CompileError] --- a constraint was violated; carries the offending node.
- [SolveError] --- a solve was refused before it began.

A contradiction is *not* an error: it is a valid outcome of a solve, reported
through [Report](crate::reports::Report).

All errors are local to a single call and deterministic --- identical input
always reproduces the identical error.
*/

use crate::structures::token::TokenKind;
use crate::structures::tree::TreeNode;

/// The kinds of error which may surface from the library.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// An error while scanning or parsing source text.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An error while compiling a parse tree.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// An error while preparing a solve.
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// An error while scanning or parsing source text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at character {offset}")]
pub struct ParseError {
    /// The byte offset of the failure in the source text.
    pub offset: usize,

    /// What went wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// The token kinds which were acceptable at the offset, if any were.
    pub fn expected(&self) -> &[TokenKind] {
        match &self.kind {
            ParseErrorKind::Lexical { expected } => expected,
            ParseErrorKind::UnexpectedToken { expected, .. } => expected,
            ParseErrorKind::NonAssociativeChain { .. } => &[],
        }
    }
}

/// The ways scanning or parsing fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No token could be read at the offset.
    Lexical {
        /// The token kinds tried at the offset.
        expected: Vec<TokenKind>,
    },

    /// A token was read which does not fit the grammar at its position.
    UnexpectedToken {
        /// The kind of the token read.
        found: TokenKind,

        /// The token kinds the grammar accepts at the position.
        expected: Vec<TokenKind>,
    },

    /// A non-associative operator was chained over three or more operands
    /// without parentheses.
    NonAssociativeChain {
        /// The name of the operator.
        operator: &'static str,
    },
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical { expected } => {
                write!(f, "expected {}", kind_list(expected))
            }

            Self::UnexpectedToken { found, expected } => {
                write!(f, "unexpected {found}, expected {}", kind_list(expected))
            }

            Self::NonAssociativeChain { operator } => {
                write!(
                    f,
                    "the operator '{operator}' is non-associative and may not be used in groups \
                     of 3 or more without parentheses for clarification"
                )
            }
        }
    }
}

/// The kinds joined as "a, b or c", for error messages.
fn kind_list(kinds: &[TokenKind]) -> String {
    match kinds {
        [] => "(unknown)".to_owned(),
        [kind] => kind.to_string(),
        [rest @ .., last] => {
            let rest = rest
                .iter()
                .map(TokenKind::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{rest} or {last}")
        }
    }
}

/// An error while compiling a parse tree: a constraint violation, carrying
/// the offending node.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CompileError {
    /// The node at which compilation failed.
    pub node: TreeNode,

    /// A user-facing description of the failure.
    pub message: String,
}

/// An error while preparing a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The variable universe exceeds the configured cap.
    ///
    /// Enumeration is exponential in the variable count, and the library has
    /// no cancellation; the cap is the configured bound of
    /// [Config](crate::config::Config).
    #[error("solving over {count} variables exceeds the configured cap of {cap}")]
    VariableCapExceeded {
        /// The size of the variable universe.
        count: usize,

        /// The configured cap.
        cap: usize,
    },
}
