/*!
Tokens, and the spans which tie them to source text.

A token pairs a [TokenKind] with the [Span] of source text it was read from
and the text inside the span.

Spans are byte offsets into the UTF-8 source.
Operator symbols may be multi-byte (e.g. `∧` or `→`), so byte offsets are the
only representation under which a span is unambiguous.

Every diagnostic of the library is keyed to a span, which allows a consumer to
underline the offending region of the originating input.

```rust
# use trivalent::structures::token::{Span, Token, TokenKind};
let token = Token::new(TokenKind::Variable, Span::new(2, 3), "Cat");

assert_eq!(token.span.end(), 5);
assert_eq!(token.text, "Cat");
```
*/

/// A region of source text: a byte offset and a byte length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// The byte offset at which the region starts.
    pub start: usize,

    /// The byte length of the region.
    pub length: usize,
}

impl Span {
    /// A span starting at the given byte offset and covering `length` bytes.
    pub fn new(start: usize, length: usize) -> Self {
        Span { start, length }
    }

    /// The byte offset one past the end of the region.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// The kinds of token which may be read from source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of word characters (letters, digits, underscore).
    Variable,

    /// A symbol of some binary operator in the configured table.
    BinaryOperator,

    /// The negation symbol `~`.
    UnaryOperator,

    /// A literal `(`.
    LeftParen,

    /// A literal `)`.
    RightParen,

    /// The end of the source text, read exactly once per scan.
    EndOfInput,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable => write!(f, "a variable"),
            Self::BinaryOperator => write!(f, "a binary operator"),
            Self::UnaryOperator => write!(f, "'~'"),
            Self::LeftParen => write!(f, "'('"),
            Self::RightParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A token: a kind, the span it covers, and the text within the span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind: TokenKind,

    /// The region of source text the token was read from.
    pub span: Span,

    /// The text within the span.
    ///
    /// Owned, so tokens (and the trees built over them) do not borrow the
    /// source text.
    pub text: String,
}

impl Token {
    /// A token of the given kind, span, and text.
    pub fn new(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
        Token {
            kind,
            span,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}
