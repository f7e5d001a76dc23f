/*!
The scanner --- source text to a lazy sequence of tokens.

A scanner makes a single forward pass over source text, skipping whitespace
between tokens and yielding one token per recognized region.
The sequence is finite, not restartable, and ends with exactly one
[EndOfInput](TokenKind::EndOfInput) token.

Recognizers are tried in a fixed order at each position:

1. A variable --- the longest run of word characters (letters, digits,
   underscore).
2. A literal `(` or `)`.
3. The negation symbol `~`.
4. The longest matching binary operator symbol from the configured table.

End of input is recognized only at the end of the text.
If nothing matches at a non-end position, scanning fails with an error
carrying the offset and the token kinds which were acceptable there, and the
sequence ends.

```rust
# use trivalent::config::operators::OperatorTable;
# use trivalent::parser::Scanner;
# use trivalent::structures::token::TokenKind;
let table = OperatorTable::default();
let kinds = Scanner::new("A -> B", &table)
    .map(|token| token.map(|t| t.kind))
    .collect::<Result<Vec<_>, _>>()
    .unwrap();

assert_eq!(
    kinds,
    vec![
        TokenKind::Variable,
        TokenKind::BinaryOperator,
        TokenKind::Variable,
        TokenKind::EndOfInput,
    ],
);
```
*/

use crate::config::operators::OperatorTable;
use crate::misc::log::targets;
use crate::structures::token::{Span, Token, TokenKind};
use crate::types::err::{ParseError, ParseErrorKind};

/// The token kinds tried at a non-end position, in the order tried.
const RECOGNIZERS: [TokenKind; 5] = [
    TokenKind::Variable,
    TokenKind::LeftParen,
    TokenKind::RightParen,
    TokenKind::UnaryOperator,
    TokenKind::BinaryOperator,
];

/// A single forward pass over source text, as an iterator of tokens.
pub struct Scanner<'s> {
    source: &'s str,
    offset: usize,

    /// The binary operator symbols, longest first.
    symbols: Vec<String>,

    /// Set once end of input or an error has been yielded.
    finished: bool,
}

impl<'s> Scanner<'s> {
    /// A scanner over the source, recognizing the binary operator symbols of
    /// the given table.
    pub fn new(source: &'s str, operators: &OperatorTable) -> Self {
        Scanner {
            source,
            offset: 0,
            symbols: operators
                .symbols_longest_first()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            finished: false,
        }
    }

    /// Reads the token at the current position, advancing past it.
    ///
    /// Reading again after end of input yields end of input again; the
    /// iterator implementation is what bounds the sequence.
    pub(super) fn read(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();

        if self.offset == self.source.len() {
            return Ok(Token::new(
                TokenKind::EndOfInput,
                Span::new(self.offset, 0),
                "",
            ));
        }

        let rest = &self.source[self.offset..];

        let (kind, length) = if let Some(length) = word_length(rest) {
            (TokenKind::Variable, length)
        } else if rest.starts_with('(') {
            (TokenKind::LeftParen, 1)
        } else if rest.starts_with(')') {
            (TokenKind::RightParen, 1)
        } else if rest.starts_with('~') {
            (TokenKind::UnaryOperator, 1)
        } else if let Some(length) = self.symbol_length(rest) {
            (TokenKind::BinaryOperator, length)
        } else {
            return Err(ParseError {
                offset: self.offset,
                kind: ParseErrorKind::Lexical {
                    expected: RECOGNIZERS.to_vec(),
                },
            });
        };

        let span = Span::new(self.offset, length);
        let text = &self.source[span.start..span.end()];
        self.offset = span.end();

        log::trace!(target: targets::SCANNER, "read {kind:?} '{text}' at {}", span.start);

        Ok(Token::new(kind, span, text))
    }

    /// The byte length of the longest operator symbol at the start of `rest`,
    /// if any symbol matches.
    fn symbol_length(&self, rest: &str) -> Option<usize> {
        self.symbols
            .iter()
            .find(|symbol| rest.starts_with(symbol.as_str()))
            .map(String::len)
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.source[self.offset..];
        for character in rest.chars() {
            if !character.is_whitespace() {
                break;
            }
            self.offset += character.len_utf8();
        }
    }
}

/// The byte length of the run of word characters at the start of `rest`, if
/// the run is non-empty.
fn word_length(rest: &str) -> Option<usize> {
    let mut length = 0;
    for character in rest.chars() {
        if !(character.is_alphanumeric() || character == '_') {
            break;
        }
        length += character.len_utf8();
    }
    match length {
        0 => None,
        _ => Some(length),
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.read();
        match &result {
            Ok(token) if token.kind == TokenKind::EndOfInput => self.finished = true,
            Err(_) => self.finished = true,
            Ok(_) => {}
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Result<Vec<Token>, ParseError> {
        Scanner::new(source, &OperatorTable::default()).collect()
    }

    #[test]
    fn spans_cover_tokens() {
        let tokens = scan(" (A & Bee)").unwrap();
        let spans: Vec<(usize, usize)> = tokens
            .iter()
            .map(|t| (t.span.start, t.span.length))
            .collect();
        assert_eq!(
            spans,
            vec![(1, 1), (2, 1), (4, 1), (6, 3), (9, 1), (10, 0)],
        );
    }

    #[test]
    fn longest_symbol_wins() {
        let tokens = scan("A -> B").unwrap();
        assert_eq!(tokens[1].text, "->");
        assert_eq!(tokens[1].kind, TokenKind::BinaryOperator);
    }

    #[test]
    fn multi_byte_symbols() {
        let tokens = scan("A ∧ B").unwrap();
        assert_eq!(tokens[1].text, "∧");
        // The span is in bytes, and '∧' is three of them.
        assert_eq!(tokens[1].span.length, 3);
        assert_eq!(tokens[2].span.start, 6);
    }

    #[test]
    fn lexical_failure_carries_offset_and_kinds() {
        let error = scan("A & !B").unwrap_err();
        assert_eq!(error.offset, 4);
        assert!(error.expected().contains(&TokenKind::Variable));
        assert!(error.expected().contains(&TokenKind::BinaryOperator));
    }

    #[test]
    fn one_end_of_input() {
        let tokens = scan("  ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
    }
}
