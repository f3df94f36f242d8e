//! Tokenizer for robot-command source lines
//!
//! Converts one line of source text into a flat [`Token`] stream consumed by
//! the parser. Tokens are whitespace-delimited words; there is no further
//! lexical structure, so tokenization itself cannot fail. Classification of
//! words (keyword, number, command name) happens in the parser.

use crate::parser::parser::ParseError;
use std::fmt;

/// A single whitespace-delimited word from the input line.
///
/// Every token carries the 0-based column of its first character so that
/// parse errors can report an accurate position without a separate
/// token→column table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub column: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Cursor over the tokens of one source line.
///
/// The cursor only moves forward; it never rewinds. One `TokenStream` is
/// allocated per parsed line and discarded with it, so no state is shared
/// between parses.
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
    /// Column one past the end of the line, reported for errors raised
    /// when the stream is exhausted.
    end_column: usize,
}

impl TokenStream {
    /// Split the given line on whitespace, recording each word's column.
    pub fn new(line: &str) -> Self {
        let mut tokens = Vec::new();
        let mut word = String::new();
        let mut start = 0;
        let mut end_column = 0;

        for (column, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                if !word.is_empty() {
                    tokens.push(Token {
                        text: std::mem::take(&mut word),
                        column: start,
                    });
                }
            } else {
                if word.is_empty() {
                    start = column;
                }
                word.push(ch);
            }
            end_column = column + 1;
        }
        if !word.is_empty() {
            tokens.push(Token { text: word, column: start });
        }

        Self {
            tokens,
            position: 0,
            end_column,
        }
    }

    /// Peek at the current token without consuming it.
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Move the cursor forward one token, returning the new current token.
    pub fn advance(&mut self) -> Option<&Token> {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Column of the current token, or one past the end of the line when
    /// the stream is exhausted.
    pub fn current_column(&self) -> usize {
        match self.current() {
            Some(token) => token.column,
            None => self.end_column,
        }
    }

    /// Consume the current token if it equals `literal`, otherwise fail.
    pub fn expect(&mut self, literal: &str) -> Result<(), ParseError> {
        match self.current() {
            Some(token) if token.text == literal => {}
            Some(token) => {
                return Err(ParseError {
                    message: format!(
                        "{} is expected, but {} is found.",
                        literal, token
                    ),
                    column: token.column,
                });
            }
            None => {
                return Err(ParseError {
                    message: format!(
                        "{} is expected, but end of line is found.",
                        literal
                    ),
                    column: self.end_column,
                });
            }
        }
        self.advance();
        Ok(())
    }

    /// Parse the current token as a base-10 integer without consuming it.
    ///
    /// Any `i32` is accepted, including zero and negative values.
    pub fn current_number(&self) -> Result<i32, ParseError> {
        match self.current() {
            Some(token) => token.text.parse::<i32>().map_err(|err| ParseError {
                message: format!("'{}' is not a number ({})", token.text, err),
                column: token.column,
            }),
            None => Err(ParseError {
                message: "number is expected, but end of line is found."
                    .to_string(),
                column: self.end_column,
            }),
        }
    }
}
