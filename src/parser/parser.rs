//! Recursive descent parser for the robot-command grammar
//!
//! One method per grammar rule. Every rule returns a fully-constructed
//! immutable node; there is no partially-initialized parse state. The first
//! token-level violation aborts the parse of the whole line, with no
//! recovery and no partial result.

use crate::parser::ast::{Command, CommandList, Primitive, Program, Repeat};
use crate::parser::lexer::TokenStream;
use std::fmt;

/// Parser error type
///
/// The single error kind for the whole grammar. `column` is the 0-based
/// position of the offending token, or one past the end of the line when
/// the input ran out.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at column {}: {}",
            self.column + 1,
            self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Parse one line of source as a complete program.
///
/// Tokens after the program's terminating `end` are ignored.
pub fn parse(line: &str) -> Result<Program, ParseError> {
    Parser::new(line).parse_program()
}

/// Recursive descent parser over one line of tokens.
pub struct Parser {
    tokens: TokenStream,
}

impl Parser {
    pub fn new(line: &str) -> Self {
        Self {
            tokens: TokenStream::new(line),
        }
    }

    /// Parse `program ::= "program" command_list`
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        self.tokens.expect("program")?;
        let body = self.parse_command_list()?;
        Ok(Program { body })
    }

    /// Parse `command_list ::= command* "end"`
    fn parse_command_list(&mut self) -> Result<CommandList, ParseError> {
        let mut commands = Vec::new();

        loop {
            let token = match self.tokens.current() {
                Some(token) => token,
                None => {
                    return Err(ParseError {
                        message: "Missing 'end'".to_string(),
                        column: self.tokens.current_column(),
                    });
                }
            };

            if token.text == "end" {
                self.tokens.advance();
                break;
            }

            commands.push(self.parse_command()?);
        }

        Ok(CommandList { commands })
    }

    /// Parse `command ::= repeat_command | primitive_command`
    fn parse_command(&mut self) -> Result<Command, ParseError> {
        let is_repeat = match self.tokens.current() {
            Some(token) => token.text == "repeat",
            None => {
                return Err(ParseError {
                    message: "Missing 'end'".to_string(),
                    column: self.tokens.current_column(),
                });
            }
        };

        if is_repeat {
            Ok(Command::Repeat(self.parse_repeat_command()?))
        } else {
            Ok(Command::Primitive(self.parse_primitive_command()?))
        }
    }

    /// Parse `repeat_command ::= "repeat" number command_list`
    fn parse_repeat_command(&mut self) -> Result<Repeat, ParseError> {
        self.tokens.expect("repeat")?;
        let count = self.tokens.current_number()?;
        self.tokens.advance();
        let body = self.parse_command_list()?;
        Ok(Repeat { count, body })
    }

    /// Parse `primitive_command ::= "go" | "right" | "left"`
    fn parse_primitive_command(&mut self) -> Result<Primitive, ParseError> {
        let primitive = match self.tokens.current() {
            Some(token) => match token.text.as_str() {
                "go" => Primitive::Go,
                "right" => Primitive::Right,
                "left" => Primitive::Left,
                other => {
                    return Err(ParseError {
                        message: format!("{} is undefined", other),
                        column: token.column,
                    });
                }
            },
            None => {
                return Err(ParseError {
                    message: "Missing command".to_string(),
                    column: self.tokens.current_column(),
                });
            }
        };

        self.tokens.advance();
        Ok(primitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_program() {
        let program = parse("program end").unwrap();
        assert!(program.body.commands.is_empty());
        assert_eq!(program.to_string(), "[program []]");
    }

    #[test]
    fn test_parse_single_command() {
        let program = parse("program go end").unwrap();
        assert_eq!(program.body.commands.len(), 1);
        assert!(matches!(
            program.body.commands[0],
            Command::Primitive(Primitive::Go)
        ));
        assert_eq!(program.to_string(), "[program [go]]");
    }

    #[test]
    fn test_parse_repeat_command() {
        let program = parse("program repeat 4 go right end end").unwrap();

        assert_eq!(program.body.commands.len(), 1);
        match &program.body.commands[0] {
            Command::Repeat(repeat) => {
                assert_eq!(repeat.count, 4);
                assert_eq!(repeat.body.commands.len(), 2);
            }
            _ => panic!("Expected repeat command"),
        }
        assert_eq!(program.to_string(), "[program [[repeat 4 [go, right]]]]");
    }

    #[test]
    fn test_parse_nested_repeat() {
        let program =
            parse("program repeat 4 repeat 3 go right go left end right end end")
                .unwrap();

        assert_eq!(
            program.to_string(),
            "[program [[repeat 4 [[repeat 3 [go, right, go, left]], right]]]]"
        );
    }

    #[test]
    fn test_undefined_command() {
        let err = parse("program foo end").unwrap_err();
        assert_eq!(err.message, "foo is undefined");
        assert_eq!(err.column, 8);
    }

    #[test]
    fn test_missing_end() {
        let err = parse("program go").unwrap_err();
        assert!(err.message.contains("Missing 'end'"));
        assert_eq!(err.column, 10);
    }

    #[test]
    fn test_missing_program_keyword() {
        let err = parse("go end").unwrap_err();
        assert_eq!(err.message, "program is expected, but go is found.");
    }

    #[test]
    fn test_repeat_count_not_numeric() {
        // `end` sits where the repeat count should be
        let err = parse("program repeat end end").unwrap_err();
        assert!(err.message.contains("'end' is not a number"));
        assert_eq!(err.column, 15);
    }

    #[test]
    fn test_repeat_count_missing() {
        let err = parse("program repeat").unwrap_err();
        assert_eq!(
            err.message,
            "number is expected, but end of line is found."
        );
    }

    #[test]
    fn test_zero_and_negative_counts_accepted() {
        let program = parse("program repeat 0 go end end").unwrap();
        assert_eq!(program.to_string(), "[program [[repeat 0 [go]]]]");

        let program = parse("program repeat -2 go end end").unwrap();
        assert_eq!(program.to_string(), "[program [[repeat -2 [go]]]]");
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        // Parsing stops at the program's terminating `end`
        let program = parse("program go end right left").unwrap();
        assert_eq!(program.to_string(), "[program [go]]");
    }

    #[test]
    fn test_empty_line_fails() {
        let err = parse("").unwrap_err();
        assert_eq!(
            err.message,
            "program is expected, but end of line is found."
        );
    }

    #[test]
    fn test_display_includes_column() {
        let err = parse("program foo end").unwrap_err();
        assert_eq!(err.to_string(), "Parse error at column 9: foo is undefined");
    }
}
