//! Robot-command language parser
//!
//! This module transforms one line of source text into an Abstract Syntax
//! Tree (AST):
//! - [`lexer`]: Tokenization (line → whitespace-delimited tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Grammar
//!
//! ```text
//! program           ::= "program" command_list
//! command_list      ::= command* "end"
//! command           ::= repeat_command | primitive_command
//! repeat_command    ::= "repeat" number command_list
//! primitive_command ::= "go" | "right" | "left"
//! ```
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent, LL(1) on keyword lookahead. Each input
//! line is one program; the first malformed token aborts that line's parse
//! with a [`parser::ParseError`]. No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;
