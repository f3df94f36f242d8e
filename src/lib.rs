//! # Introduction
//!
//! Trundle parses a miniature robot-command language in which a program is
//! a single line of whitespace-separated keywords, and prints the parsed
//! structure back out in bracketed form.
//!
//! ## Parse pipeline
//!
//! ```text
//! Source line → Tokens → Parser → AST → rendering / JSON
//! ```
//!
//! 1. [`parser`]: tokenises one line and builds an AST.
//! 2. [`diagnostics`]: caret-style rendering of parse failures; used by
//!    the command-line driver, not part of parsing itself.
//!
//! ## The language
//!
//! A program starts with `program`, contains primitive commands (`go`,
//! `right`, `left`) and `repeat <n> … end` blocks nested to any depth, and
//! is terminated by `end`:
//!
//! ```text
//! program repeat 4 go right end end
//! ```
//!
//! parses to `[program [[repeat 4 [go, right]]]]`. Each line is parsed
//! independently; a malformed line yields a single
//! [`parser::parser::ParseError`] and leaves other lines unaffected.

pub mod diagnostics;
pub mod parser;
