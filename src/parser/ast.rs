// AST (Abstract Syntax Tree) definitions for the robot-command language

use serde::Serialize;
use std::fmt;

/// A complete program: `program <command list>`.
///
/// Renders as `[program <body>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub body: CommandList,
}

/// An ordered sequence of commands, terminated in the source by `end`.
///
/// Renders as the comma-separated list of its children in brackets,
/// e.g. `[go, right]`; an empty list renders as `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandList {
    pub commands: Vec<Command>,
}

/// A single command: a repeat block or a primitive instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Repeat(Repeat),
    Primitive(Primitive),
}

/// `repeat <count> <command list>`; the body may itself contain
/// further repeat commands, to any depth.
///
/// Renders as `[repeat <count> <body>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repeat {
    pub count: i32,
    pub body: CommandList,
}

/// A leaf instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Go,
    Right,
    Left,
}

impl Primitive {
    /// The keyword this instruction is written as in source.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Go => "go",
            Primitive::Right => "right",
            Primitive::Left => "left",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[program {}]", self.body)
    }
}

impl fmt::Display for CommandList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", command)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Repeat(repeat) => write!(f, "{}", repeat),
            Command::Primitive(primitive) => write!(f, "{}", primitive),
        }
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[repeat {} {}]", self.count, self.body)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
