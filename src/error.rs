//! Errors raised while compiling or running a program.
//!
//! Both kinds are fatal: compilation errors stop a program from ever touching
//! a tape, runtime errors halt the interpreter where they occur.

use std::io;

use thiserror::Error;

/// Failure to turn source bytes into a `Program`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("unmatched '[' at byte offset {offset}")]
    UnmatchedLoopStart { offset: usize },

    #[error("unmatched ']' at byte offset {offset}")]
    UnmatchedLoopEnd { offset: usize },

    #[error("loop nesting deeper than {max} at byte offset {offset}")]
    LoopNestingExceeded { offset: usize, max: usize },

    #[error("empty or unreadable source: {0}")]
    EmptyOrUnreadableSource(String),
}

/// Failure while executing a compiled `Program`.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("tape underflow at instruction {pc}: cannot move {count} left of cell {dp}")]
    TapeUnderflow { pc: usize, dp: usize, count: usize },

    #[error(
        "tape overflow at instruction {pc}: cannot move {count} right of cell {dp} (tape size: {capacity})"
    )]
    TapeOverflow {
        pc: usize,
        dp: usize,
        count: usize,
        capacity: usize,
    },

    #[error("i/o failure at instruction {pc}")]
    Io {
        pc: usize,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Compile(_) => 2,
            Error::Runtime(_) => 3,
        }
    }
}
