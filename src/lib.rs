//! BrainFuck compiler and interpreter.
//!
//! Source bytes are compiled into a flat `Program` of counted instructions
//! with pre-resolved loop jumps, which an `Interpreter` then runs against a
//! bounded tape of `u8` cells.
//!
//! ```no_run
//! let program = bfrun::compile(b"++++++++[>++++++++<-]>+.")?;
//! bfrun::execute(program, 30_000)?;
//! # Ok::<(), bfrun::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod runnable;

use std::io::{Read, Write};

pub use config::{Config, NewlinePolicy};
pub use error::{CompileError, Error, RuntimeError};
pub use parser::{Instr, Op, Program, compile};
pub use runnable::int::Interpreter;

/// Run a compiled program on a tape of `tape_capacity` cells, using stdin and
/// stdout for `,` and `.`.
pub fn execute(program: Program, tape_capacity: usize) -> Result<(), RuntimeError> {
    let config = Config::default().with_tape_capacity(tape_capacity);
    Interpreter::new(program, &config).run()
}

/// Run a compiled program with explicit configuration and I/O.
pub fn execute_with(
    program: Program,
    config: &Config,
    reader: Box<dyn Read>,
    writer: Box<dyn Write>,
) -> Result<(), RuntimeError> {
    Interpreter::with_io(program, config, reader, writer).run()
}

/// Compile and run `source` in one go.
pub fn run_source(
    source: &[u8],
    config: &Config,
    reader: Box<dyn Read>,
    writer: Box<dyn Write>,
) -> Result<(), Error> {
    let program = Program::compile(source, config)?;
    execute_with(program, config, reader, writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runnable::SharedBuffer;
    use std::io;

    #[test]
    fn run_source_reports_both_error_kinds() {
        let config = Config::default();

        let err = run_source(b"]", &config, Box::new(io::empty()), Box::new(io::sink()));
        assert!(matches!(
            err,
            Err(Error::Compile(CompileError::UnmatchedLoopEnd { offset: 0 }))
        ));

        let err = run_source(b"<", &config, Box::new(io::empty()), Box::new(io::sink()));
        assert!(matches!(
            err,
            Err(Error::Runtime(RuntimeError::TapeUnderflow { .. }))
        ));
    }

    #[test]
    fn execute_with_writes_to_the_given_sink() {
        let config = Config::default().with_tape_capacity(8);
        let program = compile(b"++++++++[>++++++++<-]>+.").unwrap();
        let shared_buffer = SharedBuffer::new();

        execute_with(
            program,
            &config,
            Box::new(io::empty()),
            Box::new(shared_buffer.clone()),
        )
        .unwrap();

        assert_eq!(shared_buffer.get_content(), b"A");
    }

    #[test]
    fn zero_capacity_is_rejected_at_run_time() {
        let config = Config::default().with_tape_capacity(0);
        let program = compile(b"+++.").unwrap();
        let shared_buffer = SharedBuffer::new();

        let result = execute_with(
            program,
            &config,
            Box::new(io::empty()),
            Box::new(shared_buffer.clone()),
        );

        assert!(matches!(
            result,
            Err(RuntimeError::TapeOverflow { capacity: 0, .. })
        ));
        assert!(shared_buffer.get_content().is_empty());
    }

    #[test]
    fn lone_brackets_fail_to_compile() {
        assert_eq!(
            compile(b"["),
            Err(CompileError::UnmatchedLoopStart { offset: 0 })
        );
        assert_eq!(
            compile(b"]"),
            Err(CompileError::UnmatchedLoopEnd { offset: 0 })
        );
    }
}
