mod instr;
mod loop_stack;
mod op;
mod program;
#[cfg(test)]
mod test_source;

pub use self::instr::Instr;
pub use self::op::Op;
pub use self::program::Program;
#[cfg(test)]
pub use self::test_source::generate_source;

use crate::config::Config;
use crate::error::CompileError;

/// Compile source bytes with the default configuration.
pub fn compile(source: &[u8]) -> Result<Program, CompileError> {
    Program::compile(source, &Config::default())
}
