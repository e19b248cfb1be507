use std::io::{self, Read, Write};

use tracing::{debug, warn};

use super::input::Input;
use crate::config::Config;
use crate::error::RuntimeError;
use crate::parser::{Op, Program};
use crate::runnable::Tape;

/// BrainFuck virtual machine
pub struct Interpreter {
    program: Program,
    tape: Tape,
    /// Program counter
    pc: usize,
    /// Instructions executed since the last reset.
    steps: u64,
    /// Reader used by brainfuck's , command
    io_read: Input,
    /// Writer used by brainfuck's . command
    io_write: Box<dyn Write>,
}

impl Interpreter {
    /// Run against stdin and stdout.
    pub fn new(program: Program, config: &Config) -> Self {
        Self::with_io(
            program,
            config,
            Box::new(io::stdin()),
            Box::new(io::stdout()),
        )
    }

    pub fn with_io(
        program: Program,
        config: &Config,
        reader: Box<dyn Read>,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            program,
            tape: Tape::new(config.tape_capacity),
            pc: 0,
            steps: 0,
            io_read: Input::new(reader, config.newline),
            io_write: writer,
        }
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Execute a single instruction on the VM.
    ///
    /// Returns Ok(true) to continue execution, Ok(false) when the program has
    /// terminated normally, or Err(_) on a fatal error. After an error the
    /// machine is left exactly as it was before the faulting instruction.
    pub fn step(&mut self) -> Result<bool, RuntimeError> {
        // Terminate if the program counter is outside of the program.
        let Some(&instr) = self.program.get(self.pc) else {
            return Ok(false);
        };
        let pc = self.pc;

        // Every instruction reads or moves over a cell, and there are none.
        if self.tape.capacity() == 0 {
            return Err(RuntimeError::TapeOverflow {
                pc,
                dp: 0,
                count: 0,
                capacity: 0,
            });
        }

        match instr.op {
            Op::Incr => self.tape.add(instr.count),
            Op::Decr => self.tape.sub(instr.count),
            Op::Next => {
                if !self.tape.move_right(instr.count) {
                    return Err(RuntimeError::TapeOverflow {
                        pc,
                        dp: self.tape.dp(),
                        count: instr.count,
                        capacity: self.tape.capacity(),
                    });
                }
            }
            Op::Prev => {
                if !self.tape.move_left(instr.count) {
                    return Err(RuntimeError::TapeUnderflow {
                        pc,
                        dp: self.tape.dp(),
                        count: instr.count,
                    });
                }
            }
            Op::Print => {
                self.io_write
                    .write_all(&[self.tape.get()])
                    .map_err(|source| RuntimeError::Io { pc, source })?;
            }
            Op::Read => {
                let byte = self
                    .io_read
                    .read_byte()
                    .map_err(|source| RuntimeError::Io { pc, source })?;
                // End of input reads as 0.
                self.tape.set(byte.unwrap_or(0));
            }
            Op::BeginLoop => {
                if self.tape.get() == 0 {
                    self.steps += 1;
                    self.pc += instr.count;
                    return Ok(true);
                }
            }
            Op::EndLoop => {
                if self.tape.get() != 0 {
                    self.steps += 1;
                    self.pc -= instr.count;
                    return Ok(true);
                }
            }
        }

        self.steps += 1;
        self.pc += 1;
        Ok(true)
    }

    /// Rewind to the first instruction with a fresh tape.
    pub fn reset(&mut self) {
        self.tape.clear();
        self.pc = 0;
        self.steps = 0;
    }

    fn flush(&mut self) -> Result<(), RuntimeError> {
        self.io_write
            .flush()
            .map_err(|source| RuntimeError::Io {
                pc: self.pc,
                source,
            })
    }

    /// Run until the program ends or a fatal error occurs.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        debug!(
            instructions = self.program.len(),
            tape = self.tape.capacity(),
            "starting execution"
        );

        let result = loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(error) => break Err(error),
            }
        };

        // Output produced before a fault still reaches the writer.
        let flushed = self.flush();

        match &result {
            Ok(()) => debug!(steps = self.steps, "execution finished"),
            Err(error) => warn!(steps = self.steps, %error, "execution halted"),
        }

        result.and(flushed)
    }
}
