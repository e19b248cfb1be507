use std::fmt;
use std::ops::Index;
use std::slice;

use tracing::{debug, trace};

use super::loop_stack::{LoopStack, OpenLoop};
use super::{Instr, Op};
use crate::config::Config;
use crate::error::CompileError;

/// A compiled, immutable sequence of instructions.
#[derive(Clone, PartialEq, Eq)]
pub struct Program {
    data: Vec<Instr>,
}

impl Program {
    /// Compile raw source bytes.
    ///
    /// Comment bytes are dropped, runs of `+`, `-`, `<` and `>` are collapsed
    /// when `config.run_length` is set, and every loop gets its jump
    /// displacements filled in so the interpreter never searches for brackets.
    pub fn compile(source: &[u8], config: &Config) -> Result<Self, CompileError> {
        if source.is_empty() {
            return Err(CompileError::EmptyOrUnreadableSource(
                "source contains no bytes".to_string(),
            ));
        }

        let mut data: Vec<Instr> = Vec::new();
        let mut loops = LoopStack::new(config.max_loop_nesting);
        let mut deepest = 0;

        for (offset, &byte) in source.iter().enumerate() {
            let Some(op) = Op::from_byte(byte) else {
                continue;
            };

            // Extend the previous instruction instead of pushing an identical one.
            if config.run_length && op.is_collapsible() {
                if let Some(last) = data.last_mut() {
                    if last.op == op {
                        last.count += 1;
                        continue;
                    }
                }
            }

            let index = data.len();

            match op {
                Op::BeginLoop => {
                    loops.push(OpenLoop { index, offset })?;
                    deepest = deepest.max(loops.depth());
                    data.push(Instr::single(op));
                }
                Op::EndLoop => {
                    let start = loops.pop(offset)?;
                    let distance = index - start.index;

                    // Land just past the `]` when skipping, on the `[` when repeating.
                    data[start.index].count = distance + 1;
                    data.push(Instr::new(op, distance));

                    trace!(start = start.index, end = index, "resolved loop");
                }
                _ => data.push(Instr::single(op)),
            }
        }

        loops.finish()?;

        debug!(
            source_bytes = source.len(),
            instructions = data.len(),
            deepest_loop = deepest,
            run_length = config.run_length,
            "compiled program"
        );

        Ok(Program { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instr> {
        self.data.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Instr> {
        self.data.iter()
    }
}

impl Index<usize> for Program {
    type Output = Instr;

    fn index(&self, index: usize) -> &Instr {
        &self.data[index]
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Addr\tInstr\tOperands")?;

        for (pos, instr) in self.data.iter().enumerate() {
            writeln!(f, "0x{pos:04X}\t{instr:?}")?;
        }

        writeln!(f)
    }
}
