use std::fmt;

use super::Op;

/// A counted BrainFuck instruction.
///
/// What `count` means depends on `op`:
///
/// * `Prev`/`Next`: cells to move.
/// * `Incr`/`Decr`: units to add or subtract.
/// * `BeginLoop`: slots to jump forward, landing just past the matching `EndLoop`.
/// * `EndLoop`: slots to jump backward, landing on the matching `BeginLoop`.
/// * `Read`/`Print`: unused, always 1.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Instr {
    pub op: Op,
    pub count: usize,
}

impl Instr {
    #[must_use]
    pub fn new(op: Op, count: usize) -> Self {
        Instr { op, count }
    }

    /// A freshly tokenized instruction, not yet merged or resolved.
    #[must_use]
    pub fn single(op: Op) -> Self {
        Self::new(op, 1)
    }
}

/// Display Instr similar to assembly.
impl fmt::Debug for Instr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.op, self.count) {
            (Op::Incr, 1) => write!(f, "INC"),
            (Op::Incr, n) => write!(f, "ADD\t0x{n:04X}"),
            (Op::Decr, 1) => write!(f, "DEC"),
            (Op::Decr, n) => write!(f, "SUB\t0x{n:04X}"),
            (Op::Next, 1) => write!(f, "NEXT"),
            (Op::Next, n) => write!(f, "NEXT\t0x{n:04X}"),
            (Op::Prev, 1) => write!(f, "PREV"),
            (Op::Prev, n) => write!(f, "PREV\t0x{n:04X}"),
            (Op::Print, _) => write!(f, "PRINT"),
            (Op::Read, _) => write!(f, "READ"),
            (Op::BeginLoop, n) => write!(f, "BEGIN\t+0x{n:04X}"),
            (Op::EndLoop, n) => write!(f, "END\t-0x{n:04X}"),
        }
    }
}
