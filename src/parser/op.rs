/// One of the eight BrainFuck primitives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Shift the data pointer to the left.
    Prev,
    /// Shift the data pointer to the right.
    Next,
    /// Add to the current memory cell.
    Incr,
    /// Remove from the current memory cell.
    Decr,
    /// Skip past the matching `]` if the current cell is 0.
    BeginLoop,
    /// Return to the matching `[` if the current cell is not 0.
    EndLoop,
    /// Read one byte into the current cell.
    Read,
    /// Write the current cell as one byte.
    Print,
}

impl Op {
    /// Map a source byte onto an operation.
    ///
    /// Every byte outside `<>+-[],.` is a comment and yields `None`.
    #[must_use]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'<' => Some(Op::Prev),
            b'>' => Some(Op::Next),
            b'+' => Some(Op::Incr),
            b'-' => Some(Op::Decr),
            b'[' => Some(Op::BeginLoop),
            b']' => Some(Op::EndLoop),
            b',' => Some(Op::Read),
            b'.' => Some(Op::Print),
            _ => None,
        }
    }

    /// Whether consecutive occurrences may be merged into one counted instruction.
    #[must_use]
    pub fn is_collapsible(self) -> bool {
        matches!(self, Op::Prev | Op::Next | Op::Incr | Op::Decr)
    }
}
