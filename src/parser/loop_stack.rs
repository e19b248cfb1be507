use crate::error::CompileError;

/// A `[` waiting for its `]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpenLoop {
    /// Index of the `BeginLoop` instruction.
    pub index: usize,
    /// Byte offset of the `[` in the source.
    pub offset: usize,
}

/// Depth-limited stack of loops still open during compilation.
#[derive(Debug)]
pub struct LoopStack {
    open: Vec<OpenLoop>,
    max_depth: usize,
}

impl LoopStack {
    pub fn new(max_depth: usize) -> Self {
        LoopStack {
            open: Vec::new(),
            max_depth,
        }
    }

    pub fn push(&mut self, pending: OpenLoop) -> Result<(), CompileError> {
        if self.open.len() >= self.max_depth {
            return Err(CompileError::LoopNestingExceeded {
                offset: pending.offset,
                max: self.max_depth,
            });
        }

        self.open.push(pending);
        Ok(())
    }

    /// Close the innermost loop. `offset` is where the `]` was found.
    pub fn pop(&mut self, offset: usize) -> Result<OpenLoop, CompileError> {
        self.open
            .pop()
            .ok_or(CompileError::UnmatchedLoopEnd { offset })
    }

    /// Consume the stack once the source is exhausted.
    pub fn finish(self) -> Result<(), CompileError> {
        match self.open.last() {
            Some(pending) => Err(CompileError::UnmatchedLoopStart {
                offset: pending.offset,
            }),
            None => Ok(()),
        }
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(index: usize) -> OpenLoop {
        OpenLoop {
            index,
            offset: index * 2,
        }
    }

    #[test]
    fn pops_innermost_first() {
        let mut stack = LoopStack::new(4);
        stack.push(open(0)).unwrap();
        stack.push(open(5)).unwrap();

        assert_eq!(stack.pop(10).unwrap(), open(5));
        assert_eq!(stack.pop(11).unwrap(), open(0));
        assert_eq!(stack.depth(), 0);
        assert!(stack.finish().is_ok());
    }

    #[test]
    fn refuses_to_grow_past_max_depth() {
        let mut stack = LoopStack::new(2);
        stack.push(open(0)).unwrap();
        stack.push(open(1)).unwrap();

        assert_eq!(
            stack.push(open(2)),
            Err(CompileError::LoopNestingExceeded { offset: 4, max: 2 })
        );
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn empty_pop_is_an_unmatched_end() {
        let mut stack = LoopStack::new(1);
        assert_eq!(
            stack.pop(9),
            Err(CompileError::UnmatchedLoopEnd { offset: 9 })
        );
    }

    #[test]
    fn leftover_loop_is_an_unmatched_start() {
        let mut stack = LoopStack::new(8);
        stack.push(open(1)).unwrap();
        stack.push(open(3)).unwrap();

        assert_eq!(
            stack.finish(),
            Err(CompileError::UnmatchedLoopStart { offset: 6 })
        );
    }
}
