/// Standard tape size is 30000 cells.
pub const DEFAULT_TAPE_CAPACITY: usize = 30_000;

/// How deeply loops may be nested before compilation is refused.
pub const DEFAULT_MAX_LOOP_NESTING: usize = 1024;

/// What to do with a carriage return read by the `,` command.
///
/// A CR immediately followed by LF is always collapsed into a single LF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewlinePolicy {
    /// A lone CR is also turned into LF.
    #[default]
    Normalize,
    /// A lone CR is handed to the program unchanged.
    Preserve,
}

/// Options recognized by the compiler and the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of cells on the tape.
    pub tape_capacity: usize,
    /// Maximum depth of nested `[` allowed at compile time.
    pub max_loop_nesting: usize,
    /// Collapse runs of `+`, `-`, `<` and `>` into counted instructions.
    pub run_length: bool,
    /// Carriage return handling for input.
    pub newline: NewlinePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tape_capacity: DEFAULT_TAPE_CAPACITY,
            max_loop_nesting: DEFAULT_MAX_LOOP_NESTING,
            run_length: true,
            newline: NewlinePolicy::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_tape_capacity(mut self, cells: usize) -> Self {
        self.tape_capacity = cells;
        self
    }

    #[must_use]
    pub fn with_max_loop_nesting(mut self, depth: usize) -> Self {
        self.max_loop_nesting = depth;
        self
    }

    #[must_use]
    pub fn with_run_length(mut self, enabled: bool) -> Self {
        self.run_length = enabled;
        self
    }

    #[must_use]
    pub fn with_newline(mut self, policy: NewlinePolicy) -> Self {
        self.newline = policy;
        self
    }
}
