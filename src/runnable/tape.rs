/// Width of one memory cell. Arithmetic on cells wraps modulo 256.
pub type Cell = u8;

/// Fixed-size, zero-initialized memory with a data pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<Cell>,
    /// Data pointer
    dp: usize,
}

impl Tape {
    pub fn new(capacity: usize) -> Self {
        Tape {
            cells: vec![0; capacity],
            dp: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn dp(&self) -> usize {
        self.dp
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self) -> Cell {
        self.cells[self.dp]
    }

    pub fn set(&mut self, value: Cell) {
        self.cells[self.dp] = value;
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn add(&mut self, n: usize) {
        let cell = &mut self.cells[self.dp];
        *cell = cell.wrapping_add(n as Cell);
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn sub(&mut self, n: usize) {
        let cell = &mut self.cells[self.dp];
        *cell = cell.wrapping_sub(n as Cell);
    }

    /// Move the data pointer left. Returns false, leaving it untouched, if
    /// that would go below cell 0.
    pub fn move_left(&mut self, n: usize) -> bool {
        match self.dp.checked_sub(n) {
            Some(dp) => {
                self.dp = dp;
                true
            }
            None => false,
        }
    }

    /// Move the data pointer right. Returns false, leaving it untouched, if
    /// that would go past the last cell.
    pub fn move_right(&mut self, n: usize) -> bool {
        match self.dp.checked_add(n) {
            Some(dp) if dp < self.cells.len() => {
                self.dp = dp;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
        self.dp = 0;
    }
}
