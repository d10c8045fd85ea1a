use std::fmt;
use std::hash::{Hash, Hasher};

/// Cell is one position on the board.
/// Its coordinates are fixed at construction; only the status changes.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    column: usize,
    row: usize,
    alive: bool,
}

impl Cell {
    /// Create a dead cell at the given position
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row, alive: false }
    }

    /// Create a cell at the given position with an explicit status
    pub const fn with_status(column: usize, row: usize, alive: bool) -> Self {
        Self { column, row, alive }
    }

    pub const fn column(&self) -> usize {
        self.column
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn set_alive(&mut self) {
        self.alive = true;
    }

    pub fn set_dead(&mut self) {
        self.alive = false;
    }

    pub(crate) fn set_status(&mut self, alive: bool) {
        self.alive = alive;
    }
}

// Identity is the position; the status is not part of it.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.column == other.column && self.row == other.row
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.column.hash(state);
        self.row.hash(state);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_cell_is_dead() {
        let cell = Cell::new(3, 7);
        assert!(!cell.is_alive());
        assert_eq!(cell.column(), 3);
        assert_eq!(cell.row(), 7);
    }

    #[test]
    fn test_status_toggles() {
        let mut cell = Cell::new(0, 0);
        cell.set_alive();
        assert!(cell.is_alive());
        cell.set_alive();
        assert!(cell.is_alive());
        cell.set_dead();
        assert!(!cell.is_alive());
    }

    #[test]
    fn test_equality_ignores_status() {
        let dead = Cell::new(2, 4);
        let alive = Cell::with_status(2, 4, true);
        assert_eq!(dead, alive);
        assert_ne!(Cell::new(2, 4), Cell::new(4, 2));

        let set: HashSet<Cell> = [dead, alive].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(5, 1).to_string(), "<5, 1>");
    }
}
