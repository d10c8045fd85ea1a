use std::collections::HashSet;
use std::fmt;

use log::debug;
use rand::Rng;

use super::{Cell, GridError, rules};

/// Grid owns the bounded board and advances it one generation at a time.
/// Edges are hard walls: there is no wraparound.
#[derive(Clone, Debug)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
    generation: u64,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(columns: usize, rows: usize) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::InvalidDimension { columns, rows });
        }
        debug!("creating {columns}x{rows} grid");
        Ok(Self {
            columns,
            rows,
            cells: Self::fresh_cells(columns, rows, |_, _| false),
            generation: 0,
        })
    }

    /// Build a fully populated row-major cell vector
    fn fresh_cells(
        columns: usize,
        rows: usize,
        status: impl Fn(usize, usize) -> bool,
    ) -> Vec<Cell> {
        (0..rows)
            .flat_map(|row| (0..columns).map(move |column| (column, row)))
            .map(|(column, row)| Cell::with_status(column, row, status(column, row)))
            .collect()
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Get grid dimensions as (columns, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    /// Convert 2D coordinates to 1D index, rejecting anything off the board
    fn index(&self, column: usize, row: usize) -> Result<usize, GridError> {
        if column < self.columns && row < self.rows {
            Ok(row * self.columns + column)
        } else {
            Err(GridError::OutOfBounds {
                column,
                row,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    pub fn is_alive(&self, column: usize, row: usize) -> Result<bool, GridError> {
        let idx = self.index(column, row)?;
        Ok(self.cells[idx].is_alive())
    }

    /// Set a cell alive. Idempotent.
    pub fn set_alive(&mut self, column: usize, row: usize) -> Result<(), GridError> {
        let idx = self.index(column, row)?;
        self.cells[idx].set_alive();
        Ok(())
    }

    /// Set a cell dead. Idempotent.
    pub fn set_dead(&mut self, column: usize, row: usize) -> Result<(), GridError> {
        let idx = self.index(column, row)?;
        self.cells[idx].set_dead();
        Ok(())
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::set_dead);
        self.generation = 0;
    }

    /// Number of alive cells in the 3x3 block centered on (column, row),
    /// the cell itself included. The block is clipped at the edges.
    pub fn block_count(&self, column: usize, row: usize) -> Result<usize, GridError> {
        self.index(column, row)?;
        Ok(self.clipped_block_count(column, row))
    }

    fn clipped_block_count(&self, column: usize, row: usize) -> usize {
        let left = column.saturating_sub(1);
        let right = (column + 1).min(self.columns - 1);
        let up = row.saturating_sub(1);
        let down = (row + 1).min(self.rows - 1);

        (up..=down)
            .flat_map(|y| (left..=right).map(move |x| (x, y)))
            .filter(|&(x, y)| self.cells[y * self.columns + x].is_alive())
            .count()
    }

    /// Advance one generation.
    /// All block counts are taken from the current board before any cell changes.
    pub fn advance_generation(&mut self) {
        let counts: Vec<usize> = self
            .cells
            .iter()
            .map(|cell| self.clipped_block_count(cell.column(), cell.row()))
            .collect();

        self.cells
            .iter_mut()
            .zip(counts)
            .for_each(|(cell, count)| cell.set_status(rules::next_state(cell.is_alive(), count)));

        self.generation += 1;
        debug!("advanced to generation {}", self.generation);
    }

    /// Resize the board, keeping the status of every position present in
    /// both the old and new extent. New positions start dead; the
    /// generation counter is untouched.
    pub fn resize(&mut self, columns: usize, rows: usize) -> Result<(), GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::InvalidDimension { columns, rows });
        }

        let cells = Self::fresh_cells(columns, rows, |column, row| {
            column < self.columns
                && row < self.rows
                && self.cells[row * self.columns + column].is_alive()
        });

        debug!(
            "resized grid from {}x{} to {columns}x{rows}",
            self.columns, self.rows
        );
        self.cells = cells;
        self.columns = columns;
        self.rows = rows;
        Ok(())
    }

    /// Randomize grid, each cell alive with probability `density`.
    /// Resets the generation counter.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity);
        }
        self.cells
            .iter_mut()
            .for_each(|cell| cell.set_status(rng.random_bool(density)));
        self.generation = 0;
        Ok(())
    }

    /// Iterate over all cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Snapshot of every alive cell
    pub fn living_cells(&self) -> HashSet<Cell> {
        self.iter_cells().filter(|cell| cell.is_alive()).copied().collect()
    }

    pub fn population(&self) -> usize {
        self.iter_cells().filter(|cell| cell.is_alive()).count()
    }

    /// Text form of the board: one line per row, `X` alive, `.` dead
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns) {
            for cell in row {
                f.write_str(if cell.is_alive() { "X" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with(columns: usize, rows: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(columns, rows).unwrap();
        for &(column, row) in alive {
            grid.set_alive(column, row).unwrap();
        }
        grid
    }

    fn coords(grid: &Grid) -> HashSet<(usize, usize)> {
        grid.living_cells()
            .iter()
            .map(|cell| (cell.column(), cell.row()))
            .collect()
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.iter_cells().count(), 12);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimension { columns: 0, rows: 5 }
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(0, 0).is_err());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(3, 2).unwrap();
        assert!(matches!(grid.is_alive(3, 0), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(grid.set_alive(0, 2), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(grid.set_dead(9, 9), Err(GridError::OutOfBounds { .. })));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_set_alive_and_dead() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_alive(2, 1).unwrap();
        grid.set_alive(2, 1).unwrap();
        assert!(grid.is_alive(2, 1).unwrap());
        assert_eq!(grid.population(), 1);

        grid.set_dead(2, 1).unwrap();
        grid.set_dead(2, 1).unwrap();
        assert!(!grid.is_alive(2, 1).unwrap());
    }

    #[test]
    fn test_all_dead_stays_dead() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.advance_generation();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut grid = grid_with(3, 3, &[(1, 1)]);
        grid.advance_generation();
        assert!(grid.living_cells().is_empty());
    }

    #[test]
    fn test_block_count_clipped_at_corner() {
        let grid = grid_with(3, 3, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2)]);
        assert_eq!(grid.block_count(0, 0).unwrap(), 4);
        assert_eq!(grid.block_count(2, 2).unwrap(), 2);
        assert_eq!(grid.block_count(1, 1).unwrap(), 5);
        assert!(grid.block_count(3, 0).is_err());
    }

    #[test]
    fn test_full_board_keeps_only_corners() {
        let all: Vec<_> = (0..3).flat_map(|r| (0..3).map(move |c| (c, r))).collect();
        let mut grid = grid_with(3, 3, &all);
        grid.advance_generation();
        let expected: HashSet<_> = [(0, 0), (2, 0), (0, 2), (2, 2)].into_iter().collect();
        assert_eq!(coords(&grid), expected);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let start = coords(&grid);

        grid.advance_generation();
        let vertical: HashSet<_> = [(2, 1), (2, 2), (2, 3)].into_iter().collect();
        assert_eq!(coords(&grid), vertical);

        grid.advance_generation();
        assert_eq!(coords(&grid), start);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn test_no_wraparound() {
        // a blinker lying on the top edge can't grow past it
        let mut grid = grid_with(3, 3, &[(0, 0), (1, 0), (2, 0)]);
        grid.advance_generation();
        let expected: HashSet<_> = [(1, 0), (1, 1)].into_iter().collect();
        assert_eq!(coords(&grid), expected);
    }

    #[test]
    fn test_clear_resets_generation() {
        let mut grid = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        grid.advance_generation();
        grid.clear();
        assert!(grid.living_cells().is_empty());
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_resize_grow_both() {
        let mut grid = grid_with(2, 2, &[(0, 0), (1, 1)]);
        grid.advance_generation();
        grid.set_alive(0, 0).unwrap();
        grid.resize(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.generation(), 1);
        assert!(grid.is_alive(0, 0).unwrap());
        assert!(!grid.is_alive(3, 2).unwrap());
        assert_eq!(grid.iter_cells().count(), 12);
    }

    #[test]
    fn test_resize_shrink_both() {
        let mut grid = grid_with(4, 4, &[(0, 0), (3, 3), (1, 2)]);
        grid.resize(2, 3).unwrap();
        let expected: HashSet<_> = [(0, 0), (1, 2)].into_iter().collect();
        assert_eq!(coords(&grid), expected);
    }

    #[test]
    fn test_resize_mixed_directions() {
        let mut grid = grid_with(4, 2, &[(3, 1), (1, 0)]);
        grid.resize(2, 5).unwrap();
        assert_eq!(coords(&grid), [(1, 0)].into_iter().collect());
        assert!(!grid.is_alive(1, 4).unwrap());

        let mut grid = grid_with(2, 4, &[(1, 3), (0, 1)]);
        grid.resize(5, 2).unwrap();
        assert_eq!(coords(&grid), [(0, 1)].into_iter().collect());
        assert!(!grid.is_alive(4, 1).unwrap());
    }

    #[test]
    fn test_resize_rejects_zero_and_keeps_state() {
        let mut grid = grid_with(3, 3, &[(1, 1)]);
        assert!(grid.resize(0, 3).is_err());
        assert_eq!(grid.dimensions(), (3, 3));
        assert!(grid.is_alive(1, 1).unwrap());
    }

    #[test]
    fn test_resized_cells_know_their_position() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.resize(3, 2).unwrap();
        for (idx, cell) in grid.iter_cells().enumerate() {
            assert_eq!(cell.column(), idx % 3);
            assert_eq!(cell.row(), idx / 3);
        }
    }

    #[test]
    fn test_render() {
        let grid = grid_with(3, 2, &[(0, 0), (2, 1)]);
        assert_eq!(grid.render(), "X..\n..X\n");
        assert_eq!(grid.render(), format!("{grid}"));
    }

    #[test]
    fn test_randomize_is_seeded() {
        let mut a = Grid::new(20, 20).unwrap();
        let mut b = Grid::new(20, 20).unwrap();
        a.advance_generation();
        a.randomize(&mut StdRng::seed_from_u64(7), 0.3).unwrap();
        b.randomize(&mut StdRng::seed_from_u64(7), 0.3).unwrap();
        assert_eq!(a.render(), b.render());
        assert_eq!(a.generation(), 0);
    }

    #[test]
    fn test_randomize_extremes() {
        let mut grid = Grid::new(6, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        grid.randomize(&mut rng, 1.0).unwrap();
        assert_eq!(grid.population(), 36);
        grid.randomize(&mut rng, 0.0).unwrap();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.randomize(&mut rng, 1.5), Err(GridError::InvalidDensity));
    }

    proptest! {
        #[test]
        fn prop_set_then_query(columns in 1usize..12, rows in 1usize..12, c in 0usize..12, r in 0usize..12) {
            prop_assume!(c < columns && r < rows);
            let mut grid = Grid::new(columns, rows).unwrap();
            grid.set_alive(c, r).unwrap();
            prop_assert!(grid.is_alive(c, r).unwrap());
            grid.set_dead(c, r).unwrap();
            prop_assert!(!grid.is_alive(c, r).unwrap());
        }

        #[test]
        fn prop_resize_round_trip_keeps_overlap(
            alive in proptest::collection::vec((0usize..8, 0usize..8), 0..20),
            columns in 1usize..12,
            rows in 1usize..12,
        ) {
            let original = grid_with(8, 8, &alive);
            let mut grid = original.clone();
            grid.resize(columns, rows).unwrap();
            grid.resize(8, 8).unwrap();
            for cell in original.iter_cells() {
                let (c, r) = (cell.column(), cell.row());
                let expected = c < columns && r < rows && cell.is_alive();
                prop_assert_eq!(grid.is_alive(c, r).unwrap(), expected);
            }
        }

        #[test]
        fn prop_clear_empties_any_board(alive in proptest::collection::vec((0usize..6, 0usize..6), 0..36), steps in 0usize..4) {
            let mut grid = grid_with(6, 6, &alive);
            for _ in 0..steps {
                grid.advance_generation();
            }
            grid.clear();
            prop_assert!(grid.living_cells().is_empty());
            prop_assert_eq!(grid.generation(), 0);
        }
    }
}
