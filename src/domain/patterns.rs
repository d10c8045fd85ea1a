use log::debug;

use super::{Grid, GridError};

/// Represents a pattern that can be loaded onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative (column, row) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Top-left (column, row) that centers the pattern on a board of the
    /// given size, or `None` when the pattern doesn't fit.
    ///
    /// Odd leftovers are split with floor division, so the pattern sits one
    /// cell closer to the top-left corner.
    pub fn placement(&self, columns: usize, rows: usize) -> Option<(usize, usize)> {
        let begin_column = (columns as isize - self.width as isize).div_euclid(2);
        let begin_row = (rows as isize - self.height as isize).div_euclid(2);

        let fits = begin_column >= 0
            && begin_row >= 0
            && begin_column as usize + self.width <= columns
            && begin_row as usize + self.height <= rows;

        fits.then_some((begin_column as usize, begin_row as usize))
    }

    /// Clear the grid and place the pattern centered on it.
    /// The grid is left untouched when the pattern doesn't fit.
    pub fn load_onto(&self, grid: &mut Grid) -> Result<(), GridError> {
        let (columns, rows) = grid.dimensions();
        let (begin_column, begin_row) = self
            .placement(columns, rows)
            .ok_or(GridError::PatternDoesNotFit { pattern: self.name })?;

        // every target is checked before the board is touched
        let targets = self
            .cells
            .iter()
            .map(|&(dx, dy)| {
                let (column, row) = (begin_column + dx, begin_row + dy);
                grid.is_alive(column, row).map(|_| (column, row))
            })
            .collect::<Result<Vec<_>, _>>()?;

        grid.clear();
        for (column, row) in targets {
            grid.set_alive(column, row)?;
        }
        debug!("loaded {} at ({begin_column}, {begin_row})", self.name);
        Ok(())
    }
}

/// The fixed shapes the shell can load
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Boat - still life
    pub fn boat() -> Pattern {
        Pattern::new(
            "Boat",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (2, 1),
                (1, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0), (2, 0),
            ]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Glider - simplest spaceship, heads towards the top-left corner
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 0), (1, 0), (2, 0),
                (0, 1),
                (1, 2),
            ]
        )
    }

    /// Lightweight spaceship, heads left
    pub fn spaceship() -> Pattern {
        Pattern::new(
            "Spaceship",
            "Lightweight spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ]
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            vec![
                // Top
                (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
                // Upper middle
                (0, 2), (5, 2), (7, 2), (12, 2),
                (0, 3), (5, 3), (7, 3), (12, 3),
                (0, 4), (5, 4), (7, 4), (12, 4),
                // Center
                (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
                (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
                // Lower middle
                (0, 8), (5, 8), (7, 8), (12, 8),
                (0, 9), (5, 9), (7, 9), (12, 9),
                (0, 10), (5, 10), (7, 10), (12, 10),
                // Bottom
                (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            boat(),
            blinker(),
            toad(),
            glider(),
            spaceship(),
            pulsar(),
        ]
    }

    /// Look a pattern up by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}
