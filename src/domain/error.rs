//! Error types for grid operations.

use derive_more::{Display, Error};

/// Failure of a grid or pattern operation.
///
/// Every failure leaves the grid exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Columns or rows were zero on create or resize.
    #[display("Number of columns and rows must be positive (got {columns}x{rows})")]
    InvalidDimension { columns: usize, rows: usize },

    /// A coordinate lies outside the current extent.
    #[display("Cell ({column}, {row}) is outside the {columns}x{rows} board")]
    OutOfBounds {
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },

    /// The pattern cannot be centered on the board.
    #[display("Population {pattern} doesn't fit on game board")]
    PatternDoesNotFit { pattern: &'static str },

    /// A random fill density outside 0.0..=1.0.
    #[display("Density must lie between 0 and 1")]
    InvalidDensity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        let err = GridError::InvalidDimension { columns: 0, rows: 4 };
        assert_eq!(
            err.to_string(),
            "Number of columns and rows must be positive (got 0x4)"
        );

        let err = GridError::OutOfBounds { column: 5, row: 1, columns: 5, rows: 5 };
        assert_eq!(err.to_string(), "Cell (5, 1) is outside the 5x5 board");

        let err = GridError::PatternDoesNotFit { pattern: "Pulsar" };
        assert_eq!(err.to_string(), "Population Pulsar doesn't fit on game board");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&GridError::InvalidDensity);
    }
}
