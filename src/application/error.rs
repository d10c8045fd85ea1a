//! Errors reported back to the shell user.

use derive_more::{Display, From};

use crate::domain::GridError;

/// A rejected shell command. The active game is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum ShellError {
    #[display("No command given")]
    NoCommand,

    #[display("Invalid command.")]
    InvalidCommand,

    #[display("No active game.")]
    NoActiveGame,

    #[display("Invalid arguments: too many arguments for command \"{_0}\".")]
    TooManyArguments(&'static str),

    #[display("Invalid arguments: too few arguments for command \"{_0}\".")]
    TooFewArguments(&'static str),

    #[display("Invalid arguments: invalid arguments for {_0}.")]
    InvalidArgument(String),

    #[display("Invalid population.")]
    UnknownShape(String),

    #[display("Cell is already alive.")]
    AlreadyAlive,

    #[display("Cell is already dead.")]
    AlreadyDead,

    #[display("{}", grid_message(_0))]
    #[from]
    Grid(GridError),
}

/// Shell wording for a rejected grid operation
fn grid_message(err: &GridError) -> String {
    match err {
        GridError::InvalidDimension { .. } => {
            "Invalid arguments: columns or rows should be positive.".to_string()
        }
        GridError::OutOfBounds { .. } => {
            "row/column index should be smaller than row/column size.".to_string()
        }
        GridError::PatternDoesNotFit { .. } => "Population doesn't fit on game board.".to_string(),
        GridError::InvalidDensity => err.to_string(),
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Grid(err) => Some(err),
            _ => None,
        }
    }
}
