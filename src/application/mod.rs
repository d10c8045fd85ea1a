mod error;
mod game_state;

pub use error::ShellError;
pub use game_state::{DEFAULT_RANDOM_PERCENT, GameState, HELP, Response, help_text};
