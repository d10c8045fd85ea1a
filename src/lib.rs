// Domain layer - Core business logic
pub mod domain;

// Application layer - Command dispatch over the active game
pub mod application;

// Infrastructure layer - Shell input parsing
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, Pattern, presets};
pub use application::{GameState, Response, ShellError};
pub use input::{Command, parse_line};
