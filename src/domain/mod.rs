mod cell;
mod error;
mod grid;
pub mod rules;
mod patterns;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
