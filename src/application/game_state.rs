use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::ShellError;
use crate::domain::{Grid, presets};
use crate::input::{Command, parse_line};

/// Live percentage used by `random` without an argument
pub const DEFAULT_RANDOM_PERCENT: u8 = 30;

pub const HELP: &str = "\
Game of Life - possible commands:
alive i j    set cell in column i and row j alive
clear        kill all cells and reset generations
dead i j     kill cell in column i and row j
generate     compute next generation
help         print this help
new x y      start a new game with dimensions x times y
print        print the gameboard
quit         quit the program
random [p]   fill the gameboard with p percent live cells (default 30)
resize x y   resize current game to dimensions x times y
shape name   load initial population";

/// Help text followed by one line per loadable shape
pub fn help_text() -> String {
    let shapes: String = presets::all_patterns()
        .iter()
        .map(|p| format!("\n  {:<12} {}", p.name.to_lowercase(), p.description))
        .collect();
    format!("{HELP}\npopulations:{shapes}")
}

/// What the shell should do after a command succeeded
#[derive(Debug, PartialEq, Eq)]
pub enum Response {
    Nothing,
    Text(String),
    /// The command ran but the user should hear about a likely mistake
    Warning(ShellError),
    Quit,
}

/// GameState orchestrates the simulation.
/// It holds at most one game and applies shell commands to it.
pub struct GameState {
    pub grid: Option<Grid>,
    rng: StdRng,
}

impl GameState {
    /// Create a state with no active game
    pub fn new() -> Self {
        Self {
            grid: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic random fills for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            grid: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Start a game (builder pattern)
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    fn active_grid(&mut self) -> Result<&mut Grid, ShellError> {
        self.grid.as_mut().ok_or(ShellError::NoActiveGame)
    }

    /// Parse and apply one shell line
    pub fn run_line(&mut self, line: &str) -> Result<Response, ShellError> {
        let command = parse_line(line, self.grid.is_some())?;
        self.execute(command)
    }

    /// Apply one command. On error the current game is left unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Response, ShellError> {
        debug!("executing {command:?}");
        match command {
            Command::New { columns, rows } => {
                self.grid = Some(Grid::new(columns, rows)?);
                info!("started new {columns}x{rows} game");
                Ok(Response::Nothing)
            }
            Command::Alive { column, row } => {
                let grid = self.active_grid()?;
                if grid.is_alive(column, row)? {
                    return Ok(Response::Warning(ShellError::AlreadyAlive));
                }
                grid.set_alive(column, row)?;
                Ok(Response::Nothing)
            }
            Command::Dead { column, row } => {
                let grid = self.active_grid()?;
                let was_alive = grid.is_alive(column, row)?;
                grid.set_dead(column, row)?;
                if was_alive {
                    Ok(Response::Nothing)
                } else {
                    Ok(Response::Warning(ShellError::AlreadyDead))
                }
            }
            Command::Generate => {
                let grid = self.active_grid()?;
                grid.advance_generation();
                Ok(Response::Text(format!("Generation: {}", grid.generation())))
            }
            Command::Print => {
                let grid = self.active_grid()?;
                Ok(Response::Text(grid.render()))
            }
            Command::Clear => {
                self.active_grid()?.clear();
                Ok(Response::Nothing)
            }
            Command::Resize { columns, rows } => {
                self.active_grid()?.resize(columns, rows)?;
                Ok(Response::Nothing)
            }
            Command::Shape(name) => {
                let grid = self.active_grid()?;
                let pattern = presets::find(&name).ok_or(ShellError::UnknownShape(name))?;
                pattern.load_onto(grid)?;
                Ok(Response::Nothing)
            }
            Command::Random(percent) => {
                let density = f64::from(percent.unwrap_or(DEFAULT_RANDOM_PERCENT)) / 100.0;
                let grid = self.grid.as_mut().ok_or(ShellError::NoActiveGame)?;
                grid.randomize(&mut self.rng, density)?;
                Ok(Response::Nothing)
            }
            Command::Help => Ok(Response::Text(help_text())),
            Command::Quit => Ok(Response::Quit),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
