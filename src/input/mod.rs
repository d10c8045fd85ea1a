//! Turns a line typed at the shell into a typed [`Command`].

use crate::application::ShellError;

/// Commands in matching order: a prefix selects the first name it starts.
const COMMAND_NAMES: [(&str, CommandKind); 11] = [
    ("NEW", CommandKind::New),
    ("ALIVE", CommandKind::Alive),
    ("DEAD", CommandKind::Dead),
    ("GENERATE", CommandKind::Generate),
    ("PRINT", CommandKind::Print),
    ("CLEAR", CommandKind::Clear),
    ("RESIZE", CommandKind::Resize),
    ("SHAPE", CommandKind::Shape),
    ("RANDOM", CommandKind::Random),
    ("HELP", CommandKind::Help),
    ("QUIT", CommandKind::Quit),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CommandKind {
    New,
    Alive,
    Dead,
    Generate,
    Print,
    Clear,
    Resize,
    Shape,
    Random,
    Help,
    Quit,
}

/// A fully validated shell command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    New { columns: usize, rows: usize },
    Alive { column: usize, row: usize },
    Dead { column: usize, row: usize },
    Generate,
    Print,
    Clear,
    Resize { columns: usize, rows: usize },
    Shape(String),
    /// Fill with the given percentage of live cells
    Random(Option<u8>),
    Help,
    Quit,
}

impl CommandKind {
    /// Everything but starting, help and quitting works on the active game
    const fn needs_game(self) -> bool {
        !matches!(self, CommandKind::New | CommandKind::Help | CommandKind::Quit)
    }
}

/// Parse one input line.
/// A missing game is reported before any problem with the arguments.
pub fn parse_line(line: &str, has_game: bool) -> Result<Command, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&head, args) = tokens.split_first().ok_or(ShellError::NoCommand)?;
    let (name, kind) = match_command(head).ok_or(ShellError::InvalidCommand)?;
    if kind.needs_game() && !has_game {
        return Err(ShellError::NoActiveGame);
    }

    match kind {
        CommandKind::New => {
            let (columns, rows) = two_numbers(name, args, "columns or rows")?;
            Ok(Command::New { columns, rows })
        }
        CommandKind::Alive => {
            let (column, row) = two_numbers(name, args, "column or row")?;
            Ok(Command::Alive { column, row })
        }
        CommandKind::Dead => {
            let (column, row) = two_numbers(name, args, "column or row")?;
            Ok(Command::Dead { column, row })
        }
        CommandKind::Resize => {
            let (columns, rows) = two_numbers(name, args, "columns or rows")?;
            Ok(Command::Resize { columns, rows })
        }
        CommandKind::Shape => {
            arity(name, args, 1)?;
            Ok(Command::Shape(args[0].to_string()))
        }
        CommandKind::Random => match args {
            [] => Ok(Command::Random(None)),
            [percent] => percent
                .parse::<u8>()
                .ok()
                .filter(|p| *p <= 100 && is_numeric(percent))
                .map(|p| Command::Random(Some(p)))
                .ok_or_else(|| ShellError::InvalidArgument("percentage".to_string())),
            _ => Err(ShellError::TooManyArguments(name)),
        },
        CommandKind::Generate => arity(name, args, 0).map(|_| Command::Generate),
        CommandKind::Print => arity(name, args, 0).map(|_| Command::Print),
        CommandKind::Clear => arity(name, args, 0).map(|_| Command::Clear),
        CommandKind::Help => arity(name, args, 0).map(|_| Command::Help),
        CommandKind::Quit => arity(name, args, 0).map(|_| Command::Quit),
    }
}

/// Case-insensitive prefix match against the command table
fn match_command(token: &str) -> Option<(&'static str, CommandKind)> {
    let upper = token.to_uppercase();
    COMMAND_NAMES
        .iter()
        .find(|(name, _)| name.starts_with(&upper))
        .copied()
}

fn arity(name: &'static str, args: &[&str], expected: usize) -> Result<(), ShellError> {
    match args.len() {
        n if n > expected => Err(ShellError::TooManyArguments(name)),
        n if n < expected => Err(ShellError::TooFewArguments(name)),
        _ => Ok(()),
    }
}

fn two_numbers(
    name: &'static str,
    args: &[&str],
    what: &str,
) -> Result<(usize, usize), ShellError> {
    arity(name, args, 2)?;
    match (number(args[0]), number(args[1])) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ShellError::InvalidArgument(what.to_string())),
    }
}

/// Unsigned decimal digits only; signs and overflow are rejected
fn number(token: &str) -> Option<usize> {
    if is_numeric(token) { token.parse().ok() } else { None }
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
