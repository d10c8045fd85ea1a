//! `gol` - interactive Game of Life shell.
//!
//! Reads one command per line from stdin until `quit` or end of input.

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use game_of_life::{GameState, Grid, Response};
use log::{info, log};

const PROMPT: &str = "gol> ";
const ERROR: &str = "Error! ";

/// Rejected commands are already echoed on stdout
const REJECTION_LEVEL: log::Level = log::Level::Debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()))
        .init();

    let mut state = match cli.seed {
        Some(seed) => GameState::with_seed(seed),
        None => GameState::new(),
    };
    if let (Some(columns), Some(rows)) = (cli.columns, cli.rows) {
        state = state.with_grid(Grid::new(columns, rows)?);
    }

    info!("shell starting");
    run_shell(&mut state, io::stdin().lock(), io::stdout().lock(), !cli.no_prompt)?;
    info!("shell finished");
    Ok(())
}

/// Main loop: prompt, read a line, execute it, print the outcome
fn run_shell(
    state: &mut GameState,
    input: impl BufRead,
    mut output: impl Write,
    prompt: bool,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match state.run_line(&line) {
            Ok(Response::Nothing) => {}
            Ok(Response::Text(text)) => writeln!(output, "{}", text.trim_end_matches('\n'))?,
            Ok(Response::Warning(warning)) => writeln!(output, "{ERROR}{warning}")?,
            Ok(Response::Quit) => break,
            Err(err) => {
                log!(REJECTION_LEVEL, "rejected {line:?}: {err}");
                writeln!(output, "{ERROR}{err}")?;
            }
        }
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> String {
        let mut state = GameState::with_seed(3);
        let mut out = Vec::new();
        run_shell(&mut state, script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_transcript() {
        let out = session("new 3 3\nalive 1 0\nalive 1 1\nalive 1 2\ngenerate\nprint\nquit\nprint\n");
        assert_eq!(out, "Generation: 1\n...\nXXX\n...\n");
    }

    #[test]
    fn test_errors_are_prefixed() {
        let out = session("print\nfoo\n\nnew 0 1\nnew 2 2\nshape pulsar\ndead 0 0\n");
        assert_eq!(
            out,
            "Error! No active game.\n\
             Error! Invalid command.\n\
             Error! No command given\n\
             Error! Invalid arguments: columns or rows should be positive.\n\
             Error! Population doesn't fit on game board.\n\
             Error! Cell is already dead.\n"
        );
    }

    #[test]
    fn test_rejections_hidden_under_default_filter() {
        let cli = Cli::try_parse_from(["gol"]).unwrap();
        let filter: log::LevelFilter = cli.log_level.parse().unwrap();
        assert!(REJECTION_LEVEL > filter);
    }

    #[test]
    fn test_stops_at_end_of_input() {
        assert_eq!(session("new 1 1\nprint"), ".\n");
    }
}
