//! Strictly OXO - terminal driver
//!
//! Reads one move or board command per line from stdin and prints the board
//! after each.

#![warn(missing_docs)]

mod cli;
mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use input::{DriverCommand, Input};
use std::io::{self, BufRead, Write};
use strictly_oxo::{Controller, EditOutcome, GameConfig};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Board goes to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut game = build_game(&cli)?;

    info!(
        rows = game.state().row_count(),
        columns = game.state().column_count(),
        players = game.state().player_count(),
        "Starting Strictly OXO"
    );

    run(&mut game, io::stdin().lock(), io::stdout().lock())
}

/// Builds the game from the config file (if any) and command-line overrides.
#[instrument(skip(cli))]
fn build_game(cli: &Cli) -> Result<Controller> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    config = config.with_dimensions(cli.rows, cli.columns);
    if let Some(threshold) = cli.win_threshold {
        config = config.with_win_threshold(threshold);
    }
    if let Some(players) = &cli.players {
        config = config.with_players(players.chars().filter(|c| !c.is_whitespace()).collect());
    }
    debug!(?config, "Resolved game config");
    config.build().context("Invalid game setup")
}

/// Main input loop.
fn run(game: &mut Controller, input: impl BufRead, mut out: impl Write) -> Result<()> {
    print_game(game, &mut out)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match Input::parse(&line) {
            Input::Command(DriverCommand::Quit) => break,
            Input::Command(command) => {
                if apply_command(game, command) == EditOutcome::Refused {
                    writeln!(out, "Cannot {} right now", command)?;
                }
            }
            Input::Move(command) => {
                if let Err(err) = game.handle_command(&command) {
                    warn!(%command, %err, "Move rejected");
                    writeln!(out, "{}", err)?;
                }
            }
        }

        print_game(game, &mut out)?;
    }

    info!(status = %game.state().status(), "Session ended");
    Ok(())
}

/// Forwards a board edit to the controller.
fn apply_command(game: &mut Controller, command: DriverCommand) -> EditOutcome {
    match command {
        DriverCommand::AddRow => game.add_row(),
        DriverCommand::RemoveRow => game.remove_row(),
        DriverCommand::AddColumn => game.add_column(),
        DriverCommand::RemoveColumn => game.remove_column(),
        DriverCommand::IncreaseThreshold => game.increase_win_threshold(),
        DriverCommand::DecreaseThreshold => game.decrease_win_threshold(),
        DriverCommand::Reset => {
            game.reset();
            EditOutcome::Applied
        }
        DriverCommand::Quit => EditOutcome::Applied,
    }
}

fn print_game(game: &Controller, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", render::render_board(game.state()))?;
    writeln!(out, "{}", render::render_status(game.state()))?;
    out.flush()
}
