mod cli;
mod config;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chess_rules::{BoardRenderer, ClickOutcome, Move, MoveError, Session, Square};
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::{error, info, warn};
use thiserror::Error;

use crate::cli::{Cli, Commands};
use crate::config::Config;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("config: {0}")]
    Config(#[from] serde_yaml::Error),
}

fn main() -> ExitCode {
    let env = Env::default().filter_or("CHESS_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let cfg_path = cli
        .config
        .or_else(|| std::env::var_os("CHESS_CONFIG_PATH").map(PathBuf::from));
    let cfg = Config::load(cfg_path.as_deref())?;

    match cli.command {
        Some(Commands::Play) => play(&cfg),
        Some(Commands::Check { from, to, moves }) => {
            println!("{}", check_line(from, to, &moves)?);
            Ok(())
        }
        Some(Commands::Replay { moves }) => {
            let session = replay_moves(&moves, cfg.stop_on_illegal)?;
            print_session(&session, &cfg);
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Verdict line for `check`: the history must replay cleanly first.
fn check_line(from: Square, to: Square, moves: &[Move]) -> Result<String, CliError> {
    let session = replay_moves(moves, true)?;
    let verdict = if session.is_legal(from, to) {
        "legal"
    } else {
        "illegal"
    };
    Ok(format!("{from}{to}: {verdict}"))
}

fn replay_moves(moves: &[Move], stop_on_illegal: bool) -> Result<Session, CliError> {
    let mut session = Session::new();
    for mv in moves {
        match session.try_move(mv.from, mv.to) {
            Ok(_) => {}
            Err(e) if stop_on_illegal => return Err(e.into()),
            Err(e) => warn!("skipping {mv}: {e}"),
        }
    }
    Ok(session)
}

fn print_session(session: &Session, cfg: &Config) {
    let mut options = cfg.render_options();
    options.highlight = session.selection();
    print!("{}", BoardRenderer::render(session.board(), &options));
    println!("{}", session.status());
}

fn play(cfg: &Config) -> Result<(), CliError> {
    let mut session = Session::new();
    print_session(&session, cfg);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        for token in line?.split_whitespace() {
            match token {
                "quit" | "exit" => return Ok(()),
                "reset" => session.reset(),
                "board" => {}
                label => match label.parse::<Square>() {
                    Ok(square) => report(session.click(square)),
                    Err(e) => {
                        warn!("{e}");
                        continue;
                    }
                },
            }
            print_session(&session, cfg);
        }
        io::stdout().flush()?;
    }
    Ok(())
}

fn report(outcome: ClickOutcome) {
    match outcome {
        ClickOutcome::Ignored => info!("nothing to select there"),
        ClickOutcome::Selected(sq) => info!("selected {sq}"),
        ClickOutcome::Moved {
            from,
            to,
            captured: Some(piece),
        } => info!("{from}->{to} captures {:?} {:?}", piece.color, piece.kind),
        ClickOutcome::Moved { from, to, .. } => info!("{from}->{to}"),
        ClickOutcome::Rejected { from, to } => warn!("{from}->{to} is not legal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_rules::Color;

    fn moves(list: &[&str]) -> Vec<Move> {
        list.iter().map(|m| m.parse().unwrap()).collect()
    }

    fn sq(label: &str) -> Square {
        Square::parse(label).unwrap()
    }

    #[test]
    fn replay_stops_on_illegal_move_when_strict() {
        let history = moves(&["e2e4", "e7e4", "d7d5"]);
        assert!(matches!(
            replay_moves(&history, true),
            Err(CliError::Move(MoveError::IllegalMove { .. }))
        ));
    }

    #[test]
    fn replay_skips_illegal_move_when_lenient() {
        let history = moves(&["e2e4", "e7e4", "d7d5", "e4d5"]);
        let session = replay_moves(&history, false).unwrap();
        assert_eq!(session.moves_played(), 3);
        assert_eq!(session.turn(), Color::Black);
        assert!(session.board().is_empty(sq("e4")));
        assert_eq!(session.board().piece_at(sq("d5")).unwrap().color, Color::White);
        assert!(session.board().piece_at(sq("e7")).is_some());
    }

    #[test]
    fn check_reports_verdict_after_history() {
        let history = moves(&["e2e4", "d7d5"]);
        assert_eq!(check_line(sq("e4"), sq("d5"), &history).unwrap(), "e4d5: legal");
        assert_eq!(check_line(sq("e4"), sq("e6"), &history).unwrap(), "e4e6: illegal");
        assert_eq!(check_line(sq("d1"), sq("d5"), &[]).unwrap(), "d1d5: illegal");
    }

    #[test]
    fn check_rejects_broken_history() {
        let history = moves(&["e2e5"]);
        assert!(check_line(sq("e2"), sq("e4"), &history).is_err());
    }
}
