//! Line-driven runner (default binary).
//!
//! Reads one command per line from stdin and prints the grid after every move.
//! Directions are `up`/`down`/`left`/`right` or the `wasd`/`hjkl` letters;
//! `new` starts over, `scores` shows the history and leaderboard, `quit` exits.
//! Finished games are recorded in in-memory score lists.
//!
//! Moves arriving inside the settle window are rejected like in any other
//! front end. When piping a script in, set `TWENTY48_SETTLE_MS=0`.

use std::io::{self, BufRead, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use env_logger::Env;
use log::info;

use twenty48::core::{GameSession, MoveOutcome, RejectReason, SessionConfig};
use twenty48::history::{ListPolicy, MemoryStorage, RecordOutcome, ScoreList};
use twenty48::types::{Direction, GameOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(Direction),
    New,
    Scores,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Result<Command> {
    if let Some(dir) = Direction::from_str(input) {
        return Ok(Command::Move(dir));
    }
    match input.trim().to_lowercase().as_str() {
        "new" | "restart" | "r" => Ok(Command::New),
        "scores" | "history" => Ok(Command::Scores),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(anyhow!("unknown command: {}", other)),
    }
}

fn unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = SessionConfig::from_env(unix_ms() as u32);
    info!("seed {}, settle delay {}ms", config.seed, config.settle_delay_ms);

    let mut session = GameSession::new(config);
    let mut history = ScoreList::open(MemoryStorage::new(), ListPolicy::history_from_env());
    let mut leaderboard = ScoreList::open(MemoryStorage::new(), ListPolicy::leaderboard());

    let started = Instant::now();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    print_state(&mut out, &session)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let now_ms = started.elapsed().as_millis() as u64;
        session.settle(now_ms);

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{} (try `help`)", e)?;
                continue;
            }
        };

        match command {
            Command::Move(direction) => match session.try_move(direction, now_ms) {
                MoveOutcome::Moved(report) => {
                    print_state(&mut out, &session)?;
                    if report.finished {
                        let ended_at = unix_ms();
                        let saved = history.record(report.score, ended_at);
                        let ranked = leaderboard.record(report.score, ended_at);
                        if saved == RecordOutcome::MemoryOnly || ranked == RecordOutcome::MemoryOnly {
                            writeln!(out, "(score kept for this session only)")?;
                        }
                        writeln!(out, "No moves left. Type `new` to play again.")?;
                    }
                }
                MoveOutcome::Blocked => writeln!(out, "Nothing moves {}.", direction.as_str())?,
                MoveOutcome::Rejected(RejectReason::Busy) => writeln!(out, "Still settling, move ignored.")?,
                MoveOutcome::Rejected(RejectReason::GameOver) => {
                    writeln!(out, "Game over. Type `new` to play again.")?
                }
            },
            Command::New => {
                session.reset();
                print_state(&mut out, &session)?;
            }
            Command::Scores => print_scores(&mut out, &history, &leaderboard)?,
            Command::Help => {
                writeln!(out, "moves: up/down/left/right, w/a/s/d, h/j/k/l")?;
                writeln!(out, "other: new, scores, help, quit")?;
            }
            Command::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}

fn print_state(out: &mut impl Write, session: &GameSession) -> Result<()> {
    writeln!(out, "{}", session.grid())?;
    let status = match session.outcome() {
        GameOutcome::Ongoing => "",
        GameOutcome::Won => "  (2048 reached!)",
        GameOutcome::Lost if session.won() => "  (2048 reached, no moves left)",
        GameOutcome::Lost => "  (no moves left)",
    };
    writeln!(out, "score: {}{}", session.score(), status)?;
    Ok(())
}

fn print_scores(
    out: &mut impl Write,
    history: &ScoreList<MemoryStorage>,
    leaderboard: &ScoreList<MemoryStorage>,
) -> Result<()> {
    writeln!(out, "leaderboard:")?;
    for (rank, entry) in leaderboard.entries().iter().enumerate() {
        writeln!(out, "  {:>2}. {}", rank + 1, entry.score)?;
    }
    writeln!(out, "recent games: {}", history.entries().len())?;
    for entry in history.entries().iter().take(5) {
        writeln!(out, "  {} ({})", entry.score, entry.id)?;
    }
    Ok(())
}
