//! Interactive terminal game against the asynchronous opponent.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chess_core::{Color, GameLedger, GameStatus, Position};
use opponent::{Opponent, OpponentConfig, OpponentError};
use tiered_engine::suggest_moves;
use tracing::info;

const HELP: &str = "Enter moves like e2e4 or e7e8q. Commands: undo, hint, fen, pgn, help, quit.";

/// Plays one game, reading the human's input line by line.
///
/// Returns when the game ends, on `quit`, or when the input runs out.
pub fn run<I: BufRead, O: Write>(config: &OpponentConfig, input: I, out: &mut O) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start the async runtime")?;
    let opponent = Opponent::from_config(config);
    let engine_side = config.side;
    let mut ledger = GameLedger::new();
    let mut lines = input.lines();

    info!(tier = %config.tier, %engine_side, "game started");
    writeln!(out, "You play {} against a {} opponent.", engine_side.other(), config.tier)?;
    writeln!(out, "{HELP}")?;

    loop {
        let status = ledger.status();
        if status.is_over() {
            writeln!(out, "{}", render_board(ledger.position()))?;
            writeln!(out, "Game over: {} ({})", describe(status), status.result_token())?;
            writeln!(out, "{}", ledger.pgn())?;
            info!(result = status.result_token(), "game over");
            break;
        }

        if ledger.side_to_move() == engine_side {
            writeln!(out, "{} is thinking...", config.tier)?;
            let reply = runtime
                .block_on(async {
                    let pending = opponent.request_move(ledger.position())?;
                    Ok::<_, OpponentError>(pending.await)
                })
                .context("engine request failed")?;
            match reply {
                Some(mv) => {
                    ledger.apply(&mv).context("engine produced an unplayable move")?;
                    writeln!(out, "{} plays {}", config.tier, mv.san)?;
                }
                None => {
                    writeln!(out, "The engine has no move.")?;
                    break;
                }
            }
            continue;
        }

        writeln!(out, "{}", render_board(ledger.position()))?;
        write!(out, "{} to move> ", ledger.side_to_move())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "fen" => writeln!(out, "{}", ledger.fen())?,
            "pgn" => writeln!(out, "{}", ledger.pgn())?,
            "hint" => {
                let hints = suggest_moves(opponent.rules(), ledger.position(), 3);
                if hints.is_empty() {
                    writeln!(out, "No moves to suggest.")?;
                }
                for (i, hint) in hints.iter().enumerate() {
                    writeln!(out, "{}. {} {}", i + 1, hint.mv.san, hint.strength())?;
                }
            }
            "undo" => {
                let taken = take_back(&mut ledger, engine_side);
                if taken.is_empty() {
                    writeln!(out, "Nothing to undo.")?;
                } else {
                    writeln!(out, "Took back {}", taken.join(", "))?;
                }
            }
            text => match ledger.make_coord_move(text) {
                Ok(mv) => writeln!(out, "You play {}", mv.san)?,
                Err(err) => writeln!(out, "{err}")?,
            },
        }
    }

    Ok(())
}

/// Undoes moves until the human is to move again, newest first.
fn take_back(ledger: &mut GameLedger, engine_side: Color) -> Vec<String> {
    let mut taken = Vec::new();
    while let Some(mv) = ledger.undo() {
        taken.push(mv.san);
        if ledger.side_to_move() != engine_side {
            break;
        }
    }
    taken
}

fn describe(status: GameStatus) -> String {
    match status {
        GameStatus::InProgress => "in progress".to_string(),
        GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
        GameStatus::Stalemate => "stalemate".to_string(),
        GameStatus::FiftyMoveRule => "draw by the fifty-move rule".to_string(),
        GameStatus::ThreefoldRepetition => "draw by threefold repetition".to_string(),
        GameStatus::InsufficientMaterial => "draw by insufficient material".to_string(),
    }
}

/// Text diagram, White at the bottom.
pub fn render_board(pos: &Position) -> String {
    let mut board = String::new();
    for rank in (0..8u8).rev() {
        board.push((b'1' + rank) as char);
        board.push(' ');
        for file in 0..8u8 {
            let symbol = match pos.piece_at(rank * 8 + file) {
                Some(piece) => {
                    let letter = piece.kind.san_letter().unwrap_or('P');
                    match piece.color {
                        Color::White => letter,
                        Color::Black => letter.to_ascii_lowercase(),
                    }
                }
                None => '.',
            };
            board.push(' ');
            board.push(symbol);
        }
        board.push('\n');
    }
    board.push_str("   a b c d e f g h");
    board
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod play_tests;
