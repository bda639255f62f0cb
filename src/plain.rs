//! Line-oriented play loop: draw the board as text, read `row col` lines.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::core::GameSession;
use crate::input::parse_coords;
use crate::term::{draw_board, turn_prompt};
use crate::types::Player;

/// Play until someone wins or `input` runs dry.
///
/// Unparseable lines are reported and re-read with the same player to move.
/// Rejected placements are reported and the board is redrawn. Returns the
/// winner, or `None` if input ended first.
pub fn run<R, W>(session: &mut GameSession, mut input: R, mut out: W) -> io::Result<Option<Player>>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();

    write!(out, "{}", draw_board(&session.snapshot()))?;
    write!(out, "{}", turn_prompt(session.current_player()))?;
    out.flush()?;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!(round = session.round(), "input closed");
            writeln!(out)?;
            return Ok(None);
        }
        // Bytes that are not UTF-8 end up as replacement characters, which
        // fail to parse like any other garbage.
        let line = String::from_utf8_lossy(&buf);

        let (row, col) = match parse_coords(&line) {
            Ok(coords) => coords,
            Err(err) => {
                writeln!(out, "{}", err)?;
                write!(out, "Try again: ")?;
                out.flush()?;
                continue;
            }
        };

        if let Err(err) = session.apply_move(row, col) {
            writeln!(out, "{}", err)?;
        }
        write!(out, "{}", draw_board(&session.snapshot()))?;

        if let Some(winner) = session.final_outcome().winner() {
            info!(%winner, round = session.round(), "game over");
            writeln!(out, "{} wins!", winner)?;
            out.flush()?;
            return Ok(Some(winner));
        }

        write!(out, "{}", turn_prompt(session.current_player()))?;
        out.flush()?;
    }
}
