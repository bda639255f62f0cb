//! Plain-text board drawing for the line-oriented front end.
//!
//! ```text
//!
//!      0 1 2
//!    +-------+
//!   0| O     |
//!   1|   x   |
//!   2|       |
//!    +-------+
//! ```

use std::fmt::{self, Write};

use crate::core::GameSnapshot;
use crate::types::Player;

/// Write the board, framed, with column digits on top and row numbers on the left.
pub fn write_board<W: Write>(out: &mut W, snap: &GameSnapshot) -> fmt::Result {
    let rule = "--".repeat(snap.size);

    writeln!(out)?;
    write!(out, "    ")?;
    for col in 0..snap.size {
        write!(out, "{:2}", col % 10)?;
    }
    writeln!(out)?;
    writeln!(out, "   +-{}+", rule)?;

    for row in 0..snap.size {
        write!(out, "{:3}| ", row)?;
        for col in 0..snap.size {
            write!(out, "{} ", snap.get(row, col).glyph())?;
        }
        writeln!(out, "|")?;
    }

    writeln!(out, "   +-{}+", rule)
}

pub fn draw_board(snap: &GameSnapshot) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = write_board(&mut s, snap);
    s
}

/// Prompt shown before reading a move, e.g. `Player 1's turn O > `
pub fn turn_prompt(player: Player) -> String {
    format!("{}'s turn {} > ", player, player.glyph())
}
