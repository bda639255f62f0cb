//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, so they
//! can be used from the simulation core, the terminal renderer and the input
//! layer alike.
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WARMUP_ROUNDS` | 4 | Placement-only rounds before the automaton starts |
//! | `REVIVE_THRESHOLD` | 3 | Neighbor count that brings an empty cell to life |
//! | `STARVE_THRESHOLD` | 2 | Fewer live neighbors than this and a cell dies |
//! | `DEFAULT_BOARD_SIZE` | 11 | Board side length used when none is configured |
//!
//! An occupied cell with more than `REVIVE_THRESHOLD` neighbors dies of
//! overcrowding, so the survival band is `STARVE_THRESHOLD..=REVIVE_THRESHOLD`.
//!
//! # Players, cells and outcomes
//!
//! Three separate types cover what would otherwise be a single "nobody" value:
//!
//! - [`Cell::Empty`] is an unoccupied square.
//! - [`Outcome::Undecided`] means nobody has won yet.
//! - [`Player`] has exactly two values, so "whose turn" can never be nobody.
//!
//! # Examples
//!
//! ```
//! use tui_lifewar_types::{Cell, Outcome, Player, WARMUP_ROUNDS};
//!
//! let p = Player::Player1;
//! assert_eq!(p.opponent(), Player::Player2);
//! assert_eq!(p.glyph(), 'O');
//!
//! let cell = Cell::from(Player::Player2);
//! assert_eq!(cell.owner(), Some(Player::Player2));
//! assert!(Cell::Empty.is_empty());
//!
//! assert_eq!(Outcome::Winner(p).winner(), Some(Player::Player1));
//! assert!(!Outcome::Undecided.is_decided());
//!
//! assert_eq!(WARMUP_ROUNDS, 4);
//! ```

use std::fmt;

/// Number of placement-only rounds before every move also advances the automaton
pub const WARMUP_ROUNDS: u32 = 4;

/// Live neighbor count at which an empty cell is born
pub const REVIVE_THRESHOLD: u8 = 3;

/// Occupied cells with fewer live neighbors than this starve
pub const STARVE_THRESHOLD: u8 = 2;

/// Board side length used when none is configured
pub const DEFAULT_BOARD_SIZE: usize = 11;

/// Largest board the front ends accept (row/column labels stay two digits wide)
pub const MAX_BOARD_SIZE: usize = 99;


/// One of the two players. Player 1 always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Single-character board glyph
    pub fn glyph(self) -> char {
        match self {
            Player::Player1 => 'O',
            Player::Player2 => 'x',
        }
    }

    /// Human-readable name
    pub fn as_str(self) -> &'static str {
        match self {
            Player::Player1 => "Player 1",
            Player::Player2 => "Player 2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a single board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Board glyph: the owner's glyph, or a blank
    pub fn glyph(self) -> char {
        self.owner().map(Player::glyph).unwrap_or(' ')
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Player1 => Cell::Player1,
            Player::Player2 => Cell::Player2,
        }
    }
}

/// Result of the elimination check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// Both players still have live cells
    #[default]
    Undecided,
    Winner(Player),
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Undecided => None,
            Outcome::Winner(p) => Some(p),
        }
    }

    pub fn is_decided(self) -> bool {
        matches!(self, Outcome::Winner(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Undecided => f.write_str("Undecided"),
            Outcome::Winner(p) => write!(f, "{} wins", p),
        }
    }
}

/// Front-end actions (cursor movement and placement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Place the current player's piece at the cursor
    Place,
    Restart,
}
