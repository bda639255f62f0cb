//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the board simulation engine for a two-player territory
//! game played on a Game of Life grid. It has no dependencies on terminal
//! I/O, so the same rules drive the raw-mode front end, the line-oriented
//! front end, tests and benches.
//!
//! # Module Structure
//!
//! - [`board`]: square grid, placement, automaton step, elimination check
//! - [`rules`]: the per-cell birth/survival/death transition
//! - [`session`]: round counter, turn order and warm-up handling
//! - [`snapshot`]: render-friendly copy of a session
//! - [`error`]: placement errors
//!
//! # Game Rules
//!
//! - Players alternate placing one piece on any empty cell. Player 1 starts.
//! - The first [`WARMUP_ROUNDS`](types::WARMUP_ROUNDS) moves only place
//!   pieces. From then on, every placement is followed by one automaton step
//!   over the whole board.
//! - Automaton: an empty cell with exactly 3 live neighbors is born, owned by
//!   the player holding the majority of those neighbors (Player 2 on a tie).
//!   A live cell survives with 2 or 3 live neighbors and keeps its owner;
//!   otherwise it dies.
//! - A player with no live cells loses. If both are wiped out at once,
//!   Player 2 wins. The game only ends on elimination after warm-up.
//!
//! # Example
//!
//! ```
//! use tui_lifewar_core::GameSession;
//! use tui_lifewar_types::{Outcome, Player};
//!
//! let mut game = GameSession::new(3);
//! let raw = game.apply_move(1, 1).unwrap();
//!
//! // Player 2 has nothing on the board yet...
//! assert_eq!(raw, Outcome::Winner(Player::Player1));
//! // ...but warm-up is not over, so the game goes on.
//! assert_eq!(game.final_outcome(), Outcome::Undecided);
//! assert_eq!(game.current_player(), Player::Player2);
//! ```

pub mod board;
pub mod error;
pub mod rules;
pub mod session;
pub mod snapshot;

pub use tui_lifewar_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Population};
pub use error::PlacementError;
pub use rules::{next_cell_state, NeighborCounts};
pub use session::GameSession;
pub use snapshot::GameSnapshot;
