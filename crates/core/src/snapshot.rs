use crate::board::Population;
use crate::types::{Cell, Outcome, Player, WARMUP_ROUNDS};

/// Render-friendly copy of a [`crate::GameSession`].
///
/// Front ends draw from snapshots so they never hold a borrow of the live
/// session while the next move is being applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major, `size * size` cells
    pub cells: Vec<Cell>,
    pub round: u32,
    pub current_player: Player,
    pub population: Population,
    /// Raw elimination check of the board
    pub outcome: Outcome,
    /// Elimination check gated on warm-up; this is what ends the game
    pub final_outcome: Outcome,
    pub warmup_remaining: u32,
}

impl GameSnapshot {
    /// Cell at (row, col), empty if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.size || col >= self.size {
            return Cell::Empty;
        }
        self.cells
            .get(row * self.size + col)
            .copied()
            .unwrap_or(Cell::Empty)
    }

    /// Whether the game still accepts moves
    pub fn playable(&self) -> bool {
        !self.final_outcome.is_decided()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
            round: 0,
            current_player: Player::Player1,
            population: Population::default(),
            outcome: Outcome::Undecided,
            final_outcome: Outcome::Undecided,
            warmup_remaining: WARMUP_ROUNDS,
        }
    }
}
