//! Game session - round counter, turn and board for one game
//!
//! A session runs one move at a time: place the current player's piece, run
//! the automaton once warm-up is over, pass the turn, count the round, and
//! report the elimination check.

use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::error::PlacementError;
use crate::snapshot::GameSnapshot;
use crate::types::{Outcome, Player, WARMUP_ROUNDS};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    round: u32,
    current_player: Player,
    board: Board,
    /// Second buffer for automaton steps; swapped with `board` after each step.
    back: Board,
}

impl GameSession {
    /// Start a new game on an empty `size x size` board. Player 1 moves first.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            round: 0,
            current_player: Player::Player1,
            board: Board::new(size),
            back: Board::new(size),
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Whether moves now also advance the automaton
    pub fn automaton_active(&self) -> bool {
        self.round >= WARMUP_ROUNDS
    }

    /// Placement-only rounds left before the automaton starts
    pub fn warmup_remaining(&self) -> u32 {
        WARMUP_ROUNDS.saturating_sub(self.round)
    }

    /// Play the current player's piece at (row, col).
    ///
    /// Returns the raw elimination check of the resulting board. This can
    /// name a winner during warm-up (e.g. after the very first move the
    /// second player has no cells); use [`GameSession::final_outcome`] to
    /// decide whether the game is actually over.
    ///
    /// On error nothing changes: same round, same player, same board.
    #[instrument(skip(self), fields(round = self.round, player = %self.current_player))]
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<Outcome, PlacementError> {
        if let Err(err) = self.board.place(row, col, self.current_player) {
            debug!(%err, "placement rejected");
            return Err(err);
        }

        if self.automaton_active() {
            self.board.step_into(&mut self.back);
            std::mem::swap(&mut self.board, &mut self.back);
        }

        self.current_player = self.current_player.opponent();
        self.round = self.round.saturating_add(1);

        let outcome = self.board.winner();
        if let Outcome::Winner(winner) = self.final_outcome() {
            info!(%winner, round = self.round, "game decided");
        }
        Ok(outcome)
    }

    /// Outcome the game loop should act on: the elimination check, but only
    /// once warm-up is over.
    pub fn final_outcome(&self) -> Outcome {
        if self.automaton_active() {
            self.board.winner()
        } else {
            Outcome::Undecided
        }
    }

    pub fn is_over(&self) -> bool {
        self.final_outcome().is_decided()
    }

    /// Throw the current game away and start over on a board of the same size
    pub fn restart(&mut self) {
        debug!(round = self.round, "restart");
        *self = Self::new(self.size());
    }

    /// Copy the render-relevant state into an existing snapshot
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.board.size();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.round = self.round;
        out.current_player = self.current_player;
        out.population = self.board.population();
        out.outcome = self.board.winner();
        out.final_outcome = self.final_outcome();
        out.warmup_remaining = self.warmup_remaining();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_BOARD_SIZE)
    }
}
