//! Automaton rules - the per-cell transition function
//!
//! Standard Life thresholds with player ownership resolved only at birth:
//!
//! - **Birth**: an empty cell with exactly [`REVIVE_THRESHOLD`] live neighbors
//!   becomes occupied by the majority owner among them. When Player 1 does not
//!   hold a strict majority, Player 2 gets the cell.
//! - **Survival**: an occupied cell with `STARVE_THRESHOLD..=REVIVE_THRESHOLD`
//!   live neighbors keeps its owner, whoever the neighbors belong to.
//! - **Death**: an occupied cell with fewer than [`STARVE_THRESHOLD`]
//!   (starvation) or more than [`REVIVE_THRESHOLD`] (overcrowding) live
//!   neighbors becomes empty.

use crate::types::{Cell, Player, REVIVE_THRESHOLD, STARVE_THRESHOLD};

/// Live neighbor counts around one cell, split by owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborCounts {
    pub player1: u8,
    pub player2: u8,
}

impl NeighborCounts {
    pub fn new(player1: u8, player2: u8) -> Self {
        Self { player1, player2 }
    }

    /// Count owners over a set of neighbor cells; empty cells are ignored
    pub fn tally<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut counts = Self::default();
        for cell in cells {
            match cell.owner() {
                Some(Player::Player1) => counts.player1 += 1,
                Some(Player::Player2) => counts.player2 += 1,
                None => {}
            }
        }
        counts
    }

    pub fn total(&self) -> u8 {
        self.player1 + self.player2
    }

    /// Owner of a newborn cell. Ties go to Player 2.
    pub fn majority(&self) -> Player {
        if self.player1 > self.player2 {
            Player::Player1
        } else {
            Player::Player2
        }
    }
}

/// Next state of a single cell given its current state and neighbor counts
pub fn next_cell_state(current: Cell, counts: NeighborCounts) -> Cell {
    let total = counts.total();
    match current {
        Cell::Empty if total == REVIVE_THRESHOLD => Cell::from(counts.majority()),
        Cell::Empty => Cell::Empty,
        _ if total < STARVE_THRESHOLD || total > REVIVE_THRESHOLD => Cell::Empty,
        occupied => occupied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_ignores_empty_cells() {
        let counts = NeighborCounts::tally([
            Cell::Player1,
            Cell::Empty,
            Cell::Player2,
            Cell::Player1,
            Cell::Empty,
        ]);
        assert_eq!(counts, NeighborCounts::new(2, 1));
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_birth_goes_to_majority() {
        let cases = [
            ((3, 0), Cell::Player1),
            ((2, 1), Cell::Player1),
            ((1, 2), Cell::Player2),
            ((0, 3), Cell::Player2),
        ];
        for ((p1, p2), expected) in cases {
            assert_eq!(
                next_cell_state(Cell::Empty, NeighborCounts::new(p1, p2)),
                expected,
                "birth with {}/{} neighbors",
                p1,
                p2
            );
        }
    }

    #[test]
    fn test_majority_tie_goes_to_player2() {
        assert_eq!(NeighborCounts::new(0, 0).majority(), Player::Player2);
        assert_eq!(NeighborCounts::new(2, 2).majority(), Player::Player2);
        assert_eq!(NeighborCounts::new(3, 2).majority(), Player::Player1);
    }

    #[test]
    fn test_empty_cell_stays_empty_off_threshold() {
        for (p1, p2) in [(0, 0), (1, 0), (1, 1), (2, 2), (4, 0), (4, 4)] {
            assert_eq!(
                next_cell_state(Cell::Empty, NeighborCounts::new(p1, p2)),
                Cell::Empty
            );
        }
    }

    #[test]
    fn test_survival_keeps_owner() {
        // Neighbor ownership does not matter for survival.
        for (p1, p2) in [(2, 0), (0, 2), (1, 1), (3, 0), (0, 3), (2, 1), (1, 2)] {
            let counts = NeighborCounts::new(p1, p2);
            assert_eq!(next_cell_state(Cell::Player1, counts), Cell::Player1);
            assert_eq!(next_cell_state(Cell::Player2, counts), Cell::Player2);
        }
    }

    #[test]
    fn test_starvation() {
        for (p1, p2) in [(0, 0), (1, 0), (0, 1)] {
            let counts = NeighborCounts::new(p1, p2);
            assert_eq!(next_cell_state(Cell::Player1, counts), Cell::Empty);
            assert_eq!(next_cell_state(Cell::Player2, counts), Cell::Empty);
        }
    }

    #[test]
    fn test_overcrowding() {
        for (p1, p2) in [(4, 0), (0, 4), (2, 2), (5, 3), (8, 0)] {
            let counts = NeighborCounts::new(p1, p2);
            assert_eq!(next_cell_state(Cell::Player1, counts), Cell::Empty);
            assert_eq!(next_cell_state(Cell::Player2, counts), Cell::Empty);
        }
    }
}
