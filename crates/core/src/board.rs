//! Board module - the square grid the automaton runs on
//!
//! The board is a `size x size` grid where each cell is empty or owned by a
//! player. Cells live in a flat row-major vector (`row * size + col`).
//! Coordinates are `(row, col)` and signed so that callers can pass anything
//! they read from a user: out-of-range values are rejected by [`Board::place`]
//! and read as empty by [`Board::get`].
//!
//! The board changes in exactly two ways: a placement, or replacement by the
//! successor grid computed by [`Board::step`]. A step never writes into the
//! grid it is reading from.

use arrayvec::ArrayVec;
use tracing::trace;

use crate::error::PlacementError;
use crate::rules::{next_cell_state, NeighborCounts};
use crate::types::{Cell, Outcome, Player};

/// Offsets of the 8 surrounding cells, as (row, col) deltas
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Largest side length whose cell count fits in a `usize`
const MAX_SIDE: usize = (1 << (usize::BITS / 2)) - 1;

/// Side length and cell count for a requested size, clamped to [`MAX_SIDE`]
fn dimensions(size: usize) -> (usize, usize) {
    let side = size.min(MAX_SIDE);
    (side, side * side)
}

/// Live cell count per player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Population {
    pub player1: usize,
    pub player2: usize,
}

impl Population {
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }

    pub fn total(&self) -> usize {
        self.player1 + self.player2
    }
}

/// The game board - `size x size` cells in flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Sizes above `2^(usize::BITS / 2) - 1` are clamped so that the cell
    /// count cannot overflow; allocating that many cells fails long before.
    pub fn new(size: usize) -> Self {
        let (size, len) = dimensions(size);
        Self {
            size,
            cells: vec![Cell::Empty; len],
        }
    }

    /// Build a board from text rows: `O` is Player 1, `x` is Player 2,
    /// `.` or a space is empty.
    ///
    /// Returns `None` if the rows do not form a square or contain any other
    /// character.
    pub fn from_pattern(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size.checked_mul(size)?);
        for row in rows {
            if row.chars().count() != size {
                return None;
            }
            for ch in row.chars() {
                cells.push(match ch {
                    'O' => Cell::Player1,
                    'x' => Cell::Player2,
                    '.' | ' ' => Cell::Empty,
                    _ => return None,
                });
            }
        }
        Some(Self { size, cells })
    }

    /// Inverse of [`Board::from_pattern`], using `.` for empty cells
    pub fn to_pattern(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => '.',
                        occupied => occupied.glyph(),
                    })
                    .collect()
            })
            .collect()
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, col). Out of bounds reads as empty.
    pub fn get(&self, row: i32, col: i32) -> Cell {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .unwrap_or(Cell::Empty)
    }

    /// Place a player's piece on an empty in-bounds cell
    pub fn place(&mut self, row: i32, col: i32, player: Player) -> Result<(), PlacementError> {
        let idx = self.index(row, col).ok_or(PlacementError::OutOfBounds {
            row,
            col,
            size: self.size,
        })?;
        if !self.cells[idx].is_empty() {
            return Err(PlacementError::Occupied { row, col });
        }
        self.cells[idx] = Cell::from(player);
        Ok(())
    }

    /// The 8 cells around (row, col); cells past the edge read as empty
    pub fn neighbors(&self, row: i32, col: i32) -> ArrayVec<Cell, 8> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| self.get(row.saturating_add(dr), col.saturating_add(dc)))
            .collect()
    }

    pub fn neighbor_counts(&self, row: i32, col: i32) -> NeighborCounts {
        NeighborCounts::tally(self.neighbors(row, col))
    }

    /// Compute the successor board. The receiver is not modified.
    pub fn step(&self) -> Board {
        let mut next = Board::new(self.size);
        self.step_into(&mut next);
        next
    }

    /// Write the successor of `self` into `out`, reusing its allocation.
    ///
    /// Every cell of `out` is derived from `self` alone, so `out` may hold
    /// anything beforehand (typically the previous-but-one generation).
    pub fn step_into(&self, out: &mut Board) {
        out.size = self.size;
        out.cells.clear();
        out.cells.reserve(self.cells.len());

        for row in 0..self.size {
            for col in 0..self.size {
                let current = self.cells[row * self.size + col];
                let counts = self.neighbor_counts(row as i32, col as i32);
                out.cells.push(next_cell_state(current, counts));
            }
        }

        trace!(
            size = self.size,
            before = self.population().total(),
            after = out.population().total(),
            "automaton step"
        );
    }

    /// Live cells per player across the whole grid
    pub fn population(&self) -> Population {
        let mut population = Population::default();
        for cell in &self.cells {
            match cell.owner() {
                Some(Player::Player1) => population.player1 += 1,
                Some(Player::Player2) => population.player2 += 1,
                None => {}
            }
        }
        population
    }

    /// Elimination check.
    ///
    /// A player with no live cells has lost. If both are gone, Player 2 wins
    /// since Player 1 moved first.
    pub fn winner(&self) -> Outcome {
        let population = self.population();
        match (population.player1, population.player2) {
            (0, _) => Outcome::Winner(Player::Player2),
            (_, 0) => Outcome::Winner(Player::Player1),
            _ => Outcome::Undecided,
        }
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }
}
