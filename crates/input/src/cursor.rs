//! Board cursor for the raw-mode front end.

use crate::types::GameAction;

/// Selected cell, always kept inside a `size x size` board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    row: usize,
    col: usize,
    size: usize,
}

impl Cursor {
    /// Cursor starting at the centre of the board
    pub fn centered(size: usize) -> Self {
        let mid = size / 2;
        Self {
            row: mid,
            col: mid,
            size,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// (row, col) in the signed form the board API takes
    pub fn coords(&self) -> (i32, i32) {
        (self.row as i32, self.col as i32)
    }

    /// Apply a movement action. Movement stops at the edges; non-movement
    /// actions are ignored. Returns whether the cursor moved.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let last = self.size.saturating_sub(1);
        let (row, col) = match action {
            GameAction::MoveUp => (self.row.saturating_sub(1), self.col),
            GameAction::MoveDown => ((self.row + 1).min(last), self.col),
            GameAction::MoveLeft => (self.row, self.col.saturating_sub(1)),
            GameAction::MoveRight => (self.row, (self.col + 1).min(last)),
            GameAction::Place | GameAction::Restart => return false,
        };
        let moved = (row, col) != (self.row, self.col);
        self.row = row;
        self.col = col;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_centered() {
        let cursor = Cursor::centered(11);
        assert_eq!((cursor.row(), cursor.col()), (5, 5));
        assert_eq!(cursor.coords(), (5, 5));
        assert_eq!(Cursor::centered(1).coords(), (0, 0));
    }

    #[test]
    fn test_moves_and_clamps_at_edges() {
        let mut cursor = Cursor::centered(3);
        assert!(cursor.apply(GameAction::MoveUp));
        assert!(!cursor.apply(GameAction::MoveUp));
        assert_eq!(cursor.coords(), (0, 1));

        assert!(cursor.apply(GameAction::MoveRight));
        assert!(!cursor.apply(GameAction::MoveRight));
        assert_eq!(cursor.coords(), (0, 2));

        assert!(cursor.apply(GameAction::MoveDown));
        assert!(cursor.apply(GameAction::MoveDown));
        assert!(!cursor.apply(GameAction::MoveDown));
        assert_eq!(cursor.coords(), (2, 2));

        assert!(cursor.apply(GameAction::MoveLeft));
        assert!(cursor.apply(GameAction::MoveLeft));
        assert!(!cursor.apply(GameAction::MoveLeft));
        assert_eq!(cursor.coords(), (2, 0));
    }

    #[test]
    fn test_ignores_non_movement() {
        let mut cursor = Cursor::centered(5);
        assert!(!cursor.apply(GameAction::Place));
        assert!(!cursor.apply(GameAction::Restart));
        assert_eq!(cursor.coords(), (2, 2));
    }

    #[test]
    fn test_degenerate_board_does_not_move() {
        let mut cursor = Cursor::centered(0);
        for action in [
            GameAction::MoveUp,
            GameAction::MoveDown,
            GameAction::MoveLeft,
            GameAction::MoveRight,
        ] {
            assert!(!cursor.apply(action));
        }
    }
}
