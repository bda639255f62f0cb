//! Placement errors.

use derive_more::{Display, Error};

/// Why a piece could not be placed. Both kinds are recoverable: the board is
/// left untouched and the caller may retry with other coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlacementError {
    /// Row or column outside `0..size`
    #[display("Out of bounds! ({row}, {col}) is not on the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },
    /// Target cell already holds a piece
    #[display("Occupied! ({row}, {col}) already holds a piece")]
    Occupied { row: i32, col: i32 },
}
