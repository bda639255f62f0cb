//! Parsing of typed `row col` coordinates.

use derive_more::{Display, Error};

/// A line that is not two whitespace-separated integers
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CoordsError {
    #[display("expected two numbers `row col`, got {found} value(s)")]
    WrongCount { found: usize },
    #[display("`{token}` is not a number")]
    NotANumber { token: String },
}

/// Parse `row col` from one line of input.
///
/// Only the syntax is checked here; range checks belong to the board.
pub fn parse_coords(line: &str) -> Result<(i32, i32), CoordsError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(CoordsError::WrongCount {
            found: tokens.len(),
        });
    };
    Ok((parse_one(row)?, parse_one(col)?))
}

fn parse_one(token: &str) -> Result<i32, CoordsError> {
    token.parse().map_err(|_| CoordsError::NotANumber {
        token: token.to_string(),
    })
}
