//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::types::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

/// Two-player territory game on a Game of Life board
#[derive(Parser, Debug)]
#[command(name = "tui-lifewar")]
#[command(about = "Two-player territory game on a Game of Life board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_board_size)]
    pub size: usize,

    /// Read `row col` lines from stdin instead of running the full-screen UI
    #[arg(long)]
    pub plain: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_board_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a board size", s))?;
    if !(1..=MAX_BOARD_SIZE).contains(&size) {
        return Err(format!(
            "board size must be between 1 and {}",
            MAX_BOARD_SIZE
        ));
    }
    Ok(size)
}
