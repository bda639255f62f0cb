//! Input module (front-end facing).
//!
//! This module is independent of any UI framework beyond crossterm's key
//! types. It maps key events into [`crate::types::GameAction`], tracks the
//! board cursor for the raw-mode front end, and parses typed `row col` lines
//! for the line-oriented front end.

pub mod coords;
pub mod cursor;
pub mod map;

pub use tui_lifewar_types as types;

pub use coords::{parse_coords, CoordsError};
pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
