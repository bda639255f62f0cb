//! Terminal rendering.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer which is then flushed to the terminal, diffing against the
//! previous frame. The line-oriented front end uses [`text`] instead.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep views pure so they can be tested against a framebuffer
//! - Draw board cells 2 columns wide to offset the terminal glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use tui_lifewar_core as core;
pub use tui_lifewar_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, StatusView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::{draw_board, turn_prompt, write_board};
