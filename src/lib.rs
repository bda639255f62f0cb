//! TUI Life-war (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_lifewar::{core,input,term,types}`
//! and hosts the pieces shared by the binary and the integration tests: the
//! command line and the line-oriented play loop.

pub use tui_lifewar_core as core;
pub use tui_lifewar_input as input;
pub use tui_lifewar_term as term;
pub use tui_lifewar_types as types;

pub mod cli;
pub mod plain;
