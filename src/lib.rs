//! TUI Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short module names and adds the pieces
//! only the binary host needs: settings loading.

pub mod config;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
