//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Holding a
//! movement key relies on the terminal's own auto-repeat: repeat events map to
//! the same action as the initial press, one step per event.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, is_repeatable, should_quit};
