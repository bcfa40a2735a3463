//! Terminal rendering for the game.
//!
//! Rendering is split in two: [`GameView`] paints a [`GameSnapshot`] into a
//! plain [`FrameBuffer`] with no I/O at all, and [`TerminalRenderer`] flushes
//! framebuffers to the real terminal, rewriting only the cells that changed.
//!
//! [`GameSnapshot`]: tui_blockfall_core::GameSnapshot

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
