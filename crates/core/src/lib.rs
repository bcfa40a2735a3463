//! Core game logic - the board engine, pure and deterministic
//!
//! This crate holds every rule of the game and nothing else: no terminal, no
//! clock, no ambient randomness. The host drives a [`GameState`] once per frame
//! and reads back a [`GameSnapshot`] to draw.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked cells, row clearing
//! - [`game_state`]: the session - active piece, moves, locking, fall timer, pause/restart
//! - [`rng`]: seedable colour source for new pieces
//! - [`scoring`]: line points, level progression and fall interval
//! - [`snapshot`]: copyable per-frame view of a session
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{FixedColor, GameState};
//! use tui_blockfall_types::{BlockColor, MoveDirection};
//!
//! let mut game = GameState::with_source(FixedColor(BlockColor::Cyan));
//! assert!(game.attempt_move(MoveDirection::Left));
//! assert_eq!(game.active().x, 4);
//!
//! game.attempt_hard_drop();
//! assert_eq!(game.board().get(4, 19), Some(Some(BlockColor::Cyan)));
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. The piece falls one row each time the accumulated time
//! reaches the fall interval (500ms at level 1, 50ms faster per level, never
//! below 100ms).

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_blockfall_types as types;

pub use board::{Board, ClearedRows};
pub use game_state::{GameState, LockEvent, Piece, PIECE_SHAPE};
pub use rng::{ColorSource, FixedColor, SimpleRng};
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_points};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
