//! Read-only copy of a session, produced once per frame for the renderer.

use crate::game_state::Piece;
use crate::types::{
    BlockColor, Cell, GRID_COLS, GRID_ROWS, INITIAL_FALL_INTERVAL_MS, SPAWN_X, SPAWN_Y,
    STARTING_LEVEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub x: i8,
    pub y: i8,
    pub color: BlockColor,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            x: value.x,
            y: value.y,
            color: value.color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; GRID_COLS as usize]; GRID_ROWS as usize],
    pub active: ActiveSnapshot,
    pub next_color: BlockColor,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Locked cell at (x, y); `None` for empty or off-grid
    pub fn cell(&self, x: i8, y: i8) -> Cell {
        if x < 0 || y < 0 {
            return None;
        }
        self.board
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; GRID_COLS as usize]; GRID_ROWS as usize],
            active: ActiveSnapshot {
                x: SPAWN_X,
                y: SPAWN_Y,
                color: BlockColor::Cyan,
            },
            next_color: BlockColor::Cyan,
            episode_id: 0,
            score: 0,
            level: STARTING_LEVEL,
            lines: 0,
            fall_interval_ms: INITIAL_FALL_INTERVAL_MS,
            paused: false,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedColor;
    use crate::GameState;

    #[test]
    fn snapshot_mirrors_session() {
        let mut state = GameState::with_source(FixedColor(BlockColor::Blue));
        state.attempt_hard_drop();
        let snap = state.snapshot();

        assert_eq!(snap.board[19][5], Some(BlockColor::Blue));
        assert_eq!(snap.cell(5, 19), Some(BlockColor::Blue));
        assert_eq!(snap.cell(-1, 19), None);
        assert_eq!(snap.cell(5, 20), None);
        assert_eq!((snap.active.x, snap.active.y), (5, 0));
        assert_eq!(snap.next_color, BlockColor::Blue);
        assert!(snap.playable());
    }

    #[test]
    fn snapshot_into_overwrites_previous_frame() {
        let mut snap = GameSnapshot::default();
        snap.board[0][0] = Some(BlockColor::Red);
        snap.paused = true;

        GameState::new(3).snapshot_into(&mut snap);
        assert_eq!(snap.board[0][0], None);
        assert!(!snap.paused);
    }
}
