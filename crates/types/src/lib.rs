//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions can be used by the engine, the terminal view and the host loop.
//!
//! # Grid Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn position**: (`GRID_COLS / 2`, 0) = (5, 0)
//!
//! # Timing and Scoring Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame period (~60 FPS) |
//! | `INITIAL_FALL_INTERVAL_MS` | 500 | Fall interval at level 1 |
//! | `FALL_INTERVAL_STEP_MS` | 50 | Interval reduction per level |
//! | `MIN_FALL_INTERVAL_MS` | 100 | Interval floor |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed per level |
//! | `POINTS_PER_LINE` | 100 | Score per cleared line |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{BlockColor, GameAction, GRID_COLS, GRID_ROWS};
//!
//! assert_eq!(BlockColor::from_str("cyan"), Some(BlockColor::Cyan));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!((GRID_COLS, GRID_ROWS), (10, 20));
//! ```

/// Grid width in cells (10 columns)
pub const GRID_COLS: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_ROWS: u8 = 20;

/// Column where every new piece spawns.
pub const SPAWN_X: i8 = (GRID_COLS / 2) as i8;

/// Row where every new piece spawns.
pub const SPAWN_Y: i8 = 0;

/// Host frame period in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Fall interval at level 1
pub const INITIAL_FALL_INTERVAL_MS: u32 = 500;

/// Fall interval reduction applied for each level gained
pub const FALL_INTERVAL_STEP_MS: u32 = 50;

/// The fall interval never drops below this
pub const MIN_FALL_INTERVAL_MS: u32 = 100;

/// Cumulative cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Score awarded for each cleared line
pub const POINTS_PER_LINE: u32 = 100;

/// Level of a fresh session
pub const STARTING_LEVEL: u32 = 1;

/// The fixed seven-colour block palette.
///
/// Locked cells remember the colour of the piece that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl BlockColor {
    /// All palette entries, in draw order for the random colour source.
    pub const PALETTE: [BlockColor; 7] = [
        BlockColor::Cyan,
        BlockColor::Yellow,
        BlockColor::Purple,
        BlockColor::Green,
        BlockColor::Red,
        BlockColor::Blue,
        BlockColor::Orange,
    ];

    /// Parse a colour name (case-insensitive)
    ///
    /// ```
    /// use tui_blockfall_types::BlockColor;
    ///
    /// assert_eq!(BlockColor::from_str("Red"), Some(BlockColor::Red));
    /// assert_eq!(BlockColor::from_str("magenta"), Some(BlockColor::Purple));
    /// assert_eq!(BlockColor::from_str("pink"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cyan" => Some(BlockColor::Cyan),
            "yellow" => Some(BlockColor::Yellow),
            "purple" | "magenta" => Some(BlockColor::Purple),
            "green" => Some(BlockColor::Green),
            "red" => Some(BlockColor::Red),
            "blue" => Some(BlockColor::Blue),
            "orange" => Some(BlockColor::Orange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Cyan => "cyan",
            BlockColor::Yellow => "yellow",
            BlockColor::Purple => "purple",
            BlockColor::Green => "green",
            BlockColor::Red => "red",
            BlockColor::Blue => "blue",
            BlockColor::Orange => "orange",
        }
    }

    /// 24-bit colour used when drawing a block.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            BlockColor::Cyan => (0, 255, 255),
            BlockColor::Yellow => (255, 255, 0),
            BlockColor::Purple => (160, 32, 240),
            BlockColor::Green => (0, 255, 0),
            BlockColor::Red => (255, 0, 0),
            BlockColor::Blue => (0, 0, 255),
            BlockColor::Orange => (255, 165, 0),
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(color)`: locked block of that colour
pub type Cell = Option<BlockColor>;

/// Single-step translations of the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
    /// One row down; locks the piece when blocked
    SoftDrop,
}

impl MoveDirection {
    /// Cell offset applied by this move
    pub fn delta(&self) -> (i8, i8) {
        match self {
            MoveDirection::Left => (-1, 0),
            MoveDirection::Right => (1, 0),
            MoveDirection::SoftDrop => (0, 1),
        }
    }
}

/// Actions the host can feed into a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if blocked
    SoftDrop,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Toggle pause
    Pause,
    /// Start a fresh session
    Restart,
}

impl GameAction {
    /// Parse an action name (case-insensitive, camelCase accepted)
    ///
    /// ```
    /// use tui_blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("PAUSE"), Some(GameAction::Pause));
    /// assert_eq!(GameAction::from_str("rotateCw"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }

    /// The translation this action requests, if it is a plain move
    pub fn direction(&self) -> Option<MoveDirection> {
        match self {
            GameAction::MoveLeft => Some(MoveDirection::Left),
            GameAction::MoveRight => Some(MoveDirection::Right),
            GameAction::SoftDrop => Some(MoveDirection::SoftDrop),
            _ => None,
        }
    }
}

/// Session-level state machine
///
/// Playing ⇄ Paused via toggle, Playing → GameOver when a spawn collides,
/// GameOver → Playing only through restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Playing,
    Paused,
    GameOver,
}

/// Tunable fall-speed and scoring rules.
///
/// `Rules::default()` matches the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub initial_fall_interval_ms: u32,
    pub fall_interval_step_ms: u32,
    pub min_fall_interval_ms: u32,
    pub lines_per_level: u32,
    pub points_per_line: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            initial_fall_interval_ms: INITIAL_FALL_INTERVAL_MS,
            fall_interval_step_ms: FALL_INTERVAL_STEP_MS,
            min_fall_interval_ms: MIN_FALL_INTERVAL_MS,
            lines_per_level: LINES_PER_LEVEL,
            points_per_line: POINTS_PER_LINE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_match_constants() {
        let rules = Rules::default();
        assert_eq!(rules.initial_fall_interval_ms, 500);
        assert_eq!(rules.fall_interval_step_ms, 50);
        assert_eq!(rules.min_fall_interval_ms, 100);
        assert_eq!(rules.lines_per_level, 10);
        assert_eq!(rules.points_per_line, 100);
    }

    #[test]
    fn spawn_column_is_grid_center() {
        assert_eq!(SPAWN_X, 5);
        assert_eq!(SPAWN_Y, 0);
    }

    #[test]
    fn palette_names_roundtrip() {
        for color in BlockColor::PALETTE {
            assert_eq!(BlockColor::from_str(color.as_str()), Some(color));
        }
    }

    #[test]
    fn only_moves_have_directions() {
        assert_eq!(GameAction::MoveLeft.direction(), Some(MoveDirection::Left));
        assert_eq!(GameAction::SoftDrop.direction(), Some(MoveDirection::SoftDrop));
        assert_eq!(GameAction::HardDrop.direction(), None);
        assert_eq!(GameAction::Restart.direction(), None);
        assert_eq!(MoveDirection::Right.delta(), (1, 0));
    }
}
