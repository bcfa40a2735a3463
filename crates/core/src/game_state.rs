//! Game state module - one explicitly owned play session
//!
//! This ties the board, the active piece, the colour source and scoring together.
//! The host calls into it once per frame: moves from input, `tick` with the frame
//! time, then a snapshot for drawing. Nothing here blocks or performs I/O.

use log::{debug, info};

use crate::board::Board;
use crate::rng::{ColorSource, SimpleRng};
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{
    BlockColor, GameAction, MoveDirection, Rules, SessionPhase, SPAWN_X, SPAWN_Y, STARTING_LEVEL,
};

/// Number of cells a piece occupies
pub const PIECE_CELLS: usize = 1;

/// Cell offsets occupied by a piece, relative to its position
pub const PIECE_SHAPE: [(i8, i8); PIECE_CELLS] = [(0, 0)];

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub x: i8,
    pub y: i8,
    pub color: BlockColor,
}

impl Piece {
    /// Create a new piece at the spawn position
    pub fn spawn(color: BlockColor) -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
            color,
        }
    }

    /// Absolute grid coordinates of every occupied cell
    pub fn cells(&self) -> [(i8, i8); PIECE_CELLS] {
        PIECE_SHAPE.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check that every cell is inside the walls, above the floor and not on a
    /// locked block. Cells above the grid never collide.
    pub fn is_valid(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| board.is_free(x, y))
    }
}

/// Outcome of the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Where the piece came to rest
    pub piece: Piece,
    /// Cells written into the grid (0 when the piece sat fully above it)
    pub cells_locked: u32,
    pub lines_cleared: u32,
    pub points: u32,
    /// Levels gained by this lock
    pub levels_gained: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R: ColorSource = SimpleRng> {
    board: Board,
    active: Piece,
    next_color: BlockColor,
    colors: R,
    rules: Rules,
    /// Monotonic session id (increments on restart).
    episode_id: u32,
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    paused: bool,
    game_over: bool,
}

impl GameState<SimpleRng> {
    /// Create a new session drawing colours from a seeded RNG
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<R: ColorSource> GameState<R> {
    /// Create a new session with default rules and the given colour source
    pub fn with_source(colors: R) -> Self {
        Self::with_rules(Rules::default(), colors)
    }

    pub fn with_rules(rules: Rules, colors: R) -> Self {
        Self::from_board(Board::new(), rules, colors)
    }

    /// Start a session on a pre-filled board.
    ///
    /// The first piece spawns immediately, so a board blocked at the spawn cell
    /// yields a session that is already over.
    pub fn from_board(board: Board, rules: Rules, mut colors: R) -> Self {
        let first = colors.next_color();
        let next_color = colors.next_color();
        let mut state = Self {
            board,
            active: Piece::spawn(first),
            next_color,
            colors,
            rules,
            episode_id: 0,
            last_event: None,
            score: 0,
            level: STARTING_LEVEL,
            lines: 0,
            fall_interval_ms: fall_interval_ms(STARTING_LEVEL, &rules),
            fall_timer_ms: 0,
            paused: false,
            game_over: false,
        };
        state.check_spawn();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next_color(&self) -> BlockColor {
        self.next_color
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> SessionPhase {
        if self.game_over {
            SessionPhase::GameOver
        } else if self.paused {
            SessionPhase::Paused
        } else {
            SessionPhase::Playing
        }
    }

    /// True when moves and ticks are accepted
    pub fn is_playable(&self) -> bool {
        !self.paused && !self.game_over
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.next_color = self.next_color;
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the active piece with a fresh one in the previewed colour.
    ///
    /// Returns false (and ends the session) when the spawn cell is taken.
    pub fn spawn_piece(&mut self) -> bool {
        self.active = Piece::spawn(self.next_color);
        self.next_color = self.colors.next_color();
        self.check_spawn()
    }

    fn check_spawn(&mut self) -> bool {
        if self.active.is_valid(&self.board) {
            return true;
        }
        self.game_over = true;
        info!(
            "game over: spawn at ({}, {}) blocked, score={} level={} lines={}",
            self.active.x, self.active.y, self.score, self.level, self.lines
        );
        false
    }

    /// Apply a translation, then undo it if the result is invalid.
    ///
    /// The move is always attempted first; validity is checked afterwards.
    fn try_translate(&mut self, dx: i8, dy: i8) -> bool {
        self.active.x += dx;
        self.active.y += dy;
        if self.active.is_valid(&self.board) {
            return true;
        }
        self.active.x -= dx;
        self.active.y -= dy;
        false
    }

    /// One row down, or lock where the piece stands.
    fn step_down(&mut self) -> bool {
        if self.try_translate(0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    /// Try to move the active piece one cell.
    ///
    /// A blocked soft drop locks the piece. Returns whether the piece moved.
    pub fn attempt_move(&mut self, direction: MoveDirection) -> bool {
        if !self.is_playable() {
            return false;
        }
        match direction {
            MoveDirection::SoftDrop => self.step_down(),
            MoveDirection::Left | MoveDirection::Right => {
                let (dx, dy) = direction.delta();
                self.try_translate(dx, dy)
            }
        }
    }

    /// Drop to the lowest reachable row and lock. Returns rows travelled.
    pub fn attempt_hard_drop(&mut self) -> u32 {
        if !self.is_playable() {
            return 0;
        }
        let start_y = self.active.y;
        while self.active.is_valid(&self.board) {
            self.active.y += 1;
        }
        // The loop exits one row past the last valid position.
        self.active.y -= 1;
        let dropped = (self.active.y - start_y).max(0) as u32;
        self.lock_piece();
        dropped
    }

    /// Lock the active piece into the grid, clear rows, score, and spawn the next
    pub fn lock_piece(&mut self) {
        if self.game_over {
            return;
        }

        let piece = self.active;
        let cells_locked = self.board.lock_cells(&piece.cells(), piece.color) as u32;
        let lines_cleared = self.board.clear_lines() as u32;

        let points = line_clear_points(lines_cleared, &self.rules);
        let level_before = self.level;
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.level = level_for_lines(self.lines, &self.rules);
        self.fall_interval_ms = fall_interval_ms(self.level, &self.rules);
        let levels_gained = self.level - level_before;

        debug!(
            "locked {:?} at ({}, {}): {} cells, {} lines, +{} points",
            piece.color, piece.x, piece.y, cells_locked, lines_cleared, points
        );
        if levels_gained > 0 {
            info!(
                "level {} reached at {} lines, fall interval {}ms",
                self.level, self.lines, self.fall_interval_ms
            );
        }

        self.last_event = Some(LockEvent {
            piece,
            cells_locked,
            lines_cleared,
            points,
            levels_gained,
        });

        self.spawn_piece();
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the fall timer by one frame
    ///
    /// When the accumulated time reaches the fall interval the timer resets and
    /// the piece takes one soft-drop step. Returns whether that step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_playable() {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return false;
        }

        self.fall_timer_ms = 0;
        self.step_down();
        true
    }

    /// Switch between playing and paused. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        info!("{}", if self.paused { "paused" } else { "resumed" });
        true
    }

    /// Throw away the session and start over on an empty board
    pub fn restart(&mut self) {
        self.board.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = None;
        self.score = 0;
        self.level = STARTING_LEVEL;
        self.lines = 0;
        self.fall_interval_ms = fall_interval_ms(STARTING_LEVEL, &self.rules);
        self.fall_timer_ms = 0;
        self.paused = false;
        self.game_over = false;
        info!("restart: episode {}", self.episode_id);
        self.spawn_piece();
    }

    /// Apply a game action. Returns whether the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft | GameAction::MoveRight => action
                .direction()
                .map_or(false, |direction| self.attempt_move(direction)),
            GameAction::SoftDrop => {
                // A blocked soft drop still changes the session by locking.
                let was_playable = self.is_playable();
                self.attempt_move(MoveDirection::SoftDrop);
                was_playable
            }
            GameAction::HardDrop => {
                let was_playable = self.is_playable();
                self.attempt_hard_drop();
                was_playable
            }
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
