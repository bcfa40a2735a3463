//! GameView: paints a `GameSnapshot` into a framebuffer.
//!
//! Layout: the bordered playfield, and to its right (when the terminal is wide
//! enough) a panel with the score box, level, lines, the next-colour preview and
//! key help. Pure; no terminal I/O.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, GRID_COLS, GRID_ROWS};

/// Width of the side panel in terminal columns
const PANEL_W: u16 = 16;
/// Gap between the playfield frame and the panel
const PANEL_GAP: u16 = 2;

const HELP: [&str; 6] = [
    "<- -> move",
    "down  soft drop",
    "space hard drop",
    "p     pause",
    "r     restart",
    "q     quit",
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal columns per grid cell
    cell_w: u16,
    /// Terminal rows per grid cell
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square in most fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered playfield
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_COLS as u16 * self.cell_w + 2,
            GRID_ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let with_panel = viewport.width >= frame_w + PANEL_GAP + PANEL_W;
        let total_w = if with_panel {
            frame_w + PANEL_GAP + PANEL_W
        } else {
            frame_w
        };
        let origin_x = viewport.width.saturating_sub(total_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.draw_box(origin_x, origin_y, frame_w, frame_h, CellStyle::default());
        self.draw_grid(fb, snap, origin_x, origin_y);

        if with_panel {
            self.draw_panel(fb, snap, origin_x + frame_w + PANEL_GAP, origin_y);
        }

        if snap.game_over {
            self.draw_banner(fb, origin_x, origin_y, &["GAME OVER", "r: restart"]);
        } else if snap.paused {
            self.draw_banner(fb, origin_x, origin_y, &["PAUSED", "p: resume"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin_x: u16, origin_y: u16) {
        let empty = CellStyle::fg(Rgb::GRID).dim();
        for y in 0..GRID_ROWS as i8 {
            for x in 0..GRID_COLS as i8 {
                match snap.cell(x, y) {
                    Some(color) => self.draw_block(fb, origin_x, origin_y, x, y, color),
                    None => self.fill_cell(fb, origin_x, origin_y, x, y, '·', empty),
                }
            }
        }

        let active = snap.active;
        if active.y >= 0 {
            self.draw_block(fb, origin_x, origin_y, active.x, active.y, active.color);
        }
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: i8,
        y: i8,
        color: BlockColor,
    ) {
        let style = CellStyle::fg(Rgb::from(color)).bold();
        self.fill_cell(fb, origin_x, origin_y, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || y < 0 {
            return;
        }
        let px = origin_x + 1 + x as u16 * self.cell_w;
        let py = origin_y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        // Score box: "SCORE" and the value on one line.
        fb.draw_box(x, top, PANEL_W, 3, CellStyle::default());
        fb.put_str(x + 2, top + 1, "SCORE", label);
        fb.put_u32(x + 8, top + 1, snap.score, value);

        fb.put_str(x, top + 4, "LEVEL", label);
        fb.put_u32(x, top + 5, snap.level, value);
        fb.put_str(x + 8, top + 4, "LINES", label);
        fb.put_u32(x + 8, top + 5, snap.lines, value);

        fb.put_str(x, top + 7, "NEXT", label);
        let preview_w = self.cell_w + 4;
        fb.draw_box(x, top + 8, preview_w, 3, CellStyle::default());
        let style = CellStyle::fg(Rgb::from(snap.next_color)).bold();
        fb.fill_rect(x + 2, top + 9, self.cell_w, 1, '█', style);

        let help = CellStyle::fg(Rgb::new(150, 150, 150)).dim();
        for (i, line) in HELP.iter().enumerate() {
            let y = top + 12 + i as u16;
            if y >= fb.height() {
                break;
            }
            fb.put_str(x, y, line, help);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16, lines: &[&str]) {
        let (frame_w, frame_h) = self.frame_size();
        let style = CellStyle::default().bold();
        let mid = origin_y + frame_h / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = origin_x + frame_w.saturating_sub(text_w) / 2;
            fb.put_str(x, mid + i as u16, text, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn frame_size_accounts_for_cell_width() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (12, 22));
        assert_eq!(GameView::new(0, 0).frame_size(), (12, 22));
    }

    #[test]
    fn narrow_viewport_skips_panel() {
        let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(22, 22));
        assert!(!all_text(&fb).contains("SCORE"));
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    }

    #[test]
    fn banner_for_game_over_wins_over_pause() {
        let snap = GameSnapshot {
            paused: true,
            game_over: true,
            ..GameSnapshot::default()
        };
        let text = all_text(&GameView::default().render(&snap, Viewport::new(40, 24)));
        assert!(text.contains("GAME OVER"));
        assert!(!text.contains("PAUSED"));
    }
}
