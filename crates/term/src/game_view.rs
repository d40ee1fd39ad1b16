//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-tested against framebuffer contents.

use crate::core::{preview_cells, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const BLOCK: char = '█';

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

/// Terminal colour of a cell colour.
pub fn cell_rgb(color: CellColor) -> Rgb {
    match color {
        CellColor::Orange => Rgb::new(255, 165, 0),
        CellColor::Purple => Rgb::new(200, 120, 220),
        CellColor::Cyan => Rgb::new(80, 220, 220),
        CellColor::Yellow => Rgb::new(240, 220, 80),
        CellColor::Blue => Rgb::new(80, 120, 220),
        CellColor::Green => Rgb::new(100, 220, 120),
        CellColor::Red => Rgb::new(220, 80, 80),
        CellColor::Grey => Rgb::new(128, 128, 128),
    }
}

/// Lays out the board frame, the side panel and the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

/// Top-left corner and size of the bordered board frame.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_w = BOARD_WIDTH as u16 * self.cell_w;
        let board_h = BOARD_HEIGHT as u16 * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(board_w + 2) / 2,
            y: viewport.height.saturating_sub(board_h + 3) / 2,
            w: board_w + 2,
            h: board_h + 2,
        };

        fb.fill_rect(frame.x + 1, frame.y + 1, board_w, board_h, ' ', CellStyle::new(PLAY_BG, PLAY_BG));
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match snap.cell_color(x, y) {
                    Some(color) => self.draw_board_cell(fb, frame, x as u16, y as u16, color),
                    None => self.fill_cell(fb, frame, x as u16, y as u16, '·', empty),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);
        self.draw_status_line(fb, snap, frame);

        if snap.ended {
            draw_overlay(fb, frame, &["GAME OVER", "R to restart"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, color: CellColor) {
        let style = CellStyle::new(cell_rgb(color), PLAY_BG).bold();
        self.fill_cell(fb, frame, x, y, BLOCK, style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Draw a rotation-0 preview of `kind` with its top-left at `(x, y)`.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(cell_rgb(kind.color()), SCREEN_BG);
        // Rotation-0 shapes leave their top row empty.
        let top = preview_cells(kind).iter().map(|c| c.y).min().unwrap_or(0);
        for c in preview_cells(kind) {
            let px = x + c.x as u16 * self.cell_w;
            let py = y + (c.y - top) as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("HIGH SCORE", snap.high_score),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "TIME", label);
        fb.put_str(panel_x, y + 1, &snap.elapsed_text(), value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y + 1, snap.next);
        y += 2 + 3 * self.cell_h;

        fb.put_str(panel_x, y, "HOLD", label);
        self.draw_preview(fb, panel_x, y + 1, snap.hold);
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let text = snap.difficulty_text();
        let style = if snap.locks_until_row <= 1 {
            CellStyle::new(Rgb::new(255, 120, 80), SCREEN_BG).bold()
        } else {
            CellStyle::new(Rgb::new(160, 160, 160), SCREEN_BG)
        };
        let w = text.chars().count() as u16;
        let x = frame.x + frame.w.saturating_sub(w) / 2;
        fb.put_str(x, frame.y + frame.h, &text, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
    if f.w < 2 || f.h < 2 {
        return;
    }
    let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

    fb.put_char(f.x, f.y, '┌', style);
    fb.put_char(right, f.y, '┐', style);
    fb.put_char(f.x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for x in f.x + 1..right {
        fb.put_char(x, f.y, '─', style);
        fb.put_char(x, bottom, '─', style);
    }
    for y in f.y + 1..bottom {
        fb.put_char(f.x, y, '│', style);
        fb.put_char(right, y, '│', style);
    }
}

/// Centre lines of text on the board frame.
fn draw_overlay(fb: &mut FrameBuffer, f: Frame, lines: &[&str]) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let top = f.y + (f.h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        let w = line.chars().count() as u16;
        let x = f.x + f.w.saturating_sub(w) / 2;
        fb.put_str(x, top + i as u16, line, style);
    }
}
