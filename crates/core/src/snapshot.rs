//! Render-ready view of a [`GameState`](crate::GameState).
//!
//! A snapshot is a plain `Copy` value: the visible board as a colour grid plus
//! the HUD numbers. Frontends read it and never touch the reducer's state.

use crate::types::{CellColor, Coord, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

pub type BoardGrid = [[Option<CellColor>; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells indexed `[y][x]`; rows above the board are not included.
    pub board: BoardGrid,
    pub active: [Coord; 4],
    pub active_color: CellColor,
    pub next: PieceKind,
    pub hold: PieceKind,
    pub ended: bool,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    /// Game time in half-seconds
    pub elapsed_half_secs: u64,
    pub pieces_locked: u32,
    /// Locks left until the next difficulty row
    pub locks_until_row: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: [Coord::new(0, 0); 4],
            active_color: CellColor::Grey,
            next: PieceKind::I,
            hold: PieceKind::I,
            ended: false,
            score: 0,
            level: 0,
            high_score: 0,
            elapsed_half_secs: 0,
            pieces_locked: 0,
            locks_until_row: 0,
        }
    }
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Colour to draw at a visible cell, the active piece on top.
    pub fn cell_color(&self, x: i8, y: i8) -> Option<CellColor> {
        if self.active.iter().any(|c| c.x == x && c.y == y) {
            return Some(self.active_color);
        }
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        self.board[y as usize][x as usize]
    }

    /// Elapsed play time as `MM:SS`
    pub fn elapsed_text(&self) -> String {
        format_elapsed(self.elapsed_half_secs)
    }

    /// Countdown line for the next difficulty row
    pub fn difficulty_text(&self) -> String {
        if self.locks_until_row <= 1 {
            "NEW ROW INCOMING".to_string()
        } else {
            format!("New row in: {} blocks", self.locks_until_row)
        }
    }
}

/// Format half-seconds as zero-padded `MM:SS`; minutes keep growing past 99.
pub fn format_elapsed(half_secs: u64) -> String {
    let secs = half_secs / 2;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
