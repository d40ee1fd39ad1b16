//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (reducer, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 visible rows (indexed 0-19, negative rows sit above the board)
//! - **Spawn pose**: anchor (4, -1), rotation 0
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_HALF_SECS` | 1 | Game time added by one tick, in half-seconds |
//! | `DIFFICULTY_ROWS` | 15 | Base lock count between difficulty rows |
//! | `MIN_DIFFICULTY_INTERVAL` | 2 | Floor for the difficulty row interval |
//! | `ROW_CLEAR_SCORE` | 100 | Points per cleared row |
//! | `LEVEL_SCORE_STEP` | 1000 | Points per level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{CellColor, Coord, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let cell = Coord::new(4, -1).offset(0, 1);
//! assert_eq!(cell, Coord::new(4, 0));
//! assert!(!cell.is_out_of_bounds());
//! assert!(Coord::new(BOARD_WIDTH as i8, 0).is_out_of_bounds());
//!
//! assert_eq!(PieceKind::T.color(), CellColor::Purple);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 visible rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Index of the last in-bounds row
pub const LAST_ROW: i8 = BOARD_HEIGHT as i8 - 1;

/// Spawn anchor for a new active piece
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = -1;

/// Game time added by one tick, in half-seconds
///
/// Game time is independent of how often the clock actually fires.
pub const TICK_HALF_SECS: u64 = 1;

/// Base number of locks between difficulty rows (reduced by level)
pub const DIFFICULTY_ROWS: u32 = 15;

/// Lower bound on the difficulty row interval
pub const MIN_DIFFICULTY_INTERVAL: u32 = 2;

/// Columns the difficulty row hole is drawn from
pub const DIFFICULTY_HOLE_SPAN: u32 = 8;

/// Points awarded per cleared row
pub const ROW_CLEAR_SCORE: u32 = 100;

/// Points needed per level
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// Level at game start
pub const INITIAL_LEVEL: u32 = 1;

/// Board-relative cell coordinate `(x, y)`.
///
/// `y` grows downwards; negative rows are above the visible board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Outside the playfield on the left, right or bottom.
    ///
    /// Rows above the board (`y < 0`) are not out of bounds.
    pub const fn is_out_of_bounds(self) -> bool {
        self.x < 0 || self.x >= BOARD_WIDTH as i8 || self.y > LAST_ROW
    }
}

/// The seven piece kinds
///
/// Declaration order is the order the sequencer draws from:
/// `seed % 7` indexes [`PieceKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    L,
    T,
    I,
    O,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in sequencer order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::L,
        PieceKind::T,
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Display colour of the kind
    pub fn color(&self) -> CellColor {
        match self {
            PieceKind::L => CellColor::Orange,
            PieceKind::T => CellColor::Purple,
            PieceKind::I => CellColor::Cyan,
            PieceKind::O => CellColor::Yellow,
            PieceKind::J => CellColor::Blue,
            PieceKind::S => CellColor::Green,
            PieceKind::Z => CellColor::Red,
        }
    }
}

/// Colour of an occupied cell
///
/// One colour per piece kind plus `Grey` for difficulty rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    Orange,
    Purple,
    Cyan,
    Yellow,
    Blue,
    Green,
    Red,
    Grey,
}

/// Game actions applied by the reducer
///
/// The set is closed: every transition of the game is one of these.
/// `Tick` comes from the clock, the movement/hold/reset actions from the
/// input source. `Lock` is normally derived from a landing `Tick` or
/// `MoveDown` but can be applied directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Gravity step from the clock
    Tick,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it has landed
    MoveDown,
    /// Advance to the next rotation state
    Rotate,
    /// Swap the active piece with the held piece
    Hold,
    /// Commit the active piece to the board
    Lock,
    /// Start a fresh game
    Reset,
    /// End the game
    GameEnd,
}
