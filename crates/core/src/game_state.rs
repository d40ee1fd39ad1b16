//! Game state module - the reducer
//!
//! [`GameState`] is an immutable snapshot of a game. [`reduce`] consumes one
//! [`GameAction`] against a snapshot and produces the next one; it is the only
//! way a state changes after construction. Illegal moves, rotations and holds
//! are not errors: they return the state unchanged.
//!
//! The reducer takes the state by value so it can reuse storage internally.
//! [`GameState::apply`] borrows instead and leaves the input untouched; the
//! board's copy-on-write storage keeps that cheap.

use crate::board::Board;
use crate::collision::{collides, overlaps, placement_overlaps};
use crate::pieces::{cells_at, get_rotation};
use crate::rng::{difficulty_hole, draw_piece};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// The falling, player-controlled piece
///
/// Everything after `rotation` is derived from `kind`, `x`, `y` and
/// `rotation` through the piece catalog. Use the constructors so the cache
/// stays consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Unnormalised; the catalog applies the modulo on lookup.
    pub rotation: usize,
    pub height: i8,
    pub left_reach: i8,
    pub right_reach: i8,
    pub color: CellColor,
    pub cells: [Coord; 4],
}

impl ActivePiece {
    pub fn new(kind: PieceKind, x: i8, y: i8, rotation: usize) -> Self {
        let state = get_rotation(kind, rotation);
        Self {
            kind,
            x,
            y,
            rotation,
            height: state.height,
            left_reach: state.left_reach,
            right_reach: state.right_reach,
            color: kind.color(),
            cells: cells_at(kind, rotation, x, y),
        }
    }

    /// New piece at the spawn pose
    pub fn spawn(kind: PieceKind) -> Self {
        Self::new(kind, SPAWN_X, SPAWN_Y, 0)
    }

    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self::new(self.kind, self.x + dx, self.y + dy, self.rotation)
    }

    pub fn rotated(&self) -> Self {
        Self::new(self.kind, self.x, self.y, self.rotation.wrapping_add(1))
    }
}

/// Whether moves still apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Ended,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    ended: bool,
    /// Locks since the last reset; times difficulty rows.
    pieces_locked: u32,
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    hold: PieceKind,
    /// Game time in half-seconds; seeds every draw.
    elapsed_half_secs: u64,
    score: u32,
    level: u32,
    high_score: u32,
}

/// Level reached with a given score
pub fn level_for_score(score: u32) -> u32 {
    INITIAL_LEVEL + score / LEVEL_SCORE_STEP
}

/// Locks between difficulty rows at a given level
pub fn difficulty_interval(level: u32) -> u32 {
    DIFFICULTY_ROWS
        .saturating_sub(level)
        .max(MIN_DIFFICULTY_INTERVAL)
}

/// Apply one action to a state, producing the next state.
pub fn reduce(state: GameState, action: GameAction) -> GameState {
    if state.ended && action != GameAction::Reset {
        return state;
    }

    match action {
        GameAction::Tick => state.tick(),
        GameAction::MoveLeft => state.move_left(),
        GameAction::MoveRight => state.move_right(),
        GameAction::MoveDown => state.move_down(),
        GameAction::Rotate => state.rotate(),
        GameAction::Hold => state.hold(),
        GameAction::Lock => state.lock(),
        GameAction::Reset => state.reset(),
        GameAction::GameEnd => GameState {
            ended: true,
            ..state
        },
    }
}

impl GameState {
    /// Create the initial game state
    pub fn new() -> Self {
        Self {
            ended: false,
            pieces_locked: 0,
            board: Board::new(),
            active: ActivePiece::spawn(draw_piece(0)),
            next: draw_piece(8),
            hold: draw_piece(4),
            elapsed_half_secs: 0,
            score: 0,
            level: INITIAL_LEVEL,
            high_score: 0,
        }
    }

    /// Apply an action without consuming this state
    pub fn apply(&self, action: GameAction) -> GameState {
        reduce(self.clone(), action)
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    pub fn phase(&self) -> GamePhase {
        if self.ended {
            GamePhase::Ended
        } else {
            GamePhase::Playing
        }
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn hold_kind(&self) -> PieceKind {
        self.hold
    }

    /// Game time in half-seconds
    pub fn elapsed_half_secs(&self) -> u64 {
        self.elapsed_half_secs
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Locks between difficulty rows at the current level
    pub fn difficulty_interval(&self) -> u32 {
        difficulty_interval(self.level)
    }

    /// Locks left until a difficulty row is inserted (1 = the next lock)
    pub fn locks_until_difficulty_row(&self) -> u32 {
        let interval = self.difficulty_interval();
        interval - self.pieces_locked % interval
    }

    /// Does the live piece share a cell with the board?
    pub fn active_overlaps(&self) -> bool {
        overlaps(&self.board, &self.active)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        for cell in self.board.cells() {
            if let Some(slot) = grid_slot(cell.x, cell.y) {
                out.board[slot.1][slot.0] = Some(cell.color);
            }
        }
        out.active = self.active.cells;
        out.active_color = self.active.color;
        out.next = self.next;
        out.hold = self.hold;
        out.ended = self.ended;
        out.score = self.score;
        out.level = self.level;
        out.high_score = self.high_score;
        out.elapsed_half_secs = self.elapsed_half_secs;
        out.pieces_locked = self.pieces_locked;
        out.locks_until_row = self.locks_until_difficulty_row();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Has the active piece reached the floor or a locked cell?
    fn has_landed(&self) -> bool {
        self.active.y + self.active.height >= LAST_ROW || collides(&self.board, &self.active, 0, 1)
    }

    fn tick(mut self) -> Self {
        if self.has_landed() {
            return self.lock();
        }
        self.active = self.active.moved(0, 1);
        self.elapsed_half_secs += TICK_HALF_SECS;
        self.level = level_for_score(self.score);
        self
    }

    fn move_left(mut self) -> Self {
        let piece = self.active;
        if piece.x - piece.left_reach >= -1 && !collides(&self.board, &piece, -1, 0) {
            self.active = piece.moved(-1, 0);
        }
        self
    }

    fn move_right(mut self) -> Self {
        let piece = self.active;
        if piece.x + piece.right_reach <= BOARD_WIDTH as i8 - 2
            && !collides(&self.board, &piece, 1, 0)
        {
            self.active = piece.moved(1, 0);
        }
        self
    }

    fn move_down(mut self) -> Self {
        if self.has_landed() {
            return self.lock();
        }
        self.active = self.active.moved(0, 1);
        self
    }

    fn rotate(mut self) -> Self {
        let candidate = self.active.rotated();
        if !placement_overlaps(&self.board, &candidate.cells) {
            self.active = candidate;
        }
        self
    }

    fn hold(mut self) -> Self {
        let piece = self.active;
        let candidate = ActivePiece::new(self.hold, piece.x, piece.y, 0);
        if placement_overlaps(&self.board, &candidate.cells) {
            return self;
        }
        self.active = candidate;
        self.hold = piece.kind;
        self
    }

    fn lock(mut self) -> Self {
        let piece = self.active;

        // A piece poking above the board never becomes part of it.
        if piece.cells.iter().any(|c| c.y < 0) {
            self.ended = true;
            return self;
        }

        let mut board = self.board.with_cells(&piece.cells, piece.color);
        if (self.pieces_locked + 1) % self.difficulty_interval() == 0 {
            board = board.push_difficulty_row(difficulty_hole(self.elapsed_half_secs));
        }

        let (board, cleared) = board.clear_full_rows();
        self.board = board;
        self.score += cleared as u32 * ROW_CLEAR_SCORE;
        self.pieces_locked += 1;

        self.active = ActivePiece::spawn(self.next);
        self.next = draw_piece(self.elapsed_half_secs);
        self.high_score = self.high_score.max(self.score);

        if overlaps(&self.board, &self.active) {
            self.ended = true;
        }
        self
    }

    fn reset(self) -> Self {
        // One and two seconds after the reset moment.
        let t = self.elapsed_half_secs;
        Self {
            ended: false,
            pieces_locked: 0,
            board: Board::new(),
            active: ActivePiece::spawn(draw_piece(t)),
            next: draw_piece(t + 2),
            hold: draw_piece(t + 4),
            elapsed_half_secs: 0,
            score: 0,
            level: INITIAL_LEVEL,
            high_score: self.high_score,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn grid_slot(x: i8, y: i8) -> Option<(usize, usize)> {
    if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y > LAST_ROW {
        return None;
    }
    Some((x as usize, y as usize))
}
