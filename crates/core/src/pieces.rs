//! Pieces module - piece shapes and rotation tables
//!
//! Each kind has a fixed, ordered list of rotation states. A state is four
//! cell offsets from the piece anchor plus an authored bounding box used for
//! cheap boundary pre-checks before full collision testing.
//!
//! Rotation indices are never normalised by the state machine; every lookup
//! goes through [`get_rotation`], which applies the modulo.

use crate::types::{Coord, PieceKind};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

/// One rotation state of a piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    pub cells: PieceShape,
    /// Largest vertical offset; the piece has landed on the floor once
    /// `y + height` reaches the last row.
    pub height: i8,
    /// `x - left_reach >= -1` iff one step left stays inside column 0.
    pub left_reach: i8,
    /// `x + right_reach <= 8` iff one step right stays inside column 9.
    pub right_reach: i8,
}

const fn state(cells: PieceShape, height: i8, left_reach: i8, right_reach: i8) -> RotationState {
    RotationState {
        cells,
        height,
        left_reach,
        right_reach,
    }
}

static L_STATES: [RotationState; 4] = [
    state([(0, 1), (1, 1), (2, 1), (2, 2)], 2, 2, 2),
    state([(1, 0), (1, 1), (1, 2), (0, 2)], 2, 2, 1),
    state([(0, 0), (0, 1), (1, 1), (2, 1)], 1, 2, 2),
    state([(1, 0), (1, 1), (1, 2), (2, 0)], 2, 1, 2),
];

static T_STATES: [RotationState; 4] = [
    state([(0, 1), (1, 1), (2, 1), (1, 2)], 2, 2, 2),
    state([(1, 0), (1, 1), (1, 2), (0, 1)], 2, 2, 1),
    state([(0, 1), (1, 1), (2, 1), (1, 0)], 1, 2, 2),
    state([(1, 0), (1, 1), (1, 2), (2, 1)], 2, 1, 2),
];

static I_STATES: [RotationState; 2] = [
    state([(0, 1), (1, 1), (2, 1), (3, 1)], 1, 2, 3),
    state([(1, 0), (1, 1), (1, 2), (1, 3)], 3, 1, 1),
];

static O_STATES: [RotationState; 1] = [state([(0, 1), (1, 1), (0, 2), (1, 2)], 2, 2, 1)];

static J_STATES: [RotationState; 4] = [
    state([(0, 1), (1, 1), (0, 2), (2, 1)], 2, 2, 2),
    state([(1, 0), (1, 1), (1, 2), (0, 0)], 2, 2, 1),
    state([(0, 1), (1, 1), (2, 1), (2, 0)], 1, 2, 2),
    state([(1, 0), (1, 1), (1, 2), (2, 2)], 2, 1, 2),
];

static S_STATES: [RotationState; 2] = [
    state([(0, 2), (1, 2), (1, 1), (2, 1)], 2, 2, 2),
    state([(1, 1), (2, 1), (2, 2), (1, 0)], 2, 1, 2),
];

static Z_STATES: [RotationState; 2] = [
    state([(0, 1), (1, 1), (1, 2), (2, 2)], 2, 2, 2),
    state([(1, 1), (2, 1), (1, 2), (2, 0)], 2, 1, 2),
];

/// All rotation states of a kind, in rotation order
pub fn rotation_states(kind: PieceKind) -> &'static [RotationState] {
    match kind {
        PieceKind::L => &L_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

/// Rotation state for an unnormalised rotation index
pub fn get_rotation(kind: PieceKind, rotation: usize) -> &'static RotationState {
    let states = rotation_states(kind);
    let index = rotation % states.len();
    debug_assert!(index < states.len());
    &states[index]
}

/// Get the shape (cell offsets) for a piece kind and rotation index
pub fn get_shape(kind: PieceKind, rotation: usize) -> PieceShape {
    get_rotation(kind, rotation).cells
}

/// Board cells of a shape anchored at `(x, y)`
pub fn cells_at(kind: PieceKind, rotation: usize, x: i8, y: i8) -> [Coord; 4] {
    get_shape(kind, rotation).map(|(dx, dy)| Coord::new(x + dx, y + dy))
}

/// Rotation-0 cells at the origin, the static shape drawn for next/hold previews
pub fn preview_cells(kind: PieceKind) -> [Coord; 4] {
    cells_at(kind, 0, 0, 0)
}

/// Bounding box derived from the offsets, in the same convention as the
/// authored table: `(height, left_reach, right_reach)`.
pub fn derived_bounds(cells: &PieceShape) -> (i8, i8, i8) {
    let max_dy = cells.iter().map(|&(_, dy)| dy).max().unwrap_or(0);
    let min_dx = cells.iter().map(|&(dx, _)| dx).min().unwrap_or(0);
    let max_dx = cells.iter().map(|&(dx, _)| dx).max().unwrap_or(0);
    (max_dy, 2 - min_dx, max_dx)
}
