//! RNG module - time-seeded piece sequencer
//!
//! A linear congruential generator with the classic `A = 1103515245`,
//! `C = 12345`, `M = 2^31` constants. There is no carried generator state:
//! every draw is seeded with the elapsed game time at the moment of the draw,
//! so the piece sequence is a pure function of *when* draws happen. Replaying
//! the same action sequence therefore reproduces the same pieces.
//!
//! Game time is counted in half-seconds, but the seed is time in seconds, so
//! odd half-second counts seed with `n + 0.5`. [`value_at`] evaluates
//! `floor((A * h / 2 + C) mod 2^31)` exactly in integers as
//! `((A * h + 2C) mod 2^32) / 2`.

use crate::types::{PieceKind, DIFFICULTY_HOLE_SPAN};

const LCG_A: u64 = 1_103_515_245;
const LCG_C: u64 = 12_345;
const LCG_MASK: u64 = (1 << 31) - 1;
const DOUBLED_MASK: u64 = (1 << 32) - 1;

/// One LCG step on a whole-second seed: `(A * seed + C) mod 2^31`.
///
/// Arithmetic wraps at 2^64, which leaves the low 31 bits exact.
pub fn next_seed(seed: u64) -> u32 {
    (LCG_A.wrapping_mul(seed).wrapping_add(LCG_C) & LCG_MASK) as u32
}

/// Generator output for a game time of `half_secs / 2` seconds.
pub fn value_at(half_secs: u64) -> u32 {
    ((LCG_A.wrapping_mul(half_secs).wrapping_add(2 * LCG_C) & DOUBLED_MASK) >> 1) as u32
}

/// Map a generated value onto a piece kind.
pub fn piece_from_seed(value: u32) -> PieceKind {
    PieceKind::ALL[(value % PieceKind::ALL.len() as u32) as usize]
}

/// Draw a piece kind at the given game time.
pub fn draw_piece(half_secs: u64) -> PieceKind {
    piece_from_seed(value_at(half_secs))
}

/// Column left empty in a difficulty row drawn at the given game time.
pub fn difficulty_hole(half_secs: u64) -> i8 {
    (value_at(half_secs) % DIFFICULTY_HOLE_SPAN) as i8
}
