//! Piece catalog tests - rotation tables and reach metrics

use blockfall::core::pieces::{cells_at, get_rotation, get_shape, preview_cells, rotation_states};
use blockfall::types::{Coord, PieceKind, BOARD_WIDTH};

#[test]
fn test_i_piece_shapes() {
    assert_eq!(get_shape(PieceKind::I, 0), [(0, 1), (1, 1), (2, 1), (3, 1)]);
    assert_eq!(get_shape(PieceKind::I, 1), [(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_o_piece_single_state() {
    for rotation in 0..8 {
        assert_eq!(get_shape(PieceKind::O, rotation), get_shape(PieceKind::O, 0));
    }
}

#[test]
fn test_reach_matches_wall_contact() {
    // x - left_reach == -2 puts the leftmost cell in column 0;
    // x + right_reach == 9 puts the rightmost cell in column 9.
    for kind in PieceKind::ALL {
        for (rotation, st) in rotation_states(kind).iter().enumerate() {
            let left_x = st.left_reach - 2;
            let min_x = cells_at(kind, rotation, left_x, 0).iter().map(|c| c.x).min();
            assert_eq!(min_x, Some(0), "{:?} rotation {}", kind, rotation);

            let right_x = BOARD_WIDTH as i8 - 1 - st.right_reach;
            let max_x = cells_at(kind, rotation, right_x, 0).iter().map(|c| c.x).max();
            assert_eq!(max_x, Some(9), "{:?} rotation {}", kind, rotation);
        }
    }
}

#[test]
fn test_height_is_lowest_cell() {
    for kind in PieceKind::ALL {
        for rotation in 0..4 {
            let st = get_rotation(kind, rotation);
            let lowest = cells_at(kind, rotation, 0, 0).iter().map(|c| c.y).max();
            assert_eq!(lowest, Some(st.height));
        }
    }
}

#[test]
fn test_j_rotations() {
    assert_eq!(
        cells_at(PieceKind::J, 3, -1, 0),
        [
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(0, 2),
            Coord::new(1, 2)
        ]
    );
    // Rotation 0 from the same anchor reaches column -1.
    assert_eq!(cells_at(PieceKind::J, 4, -1, 0)[0], Coord::new(-1, 1));
}

#[test]
fn test_preview_cells_use_rotation_zero() {
    for kind in PieceKind::ALL {
        let expected = get_shape(kind, 0).map(|(dx, dy)| Coord::new(dx, dy));
        assert_eq!(preview_cells(kind), expected);
    }
}
