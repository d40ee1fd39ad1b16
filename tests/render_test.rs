//! Rendering tests: reducer states drawn through `GameView`

use blockfall::core::{reduce, GameState};
use blockfall::term::{cell_rgb, FrameBuffer, GameView, Viewport};
use blockfall::types::{CellColor, GameAction};

const VIEWPORT: Viewport = Viewport {
    width: 60,
    height: 24,
};

/// Framebuffer cell of board cell `(x, y)` for the default 2x1 view in `VIEWPORT`.
fn board_px(x: u16, y: u16) -> (u16, u16) {
    (19 + 1 + x * 2, 1 + y)
}

fn text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn test_locked_piece_is_rendered() {
    let mut state = GameState::new();
    while state.pieces_locked() == 0 {
        state = reduce(state, GameAction::MoveDown);
    }

    let fb = GameView::default().render(&state.snapshot(), VIEWPORT);
    // The J locked on the floor: (4,18), (5,18), (6,18), (4,19).
    for (x, y) in [(4, 18), (5, 18), (6, 18), (4, 19)] {
        let (px, py) = board_px(x, y);
        let cell = fb.get(px, py).unwrap();
        assert_eq!(cell.style.fg, cell_rgb(CellColor::Blue), "cell ({x}, {y})");
        assert_eq!(fb.get(px + 1, py).unwrap().style.fg, cell_rgb(CellColor::Blue));
    }
    assert!(text(&fb).contains("New row in: 13 blocks"));
}

#[test]
fn test_hud_tracks_time() {
    let mut state = GameState::new();
    for _ in 0..4 {
        state = reduce(state, GameAction::Tick);
    }
    let fb = GameView::default().render(&state.snapshot(), VIEWPORT);
    assert!(text(&fb).contains("00:02"));
}

#[test]
fn test_render_into_reuses_buffer() {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(10, 10);
    let state = GameState::new();
    view.render_into(&state.snapshot(), VIEWPORT, &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 24));
    assert_eq!(fb, view.render(&state.snapshot(), VIEWPORT));
}

#[test]
fn test_game_over_overlay_after_top_out() {
    let mut state = GameState::new();
    for _ in 0..2_000 {
        if state.ended() {
            break;
        }
        state = reduce(state, GameAction::MoveDown);
    }
    assert!(state.ended());

    let fb = GameView::default().render(&state.snapshot(), VIEWPORT);
    assert!(text(&fb).contains("GAME OVER"));
}
