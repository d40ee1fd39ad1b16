//! Integration tests for the reducer driven through the public API

use blockfall::core::{reduce, ActivePiece, GamePhase, GameState};
use blockfall::types::{GameAction, PieceKind, SPAWN_X, SPAWN_Y, TICK_HALF_SECS};

fn run(actions: &[GameAction]) -> Vec<GameState> {
    let mut states = vec![GameState::new()];
    for &action in actions {
        let next = reduce(states[states.len() - 1].clone(), action);
        states.push(next);
    }
    states
}

/// Soft-drop pieces at their spawn column until the stack tops out.
fn play_until_over(mut state: GameState) -> GameState {
    for _ in 0..2_000 {
        if state.ended() {
            return state;
        }
        state = reduce(state, GameAction::MoveDown);
    }
    panic!("stack never topped out");
}

#[test]
fn test_game_lifecycle() {
    let state = GameState::new();
    assert_eq!(state.phase(), GamePhase::Playing);
    assert_eq!(*state.active(), ActivePiece::spawn(PieceKind::J));
    assert_eq!(state.next_kind(), PieceKind::L);
    assert_eq!(state.hold_kind(), PieceKind::I);

    let over = play_until_over(state);
    assert_eq!(over.phase(), GamePhase::Ended);
    assert!(over.pieces_locked() > 0);

    let restarted = reduce(over.clone(), GameAction::Reset);
    assert_eq!(restarted.phase(), GamePhase::Playing);
    assert!(restarted.board().is_empty());
    assert_eq!(restarted.high_score(), over.high_score());
}

#[test]
fn test_ticks_advance_time_until_landing() {
    let states = run(&[GameAction::Tick; 5]);
    for (i, state) in states.iter().enumerate() {
        assert_eq!(state.elapsed_half_secs(), i as u64 * TICK_HALF_SECS);
        assert_eq!(state.active().y, SPAWN_Y + i as i8);
    }
}

#[test]
fn test_game_actions() {
    let states = run(&[
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveDown,
        GameAction::MoveRight,
        GameAction::Hold,
    ]);

    assert_eq!(states[1].active().x, SPAWN_X - 1);
    assert_eq!(states[2].active().x, SPAWN_X - 2);
    assert_eq!(states[3].active().rotation, 1);
    assert_eq!(states[4].active().y, SPAWN_Y + 1);
    assert_eq!(states[5].active().x, SPAWN_X - 1);

    let held = &states[6];
    assert_eq!(held.active().kind, PieceKind::I);
    assert_eq!(held.active().rotation, 0);
    assert_eq!(held.hold_kind(), PieceKind::J);
    // MoveDown never advances the clock.
    assert_eq!(held.elapsed_half_secs(), 0);
}

#[test]
fn test_determinism() {
    let actions: Vec<GameAction> = [
        GameAction::Tick,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::Tick,
        GameAction::Hold,
        GameAction::MoveLeft,
    ]
    .iter()
    .copied()
    .cycle()
    .take(600)
    .collect();

    assert_eq!(run(&actions), run(&actions));
}

#[test]
fn test_lock_spawns_next_piece() {
    let state = GameState::new();
    let next = state.next_kind();
    let mut state = state;
    while state.pieces_locked() == 0 {
        state = reduce(state, GameAction::Tick);
    }
    assert_eq!(*state.active(), ActivePiece::spawn(next));
    assert_eq!(state.board().len(), 4);
    assert!(!state.active_overlaps());
}

#[test]
fn test_ended_game_ignores_input_but_resets() {
    let over = reduce(GameState::new(), GameAction::GameEnd);
    for action in [GameAction::Tick, GameAction::MoveLeft, GameAction::Lock, GameAction::Hold] {
        assert_eq!(reduce(over.clone(), action), over);
    }
    assert!(!reduce(over, GameAction::Reset).ended());
}

#[test]
fn test_apply_keeps_original() {
    let state = GameState::new();
    let moved = state.apply(GameAction::MoveRight);
    assert_eq!(state.active().x, SPAWN_X);
    assert_eq!(moved.active().x, SPAWN_X + 1);
}
