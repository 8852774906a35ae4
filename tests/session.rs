//! Whole-session tests driving the public simulation API.

use blockfall::consts::*;
use blockfall::sim::{Click, GameEvent, GamePhase, GameSession, InputSnapshot, tick};

fn press_play(session: &mut GameSession) -> Vec<GameEvent> {
    let input = InputSnapshot {
        clicks: vec![Click { x: 400.0, y: 300.0 }],
        ..Default::default()
    };
    tick(session, &input)
}

/// Pointer target that keeps the paddle on the opposite side of the screen
/// from the block, so every drop is a miss.
fn dodge_pointer(session: &GameSession) -> f32 {
    if session.block.rect.x < SCREEN_WIDTH / 2.0 {
        SCREEN_WIDTH
    } else {
        0.0
    }
}

/// Pointer target that parks the paddle center under the block center.
fn track_pointer(session: &GameSession) -> f32 {
    session.block.rect.x + BLOCK_SIZE / 2.0
}

#[test]
fn test_menu_to_playing_via_button() {
    let mut session = GameSession::new(11);
    assert_eq!(session.phase, GamePhase::Menu);

    let events = press_play(&mut session);

    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(events, vec![GameEvent::Started]);
}

#[test]
fn test_dodging_every_block_ends_the_game() {
    let mut session = GameSession::new(2024);
    press_play(&mut session);

    let mut missed_counts = Vec::new();
    let mut ended = 0;

    for _ in 0..2000 {
        let input = InputSnapshot {
            pointer_x: Some(dodge_pointer(&session)),
            ..Default::default()
        };
        for event in tick(&mut session, &input) {
            match event {
                GameEvent::Missed { mistakes } => missed_counts.push(mistakes),
                GameEvent::Ended => ended += 1,
                GameEvent::Caught => panic!("paddle should never touch the block"),
                GameEvent::Started => panic!("game already started"),
            }
        }
        if session.phase == GamePhase::GameOver {
            break;
        }
    }

    assert_eq!(missed_counts, vec![1, 2, 3, 4, 5]);
    assert_eq!(ended, 1);
    assert_eq!(session.phase, GamePhase::GameOver);
    assert_eq!(session.mistakes, MAX_MISTAKES);

    // Terminal: nothing moves and no further events fire
    let block_before = session.block.rect;
    for _ in 0..50 {
        let events = tick(&mut session, &InputSnapshot::default());
        assert!(events.is_empty());
    }
    assert_eq!(session.block.rect, block_before);
    assert_eq!(session.mistakes, MAX_MISTAKES);
}

#[test]
fn test_tracking_paddle_catches_every_block() {
    let mut session = GameSession::new(31337);
    press_play(&mut session);

    let mut caught = 0;
    for _ in 0..1500 {
        let input = InputSnapshot {
            pointer_x: Some(track_pointer(&session)),
            ..Default::default()
        };
        for event in tick(&mut session, &input) {
            match event {
                GameEvent::Caught => caught += 1,
                GameEvent::Missed { .. } => panic!("tracking paddle missed a block"),
                GameEvent::Ended => panic!("game ended without a miss"),
                GameEvent::Started => panic!("game already started"),
            }
        }
    }

    assert!(caught >= 5, "expected several catches, got {caught}");
    assert_eq!(session.mistakes, 0);
    assert_eq!(session.phase, GamePhase::Playing);
}

#[test]
fn test_session_invariants_hold_under_mixed_input() {
    let mut session = GameSession::new(0xDECAF);
    press_play(&mut session);

    let pointers = [100.0, 700.0, 300.0, 0.0, 750.0, 400.0];
    let mut last_mistakes = 0;

    for i in 0..3000 {
        let input = InputSnapshot {
            pointer_x: Some(pointers[i % pointers.len()]),
            move_left: i % 3 == 0,
            move_right: i % 7 == 0,
            ..Default::default()
        };
        tick(&mut session, &input);

        assert!(session.paddle.rect.x >= 0.0);
        assert!(session.paddle.rect.x <= SCREEN_WIDTH - PADDLE_WIDTH);
        assert!(session.block.rect.x >= 0.0);
        assert!(session.block.rect.x < SCREEN_WIDTH - BLOCK_SIZE);
        assert!(session.mistakes >= last_mistakes);
        assert!(session.mistakes <= MAX_MISTAKES);
        if session.phase == GamePhase::GameOver {
            assert_eq!(session.mistakes, MAX_MISTAKES);
        }
        last_mistakes = session.mistakes;
    }
}

#[test]
fn test_identical_seeds_replay_identically() {
    let mut a = GameSession::new(777_777);
    let mut b = GameSession::new(777_777);
    press_play(&mut a);
    press_play(&mut b);

    let pointers = [50.0, 780.0, 420.0, 0.0];
    for i in 0..2000 {
        let input = InputSnapshot {
            pointer_x: Some(pointers[i % pointers.len()]),
            move_right: i % 2 == 0,
            ..Default::default()
        };
        let events_a = tick(&mut a, &input);
        let events_b = tick(&mut b, &input);
        assert_eq!(events_a, events_b);
    }

    assert_eq!(a.paddle.rect, b.paddle.rect);
    assert_eq!(a.block.rect, b.block.rect);
    assert_eq!(a.mistakes, b.mistakes);
    assert_eq!(a.phase, b.phase);
    assert_eq!(a.time_ticks, b.time_ticks);
}
