//! Fixed timestep simulation tick
//!
//! Advances a session by exactly one tick. State transitions only: side
//! effects (music, notifications) are returned as events for the driver.

use super::input::InputSnapshot;
use super::state::{GamePhase, GameSession, play_button_rect};
use crate::consts::*;

/// Side-effect intents produced by a tick, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Menu became Playing; the driver starts the background music
    Started,
    /// The paddle caught the block this tick
    Caught,
    /// The block fell past the bottom edge uncaught
    Missed { mistakes: u32 },
    /// Mistake limit reached; the driver stops the music
    Ended,
}

/// Advance the session by one fixed timestep
///
/// The catch check runs before the miss check, so a tick never counts the
/// block as both.
pub fn tick(session: &mut GameSession, input: &InputSnapshot) -> Vec<GameEvent> {
    let mut events = Vec::new();
    session.time_ticks += 1;

    match session.phase {
        GamePhase::Menu => {
            let button = play_button_rect();
            if input.clicks.iter().any(|c| button.contains_point(c.x, c.y)) {
                session.phase = GamePhase::Playing;
                events.push(GameEvent::Started);
            }
        }

        GamePhase::Playing => {
            // Pointer placement first, key movement on top; both may apply
            // in the same tick
            if let Some(pointer_x) = input.pointer_x {
                session.paddle.follow_pointer(pointer_x);
            }
            if input.move_left {
                session.paddle.shift(-PADDLE_SPEED);
            }
            if input.move_right {
                session.paddle.shift(PADDLE_SPEED);
            }
            session.paddle.clamp_to_screen();

            session.block.fall();

            if session.paddle.rect.intersects(&session.block.rect) {
                session.respawn_block();
                events.push(GameEvent::Caught);
            } else if session.block.rect.y > SCREEN_HEIGHT {
                session.mistakes += 1;
                let mistakes = session.mistakes;
                session.respawn_block();
                events.push(GameEvent::Missed { mistakes });
                if mistakes >= MAX_MISTAKES {
                    session.phase = GamePhase::GameOver;
                    events.push(GameEvent::Ended);
                }
            }
        }

        // Terminal phase: nothing left to advance
        GamePhase::GameOver => {}
    }

    events
}
