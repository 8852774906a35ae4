//! Render intent generation
//!
//! Translates a session snapshot into an ordered draw list. This keeps the
//! simulation free of graphics dependencies; the driver maps each command
//! onto the windowing backend.

use crate::sim::{GamePhase, GameSession, Rect, play_button_rect};

/// Solid color, sRGB byte channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Window clear color behind everything else
pub const BACKGROUND: Color = Color::rgb(33, 33, 33);
/// Paddle fill
pub const PADDLE_COLOR: Color = Color::rgb(100, 180, 255);
/// Falling block fill
pub const BLOCK_COLOR: Color = Color::rgb(255, 220, 50);

/// Static images the driver loads at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    PlayButton,
    GameOver,
}

/// One drawing operation; the list is emitted back-to-front
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    /// Draw a sprite into `dest`, or stretched over the whole screen when None
    Image {
        sprite: Sprite,
        dest: Option<Rect>,
    },
}

/// Build the draw list for the current phase
pub fn draw_commands(session: &GameSession) -> Vec<DrawCommand> {
    match session.phase {
        GamePhase::Menu => vec![DrawCommand::Image {
            sprite: Sprite::PlayButton,
            dest: Some(play_button_rect()),
        }],
        GamePhase::Playing => vec![
            DrawCommand::FillRect {
                rect: session.paddle.rect,
                color: PADDLE_COLOR,
            },
            DrawCommand::FillRect {
                rect: session.block.rect,
                color: BLOCK_COLOR,
            },
        ],
        GamePhase::GameOver => vec![DrawCommand::Image {
            sprite: Sprite::GameOver,
            dest: None,
        }],
    }
}
