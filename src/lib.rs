//! Blockfall - a catch-the-falling-blocks arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collision, game session)
//! - `render`: Pure mapping from game state to draw commands
//! - `app`: ggez event-loop driver that feeds input to the simulation
//! - `assets`: Images and music loaded once at startup
//! - `settings`: Optional user preferences from settings.json

pub mod app;
pub mod assets;
pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::StartupError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Gap between the paddle and the bottom edge of the screen
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    /// Horizontal movement per tick while an arrow key is held
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Block edge length (blocks are square)
    pub const BLOCK_SIZE: f32 = 30.0;
    /// Fall distance per tick
    pub const BLOCK_SPEED: f32 = 5.0;

    /// Misses that end the game
    pub const MAX_MISTAKES: u32 = 5;

    /// Simulation rate, also the render pacing target
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Menu play-button dimensions (button is centered on screen)
    pub const PLAY_BUTTON_WIDTH: f32 = 250.0;
    pub const PLAY_BUTTON_HEIGHT: f32 = 100.0;

    /// Window title
    pub const WINDOW_TITLE: &str = "Catch the Block";
}
