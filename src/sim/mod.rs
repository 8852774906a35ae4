//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod input;
pub mod rect;
pub mod state;
pub mod tick;

pub use input::{Click, InputSnapshot};
pub use rect::Rect;
pub use state::{Block, GamePhase, GameSession, Paddle, play_button_rect};
pub use tick::{GameEvent, tick};
