//! Game entities and session state
//!
//! A session owns everything one run needs: phase, entities, the mistake
//! count, and its own seeded RNG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the play button to be clicked
    Menu,
    /// Active gameplay
    Playing,
    /// Mistake limit reached; terminal for the session
    GameOver,
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

impl Paddle {
    /// Paddle centered horizontally, resting just above the bottom edge
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                (SCREEN_WIDTH - PADDLE_WIDTH) / 2.0,
                SCREEN_HEIGHT - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
        }
    }

    /// Center the paddle on a pointer x position
    pub fn follow_pointer(&mut self, pointer_x: f32) {
        self.rect.x = pointer_x - self.rect.w / 2.0;
    }

    /// Nudge the paddle horizontally (key movement)
    pub fn shift(&mut self, dx: f32) {
        self.rect.x += dx;
    }

    /// Keep the paddle fully on screen
    pub fn clamp_to_screen(&mut self) {
        self.rect.x = self.rect.x.clamp(0.0, SCREEN_WIDTH - self.rect.w);
    }
}

/// The falling block
#[derive(Debug, Clone)]
pub struct Block {
    pub rect: Rect,
}

impl Block {
    /// Block at the top edge at the given x
    pub fn new(x: f32) -> Self {
        Self {
            rect: Rect::new(x, 0.0, BLOCK_SIZE, BLOCK_SIZE),
        }
    }

    /// One tick of falling
    pub fn fall(&mut self) {
        self.rect.y += BLOCK_SPEED;
    }
}

/// Screen-centered rectangle the menu's play button occupies
pub fn play_button_rect() -> Rect {
    Rect::new(
        (SCREEN_WIDTH - PLAY_BUTTON_WIDTH) / 2.0,
        (SCREEN_HEIGHT - PLAY_BUTTON_HEIGHT) / 2.0,
        PLAY_BUTTON_WIDTH,
        PLAY_BUTTON_HEIGHT,
    )
}

/// Complete state of one game run
///
/// Deterministic: the same seed and input sequence always produce the same
/// states. Randomness comes only from the session's own RNG.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG, the sole randomness source in the simulation
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Player paddle
    pub paddle: Paddle,
    /// The single in-flight block
    pub block: Block,
    /// Missed catches so far
    pub mistakes: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameSession {
    /// Create a new session in the menu phase; the block is placed at the
    /// top edge at a random x so gameplay can start the moment the phase
    /// flips to Playing
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let block = Block::new(rng.random_range(0.0..SCREEN_WIDTH - BLOCK_SIZE));
        Self {
            seed,
            rng,
            phase: GamePhase::Menu,
            paddle: Paddle::new(),
            block,
            mistakes: 0,
            time_ticks: 0,
        }
    }

    /// Put the block back at the top edge at a fresh random x
    pub fn respawn_block(&mut self) {
        self.block.rect.x = self.rng.random_range(0.0..SCREEN_WIDTH - BLOCK_SIZE);
        self.block.rect.y = 0.0;
    }
}
