//! Per-tick input snapshot
//!
//! The driver drains platform events into one of these each tick; the
//! simulation never talks to the windowing layer directly.

/// A pointer click and where it landed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    pub x: f32,
    pub y: f32,
}

/// Everything the simulation may consume in a single tick
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Latest pointer x position, if the pointer moved since the last tick
    pub pointer_x: Option<f32>,
    /// Clicks that arrived since the last tick, in order
    pub clicks: Vec<Click>,
    /// Left/right movement keys currently held
    pub move_left: bool,
    pub move_right: bool,
    /// Close request (window close button or escape key); acted on by the
    /// driver, carried here so it is drained with everything else
    pub quit: bool,
}
