//! Canvas Pong - a touch-friendly two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Pure per-frame simulation (ball, paddles, score)
//! - `game`: Host loop wiring the simulation to its platform sinks
//! - `renderer`: Scene building and Canvas 2D painting
//! - `platform`: Capability traits plus browser/headless bindings
//! - `settings`: Read-only audio/debug configuration

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game tuning constants, all expressed as fractions of the arena size
pub mod consts {
    /// Paddle height as a fraction of arena height
    pub const PADDLE_HEIGHT_FRACTION: f32 = 0.15;
    /// Paddle width as a fraction of arena width
    pub const PADDLE_WIDTH_FRACTION: f32 = 0.02;
    /// Ball radius as a fraction of arena width
    pub const BALL_RADIUS_FRACTION: f32 = 0.02;

    /// Ball serve speed, horizontal component (fraction of width per frame)
    pub const BALL_SPEED_X_FRACTION: f32 = 0.007;
    /// Ball serve speed, vertical component (fraction of height per frame)
    pub const BALL_SPEED_Y_FRACTION: f32 = 0.007;

    /// Opponent paddle step per frame (fraction of height)
    pub const AI_SPEED_FRACTION: f32 = 0.01;
}

/// Clamp a paddle's top edge into `[0, max]`.
///
/// A negative `max` (degenerate arena) pins the paddle to 0; never panics.
#[inline]
pub fn clamp_paddle_y(y: f32, max: f32) -> f32 {
    y.min(max).max(0.0)
}
