//! Platform abstraction layer
//!
//! The simulation never touches a platform API. The host loop talks to the
//! outside world through these capability traits:
//! - `Renderer`: draws the current state
//! - `AudioSink`: plays sound cues
//! - `ScoreDisplay`: shows per-side scores
//! - `InputSource`: supplies the player's target position

pub mod headless;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::PointerInput;

use crate::audio::SoundEffect;
use crate::sim::{Arena, GameState, Side};

/// Draws one frame of the game
pub trait Renderer {
    fn draw(&mut self, state: &GameState, arena: &Arena);
}

/// Plays sound cues. Implementations must swallow playback failures
/// (e.g. audio still locked before the first user gesture).
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);

    /// Unlock/resume audio output after a user gesture
    fn resume(&mut self) {}
}

/// Shows the running score of one side
pub trait ScoreDisplay {
    fn show_score(&mut self, side: Side, score: u32);
}

/// Supplies the latest player target (paddle center), if any
pub trait InputSource {
    fn target_y(&self) -> Option<f32>;
}
