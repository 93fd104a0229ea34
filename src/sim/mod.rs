//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per frame, fixed per-frame displacement (no delta time)
//! - No rendering, audio or platform dependencies
//! - State in, state and events out

pub mod state;
pub mod step;

pub use state::{Arena, Ball, GameState, Paddle, Scores, Side};
pub use step::{GameEvent, StepInput, step};
