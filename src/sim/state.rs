//! Game state and core simulation types
//!
//! Everything the per-frame step reads or writes lives here as plain data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which side of the court an event or score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled paddle, left edge
    Player,
    /// Scripted opponent paddle, right edge
    Ai,
}

/// Current playing field dimensions and the sizes derived from them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
}

impl Arena {
    /// Derive paddle and ball sizes from the surface size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            paddle_width: width * PADDLE_WIDTH_FRACTION,
            paddle_height: height * PADDLE_HEIGHT_FRACTION,
            ball_radius: width * BALL_RADIUS_FRACTION,
        }
    }

    /// Lowest legal paddle top edge
    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        self.height - self.paddle_height
    }

    /// Paddle top edge that centers it vertically
    #[inline]
    pub fn centered_paddle_y(&self) -> f32 {
        self.height / 2.0 - self.paddle_height / 2.0
    }

    /// Arena center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle; only its top edge moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top edge
    pub y: f32,
    /// Step per frame (the player's paddle does not use it)
    pub speed: f32,
}

impl Paddle {
    /// Vertical midpoint for a paddle of the given height
    #[inline]
    pub fn center(&self, paddle_height: f32) -> f32 {
        self.y + paddle_height / 2.0
    }

    /// Whether `y` lies within the paddle's span, edges included
    #[inline]
    pub fn covers(&self, y: f32, paddle_height: f32) -> bool {
        y >= self.y && y <= self.y + paddle_height
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
}

impl Ball {
    /// Fresh ball at the arena center moving down and to the right
    pub fn serve(arena: &Arena) -> Self {
        Self {
            pos: arena.center(),
            vel: Vec2::new(
                arena.width * BALL_SPEED_X_FRACTION,
                arena.height * BALL_SPEED_Y_FRACTION,
            ),
        }
    }
}

/// Running score for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub player: u32,
    pub ai: u32,
}

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    /// Award one point to `side` and return its new total
    pub fn award(&mut self, side: Side) -> u32 {
        let score = match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        };
        *score += 1;
        *score
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// False until the start control fires; the step is a no-op until then
    pub started: bool,
    pub scores: Scores,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
}

impl GameState {
    /// Fresh, not yet started session sized for `arena`
    pub fn new(arena: &Arena) -> Self {
        let paddle_y = arena.centered_paddle_y();
        Self {
            started: false,
            scores: Scores::default(),
            player: Paddle {
                y: paddle_y,
                speed: 0.0,
            },
            ai: Paddle {
                y: paddle_y,
                speed: arena.height * AI_SPEED_FRACTION,
            },
            ball: Ball::serve(arena),
        }
    }

    /// Put the ball back at the center with the serve velocity
    pub fn reset_ball(&mut self, arena: &Arena) {
        self.ball = Ball::serve(arena);
    }

    /// Start the session. Returns true only on the first call.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// JSON dump of the state for debug logging
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
