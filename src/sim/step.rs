//! Per-frame simulation step
//!
//! Advances the game by exactly one frame. Displacement is fixed per frame;
//! the host's refresh rate sets the game speed.

use serde::{Deserialize, Serialize};

use super::state::{Arena, GameState, Side};
use crate::clamp_paddle_y;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepInput {
    /// Where the player wants the paddle center, in arena coordinates.
    /// `None` until the first pointer/touch sample arrives.
    pub target_y: Option<f32>,
}

/// Something that happened during a step, for audio and HUD consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom edge
    Wall,
    /// Ball bounced off a paddle
    Paddle(Side),
    /// `side` scored; carries its new total
    Score { side: Side, score: u32 },
}

/// Advance `state` by one frame.
///
/// Pure: the input state is untouched and the next state is returned along
/// with the events of this frame, in the order they fired. The phase order
/// is fixed and matters for edge cases (a paddle bounce and a score can both
/// fire in the same frame).
pub fn step(state: &GameState, input: &StepInput, arena: &Arena) -> (GameState, Vec<GameEvent>) {
    let mut next = *state;
    let mut events = Vec::new();

    if !next.started {
        return (next, events);
    }

    // Integrate
    next.ball.pos += next.ball.vel;

    // Top/bottom walls: boundary test only, the ball may overshoot by one frame
    if next.ball.pos.y <= 0.0 || next.ball.pos.y >= arena.height {
        next.ball.vel.y = -next.ball.vel.y;
        events.push(GameEvent::Wall);
    }

    // Paddles. Travel direction is not checked.
    if next.ball.pos.x <= arena.paddle_width
        && next.player.covers(next.ball.pos.y, arena.paddle_height)
    {
        next.ball.vel.x = -next.ball.vel.x;
        events.push(GameEvent::Paddle(Side::Player));
    }
    if next.ball.pos.x >= arena.width - arena.paddle_width
        && next.ai.covers(next.ball.pos.y, arena.paddle_height)
    {
        next.ball.vel.x = -next.ball.vel.x;
        events.push(GameEvent::Paddle(Side::Ai));
    }

    // Scoring; both edges are checked independently
    if next.ball.pos.x <= 0.0 {
        let score = next.scores.award(Side::Ai);
        events.push(GameEvent::Score {
            side: Side::Ai,
            score,
        });
        next.reset_ball(arena);
    }
    if next.ball.pos.x >= arena.width {
        let score = next.scores.award(Side::Player);
        events.push(GameEvent::Score {
            side: Side::Player,
            score,
        });
        next.reset_ball(arena);
    }

    // Opponent: fixed step toward the ball, no dead zone
    if next.ball.pos.y > next.ai.center(arena.paddle_height) {
        next.ai.y += next.ai.speed;
    } else {
        next.ai.y -= next.ai.speed;
    }

    if let Some(target) = input.target_y {
        next.player.y = target - arena.paddle_height / 2.0;
    }

    let max_y = arena.paddle_max_y();
    next.player.y = clamp_paddle_y(next.player.y, max_y);
    next.ai.y = clamp_paddle_y(next.ai.y, max_y);

    for event in &events {
        log::debug!("{:?}", event);
    }

    (next, events)
}
