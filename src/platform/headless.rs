//! Headless sinks
//!
//! Log-only implementations of the capability traits, for running a session
//! without a browser.

use super::{AudioSink, InputSource, Renderer, ScoreDisplay};
use crate::audio::{Mix, SoundEffect};
use crate::sim::{Arena, GameState, Side};

/// Renderer that traces the state instead of drawing it
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, state: &GameState, _arena: &Arena) {
        self.frames += 1;
        log::trace!("frame {}: {}", self.frames, state.snapshot_json());
    }
}

/// Audio sink that logs cue names and counts them
#[derive(Debug)]
pub struct LogAudio {
    mix: Mix,
    played: usize,
}

impl LogAudio {
    pub fn new(mix: Mix) -> Self {
        Self { mix, played: 0 }
    }

    /// Cues played at a non-zero volume
    pub fn played(&self) -> usize {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.mix.effective_volume() <= 0.0 {
            return;
        }
        self.played += 1;
        log::debug!("sound: {}", effect.name());
    }
}

/// Score display that remembers and logs the latest value per side
#[derive(Debug, Default)]
pub struct LogScoreDisplay {
    pub player: u32,
    pub ai: u32,
}

impl ScoreDisplay for LogScoreDisplay {
    fn show_score(&mut self, side: Side, score: u32) {
        match side {
            Side::Player => self.player = score,
            Side::Ai => self.ai = score,
        }
        log::info!("{:?} score: {}", side, score);
    }
}

/// Scripted player that keeps the paddle centered on the ball.
///
/// Reads the ball position from the previous frame, like a pointer would.
#[derive(Debug, Default, Clone, Copy)]
pub struct FollowBall {
    target_y: Option<f32>,
}

impl FollowBall {
    pub fn observe(&mut self, state: &GameState) {
        self.target_y = Some(state.ball.pos.y);
    }
}

impl InputSource for FollowBall {
    fn target_y(&self) -> Option<f32> {
        self.target_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;
    use crate::settings::Settings;

    #[test]
    fn test_headless_session_runs() {
        let settings = Settings::default();
        let mut game = Game::new(
            Arena::new(800.0, 600.0),
            LogRenderer::default(),
            LogAudio::new(Mix::from_settings(&settings)),
            LogScoreDisplay::default(),
        );
        game.start();

        let mut player = FollowBall::default();
        let mut cues = 0;
        for _ in 0..2000 {
            player.observe(game.state());
            cues += game.frame(&player).len();
        }

        assert_eq!(game.renderer().frames(), 2000);
        assert_eq!(game.audio().played(), cues);
        assert!(cues > 0);
        assert_eq!(game.display().player, game.state().scores.player);
        assert_eq!(game.display().ai, game.state().scores.ai);
    }

    #[test]
    fn test_muted_audio_plays_nothing() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        let mut audio = LogAudio::new(Mix::from_settings(&settings));
        audio.play(SoundEffect::Wall);
        assert_eq!(audio.played(), 0);
    }
}
