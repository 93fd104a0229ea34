//! Sound cues
//!
//! Every simulation event maps to exactly one cue. On the web the cues are
//! synthesized with the Web Audio API, no sample files needed.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits top/bottom wall
    Wall,
    /// Ball hits a paddle
    Paddle,
    /// Point scored
    Score,
}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Wall => "wall",
            SoundEffect::Paddle => "paddle",
            SoundEffect::Score => "score",
        }
    }
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Wall => SoundEffect::Wall,
            GameEvent::Paddle(_) => SoundEffect::Paddle,
            GameEvent::Score { .. } => SoundEffect::Score,
        }
    }
}

/// Volume controls shared by every audio backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mix {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Mix {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{Mix, SoundEffect};
    use crate::platform::AudioSink;

    /// Web Audio backend
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        mix: Mix,
    }

    impl WebAudio {
        pub fn new(mix: Mix) -> Self {
            // Creation can fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, mix }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Paddle hit - solid thump
        fn play_paddle(ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = Self::create_osc(ctx, 150.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.6, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.frequency().set_value_at_time(150.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(60.0, t + 0.1)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Wall hit - higher ping
        fn play_wall(ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = Self::create_osc(ctx, 400.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.08)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.1).ok();
        }

        /// Point scored - two-note rising chime
        fn play_score(ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();

            for (i, freq) in [523.25_f32, 783.99].into_iter().enumerate() {
                let Some((osc, gain)) = Self::create_osc(ctx, freq, OscillatorType::Triangle)
                else {
                    continue;
                };
                let start = t + i as f64 * 0.09;
                gain.gain().set_value_at_time(0.0, t).ok();
                gain.gain().set_value_at_time(vol * 0.4, start).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, start + 0.2)
                    .ok();
                osc.start_with_when(start).ok();
                osc.stop_with_when(start + 0.25).ok();
            }
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, effect: SoundEffect) {
            let vol = self.mix.effective_volume();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture).
            // Before the gesture this fails and the cue is silently lost.
            if ctx.state() == web_sys::AudioContextState::Suspended {
                log::debug!("Audio suspended while playing {} cue", effect.name());
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Paddle => Self::play_paddle(ctx, vol),
                SoundEffect::Wall => Self::play_wall(ctx, vol),
                SoundEffect::Score => Self::play_score(ctx, vol),
            }
        }

        fn resume(&mut self) {
            if let Some(ctx) = &self.ctx {
                if let Err(e) = ctx.resume() {
                    log::warn!("Failed to resume AudioContext: {:?}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    #[test]
    fn test_event_to_cue() {
        assert_eq!(SoundEffect::from(GameEvent::Wall), SoundEffect::Wall);
        assert_eq!(
            SoundEffect::from(GameEvent::Paddle(Side::Ai)),
            SoundEffect::Paddle
        );
        assert_eq!(
            SoundEffect::from(GameEvent::Score {
                side: Side::Player,
                score: 3
            }),
            SoundEffect::Score
        );
        assert_eq!(SoundEffect::Score.name(), "score");
    }

    #[test]
    fn test_mix_volume() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            ..Settings::default()
        };
        let mut mix = Mix::from_settings(&settings);
        assert_eq!(mix.effective_volume(), 0.25);

        mix.set_muted(true);
        assert_eq!(mix.effective_volume(), 0.0);
    }

    #[test]
    fn test_mix_clamps_out_of_range_settings() {
        let settings = Settings {
            master_volume: 3.0,
            sfx_volume: -1.0,
            ..Settings::default()
        };
        assert_eq!(Mix::from_settings(&settings).effective_volume(), 0.0);
    }
}
