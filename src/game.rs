//! Host loop
//!
//! Owns the simulation state and arena, runs one step per frame and routes
//! the frame's events to the injected platform sinks.

use crate::audio::SoundEffect;
use crate::platform::{AudioSink, InputSource, Renderer, ScoreDisplay};
use crate::sim::{Arena, GameEvent, GameState, StepInput, step};

/// A running game session
pub struct Game<R, A, D> {
    state: GameState,
    arena: Arena,
    renderer: R,
    audio: A,
    display: D,
    frames: u64,
}

impl<R, A, D> Game<R, A, D>
where
    R: Renderer,
    A: AudioSink,
    D: ScoreDisplay,
{
    pub fn new(arena: Arena, renderer: R, audio: A, display: D) -> Self {
        Self {
            state: GameState::new(&arena),
            arena,
            renderer,
            audio,
            display,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Frames run since creation (including frames before start)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Start control. Returns true the first time; later calls do nothing.
    pub fn start(&mut self) -> bool {
        if !self.state.start() {
            return false;
        }
        self.audio.resume();
        log::info!("Game started");
        true
    }

    /// New surface size. Entities are not moved; the next frame's clamp
    /// pulls paddles back into range.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena = Arena::new(width, height);
        log::info!("Arena resized to {}x{}", width, height);
    }

    /// Run one frame: step, dispatch events, draw
    pub fn frame(&mut self, input: &impl InputSource) -> Vec<GameEvent> {
        let step_input = StepInput {
            target_y: input.target_y(),
        };
        let (next, events) = step(&self.state, &step_input, &self.arena);
        self.state = next;
        self.frames += 1;

        for event in &events {
            self.audio.play(SoundEffect::from(*event));
            if let GameEvent::Score { side, score } = *event {
                self.display.show_score(side, score);
                log::info!(
                    "Score {:?}: player {} - ai {}",
                    side,
                    self.state.scores.player,
                    self.state.scores.ai
                );
            }
        }

        self.renderer.draw(&self.state, &self.arena);
        events
    }
}
