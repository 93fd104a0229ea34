//! Pointer/touch input translation
//!
//! Raw client coordinates become a target for the player paddle's center.
//! Only samples on the left half of the viewport steer the paddle.

use super::InputSource;
use crate::sim::StepInput;

/// Latest accepted pointer target
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    target_y: Option<f32>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a pointer/touch sample in client coordinates.
    ///
    /// `surface_top` is the drawing surface's top edge in client space and
    /// `viewport_width` the window width. Returns whether the sample was
    /// accepted.
    pub fn handle_sample(
        &mut self,
        client_x: f32,
        client_y: f32,
        surface_top: f32,
        viewport_width: f32,
    ) -> bool {
        if client_x >= viewport_width / 2.0 {
            return false;
        }
        self.target_y = Some(client_y - surface_top);
        true
    }

    /// Forget the target (paddle stays where it is)
    pub fn clear(&mut self) {
        self.target_y = None;
    }

    /// Input for the next simulation step
    pub fn step_input(&self) -> StepInput {
        StepInput {
            target_y: self.target_y,
        }
    }
}

impl InputSource for PointerInput {
    fn target_y(&self) -> Option<f32> {
        self.target_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_half_sample_sets_target() {
        let mut input = PointerInput::new();
        assert!(input.handle_sample(100.0, 250.0, 40.0, 1024.0));
        assert_eq!(input.target_y(), Some(210.0));
        assert_eq!(input.step_input().target_y, Some(210.0));
    }

    #[test]
    fn test_right_half_sample_ignored() {
        let mut input = PointerInput::new();
        input.handle_sample(100.0, 250.0, 0.0, 1024.0);

        assert!(!input.handle_sample(600.0, 10.0, 0.0, 1024.0));
        assert!(!input.handle_sample(512.0, 10.0, 0.0, 1024.0));
        assert_eq!(input.target_y(), Some(250.0));
    }

    #[test]
    fn test_target_persists_until_cleared() {
        let mut input = PointerInput::new();
        assert_eq!(input.target_y(), None);
        input.handle_sample(5.0, 75.0, 0.0, 800.0);
        assert_eq!(input.step_input(), input.step_input());
        input.clear();
        assert_eq!(input.step_input(), StepInput::default());
    }
}
