//! Scene building for 2D primitives
//!
//! Turns simulation state into a flat list of shapes. Backends only paint.

use glam::Vec2;

use crate::sim::{Arena, GameState};

/// RGBA color, components in 0.0 - 1.0
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    /// Translucent clear, leaves a short motion trail
    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 0.8];
    /// #ff1b8d
    pub const CENTER_LINE: Color = [1.0, 27.0 / 255.0, 141.0 / 255.0, 1.0];
    /// #00fff9
    pub const PADDLE: Color = [0.0, 1.0, 249.0 / 255.0, 1.0];
    /// #9a1fff
    pub const BALL: Color = [154.0 / 255.0, 31.0 / 255.0, 1.0, 1.0];
}

/// Center line dash pattern (dash, gap)
pub const CENTER_LINE_DASH: [f32; 2] = [5.0, 15.0];
/// Center line stroke width
pub const CENTER_LINE_WIDTH: f32 = 2.0;

/// A drawable primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Fill the whole surface
    Clear { size: Vec2, color: Color },
    /// Stroked dashed line segment
    DashedLine {
        from: Vec2,
        to: Vec2,
        dash: [f32; 2],
        width: f32,
        color: Color,
    },
    /// Filled axis-aligned rectangle
    Rect { min: Vec2, size: Vec2, color: Color },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Shapes for one frame, back to front
pub fn scene(state: &GameState, arena: &Arena) -> Vec<Shape> {
    let paddle_size = Vec2::new(arena.paddle_width, arena.paddle_height);
    let mid_x = arena.width / 2.0;

    vec![
        Shape::Clear {
            size: Vec2::new(arena.width, arena.height),
            color: colors::BACKGROUND,
        },
        Shape::DashedLine {
            from: Vec2::new(mid_x, 0.0),
            to: Vec2::new(mid_x, arena.height),
            dash: CENTER_LINE_DASH,
            width: CENTER_LINE_WIDTH,
            color: colors::CENTER_LINE,
        },
        Shape::Rect {
            min: Vec2::new(0.0, state.player.y),
            size: paddle_size,
            color: colors::PADDLE,
        },
        Shape::Rect {
            min: Vec2::new(arena.width - arena.paddle_width, state.ai.y),
            size: paddle_size,
            color: colors::PADDLE,
        },
        Shape::Circle {
            center: state.ball.pos,
            radius: arena.ball_radius,
            color: colors::BALL,
        },
    ]
}

/// CSS color string for a canvas fill/stroke style
pub fn css_color(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_layout() {
        let arena = Arena::new(800.0, 600.0);
        let mut state = GameState::new(&arena);
        state.player.y = 40.0;
        state.ai.y = 300.0;
        state.ball.pos = Vec2::new(123.0, 456.0);

        let shapes = scene(&state, &arena);
        assert_eq!(shapes.len(), 5);
        assert!(matches!(shapes[0], Shape::Clear { size, .. } if size == Vec2::new(800.0, 600.0)));
        assert!(matches!(
            shapes[1],
            Shape::DashedLine { from, to, .. }
                if from == Vec2::new(400.0, 0.0) && to == Vec2::new(400.0, 600.0)
        ));
        assert!(matches!(shapes[2], Shape::Rect { min, .. } if min == Vec2::new(0.0, 40.0)));
        assert!(matches!(
            shapes[3],
            Shape::Rect { min, .. } if min == Vec2::new(800.0 - arena.paddle_width, 300.0)
        ));
        assert!(matches!(
            shapes[4],
            Shape::Circle { center, radius, .. }
                if center == Vec2::new(123.0, 456.0) && radius == arena.ball_radius
        ));
    }

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(colors::BACKGROUND), "rgba(0, 0, 0, 0.8)");
        assert_eq!(css_color(colors::CENTER_LINE), "rgba(255, 27, 141, 1)");
        assert_eq!(css_color(colors::PADDLE), "rgba(0, 255, 249, 1)");
        assert_eq!(css_color(colors::BALL), "rgba(154, 31, 255, 1)");
    }
}
