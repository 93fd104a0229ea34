//! Browser bindings: DOM score display and canvas sizing

use web_sys::{Document, Element, HtmlCanvasElement};

use super::ScoreDisplay;
use crate::sim::Side;

/// Element ids of the score numerals
pub const PLAYER_SCORE_ID: &str = "playerScore";
pub const AI_SCORE_ID: &str = "aiScore";

/// Writes scores into two text elements
pub struct DomScoreDisplay {
    player: Option<Element>,
    ai: Option<Element>,
}

impl DomScoreDisplay {
    pub fn new(document: &Document) -> Self {
        let lookup = |id: &str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::warn!("Score element #{} not found, score will not be shown", id);
            }
            el
        };
        Self {
            player: lookup(PLAYER_SCORE_ID),
            ai: lookup(AI_SCORE_ID),
        }
    }
}

impl ScoreDisplay for DomScoreDisplay {
    fn show_score(&mut self, side: Side, score: u32) {
        let el = match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        };
        if let Some(el) = el {
            el.set_text_content(Some(&score.to_string()));
        }
    }
}

/// Match the canvas backing store to its laid-out size; returns the new size
pub fn sync_canvas_size(canvas: &HtmlCanvasElement) -> (f32, f32) {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width as f32, height as f32)
}

/// Hide an element via inline style
pub fn hide(el: &Element) {
    use wasm_bindgen::JsCast;

    if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = el.style().set_property("display", "none");
    }
}
