//! Rendering module
//!
//! `shapes` builds the frame as plain primitives; `canvas` paints them on a
//! Canvas 2D context in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{Shape, scene};
