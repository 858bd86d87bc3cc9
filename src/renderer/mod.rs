//! Rendering module
//!
//! The renderer only reads the simulation. A [`Frame`] is captured after each
//! tick, turned into a screen-space [`DrawList`], and painted by the canvas
//! backend in the browser.

pub mod draw_list;
pub mod frame;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use draw_list::{DrawList, HudText, Quad, colors};
pub use frame::Frame;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
