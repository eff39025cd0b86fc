//! Software rendering module
//!
//! Screens draw into a CPU RGBA frame that the platform layer presents.

pub mod canvas;
pub mod font;
pub mod scene;

pub use canvas::{Canvas, Color};
pub use scene::draw;
