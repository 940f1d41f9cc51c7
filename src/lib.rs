//! softcanvas - integer-only software rasterizer
//!
//! Draws into a row-major RGBA byte buffer that a host blits to the screen
//! each frame: solid clears, clipped rectangles, Bresenham lines and
//! polylines, midpoint circle outlines and span-filled disks.

pub mod canvas;
pub mod color;
#[cfg(feature = "window")]
pub mod display;
pub mod error;
pub mod sketch;
pub mod util;

pub use canvas::{BresenhamLine, PixelBuffer};
pub use color::Rgba;
pub use error::{CanvasError, SketchError};
pub use sketch::{Shape, Sketch};
