//! Software rasterizer over an RGBA framebuffer
//!
//! `PixelBuffer` owns the bytes; the line, circle and disk drawers are
//! inherent methods on it. The stepping algorithms are exposed as plain
//! iterators so they can be tested without a buffer.

mod circle;
mod disk;
mod line;
mod pixel_buffer;

pub use circle::{octant_points, MidpointCircle};
pub use disk::{disk_spans, Span};
pub use line::BresenhamLine;
pub use pixel_buffer::PixelBuffer;
