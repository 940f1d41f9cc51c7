use crate::color::Rgba;
use crate::error::CanvasError;

// ============================================================================
// Utility Functions
// ============================================================================

/// Write one RGBA pixel to a 4-byte slice
#[inline]
fn write_pixel(dest: &mut [u8], color: Rgba) {
    dest.copy_from_slice(&color.to_bytes());
}

/// Fill consecutive pixels of a byte run with one color
#[inline]
fn fill_pixels(dest: &mut [u8], color: Rgba) {
    let bytes = color.to_bytes();
    for px in dest.chunks_exact_mut(4) {
        px.copy_from_slice(&bytes);
    }
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// Row-major RGBA framebuffer
///
/// `W * H` cells of 4 bytes each in R, G, B, A order. The byte vector is sized
/// once at creation and never reallocated, so `as_bytes()` can be handed
/// straight to a texture upload with pitch `stride()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a zeroed (transparent black) buffer
    ///
    /// Both dimensions must be positive and small enough that every pixel is
    /// addressable with `i32` coordinates.
    pub fn with_size(width: u32, height: u32) -> Result<Self, CanvasError> {
        let invalid = CanvasError::InvalidSize { width, height };
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(invalid);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(invalid)?;

        log::debug!("allocating {}x{} pixel buffer ({} bytes)", width, height, len);
        Ok(Self {
            pixels: vec![0; len],
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// Byte offset of pixel (x, y). Only meaningful for in-bounds coordinates.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride() + x as usize * 4
    }

    // ========================================================================
    // Bounds
    // ========================================================================

    /// Clip the run `[start, start + len)` to `[0, limit)` on one axis.
    /// Every bounds check on the buffer goes through this.
    #[inline]
    fn clip_axis(start: i64, len: i64, limit: u32) -> Option<(usize, usize)> {
        let lo = start.max(0);
        let hi = (start + len).min(limit as i64);
        (lo < hi).then_some((lo as usize, hi as usize))
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.clip_rect(x, y, 1, 1).is_some()
    }

    /// True if the inclusive box `[x0, x1] x [y0, y1]` lies entirely inside the
    /// buffer. An inverted box (x0 > x1 or y0 > y1) is never contained.
    #[inline]
    pub fn contains_box(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
        x0 <= x1 && y0 <= y1 && self.in_bounds(x0, y0) && self.in_bounds(x1, y1)
    }

    /// Intersect a `w x h` rectangle at (x, y) with the buffer.
    /// Returns the half-open pixel range `(x0, y0, x1, y1)`, or None if empty.
    #[inline]
    fn clip_rect(&self, x: i32, y: i32, w: u32, h: u32) -> Option<(usize, usize, usize, usize)> {
        let (x0, x1) = Self::clip_axis(x as i64, w as i64, self.width)?;
        let (y0, y1) = Self::clip_axis(y as i64, h as i64, self.height)?;
        Some((x0, y0, x1, y1))
    }

    // ========================================================================
    // Pixel access
    // ========================================================================

    /// Set a single pixel. Out-of-range coordinates are silently clipped.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if self.in_bounds(x, y) {
            let idx = self.offset(x as u32, y as u32);
            write_pixel(&mut self.pixels[idx..idx + 4], color);
        }
    }

    /// Read a pixel. Reading outside the buffer is a caller error.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Result<Rgba, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.offset(x as u32, y as u32);
        let mut bytes = [0; 4];
        bytes.copy_from_slice(&self.pixels[idx..idx + 4]);
        Ok(Rgba::from_bytes(bytes))
    }

    /// Overwrite every pixel with `color`
    pub fn clear(&mut self, color: Rgba) {
        fill_pixels(&mut self.pixels, color);
    }

    /// Fill a `w x h` rectangle with its top-left corner at (x, y).
    /// The rectangle is clipped to the buffer like individual `set` calls.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        let Some((x0, y0, x1, y1)) = self.clip_rect(x, y, w, h) else {
            return;
        };
        let stride = self.stride();
        for row in y0..y1 {
            let start = row * stride + x0 * 4;
            let end = row * stride + x1 * 4;
            fill_pixels(&mut self.pixels[start..end], color);
        }
    }

    /// Draw a horizontal span from x1 to x2 inclusive (either order), clipped
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Rgba) {
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let w = u32::try_from(x2 as i64 - x1 as i64 + 1).unwrap_or(u32::MAX);
        self.fill_rect(x1, y, w, 1, color);
    }

    /// Raw framebuffer bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: u32, h: u32) -> PixelBuffer {
        let mut buffer = PixelBuffer::with_size(w, h).unwrap();
        buffer.clear(Rgba::BLACK);
        buffer
    }

    #[test]
    fn test_new_buffer_layout() {
        let buffer = PixelBuffer::with_size(7, 3).unwrap();
        assert_eq!(buffer.as_bytes().len(), 7 * 3 * 4);
        assert_eq!(buffer.stride(), 28);
        assert_eq!(buffer.offset(2, 1), 28 + 8);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        assert_eq!(
            PixelBuffer::with_size(0, 10),
            Err(CanvasError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert!(PixelBuffer::with_size(10, 0).is_err());
        assert!(PixelBuffer::with_size(u32::MAX, 2).is_err());
    }

    #[test]
    fn test_clear_sets_every_pixel() {
        let mut buffer = canvas(5, 4);
        let c = Rgba::new(10, 20, 30, 40);
        buffer.clear(c);
        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(buffer.get(x, y).unwrap(), c);
            }
        }
    }

    #[test]
    fn test_set_writes_channels_in_order() {
        let mut buffer = canvas(4, 4);
        buffer.set(2, 3, Rgba::new(1, 2, 3, 4));
        let idx = buffer.offset(2, 3);
        assert_eq!(&buffer.as_bytes()[idx..idx + 4], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_set_out_of_range_is_clipped() {
        let mut buffer = canvas(4, 4);
        let before = buffer.clone();
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i32::MIN, i32::MAX), (100, 100)] {
            buffer.set(x, y, Rgba::RED);
        }
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_set_and_fill_rect_idempotent() {
        let mut once = canvas(8, 8);
        once.set(3, 4, Rgba::PURPLE);
        once.fill_rect(-2, 5, 6, 9, Rgba::TEAL);
        let mut twice = once.clone();
        twice.set(3, 4, Rgba::PURPLE);
        twice.fill_rect(-2, 5, 6, 9, Rgba::TEAL);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_in_bounds_agrees_with_fill_rect() {
        let mut buffer = canvas(5, 3);
        for y in -2..5 {
            for x in -2..7 {
                buffer.clear(Rgba::BLACK);
                buffer.fill_rect(x, y, 1, 1, Rgba::RED);
                let red = Rgba::RED.to_bytes();
                let written = buffer.as_bytes().chunks_exact(4).any(|px| px == &red[..]);
                assert_eq!(written, buffer.in_bounds(x, y), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_get_out_of_range_is_error() {
        let buffer = canvas(4, 3);
        assert_eq!(
            buffer.get(4, 0),
            Err(CanvasError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert!(buffer.get(0, -1).is_err());
    }

    #[test]
    fn test_fill_rect_inside() {
        let mut buffer = canvas(6, 6);
        buffer.fill_rect(1, 2, 3, 2, Rgba::GREEN);
        for y in 0..6 {
            for x in 0..6 {
                let inside = (1..4).contains(&x) && (2..4).contains(&y);
                let expected = if inside { Rgba::GREEN } else { Rgba::BLACK };
                assert_eq!(buffer.get(x, y).unwrap(), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_rect_clips_to_buffer() {
        let mut buffer = canvas(4, 4);
        buffer.fill_rect(2, -3, 10, 5, Rgba::BLUE);
        assert_eq!(buffer.get(2, 0).unwrap(), Rgba::BLUE);
        assert_eq!(buffer.get(3, 1).unwrap(), Rgba::BLUE);
        assert_eq!(buffer.get(3, 2).unwrap(), Rgba::BLACK);
        assert_eq!(buffer.get(1, 0).unwrap(), Rgba::BLACK);

        let before = buffer.clone();
        buffer.fill_rect(10, 10, 3, 3, Rgba::RED);
        buffer.fill_rect(0, 0, 0, 3, Rgba::RED);
        buffer.fill_rect(i32::MAX, i32::MAX, u32::MAX, u32::MAX, Rgba::RED);
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_hline_either_order() {
        let mut buffer = canvas(8, 2);
        buffer.hline(5, 2, 1, Rgba::WHITE);
        for x in 0..8 {
            let expected = if (2..=5).contains(&x) { Rgba::WHITE } else { Rgba::BLACK };
            assert_eq!(buffer.get(x, 1).unwrap(), expected);
        }
        buffer.hline(-5, 20, 0, Rgba::RED);
        assert!((0..8).all(|x| buffer.get(x, 0).unwrap() == Rgba::RED));
    }

    #[test]
    fn test_contains_box() {
        let buffer = canvas(10, 10);
        assert!(buffer.contains_box(0, 0, 9, 9));
        assert!(!buffer.contains_box(0, 0, 10, 9));
        assert!(!buffer.contains_box(-1, 0, 5, 5));
        assert!(!buffer.contains_box(5, 5, 4, 6));
    }
}
