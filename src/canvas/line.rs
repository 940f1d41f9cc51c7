use super::PixelBuffer;
use crate::color::Rgba;

// ============================================================================
// Bresenham stepping
// ============================================================================

/// Integer points of a Bresenham line, from the first endpoint to the last
///
/// The path is 8-connected: consecutive points differ by at most one pixel on
/// each axis, and every point is yielded exactly once.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = (x1 as i64 - x0 as i64).abs();
        let dy = (y1 as i64 - y0 as i64).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let point = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}

/// Round a non-negative coordinate to the nearest pixel (half rounds up)
#[inline]
fn round_coord(v: f64) -> i32 {
    (v + 0.5) as i32
}

// ============================================================================
// Line drawing
// ============================================================================

impl PixelBuffer {
    /// Draw a 1px line using Bresenham's algorithm
    ///
    /// Every point goes through `set`, so off-buffer parts are clipped.
    pub fn draw_line_thin(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
        for (x, y) in BresenhamLine::new(x0, y0, x1, y1) {
            self.set(x, y, color);
        }
    }

    /// Draw a thick line by stamping a filled disk of radius `thickness` at
    /// every Bresenham step.
    ///
    /// Note: the stroke ends up roughly `2 * thickness` wide, and stamps whose
    /// disk would cross the buffer edge are skipped entirely (see `draw_disk`).
    pub fn draw_line_thick(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: i32,
        color: Rgba,
    ) {
        if thickness <= 1 {
            self.draw_line_thin(x0, y0, x1, y1, color);
            return;
        }
        for (x, y) in BresenhamLine::new(x0, y0, x1, y1) {
            self.draw_disk(x, y, thickness, color);
        }
    }

    /// Draw connected thin lines through `coords`, read as flat `x, y` pairs.
    ///
    /// Coordinates are rounded to the nearest pixel. Fewer than two points
    /// draws nothing and a trailing unpaired value is ignored.
    pub fn draw_polyline(&mut self, color: Rgba, coords: &[f64]) {
        let mut points = coords
            .chunks_exact(2)
            .map(|p| (round_coord(p[0]), round_coord(p[1])));
        let Some(mut prev) = points.next() else {
            return;
        };
        for next in points {
            self.draw_line_thin(prev.0, prev.1, next.0, next.1, color);
            prev = next;
        }
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

    fn colored(buffer: &PixelBuffer, color: Rgba) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..buffer.height() as i32 {
            for x in 0..buffer.width() as i32 {
                if buffer.get(x, y).unwrap() == color {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_line_known_pixels() {
        let mut buffer = canvas(10, 10);
        buffer.draw_line_thin(0, 0, 5, 3, Rgba::RED);
        let mut got = colored(&buffer, Rgba::RED);
        got.sort_unstable();
        assert_eq!(got, vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2), (5, 3)]);
        assert_eq!(colored(&buffer, Rgba::BLACK).len(), 100 - 6);
    }

    #[test]
    fn test_line_reverse_direction() {
        let points: Vec<_> = BresenhamLine::new(5, 3, 0, 0).collect();
        assert_eq!(points, vec![(5, 3), (4, 2), (3, 2), (2, 1), (1, 1), (0, 0)]);
    }

    #[test]
    fn test_line_connectivity_and_endpoints() {
        let ends = [
            (0, 0, 17, 4),
            (3, 9, -6, -2),
            (0, 0, 0, 12),
            (8, 1, -8, 1),
            (-4, 7, 11, -13),
            (2, 2, 2, 2),
        ];
        for &(x0, y0, x1, y1) in &ends {
            let points: Vec<_> = BresenhamLine::new(x0, y0, x1, y1).collect();
            assert_eq!(points.first(), Some(&(x0, y0)));
            assert_eq!(points.last(), Some(&(x1, y1)));
            for pair in points.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1);
                assert_ne!(a, b);
            }
            let expected_len = (x1 - x0).abs().max((y1 - y0).abs()) + 1;
            assert_eq!(points.len() as i32, expected_len);
        }
    }

    #[test]
    fn test_single_point_line() {
        let mut buffer = canvas(5, 5);
        buffer.draw_line_thin(3, 3, 3, 3, Rgba::RED);
        assert_eq!(colored(&buffer, Rgba::RED), vec![(3, 3)]);
    }

    #[test]
    fn test_line_is_clipped() {
        let mut buffer = canvas(5, 5);
        buffer.draw_line_thin(-3, 2, 8, 2, Rgba::RED);
        assert_eq!(colored(&buffer, Rgba::RED).len(), 5);
    }

    #[test]
    fn test_line_idempotent() {
        let mut once = canvas(12, 12);
        once.draw_line_thin(1, 10, 11, 0, Rgba::CYAN);
        let mut twice = once.clone();
        twice.draw_line_thin(1, 10, 11, 0, Rgba::CYAN);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_thin_thickness_delegates() {
        let mut thin = canvas(10, 10);
        thin.draw_line_thin(1, 1, 8, 6, Rgba::RED);
        let mut thick = canvas(10, 10);
        thick.draw_line_thick(1, 1, 8, 6, 1, Rgba::RED);
        assert_eq!(thin, thick);
        let mut zero = canvas(10, 10);
        zero.draw_line_thick(1, 1, 8, 6, 0, Rgba::RED);
        assert_eq!(thin, zero);
    }

    #[test]
    fn test_thick_line_stamps_disks() {
        let mut buffer = canvas(30, 30);
        buffer.draw_line_thick(5, 10, 15, 10, 2, Rgba::RED);
        assert_eq!(buffer.get(10, 12).unwrap(), Rgba::RED);
        assert_eq!(buffer.get(10, 13).unwrap(), Rgba::BLACK);
        assert_eq!(buffer.get(10, 8).unwrap(), Rgba::RED);
        assert_eq!(buffer.get(10, 7).unwrap(), Rgba::BLACK);
        assert_eq!(buffer.get(3, 10).unwrap(), Rgba::RED);
        assert_eq!(buffer.get(2, 10).unwrap(), Rgba::BLACK);
        assert_eq!(buffer.get(17, 10).unwrap(), Rgba::RED);
        assert_eq!(buffer.get(18, 10).unwrap(), Rgba::BLACK);
    }

    #[test]
    fn test_thick_line_on_edge_draws_nothing() {
        // Every stamp's disk crosses the top edge, so every stamp is rejected
        let mut buffer = canvas(20, 20);
        let before = buffer.clone();
        buffer.draw_line_thick(0, 0, 10, 0, 3, Rgba::RED);
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_polyline_rounds_and_connects() {
        let mut buffer = canvas(10, 10);
        buffer.draw_polyline(Rgba::YELLOW, &[0.4, 0.2, 3.6, 0.49, 3.5, 3.0]);
        let mut expected = canvas(10, 10);
        expected.draw_line_thin(0, 0, 4, 0, Rgba::YELLOW);
        expected.draw_line_thin(4, 0, 4, 3, Rgba::YELLOW);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_polyline_needs_two_points() {
        let mut buffer = canvas(6, 6);
        let before = buffer.clone();
        buffer.draw_polyline(Rgba::RED, &[]);
        buffer.draw_polyline(Rgba::RED, &[2.0, 2.0]);
        buffer.draw_polyline(Rgba::RED, &[2.0, 2.0, 4.0]);
        assert_eq!(buffer, before);
    }
}
