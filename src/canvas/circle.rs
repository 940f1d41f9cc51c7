use super::PixelBuffer;
use crate::color::Rgba;

// ============================================================================
// Midpoint stepping
// ============================================================================

/// Decision-variable steps of the midpoint circle algorithm
///
/// Yields `(x, y)` offsets for one octant, starting at `(0, radius)` and
/// stopping once `x > y`. Negative radii yield nothing.
#[derive(Debug, Clone)]
pub struct MidpointCircle {
    x: i32,
    y: i32,
    p: i64,
}

impl MidpointCircle {
    pub fn new(radius: i32) -> Self {
        Self {
            x: 0,
            y: radius,
            p: 3 - 2 * radius as i64,
        }
    }
}

impl Iterator for MidpointCircle {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x > self.y {
            return None;
        }
        let step = (self.x, self.y);
        if self.p < 0 {
            self.p += 4 * self.x as i64 + 6;
        } else {
            self.p += 4 * (self.x as i64 - self.y as i64) + 10;
            self.y -= 1;
        }
        self.x += 1;
        Some(step)
    }
}

/// The 8 points mirrored from one octant step around (cx, cy)
///
/// At `x == 0` the poles repeat; plotting is idempotent so that is harmless.
/// Coordinates past the `i32` range saturate to `i32::MIN`/`i32::MAX`, which
/// lie outside every buffer and are clipped by `set`.
#[inline]
pub fn octant_points(cx: i32, cy: i32, x: i32, y: i32) -> [(i32, i32); 8] {
    [
        (cx.saturating_add(x), cy.saturating_add(y)),
        (cx.saturating_sub(x), cy.saturating_add(y)),
        (cx.saturating_add(x), cy.saturating_sub(y)),
        (cx.saturating_sub(x), cy.saturating_sub(y)),
        (cx.saturating_add(y), cy.saturating_add(x)),
        (cx.saturating_sub(y), cy.saturating_add(x)),
        (cx.saturating_add(y), cy.saturating_sub(x)),
        (cx.saturating_sub(y), cy.saturating_sub(x)),
    ]
}

impl PixelBuffer {
    /// True if the circle's whole bounding box fits inside the buffer
    #[inline]
    pub(crate) fn circle_fits(&self, cx: i32, cy: i32, radius: i32) -> bool {
        let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
        let clamp = |v: i64| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        self.contains_box(clamp(cx - r), clamp(cy - r), clamp(cx + r), clamp(cy + r))
    }

    /// Draw a 1px circle outline (midpoint algorithm, 8-way symmetry)
    ///
    /// All or nothing: if the bounding box `[cx-r, cx+r] x [cy-r, cy+r]` does
    /// not fit the buffer, nothing is drawn.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba) {
        if radius < 0 || !self.circle_fits(cx, cy, radius) {
            return;
        }
        for (x, y) in MidpointCircle::new(radius) {
            for (px, py) in octant_points(cx, cy, x, y) {
                self.set(px, py, color);
            }
        }
    }
}
