use super::circle::MidpointCircle;
use super::PixelBuffer;
use crate::color::Rgba;

/// Horizontal run of pixels `x0..=x1` on row `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x0: i32,
    pub x1: i32,
}

/// Scanline spans covering a filled disk, in midpoint traversal order
///
/// Each step `(x, y)` touches four rows: `cy+y` and `cy-y` get the narrow span
/// `[cx-x, cx+x]`, `cy+x` and `cy-x` get the wide span `[cx-y, cx+y]`. Near the
/// poles consecutive steps keep the same `y`, so a narrow row is only emitted
/// when it differs from the previous step's row. A wide row is dropped when it
/// coincides with a narrow row of the same step (the 45° crossover). The
/// result fills each row at most once for `radius >= 1`.
///
/// Coordinates past the `i32` range saturate, so spans for a center near the
/// limits stay off-buffer instead of wrapping around.
pub fn disk_spans(cx: i32, cy: i32, radius: i32) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut prev_b: Option<i32> = None;
    let mut prev_d: Option<i32> = None;

    for (x, y) in MidpointCircle::new(radius) {
        let b = cy.saturating_add(y);
        let d = cy.saturating_sub(y);
        let f = cy.saturating_add(x);
        let h = cy.saturating_sub(x);
        let (narrow0, narrow1) = (cx.saturating_sub(x), cx.saturating_add(x));
        let (wide0, wide1) = (cx.saturating_sub(y), cx.saturating_add(y));

        if prev_b != Some(b) {
            spans.push(Span { y: b, x0: narrow0, x1: narrow1 });
        }
        if prev_d != Some(d) {
            spans.push(Span { y: d, x0: narrow0, x1: narrow1 });
        }
        if f != b {
            spans.push(Span { y: f, x0: wide0, x1: wide1 });
        }
        if h != d && h != f {
            spans.push(Span { y: h, x0: wide0, x1: wide1 });
        }

        prev_b = Some(b);
        prev_d = Some(d);
    }
    spans
}

impl PixelBuffer {
    /// Draw a filled disk as horizontal spans
    ///
    /// Same all-or-nothing bounding box policy as `draw_circle`.
    pub fn draw_disk(&mut self, cx: i32, cy: i32, radius: i32, color: Rgba) {
        if radius < 0 || !self.circle_fits(cx, cy, radius) {
            return;
        }
        for span in disk_spans(cx, cy, radius) {
            self.hline(span.x0, span.x1, span.y, color);
        }
    }
}
