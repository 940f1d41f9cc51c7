//! Serializable draw-command lists
//!
//! A sketch is a named canvas size, a background color and an ordered list of
//! shapes. Rendering clears to the background and replays the shapes in
//! order, each one overwriting whatever is under it.

use crate::canvas::PixelBuffer;
use crate::color::Rgba;
use crate::error::SketchError;
use crate::util::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_thickness() -> i32 {
    1
}

fn default_background() -> Rgba {
    Rgba::BLACK
}

/// One draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Pixel {
        x: i32,
        y: i32,
        color: Rgba,
    },
    Rect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Rgba,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        #[serde(default = "default_thickness")]
        thickness: i32,
        color: Rgba,
    },
    /// Flat list of `x, y` pairs
    Polyline {
        points: Vec<f64>,
        color: Rgba,
    },
    Circle {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Rgba,
    },
    Disk {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Rgba,
    },
}

impl Shape {
    pub fn draw(&self, buffer: &mut PixelBuffer) {
        match *self {
            Shape::Pixel { x, y, color } => buffer.set(x, y, color),
            Shape::Rect { x, y, w, h, color } => buffer.fill_rect(x, y, w, h, color),
            Shape::Line {
                x0,
                y0,
                x1,
                y1,
                thickness,
                color,
            } => buffer.draw_line_thick(x0, y0, x1, y1, thickness, color),
            Shape::Polyline { ref points, color } => buffer.draw_polyline(color, points),
            Shape::Circle {
                cx,
                cy,
                radius,
                color,
            } => buffer.draw_circle(cx, cy, radius, color),
            Shape::Disk {
                cx,
                cy,
                radius,
                color,
            } => buffer.draw_disk(cx, cy, radius, color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: Rgba,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Sketch {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            background: default_background(),
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Clear `buffer` to the background and draw every shape in order.
    /// The buffer does not have to match the sketch size; shapes clip.
    pub fn render(&self, buffer: &mut PixelBuffer) {
        buffer.clear(self.background);
        for shape in &self.shapes {
            shape.draw(buffer);
        }
    }

    /// Allocate a buffer of the sketch's size and render into it
    pub fn to_buffer(&self) -> Result<PixelBuffer, SketchError> {
        let mut buffer = PixelBuffer::with_size(self.width, self.height)?;
        self.render(&mut buffer);
        Ok(buffer)
    }

    /// Save sketch to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SketchError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::debug!("saved sketch '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Load sketch from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SketchError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let sketch: Self = serde_json::from_str(&json)?;
        log::debug!(
            "loaded sketch '{}' ({} shapes) from {}",
            sketch.name,
            sketch.shapes.len(),
            path.display()
        );
        Ok(sketch)
    }

    /// Built-in scene using every primitive: scattered 8x8 food squares,
    /// a row of creatures as disks with outlined halos, a thick diagonal
    /// stroke and a zigzag polyline along the bottom.
    pub fn demo(width: u32, height: u32) -> Self {
        let mut sketch = Self::new("demo", width, height);
        let w = width as i32;
        let h = height as i32;
        let mut rng = Rng::new(0x5eed);

        for _ in 0..24 {
            sketch.push(Shape::Rect {
                x: rng.range_i32(0, (w - 8).max(0)),
                y: rng.range_i32(0, (h - 8).max(0)),
                w: 8,
                h: 8,
                color: Rgba::GREEN,
            });
        }

        let palette = [Rgba::RED, Rgba::YELLOW, Rgba::CYAN, Rgba::MAGENTA, Rgba::LIME];
        let count = palette.len() as i32;
        for (i, &color) in palette.iter().enumerate() {
            let cx = w * (2 * i as i32 + 1) / (2 * count);
            let cy = h / 2;
            let radius = (w / (4 * count)).min(h / 6).max(2);
            sketch.push(Shape::Disk {
                cx,
                cy,
                radius,
                color,
            });
            sketch.push(Shape::Circle {
                cx,
                cy,
                radius: radius + 4,
                color: Rgba::WHITE,
            });
        }

        sketch.push(Shape::Line {
            x0: w / 10,
            y0: h / 10,
            x1: w - w / 10,
            y1: h / 3,
            thickness: 3,
            color: Rgba::SILVER,
        });

        let mut points = Vec::new();
        let base = (h - h / 8) as f64;
        for i in 0..=16 {
            let x = (w - 1) as f64 * i as f64 / 16.0;
            let y = if i % 2 == 0 { base } else { base - h as f64 / 16.0 };
            points.extend([x, y]);
        }
        sketch.push(Shape::Polyline {
            points,
            color: Rgba::BLUE,
        });

        sketch
    }
}
