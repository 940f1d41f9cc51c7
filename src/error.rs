use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("invalid buffer size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum SketchError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),
}
