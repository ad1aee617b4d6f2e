use thiserror::Error;

/// Errors raised by the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A coordinate fell outside the grid. Accessors never clamp.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("a {width}x{height} grid is too large to allocate")]
    TooLarge { width: usize, height: usize },
    #[error("invalid snapshot: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error(transparent)]
    Regex(#[from] regex::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
