//! Error types shared across the crate.

/// Grid construction and addressing failures.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("cell ({row}, {col}) is outside a {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

/// Failures while turning user-supplied settings into a simulation.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("unknown initializer {0:?} (expected stripe, checkerboard or chaotic)")]
    UnknownInitializer(String),
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("config json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
}
