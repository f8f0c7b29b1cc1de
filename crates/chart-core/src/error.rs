// File: crates/chart-core/src/error.rs
// Summary: Error type shared by projection queries and rendering.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("series '{label}' has no points")]
    EmptySeries { label: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: i32, height: i32 },

    #[error("render failed: {0}")]
    Render(String),
}
