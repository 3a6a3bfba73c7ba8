//! Error types for the render kernel.

use thiserror::Error;

/// Errors reported before any pixel work is dispatched.
///
/// Degenerate geometry never produces an error; it simply yields no hit or
/// no light contribution.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("scene has no camera")]
    MissingCamera,

    #[error("invalid camera: {0}")]
    InvalidCamera(String),

    #[error(
        "framebuffer is {buffer_width}x{buffer_height} but the camera resolution is {camera_width}x{camera_height}"
    )]
    DimensionMismatch {
        buffer_width: u32,
        buffer_height: u32,
        camera_width: u32,
        camera_height: u32,
    },

    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for render kernel operations.
pub type RenderResult<T> = Result<T, RenderError>;
