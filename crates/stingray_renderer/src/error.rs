//! Error type shared by the tracer.

use thiserror::Error;

/// Errors that abort a render.
///
/// Everything except the I/O variants signals a malformed scene or a
/// caller bug; none of them are retried.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("intersection distance must be non-negative; was {0}")]
    NegativeDistance(f64),

    #[error("no intersections were recorded")]
    NoIntersection,

    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("degenerate vector: {0}")]
    DegenerateVector(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type TraceResult<T> = Result<T, TraceError>;
