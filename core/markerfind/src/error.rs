use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("failed to decode image: {0}")]
    DecodeError(String),

    #[error("image dimensions are zero")]
    ZeroDimensions,

    #[error("area bounds are inverted: lower {0} is not below upper {1}")]
    InvalidAreaBounds(f64, f64),
}
