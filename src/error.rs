//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Separates OS-level I/O failures from image decode and image write failures
//! so each stage of the load/crop/save pipeline stays distinguishable.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode error: {0}")]
    Decode(#[source] image::ImageError),

    #[error("write error: {0}")]
    Write(#[source] image::ImageError),
}

impl Error {
    /// Map an `image::open` failure, unwrapping OS-level errors back into `Io`.
    pub fn from_open(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => Error::Io(io),
            other => Error::Decode(other),
        }
    }

    /// Map a save failure, unwrapping OS-level errors back into `Io`.
    pub fn from_save(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => Error::Io(io),
            other => Error::Write(other),
        }
    }
}
