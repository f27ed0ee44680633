use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("buffer too small: need {required} bytes, have {actual}")]
    BufferTooSmall { required: usize, actual: usize },
}

pub type CanvasResult<T> = Result<T, Error>;
