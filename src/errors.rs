#[derive(thiserror::Error, Debug)]
pub enum IdenticonError {
    #[error("{0}")]
    ConfigurationError(&'static str),

    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("invalid input for hue, saturation or value")]
    RangeError,

    #[error(transparent)]
    EncodingError(#[from] image::ImageError),
}
