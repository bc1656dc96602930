use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecsplitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Split column {column} out of range for image width {width}")]
    InvalidSplitColumn { column: usize, width: usize },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, SpecsplitError>;
