use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetGenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid sheet dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Nothing to pack")]
    Empty,
}

pub type Result<T> = std::result::Result<T, SheetGenError>;
