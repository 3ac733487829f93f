use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhiError {
    #[error("selection too small ({width}×{height}), minimum {min}×{min}px")]
    SelectionTooSmall { width: u32, height: u32, min: u32 },

    #[error("Invalid Selection: {0}")]
    InvalidSelection(String),

    #[error("Selection {selection} exceeds image bounds {image_width}×{image_height}")]
    SelectionOutOfBounds {
        selection: String,
        image_width: u32,
        image_height: u32,
    },

    #[error("No selection: drag or specify an area first")]
    NoSelection,

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image Error: {0}")]
    Image(#[from] image::ImageError),
}

pub type PgResult<T> = Result<T, PhiError>;
