use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmissionsError {
    #[error("Quantity must be a positive number, got {0}")]
    InvalidQuantity(f64),

    #[error("Please enter a quantity")]
    EmptyQuantity,

    #[error("Please enter a valid quantity: '{0}'")]
    NotANumber(String),

    #[error("Index {index} out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },

    #[error("Invalid entry '{0}', expected <SOURCE>=<QUANTITY>")]
    InvalidEntry(String),

    #[error("Energy source not found: {0}")]
    UnknownSource(String),

    #[error("No data to export")]
    NothingToExport,

    #[error("Export directory unavailable: {0}")]
    ExportDirUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, EmissionsError>;
