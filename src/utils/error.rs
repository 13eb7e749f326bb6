use thiserror::Error;

#[derive(Error, Debug)]
pub enum SizingError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("cell type not found in catalog: {name}")]
    CellNotFound { name: String },

    #[error("no {form_factor} cell available in catalog")]
    NoMatchingCell { form_factor: String },

    #[error("catalog contains no cells")]
    EmptyCatalog,

    #[error("configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SizingError>;
