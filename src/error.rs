use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Unknown team name: {0}")]
    UnknownLabel(String),

    #[error("Missing column in input record: {0}")]
    MissingColumn(String),

    #[error("Probability vector has {probabilities} entries but {classes} class labels were given")]
    LengthMismatch { probabilities: usize, classes: usize },

    #[error("Invalid team vocabulary: {0}")]
    InvalidVocabulary(String),

    #[error("No columns to parse from {0}")]
    NoColumns(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PrepError>;
