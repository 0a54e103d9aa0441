use thiserror::Error;

#[derive(Debug, Error)]
pub enum DonutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Invalid donut size {size}: must be between {min} and {max} berries")]
    InvalidSize { size: u32, min: u32, max: u32 },

    #[error("Invalid size range {min}..={max}: minimum is above maximum")]
    EmptySizeRange { min: u32, max: u32 },

    #[error("Berry not found: {name}{}", .suggestion.as_ref().map(|s| format!(" (did you mean '{}'?)", s)).unwrap_or_default())]
    UnknownBerry {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

pub type Result<T> = std::result::Result<T, DonutError>;
