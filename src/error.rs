use thiserror::Error;
use parquet::errors::ParquetError;
use arrow::error::ArrowError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Non-success HTTP status on a data page request.
    #[error("Yelp API request failed with status code {status}. Response text: {body}")]
    Transport { status: u16, body: String },

    /// HTTP 200 carrying an application-level `errors` list.
    #[error("Yelp API request failed with errors: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] rquest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
}
