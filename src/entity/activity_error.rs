/// Message shown when the backend fails without a usable status text
pub const DEFAULT_API_ERROR: &str = "Ocurrió un error";

#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown transaction type: {0}")]
    UnknownTransactionType(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}
