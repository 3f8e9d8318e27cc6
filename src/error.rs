use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unknown API operation: {0}")]
    UnknownOperation(String),

    #[error("Missing value for placeholder `{placeholder}` in the `{operation}` URL template")]
    MissingPlaceholder {
        operation: String,
        placeholder: String,
    },

    #[error("Malformed URL template for `{operation}`: {reason}")]
    MalformedTemplate { operation: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON parsing error: {0}")]
    Json(String),
}
