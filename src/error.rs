#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An error value could not be built from the given code and message.
    #[error("construction error: {reason}")]
    Construction { reason: String },

    /// A structured factory argument was missing, malformed or out of range.
    #[error("validation error: {reason}")]
    Validation { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
