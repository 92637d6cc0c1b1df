//! Scene parameter loading/saving error types.

/// Errors that can occur when loading, saving, or parsing scene parameters.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the parameter file from disk.
    #[error("failed to read scene parameters: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the parameter file to disk.
    #[error("failed to write scene parameters: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse scene parameters: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize parameters to RON.
    #[error("failed to serialize scene parameters: {0}")]
    SerializeError(#[source] ron::Error),
}
