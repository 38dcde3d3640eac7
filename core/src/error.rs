use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Checksum mismatch: expected {expected}, received {received}")]
    ChecksumMismatch { expected: String, received: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
