use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Truncated varint at offset {offset}")]
    TruncatedVarint { offset: usize },

    #[error("Varint at offset {offset} exceeds 64 bits")]
    VarintOverflow { offset: usize },

    #[error("Declared length {declared} exceeds {remaining} remaining bytes")]
    LengthOutOfRange { declared: u64, remaining: usize },

    #[error("Result channel closed before the processor output was delivered")]
    ChannelClosed,
}

pub type Result<T> = std::result::Result<T, LabError>;
