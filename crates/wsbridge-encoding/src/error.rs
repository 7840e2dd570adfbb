/// Errors that can occur while encoding or decoding headers and payloads.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// An I/O error occurred on the underlying message stream.
    #[error("encoding I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A length-prefixed field does not fit its 16-bit length prefix.
    #[error("{field} too long ({len} bytes, max {max})")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// The header block has more entries than the codec accepts.
    #[error("too many headers ({count}, max {max})")]
    TooManyHeaders { count: usize, max: usize },

    /// A string field is not valid UTF-8.
    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

impl EncodingError {
    /// Returns true if this error came from the underlying stream rather than the codec.
    pub fn is_io(&self) -> bool {
        matches!(self, EncodingError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, EncodingError>;
