use wsbridge_encoding::EncodingError;

/// Errors that can occur while reading or writing messages.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// The underlying stream failed or ended before a field was complete.
    ///
    /// The connection cannot be resumed after this error.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// The tag is not in the incoming message table.
    #[error("unrecognised incoming message type {tag:#06x}")]
    UnrecognisedType { tag: u16 },

    /// The tag is not in the outgoing message table.
    #[error("unrecognised outgoing message type {tag:#06x}")]
    UnrecognisedReplyType { tag: u16 },

    /// The header or payload codec rejected the message.
    #[error(transparent)]
    Encoding(EncodingError),
}

impl MessageError {
    /// Returns true if the stream failed and the connection must be closed.
    pub fn is_transport(&self) -> bool {
        matches!(self, MessageError::Transport(_))
    }

    /// Returns true if the bytes were readable but did not form a known message.
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            MessageError::UnrecognisedType { .. } | MessageError::UnrecognisedReplyType { .. }
        )
    }
}

impl From<EncodingError> for MessageError {
    fn from(err: EncodingError) -> Self {
        match err {
            EncodingError::Io(io) => MessageError::Transport(io),
            other => MessageError::Encoding(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, MessageError>;

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;

    #[test]
    fn encoding_io_is_transport() {
        let err = MessageError::from(EncodingError::Io(ErrorKind::UnexpectedEof.into()));
        assert!(err.is_transport());
        assert!(!err.is_protocol());
    }

    #[test]
    fn encoding_errors_pass_through() {
        let err = MessageError::from(EncodingError::InvalidUtf8 { field: "command" });
        assert!(matches!(
            err,
            MessageError::Encoding(EncodingError::InvalidUtf8 { field: "command" })
        ));
        assert_eq!(err.to_string(), "command is not valid UTF-8");
    }

    #[test]
    fn unrecognised_type_display() {
        let err = MessageError::UnrecognisedType { tag: 0x5858 };
        assert!(err.is_protocol());
        assert_eq!(err.to_string(), "unrecognised incoming message type 0x5858");
    }
}
