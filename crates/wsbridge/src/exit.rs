use std::fmt;
use std::io;

use wsbridge_encoding::EncodingError;
use wsbridge_message::MessageError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        io::ErrorKind::BrokenPipe | io::ErrorKind::ConnectionReset => TRANSPORT_ERROR,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn encoding_error(context: &str, err: EncodingError) -> CliError {
    match err {
        EncodingError::Io(source) => io_error(context, source),
        other => CliError::new(DATA_INVALID, format!("{context}: {other}")),
    }
}

/// A message read from a file or argument ending early is bad input, not a
/// broken connection.
pub fn message_error(context: &str, err: MessageError) -> CliError {
    match err {
        MessageError::Transport(source) if source.kind() == io::ErrorKind::UnexpectedEof => {
            CliError::new(DATA_INVALID, format!("{context}: truncated message"))
        }
        MessageError::Transport(source) => io_error(context, source),
        MessageError::Encoding(err) => encoding_error(context, err),
        other => CliError::new(DATA_INVALID, format!("{context}: {other}")),
    }
}
