//! Header and payload encodings for the wsbridge wire protocol.
//!
//! Every message that talks to the command layer carries a header block and
//! a payload. This crate owns both formats:
//! - A shared [`HeaderCodec`] for count-prefixed name/value entries
//! - The [`Encoding`] strategy trait, chosen once per connection
//! - [`NativeEncoding`], which forwards payload bytes untouched
//!
//! Nothing here knows about message tags or sessions.

pub mod config;
pub mod encoding;
pub mod error;
pub mod headers;
pub mod native;
pub mod payload;
pub mod wire;

pub use config::{EncodingConfig, DEFAULT_MAX_HEADERS, DEFAULT_MAX_PAYLOAD};
pub use encoding::Encoding;
pub use error::{EncodingError, Result};
pub use headers::{HeaderCodec, Headers};
pub use native::{NativeEncoding, NATIVE_ENCODING_NAME};
pub use payload::Payload;
