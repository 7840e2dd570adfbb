use std::io::{Read, Write};

use crate::error::Result;
use crate::headers::Headers;
use crate::payload::Payload;

/// A wire encoding bound to one connection for its lifetime.
///
/// An encoding combines the shared header codec with a payload codec. The
/// payload codec is the pluggable part: the native encoding forwards payload
/// bytes untouched, while a translating encoding would convert between a
/// client-friendly representation and the runtime's canonical one.
///
/// Implementations hold configuration only and are shared read-only across
/// every message on a connection.
pub trait Encoding: Send + Sync {
    /// Stable identifier used for diagnostics and negotiation.
    fn name(&self) -> &str;

    /// Write a header block.
    fn encode_headers(&self, w: &mut dyn Write, headers: &Headers) -> Result<()>;

    /// Read a header block.
    fn decode_headers(&self, r: &mut dyn Read) -> Result<Headers>;

    /// Write a payload. The payload is released once its bytes are written.
    fn encode_payload(&self, w: &mut dyn Write, payload: Payload) -> Result<()>;

    /// Read a payload from the remainder of the current message.
    ///
    /// `r` must be bounded to one message: the payload region carries no
    /// length prefix, so everything left in the stream belongs to it.
    fn decode_payload(&self, r: &mut dyn Read) -> Result<Payload>;
}
