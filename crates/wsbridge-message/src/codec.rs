//! Read and write entry points.
//!
//! Each call handles exactly one WebSocket message. The stream passed to a
//! read must end where the message ends, because payloads run to the end of
//! the message with no length prefix.
//!
//! Message layouts after the 2-byte tag (all integers big-endian, `str16` is
//! a 2-byte length followed by UTF-8):
//! ```text
//! CC / AC  session(2) seq(4) namespace(str16) command(str16) headers payload
//! CX       session(2) namespace(str16) command(str16) headers payload
//! SC / SD  session(2)
//!
//! CS / AS  session(2) seq(4) headers payload
//! CF / AF  session(2) seq(4) headers type(str16) message(str16) payload
//! CE / AE  session(2) seq(4) headers message(str16)
//! NO       session(2) headers payload
//! SD       session(2) headers (always empty)
//! ```

use std::io::{Read, Write};

use tracing::{debug, warn};
use wsbridge_encoding::wire::read_u16;
use wsbridge_encoding::Encoding;

use crate::error::{MessageError, Result};
use crate::incoming::Incoming;
use crate::outgoing::Outgoing;
use crate::tags::tag_name;
use crate::visitor::Visitor;

/// Decode the next incoming message from `r`.
///
/// Fails with [`MessageError::Transport`] if the stream ends before the tag
/// or any fixed field is complete, and with [`MessageError::UnrecognisedType`]
/// if the tag is not an incoming message type. Errors from the variant's own
/// decoding are returned as they occurred.
pub fn read<R: Read>(r: &mut R, encoding: &dyn Encoding) -> Result<Incoming> {
    let r: &mut dyn Read = r;
    let tag = read_u16(r)?;

    let msg = match Incoming::read_body(tag, r, encoding) {
        Ok(msg) => msg,
        Err(MessageError::UnrecognisedType { tag }) => {
            warn!(tag = %format!("{tag:#06x}"), "unrecognised incoming message type");
            return Err(MessageError::UnrecognisedType { tag });
        }
        Err(err) => return Err(err),
    };

    debug!(
        tag = tag_name(tag),
        session = msg.session(),
        encoding = encoding.name(),
        "decoded incoming message"
    );
    Ok(msg)
}

/// Encode `msg` to `w`, tag first.
///
/// On error the stream may hold a partial message; the connection must be
/// closed.
pub fn write<W: Write>(w: &mut W, encoding: &dyn Encoding, msg: Outgoing) -> Result<()> {
    let tag = msg.tag();
    let session = msg.session();
    msg.write_to(w, encoding)?;
    debug!(
        tag = tag_name(tag),
        session,
        encoding = encoding.name(),
        "wrote outgoing message"
    );
    Ok(())
}

/// Decode one incoming message and hand it to `visitor`.
///
/// The visitor is never called for a message that failed to decode.
pub fn dispatch<R, V>(
    r: &mut R,
    encoding: &dyn Encoding,
    visitor: &mut V,
) -> std::result::Result<(), V::Error>
where
    R: Read,
    V: Visitor + ?Sized,
    V::Error: From<MessageError>,
{
    let msg = read(r, encoding)?;
    msg.accept(visitor)
}

/// Encode an incoming message the way a browser client sends it.
pub fn write_request<W: Write>(w: &mut W, encoding: &dyn Encoding, msg: Incoming) -> Result<()> {
    let tag = msg.tag();
    msg.write_to(w, encoding)?;
    debug!(tag = tag_name(tag), "wrote request");
    Ok(())
}

/// Decode an outgoing message the way a browser client receives it.
pub fn read_reply<R: Read>(r: &mut R, encoding: &dyn Encoding) -> Result<Outgoing> {
    let r: &mut dyn Read = r;
    let tag = read_u16(r)?;
    let msg = Outgoing::read_body(tag, r, encoding)?;
    debug!(tag = tag_name(tag), session = msg.session(), "decoded reply");
    Ok(msg)
}
