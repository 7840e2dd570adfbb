//! Message type tags.
//!
//! Every message starts with a 2-byte big-endian tag built from two ASCII
//! characters. Incoming tags (browser to bridge) and outgoing tags (bridge to
//! browser) live in separate namespaces; `SD` appears in both.

/// Pack two ASCII bytes into a tag.
pub const fn tag(hi: u8, lo: u8) -> u16 {
    ((hi as u16) << 8) | lo as u16
}

/// Incoming: synchronous command call.
pub const COMMAND_SYNC_CALL: u16 = tag(b'C', b'C');
/// Outgoing: synchronous call succeeded.
pub const COMMAND_SYNC_SUCCESS: u16 = tag(b'C', b'S');
/// Outgoing: synchronous call failed with an application failure.
pub const COMMAND_SYNC_FAILURE: u16 = tag(b'C', b'F');
/// Outgoing: synchronous call failed with an unexpected error.
pub const COMMAND_SYNC_ERROR: u16 = tag(b'C', b'E');

/// Incoming: asynchronous command call.
pub const COMMAND_ASYNC_CALL: u16 = tag(b'A', b'C');
/// Outgoing: asynchronous call succeeded.
pub const COMMAND_ASYNC_SUCCESS: u16 = tag(b'A', b'S');
/// Outgoing: asynchronous call failed with an application failure.
pub const COMMAND_ASYNC_FAILURE: u16 = tag(b'A', b'F');
/// Outgoing: asynchronous call failed with an unexpected error.
pub const COMMAND_ASYNC_ERROR: u16 = tag(b'A', b'E');

/// Incoming: fire-and-forget command.
pub const COMMAND_EXECUTE: u16 = tag(b'C', b'X');

/// Outgoing: application notification pushed to a session.
pub const SESSION_NOTIFICATION: u16 = tag(b'N', b'O');

/// Incoming: create a session.
pub const SESSION_CREATE: u16 = tag(b'S', b'C');
/// Both directions: destroy a session (incoming) or report it destroyed (outgoing).
pub const SESSION_DESTROY: u16 = tag(b'S', b'D');

/// Tags recognised by [`crate::read`].
pub const INCOMING: [u16; 5] = [
    COMMAND_SYNC_CALL,
    COMMAND_ASYNC_CALL,
    COMMAND_EXECUTE,
    SESSION_CREATE,
    SESSION_DESTROY,
];

/// Tags produced by [`crate::write`].
pub const OUTGOING: [u16; 8] = [
    COMMAND_SYNC_SUCCESS,
    COMMAND_SYNC_FAILURE,
    COMMAND_SYNC_ERROR,
    COMMAND_ASYNC_SUCCESS,
    COMMAND_ASYNC_FAILURE,
    COMMAND_ASYNC_ERROR,
    SESSION_NOTIFICATION,
    SESSION_DESTROY,
];

/// Returns a human-readable name for a tag.
pub fn tag_name(tag: u16) -> &'static str {
    match tag {
        COMMAND_SYNC_CALL => "COMMAND_SYNC_CALL",
        COMMAND_SYNC_SUCCESS => "COMMAND_SYNC_SUCCESS",
        COMMAND_SYNC_FAILURE => "COMMAND_SYNC_FAILURE",
        COMMAND_SYNC_ERROR => "COMMAND_SYNC_ERROR",
        COMMAND_ASYNC_CALL => "COMMAND_ASYNC_CALL",
        COMMAND_ASYNC_SUCCESS => "COMMAND_ASYNC_SUCCESS",
        COMMAND_ASYNC_FAILURE => "COMMAND_ASYNC_FAILURE",
        COMMAND_ASYNC_ERROR => "COMMAND_ASYNC_ERROR",
        COMMAND_EXECUTE => "COMMAND_EXECUTE",
        SESSION_NOTIFICATION => "SESSION_NOTIFICATION",
        SESSION_CREATE => "SESSION_CREATE",
        SESSION_DESTROY => "SESSION_DESTROY",
        _ => "UNKNOWN",
    }
}

/// The two ASCII bytes of a tag, in wire order.
pub fn tag_bytes(tag: u16) -> [u8; 2] {
    tag.to_be_bytes()
}

/// Returns true if the tag is in the incoming table.
pub fn is_incoming(tag: u16) -> bool {
    INCOMING.contains(&tag)
}

/// Returns true if the tag is in the outgoing table.
pub fn is_outgoing(tag: u16) -> bool {
    OUTGOING.contains(&tag)
}
