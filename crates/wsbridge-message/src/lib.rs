//! Tagged message framing for browser WebSocket clients.
//!
//! Every WebSocket message carries one frame:
//! - A 2-byte big-endian tag made of two ASCII characters (`CC`, `SD`, ...)
//! - Type-specific fields: session, correlation `seq`, procedure name
//! - A header block and an opaque payload, both written by the active
//!   [`Encoding`](wsbridge_encoding::Encoding)
//!
//! [`read`] turns bytes into an [`Incoming`] message, [`Incoming::accept`]
//! hands it to a [`Visitor`], and [`write`] turns an [`Outgoing`] reply or
//! notification back into bytes.

pub mod codec;
pub mod command;
pub mod error;
pub mod incoming;
pub mod outgoing;
pub mod preamble;
pub mod reply;
pub mod session;
pub mod tags;
pub mod visitor;

pub use codec::{dispatch, read, read_reply, write, write_request};
pub use command::{AsyncCall, Execute, SyncCall};
pub use error::{MessageError, Result};
pub use incoming::Incoming;
pub use outgoing::Outgoing;
pub use reply::{CallMode, CommandError, CommandFailure, CommandSuccess, SessionNotification};
pub use session::{SessionCreate, SessionDestroy};
pub use tags::{tag_name, INCOMING, OUTGOING};
pub use visitor::Visitor;
