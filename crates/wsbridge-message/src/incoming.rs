use std::io::{Read, Write};

use wsbridge_encoding::Encoding;

use crate::command::{AsyncCall, Execute, SyncCall};
use crate::error::{MessageError, Result};
use crate::session::{SessionCreate, SessionDestroy};
use crate::tags::{
    COMMAND_ASYNC_CALL, COMMAND_EXECUTE, COMMAND_SYNC_CALL, SESSION_CREATE, SESSION_DESTROY,
};
use crate::visitor::Visitor;

/// A message received from the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incoming {
    SyncCall(SyncCall),
    AsyncCall(AsyncCall),
    Execute(Execute),
    SessionCreate(SessionCreate),
    SessionDestroy(SessionDestroy),
}

impl Incoming {
    /// Hand this message to the matching visitor method.
    pub fn accept<V: Visitor + ?Sized>(self, visitor: &mut V) -> std::result::Result<(), V::Error> {
        match self {
            Incoming::SyncCall(m) => visitor.visit_sync_call(m),
            Incoming::AsyncCall(m) => visitor.visit_async_call(m),
            Incoming::Execute(m) => visitor.visit_execute(m),
            Incoming::SessionCreate(m) => visitor.visit_session_create(m),
            Incoming::SessionDestroy(m) => visitor.visit_session_destroy(m),
        }
    }

    /// The wire tag for this message.
    pub fn tag(&self) -> u16 {
        match self {
            Incoming::SyncCall(_) => COMMAND_SYNC_CALL,
            Incoming::AsyncCall(_) => COMMAND_ASYNC_CALL,
            Incoming::Execute(_) => COMMAND_EXECUTE,
            Incoming::SessionCreate(_) => SESSION_CREATE,
            Incoming::SessionDestroy(_) => SESSION_DESTROY,
        }
    }

    /// The session this message is scoped to.
    pub fn session(&self) -> u16 {
        match self {
            Incoming::SyncCall(m) => m.session,
            Incoming::AsyncCall(m) => m.session,
            Incoming::Execute(m) => m.session,
            Incoming::SessionCreate(m) => m.session,
            Incoming::SessionDestroy(m) => m.session,
        }
    }

    /// Decode the body for an already-consumed incoming `tag`.
    pub(crate) fn read_body(tag: u16, r: &mut dyn Read, e: &dyn Encoding) -> Result<Self> {
        let msg = match tag {
            COMMAND_SYNC_CALL => Incoming::SyncCall(SyncCall::read_body(r, e)?),
            COMMAND_ASYNC_CALL => Incoming::AsyncCall(AsyncCall::read_body(r, e)?),
            COMMAND_EXECUTE => Incoming::Execute(Execute::read_body(r, e)?),
            SESSION_CREATE => Incoming::SessionCreate(SessionCreate::read_body(r)?),
            SESSION_DESTROY => Incoming::SessionDestroy(SessionDestroy::read_body(r)?),
            tag => return Err(MessageError::UnrecognisedType { tag }),
        };
        Ok(msg)
    }

    /// Encode this message as the browser would send it.
    pub(crate) fn write_to(self, w: &mut dyn Write, e: &dyn Encoding) -> Result<()> {
        match self {
            Incoming::SyncCall(m) => m.write_request(w, e),
            Incoming::AsyncCall(m) => m.write_request(w, e),
            Incoming::Execute(m) => m.write_request(w, e),
            Incoming::SessionCreate(m) => m.write_request(w),
            Incoming::SessionDestroy(m) => m.write_request(w),
        }
    }
}

impl From<SyncCall> for Incoming {
    fn from(msg: SyncCall) -> Self {
        Incoming::SyncCall(msg)
    }
}

impl From<AsyncCall> for Incoming {
    fn from(msg: AsyncCall) -> Self {
        Incoming::AsyncCall(msg)
    }
}

impl From<Execute> for Incoming {
    fn from(msg: Execute) -> Self {
        Incoming::Execute(msg)
    }
}

impl From<SessionCreate> for Incoming {
    fn from(msg: SessionCreate) -> Self {
        Incoming::SessionCreate(msg)
    }
}

impl From<SessionDestroy> for Incoming {
    fn from(msg: SessionDestroy) -> Self {
        Incoming::SessionDestroy(msg)
    }
}
