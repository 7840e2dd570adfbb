use std::io::{Read, Write};

use wsbridge_encoding::Encoding;

use crate::error::{MessageError, Result};
use crate::reply::{CallMode, CommandError, CommandFailure, CommandSuccess, SessionNotification};
use crate::session::SessionDestroy;
use crate::tags::{
    COMMAND_ASYNC_ERROR, COMMAND_ASYNC_FAILURE, COMMAND_ASYNC_SUCCESS, COMMAND_SYNC_ERROR,
    COMMAND_SYNC_FAILURE, COMMAND_SYNC_SUCCESS, SESSION_DESTROY, SESSION_NOTIFICATION,
};

/// A message sent to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    SyncSuccess(CommandSuccess),
    SyncFailure(CommandFailure),
    SyncError(CommandError),
    AsyncSuccess(CommandSuccess),
    AsyncFailure(CommandFailure),
    AsyncError(CommandError),
    SessionDestroy(SessionDestroy),
    Notification(SessionNotification),
}

impl Outgoing {
    /// Wrap a success body in the reply variant for `mode`.
    pub fn success(mode: CallMode, body: CommandSuccess) -> Self {
        match mode {
            CallMode::Sync => Outgoing::SyncSuccess(body),
            CallMode::Async => Outgoing::AsyncSuccess(body),
        }
    }

    /// Wrap a failure body in the reply variant for `mode`.
    pub fn failure(mode: CallMode, body: CommandFailure) -> Self {
        match mode {
            CallMode::Sync => Outgoing::SyncFailure(body),
            CallMode::Async => Outgoing::AsyncFailure(body),
        }
    }

    /// Wrap an error body in the reply variant for `mode`.
    pub fn error(mode: CallMode, body: CommandError) -> Self {
        match mode {
            CallMode::Sync => Outgoing::SyncError(body),
            CallMode::Async => Outgoing::AsyncError(body),
        }
    }

    /// The wire tag for this message.
    pub fn tag(&self) -> u16 {
        match self {
            Outgoing::SyncSuccess(_) => COMMAND_SYNC_SUCCESS,
            Outgoing::SyncFailure(_) => COMMAND_SYNC_FAILURE,
            Outgoing::SyncError(_) => COMMAND_SYNC_ERROR,
            Outgoing::AsyncSuccess(_) => COMMAND_ASYNC_SUCCESS,
            Outgoing::AsyncFailure(_) => COMMAND_ASYNC_FAILURE,
            Outgoing::AsyncError(_) => COMMAND_ASYNC_ERROR,
            Outgoing::SessionDestroy(_) => SESSION_DESTROY,
            Outgoing::Notification(_) => SESSION_NOTIFICATION,
        }
    }

    /// The session this message is scoped to.
    pub fn session(&self) -> u16 {
        match self {
            Outgoing::SyncSuccess(m) | Outgoing::AsyncSuccess(m) => m.session,
            Outgoing::SyncFailure(m) | Outgoing::AsyncFailure(m) => m.session,
            Outgoing::SyncError(m) | Outgoing::AsyncError(m) => m.session,
            Outgoing::SessionDestroy(m) => m.session,
            Outgoing::Notification(m) => m.session,
        }
    }

    /// Encode this message, tag first. The payload is released once written.
    pub(crate) fn write_to(self, w: &mut dyn Write, e: &dyn Encoding) -> Result<()> {
        let tag = self.tag();
        match self {
            Outgoing::SyncSuccess(m) | Outgoing::AsyncSuccess(m) => m.write_body(w, e, tag),
            Outgoing::SyncFailure(m) | Outgoing::AsyncFailure(m) => m.write_body(w, e, tag),
            Outgoing::SyncError(m) | Outgoing::AsyncError(m) => m.write_body(w, e, tag),
            Outgoing::SessionDestroy(m) => m.write_body(w, e),
            Outgoing::Notification(m) => m.write_body(w, e, tag),
        }
    }

    /// Decode the body for an already-consumed outgoing `tag`.
    pub(crate) fn read_body(tag: u16, r: &mut dyn Read, e: &dyn Encoding) -> Result<Self> {
        let msg = match tag {
            COMMAND_SYNC_SUCCESS => Outgoing::SyncSuccess(CommandSuccess::read_body(r, e)?),
            COMMAND_SYNC_FAILURE => Outgoing::SyncFailure(CommandFailure::read_body(r, e)?),
            COMMAND_SYNC_ERROR => Outgoing::SyncError(CommandError::read_body(r, e)?),
            COMMAND_ASYNC_SUCCESS => Outgoing::AsyncSuccess(CommandSuccess::read_body(r, e)?),
            COMMAND_ASYNC_FAILURE => Outgoing::AsyncFailure(CommandFailure::read_body(r, e)?),
            COMMAND_ASYNC_ERROR => Outgoing::AsyncError(CommandError::read_body(r, e)?),
            SESSION_DESTROY => Outgoing::SessionDestroy(SessionDestroy::read_reply(r, e)?),
            SESSION_NOTIFICATION => {
                Outgoing::Notification(SessionNotification::read_body(r, e)?)
            }
            tag => return Err(MessageError::UnrecognisedReplyType { tag }),
        };
        Ok(msg)
    }
}

impl From<SessionDestroy> for Outgoing {
    fn from(msg: SessionDestroy) -> Self {
        Outgoing::SessionDestroy(msg)
    }
}

impl From<SessionNotification> for Outgoing {
    fn from(msg: SessionNotification) -> Self {
        Outgoing::Notification(msg)
    }
}
