//! Command calls sent by the browser.

use std::io::{Read, Write};

use wsbridge_encoding::wire::{read_str16, read_u32, write_str16, write_u32};
use wsbridge_encoding::{Encoding, Headers, Payload};

use crate::error::Result;
use crate::outgoing::Outgoing;
use crate::preamble::{read_preamble, write_preamble};
use crate::reply::{CallMode, CommandError, CommandFailure, CommandSuccess};
use crate::tags::{COMMAND_ASYNC_CALL, COMMAND_EXECUTE, COMMAND_SYNC_CALL};

/// A command call whose reply the browser waits for.
///
/// `seq` is chosen by the browser and echoed in the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncCall {
    pub session: u16,
    pub seq: u32,
    pub namespace: String,
    pub command: String,
    pub headers: Headers,
    pub payload: Payload,
}

/// A command call whose reply arrives whenever the runtime completes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncCall {
    pub session: u16,
    pub seq: u32,
    pub namespace: String,
    pub command: String,
    pub headers: Headers,
    pub payload: Payload,
}

/// A fire-and-forget command. No reply is ever sent, so there is no `seq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execute {
    pub session: u16,
    pub namespace: String,
    pub command: String,
    pub headers: Headers,
    pub payload: Payload,
}

struct CallFields {
    session: u16,
    seq: u32,
    namespace: String,
    command: String,
    headers: Headers,
    payload: Payload,
}

fn read_call(r: &mut dyn Read, e: &dyn Encoding) -> Result<CallFields> {
    let session = read_preamble(r)?;
    let seq = read_u32(r)?;
    let namespace = read_str16(r, "namespace")?;
    let command = read_str16(r, "command")?;
    let headers = e.decode_headers(r)?;
    let payload = e.decode_payload(r)?;
    Ok(CallFields {
        session,
        seq,
        namespace,
        command,
        headers,
        payload,
    })
}

fn write_call(w: &mut dyn Write, e: &dyn Encoding, tag: u16, call: CallFields) -> Result<()> {
    write_preamble(w, tag, call.session)?;
    write_u32(w, call.seq)?;
    write_str16(w, "namespace", &call.namespace)?;
    write_str16(w, "command", &call.command)?;
    e.encode_headers(w, &call.headers)?;
    e.encode_payload(w, call.payload)?;
    Ok(())
}

impl SyncCall {
    pub(crate) fn read_body(r: &mut dyn Read, e: &dyn Encoding) -> Result<Self> {
        let f = read_call(r, e)?;
        Ok(Self {
            session: f.session,
            seq: f.seq,
            namespace: f.namespace,
            command: f.command,
            headers: f.headers,
            payload: f.payload,
        })
    }

    pub(crate) fn write_request(self, w: &mut dyn Write, e: &dyn Encoding) -> Result<()> {
        let fields = CallFields {
            session: self.session,
            seq: self.seq,
            namespace: self.namespace,
            command: self.command,
            headers: self.headers,
            payload: self.payload,
        };
        write_call(w, e, COMMAND_SYNC_CALL, fields)
    }

    /// Build the success reply for this call.
    pub fn success(&self, headers: Headers, payload: Payload) -> Outgoing {
        reply_success(CallMode::Sync, self.session, self.seq, headers, payload)
    }

    /// Build the application-failure reply for this call.
    pub fn failure(
        &self,
        headers: Headers,
        failure_type: impl Into<String>,
        message: impl Into<String>,
        payload: Payload,
    ) -> Outgoing {
        reply_failure(
            CallMode::Sync,
            self.session,
            self.seq,
            headers,
            failure_type.into(),
            message.into(),
            payload,
        )
    }

    /// Build the unexpected-error reply for this call.
    pub fn error(&self, headers: Headers, message: impl Into<String>) -> Outgoing {
        reply_error(CallMode::Sync, self.session, self.seq, headers, message.into())
    }
}

impl AsyncCall {
    pub(crate) fn read_body(r: &mut dyn Read, e: &dyn Encoding) -> Result<Self> {
        let f = read_call(r, e)?;
        Ok(Self {
            session: f.session,
            seq: f.seq,
            namespace: f.namespace,
            command: f.command,
            headers: f.headers,
            payload: f.payload,
        })
    }

    pub(crate) fn write_request(self, w: &mut dyn Write, e: &dyn Encoding) -> Result<()> {
        let fields = CallFields {
            session: self.session,
            seq: self.seq,
            namespace: self.namespace,
            command: self.command,
            headers: self.headers,
            payload: self.payload,
        };
        write_call(w, e, COMMAND_ASYNC_CALL, fields)
    }

    /// Build the success reply for this call.
    pub fn success(&self, headers: Headers, payload: Payload) -> Outgoing {
        reply_success(CallMode::Async, self.session, self.seq, headers, payload)
    }

    /// Build the application-failure reply for this call.
    pub fn failure(
        &self,
        headers: Headers,
        failure_type: impl Into<String>,
        message: impl Into<String>,
        payload: Payload,
    ) -> Outgoing {
        reply_failure(
            CallMode::Async,
            self.session,
            self.seq,
            headers,
            failure_type.into(),
            message.into(),
            payload,
        )
    }

    /// Build the unexpected-error reply for this call.
    pub fn error(&self, headers: Headers, message: impl Into<String>) -> Outgoing {
        reply_error(CallMode::Async, self.session, self.seq, headers, message.into())
    }
}

impl Execute {
    pub(crate) fn read_body(r: &mut dyn Read, e: &dyn Encoding) -> Result<Self> {
        let session = read_preamble(r)?;
        let namespace = read_str16(r, "namespace")?;
        let command = read_str16(r, "command")?;
        let headers = e.decode_headers(r)?;
        let payload = e.decode_payload(r)?;
        Ok(Self {
            session,
            namespace,
            command,
            headers,
            payload,
        })
    }

    pub(crate) fn write_request(self, w: &mut dyn Write, e: &dyn Encoding) -> Result<()> {
        write_preamble(w, COMMAND_EXECUTE, self.session)?;
        write_str16(w, "namespace", &self.namespace)?;
        write_str16(w, "command", &self.command)?;
        e.encode_headers(w, &self.headers)?;
        e.encode_payload(w, self.payload)?;
        Ok(())
    }
}

fn reply_success(
    mode: CallMode,
    session: u16,
    seq: u32,
    headers: Headers,
    payload: Payload,
) -> Outgoing {
    Outgoing::success(
        mode,
        CommandSuccess {
            session,
            seq,
            headers,
            payload,
        },
    )
}

fn reply_failure(
    mode: CallMode,
    session: u16,
    seq: u32,
    headers: Headers,
    failure_type: String,
    message: String,
    payload: Payload,
) -> Outgoing {
    Outgoing::failure(
        mode,
        CommandFailure {
            session,
            seq,
            headers,
            failure_type,
            message,
            payload,
        },
    )
}

fn reply_error(
    mode: CallMode,
    session: u16,
    seq: u32,
    headers: Headers,
    message: String,
) -> Outgoing {
    Outgoing::error(
        mode,
        CommandError {
            session,
            seq,
            headers,
            message,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sync_call() -> SyncCall {
        SyncCall {
            session: 3,
            seq: 41,
            namespace: "billing".to_string(),
            command: "charge".to_string(),
            headers: Headers::new(),
            payload: Payload::empty(),
        }
    }

    #[test]
    fn sync_replies_echo_session_and_seq() {
        let call = sync_call();
        match call.success(Headers::new(), Payload::from(&b"ok"[..])) {
            Outgoing::SyncSuccess(reply) => {
                assert_eq!((reply.session, reply.seq), (3, 41));
                assert_eq!(reply.payload.as_bytes(), b"ok");
            }
            other => panic!("unexpected reply {other:?}"),
        }
        match call.failure(Headers::new(), "declined", "card declined", Payload::empty()) {
            Outgoing::SyncFailure(reply) => {
                assert_eq!((reply.session, reply.seq), (3, 41));
                assert_eq!(reply.failure_type, "declined");
                assert_eq!(reply.message, "card declined");
            }
            other => panic!("unexpected reply {other:?}"),
        }
        assert!(matches!(
            call.error(Headers::new(), "boom"),
            Outgoing::SyncError(CommandError { seq: 41, .. })
        ));
    }

    #[test]
    fn async_replies_use_async_tags() {
        let sync = sync_call();
        let call = AsyncCall {
            session: sync.session,
            seq: sync.seq,
            namespace: sync.namespace,
            command: sync.command,
            headers: sync.headers,
            payload: sync.payload,
        };
        assert!(matches!(
            call.success(Headers::new(), Payload::empty()),
            Outgoing::AsyncSuccess(_)
        ));
        assert!(matches!(
            call.failure(Headers::new(), "t", "m", Payload::empty()),
            Outgoing::AsyncFailure(_)
        ));
        assert!(matches!(
            call.error(Headers::new(), "m"),
            Outgoing::AsyncError(_)
        ));
    }

    #[test]
    fn failure_and_error_replies_carry_headers() {
        let call = sync_call();
        let headers = Headers::new().with("route", "eu-1");

        match call.failure(headers.clone(), "declined", "card declined", Payload::empty()) {
            Outgoing::SyncFailure(reply) => assert_eq!(reply.headers.get("route"), Some("eu-1")),
            other => panic!("unexpected reply {other:?}"),
        }
        match call.error(headers, "boom") {
            Outgoing::SyncError(reply) => assert_eq!(reply.headers.get("route"), Some("eu-1")),
            other => panic!("unexpected reply {other:?}"),
        }
    }
}
