//! Message bodies sent to the browser.
//!
//! The sync and async reply families share one body type per outcome; the
//! [`CallMode`] chosen when wrapping a body in [`crate::Outgoing`] decides the
//! tag.

use std::io::{Read, Write};

use wsbridge_encoding::wire::{read_str16, read_u32, write_str16, write_u32};
use wsbridge_encoding::{Encoding, Headers, Payload};

use crate::error::Result;
use crate::preamble::{read_preamble, write_preamble};

/// Whether a reply answers a synchronous or an asynchronous call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMode {
    Sync,
    Async,
}

/// The command completed and produced a result payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSuccess {
    pub session: u16,
    pub seq: u32,
    pub headers: Headers,
    pub payload: Payload,
}

/// The command completed with an application-defined failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    pub session: u16,
    pub seq: u32,
    pub headers: Headers,
    /// Application-defined failure category.
    pub failure_type: String,
    /// Human-readable failure description.
    pub message: String,
    pub payload: Payload,
}

/// The command could not be completed for a reason outside the application's control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    pub session: u16,
    pub seq: u32,
    pub headers: Headers,
    pub message: String,
}

/// An application notification pushed to a session, unrelated to any call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionNotification {
    pub session: u16,
    pub headers: Headers,
    pub payload: Payload,
}

impl CommandSuccess {
    pub(crate) fn write_body(self, w: &mut dyn Write, e: &dyn Encoding, tag: u16) -> Result<()> {
        write_preamble(w, tag, self.session)?;
        write_u32(w, self.seq)?;
        e.encode_headers(w, &self.headers)?;
        e.encode_payload(w, self.payload)?;
        Ok(())
    }

    pub(crate) fn read_body(r: &mut dyn Read, e: &dyn Encoding) -> Result<Self> {
        let session = read_preamble(r)?;
        let seq = read_u32(r)?;
        let headers = e.decode_headers(r)?;
        let payload = e.decode_payload(r)?;
        Ok(Self {
            session,
            seq,
            headers,
            payload,
        })
    }
}

impl CommandFailure {
    pub(crate) fn write_body(self, w: &mut dyn Write, e: &dyn Encoding, tag: u16) -> Result<()> {
        write_preamble(w, tag, self.session)?;
        write_u32(w, self.seq)?;
        e.encode_headers(w, &self.headers)?;
        write_str16(w, "failure type", &self.failure_type)?;
        write_str16(w, "failure message", &self.message)?;
        e.encode_payload(w, self.payload)?;
        Ok(())
    }

    pub(crate) fn read_body(r: &mut dyn Read, e: &dyn Encoding) -> Result<Self> {
        let session = read_preamble(r)?;
        let seq = read_u32(r)?;
        let headers = e.decode_headers(r)?;
        let failure_type = read_str16(r, "failure type")?;
        let message = read_str16(r, "failure message")?;
        let payload = e.decode_payload(r)?;
        Ok(Self {
            session,
            seq,
            headers,
            failure_type,
            message,
            payload,
        })
    }
}

impl CommandError {
    pub(crate) fn write_body(self, w: &mut dyn Write, e: &dyn Encoding, tag: u16) -> Result<()> {
        write_preamble(w, tag, self.session)?;
        write_u32(w, self.seq)?;
        e.encode_headers(w, &self.headers)?;
        write_str16(w, "error message", &self.message)?;
        Ok(())
    }

    pub(crate) fn read_body(r: &mut dyn Read, e: &dyn Encoding) -> Result<Self> {
        let session = read_preamble(r)?;
        let seq = read_u32(r)?;
        let headers = e.decode_headers(r)?;
        let message = read_str16(r, "error message")?;
        Ok(Self {
            session,
            seq,
            headers,
            message,
        })
    }
}

impl SessionNotification {
    /// Create a notification with no headers.
    pub fn new(session: u16, payload: impl Into<Payload>) -> Self {
        Self {
            session,
            headers: Headers::new(),
            payload: payload.into(),
        }
    }

    /// Attach headers to the notification.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub(crate) fn write_body(self, w: &mut dyn Write, e: &dyn Encoding, tag: u16) -> Result<()> {
        write_preamble(w, tag, self.session)?;
        e.encode_headers(w, &self.headers)?;
        e.encode_payload(w, self.payload)?;
        Ok(())
    }

    pub(crate) fn read_body(r: &mut dyn Read, e: &dyn Encoding) -> Result<Self> {
        let session = read_preamble(r)?;
        let headers = e.decode_headers(r)?;
        let payload = e.decode_payload(r)?;
        Ok(Self {
            session,
            headers,
            payload,
        })
    }
}
