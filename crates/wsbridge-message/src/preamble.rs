//! Leading fields shared by session-scoped messages.
//!
//! Incoming messages have their tag consumed by [`crate::read`] before the
//! variant decodes itself, so the read side only sees the session. The write
//! side emits both.

use std::io::{Read, Write};

use wsbridge_encoding::wire::{read_u16, write_u16};

use crate::error::Result;

/// Read the session identifier that follows a tag.
pub fn read_preamble<R: Read + ?Sized>(r: &mut R) -> Result<u16> {
    Ok(read_u16(r)?)
}

/// Write a tag followed by a session identifier.
pub fn write_preamble<W: Write + ?Sized>(w: &mut W, tag: u16, session: u16) -> Result<()> {
    write_u16(w, tag)?;
    write_u16(w, session)?;
    Ok(())
}
