use std::io::{Read, Write};

use wsbridge_encoding::{Encoding, Headers};

use crate::error::Result;
use crate::preamble::{read_preamble, write_preamble};
use crate::tags::{SESSION_CREATE, SESSION_DESTROY};

/// Incoming request to create a session with a client-chosen identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCreate {
    pub session: u16,
}

impl SessionCreate {
    pub(crate) fn read_body(r: &mut dyn Read) -> Result<Self> {
        Ok(Self {
            session: read_preamble(r)?,
        })
    }

    pub(crate) fn write_request(self, w: &mut dyn Write) -> Result<()> {
        write_preamble(w, SESSION_CREATE, self.session)
    }
}

/// Session teardown, used in both directions.
///
/// Received from the browser it asks for an existing session to be destroyed.
/// Sent to the browser it reports that a session was destroyed without the
/// client asking, and carries an empty header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDestroy {
    pub session: u16,
}

impl SessionDestroy {
    pub(crate) fn read_body(r: &mut dyn Read) -> Result<Self> {
        Ok(Self {
            session: read_preamble(r)?,
        })
    }

    pub(crate) fn write_request(self, w: &mut dyn Write) -> Result<()> {
        write_preamble(w, SESSION_DESTROY, self.session)
    }

    pub(crate) fn write_body(self, w: &mut dyn Write, e: &dyn Encoding) -> Result<()> {
        write_preamble(w, SESSION_DESTROY, self.session)?;
        e.encode_headers(w, &Headers::new())?;
        Ok(())
    }

    pub(crate) fn read_reply(r: &mut dyn Read, e: &dyn Encoding) -> Result<Self> {
        let session = read_preamble(r)?;
        e.decode_headers(r)?;
        Ok(Self { session })
    }
}
