use std::io::{Read, Write};

use tracing::trace;

use crate::config::EncodingConfig;
use crate::encoding::Encoding;
use crate::error::{EncodingError, Result};
use crate::headers::{HeaderCodec, Headers};
use crate::payload::Payload;

/// Name reported by [`NativeEncoding::new`].
pub const NATIVE_ENCODING_NAME: &str = "native";

/// Pass-through encoding for clients that speak the runtime's payload format.
///
/// Payloads are already in the runtime's self-describing binary form, so they
/// are forwarded byte for byte in both directions and never inspected here.
#[derive(Debug, Clone)]
pub struct NativeEncoding {
    headers: HeaderCodec,
    name: String,
    max_payload_size: usize,
}

impl NativeEncoding {
    /// Create a native encoding with default limits.
    pub fn new() -> Self {
        Self::with_config(EncodingConfig::default())
    }

    /// Create a native encoding with explicit limits.
    pub fn with_config(config: EncodingConfig) -> Self {
        Self {
            headers: HeaderCodec::with_config(&config),
            name: NATIVE_ENCODING_NAME.to_string(),
            max_payload_size: config.max_payload_size,
        }
    }

    /// Override the reported encoding name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Maximum payload size accepted when reading. Writes are never limited.
    pub fn max_payload_size(&self) -> usize {
        self.max_payload_size
    }
}

impl Default for NativeEncoding {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoding for NativeEncoding {
    fn name(&self) -> &str {
        &self.name
    }

    fn encode_headers(&self, w: &mut dyn Write, headers: &Headers) -> Result<()> {
        self.headers.encode(w, headers)
    }

    fn decode_headers(&self, r: &mut dyn Read) -> Result<Headers> {
        self.headers.decode(r)
    }

    fn encode_payload(&self, w: &mut dyn Write, payload: Payload) -> Result<()> {
        w.write_all(payload.as_bytes())?;
        trace!(size = payload.len(), "encoded native payload");
        Ok(())
    }

    fn decode_payload(&self, r: &mut dyn Read) -> Result<Payload> {
        let limit = (self.max_payload_size as u64).saturating_add(1);
        let mut buf = Vec::new();
        (&mut *r).take(limit).read_to_end(&mut buf)?;

        if buf.len() > self.max_payload_size {
            return Err(EncodingError::PayloadTooLarge {
                size: buf.len(),
                max: self.max_payload_size,
            });
        }
        trace!(size = buf.len(), "decoded native payload");
        Ok(Payload::from(buf))
    }
}
