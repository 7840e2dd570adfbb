/// Default maximum payload size: 16 MiB.
pub const DEFAULT_MAX_PAYLOAD: usize = 16 * 1024 * 1024;

/// Default maximum number of header entries (the full `u16` count range).
pub const DEFAULT_MAX_HEADERS: usize = u16::MAX as usize;

/// Limits applied by an encoding to a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingConfig {
    /// Maximum payload size in bytes. Default: 16 MiB.
    pub max_payload_size: usize,
    /// Maximum number of entries in a header block. Default: 65535.
    pub max_header_count: usize,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
            max_header_count: DEFAULT_MAX_HEADERS,
        }
    }
}
