use std::io::{Read, Write};

use tracing::trace;

use crate::config::{EncodingConfig, DEFAULT_MAX_HEADERS};
use crate::error::{EncodingError, Result};
use crate::wire::{read_str16, read_u16, write_str16, write_u16};

/// Routing metadata attached to command and notification messages.
///
/// Entries keep their insertion order. A name may appear more than once,
/// which is how multi-valued headers are carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Create an empty header block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping any existing entries with the same name.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Builder form of [`Headers::append`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All values stored under `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over all `(name, value)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

/// Reads and writes header blocks.
///
/// Wire format:
/// ```text
/// count (2B BE)
/// repeated `count` times:
///   name len (2B BE) │ name (UTF-8) │ value len (2B BE) │ value (UTF-8)
/// ```
///
/// Every encoding embeds one of these, since headers are routing metadata and
/// never application payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCodec {
    max_header_count: usize,
}

impl Default for HeaderCodec {
    fn default() -> Self {
        Self {
            max_header_count: DEFAULT_MAX_HEADERS,
        }
    }
}

impl HeaderCodec {
    /// Create a header codec with limits taken from `config`.
    pub fn with_config(config: &EncodingConfig) -> Self {
        Self {
            max_header_count: config.max_header_count.min(DEFAULT_MAX_HEADERS),
        }
    }

    /// Write a header block.
    pub fn encode<W: Write + ?Sized>(&self, w: &mut W, headers: &Headers) -> Result<()> {
        let count = headers.len();
        if count > self.max_header_count {
            return Err(EncodingError::TooManyHeaders {
                count,
                max: self.max_header_count,
            });
        }

        write_u16(w, count as u16)?;
        for (name, value) in headers.iter() {
            write_str16(w, "header name", name)?;
            write_str16(w, "header value", value)?;
        }
        trace!(count, "encoded header block");
        Ok(())
    }

    /// Read a header block.
    pub fn decode<R: Read + ?Sized>(&self, r: &mut R) -> Result<Headers> {
        let count = read_u16(r)? as usize;
        if count > self.max_header_count {
            return Err(EncodingError::TooManyHeaders {
                count,
                max: self.max_header_count,
            });
        }

        // The count is untrusted until the entries arrive.
        let mut entries = Vec::with_capacity(count.min(64));
        for _ in 0..count {
            let name = read_str16(r, "header name")?;
            let value = read_str16(r, "header value")?;
            entries.push((name, value));
        }
        trace!(count, "decoded header block");
        Ok(Headers { entries })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn empty_block_is_zero_count() {
        let mut wire = Vec::new();
        HeaderCodec::default()
            .encode(&mut wire, &Headers::new())
            .unwrap();
        assert_eq!(wire, [0x00, 0x00]);

        let headers = HeaderCodec::default()
            .decode(&mut Cursor::new(wire))
            .unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn entries_keep_order_and_bytes() {
        let headers = Headers::new()
            .with("timeout", "3000")
            .with("trace-id", "αβγ")
            .with("accept", "a")
            .with("accept", "b");

        let codec = HeaderCodec::default();
        let mut wire = Vec::new();
        codec.encode(&mut wire, &headers).unwrap();

        let decoded = codec.decode(&mut Cursor::new(wire)).unwrap();
        assert_eq!(decoded, headers);
        let names: Vec<&str> = decoded.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["timeout", "trace-id", "accept", "accept"]);
        assert_eq!(decoded.get("trace-id"), Some("αβγ"));
    }

    #[test]
    fn single_entry_layout() {
        let headers = Headers::new().with("k", "vv");
        let mut wire = Vec::new();
        HeaderCodec::default().encode(&mut wire, &headers).unwrap();
        assert_eq!(
            wire,
            [0x00, 0x01, 0x00, 0x01, b'k', 0x00, 0x02, b'v', b'v']
        );
    }

    #[test]
    fn multi_valued_lookup() {
        let headers: Headers = [("accept", "a"), ("other", "x"), ("accept", "b")]
            .into_iter()
            .collect();
        assert_eq!(headers.get("accept"), Some("a"));
        assert_eq!(headers.get_all("accept").collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(headers.get("missing"), None);
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn encode_rejects_too_many_headers() {
        let codec = HeaderCodec::with_config(&EncodingConfig {
            max_header_count: 1,
            ..EncodingConfig::default()
        });
        let headers = Headers::new().with("a", "1").with("b", "2");
        let err = codec.encode(&mut Vec::<u8>::new(), &headers).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::TooManyHeaders { count: 2, max: 1 }
        ));
    }

    #[test]
    fn decode_rejects_too_many_headers() {
        let codec = HeaderCodec::with_config(&EncodingConfig {
            max_header_count: 1,
            ..EncodingConfig::default()
        });
        let wire = vec![0x00, 0x02];
        let err = codec.decode(&mut Cursor::new(wire)).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::TooManyHeaders { count: 2, max: 1 }
        ));
    }

    #[test]
    fn truncated_block_is_io_error() {
        let wire = vec![0x00, 0x01, 0x00, 0x03, b'a'];
        let err = HeaderCodec::default()
            .decode(&mut Cursor::new(wire))
            .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn max_count_without_entries_fails_on_first_read() {
        let err = HeaderCodec::default()
            .decode(&mut Cursor::new(vec![0xff, 0xff]))
            .unwrap_err();
        assert!(err.is_io());
    }
}
