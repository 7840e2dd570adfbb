use bytes::Bytes;

/// An opaque application payload carried by command and notification messages.
///
/// The bridge never inspects payload contents. Ownership moves into the
/// encoder when a message is written and the buffer is released as soon as
/// its bytes reach the stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    bytes: Bytes,
}

impl Payload {
    /// Create a payload from raw bytes.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// An empty payload.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Borrow the payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    /// Consume the payload and return its buffer.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the payload has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&'static [u8]> for Payload {
    fn from(bytes: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(bytes))
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload() {
        let payload = Payload::empty();
        assert!(payload.is_empty());
        assert_eq!(payload.len(), 0);
        assert_eq!(payload, Payload::default());
    }

    #[test]
    fn conversions_keep_bytes() {
        let from_vec = Payload::from(b"abc".to_vec());
        let from_static = Payload::from(&b"abc"[..]);
        assert_eq!(from_vec, from_static);
        assert_eq!(from_vec.as_bytes(), b"abc");
        assert_eq!(from_vec.into_bytes().as_ref(), b"abc");
    }
}
