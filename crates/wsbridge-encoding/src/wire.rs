//! Big-endian wire primitives shared by the header codec and message layouts.
//!
//! Integers are read with `read_exact`, so a stream that ends mid-field
//! surfaces as `ErrorKind::UnexpectedEof` rather than a short value.

use std::io::{Read, Write};

use crate::error::{EncodingError, Result};

/// Maximum byte length of a `str16` field.
pub const MAX_STR16_LEN: usize = u16::MAX as usize;

/// Read a big-endian `u16`.
pub fn read_u16<R: Read + ?Sized>(r: &mut R) -> std::io::Result<u16> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

/// Read a big-endian `u32`.
pub fn read_u32<R: Read + ?Sized>(r: &mut R) -> std::io::Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

/// Write a big-endian `u16`.
pub fn write_u16<W: Write + ?Sized>(w: &mut W, value: u16) -> std::io::Result<()> {
    w.write_all(&value.to_be_bytes())
}

/// Write a big-endian `u32`.
pub fn write_u32<W: Write + ?Sized>(w: &mut W, value: u32) -> std::io::Result<()> {
    w.write_all(&value.to_be_bytes())
}

/// Read a `u16`-length-prefixed UTF-8 string.
///
/// `field` names the value in error messages.
pub fn read_str16<R: Read + ?Sized>(r: &mut R, field: &'static str) -> Result<String> {
    let len = read_u16(r)? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|_| EncodingError::InvalidUtf8 { field })
}

/// Write a `u16`-length-prefixed UTF-8 string.
pub fn write_str16<W: Write + ?Sized>(w: &mut W, field: &'static str, value: &str) -> Result<()> {
    let len = value.len();
    if len > MAX_STR16_LEN {
        return Err(EncodingError::FieldTooLong {
            field,
            len,
            max: MAX_STR16_LEN,
        });
    }
    write_u16(w, len as u16)?;
    w.write_all(value.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, ErrorKind};

    use super::*;

    #[test]
    fn integers_are_big_endian() {
        let mut wire = Vec::new();
        write_u16(&mut wire, 0x4343).unwrap();
        write_u32(&mut wire, 0x0102_0304).unwrap();
        assert_eq!(wire, [0x43, 0x43, 0x01, 0x02, 0x03, 0x04]);

        let mut cursor = Cursor::new(wire);
        assert_eq!(read_u16(&mut cursor).unwrap(), 0x4343);
        assert_eq!(read_u32(&mut cursor).unwrap(), 0x0102_0304);
    }

    #[test]
    fn short_integer_is_unexpected_eof() {
        let err = read_u16(&mut Cursor::new(vec![0x01])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);

        let err = read_u32(&mut Cursor::new(vec![0x01, 0x02, 0x03])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn str16_layout() {
        let mut wire = Vec::new();
        write_str16(&mut wire, "name", "ns").unwrap();
        assert_eq!(wire, [0x00, 0x02, b'n', b's']);

        let value = read_str16(&mut Cursor::new(wire), "name").unwrap();
        assert_eq!(value, "ns");
    }

    #[test]
    fn empty_str16() {
        let mut wire = Vec::new();
        write_str16(&mut wire, "name", "").unwrap();
        assert_eq!(wire, [0x00, 0x00]);
        assert_eq!(read_str16(&mut Cursor::new(wire), "name").unwrap(), "");
    }

    #[test]
    fn str16_rejects_oversized_value() {
        let value = "x".repeat(MAX_STR16_LEN + 1);
        let err = write_str16(&mut Vec::<u8>::new(), "command", &value).unwrap_err();
        assert!(matches!(
            err,
            EncodingError::FieldTooLong {
                field: "command",
                len,
                max: MAX_STR16_LEN,
            } if len == MAX_STR16_LEN + 1
        ));
    }

    #[test]
    fn str16_rejects_invalid_utf8() {
        let wire = vec![0x00, 0x02, 0xFF, 0xFE];
        let err = read_str16(&mut Cursor::new(wire), "namespace").unwrap_err();
        assert!(matches!(
            err,
            EncodingError::InvalidUtf8 { field: "namespace" }
        ));
    }

    #[test]
    fn truncated_str16_is_io_error() {
        let wire = vec![0x00, 0x05, b'a', b'b'];
        let err = read_str16(&mut Cursor::new(wire), "namespace").unwrap_err();
        assert!(matches!(err, EncodingError::Io(e) if e.kind() == ErrorKind::UnexpectedEof));
    }
}
