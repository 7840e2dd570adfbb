use std::io::{Cursor, Read};

use tracing::debug;
use wsbridge_encoding::{EncodingConfig, NativeEncoding};

use crate::cmd::DecodeArgs;
use crate::exit::{io_error, message_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{describe_incoming, describe_outgoing, print_message, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = load_input(&args)?;

    let mut config = EncodingConfig::default();
    if let Some(max) = args.max_payload {
        config.max_payload_size = max;
    }
    let encoding = NativeEncoding::with_config(config);

    let mut cursor = Cursor::new(bytes.as_slice());
    let out = if args.reply {
        let msg = wsbridge_message::read_reply(&mut cursor, &encoding)
            .map_err(|err| message_error("decode failed", err))?;
        describe_outgoing(msg)
    } else {
        let msg = wsbridge_message::read(&mut cursor, &encoding)
            .map_err(|err| message_error("decode failed", err))?;
        describe_incoming(msg)
    };

    let consumed = cursor.position() as usize;
    if consumed < bytes.len() {
        debug!(
            consumed,
            trailing = bytes.len() - consumed,
            "ignoring bytes after message"
        );
    }

    print_message(&out, format);
    Ok(SUCCESS)
}

fn load_input(args: &DecodeArgs) -> CliResult<Vec<u8>> {
    if let Some(text) = &args.hex {
        return parse_hex(text);
    }
    if let Some(path) = &args.path {
        return std::fs::read(path)
            .map_err(|err| io_error(&format!("read {}", path.display()), err));
    }

    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .map_err(|err| io_error("read stdin", err))?;
    Ok(buf)
}

/// Accepts spaces between byte pairs, so dumps can be pasted as-is.
fn parse_hex(text: &str) -> CliResult<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact).map_err(|err| CliError::new(DATA_INVALID, format!("invalid hex: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spaced_hex() {
        let bytes = parse_hex("53 44 00 07").expect("hex should parse");
        assert_eq!(bytes, vec![0x53, 0x44, 0x00, 0x07]);
    }

    #[test]
    fn rejects_odd_hex() {
        let err = parse_hex("534").expect_err("odd length should fail");
        assert_eq!(err.code, DATA_INVALID);
    }
}
