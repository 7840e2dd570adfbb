mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "wsbridge", version, about = "Inspect and build WebSocket bridge messages")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr). WSBRIDGE_LOG overrides it.
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    match cmd::run(cli.command, format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::MessageKind;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from([
            "wsbridge",
            "encode",
            "sync-call",
            "--session",
            "3",
            "--namespace",
            "files",
            "--command",
            "read",
            "-H",
            "trace=1",
        ])
        .expect("encode args should parse");

        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.kind, MessageKind::SyncCall);
                assert_eq!(args.session, 3);
                assert_eq!(args.headers, vec!["trace=1".to_string()]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_conflicting_payload_args() {
        let err = Cli::try_parse_from([
            "wsbridge",
            "encode",
            "notification",
            "--session",
            "1",
            "--data",
            "hello",
            "--file",
            "/tmp/payload.bin",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn encode_requires_session() {
        let err = Cli::try_parse_from(["wsbridge", "encode", "session-create"])
            .expect_err("missing session should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_decode_with_hex() {
        let cli = Cli::try_parse_from(["wsbridge", "decode", "--hex", "53440007", "--reply"])
            .expect("decode args should parse");
        assert!(matches!(cli.command, Command::Decode(ref args) if args.reply));
    }
}
