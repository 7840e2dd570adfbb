use serde::Serialize;
use tracing::debug;
use wsbridge_encoding::{Headers, NativeEncoding, Payload};
use wsbridge_message::{
    tag_name, AsyncCall, CallMode, CommandError, CommandFailure, CommandSuccess, Execute,
    Incoming, Outgoing, SessionCreate, SessionDestroy, SessionNotification, SyncCall,
};

use crate::cmd::{EncodeArgs, MessageKind};
use crate::exit::{io_error, message_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_raw, tag_text, OutputFormat};

#[derive(Serialize)]
struct EncodedOutput {
    tag: String,
    kind: &'static str,
    size: usize,
    hex: String,
}

enum Built {
    Reply(Outgoing),
    Request(Incoming),
}

impl Built {
    fn tag(&self) -> u16 {
        match self {
            Built::Reply(msg) => msg.tag(),
            Built::Request(msg) => msg.tag(),
        }
    }
}

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let message = build(&args)?;
    let tag = message.tag();

    let encoding = NativeEncoding::new();
    let mut bytes = Vec::new();
    let written = match message {
        Built::Reply(msg) => wsbridge_message::write(&mut bytes, &encoding, msg),
        Built::Request(msg) => wsbridge_message::write_request(&mut bytes, &encoding, msg),
    };
    written.map_err(|err| message_error("encode failed", err))?;
    debug!(tag = tag_name(tag), size = bytes.len(), "encoded message");

    if let Some(path) = &args.output {
        std::fs::write(path, &bytes)
            .map_err(|err| io_error(&format!("write {}", path.display()), err))?;
        return Ok(SUCCESS);
    }

    match format {
        OutputFormat::Json => {
            let out = EncodedOutput {
                tag: tag_text(tag),
                kind: tag_name(tag),
                size: bytes.len(),
                hex: hex::encode(&bytes),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table | OutputFormat::Pretty => println!("{}", hex::encode(&bytes)),
        OutputFormat::Raw => print_raw(&bytes),
    }
    Ok(SUCCESS)
}

fn build(args: &EncodeArgs) -> CliResult<Built> {
    let session = args.session;
    let seq = args.seq;
    let headers = parse_headers(&args.headers)?;
    let payload = load_payload(args)?;

    let built = match args.kind {
        MessageKind::SyncSuccess | MessageKind::AsyncSuccess => Built::Reply(Outgoing::success(
            mode_of(args.kind),
            CommandSuccess {
                session,
                seq,
                headers,
                payload,
            },
        )),
        MessageKind::SyncFailure | MessageKind::AsyncFailure => Built::Reply(Outgoing::failure(
            mode_of(args.kind),
            CommandFailure {
                session,
                seq,
                headers,
                failure_type: required(&args.failure_type, "--failure-type")?,
                message: required(&args.message, "--message")?,
                payload,
            },
        )),
        MessageKind::SyncError | MessageKind::AsyncError => Built::Reply(Outgoing::error(
            mode_of(args.kind),
            CommandError {
                session,
                seq,
                headers,
                message: required(&args.message, "--message")?,
            },
        )),
        MessageKind::Notification => Built::Reply(Outgoing::Notification(
            SessionNotification::new(session, payload).with_headers(headers),
        )),
        MessageKind::SessionDestroy => {
            Built::Reply(Outgoing::SessionDestroy(SessionDestroy { session }))
        }
        MessageKind::SyncCall => Built::Request(Incoming::SyncCall(SyncCall {
            session,
            seq,
            namespace: required(&args.namespace, "--namespace")?,
            command: required(&args.command, "--command")?,
            headers,
            payload,
        })),
        MessageKind::AsyncCall => Built::Request(Incoming::AsyncCall(AsyncCall {
            session,
            seq,
            namespace: required(&args.namespace, "--namespace")?,
            command: required(&args.command, "--command")?,
            headers,
            payload,
        })),
        MessageKind::Execute => Built::Request(Incoming::Execute(Execute {
            session,
            namespace: required(&args.namespace, "--namespace")?,
            command: required(&args.command, "--command")?,
            headers,
            payload,
        })),
        MessageKind::SessionCreate => {
            Built::Request(Incoming::SessionCreate(SessionCreate { session }))
        }
        MessageKind::SessionDestroyRequest => {
            Built::Request(Incoming::SessionDestroy(SessionDestroy { session }))
        }
    };
    Ok(built)
}

fn mode_of(kind: MessageKind) -> CallMode {
    match kind {
        MessageKind::AsyncSuccess | MessageKind::AsyncFailure | MessageKind::AsyncError => {
            CallMode::Async
        }
        _ => CallMode::Sync,
    }
}

fn required(value: &Option<String>, flag: &str) -> CliResult<String> {
    value
        .clone()
        .ok_or_else(|| CliError::new(USAGE, format!("{flag} is required for this message kind")))
}

fn parse_headers(raw: &[String]) -> CliResult<Headers> {
    raw.iter()
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| {
                    CliError::new(USAGE, format!("invalid header {entry:?}: expected NAME=VALUE"))
                })
        })
        .collect()
}

fn load_payload(args: &EncodeArgs) -> CliResult<Payload> {
    if let Some(data) = &args.data {
        return Ok(Payload::from(data.clone().into_bytes()));
    }
    if let Some(path) = &args.file {
        let bytes = std::fs::read(path)
            .map_err(|err| io_error(&format!("read {}", path.display()), err))?;
        return Ok(Payload::from(bytes));
    }
    Ok(Payload::empty())
}
