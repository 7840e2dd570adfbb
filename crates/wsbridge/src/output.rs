use std::convert::Infallible;
use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use wsbridge_encoding::{Headers, Payload};
use wsbridge_message::tags::{
    is_incoming, is_outgoing, tag_bytes, COMMAND_ASYNC_CALL, COMMAND_EXECUTE, COMMAND_SYNC_CALL,
    SESSION_CREATE, SESSION_DESTROY,
};
use wsbridge_message::{
    tag_name, AsyncCall, Execute, Incoming, Outgoing, SessionCreate, SessionDestroy, SyncCall,
    Visitor, INCOMING, OUTGOING,
};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct HeaderOutput {
    pub name: String,
    pub value: String,
}

/// Flat view of one decoded message. Fields a message type lacks are omitted.
#[derive(Serialize, Debug, PartialEq)]
pub struct MessageOutput {
    pub direction: &'static str,
    pub tag: String,
    pub kind: &'static str,
    pub session: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub headers: Vec<HeaderOutput>,
    pub payload_size: usize,
    pub payload: String,
    #[serde(skip)]
    raw_payload: Vec<u8>,
}

impl MessageOutput {
    fn new(direction: &'static str, tag: u16, session: u16) -> Self {
        Self {
            direction,
            tag: tag_text(tag),
            kind: tag_name(tag),
            session,
            seq: None,
            namespace: None,
            command: None,
            failure_type: None,
            message: None,
            headers: Vec::new(),
            payload_size: 0,
            payload: String::new(),
            raw_payload: Vec::new(),
        }
    }

    fn headers(mut self, headers: &Headers) -> Self {
        self.headers = headers
            .iter()
            .map(|(name, value)| HeaderOutput {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect();
        self
    }

    fn payload(mut self, payload: &Payload) -> Self {
        self.payload_size = payload.len();
        self.payload = payload_preview(payload.as_bytes());
        self.raw_payload = payload.as_bytes().to_vec();
        self
    }

    fn call(mut self, seq: Option<u32>, namespace: String, command: String) -> Self {
        self.seq = seq;
        self.namespace = Some(namespace);
        self.command = Some(command);
        self
    }
}

/// Collects the description of whichever incoming message it is handed.
#[derive(Default)]
struct Describe {
    out: Option<MessageOutput>,
}

impl Visitor for Describe {
    type Error = Infallible;

    fn visit_sync_call(&mut self, msg: SyncCall) -> Result<(), Infallible> {
        let out = MessageOutput::new("incoming", COMMAND_SYNC_CALL, msg.session)
            .headers(&msg.headers)
            .payload(&msg.payload);
        self.out = Some(out.call(Some(msg.seq), msg.namespace, msg.command));
        Ok(())
    }

    fn visit_async_call(&mut self, msg: AsyncCall) -> Result<(), Infallible> {
        let out = MessageOutput::new("incoming", COMMAND_ASYNC_CALL, msg.session)
            .headers(&msg.headers)
            .payload(&msg.payload);
        self.out = Some(out.call(Some(msg.seq), msg.namespace, msg.command));
        Ok(())
    }

    fn visit_execute(&mut self, msg: Execute) -> Result<(), Infallible> {
        let out = MessageOutput::new("incoming", COMMAND_EXECUTE, msg.session)
            .headers(&msg.headers)
            .payload(&msg.payload);
        self.out = Some(out.call(None, msg.namespace, msg.command));
        Ok(())
    }

    fn visit_session_create(&mut self, msg: SessionCreate) -> Result<(), Infallible> {
        self.out = Some(MessageOutput::new("incoming", SESSION_CREATE, msg.session));
        Ok(())
    }

    fn visit_session_destroy(&mut self, msg: SessionDestroy) -> Result<(), Infallible> {
        self.out = Some(MessageOutput::new("incoming", SESSION_DESTROY, msg.session));
        Ok(())
    }
}

pub fn describe_incoming(msg: Incoming) -> MessageOutput {
    let tag = msg.tag();
    let session = msg.session();
    let mut describe = Describe::default();
    match msg.accept(&mut describe) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    describe
        .out
        .unwrap_or_else(|| MessageOutput::new("incoming", tag, session))
}

pub fn describe_outgoing(msg: Outgoing) -> MessageOutput {
    let out = MessageOutput::new("outgoing", msg.tag(), msg.session());
    match msg {
        Outgoing::SyncSuccess(m) | Outgoing::AsyncSuccess(m) => {
            let mut out = out.headers(&m.headers).payload(&m.payload);
            out.seq = Some(m.seq);
            out
        }
        Outgoing::SyncFailure(m) | Outgoing::AsyncFailure(m) => {
            let mut out = out.headers(&m.headers).payload(&m.payload);
            out.seq = Some(m.seq);
            out.failure_type = Some(m.failure_type);
            out.message = Some(m.message);
            out
        }
        Outgoing::SyncError(m) | Outgoing::AsyncError(m) => {
            let mut out = out.headers(&m.headers);
            out.seq = Some(m.seq);
            out.message = Some(m.message);
            out
        }
        Outgoing::SessionDestroy(_) => out,
        Outgoing::Notification(m) => out.headers(&m.headers).payload(&m.payload),
    }
}

pub fn print_message(out: &MessageOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"]);
            for (field, value) in message_rows(out) {
                table.add_row(vec![field.to_string(), value]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let line = message_rows(out)
                .into_iter()
                .map(|(field, value)| format!("{field}={value}"))
                .collect::<Vec<_>>()
                .join(" ");
            println!("{line}");
        }
        OutputFormat::Raw => print_raw(&out.raw_payload),
    }
}

fn message_rows(out: &MessageOutput) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("direction", out.direction.to_string()),
        ("tag", format!("{} ({})", out.tag, out.kind)),
        ("session", out.session.to_string()),
    ];
    if let Some(seq) = out.seq {
        rows.push(("seq", seq.to_string()));
    }
    if let Some(namespace) = &out.namespace {
        rows.push(("namespace", namespace.clone()));
    }
    if let Some(command) = &out.command {
        rows.push(("command", command.clone()));
    }
    if let Some(failure_type) = &out.failure_type {
        rows.push(("failure_type", failure_type.clone()));
    }
    if let Some(message) = &out.message {
        rows.push(("message", message.clone()));
    }
    for header in &out.headers {
        rows.push(("header", format!("{}: {}", header.name, header.value)));
    }
    rows.push(("payload_size", out.payload_size.to_string()));
    if out.payload_size > 0 {
        rows.push(("payload", out.payload.clone()));
    }
    rows
}

#[derive(Serialize)]
struct TagOutput {
    tag: String,
    value: String,
    name: &'static str,
    incoming: bool,
    outgoing: bool,
}

pub fn print_tags(format: OutputFormat) {
    let mut tags: Vec<u16> = INCOMING.iter().chain(OUTGOING.iter()).copied().collect();
    tags.sort_unstable();
    tags.dedup();

    let rows: Vec<TagOutput> = tags
        .into_iter()
        .map(|tag| TagOutput {
            tag: tag_text(tag),
            value: format!("{tag:#06x}"),
            name: tag_name(tag),
            incoming: is_incoming(tag),
            outgoing: is_outgoing(tag),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&rows).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["TAG", "VALUE", "NAME", "IN", "OUT"]);
            for row in &rows {
                table.add_row(vec![
                    row.tag.clone(),
                    row.value.clone(),
                    row.name.to_string(),
                    yes_no(row.incoming).to_string(),
                    yes_no(row.outgoing).to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for row in &rows {
                println!(
                    "{} {} {} in={} out={}",
                    row.tag, row.value, row.name, row.incoming, row.outgoing
                );
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

/// The tag as its two ASCII characters, or hex when they are not printable.
pub fn tag_text(tag: u16) -> String {
    let bytes = tag_bytes(tag);
    if bytes.iter().all(|b| b.is_ascii_graphic()) {
        bytes.iter().map(|&b| b as char).collect()
    } else {
        format!("{tag:#06x}")
    }
}

fn payload_preview(payload: &[u8]) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) => text.to_string(),
        Err(_) => format!("<binary {} bytes>", payload.len()),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsbridge_message::{CallMode, CommandFailure, SessionNotification};

    #[test]
    fn tag_text_prints_ascii() {
        assert_eq!(tag_text(SESSION_DESTROY), "SD");
        assert_eq!(tag_text(0x0001), "0x0001");
    }

    #[test]
    fn describes_sync_call() {
        let msg = Incoming::SyncCall(SyncCall {
            session: 3,
            seq: 9,
            namespace: "files".to_string(),
            command: "read".to_string(),
            headers: Headers::new().with("trace", "abc"),
            payload: Payload::from(&b"hi"[..]),
        });

        let out = describe_incoming(msg);
        assert_eq!(out.direction, "incoming");
        assert_eq!(out.tag, "CC");
        assert_eq!(out.kind, "COMMAND_SYNC_CALL");
        assert_eq!(out.seq, Some(9));
        assert_eq!(out.namespace.as_deref(), Some("files"));
        assert_eq!(out.command.as_deref(), Some("read"));
        assert_eq!(out.headers.len(), 1);
        assert_eq!(out.payload, "hi");
    }

    #[test]
    fn describes_session_create_without_call_fields() {
        let out = describe_incoming(Incoming::SessionCreate(SessionCreate { session: 5 }));
        assert_eq!(out.tag, "SC");
        assert_eq!(out.seq, None);

        let json = serde_json::to_value(&out).expect("serialize");
        assert!(json.get("seq").is_none());
        assert!(json.get("namespace").is_none());
        assert_eq!(json["session"], 5);
    }

    #[test]
    fn describes_failure_reply() {
        let msg = Outgoing::failure(
            CallMode::Async,
            CommandFailure {
                session: 1,
                seq: 2,
                headers: Headers::new(),
                failure_type: "NotFound".to_string(),
                message: "no such file".to_string(),
                payload: Payload::from(vec![0xff, 0xfe]),
            },
        );

        let out = describe_outgoing(msg);
        assert_eq!(out.tag, "AF");
        assert_eq!(out.failure_type.as_deref(), Some("NotFound"));
        assert_eq!(out.message.as_deref(), Some("no such file"));
        assert_eq!(out.payload, "<binary 2 bytes>");
    }

    #[test]
    fn describes_notification() {
        let out = describe_outgoing(Outgoing::Notification(SessionNotification::new(
            4,
            &b"tick"[..],
        )));
        assert_eq!(out.tag, "NO");
        assert_eq!(out.seq, None);
        assert_eq!(out.payload_size, 4);
    }
}
