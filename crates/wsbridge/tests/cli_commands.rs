#![cfg(feature = "cli")]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn wsbridge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wsbridge"))
        .args(args)
        .env_remove("WSBRIDGE_LOG")
        .output()
        .expect("wsbridge should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn unique_temp_file(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wsbridge-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir.join("message.bin")
}

#[test]
fn encode_session_destroy_prints_exact_bytes() {
    let output = wsbridge(&["--format", "json", "encode", "session-destroy", "--session", "7"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json = stdout_json(&output);
    assert_eq!(json["tag"], "SD");
    assert_eq!(json["size"], 6);
    assert_eq!(json["hex"], "534400070000");
}

#[test]
fn encode_request_then_decode_round_trips() {
    let encoded = wsbridge(&[
        "--format",
        "json",
        "encode",
        "sync-call",
        "--session",
        "2",
        "--seq",
        "41",
        "--namespace",
        "files",
        "--command",
        "read",
        "-H",
        "trace=abc",
        "-H",
        "trace=def",
        "--data",
        "hello",
    ]);
    assert!(encoded.status.success());
    let hex = stdout_json(&encoded)["hex"]
        .as_str()
        .expect("hex should be a string")
        .to_string();

    let decoded = wsbridge(&["--format", "json", "decode", "--hex", &hex]);
    assert!(decoded.status.success(), "stderr: {}", String::from_utf8_lossy(&decoded.stderr));

    let json = stdout_json(&decoded);
    assert_eq!(json["direction"], "incoming");
    assert_eq!(json["tag"], "CC");
    assert_eq!(json["session"], 2);
    assert_eq!(json["seq"], 41);
    assert_eq!(json["namespace"], "files");
    assert_eq!(json["command"], "read");
    assert_eq!(json["headers"][0]["value"], "abc");
    assert_eq!(json["headers"][1]["value"], "def");
    assert_eq!(json["payload"], "hello");
}

#[test]
fn encode_to_file_then_decode_reply() {
    let path = unique_temp_file("failure");
    let path_arg = path.to_str().expect("temp path should be UTF-8");

    let encoded = wsbridge(&[
        "encode",
        "async-failure",
        "--session",
        "9",
        "--seq",
        "3",
        "--failure-type",
        "NotFound",
        "--message",
        "missing",
        "--output",
        path_arg,
    ]);
    assert!(encoded.status.success());

    let decoded = wsbridge(&["--format", "json", "decode", "--reply", path_arg]);
    assert!(decoded.status.success());

    let json = stdout_json(&decoded);
    assert_eq!(json["tag"], "AF");
    assert_eq!(json["failure_type"], "NotFound");
    assert_eq!(json["message"], "missing");
    assert_eq!(json["payload_size"], 0);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn decode_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wsbridge"))
        .args(["--format", "json", "decode"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("wsbridge should spawn");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(&[0x53, 0x43, 0x00, 0x05])
        .expect("stdin write should succeed");

    let output = child.wait_with_output().expect("wsbridge should exit");
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["tag"], "SC");
    assert_eq!(json["session"], 5);
}

#[test]
fn decode_unknown_tag_exits_data_invalid() {
    let output = wsbridge(&["decode", "--hex", "5858000100"]);
    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("0x5858"), "stderr: {stderr}");
}

#[test]
fn decode_truncated_message_exits_data_invalid() {
    let output = wsbridge(&["decode", "--hex", "5344"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn decode_payload_over_limit_exits_data_invalid() {
    let encoded = wsbridge(&[
        "--format", "json", "encode", "notification", "--session", "1", "--data", "abcdef",
    ]);
    let hex = stdout_json(&encoded)["hex"]
        .as_str()
        .expect("hex should be a string")
        .to_string();

    let output = wsbridge(&["decode", "--reply", "--max-payload", "4", "--hex", &hex]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn encode_call_without_command_exits_usage() {
    let output = wsbridge(&["encode", "execute", "--session", "1", "--namespace", "files"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn tags_lists_both_directions() {
    let output = wsbridge(&["--format", "json", "tags"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    let rows = json.as_array().expect("tags should be an array");
    assert_eq!(rows.len(), 12);

    let sd = rows
        .iter()
        .find(|row| row["tag"] == "SD")
        .expect("SD should be listed");
    assert_eq!(sd["incoming"], true);
    assert_eq!(sd["outgoing"], true);
}

#[test]
fn version_prints_package_version() {
    let output = wsbridge(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("wsbridge {}", env!("CARGO_PKG_VERSION")));
}
