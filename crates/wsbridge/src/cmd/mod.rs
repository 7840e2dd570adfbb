use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod tags;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode one message and print its fields.
    Decode(DecodeArgs),
    /// Build one message and print its bytes.
    Encode(EncodeArgs),
    /// List every message tag.
    Tags(TagsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Tags(args) => tags::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// File holding one binary message. Reads stdin when neither this nor --hex is given.
    #[arg(conflicts_with = "hex")]
    pub path: Option<PathBuf>,
    /// Message bytes as a hex string.
    #[arg(long)]
    pub hex: Option<String>,
    /// Decode as a bridge-to-browser message instead of a browser request.
    #[arg(long)]
    pub reply: bool,
    /// Largest payload accepted, in bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_payload: Option<usize>,
}

/// Message kinds `encode` can build.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MessageKind {
    SyncSuccess,
    SyncFailure,
    SyncError,
    AsyncSuccess,
    AsyncFailure,
    AsyncError,
    Notification,
    SessionDestroy,
    SyncCall,
    AsyncCall,
    Execute,
    SessionCreate,
    SessionDestroyRequest,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Kind of message to build.
    #[arg(value_enum)]
    pub kind: MessageKind,
    /// Session identifier.
    #[arg(long, short = 's')]
    pub session: u16,
    /// Call correlation number.
    #[arg(long, default_value = "0")]
    pub seq: u32,
    /// Command namespace (call kinds).
    #[arg(long)]
    pub namespace: Option<String>,
    /// Command name (call kinds).
    #[arg(long)]
    pub command: Option<String>,
    /// Header as NAME=VALUE. Repeatable; order is kept.
    #[arg(long = "header", short = 'H', value_name = "NAME=VALUE")]
    pub headers: Vec<String>,
    /// Raw string payload.
    #[arg(long, conflicts_with = "file")]
    pub data: Option<String>,
    /// Read payload from file.
    #[arg(long, conflicts_with = "data")]
    pub file: Option<PathBuf>,
    /// Failure category (failure kinds).
    #[arg(long)]
    pub failure_type: Option<String>,
    /// Failure or error description.
    #[arg(long)]
    pub message: Option<String>,
    /// Write the encoded bytes to a file instead of printing them.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct TagsArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
