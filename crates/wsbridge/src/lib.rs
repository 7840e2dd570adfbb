//! Binary message protocol for bridging browser WebSocket clients to a
//! session-oriented, command-routing runtime.
//!
//! # Crate Structure
//!
//! - [`encoding`]: Header block codec and pluggable payload encodings
//! - [`message`]: Message tags, incoming/outgoing messages, visitor dispatch

/// Re-export encoding types.
pub mod encoding {
    pub use wsbridge_encoding::*;
}

/// Re-export message types.
pub mod message {
    pub use wsbridge_message::*;
}
