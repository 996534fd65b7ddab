//! Legacy "signed message" framing.
//!
//! Devices do not sign the challenge directly. They sign
//! `sha256(sha256(len(MAGIC) || MAGIC || len(msg) || msg))`, where each
//! length is a single byte. Lengths of 256 and above wrap, the same way
//! deployed devices and verifiers truncate them.

use sha2::{Digest, Sha256};

use super::version::ProtocolVersion;

/// Signed-message prefix.
pub const MAGIC: &[u8] = b"Bitcoin Signed Message:\n";

/// Wrap `msg` in the signed-message envelope.
pub fn frame(msg: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAGIC.len() + msg.len() + 2);
    out.push(MAGIC.len() as u8);
    out.extend_from_slice(MAGIC);
    out.push(msg.len() as u8);
    out.extend_from_slice(msg);
    out
}

/// Double SHA-256 of the framed message.
pub fn message_digest(msg: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(frame(msg));
    Sha256::digest(first).into()
}

/// Digest the device signs for a challenge pair under `version`.
pub fn signed_message_digest(version: ProtocolVersion, hidden: &[u8], visual: &[u8]) -> [u8; 32] {
    message_digest(&version.challenge(hidden, visual))
}
