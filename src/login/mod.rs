//! Hardware-device login core.
//!
//! The server hands out a [`ChallengePair`], the signing device signs the
//! legacy "signed message" encoding of it, and [`verify`] recovers the
//! signer's public key from the compact signature and compares it with the
//! key the client claims to own.
//!
//! ## Components
//! - `challenge`: hidden (random) and visual (timestamp) challenge parts
//! - `version`: the two historical challenge encodings
//! - `message`: signed-message framing and double SHA-256 digest
//! - `key`: SEC1 public key parsing with stable diagnostics
//! - `recover`: compact recoverable signature handling
//! - `verify`: the full verification pipeline
//! - `error`: error taxonomy

pub mod challenge;
pub mod error;
pub mod key;
pub mod message;
pub mod recover;
pub mod verify;
pub mod version;

pub use challenge::{
    ChallengePair, HiddenChallenge, VISUAL_FORMAT, VisualChallenge, challenge_hidden,
    challenge_visual,
};
pub use error::{KeyParseError, RecoverError, VerifyError};
pub use key::parse_public_key;
pub use message::{MAGIC, signed_message_digest};
pub use recover::recover_compact;
pub use verify::verify;
pub use version::ProtocolVersion;
