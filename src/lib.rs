//! Device Login - challenge/response authentication for hardware wallets
//!
//! The server issues a challenge, the signing device signs it as a legacy
//! Bitcoin signed message, and the server recovers the signer's secp256k1
//! key from the compact signature.
//!
//! # Modules
//!
//! - [`login`] - Challenge generation and signature verification
//! - [`gateway`] - HTTP endpoints (`/challenge`, `/login`)
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod login;

// Convenient re-exports at crate root
pub use login::{
    ChallengePair, HiddenChallenge, KeyParseError, ProtocolVersion, VerifyError, VisualChallenge,
    challenge_hidden, challenge_visual, verify,
};
