//! Challenge generation.
//!
//! A login challenge has two parts: a hidden one (32 random bytes, hex) that
//! binds the signature to one login attempt, and a visual one (local time,
//! second precision) that the device shows to the user before signing.

use std::fmt;

use chrono::Local;
use rand::RngCore;
use rand::rngs::OsRng;

/// Number of random bytes in a hidden challenge.
pub const HIDDEN_LEN: usize = 32;

/// chrono pattern for the visual challenge (`YYYY-MM-DD HH:mm:ss`).
pub const VISUAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 32 bytes drawn from the OS CSPRNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenChallenge([u8; HIDDEN_LEN]);

impl HiddenChallenge {
    /// Draw a fresh challenge.
    ///
    /// # Panics
    /// Panics if the OS entropy source fails. A weak hidden challenge breaks
    /// the whole protocol, so there is no fallback generator.
    pub fn generate() -> Self {
        let mut bytes = [0u8; HIDDEN_LEN];
        if let Err(e) = OsRng.try_fill_bytes(&mut bytes) {
            panic!("OS entropy source failed: {}", e);
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HIDDEN_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for HiddenChallenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Server local time rendered with [`VISUAL_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualChallenge(String);

impl VisualChallenge {
    pub fn now() -> Self {
        Self(Local::now().format(VISUAL_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisualChallenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hidden and visual parts issued together.
///
/// Nothing links the pair to later verification: the verifier rebuilds the
/// signed bytes from whatever values the client sends back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengePair {
    pub hidden: HiddenChallenge,
    pub visual: VisualChallenge,
}

impl ChallengePair {
    pub fn issue() -> Self {
        Self {
            hidden: HiddenChallenge::generate(),
            visual: VisualChallenge::now(),
        }
    }
}

/// Hex-encoded hidden challenge.
pub fn challenge_hidden() -> String {
    HiddenChallenge::generate().to_hex()
}

/// Current visual challenge.
pub fn challenge_visual() -> String {
    VisualChallenge::now().0
}
