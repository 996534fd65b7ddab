//! Login verification error types.
//!
//! Two classes of failure leave [`verify`](super::verify):
//! - caller/format errors (bad hex, unparsable key, unknown version), which
//!   carry a diagnostic and are safe to log;
//! - [`VerifyError::InvalidSignature`], a single fixed outcome for every
//!   authentication failure so callers cannot tell a bad key from a bad
//!   signature from a mismatched challenge.

use thiserror::Error;

/// Reasons a hex-decoded public key is not a usable secp256k1 point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("pubkey string is empty")]
    Empty,

    #[error("invalid pub key length {0}")]
    InvalidLength(usize),

    /// Raw prefix byte of a 33-byte key.
    #[error("invalid magic in compressed pubkey string: {0}")]
    InvalidCompressedMagic(u8),

    /// Raw prefix byte of a 65-byte key.
    #[error("invalid magic in pubkey str: {0}")]
    InvalidMagic(u8),

    #[error("ybit doesn't match oddness")]
    HybridParityMismatch,

    #[error("pubkey X parameter is >= to P")]
    XOutOfRange,

    #[error("pubkey Y parameter is >= to P")]
    YOutOfRange,

    #[error("invalid square root")]
    InvalidSquareRoot,

    #[error("pubkey isn't on secp256k1 curve")]
    NotOnCurve,
}

/// Why a compact signature yielded no public key.
///
/// [`verify`](super::verify) folds all of these into
/// [`VerifyError::InvalidSignature`]; the detail is for tests and local
/// debugging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecoverError {
    #[error("invalid compact signature size {0}")]
    InvalidLength(usize),

    #[error("invalid recovery header {0}")]
    InvalidRecoveryId(u8),

    #[error("signature r or s out of range")]
    InvalidScalars,

    #[error("no public key recoverable from signature")]
    NoKey,
}

/// Errors returned by [`verify`](super::verify), in check order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VerifyError {
    #[error("failed to decode challenge hidden: {0}")]
    ChallengeHiddenDecode(hex::FromHexError),

    #[error("failed to decode public key: {0}")]
    PublicKeyDecode(hex::FromHexError),

    #[error("failed to parse public key: {0}")]
    PublicKeyParse(#[from] KeyParseError),

    #[error("failed to decode signature: {0}")]
    SignatureDecode(hex::FromHexError),

    #[error("unsupported version: {0}")]
    UnsupportedVersion(i64),

    #[error("signature does not match public key or challenge")]
    InvalidSignature,
}

impl VerifyError {
    /// `true` for the uniform authentication failure, `false` for caller errors.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::InvalidSignature)
    }
}
