//! Compact recoverable signatures.
//!
//! Layout: `header || r || s`, 65 bytes. The header is
//! `27 + recid`, plus 4 when the signer used a compressed key. The
//! compression flag only tells wallets how to render an address, recovery
//! ignores it.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use super::error::RecoverError;

/// Size of a compact signature in bytes.
pub const COMPACT_SIG_LEN: usize = 65;

const HEADER_BASE: u8 = 27;
const COMPRESSED_FLAG: u8 = 4;

/// Recovery id encoded in a compact signature header.
///
/// Headers below 27 wrap around and land far outside 0..=3.
pub fn header_recovery_id(header: u8) -> u8 {
    header.wrapping_sub(HEADER_BASE) & !COMPRESSED_FLAG
}

/// Recover the signer's key from a compact signature over `digest`.
///
/// High-S signatures are accepted: `(r, s, id)` and `(r, n - s, id ^ 1)`
/// recover the same key, and older devices do not normalize `s`.
pub fn recover_compact(signature: &[u8], digest: &[u8; 32]) -> Result<VerifyingKey, RecoverError> {
    if signature.len() != COMPACT_SIG_LEN {
        return Err(RecoverError::InvalidLength(signature.len()));
    }

    let header = signature[0];
    let mut recid = header_recovery_id(header);
    if recid > 3 {
        return Err(RecoverError::InvalidRecoveryId(header));
    }

    let mut sig = Signature::from_slice(&signature[1..]).map_err(|_| RecoverError::InvalidScalars)?;
    if let Some(normalized) = sig.normalize_s() {
        sig = normalized;
        recid ^= 1;
    }

    let recid = RecoveryId::from_byte(recid).ok_or(RecoverError::InvalidRecoveryId(header))?;

    VerifyingKey::recover_from_prehash(digest, &sig, recid).map_err(|_| RecoverError::NoKey)
}
