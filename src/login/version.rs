//! Challenge encoding versions.

use sha2::{Digest, Sha256};

use super::error::VerifyError;

/// How a challenge pair is turned into the bytes the device signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolVersion {
    /// `hidden || visual`
    V1,
    /// `sha256(hidden) || sha256(visual)`
    V2,
}

impl ProtocolVersion {
    /// Build the challenge bytes for this version.
    pub fn challenge(self, hidden: &[u8], visual: &[u8]) -> Vec<u8> {
        match self {
            Self::V1 => {
                let mut out = Vec::with_capacity(hidden.len() + visual.len());
                out.extend_from_slice(hidden);
                out.extend_from_slice(visual);
                out
            }
            Self::V2 => {
                let mut out = Vec::with_capacity(64);
                out.extend_from_slice(&Sha256::digest(hidden));
                out.extend_from_slice(&Sha256::digest(visual));
                out
            }
        }
    }
}

impl TryFrom<i64> for ProtocolVersion {
    type Error = VerifyError;

    fn try_from(version: i64) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(VerifyError::UnsupportedVersion(other)),
        }
    }
}
