//! SEC1 public key parsing.
//!
//! `k256` reports every malformed point with one opaque error. Clients need
//! to know whether they sent the wrong length, the wrong prefix or an x
//! coordinate that is off the curve, so the framing checks happen here and
//! only the point arithmetic is left to `k256`.

use k256::PublicKey;

use super::error::KeyParseError;

const COMPRESSED_LEN: usize = 33;
const UNCOMPRESSED_LEN: usize = 65;

const TAG_COMPRESSED: u8 = 0x02;
const TAG_UNCOMPRESSED: u8 = 0x04;
const TAG_HYBRID: u8 = 0x06;

/// secp256k1 field prime `p`, big-endian.
const FIELD_PRIME: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];

// Big-endian byte order makes lexicographic comparison numeric.
fn below_prime(coord: &[u8]) -> bool {
    coord < &FIELD_PRIME[..]
}

/// Parse a compressed (33 byte), uncompressed or hybrid (65 byte)
/// secp256k1 key.
///
/// The prefix is matched with its parity bit cleared, so `0x05` reads as
/// uncompressed and `0x06`/`0x07` as hybrid. A hybrid prefix must agree with
/// the parity of y.
pub fn parse_public_key(bytes: &[u8]) -> Result<PublicKey, KeyParseError> {
    if bytes.is_empty() {
        return Err(KeyParseError::Empty);
    }

    let y_bit = bytes[0] & 1 == 1;
    let tag = bytes[0] & !1;

    match bytes.len() {
        COMPRESSED_LEN => {
            if tag != TAG_COMPRESSED {
                return Err(KeyParseError::InvalidCompressedMagic(bytes[0]));
            }
            if !below_prime(&bytes[1..33]) {
                return Err(KeyParseError::XOutOfRange);
            }
            PublicKey::from_sec1_bytes(bytes).map_err(|_| KeyParseError::InvalidSquareRoot)
        }
        UNCOMPRESSED_LEN => {
            if tag != TAG_UNCOMPRESSED && tag != TAG_HYBRID {
                return Err(KeyParseError::InvalidMagic(bytes[0]));
            }
            let y_odd = bytes[64] & 1 == 1;
            if tag == TAG_HYBRID && y_bit != y_odd {
                return Err(KeyParseError::HybridParityMismatch);
            }
            if !below_prime(&bytes[1..33]) {
                return Err(KeyParseError::XOutOfRange);
            }
            if !below_prime(&bytes[33..65]) {
                return Err(KeyParseError::YOutOfRange);
            }

            // k256 only takes the plain 0x04 prefix.
            let mut point = [0u8; UNCOMPRESSED_LEN];
            point.copy_from_slice(bytes);
            point[0] = TAG_UNCOMPRESSED;
            PublicKey::from_sec1_bytes(&point).map_err(|_| KeyParseError::NotOnCurve)
        }
        n => Err(KeyParseError::InvalidLength(n)),
    }
}
