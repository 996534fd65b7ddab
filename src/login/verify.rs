//! Login signature verification.

use k256::PublicKey;

use super::error::VerifyError;
use super::key::parse_public_key;
use super::message::signed_message_digest;
use super::recover::recover_compact;
use super::version::ProtocolVersion;

/// Verify a device login.
///
/// * `challenge_hidden` - hex challenge issued by
///   [`challenge_hidden`](super::challenge_hidden)
/// * `challenge_visual` - timestamp issued by
///   [`challenge_visual`](super::challenge_visual), as shown on the device
/// * `public_key` - hex SEC1 key of the device's login identity
/// * `signature` - hex compact signature produced by the device
/// * `version` - challenge encoding, 1 or 2 (use 2 when in doubt)
///
/// Inputs are checked in that order and the first failure is returned.
/// Every failure after the inputs parse is reported as
/// [`VerifyError::InvalidSignature`], whatever the cause.
///
/// # Example
/// ```
/// use device_login::login::verify;
///
/// verify(
///     "cd8552569d6e4509266ef137584d1e62c7579b5b8ed69bbafa4b864c6521e7c2",
///     "2015-03-23 17:39:22",
///     "023a472219ad3327b07c18273717bb3a40b39b743756bf287fbd5fa9d263237f45",
///     "20f2d1a42d08c3a362be49275c3ffeeaa415fc040971985548b9f910812237bb41770bf2c8d488428799fbb7e52c11f1a3404011375e4080e077e0e42ab7a5ba02",
///     2,
/// )
/// .unwrap();
/// ```
pub fn verify(
    challenge_hidden: &str,
    challenge_visual: &str,
    public_key: &str,
    signature: &str,
    version: i64,
) -> Result<(), VerifyError> {
    let hidden = hex::decode(challenge_hidden).map_err(VerifyError::ChallengeHiddenDecode)?;
    let visual = challenge_visual.as_bytes();

    let key_bytes = hex::decode(public_key).map_err(VerifyError::PublicKeyDecode)?;
    let claimed = parse_public_key(&key_bytes)?;

    let signature = hex::decode(signature).map_err(VerifyError::SignatureDecode)?;

    let version = ProtocolVersion::try_from(version)?;

    let digest = signed_message_digest(version, &hidden, visual);

    let recovered = match recover_compact(&signature, &digest) {
        Ok(key) => PublicKey::from(&key),
        Err(_) => return Err(VerifyError::InvalidSignature),
    };

    if recovered != claimed {
        return Err(VerifyError::InvalidSignature);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::KeyParseError;

    // Published device vector.
    const CHALLENGE_HIDDEN: &str =
        "cd8552569d6e4509266ef137584d1e62c7579b5b8ed69bbafa4b864c6521e7c2";
    const CHALLENGE_VISUAL: &str = "2015-03-23 17:39:22";
    const PUBLIC_KEY: &str = "023a472219ad3327b07c18273717bb3a40b39b743756bf287fbd5fa9d263237f45";
    const SIGNATURE: &str = "20f2d1a42d08c3a362be49275c3ffeeaa415fc040971985548b9f910812237bb41770bf2c8d488428799fbb7e52c11f1a3404011375e4080e077e0e42ab7a5ba02";
    const VERSION: i64 = 2;

    #[test]
    fn test_verify_valid() {
        assert_eq!(
            verify(CHALLENGE_HIDDEN, CHALLENGE_VISUAL, PUBLIC_KEY, SIGNATURE, VERSION),
            Ok(())
        );
    }

    #[test]
    fn test_verify_unsupported_version() {
        for v in [-1, 0, 3, 10] {
            let err = verify(CHALLENGE_HIDDEN, CHALLENGE_VISUAL, PUBLIC_KEY, SIGNATURE, v)
                .unwrap_err();
            assert_eq!(err, VerifyError::UnsupportedVersion(v));
            assert_eq!(err.to_string(), format!("unsupported version: {}", v));
        }
    }

    #[test]
    fn test_verify_wrong_version() {
        assert_eq!(
            verify(CHALLENGE_HIDDEN, CHALLENGE_VISUAL, PUBLIC_KEY, SIGNATURE, 1),
            Err(VerifyError::InvalidSignature)
        );
    }

    #[test]
    fn test_verify_invalid_challenge_hidden() {
        for hidden in [
            "",
            "ad8552569d6e4509266ef137584d1e62c7579b5b8ed69bbafa4b864c6521e7c2",
            "cd8552569d6e4509266ef137584d1e62c7579b5b8ed69bbafa4b864c6521e7c200",
            "e89541ab65d371ebd3d3ea7eed0f00d8ef79b247efa537029843bff62b4a4243",
        ] {
            assert_eq!(
                verify(hidden, CHALLENGE_VISUAL, PUBLIC_KEY, SIGNATURE, VERSION),
                Err(VerifyError::InvalidSignature),
                "{}",
                hidden
            );
        }

        let err = verify(
            "Xd8552569d6e4509266ef137584d1e62c7579b5b8ed69bbafa4b864c6521e7c2",
            CHALLENGE_VISUAL,
            PUBLIC_KEY,
            SIGNATURE,
            VERSION,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            VerifyError::ChallengeHiddenDecode(hex::FromHexError::InvalidHexCharacter {
                c: 'X',
                index: 0
            })
        ));
        assert!(err.to_string().starts_with("failed to decode challenge hidden: "));

        let err = verify(
            "cd8552569d6e4509266ef137584d1e62c7579b5b8ed69bbafa4b864c6521e7c",
            CHALLENGE_VISUAL,
            PUBLIC_KEY,
            SIGNATURE,
            VERSION,
        )
        .unwrap_err();
        assert_eq!(
            err,
            VerifyError::ChallengeHiddenDecode(hex::FromHexError::OddLength)
        );
    }

    #[test]
    fn test_verify_invalid_challenge_visual() {
        for visual in ["", "invalid", "2015-03-23", "2015-03-23 17:39:21"] {
            assert_eq!(
                verify(CHALLENGE_HIDDEN, visual, PUBLIC_KEY, SIGNATURE, VERSION),
                Err(VerifyError::InvalidSignature),
                "{}",
                visual
            );
        }
    }

    #[test]
    fn test_verify_invalid_public_key() {
        for (key, expected) in [
            ("", VerifyError::PublicKeyParse(KeyParseError::Empty)),
            (
                "023a472219ad3327b07c18273717bb3a40b39b743756bf287fbd5fa9d263237f44",
                VerifyError::PublicKeyParse(KeyParseError::InvalidSquareRoot),
            ),
            (
                "a23a472219ad3327b07c18273717bb3a40b39b743756bf287fbd5fa9d263237f45",
                VerifyError::PublicKeyParse(KeyParseError::InvalidCompressedMagic(162)),
            ),
            (
                "X23a472219ad3327b07c18273717bb3a40b39b743756bf287fbd5fa9d263237f45",
                VerifyError::PublicKeyDecode(hex::FromHexError::InvalidHexCharacter {
                    c: 'X',
                    index: 0,
                }),
            ),
            (
                "023a472219ad3327b07c18273717bb3a40b39b743756bf287fbd5fa9d263237f4",
                VerifyError::PublicKeyDecode(hex::FromHexError::OddLength),
            ),
            (
                "023a472219ad3327b07c18273717bb3a40b39b743756bf287fbd5fa9d263237f4500",
                VerifyError::PublicKeyParse(KeyParseError::InvalidLength(34)),
            ),
            (
                "03da970504d5f1a37a5a93ffd7e11ee43bf8838d245360b331eae8397392a6addd",
                VerifyError::InvalidSignature,
            ),
        ] {
            assert_eq!(
                verify(CHALLENGE_HIDDEN, CHALLENGE_VISUAL, key, SIGNATURE, VERSION),
                Err(expected),
                "{}",
                key
            );
        }
    }

    #[test]
    fn test_verify_public_key_parse_messages() {
        let err = verify(CHALLENGE_HIDDEN, CHALLENGE_VISUAL, "", SIGNATURE, VERSION)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse public key: pubkey string is empty"
        );

        let err = verify(
            CHALLENGE_HIDDEN,
            CHALLENGE_VISUAL,
            "a23a472219ad3327b07c18273717bb3a40b39b743756bf287fbd5fa9d263237f45",
            SIGNATURE,
            VERSION,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse public key: invalid magic in compressed pubkey string: 162"
        );
    }

    #[test]
    fn test_verify_invalid_signature() {
        for sig in [
            "",
            "20f2d1a42d08c3a362be49275c3ffeeaa415fc040971985548b9f910812237bb41770bf2c8d488428799fbb7e52c11f1a3404011375e4080e077e0e42ab7a5ba01",
            "a0f2d1a42d08c3a362be49275c3ffeeaa415fc040971985548b9f910812237bb41770bf2c8d488428799fbb7e52c11f1a3404011375e4080e077e0e42ab7a5ba02",
            "20f2d1a42d08c3a362be49275c3ffeeaa415fc040971985548b9f910812237bb41770bf2c8d488428799fbb7e52c11f1a3404011375e4080e077e0e42ab7a5ba0200",
            "1f34f4367c9f749f03e17e533faeac6c06fb86b09f9bbb8e64866b814d14ee2aa5090b0120ae5d37b421f2b84134ba0180e691b80decc8451e3cedde104d23ac12",
        ] {
            assert_eq!(
                verify(CHALLENGE_HIDDEN, CHALLENGE_VISUAL, PUBLIC_KEY, sig, VERSION),
                Err(VerifyError::InvalidSignature),
                "{}",
                sig
            );
        }

        let err = verify(
            CHALLENGE_HIDDEN,
            CHALLENGE_VISUAL,
            PUBLIC_KEY,
            "X0f2d1a42d08c3a362be49275c3ffeeaa415fc040971985548b9f910812237bb41770bf2c8d488428799fbb7e52c11f1a3404011375e4080e077e0e42ab7a5ba02",
            VERSION,
        )
        .unwrap_err();
        assert!(matches!(err, VerifyError::SignatureDecode(_)));

        let err = verify(
            CHALLENGE_HIDDEN,
            CHALLENGE_VISUAL,
            PUBLIC_KEY,
            "20f2d1a42d08c3a362be49275c3ffeeaa415fc040971985548b9f910812237bb41770bf2c8d488428799fbb7e52c11f1a3404011375e4080e077e0e42ab7a5ba0",
            VERSION,
        )
        .unwrap_err();
        assert_eq!(err, VerifyError::SignatureDecode(hex::FromHexError::OddLength));
    }

    #[test]
    fn test_verify_checks_inputs_before_version() {
        // Broken key wins over an unsupported version.
        assert_eq!(
            verify(CHALLENGE_HIDDEN, CHALLENGE_VISUAL, "", SIGNATURE, 7),
            Err(VerifyError::PublicKeyParse(KeyParseError::Empty))
        );
        // Unsupported version wins over a signature that would not match.
        assert_eq!(
            verify(CHALLENGE_HIDDEN, CHALLENGE_VISUAL, PUBLIC_KEY, "", 7),
            Err(VerifyError::UnsupportedVersion(7))
        );
    }

    #[test]
    fn test_verify_accepts_uncompressed_key() {
        use k256::elliptic_curve::sec1::ToEncodedPoint;

        let key = parse_public_key(&hex::decode(PUBLIC_KEY).unwrap()).unwrap();
        let uncompressed = hex::encode(key.to_encoded_point(false).as_bytes());
        assert_eq!(
            verify(CHALLENGE_HIDDEN, CHALLENGE_VISUAL, &uncompressed, SIGNATURE, VERSION),
            Ok(())
        );
    }
}
