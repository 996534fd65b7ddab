//! Wire types for the login gateway.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Challenge pair handed to the client.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResponse {
    /// 32 random bytes, lowercase hex
    #[schema(example = "cd8552569d6e4509266ef137584d1e62c7579b5b8ed69bbafa4b864c6521e7c2")]
    pub challenge_hidden: String,
    /// Server local time shown on the device
    #[schema(example = "2015-03-23 17:39:22")]
    pub challenge_visual: String,
}

/// Signed challenge sent back by the client.
///
/// Every field is required and unknown fields are rejected.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoginRequest {
    #[schema(example = "cd8552569d6e4509266ef137584d1e62c7579b5b8ed69bbafa4b864c6521e7c2")]
    pub challenge_hidden: String,
    #[schema(example = "2015-03-23 17:39:22")]
    pub challenge_visual: String,
    /// Hex SEC1 secp256k1 public key
    #[schema(example = "023a472219ad3327b07c18273717bb3a40b39b743756bf287fbd5fa9d263237f45")]
    pub public_key: String,
    /// Hex 65-byte compact recoverable signature
    #[schema(
        example = "20f2d1a42d08c3a362be49275c3ffeeaa415fc040971985548b9f910812237bb41770bf2c8d488428799fbb7e52c11f1a3404011375e4080e077e0e42ab7a5ba02"
    )]
    pub signature: String,
    /// Challenge encoding version (1 or 2)
    #[schema(example = 2)]
    pub version: i64,
}
