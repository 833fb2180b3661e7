use std::fmt;

use serde::{Deserialize, Serialize};

/// Input to both token operations: the token and the passphrase to use with it.
///
/// For encryption `token` is the plaintext; for decryption it is the encoded token.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenCryptoParams {
    pub token: String,
    pub key: String,
}

impl TokenCryptoParams {
    pub fn new(token: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            key: key.into(),
        }
    }
}

impl fmt::Debug for TokenCryptoParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCryptoParams")
            .field("token", &self.token)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_json() {
        let params: TokenCryptoParams =
            serde_json::from_str(r#"{"token":"session-1","key":"secretkey"}"#).unwrap();
        assert_eq!(params, TokenCryptoParams::new("session-1", "secretkey"));

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["token"], "session-1");
        assert_eq!(json["key"], "secretkey");
    }

    #[test]
    fn test_debug_hides_key() {
        let params = TokenCryptoParams::new("session-1", "secretkey");
        let debug = format!("{:?}", params);
        assert!(debug.contains("session-1"));
        assert!(!debug.contains("secretkey"));
    }
}
