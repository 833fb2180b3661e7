//! Textual form of an encrypted token: `base64(iv) ":" base64(ciphertext)`.
//!
//! Both fields use the standard base64 alphabet with padding. The IV travels
//! with the ciphertext, so a token can be decrypted with nothing but the
//! passphrase.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::modules::error::{EncodingError, Result, TokenCryptoError, TokenField};
use crate::{IV_LEN, TOKEN_SEPARATOR};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedToken {
    pub iv: [u8; IV_LEN],
    pub ciphertext: Vec<u8>,
}

impl EncodedToken {
    pub fn new(iv: [u8; IV_LEN], ciphertext: Vec<u8>) -> Self {
        Self { iv, ciphertext }
    }

    /// Parse an encoded token.
    ///
    /// The input is split on the first separator only. Anything after it,
    /// including further separators, belongs to the ciphertext field and is
    /// therefore rejected by base64 decoding rather than dropped.
    pub fn parse(encoded: &str) -> Result<Self> {
        let (iv_b64, ciphertext_b64) = encoded
            .split_once(TOKEN_SEPARATOR)
            .ok_or(TokenCryptoError::MalformedToken)?;

        if iv_b64.is_empty() || ciphertext_b64.is_empty() {
            return Err(TokenCryptoError::MalformedToken);
        }

        let iv_bytes = decode_field(iv_b64, TokenField::Iv)?;
        let ciphertext = decode_field(ciphertext_b64, TokenField::Ciphertext)?;

        let iv: [u8; IV_LEN] = iv_bytes.as_slice().try_into().map_err(|_| {
            EncodingError::IvLength {
                expected: IV_LEN,
                actual: iv_bytes.len(),
            }
        })?;

        Ok(Self { iv, ciphertext })
    }
}

fn decode_field(value: &str, field: TokenField) -> Result<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|source| EncodingError::Base64 { field, source }.into())
}

impl fmt::Display for EncodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            STANDARD.encode(self.iv),
            TOKEN_SEPARATOR,
            STANDARD.encode(&self.ciphertext)
        )
    }
}

impl FromStr for EncodedToken {
    type Err = TokenCryptoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
