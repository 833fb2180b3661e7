//! Error taxonomy for token encryption and decryption.
//!
//! Every failure is returned to the immediate caller. Nothing in this crate
//! logs, retries or swallows one of these errors.

use std::fmt;
use std::string::FromUtf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TokenCryptoError>;

/// Which half of an encoded token a decoding problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenField {
    Iv,
    Ciphertext,
}

impl fmt::Display for TokenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenField::Iv => f.write_str("IV"),
            TokenField::Ciphertext => f.write_str("ciphertext"),
        }
    }
}

/// Cause of an [`TokenCryptoError::InvalidEncoding`].
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("{field} field is not valid base64: {source}")]
    Base64 {
        field: TokenField,
        #[source]
        source: base64::DecodeError,
    },

    #[error("IV must decode to {expected} bytes, got {actual}")]
    IvLength { expected: usize, actual: usize },

    #[error("decrypted bytes are not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum TokenCryptoError {
    #[error("Key must be at least {min} characters long, got {actual}")]
    InvalidKeyLength { min: usize, actual: usize },

    #[error("Invalid token format. Expected IV:EncryptedToken")]
    MalformedToken,

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(#[from] EncodingError),

    /// Padding was invalid after decryption, or the cipher rejected the input.
    /// Almost always a wrong passphrase or a corrupted ciphertext.
    #[error("Decryption failed")]
    DecryptionFailure,
}

impl TokenCryptoError {
    /// Stable name of the error kind, used in CLI and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenCryptoError::InvalidKeyLength { .. } => "InvalidKeyLength",
            TokenCryptoError::MalformedToken => "MalformedToken",
            TokenCryptoError::InvalidEncoding(_) => "InvalidEncoding",
            TokenCryptoError::DecryptionFailure => "DecryptionFailure",
        }
    }
}

impl From<FromUtf8Error> for TokenCryptoError {
    fn from(err: FromUtf8Error) -> Self {
        TokenCryptoError::InvalidEncoding(EncodingError::Utf8(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let short = TokenCryptoError::InvalidKeyLength { min: 6, actual: 5 };
        assert_eq!(short.kind(), "InvalidKeyLength");
        assert_eq!(TokenCryptoError::MalformedToken.kind(), "MalformedToken");
        assert_eq!(TokenCryptoError::DecryptionFailure.kind(), "DecryptionFailure");

        let encoding = TokenCryptoError::from(EncodingError::IvLength {
            expected: 16,
            actual: 3,
        });
        assert_eq!(encoding.kind(), "InvalidEncoding");
    }

    #[test]
    fn test_error_messages() {
        let short = TokenCryptoError::InvalidKeyLength { min: 6, actual: 2 };
        assert_eq!(
            short.to_string(),
            "Key must be at least 6 characters long, got 2"
        );

        let iv = TokenCryptoError::from(EncodingError::IvLength {
            expected: 16,
            actual: 8,
        });
        assert_eq!(
            iv.to_string(),
            "Invalid encoding: IV must decode to 16 bytes, got 8"
        );
    }

    #[test]
    fn test_utf8_error_maps_to_invalid_encoding() {
        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: TokenCryptoError = bad.into();
        assert!(matches!(
            err,
            TokenCryptoError::InvalidEncoding(EncodingError::Utf8(_))
        ));
    }
}
