use std::fmt;

use log::trace;
use pbkdf2::pbkdf2;
use rand::Rng;
use zeroize::Zeroize;

use crate::modules::error::{Result, TokenCryptoError};
use crate::{HmacSha256, IV_LEN, KEY_LEN, MIN_KEY_LENGTH, PBKDF2_ITERATIONS, SALT};

/// A 256-bit AES key derived from a passphrase. Wiped when dropped.
pub struct DerivedKey([u8; KEY_LEN]);

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Function to generate a random IV for AES encryption
pub fn generate_random_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    rand::thread_rng().fill(&mut iv);
    iv
}

/// Length of a passphrase as checked against `MIN_KEY_LENGTH`.
///
/// Counted in UTF-16 code units so that a passphrase accepted by a JavaScript
/// producer of the same token format is accepted here too.
pub fn passphrase_length(passphrase: &str) -> usize {
    passphrase.encode_utf16().count()
}

/// Derive the 32-byte key for a passphrase using PBKDF2-HMAC-SHA256 and the static salt.
///
/// Fails with `InvalidKeyLength` before doing any cryptographic work if the
/// passphrase is shorter than `MIN_KEY_LENGTH`.
pub fn derive_key(passphrase: &str) -> Result<DerivedKey> {
    let length = passphrase_length(passphrase);
    if length < MIN_KEY_LENGTH {
        return Err(TokenCryptoError::InvalidKeyLength {
            min: MIN_KEY_LENGTH,
            actual: length,
        });
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2::<HmacSha256>(passphrase.as_bytes(), SALT, PBKDF2_ITERATIONS, &mut key);
    trace!("derived {}-byte key ({} PBKDF2 rounds)", KEY_LEN, PBKDF2_ITERATIONS);

    Ok(DerivedKey(key))
}
