use log::debug;

use super::params::TokenCryptoParams;
use crate::modules::encryption::codec::EncodedToken;
use crate::modules::encryption::keys::{derive_key, generate_random_iv};
use crate::modules::encryption::{decrypt_data, encrypt_data};
use crate::modules::error::Result;

/// Encrypt `token` under `passphrase`, returning `base64(iv):base64(ciphertext)`.
///
/// A fresh random IV is drawn on every call, so encrypting the same input twice
/// gives two different results.
pub fn encrypt(token: &str, passphrase: &str) -> Result<String> {
    let key = derive_key(passphrase)?;
    let iv = generate_random_iv();

    let ciphertext = encrypt_data(token.as_bytes(), &key, &iv);
    debug!(
        "encrypted {} plaintext bytes into {} ciphertext bytes",
        token.len(),
        ciphertext.len()
    );

    Ok(EncodedToken::new(iv, ciphertext).to_string())
}

/// Decrypt a token produced by [`encrypt`] with the same passphrase.
///
/// The token is parsed and decoded before the key is derived, so a malformed
/// token is reported even when the passphrase is also too short.
///
/// There is no authentication tag. A wrong passphrase is usually caught by the
/// padding or UTF-8 checks, but it can occasionally produce a plausible looking
/// string instead of an error.
pub fn decrypt(encoded: &str, passphrase: &str) -> Result<String> {
    let parsed = EncodedToken::parse(encoded)?;
    let key = derive_key(passphrase)?;

    let plaintext = decrypt_data(&parsed.ciphertext, &key, &parsed.iv)?;
    debug!(
        "decrypted {} ciphertext bytes into {} plaintext bytes",
        parsed.ciphertext.len(),
        plaintext.len()
    );

    Ok(String::from_utf8(plaintext)?)
}

/// Encrypts a token using AES with a key derived from `params.key`
pub fn hash_token(params: &TokenCryptoParams) -> Result<String> {
    encrypt(&params.token, &params.key)
}

/// Decrypts an encoded token using the same derived key
pub fn decode_hashed_token(params: &TokenCryptoParams) -> Result<String> {
    decrypt(&params.token, &params.key)
}
