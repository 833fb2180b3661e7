use aes::cipher::generic_array::GenericArray;
use block_modes::BlockMode;

use super::keys::DerivedKey;
use crate::modules::error::{Result, TokenCryptoError};
use crate::{Aes256Cbc, IV_LEN};

// Fresh cipher state per call; nothing is shared between invocations.
fn cipher(key: &DerivedKey, iv: &[u8; IV_LEN]) -> Aes256Cbc {
    Aes256Cbc::new_fix(
        GenericArray::from_slice(&key.as_bytes()[..]),
        GenericArray::from_slice(&iv[..]),
    )
}

/// Function to encrypt data using AES-256-CBC with PKCS#7 padding
///
/// The output is always a positive multiple of the block size, even for empty input.
pub fn encrypt_data(data: &[u8], key: &DerivedKey, iv: &[u8; IV_LEN]) -> Vec<u8> {
    cipher(key, iv).encrypt_vec(data)
}

/// Function to decrypt data using AES-256-CBC and strip the PKCS#7 padding
pub fn decrypt_data(encrypted_data: &[u8], key: &DerivedKey, iv: &[u8; IV_LEN]) -> Result<Vec<u8>> {
    cipher(key, iv)
        .decrypt_vec(encrypted_data)
        .map_err(|_| TokenCryptoError::DecryptionFailure)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector_key() -> DerivedKey {
        let bytes = hex::decode("d6df97325a47fabb962555a3c070ea580b2b1191e92596ff54c7efc8ff16b308")
            .unwrap();
        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes);
        DerivedKey::from_bytes(key)
    }

    fn vector_iv() -> [u8; IV_LEN] {
        let mut iv = [0u8; IV_LEN];
        for (i, b) in iv.iter_mut().enumerate() {
            *b = i as u8;
        }
        iv
    }

    #[test]
    /// Test that encryption and decryption work correctly (roundtrip test)
    fn test_encryption_decryption_roundtrip() {
        let original_data = "This is a secret message that needs to be encrypted";
        let key = DerivedKey::from_bytes([7; 32]);
        let iv = [1u8; IV_LEN];

        let encrypted_data = encrypt_data(original_data.as_bytes(), &key, &iv);
        assert!(!encrypted_data.is_empty());
        assert_eq!(encrypted_data.len() % 16, 0);
        assert_ne!(encrypted_data, original_data.as_bytes());

        let decrypted_data = decrypt_data(&encrypted_data, &key, &iv).unwrap();
        assert_eq!(decrypted_data, original_data.as_bytes());
    }

    #[test]
    fn test_known_ciphertext() {
        let encrypted = encrypt_data(b"hello world", &vector_key(), &vector_iv());
        assert_eq!(hex::encode(&encrypted), "36fda4b99bf1cf2325acab1eeee9887b");
    }

    #[test]
    fn test_empty_input_is_one_padding_block() {
        let encrypted = encrypt_data(b"", &vector_key(), &vector_iv());
        assert_eq!(encrypted.len(), 16);

        let decrypted = decrypt_data(&encrypted, &vector_key(), &vector_iv()).unwrap();
        assert!(decrypted.is_empty());
    }

    #[test]
    fn test_block_aligned_input_gets_full_padding_block() {
        let encrypted = encrypt_data(&[b'a'; 16], &vector_key(), &vector_iv());
        assert_eq!(encrypted.len(), 32);
    }

    #[test]
    /// Test that decryption fails with incorrect key
    fn test_decryption_with_wrong_key() {
        let iv = [1u8; IV_LEN];
        // Under the wrong key the final block decrypts to a trailing byte of 0x4a,
        // which is not valid PKCS#7 padding.
        let encrypted_data = encrypt_data(&[b'x'; 32], &DerivedKey::from_bytes([1; 32]), &iv);
        let result = decrypt_data(&encrypted_data, &DerivedKey::from_bytes([2; 32]), &iv);

        assert!(matches!(result, Err(TokenCryptoError::DecryptionFailure)));
    }

    #[test]
    fn test_decryption_rejects_partial_block() {
        let result = decrypt_data(&[0u8; 15], &vector_key(), &vector_iv());
        assert!(matches!(result, Err(TokenCryptoError::DecryptionFailure)));
    }
}
