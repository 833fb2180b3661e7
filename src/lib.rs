// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{cli, encryption, error, token, utils};

// Re-export commonly used types
pub use modules::encryption::codec::EncodedToken;
pub use modules::encryption::keys::DerivedKey;
pub use modules::error::{EncodingError, Result, TokenCryptoError, TokenField};
pub use modules::token::{decode_hashed_token, decrypt, encrypt, hash_token, TokenCryptoParams};

// Protocol constants. Changing any of these breaks every token encoded before the change.
/// Static PBKDF2 salt shared by every installation. Not a secret.
pub const SALT: &[u8] = b"token-crypto-lib";
pub const PBKDF2_ITERATIONS: u32 = 100_000;
pub const KEY_LEN: usize = 32;
pub const IV_LEN: usize = 16;
/// Minimum passphrase length, counted in UTF-16 code units.
pub const MIN_KEY_LENGTH: usize = 6;
pub const TOKEN_SEPARATOR: char = ':';

// Type aliases
pub type HmacSha256 = hmac::Hmac<sha2::Sha256>;
pub type Aes256Cbc = block_modes::Cbc<aes::Aes256, block_modes::block_padding::Pkcs7>;
