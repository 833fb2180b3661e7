pub mod codec;
mod crypto;
pub mod keys;

pub use codec::EncodedToken;
pub use crypto::{decrypt_data, encrypt_data};
pub use keys::{derive_key, generate_random_iv, DerivedKey};
