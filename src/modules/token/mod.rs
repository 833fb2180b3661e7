mod ops;
pub mod params;

pub use ops::{decode_hashed_token, decrypt, encrypt, hash_token};
pub use params::TokenCryptoParams;
