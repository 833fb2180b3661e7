// Declare all modules
pub mod cli;
pub mod encryption;
pub mod error;
pub mod token;
pub mod utils;

// No re-exports here as they're handled in lib.rs
