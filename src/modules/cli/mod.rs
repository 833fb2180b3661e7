pub mod args;
pub mod config;
pub mod output;

use std::io::{self, BufRead};

use thiserror::Error;

use crate::modules::error::TokenCryptoError;
use crate::modules::token::{decode_hashed_token, hash_token, TokenCryptoParams};
use crate::modules::utils::io::read_line_from;

pub use args::{build_command, KEY_ENV_VAR};
pub use config::{CliConfig, KeySource, Operation, OutputFormat, TokenSource};

/// Failures of the command-line front end
#[derive(Error, Debug)]
pub enum CliError {
    #[error("No operation given, expected `encrypt` or `decrypt`")]
    MissingOperation,

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Crypto(#[from] TokenCryptoError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Crypto(_) => 1,
            CliError::MissingOperation | CliError::Io(_) => 2,
        }
    }
}

/// Gather the token and passphrase named by `config`.
///
/// `input` is only read when the token comes from stdin, and `prompt` is only
/// called when no passphrase was given on the command line or in the environment.
pub fn resolve_params<R, P>(config: &CliConfig, input: &mut R, prompt: P) -> Result<TokenCryptoParams, CliError>
where
    R: BufRead,
    P: FnOnce() -> io::Result<String>,
{
    let token = match &config.token {
        TokenSource::Argument(token) => token.clone(),
        TokenSource::Stdin => read_line_from(input)?,
    };
    let key = match &config.key {
        KeySource::Provided(key) => key.clone(),
        KeySource::Prompt => prompt()?,
    };
    Ok(TokenCryptoParams { token, key })
}

pub fn execute(operation: Operation, params: &TokenCryptoParams) -> Result<String, CliError> {
    let output = match operation {
        Operation::Encrypt => hash_token(params)?,
        Operation::Decrypt => decode_hashed_token(params)?,
    };
    Ok(output)
}
