use clap::ArgMatches;
use log::LevelFilter;
use std::path::PathBuf;

use super::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Encrypt => "encrypt",
            Operation::Decrypt => "decrypt",
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum TokenSource {
    Argument(String),
    Stdin,
}

impl std::fmt::Debug for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Argument(_) => f.write_str("Argument([REDACTED])"),
            TokenSource::Stdin => f.write_str("Stdin"),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum KeySource {
    /// From `--key` or the environment
    Provided(String),
    Prompt,
}

impl std::fmt::Debug for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeySource::Provided(_) => f.write_str("Provided([REDACTED])"),
            KeySource::Prompt => f.write_str("Prompt"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved command-line configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub operation: Operation,
    pub token: TokenSource,
    pub key: KeySource,
    pub output: OutputFormat,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl CliConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        let (operation, sub) = match matches.subcommand() {
            Some(("encrypt", sub)) => (Operation::Encrypt, sub),
            Some(("decrypt", sub)) => (Operation::Decrypt, sub),
            _ => return Err(CliError::MissingOperation),
        };

        let token = match sub.get_one::<String>("token") {
            Some(token) if token != "-" => TokenSource::Argument(token.clone()),
            _ => TokenSource::Stdin,
        };

        let key = match sub.get_one::<String>("key") {
            Some(key) => KeySource::Provided(key.clone()),
            None => KeySource::Prompt,
        };

        let output = if sub.get_flag("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Ok(Self {
            operation,
            token,
            key,
            output,
            log_level: verbosity_to_level(sub.get_count("verbose")),
            log_file: sub.get_one::<PathBuf>("log-file").cloned(),
        })
    }
}

fn verbosity_to_level(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
