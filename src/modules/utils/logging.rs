use env_logger::{Builder, Target, WriteStyle};
use log::{info, warn, LevelFilter};
use std::fs::OpenOptions;
use std::path::Path;

/// Initialize the logging system, writing to stderr or appending to `log_file`
///
/// `RUST_LOG` overrides `level` when set.
pub fn initialize_logging(
    level: LevelFilter,
    log_file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    build_logger(level, log_file)?.try_init()?;
    info!("Logging system initialized at level {}", level);
    Ok(())
}

fn build_logger(
    level: LevelFilter,
    log_file: Option<&Path>,
) -> Result<Builder, Box<dyn std::error::Error>> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp_secs()
        .format_module_path(true);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .write_style(WriteStyle::Never)
                .target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.write_style(WriteStyle::Auto).target(Target::Stderr);
        }
    }

    Ok(builder)
}

/// Helper function to format sensitive data for logging
pub fn format_sensitive(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Structured log line for a token operation
///
/// Only the encoded form of a token is ever logged, and only masked. Plaintext
/// tokens and passphrases never reach the log.
pub fn log_crypto_event(operation: &str, encoded: Option<&str>, success: bool, details: Option<&str>) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let token = encoded.map(format_sensitive).unwrap_or_else(|| "-".to_string());
    if success {
        info!(
            "Token operation: op={}, token={}, success=true, timestamp={}, details={:?}",
            operation,
            token,
            timestamp,
            details
        );
    } else {
        warn!(
            "Token operation: op={}, token={}, success=false, timestamp={}, details={:?}",
            operation,
            token,
            timestamp,
            details
        );
    }
}
