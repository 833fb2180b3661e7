use serde_json::json;

use super::config::{Operation, OutputFormat};
use crate::modules::error::TokenCryptoError;

/// Text printed on stdout after a successful operation
pub fn render_success(operation: Operation, result: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => result.to_string(),
        OutputFormat::Json => json!({
            "operation": operation.as_str(),
            "result": result,
        })
        .to_string(),
    }
}

/// Text describing a failed operation
pub fn render_failure(operation: Operation, err: &TokenCryptoError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Error [{}]: {}", err.kind(), err),
        OutputFormat::Json => json!({
            "operation": operation.as_str(),
            "error": err.to_string(),
            "kind": err.kind(),
        })
        .to_string(),
    }
}
