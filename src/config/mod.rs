//! Configuration management for the dircli CLI

mod paths;
mod settings;

pub use paths::ConfigPaths;
pub use settings::Config;

use crate::error::{CliError, CliResult};
use std::path::Path;

/// Environment variable consulted when no key flag is given
pub const API_KEY_ENV: &str = "DIRCLI_API_KEY";

/// Resolve the API key from CLI flags, a key file, or the environment.
///
/// Precedence: `--key` flag, then `--key-file`, then `DIRCLI_API_KEY`.
/// Passing both `--key` and `--key-file` is rejected.
pub fn resolve_api_key(key: Option<&str>, key_file: Option<&Path>) -> CliResult<String> {
    if key.is_some() && key_file.is_some() {
        return Err(CliError::Validation(
            "Provide an API key or a key file, not both.".to_string(),
        ));
    }

    if let Some(key) = key {
        return Ok(key.to_string());
    }

    if let Some(path) = key_file {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read key file {}: {}", path.display(), e))
        })?;
        let key = contents.trim();
        if key.is_empty() {
            return Err(CliError::Config(format!(
                "Key file {} is empty",
                path.display()
            )));
        }
        return Ok(key.to_string());
    }

    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(CliError::MissingApiKey),
    }
}
