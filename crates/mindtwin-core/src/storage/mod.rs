mod flags;

pub use flags::{FlagStore, LocalFlags};

use std::path::PathBuf;

use crate::error::FlagsError;

/// Returns `~/.config/mindtwin[-dev]/` based on MINDTWIN_ENV.
///
/// Set MINDTWIN_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, FlagsError> {
    let base_dir = dirs::home_dir()
        .ok_or(FlagsError::NoConfigDir)?
        .join(".config");

    let env = std::env::var("MINDTWIN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("mindtwin-dev")
    } else {
        base_dir.join("mindtwin")
    };

    std::fs::create_dir_all(&dir).map_err(|e| FlagsError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
