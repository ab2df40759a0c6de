//! Local persisted flags.
//!
//! The only state that outlives a single screen in the whole app: the
//! calendar day the check-in was last completed and the mood it recorded.
//! Stored as TOML at `~/.config/mindtwin/state.toml`. No schema versioning;
//! a missing file is simply the "not yet completed" state, not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::FlagsError;

const STATE_FILE: &str = "state.toml";

/// The two string-valued flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalFlags {
    /// Calendar-day string of the last completed check-in.
    #[serde(default)]
    pub last_check_in: Option<String>,
    /// Mood value recorded with that check-in.
    #[serde(default)]
    pub today_mood: Option<String>,
}

/// File-backed flag storage.
#[derive(Debug, Clone)]
pub struct FlagStore {
    path: PathBuf,
}

impl FlagStore {
    /// Open the store at the default location.
    pub fn open() -> Result<Self, FlagsError> {
        Ok(Self {
            path: super::data_dir()?.join(STATE_FILE),
        })
    }

    /// Open a store at an explicit path (used by tests).
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the flags. A missing file yields the default (empty) flags.
    pub fn load(&self) -> Result<LocalFlags, FlagsError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| FlagsError::ParseFailed(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(LocalFlags::default()),
            Err(e) => Err(FlagsError::LoadFailed {
                path: self.path.clone(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist the flags, creating parent directories as needed.
    pub fn save(&self, flags: &LocalFlags) -> Result<(), FlagsError> {
        let content =
            toml::to_string_pretty(flags).map_err(|e| FlagsError::ParseFailed(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FlagsError::SaveFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        }
        std::fs::write(&self.path, content).map_err(|e| FlagsError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}
