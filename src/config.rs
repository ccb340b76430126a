use crate::{common::NotifyOptions, error::Result};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::path::PathBuf;

/// The config file, `~/.config/pync/pync.toml` on most systems
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Use this terminal-notifier executable instead of searching for one
    pub terminal_notifier: Option<PathBuf>,
    /// Options applied to every notification that does not set them itself
    pub defaults: NotifyOptions,
}

impl ConfigFile {
    /// Load the config file.
    /// Writes a default one to disk if it does not exist.
    #[mutants::skip] // Cannot test directly, depends on system state
    pub fn load() -> Result<Self> {
        Ok(confy::load("pync")?)
    }
}
