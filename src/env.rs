//! Resolution of the invoking user's environment.
//!
//! The home directory and the OS login are read from the process environment
//! exactly once at startup and passed around explicitly from there.

use std::path::PathBuf;

use crate::constants::{APP_DIR, CONFIG_FILE, DEFAULT_ROOT, REGISTRY_FILE};
use crate::error::{Error, Result};

/// Home directory and login of the invoking user.
#[derive(Debug, Clone)]
pub struct UserEnv {
    pub home: PathBuf,
    pub user: String,
}

impl UserEnv {
    /// Reads `HOME` and `USER` from the process environment.
    ///
    /// A missing `HOME` is an error since every persisted path hangs off it;
    /// a missing `USER` falls back to a generic login.
    pub fn from_process_env() -> Result<Self> {
        let home = std::env::var_os("HOME").map(PathBuf::from).ok_or(Error::HomeDirError)?;
        let user = std::env::var("USER").unwrap_or_else(|_| "user".to_string());
        Ok(Self { home, user })
    }

    /// `~/.dnp`
    pub fn app_dir(&self) -> PathBuf {
        self.home.join(APP_DIR)
    }

    /// `~/.dnp/config.yaml`
    pub fn config_path(&self) -> PathBuf {
        self.app_dir().join(CONFIG_FILE)
    }

    /// `~/.dnp/projects.log`
    pub fn registry_path(&self) -> PathBuf {
        self.app_dir().join(REGISTRY_FILE)
    }

    /// Default root for new projects when the config does not set one.
    pub fn default_root(&self) -> PathBuf {
        DEFAULT_ROOT.iter().fold(self.home.clone(), |p, seg| p.join(seg))
    }
}
