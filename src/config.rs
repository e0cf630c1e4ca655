//! Tool configuration loading.
//!
//! Settings live in `~/.dnp/config.yaml` and are edited by hand; the tool
//! only ever reads them. Loading never fails: a missing or unparseable file
//! yields the built-in defaults, and keys absent from a valid file keep
//! their default values.

use serde::Deserialize;
use std::path::PathBuf;

use crate::constants::{FALLBACK_DOMAIN, FALLBACK_TYPE};
use crate::env::UserEnv;

/// Resolved tool configuration, immutable after load.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory under which new project directories are created.
    pub root_dir: PathBuf,
    /// Type tag used when `create` gets no TYPE argument.
    pub default_type: String,
    /// Domain tag used when `create` gets no DOMAIN argument.
    pub default_domain: String,
    /// Whether to initialize git and make the initial commit.
    pub git_init: bool,
    /// GitHub personal access token; empty disables remote creation.
    pub github_token: String,
}

/// On-disk shape of the config file; every key is optional.
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    root_dir: Option<PathBuf>,
    default_type: Option<String>,
    default_domain: Option<String>,
    git_init: Option<bool>,
    github_token: Option<String>,
}

impl Config {
    /// Built-in defaults used when no config file is readable.
    pub fn defaults(env: &UserEnv) -> Self {
        Self {
            root_dir: env.default_root(),
            default_type: FALLBACK_TYPE.to_string(),
            default_domain: FALLBACK_DOMAIN.to_string(),
            git_init: true,
            github_token: String::new(),
        }
    }

    /// Loads the configuration for the given user environment.
    ///
    /// Read and parse failures are demoted to log lines; the caller always
    /// gets a usable configuration back.
    pub fn load(env: &UserEnv) -> Self {
        let path = env.config_path();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                log::debug!("No config file at '{}' ({e}), using defaults.", path.display());
                return Self::defaults(env);
            }
        };

        match serde_yaml::from_str::<RawConfig>(&content) {
            Ok(raw) => Self::defaults(env).merged(raw),
            Err(e) => {
                log::warn!("Failed to parse '{}': {e}. Using defaults.", path.display());
                Self::defaults(env)
            }
        }
    }

    fn merged(mut self, raw: RawConfig) -> Self {
        if let Some(root_dir) = raw.root_dir {
            self.root_dir = root_dir;
        }
        if let Some(default_type) = raw.default_type {
            self.default_type = default_type;
        }
        if let Some(default_domain) = raw.default_domain {
            self.default_domain = default_domain;
        }
        if let Some(git_init) = raw.git_init {
            self.git_init = git_init;
        }
        if let Some(github_token) = raw.github_token {
            self.github_token = github_token;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with_home(home: &std::path::Path) -> UserEnv {
        UserEnv { home: home.to_path_buf(), user: "tester".to_string() }
    }

    fn write_config(home: &std::path::Path, content: &str) {
        let dir = home.join(".dnp");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.yaml"), content).unwrap();
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let env = env_with_home(tmp.path());
        let config = Config::load(&env);
        assert_eq!(config.root_dir, tmp.path().join("Projects").join("D"));
        assert_eq!(config.default_type, "LAB");
        assert_eq!(config.default_domain, "CORE");
        assert!(config.git_init);
        assert!(config.github_token.is_empty());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), ": not [ yaml ::");
        let config = Config::load(&env_with_home(tmp.path()));
        assert_eq!(config.default_type, "LAB");
        assert!(config.git_init);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "default_type: OPS\ngit_init: false\n");
        let config = Config::load(&env_with_home(tmp.path()));
        assert_eq!(config.default_type, "OPS");
        assert!(!config.git_init);
        assert_eq!(config.default_domain, "CORE");
        assert_eq!(config.root_dir, tmp.path().join("Projects").join("D"));
    }

    #[test]
    fn full_file_overrides_everything() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(
            tmp.path(),
            "root_dir: /srv/projects\ndefault_type: SYS\ndefault_domain: METRICS\ngit_init: true\ngithub_token: ghp_secret\n",
        );
        let config = Config::load(&env_with_home(tmp.path()));
        assert_eq!(config.root_dir, PathBuf::from("/srv/projects"));
        assert_eq!(config.default_type, "SYS");
        assert_eq!(config.default_domain, "METRICS");
        assert!(config.git_init);
        assert_eq!(config.github_token, "ghp_secret");
    }
}
