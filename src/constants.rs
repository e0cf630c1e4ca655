//! Constants used throughout the dnp application

/// Codename prefixes sampled when `--prefix` is not supplied
pub const PREFIXES: &[&str] = &[
    "ARES", "ARGUS", "HYDRA", "PHOENIX", "RAVEN", "NEXUS", "CRONUS", "VORTEX", "SIGMA",
    "ECHO",
];

/// Fallback project type when neither the CLI nor the config supplies one
pub const FALLBACK_TYPE: &str = "LAB";

/// Fallback project domain
pub const FALLBACK_DOMAIN: &str = "CORE";

/// Directory under the user's home holding the config file and the registry
pub const APP_DIR: &str = ".dnp";

/// Config file name inside [`APP_DIR`]
pub const CONFIG_FILE: &str = "config.yaml";

/// Registry file name inside [`APP_DIR`]
pub const REGISTRY_FILE: &str = "projects.log";

/// Default project root relative to the home directory
pub const DEFAULT_ROOT: &[&str] = &["Projects", "D"];

/// Message used for the initial commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Branch pushed to the hosting remote
pub const DEFAULT_BRANCH: &str = "main";

/// Name of the hosting remote
pub const ORIGIN_REMOTE: &str = "origin";

/// Subdirectories created inside every new project
pub const PROJECT_SUBDIRS: &[&str] = &["cmd", "internal/core"];

/// Base URL of the GitHub REST API
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// User-Agent header sent with every hosting API request
pub const USER_AGENT: &str = concat!("dnp/", env!("CARGO_PKG_VERSION"));

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
