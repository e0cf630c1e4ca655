use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Hosting API request failed. Original error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Hosting API error: {0}.")]
    HostingError(String),

    /// When an external git command has executed but finished with an error.
    #[error("'{command}' failed with status {status}: {stderr}")]
    GitCommandError { command: String, status: ExitStatus, stderr: String },

    #[error("Cannot determine the home directory: HOME is not set.")]
    HomeDirError,
}

/// Convenience type alias for Results with this crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
