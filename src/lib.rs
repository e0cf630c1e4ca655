/// Handles argument parsing and command orchestration.
pub mod cli;

/// Tool configuration loaded from the user's config file.
pub mod config;

/// Constants used throughout the application.
pub mod constants;

/// Resolution of the invoking user's environment.
pub mod env;

/// Defines custom error types.
pub mod error;

/// Remote repository creation on the hosting platform.
pub mod hosting;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Codename generation for new projects.
pub mod naming;

/// Per-step outcome reporting for best-effort bootstrap stages.
pub mod outcome;

/// Rendering of the embedded boilerplate templates.
pub mod renderer;

/// The append-only log of created projects.
pub mod registry;

/// Creation of the project directory tree and boilerplate files.
pub mod scaffold;

/// Local version control bootstrap.
pub mod vcs;
