pub mod args;
pub mod runner;

pub use args::{get_log_level_from_verbose, parse_cli, Cli, Commands, CreateArgs, ListArgs};
pub use runner::{run_create, run_list};
