pub mod cli;
pub mod common;
pub mod profile;

pub use cli::{build_cli_command, Cli, Commands, TemplateKind};
pub use common::OutputFormat;
