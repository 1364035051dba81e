//! Command handlers, one module per subcommand.

pub mod completions;
pub mod component;
pub mod config;
pub mod content;
pub mod file;
pub mod generate;
pub mod init;
pub mod page;
