//! Business logic behind the CLI commands.

pub mod config;
pub mod requests;
pub mod template;
pub mod upload;
