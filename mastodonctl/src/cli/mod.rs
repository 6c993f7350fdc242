//! CLI command definitions and handlers
//!
//! This module organizes the CLI into logical submodules:
//! - [`commands`] - Command enum definitions
//! - [`handlers`] - Command execution handlers

mod commands;
mod handlers;

pub use commands::*;
pub use handlers::*;
