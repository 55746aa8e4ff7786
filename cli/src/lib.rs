//! Command-line front end for exchange-lens
//!
//! Loads captured exchanges from disk, classifies them and renders the result
//! as a table, JSON or a per-category summary.

pub mod capture;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod palette;
pub mod render;
pub mod status;
pub mod table;
pub mod ui;

pub use error::{CliError, Result};
