//! Argument parsing and run configuration for the demo driver.

pub mod args;
pub mod config;
