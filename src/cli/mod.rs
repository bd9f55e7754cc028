//! Command-line interface for gott.

pub mod args;
pub mod commands;
