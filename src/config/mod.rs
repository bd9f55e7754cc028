//! Configuration management for gott.
//!
//! This module handles loading and saving configuration from `~/.gott/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig};
