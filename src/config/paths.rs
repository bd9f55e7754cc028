//! Path resolution for gott configuration and data files.
//!
//! Configuration lives in `~/.gott/`:
//! - `config.yaml` - Main configuration file
//!
//! The todo file itself defaults to `~/Dropbox/todo/todo.txt`.

use std::path::PathBuf;

use crate::error::GottError;

/// Paths to gott configuration and the default todo file.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.gott/`
    pub root: PathBuf,
    /// Config file: `~/.gott/config.yaml`
    pub config_file: PathBuf,
    /// Todo file used when neither the CLI nor the config names one.
    pub default_todo_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, GottError> {
        let home = std::env::var("HOME")
            .map_err(|_| GottError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_home(PathBuf::from(home)))
    }

    /// Create paths relative to a custom home directory (useful for testing).
    #[must_use]
    pub fn with_home(home: PathBuf) -> Self {
        let root = home.join(".gott");
        Self {
            config_file: root.join("config.yaml"),
            default_todo_file: home.join("Dropbox").join("todo").join("todo.txt"),
            root,
        }
    }

    /// Ensure the configuration directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), GottError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                GottError::Config(format!("Failed to create directory {}: {e}", self.root.display()))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        // Fall back to the current directory if home cannot be determined
        Self::new().unwrap_or_else(|_| Self::with_home(PathBuf::from(".")))
    }
}
