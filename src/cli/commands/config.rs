//! `gott config` subcommands.

use tracing::info;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::GottError;
use crate::output::to_json;

/// Execute config subcommands
///
/// # Errors
///
/// Returns an error if the config file cannot be read, parsed or written.
pub fn config(paths: &Paths, cmd: &ConfigCommands, format: OutputFormat) -> Result<String, GottError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load(paths)?;
            match format {
                OutputFormat::Json => to_json(&config),
                OutputFormat::Pretty => {
                    let yaml = serde_yaml::to_string(&config)
                        .map_err(|e| GottError::Config(format!("Failed to serialize config: {e}")))?;
                    Ok(format!(
                        "{}todo_file (effective): {}",
                        yaml,
                        config.todo_file(paths).display()
                    ))
                },
            }
        },
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init => {
            if paths.config_file.exists() {
                return Ok(format!("Config already exists: {}", paths.config_file.display()));
            }
            Config::default().save(paths)?;
            info!(path = %paths.config_file.display(), "wrote default config");
            Ok(format!("Created config: {}", paths.config_file.display()))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_init_then_show() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_home(temp_dir.path().to_path_buf());

        let created = config(&paths, &ConfigCommands::Init, OutputFormat::Pretty).unwrap();
        assert!(created.starts_with("Created config"));
        assert!(paths.config_file.exists());

        let again = config(&paths, &ConfigCommands::Init, OutputFormat::Pretty).unwrap();
        assert!(again.starts_with("Config already exists"));

        let shown = config(&paths, &ConfigCommands::Show, OutputFormat::Pretty).unwrap();
        assert!(shown.contains("default_output: pretty"));
        assert!(shown.contains("Dropbox"));
    }

    #[test]
    fn test_config_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_home(temp_dir.path().to_path_buf());

        let output = config(&paths, &ConfigCommands::Path, OutputFormat::Pretty).unwrap();
        assert!(output.ends_with("config.yaml"));
    }
}
