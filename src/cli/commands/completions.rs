//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::GottError;

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the shell is unknown or the script is not UTF-8.
pub fn completions(shell: &str, install: bool) -> Result<String, GottError> {
    let shell = shell_from_str(shell).ok_or_else(|| GottError::NotFound(format!("Unknown shell: {shell}")))?;
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, GottError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "gott", &mut buf);
    String::from_utf8(buf).map_err(|e| GottError::Config(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
#[must_use]
pub fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(gott completions bash)
"
        .to_string(),

        Shell::Zsh => r"# Save to your fpath:
gott completions zsh > ~/.zsh/completions/_gott
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
gott completions fish > ~/.config/fish/completions/gott.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
gott completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to elvish completions directory:
gott completions elvish > ~/.elvish/lib/gott.elv
"
        .to_string(),

        _ => "Unknown shell".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_from_str() {
        assert_eq!(shell_from_str("bash"), Some(Shell::Bash));
        assert_eq!(shell_from_str("ZSH"), Some(Shell::Zsh));
        assert_eq!(shell_from_str("pwsh"), Some(Shell::PowerShell));
        assert_eq!(shell_from_str("unknown"), None);
    }

    #[test]
    fn test_generate_bash_completions() {
        let script = generate_completions(Shell::Bash).unwrap();
        assert!(script.contains("gott"));
        assert!(script.contains("complete"));
    }

    #[test]
    fn test_completions_unknown_shell() {
        assert!(matches!(completions("tcsh", false), Err(GottError::NotFound(_))));
    }

    #[test]
    fn test_completions_install_instructions() {
        let text = completions("fish", true).unwrap();
        assert!(text.contains("gott completions fish"));
    }
}
