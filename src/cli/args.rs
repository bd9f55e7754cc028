use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "gott")]
#[command(about = "Query a todo.txt file from the command line")]
#[command(long_about = "gott - a todo.txt reader

Loads a todo.txt file, sorts it (priority tasks first, by letter, then by
creation date) and answers queries about it.

QUICK START:
  gott                      Summary: counts, projects, contexts, priority tasks
  gott next                 The most urgent task
  gott list -p Home         Tasks in +Home
  gott list -c phone -x     Tasks not tagged @phone

The todo file is taken from --file, then $TODO_FILE, then
general.todo_file in ~/.gott/config.yaml, then ~/Dropbox/todo/todo.txt.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to general.default_output from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the todo.txt file
    #[arg(short, long, env = "TODO_FILE", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show task counts, projects, contexts and every task with a priority
    ///
    /// This is the default when no command is given.
    #[command(alias = "s")]
    Summary,

    /// Show the first task with a priority
    ///
    /// Tasks are sorted on load, so this is the highest priority task,
    /// oldest first within the same letter.
    #[command(alias = "n")]
    Next,

    /// List tasks, optionally filtered
    ///
    /// Several criteria are OR-ed: a task is listed if it matches any of
    /// them. With --exclude, a task is listed if it fails any of them.
    ///
    /// # Examples
    ///
    ///   gott list --priority
    ///   gott list -p Home -c phone
    ///   gott list --done --exclude
    #[command(alias = "ls")]
    List(ListArgs),

    /// List unique project tags
    Projects,

    /// List unique context tags
    Contexts,

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Match tasks tagged +PROJECT (repeatable)
    #[arg(short, long = "project", value_name = "PROJECT")]
    pub projects: Vec<String>,

    /// Match tasks tagged @CONTEXT (repeatable)
    #[arg(short, long = "context", value_name = "CONTEXT")]
    pub contexts: Vec<String>,

    /// Match completed tasks
    #[arg(short, long)]
    pub done: bool,

    /// Match tasks with a priority
    #[arg(long)]
    pub priority: bool,

    /// Keep tasks failing any criterion instead of matching any
    #[arg(short = 'x', long)]
    pub exclude: bool,
}

impl ListArgs {
    /// Whether any filter criterion was given.
    #[must_use]
    pub fn has_criteria(&self) -> bool {
        !self.projects.is_empty() || !self.contexts.is_empty() || self.done || self.priority
    }
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file if none exists
    Init,
}
