use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use gott::cli::args::{Cli, Commands};
use gott::cli::commands;
use gott::config::{Config, Paths};
use gott::storage::load_file;

fn main() {
    if std::env::var("GOTT_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("gott=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::default();
    let config = Config::load(&paths)?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let command = cli.command.unwrap_or(Commands::Summary);

    let output = match command {
        Commands::Config(args) => commands::config(&paths, &args.command, format)?,
        Commands::Completions { shell, install } => commands::completions(&shell, install)?,
        command => {
            let file = cli.file.unwrap_or_else(|| config.todo_file(&paths));
            debug!(file = %file.display(), "loading tasks");
            let tasks = load_file(&file)?;

            match command {
                Commands::Next => commands::next(&tasks, format)?,
                Commands::List(args) => commands::list(&tasks, &args, format)?,
                Commands::Projects => commands::projects(&tasks, format)?,
                Commands::Contexts => commands::contexts(&tasks, format)?,
                _ => commands::summary(&tasks, format)?,
            }
        },
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
