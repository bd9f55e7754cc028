//! Command implementations for gott.
//!
//! Task commands take the already loaded, sorted task list and return the
//! text to print.

mod completions;
mod config;

pub use completions::{completion_install_instructions, completions, generate_completions, shell_from_str};
pub use config::config;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::core::{has_context, has_priority, has_project, is_done, Predicate, Task, TaskList};
use crate::error::GottError;
use crate::output::{format_summary, format_tags, format_task, format_tasks, Summary};

/// Execute summary command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn summary(tasks: &TaskList, format: OutputFormat) -> Result<String, GottError> {
    format_summary(&Summary::from_tasks(tasks), format)
}

/// Execute next command
///
/// Prints the first task with a priority, even when it is the only one.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn next(tasks: &TaskList, format: OutputFormat) -> Result<String, GottError> {
    match tasks.filter(&[&has_priority]).first() {
        Some(task) => format_task(task, format),
        None => match format {
            OutputFormat::Pretty => Ok("No task.".to_string()),
            OutputFormat::Json => Ok("null".to_string()),
        },
    }
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn list(tasks: &TaskList, args: &ListArgs, format: OutputFormat) -> Result<String, GottError> {
    let (selected, title) = if args.has_criteria() {
        let title = if args.exclude { "Excluded" } else { "Matching" };
        (select(tasks, args), title)
    } else {
        (tasks.clone(), "Tasks")
    };

    // Blank lines parse to empty tasks; they are never shown.
    let shown: Vec<Task> = selected.into_iter().filter(|t| !t.is_empty()).collect();
    format_tasks(&shown, title, format)
}

/// Apply the list criteria with `filter`, or `exclude` when asked.
fn select(tasks: &TaskList, args: &ListArgs) -> TaskList {
    let projects: Vec<_> = args.projects.iter().map(|p| has_project(p.as_str())).collect();
    let contexts: Vec<_> = args.contexts.iter().map(|c| has_context(c.as_str())).collect();

    let mut predicates: Vec<Predicate<'_>> = Vec::new();
    for p in &projects {
        predicates.push(p);
    }
    for c in &contexts {
        predicates.push(c);
    }
    if args.done {
        predicates.push(&is_done);
    }
    if args.priority {
        predicates.push(&has_priority);
    }

    if args.exclude {
        tasks.exclude(&predicates)
    } else {
        tasks.filter(&predicates)
    }
}

/// Execute projects command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn projects(tasks: &TaskList, format: OutputFormat) -> Result<String, GottError> {
    format_tags(&tasks.projects(), "Projects", '+', format)
}

/// Execute contexts command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn contexts(tasks: &TaskList, format: OutputFormat) -> Result<String, GottError> {
    format_tags(&tasks.contexts(), "Contexts", '@', format)
}
