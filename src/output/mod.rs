//! Output formatting for gott.
//!
//! This module provides formatters for displaying tasks in various formats.

mod json;
mod pretty;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::core::{has_priority, Task, TaskList};
use crate::error::GottError;

pub use json::*;
pub use pretty::*;

/// Overview of a loaded todo file.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Number of tasks in the file, blank lines included.
    pub total: usize,
    /// Unique project tags.
    pub projects: Vec<String>,
    /// Unique context tags.
    pub contexts: Vec<String>,
    /// Tasks with a priority, in sorted order.
    pub with_priority: Vec<Task>,
}

impl Summary {
    /// Build the summary of a task list.
    #[must_use]
    pub fn from_tasks(tasks: &TaskList) -> Self {
        Self {
            total: tasks.len(),
            projects: tasks.projects(),
            contexts: tasks.contexts(),
            with_priority: tasks.filter(&[&has_priority]).into_vec(),
        }
    }
}

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `GottError::Parse` if JSON serialization fails.
pub fn format_tasks(tasks: &[Task], title: &str, format: OutputFormat) -> Result<String, GottError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `GottError::Parse` if JSON serialization fails.
pub fn format_task(task: &Task, format: OutputFormat) -> Result<String, GottError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => format_task_json(task),
    }
}

/// Format project or context tags based on output format
///
/// # Errors
///
/// Returns `GottError::Parse` if JSON serialization fails.
pub fn format_tags(
    tags: &[String],
    title: &str,
    marker: char,
    format: OutputFormat,
) -> Result<String, GottError> {
    match format {
        OutputFormat::Pretty => Ok(format_tags_pretty(tags, title, marker)),
        OutputFormat::Json => format_tags_json(tags, title),
    }
}

/// Format a summary based on output format
///
/// # Errors
///
/// Returns `GottError::Parse` if JSON serialization fails.
pub fn format_summary(summary: &Summary, format: OutputFormat) -> Result<String, GottError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(summary)),
        OutputFormat::Json => to_json(summary),
    }
}
