//! JSON output formatting for gott.
//!
//! This module provides functions for formatting tasks as JSON.

use serde::Serialize;
use serde_json::json;

use crate::core::Task;
use crate::error::GottError;

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `GottError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task], title: &str) -> Result<String, GottError> {
    let output = json!({
        "list": title,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON, including its todo.txt line
///
/// # Errors
///
/// Returns `GottError::Parse` if JSON serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, GottError> {
    let output = json!({
        "line": task.to_string(),
        "task": task
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format tags as JSON
///
/// # Errors
///
/// Returns `GottError::Parse` if JSON serialization fails.
pub fn format_tags_json(tags: &[String], title: &str) -> Result<String, GottError> {
    let output = json!({
        "list": title,
        "count": tags.len(),
        "items": tags
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `GottError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, GottError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_task, TaskList};

    #[test]
    fn test_format_tasks_json() {
        let tasks = vec![parse_task("(A) 2011-03-02 Call Mom +Family @phone")];
        let output = format_tasks_json(&tasks, "Tasks").unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["list"], "Tasks");
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["priority"], "A");
        assert_eq!(value["items"][0]["created"], "2011-03-02");
        assert_eq!(value["items"][0]["projects"][0], "Family");
        assert_eq!(value["items"][0]["contexts"][0], "phone");
        assert_eq!(value["items"][0]["text"], "Call Mom");
        assert_eq!(value["items"][0]["done"], false);
    }

    #[test]
    fn test_format_task_json_includes_line() {
        let output = format_task_json(&parse_task("x Call +Family Mom")).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["line"], "x Call Mom +Family");
        assert_eq!(value["task"]["done"], true);
    }

    #[test]
    fn test_format_tags_json() {
        let tasks = TaskList::parse("a @phone\nb @home @phone");
        let output = format_tags_json(&tasks.contexts(), "Contexts").unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["items"], serde_json::json!(["home", "phone"]));
    }

    #[test]
    fn test_task_json_deserializes_back() {
        let task = parse_task("(B) 2015-05-02 Fix sink +Home @home");
        let json = to_json(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
