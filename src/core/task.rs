//! The task record parsed from a single todo.txt line.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layout used for creation dates, both when parsing and serializing.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Marker token for a completed task.
pub const DONE_MARKER: &str = "x";

/// One structured todo.txt task.
///
/// Values are built by [`parse_task`](crate::core::parse_task) and are not
/// mutated afterwards; list operations clone them into new lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Whether the line started with the completion marker.
    pub done: bool,
    /// Priority character from the leading `(X)` slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<char>,
    /// Creation date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<NaiveDate>,
    /// Project tags, without the `+` marker, in order of appearance.
    #[serde(default)]
    pub projects: Vec<String>,
    /// Context tags, without the `@` marker, in order of appearance.
    #[serde(default)]
    pub contexts: Vec<String>,
    /// Free-form description.
    #[serde(default)]
    pub text: String,
}

impl Task {
    /// Check if every field is absent, as for a blank line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Check if the task carries the given project tag.
    #[must_use]
    pub fn has_project(&self, name: &str) -> bool {
        self.projects.iter().any(|p| p == name)
    }

    /// Check if the task carries the given context tag.
    #[must_use]
    pub fn has_context(&self, name: &str) -> bool {
        self.contexts.iter().any(|c| c == name)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if self.done {
            parts.push(DONE_MARKER.to_string());
        }
        if let Some(priority) = self.priority {
            parts.push(format!("({priority})"));
        }
        if let Some(created) = self.created {
            parts.push(created.format(DATE_FORMAT).to_string());
        }
        if !self.text.is_empty() {
            parts.push(self.text.clone());
        }
        parts.extend(self.projects.iter().map(|p| format!("+{p}")));
        parts.extend(self.contexts.iter().map(|c| format!("@{c}")));

        f.write_str(&parts.join(" "))
    }
}
