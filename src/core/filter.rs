//! Predicates for [`TaskList::filter`](crate::core::TaskList::filter) and
//! [`TaskList::exclude`](crate::core::TaskList::exclude).
//!
//! ```
//! use gott::core::{has_context, has_priority, TaskList};
//!
//! let tasks = TaskList::parse("(A) Call Mom @phone\nBuy milk @store\nWater plants");
//! let phone = has_context("phone");
//! let store = has_context("store");
//!
//! assert_eq!(tasks.filter(&[&has_priority]).len(), 1);
//! assert_eq!(tasks.filter(&[&phone, &store]).len(), 2);
//! ```

use super::task::Task;

/// Check if the task is done.
#[must_use]
pub const fn is_done(task: &Task) -> bool {
    task.done
}

/// Check if the task has a priority.
#[must_use]
pub const fn has_priority(task: &Task) -> bool {
    task.priority.is_some()
}

/// Predicate matching tasks tagged with `@context`.
pub fn has_context(context: impl Into<String>) -> impl Fn(&Task) -> bool {
    let context = context.into();
    move |task| task.has_context(&context)
}

/// Predicate matching tasks tagged with `+project`.
pub fn has_project(project: impl Into<String>) -> impl Fn(&Task) -> bool {
    let project = project.into();
    move |task| task.has_project(&project)
}
