//! Core todo.txt model.
//!
//! This module provides the task record, the line parser, the task list
//! queries and the predicate helpers used with them.

pub mod filter;
mod list;
mod parser;
mod task;

pub use filter::{has_context, has_priority, has_project, is_done};
pub use list::{compare, precedes, Predicate, TaskList, ZERO_DATE};
pub use parser::parse_task;
pub use task::{Task, DATE_FORMAT, DONE_MARKER};
