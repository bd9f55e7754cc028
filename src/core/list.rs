//! Ordered task collections and the queries built on them.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::ops::Index;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::parser::parse_task;
use super::task::Task;

/// A task predicate, as accepted by [`TaskList::filter`] and [`TaskList::exclude`].
pub type Predicate<'a> = &'a dyn Fn(&Task) -> bool;

/// An ordered list of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

/// Date an undated task sorts as: 0001-01-01.
pub const ZERO_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

fn sort_date(task: &Task) -> NaiveDate {
    task.created.unwrap_or(ZERO_DATE)
}

/// Non-strict "a goes no later than b".
///
/// Equal priorities (including both absent) compare by date, with an absent
/// date standing for [`ZERO_DATE`]. Otherwise a task with a priority
/// precedes one without, and two priorities compare by character.
#[must_use]
pub fn precedes(a: &Task, b: &Task) -> bool {
    if a.priority == b.priority {
        let (da, db) = (sort_date(a), sort_date(b));
        return da == db || da < db;
    }
    match (a.priority, b.priority) {
        (Some(pa), Some(pb)) => pa < pb,
        _ => b.priority.is_none(),
    }
}

/// Total ordering derived from [`precedes`] checked in both directions.
#[must_use]
pub fn compare(a: &Task, b: &Task) -> Ordering {
    match (precedes(a, b), precedes(b, a)) {
        (true, true) | (false, false) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
    }
}

impl TaskList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse file contents, one task per `\n`-separated line, then sort.
    ///
    /// The split is unconditional, so a trailing newline yields a final
    /// empty task.
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        let mut list: Self = contents.split('\n').map(parse_task).collect();
        list.sort();
        list
    }

    /// Stable sort: priority tasks first, then by priority, then by date.
    pub fn sort(&mut self) {
        self.0.sort_by(compare);
    }

    /// Tasks for which at least one predicate holds, in list order.
    #[must_use]
    pub fn filter(&self, predicates: &[Predicate<'_>]) -> Self {
        self.0
            .iter()
            .filter(|&task| predicates.iter().any(|p| p(task)))
            .cloned()
            .collect()
    }

    /// Tasks for which at least one predicate fails, in list order.
    ///
    /// This is not the complement of [`filter`](Self::filter): with several
    /// predicates a task can land in both results.
    #[must_use]
    pub fn exclude(&self, predicates: &[Predicate<'_>]) -> Self {
        self.0
            .iter()
            .filter(|&task| predicates.iter().any(|p| !p(task)))
            .cloned()
            .collect()
    }

    /// Unique project tags across the list, sorted.
    #[must_use]
    pub fn projects(&self) -> Vec<String> {
        unique_sorted(self.0.iter().flat_map(|task| task.projects.iter()))
    }

    /// Unique context tags across the list, sorted.
    #[must_use]
    pub fn contexts(&self) -> Vec<String> {
        unique_sorted(self.0.iter().flat_map(|task| task.contexts.iter()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Task> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Task> {
        self.0
    }

    /// Serialize every task, one per line.
    #[must_use]
    pub fn to_lines(&self) -> String {
        self.0.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    }
}

fn unique_sorted<'a>(tags: impl Iterator<Item = &'a String>) -> Vec<String> {
    tags.collect::<BTreeSet<_>>().into_iter().cloned().collect()
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TaskList {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for TaskList {
    type Output = Task;

    fn index(&self, index: usize) -> &Task {
        &self.0[index]
    }
}
