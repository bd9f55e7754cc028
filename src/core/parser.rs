//! todo.txt line parser.
//!
//! A line such as `x (A) 2011-03-02 Call Mom +Family @phone` is split on
//! whitespace and fed through two ordered chains of recognizers:
//!
//! - the leading chain (completion, priority, date) where each rule gets one
//!   chance at the token currently in front, and
//! - the body chain (project, context, text) which is tried for every
//!   remaining token until one rule accepts it.
//!
//! Parsing never fails: anything a rule rejects ends up in the task text.

use std::convert::Infallible;
use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::task::{Task, DATE_FORMAT, DONE_MARKER};

// Strict YYYY-MM-DD; chrono alone would accept single-digit months and days.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$")
        .unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

const PROJECT_MARKER: char = '+';
const CONTEXT_MARKER: char = '@';

/// A single token recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Lowercase `x` completion marker.
    Done,
    /// `(X)` priority slot.
    Priority,
    /// `YYYY-MM-DD` creation date.
    Date,
    /// `+project` tag.
    Project,
    /// `@context` tag.
    Context,
    /// Fallback: plain description text.
    Text,
}

/// Rules tried once each, in order, against the front of the line.
const LEADING_RULES: [Rule; 3] = [Rule::Done, Rule::Priority, Rule::Date];

/// Rules tried in order for every token after the leading slots.
const BODY_RULES: [Rule; 3] = [Rule::Project, Rule::Context, Rule::Text];

impl Rule {
    /// Try to consume `tok` into `builder`. Returns whether it matched.
    fn apply(self, tok: &str, builder: &mut TaskBuilder) -> bool {
        match self {
            Self::Done => {
                if tok != DONE_MARKER {
                    return false;
                }
                builder.done = true;
                true
            },
            Self::Priority => match priority_of(tok) {
                Some(priority) => {
                    builder.priority = Some(priority);
                    true
                },
                None => false,
            },
            Self::Date => match date_of(tok) {
                Some(date) => {
                    builder.created = Some(date);
                    true
                },
                None => false,
            },
            Self::Project => match tag_of(tok, PROJECT_MARKER) {
                Some(name) => {
                    builder.projects.push(name.to_string());
                    true
                },
                None => false,
            },
            Self::Context => match tag_of(tok, CONTEXT_MARKER) {
                Some(name) => {
                    builder.contexts.push(name.to_string());
                    true
                },
                None => false,
            },
            Self::Text => {
                if !builder.text.is_empty() {
                    builder.text.push(' ');
                }
                builder.text.push_str(tok);
                true
            },
        }
    }
}

/// `(X)` where X is any single byte.
fn priority_of(tok: &str) -> Option<char> {
    match tok.as_bytes() {
        // The middle byte sits between two ASCII bytes in valid UTF-8, so it
        // is ASCII as well.
        [b'(', p, b')'] => Some(char::from(*p)),
        _ => None,
    }
}

fn date_of(tok: &str) -> Option<NaiveDate> {
    if !DATE_PATTERN.is_match(tok) {
        return None;
    }
    NaiveDate::parse_from_str(tok, DATE_FORMAT).ok()
}

/// Tag name after `marker`, if the token is a marker followed by at least one byte.
fn tag_of(tok: &str, marker: char) -> Option<&str> {
    tok.strip_prefix(marker).filter(|name| !name.is_empty())
}

/// Field accumulator for a single parse call.
#[derive(Debug, Default)]
struct TaskBuilder {
    done: bool,
    priority: Option<char>,
    created: Option<NaiveDate>,
    projects: Vec<String>,
    contexts: Vec<String>,
    text: String,
}

impl TaskBuilder {
    fn build(self) -> Task {
        Task {
            done: self.done,
            priority: self.priority,
            created: self.created,
            projects: self.projects,
            contexts: self.contexts,
            text: self.text,
        }
    }
}

/// Parse one todo.txt line into a [`Task`].
///
/// # Examples
///
/// ```
/// use gott::core::parse_task;
///
/// let task = parse_task("(A) Thank Mom for the meatballs @phone");
/// assert_eq!(task.priority, Some('A'));
/// assert_eq!(task.contexts, vec!["phone"]);
/// assert_eq!(task.text, "Thank Mom for the meatballs");
///
/// let task = parse_task("Really gotta call Mom (A) @phone @someday");
/// assert_eq!(task.priority, None);
/// assert_eq!(task.text, "Really gotta call Mom (A)");
/// ```
#[must_use]
pub fn parse_task(line: &str) -> Task {
    let mut builder = TaskBuilder::default();
    let mut tokens = line.split_whitespace().peekable();

    for rule in LEADING_RULES {
        if let Some(&tok) = tokens.peek() {
            if rule.apply(tok, &mut builder) {
                tokens.next();
            }
        }
    }

    for tok in tokens {
        for rule in BODY_RULES {
            if rule.apply(tok, &mut builder) {
                break;
            }
        }
    }

    builder.build()
}

impl FromStr for Task {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_task(s))
    }
}

impl From<&str> for Task {
    fn from(line: &str) -> Self {
        parse_task(line)
    }
}
