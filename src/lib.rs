//! gott - a todo.txt parser and query library
//!
//! This crate parses todo.txt lines into structured tasks and answers
//! queries over task lists: sorting, filtering, and project/context
//! extraction. A small CLI is built on top of it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::{parse_task, Task, TaskList};
pub use error::GottError;
pub use storage::load_file;
