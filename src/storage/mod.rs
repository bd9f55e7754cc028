//! Storage layer for gott.
//!
//! todo.txt files are plain text: the whole file is read, split on `\n`,
//! parsed line by line and sorted. Writing back serializes each task on its
//! own line.

mod todo_file;

pub use todo_file::{load_file, save_file};
