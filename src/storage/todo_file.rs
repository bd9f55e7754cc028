//! Reading and writing todo.txt files.

use std::path::Path;

use tracing::debug;

use crate::core::TaskList;
use crate::error::GottError;

/// Load and sort the tasks in a todo.txt file.
///
/// Every `\n`-separated segment becomes a task, so a file ending in a
/// newline yields a final empty task.
///
/// # Errors
///
/// Returns `GottError::Read` if the file cannot be read. No parsing happens
/// in that case. Bytes that are not valid UTF-8 are replaced with U+FFFD and
/// end up as ordinary text.
pub fn load_file(path: &Path) -> Result<TaskList, GottError> {
    let raw = std::fs::read(path).map_err(|source| GottError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let tasks = TaskList::parse(&String::from_utf8_lossy(&raw));
    debug!(path = %path.display(), tasks = tasks.len(), "loaded todo file");
    Ok(tasks)
}

/// Write tasks to a todo.txt file, one serialized task per line.
///
/// # Errors
///
/// Returns `GottError::Write` if the file cannot be written.
pub fn save_file(path: &Path, tasks: &TaskList) -> Result<(), GottError> {
    std::fs::write(path, tasks.to_lines()).map_err(|source| GottError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), tasks = tasks.len(), "saved todo file");
    Ok(())
}
