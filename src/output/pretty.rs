use colored::Colorize;

use crate::core::Task;

use super::Summary;

/// Format one task as a single colored line.
pub fn format_task_pretty(task: &Task) -> String {
    let status_icon = if task.done { "[x]".green() } else { "[ ]".white() };
    let mut line = status_icon.to_string();

    if let Some(priority) = task.priority {
        line.push_str(&format!(" {}", format!("({priority})").yellow().bold()));
    }

    if let Some(created) = task.created {
        line.push_str(&format!(" {}", created.to_string().dimmed()));
    }

    if !task.text.is_empty() {
        let text = if task.done {
            task.text.strikethrough().to_string()
        } else {
            task.text.bold().to_string()
        };
        line.push_str(&format!(" {text}"));
    }

    // Add tags if present
    if !task.projects.is_empty() {
        let projects = task
            .projects
            .iter()
            .map(|p| format!("+{p}"))
            .collect::<Vec<_>>()
            .join(" ");
        line.push_str(&format!("  {}", projects.magenta()));
    }

    if !task.contexts.is_empty() {
        let contexts = task
            .contexts
            .iter()
            .map(|c| format!("@{c}"))
            .collect::<Vec<_>>()
            .join(" ");
        line.push_str(&format!("  {}", contexts.cyan()));
    }

    line
}

/// Format a list of tasks under a title, skipping blank lines from the file.
pub fn format_tasks_pretty(tasks: &[Task], title: &str) -> String {
    let tasks: Vec<&Task> = tasks.iter().filter(|t| !t.is_empty()).collect();
    if tasks.is_empty() {
        return format!("{title} (0 items)\n  No items");
    }

    let mut output = format!("{} ({} items)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        output.push_str(&format_task_pretty(task));
        output.push('\n');
    }

    output
}

/// Format a list of tags with their marker.
pub fn format_tags_pretty(tags: &[String], title: &str, marker: char) -> String {
    if tags.is_empty() {
        return format!("{title} (0)\n  None");
    }

    let mut output = format!("{} ({})\n", title, tags.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for tag in tags {
        output.push_str(&format!("  {}\n", format!("{marker}{tag}").cyan()));
    }

    output
}

/// Format the overview printed by `gott summary`.
pub fn format_summary_pretty(summary: &Summary) -> String {
    let mut output = format!(
        "{} tasks, {} with priority\n",
        summary.total.to_string().bold(),
        summary.with_priority.len().to_string().bold()
    );
    output.push_str(&format!(
        "{} projects: {}\n",
        summary.projects.len(),
        summary.projects.join(", ").magenta()
    ));
    output.push_str(&format!(
        "{} contexts: {}\n",
        summary.contexts.len(),
        summary.contexts.join(", ").cyan()
    ));
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in &summary.with_priority {
        output.push_str(&format_task_pretty(task));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_task, TaskList};

    #[test]
    fn test_format_task_pretty_open() {
        let output = format_task_pretty(&parse_task("(A) 2011-03-02 Call Mom +Family @phone"));

        assert!(output.contains("[ ]"));
        assert!(output.contains("(A)"));
        assert!(output.contains("2011-03-02"));
        assert!(output.contains("Call Mom"));
        assert!(output.contains("+Family"));
        assert!(output.contains("@phone"));
    }

    #[test]
    fn test_format_task_pretty_done() {
        let output = format_task_pretty(&parse_task("x Pay bills"));

        assert!(output.contains("[x]"));
        assert!(output.contains("Pay bills"));
    }

    #[test]
    fn test_format_tasks_pretty_empty_list() {
        let output = format_tasks_pretty(&[], "Tasks");

        assert!(output.contains("Tasks (0 items)"));
        assert!(output.contains("No items"));
    }

    #[test]
    fn test_format_tasks_pretty_skips_blank_tasks() {
        let tasks = TaskList::parse("Buy milk\n(A) Call Mom\n");
        let output = format_tasks_pretty(tasks.as_slice(), "Tasks");

        assert!(output.contains("Tasks (2 items)"));
        assert!(output.contains("─"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_format_tags_pretty() {
        let tags = vec!["Family".to_string(), "Home".to_string()];
        let output = format_tags_pretty(&tags, "Projects", '+');

        assert!(output.contains("Projects (2)"));
        assert!(output.contains("+Family"));
        assert!(output.contains("+Home"));
    }

    #[test]
    fn test_format_tags_pretty_empty() {
        let output = format_tags_pretty(&[], "Contexts", '@');
        assert!(output.contains("Contexts (0)"));
    }

    #[test]
    fn test_format_summary_pretty() {
        let tasks = TaskList::parse("(A) Call Mom +Family @phone\nBuy milk @store");
        let output = format_summary_pretty(&Summary::from_tasks(&tasks));

        assert!(output.contains("tasks,"));
        assert!(output.contains("with priority"));
        assert!(output.contains("1 projects"));
        assert!(output.contains("2 contexts"));
        assert!(output.contains("Call Mom"));
        assert!(!output.contains("Buy milk"));
    }
}
