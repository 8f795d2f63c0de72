//! Static task suggestions offered as input hints.
//!
//! A fixed set of example task names, analogous to an autocomplete datalist.
//! The list is non-authoritative: any non-empty task validates, whether or
//! not it appears here.

use std::fmt;

/// Example task names offered as hints when starting a cycle.
const TASK_SUGGESTIONS: &[&str] = &[
    "Write the report",
    "Review pull requests",
    "Study a chapter",
    "Clear the inbox",
    "Refactor a module",
];

/// The fixed suggestion list.
pub fn task_suggestions() -> &'static [&'static str] {
    TASK_SUGGESTIONS
}

/// Wrapper for displaying the suggestion list as markdown.
pub struct TaskSuggestions;

impl fmt::Display for TaskSuggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Task Suggestions")?;
        writeln!(f)?;
        for task in TASK_SUGGESTIONS {
            writeln!(f, "- {task}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_are_non_empty_tasks() {
        assert!(!task_suggestions().is_empty());
        for task in task_suggestions() {
            assert!(!task.trim().is_empty());
        }
    }

    #[test]
    fn test_suggestions_display() {
        let output = TaskSuggestions.to_string();
        assert!(output.contains("# Task Suggestions"));
        assert!(output.contains("- Write the report"));
    }
}
