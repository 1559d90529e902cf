use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a task, unique within one `TaskList`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single task in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Display text, stored exactly as entered
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Which tasks the list view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl Filter {
    /// Filters in the order they appear in the filter bar
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Incomplete, Filter::Completed];

    /// Whether a task passes this filter
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Incomplete => !task.completed,
        }
    }

    /// Next filter in bar order: all → incomplete → completed → all
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Incomplete,
            Filter::Incomplete => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Incomplete => "incomplete",
        }
    }

    /// Label shown in the filter bar
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Incomplete => "Incomplete",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
