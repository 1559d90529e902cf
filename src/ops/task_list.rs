use crate::io::prefs::{self, PrefError, PrefStore};
use crate::model::task::{Filter, Task, TaskId};

/// An in-progress rename of one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    /// Task being renamed
    pub id: TaskId,
    /// Scratch buffer, written to the task on commit
    pub buffer: String,
}

/// The task list and everything the user can change about it.
///
/// All mutations go through the methods below. Tasks, filter, and edit state
/// live for the session only; `dark_mode` is written through to the injected
/// preference store on every change.
pub struct TaskList {
    tasks: Vec<Task>,
    filter: Filter,
    input: String,
    editing: Option<EditState>,
    dark_mode: bool,
    next_id: u64,
    store: Box<dyn PrefStore>,
}

impl std::fmt::Debug for TaskList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskList")
            .field("tasks", &self.tasks)
            .field("filter", &self.filter)
            .field("input", &self.input)
            .field("editing", &self.editing)
            .field("dark_mode", &self.dark_mode)
            .finish_non_exhaustive()
    }
}

impl TaskList {
    /// Create an empty list, restoring the display preference from `store`
    pub fn new(store: Box<dyn PrefStore>) -> Self {
        let dark_mode = prefs::load_dark_mode(store.as_ref());
        TaskList {
            tasks: Vec::new(),
            filter: Filter::All,
            input: String::new(),
            editing: None,
            dark_mode,
            next_id: 1,
            store,
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// New-task draft buffer
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing.as_ref().is_some_and(|e| e.id == id)
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// (total, completed)
    pub fn counts(&self) -> (usize, usize) {
        let done = self.tasks.iter().filter(|t| t.completed).count();
        (self.tasks.len(), done)
    }

    /// Tasks passing the active filter, in list order. Recomputed on every call.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    // -----------------------------------------------------------------------
    // Task mutations
    // -----------------------------------------------------------------------

    /// Append a task. Blank or whitespace-only text is ignored.
    /// The text is stored untrimmed.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, text));
        log::debug!("added task {}", id);
        Some(id)
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Add a task from the draft buffer, clearing it if a task was added
    pub fn submit_input(&mut self) -> Option<TaskId> {
        let input = std::mem::take(&mut self.input);
        let id = self.add_task(&input);
        if id.is_none() {
            self.input = input;
        }
        id
    }

    /// Remove a task. Returns false if no task has this id.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.tasks.remove(pos);
        if self.is_editing(id) {
            self.editing = None;
        }
        log::debug!("deleted task {}", id);
        true
    }

    /// Flip a task's completed flag, returning the new value
    pub fn toggle_complete(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Remove every completed task, keeping the rest in order.
    /// Returns the number removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        if let Some(edit) = &self.editing
            && !self.tasks.iter().any(|t| t.id == edit.id)
        {
            self.editing = None;
        }
        let removed = before - self.tasks.len();
        if removed > 0 {
            log::debug!("cleared {} completed task(s)", removed);
        }
        removed
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Begin renaming a task, seeding the buffer with its text.
    /// Replaces any edit already in progress.
    pub fn start_editing(&mut self, id: TaskId) -> bool {
        let Some(task) = self.task(id) else {
            return false;
        };
        self.editing = Some(EditState {
            id,
            buffer: task.text.clone(),
        });
        true
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(edit) = &mut self.editing {
            edit.buffer = text.into();
        }
    }

    pub fn edit_buffer_mut(&mut self) -> Option<&mut String> {
        self.editing.as_mut().map(|e| &mut e.buffer)
    }

    /// Commit the edit buffer into task `id` and leave editing.
    ///
    /// A blank buffer leaves the text unchanged; editing ends either way.
    /// Returns whether the text was written.
    pub fn update_task(&mut self, id: TaskId) -> bool {
        let buffer = match self.editing.take() {
            Some(edit) => edit.buffer,
            None => return false,
        };
        if buffer.trim().is_empty() {
            return false;
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = buffer;
                log::debug!("renamed task {}", id);
                true
            }
            None => false,
        }
    }

    /// Commit the current edit, if any
    pub fn commit_edit(&mut self) -> bool {
        match self.editing.as_ref().map(|e| e.id) {
            Some(id) => self.update_task(id),
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // View settings
    // -----------------------------------------------------------------------

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Set the display preference and persist it immediately.
    ///
    /// The in-memory flag changes even when the write fails.
    pub fn set_dark_mode(&mut self, dark: bool) -> Result<(), PrefError> {
        self.dark_mode = dark;
        prefs::store_dark_mode(self.store.as_mut(), dark)
    }

    pub fn toggle_dark_mode(&mut self) -> Result<(), PrefError> {
        self.set_dark_mode(!self.dark_mode)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}
