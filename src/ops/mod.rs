pub mod task_list;

pub use task_list::{EditState, TaskList};
