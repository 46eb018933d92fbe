//! UI Components

pub mod new_task_form;
pub mod task_list;

pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
