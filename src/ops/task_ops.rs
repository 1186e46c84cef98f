use crate::model::Task;

/// Error type for task list operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task text is empty")]
    EmptyText,
    #[error("no task at position {0}")]
    NotFound(usize),
}

/// Append a new incomplete task. The text is trimmed first; empty or
/// whitespace-only input is rejected without touching the list.
pub fn add_task(tasks: &mut Vec<Task>, text: &str) -> Result<(), TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyText);
    }
    tasks.push(Task::new(text));
    Ok(())
}

/// Flip the completed flag of the task at `index`.
pub fn toggle_task(tasks: &mut [Task], index: usize) -> Result<(), TaskError> {
    let task = tasks.get_mut(index).ok_or(TaskError::NotFound(index))?;
    task.completed = !task.completed;
    Ok(())
}

/// Remove and return the task at `index`, keeping the order of the rest.
pub fn remove_task(tasks: &mut Vec<Task>, index: usize) -> Result<Task, TaskError> {
    if index >= tasks.len() {
        return Err(TaskError::NotFound(index));
    }
    Ok(tasks.remove(index))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
