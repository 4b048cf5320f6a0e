//! Ordered, in-memory task list

use super::model::Task;

/// An ordered sequence of tasks. Insertion order is creation order; there is
/// no uniqueness constraint on descriptions. Nothing here touches storage —
/// callers persist after mutating.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Append a task to the end of the list
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Mark the task at `index` as done; returns the task for display.
    /// Marking an already-done task is fine.
    pub fn mark_done(&mut self, index: usize) -> Option<&Task> {
        let task = self.tasks.get_mut(index)?;
        task.mark_done();
        Some(&*task)
    }

    /// Remove and return the task at `index`
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// The tasks as a slice, for whole-file rewrites
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }
}
