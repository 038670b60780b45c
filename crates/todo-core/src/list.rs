use crate::{Task, TaskError, TaskId};

/// Ordered list of tasks in insertion order.
///
/// All operations borrow `self` and return a new list, so a list handed to a
/// view is never changed underneath it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|t| t.title == title)
    }

    /// Appends a new open task. Titles must be non-empty and not already in
    /// use (exact match). Whitespace-only titles are accepted.
    pub fn with_added(&self, id: TaskId, title: &str) -> Result<TaskList, TaskError> {
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if self.contains_title(title) {
            return Err(TaskError::DuplicateTitle(title.to_string()));
        }
        let mut tasks = self.tasks.clone();
        tasks.push(Task::new(id, title));
        Ok(TaskList { tasks })
    }

    pub fn with_toggled(&self, id: TaskId) -> Result<TaskList, TaskError> {
        self.map_one(id, Task::toggled)
    }

    /// Renaming does not check the new title against the other tasks.
    pub fn with_renamed(&self, id: TaskId, title: &str) -> Result<TaskList, TaskError> {
        self.map_one(id, |t| t.renamed(title))
    }

    pub fn without(&self, id: TaskId) -> Result<TaskList, TaskError> {
        if self.get(id).is_none() {
            return Err(TaskError::UnknownTask(id));
        }
        let tasks = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        Ok(TaskList { tasks })
    }

    fn map_one(&self, id: TaskId, f: impl Fn(&Task) -> Task) -> Result<TaskList, TaskError> {
        if self.get(id).is_none() {
            return Err(TaskError::UnknownTask(id));
        }
        let tasks = self
            .tasks
            .iter()
            .map(|t| if t.id == id { f(t) } else { t.clone() })
            .collect();
        Ok(TaskList { tasks })
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        TaskList {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
