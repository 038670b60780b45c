use crate::{Task, TaskId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing,
}

/// Focus the title input should take after a mode change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusChange {
    Focus,
    Blur,
}

/// What a row asks the controller to do. Rows never touch the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowIntent {
    ToggleDone(TaskId),
    Remove(TaskId),
    Rename(TaskId, String),
}

/// Local state of one task row: edit mode plus the title being typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowEditor {
    id: TaskId,
    mode: RowMode,
    buffer: String,
}

impl RowEditor {
    pub fn new(task: &Task) -> Self {
        Self {
            id: task.id,
            mode: RowMode::Viewing,
            buffer: task.title.clone(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn focus(&self) -> FocusChange {
        match self.mode {
            RowMode::Viewing => FocusChange::Blur,
            RowMode::Editing => FocusChange::Focus,
        }
    }

    pub fn start_editing(&mut self) -> Option<FocusChange> {
        self.enter(RowMode::Editing)
    }

    /// Leaves edit mode and asks for a rename with the buffered text. The
    /// buffer keeps what was submitted.
    pub fn submit(&mut self) -> Option<(RowIntent, FocusChange)> {
        let focus = self.enter(RowMode::Viewing)?;
        Some((RowIntent::Rename(self.id, self.buffer.clone()), focus))
    }

    /// Drops the edit and restores the task's current title.
    pub fn cancel(&mut self, current_title: &str) -> Option<FocusChange> {
        let focus = self.enter(RowMode::Viewing)?;
        self.buffer = current_title.to_string();
        Some(focus)
    }

    pub fn toggle(&self) -> RowIntent {
        RowIntent::ToggleDone(self.id)
    }

    pub fn delete(&self) -> RowIntent {
        RowIntent::Remove(self.id)
    }

    fn enter(&mut self, mode: RowMode) -> Option<FocusChange> {
        if self.mode == mode {
            return None;
        }
        log::trace!("row {}: {:?} -> {:?}", self.id, self.mode, mode);
        self.mode = mode;
        Some(self.focus())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Outline,
    Filled { check: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleStyle {
    Plain,
    Struck,
}

/// How a row draws its completion marker and title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowAppearance {
    pub marker: Marker,
    pub title: TitleStyle,
}

impl RowAppearance {
    pub fn of(task: &Task) -> Self {
        if task.done {
            Self {
                marker: Marker::Filled { check: true },
                title: TitleStyle::Struck,
            }
        } else {
            Self {
                marker: Marker::Outline,
                title: TitleStyle::Plain,
            }
        }
    }
}
