use crate::{Strings, TaskId};

/// Which modal prompt is on screen. Removal carries the task it would delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    DuplicateTitle,
    RemoveTask(TaskId),
}

/// How a prompt button resolves the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionRole {
    /// Closes a notice; there is nothing to confirm.
    Dismiss,
    Cancel,
    Confirm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromptAction {
    pub label: &'static str,
    pub role: ActionRole,
}

/// Work deferred until the user confirms a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    RemoveTask(TaskId),
}

/// A blocking dialog. While one is open the rest of the screen takes no input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
}

impl Prompt {
    pub fn duplicate_title() -> Self {
        Self {
            kind: PromptKind::DuplicateTitle,
        }
    }

    pub fn remove_task(id: TaskId) -> Self {
        Self {
            kind: PromptKind::RemoveTask(id),
        }
    }

    pub fn title(&self, s: &Strings) -> &'static str {
        match self.kind {
            PromptKind::DuplicateTitle => s.duplicate_title,
            PromptKind::RemoveTask(_) => s.remove_title,
        }
    }

    pub fn message(&self, s: &Strings) -> &'static str {
        match self.kind {
            PromptKind::DuplicateTitle => s.duplicate_message,
            PromptKind::RemoveTask(_) => s.remove_message,
        }
    }

    /// Buttons in display order.
    pub fn actions(&self, s: &Strings) -> Vec<PromptAction> {
        match self.kind {
            PromptKind::DuplicateTitle => vec![PromptAction {
                label: s.duplicate_ok,
                role: ActionRole::Dismiss,
            }],
            PromptKind::RemoveTask(_) => vec![
                PromptAction {
                    label: s.remove_no,
                    role: ActionRole::Cancel,
                },
                PromptAction {
                    label: s.remove_yes,
                    role: ActionRole::Confirm,
                },
            ],
        }
    }

    /// Closes the prompt. Only a confirming choice yields deferred work.
    pub fn resolve(self, role: ActionRole) -> Option<Continuation> {
        match (self.kind, role) {
            (PromptKind::RemoveTask(id), ActionRole::Confirm) => Some(Continuation::RemoveTask(id)),
            _ => None,
        }
    }
}
