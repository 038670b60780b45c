//! # Tasks, prompts and row editing
//!
//! `todo-core` holds everything the to-do screen knows without drawing a
//! pixel. The view layer (`todo-ui`) only renders values from here and feeds
//! user input back as events.
//!
//! - [`TaskList`] — the ordered list of [`Task`] records. Every update returns a
//!   new list.
//! - [`Home`] / [`HomeState`] — the screen controller. A pure reducer over
//!   [`HomeEvent`]s that also owns the modal [`Prompt`] currently on screen.
//! - [`RowEditor`] — per-row `Viewing`/`Editing` state plus a title buffer.
//! - [`AddInput`] — the buffer behind the "add task" field.
//! - [`Strings`] — the copy for each supported [`Locale`].
//!
//! ```rust
//! use todo_core::*;
//!
//! let home = Home::default();
//! let state = home.reduce(&HomeState::default(), HomeEvent::Add("Buy milk".into()));
//! assert_eq!(state.tasks.len(), 1);
//!
//! // A second add with the same title raises the duplicate notice instead.
//! let state = home.reduce(&state, HomeEvent::Add("Buy milk".into()));
//! assert_eq!(state.tasks.len(), 1);
//! assert_eq!(state.prompt.map(|p| p.kind), Some(PromptKind::DuplicateTitle));
//! ```
//!
//! Removal goes through a confirmation prompt; the task only disappears once
//! the prompt is resolved with its confirming action:
//!
//! ```rust
//! use todo_core::*;
//!
//! let home = Home::default();
//! let state = home.reduce(&HomeState::default(), HomeEvent::Add("Walk dog".into()));
//! let id = state.tasks.iter().next().map(|t| t.id).unwrap();
//!
//! let state = home.reduce(&state, HomeEvent::Remove(id));
//! assert_eq!(state.tasks.len(), 1);
//!
//! let state = home.reduce(&state, HomeEvent::ResolvePrompt(ActionRole::Confirm));
//! assert!(state.tasks.is_empty());
//! ```

pub mod error;
pub mod home;
pub mod id;
pub mod input;
pub mod list;
pub mod prompt;
pub mod row;
pub mod strings;
pub mod task;
pub mod tests;

pub use error::*;
pub use home::{Home, HomeEvent, HomeState};
pub use id::{Clock, IdGenerator, SystemClock};
pub use input::AddInput;
pub use list::TaskList;
pub use prompt::{ActionRole, Continuation, Prompt, PromptAction, PromptKind};
pub use row::{FocusChange, Marker, RowAppearance, RowEditor, RowIntent, RowMode, TitleStyle};
pub use strings::{Locale, Strings};
pub use task::{Task, TaskId};
