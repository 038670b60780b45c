use crate::{
    ActionRole, Clock, Continuation, IdGenerator, Prompt, RowIntent, SystemClock, TaskError,
    TaskId, TaskList,
};

/// Everything the home screen renders: the list and the prompt on top of it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomeState {
    pub tasks: TaskList,
    pub prompt: Option<Prompt>,
    ids: IdGenerator,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HomeEvent {
    Add(String),
    ToggleDone(TaskId),
    /// Asks for confirmation; nothing is removed until the prompt is confirmed.
    Remove(TaskId),
    Rename(TaskId, String),
    ResolvePrompt(ActionRole),
}

impl From<RowIntent> for HomeEvent {
    fn from(intent: RowIntent) -> Self {
        match intent {
            RowIntent::ToggleDone(id) => HomeEvent::ToggleDone(id),
            RowIntent::Remove(id) => HomeEvent::Remove(id),
            RowIntent::Rename(id, title) => HomeEvent::Rename(id, title),
        }
    }
}

/// The screen controller. `reduce` never mutates its input; views hold the
/// returned state in a signal and re-render from it.
pub struct Home {
    clock: Box<dyn Clock>,
}

impl Default for Home {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Home {
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    pub fn reduce(&self, state: &HomeState, event: HomeEvent) -> HomeState {
        if let Some(prompt) = state.prompt {
            return match event {
                HomeEvent::ResolvePrompt(role) => resolve_prompt(state, prompt, role),
                other => {
                    log::debug!("prompt {:?} is open; ignoring {:?}", prompt.kind, other);
                    state.clone()
                }
            };
        }

        match event {
            HomeEvent::Add(title) => self.add(state, &title),
            HomeEvent::ToggleDone(id) => {
                with_tasks(state, state.tasks.with_toggled(id), "toggle")
            }
            HomeEvent::Remove(id) => {
                if state.tasks.get(id).is_none() {
                    log::debug!("remove: no task with id {id}");
                    return state.clone();
                }
                HomeState {
                    prompt: Some(Prompt::remove_task(id)),
                    ..state.clone()
                }
            }
            HomeEvent::Rename(id, title) => {
                with_tasks(state, state.tasks.with_renamed(id, &title), "rename")
            }
            HomeEvent::ResolvePrompt(role) => {
                log::debug!("no prompt open; ignoring {:?}", role);
                state.clone()
            }
        }
    }

    fn add(&self, state: &HomeState, title: &str) -> HomeState {
        let mut ids = state.ids;
        let id = ids.next(self.clock.now_millis());
        match state.tasks.with_added(id, title) {
            Ok(tasks) => {
                log::debug!("added task {id} '{title}'");
                HomeState {
                    tasks,
                    prompt: None,
                    ids,
                }
            }
            Err(err @ TaskError::DuplicateTitle(_)) => {
                log::info!("{err}");
                HomeState {
                    prompt: Some(Prompt::duplicate_title()),
                    ..state.clone()
                }
            }
            Err(err) => {
                log::debug!("add: {err}");
                state.clone()
            }
        }
    }
}

fn with_tasks(state: &HomeState, tasks: Result<TaskList, TaskError>, op: &str) -> HomeState {
    match tasks {
        Ok(tasks) => HomeState {
            tasks,
            ..state.clone()
        },
        Err(err) => {
            log::debug!("{op}: {err}");
            state.clone()
        }
    }
}

fn resolve_prompt(state: &HomeState, prompt: Prompt, role: ActionRole) -> HomeState {
    let closed = HomeState {
        prompt: None,
        ..state.clone()
    };
    match prompt.resolve(role) {
        Some(Continuation::RemoveTask(id)) => match closed.tasks.without(id) {
            Ok(tasks) => {
                log::debug!("removed task {id}");
                HomeState { tasks, ..closed }
            }
            Err(err) => {
                log::debug!("remove: {err}");
                closed
            }
        },
        None => closed,
    }
}
