use std::rc::Rc;

use repose_core::prelude::*;
use repose_core::runtime::COMPOSER;
use repose_ui::*;
use todo_core::{ActionRole, Home, HomeEvent, HomeState, RowIntent, Strings, TaskList};

use crate::task_item::row_key;
use crate::{Alert, Header, Palette, TasksList, TodoInput};

/// The whole screen. Owns the only copy of [`HomeState`]; children get a
/// read-only view plus callbacks that feed [`HomeEvent`]s back through
/// [`Home::reduce`].
pub fn HomeScreen(strings: &'static Strings) -> View {
    let home = remember_with_key("home:controller", Home::default);
    let state = remember_with_key("home:state", || signal(HomeState::new()));

    let dispatch: Rc<dyn Fn(HomeEvent)> = {
        let home = home.clone();
        let state = state.clone();
        Rc::new(move |event: HomeEvent| {
            log::debug!("home: {event:?}");
            let before = state.get();
            let next = home.reduce(&before, event);
            forget_removed_rows(&before.tasks, &next.tasks);
            state.set(next);
        })
    };

    let on_add = {
        let dispatch = dispatch.clone();
        move |title: String| dispatch(HomeEvent::Add(title))
    };
    let on_intent: Rc<dyn Fn(RowIntent)> = {
        let dispatch = dispatch.clone();
        Rc::new(move |intent: RowIntent| dispatch(intent.into()))
    };
    let on_resolve: Rc<dyn Fn(ActionRole)> = {
        let dispatch = dispatch.clone();
        Rc::new(move |role: ActionRole| dispatch(HomeEvent::ResolvePrompt(role)))
    };

    let current = state.get();

    let content = Column(Modifier::new().fill_max_size()).child((
        Header(current.task_count(), strings),
        TodoInput(strings, on_add),
        TasksList(&current.tasks, strings, on_intent),
    ));

    let root = Box(Modifier::new().fill_max_size());
    let root = match current.prompt {
        Some(prompt) => root.child((content, Alert(prompt, strings, on_resolve))),
        None => root.child(content),
    };

    Surface(
        Modifier::new()
            .fill_max_size()
            .background(Palette::color(Palette::BACKGROUND)),
        root,
    )
}

/// Drops the remembered editor of every row whose task is gone. Ids are never
/// reused, so nothing would read those slots again.
fn forget_removed_rows(before: &TaskList, after: &TaskList) {
    let gone: Vec<String> = before
        .iter()
        .filter(|t| after.get(t.id).is_none())
        .map(|t| row_key(t.id))
        .collect();
    if gone.is_empty() {
        return;
    }
    log::trace!("home: dropping row state {gone:?}");
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        for key in &gone {
            c.keyed_slots.remove(key);
        }
    });
}
