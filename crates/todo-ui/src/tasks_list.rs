use std::rc::Rc;

use repose_core::prelude::*;
use repose_ui::scroll::{ScrollArea, remember_scroll_state};
use repose_ui::*;
use todo_core::{RowIntent, Strings, TaskList};

use crate::TaskItem;

/// Scrollable rows in list order.
pub fn TasksList(tasks: &TaskList, strings: &Strings, on_intent: Rc<dyn Fn(RowIntent)>) -> View {
    let scroll = remember_scroll_state("tasks-list");

    let rows: Vec<View> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| TaskItem(task, i, strings, on_intent.clone()))
        .collect();

    ScrollArea(
        Modifier::new().fill_max_width().flex_grow(1.0).padding(8.0),
        scroll,
        Column(Modifier::new().fill_max_width()).with_children(rows),
    )
}
