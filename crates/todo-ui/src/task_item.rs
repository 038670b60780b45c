use std::rc::Rc;

use repose_core::{Brush, PaddingValues};
use repose_core::prelude::*;
use repose_ui::*;
use todo_core::{
    FocusChange, Marker, RowAppearance, RowEditor, RowIntent, Strings, Task, TaskId, TitleStyle,
};

use crate::Palette;

/// One task row: marker + title (tap to toggle), then edit/cancel and delete.
///
/// The row's [`RowEditor`] is remembered under the task id, so it survives the
/// list changing around it. Edits only leave the row as [`RowIntent`]s.
pub fn TaskItem(
    task: &Task,
    index: usize,
    strings: &Strings,
    on_intent: Rc<dyn Fn(RowIntent)>,
) -> View {
    let editor = remember_with_key(row_key(task.id), || signal(RowEditor::new(task)));
    let row = editor.get();
    let look = RowAppearance::of(task);

    let toggle = {
        let editor = editor.clone();
        let on_intent = on_intent.clone();
        move |_: PointerEvent| on_intent(editor.get().toggle())
    };

    let commit: Rc<dyn Fn()> = {
        let editor = editor.clone();
        let on_intent = on_intent.clone();
        Rc::new(move || {
            let mut out = None;
            editor.update(|r| out = r.submit());
            if let Some((intent, focus)) = out {
                log_focus(index, focus);
                on_intent(intent);
            }
        })
    };

    let title = if row.is_editing() {
        let on_change = {
            let editor = editor.clone();
            move |text: String| editor.update(|r| r.set_buffer(text))
        };
        let on_submit = {
            let editor = editor.clone();
            let commit = commit.clone();
            move |text: String| {
                // An untouched field submits nothing; the buffer still holds the title.
                if !text.is_empty() {
                    editor.update(|r| r.set_buffer(text));
                }
                commit();
            }
        };
        TextField(
            row.buffer().to_string(),
            Modifier::new().flex_grow(1.0).height(32.0),
            Some(on_change),
            Some(on_submit),
        )
    } else {
        TitleText(&task.title, look.title)
    };

    let main = Row(Modifier::new()
        .flex_grow(1.0)
        .padding_values(PaddingValues {
            left: 24.0,
            right: 8.0,
            top: 15.0,
            bottom: 15.0,
        })
        .align_items(AlignItems::Center)
        .clickable()
        .on_pointer_up(toggle))
    .child((MarkerBox(look.marker), title));

    let edit_controls = if row.is_editing() {
        Row(Modifier::new().align_items(AlignItems::Center)).child((
            RowButton(strings.save_button, move || commit()),
            RowButton(strings.cancel_button, {
                let editor = editor.clone();
                let current = task.title.clone();
                move || {
                    let mut out = None;
                    editor.update(|r| out = r.cancel(&current));
                    if let Some(focus) = out {
                        log_focus(index, focus);
                    }
                }
            }),
        ))
    } else {
        RowButton(strings.edit_button, {
            let editor = editor.clone();
            move || {
                let mut out = None;
                editor.update(|r| out = r.start_editing());
                if let Some(focus) = out {
                    log_focus(index, focus);
                }
            }
        })
    };

    Row(Modifier::new()
        .key(task.id.0)
        .fill_max_width()
        .margin_vertical(2.0)
        .align_items(AlignItems::Center)
        .background(Palette::color(Palette::ROW)))
    .child((
        main,
        edit_controls,
        Box(Modifier::new()
            .width(2.0)
            .height(24.0)
            .background(Palette::color(Palette::DIVIDER))),
        RowButton(strings.delete_button, delete_action(editor, on_intent)),
    ))
}

/// Keyed-slot name of a row's [`RowEditor`].
pub(crate) fn row_key(id: TaskId) -> String {
    format!("task-row:{id}")
}

fn RowButton(label: &str, on_click: impl Fn() + 'static) -> View {
    Button(
        Text(label).color(Palette::color(Palette::ON_HEADER)).size(14.0),
        on_click,
    )
    .modifier(Modifier::new().padding(8.0).margin_horizontal(2.0).clip_rounded(4.0))
}

fn delete_action(editor: Rc<Signal<RowEditor>>, on_intent: Rc<dyn Fn(RowIntent)>) -> impl Fn() {
    move || on_intent(editor.get().delete())
}

/// Focus follows the mode through mounting: entering Editing mounts the
/// platform text field and leaving it unmounts the field along with its focus.
/// There is no focus handle to drive, so the change is only traced.
fn log_focus(index: usize, focus: FocusChange) {
    log::trace!("row {index}: {focus:?}");
}

/// 16dp square: outlined when open, filled with a check when done.
fn MarkerBox(marker: Marker) -> View {
    let base = Modifier::new()
        .size(16.0, 16.0)
        .justify_content(JustifyContent::Center)
        .align_items(AlignItems::Center)
        .clip_rounded(4.0);

    match marker {
        Marker::Outline => Box(base.border(1.0, Palette::color(Palette::MARKER), 4.0)),
        Marker::Filled { check } => {
            let b = Box(base.background(Palette::color(Palette::DONE)));
            if check {
                b.child(Text("✓").color(Color::WHITE).size(12.0))
            } else {
                b
            }
        }
    }
}

/// Title text; struck-through titles get a line painted across their middle.
fn TitleText(title: &str, style: TitleStyle) -> View {
    let text = Text(title.to_string()).single_line().overflow_ellipsize();
    let spaced = Modifier::new().margin_horizontal(15.0).flex_shrink(1.0);
    match style {
        TitleStyle::Plain => Box(spaced).child(text.color(Palette::color(Palette::TITLE))),
        TitleStyle::Struck => {
            let done = Palette::color(Palette::DONE);
            Box(spaced).child((
                text.color(done),
                Box(Modifier::new()
                    .absolute()
                    .offset(Some(0.0), Some(0.0), Some(0.0), Some(0.0))
                    .painter(move |scene: &mut Scene, rect: Rect| {
                        scene.nodes.push(SceneNode::Rect {
                            rect: Rect {
                                x: rect.x,
                                y: rect.y + rect.h * 0.5 - 0.5,
                                w: rect.w,
                                h: 1.0,
                            },
                            brush: Brush::Solid(done),
                            radius: 0.0,
                        });
                    })),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{click, count_kind, press_enter, texts, type_text};
    use std::cell::RefCell;
    use todo_core::Locale;

    fn sink() -> (Rc<RefCell<Vec<RowIntent>>>, Rc<dyn Fn(RowIntent)>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let cb: Rc<dyn Fn(RowIntent)> = {
            let seen = seen.clone();
            Rc::new(move |i| seen.borrow_mut().push(i))
        };
        (seen, cb)
    }

    fn is_text_field(k: &ViewKind) -> bool {
        matches!(k, ViewKind::TextField { .. })
    }

    /// Renders the row, presses Edit and renders it again in edit mode.
    fn editing(task: &Task, cb: Rc<dyn Fn(RowIntent)>) -> View {
        let s = Locale::En.strings();
        click(&TaskItem(task, 0, s, cb.clone()), "Edit");
        TaskItem(task, 0, s, cb)
    }

    #[test]
    fn test_viewing_row_shows_title() {
        let (_, cb) = sink();
        let task = Task::new(TaskId(1), "Buy milk");
        let v = TaskItem(&task, 0, Locale::En.strings(), cb);
        assert!(texts(&v).contains(&"Buy milk".to_string()));
        assert_eq!(count_kind(&v, &is_text_field), 0);
        assert_eq!(v.modifier.key, Some(1));
    }

    #[test]
    fn test_editing_row_swaps_in_text_field() {
        let (seen, cb) = sink();
        let task = Task::new(TaskId(2), "Buy milk");
        let v = editing(&task, cb);
        assert_eq!(count_kind(&v, &is_text_field), 1);
        assert!(!texts(&v).contains(&"Buy milk".to_string()));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_enter_commits_rename() {
        let (seen, cb) = sink();
        let task = Task::new(TaskId(4), "Buy milk");
        let v = editing(&task, cb.clone());
        press_enter(&v, "Buy oat milk");
        assert_eq!(
            *seen.borrow(),
            vec![RowIntent::Rename(TaskId(4), "Buy oat milk".into())]
        );

        let v = TaskItem(&task, 0, Locale::En.strings(), cb);
        assert_eq!(count_kind(&v, &is_text_field), 0);
    }

    #[test]
    fn test_untouched_enter_keeps_title() {
        let (seen, cb) = sink();
        let task = Task::new(TaskId(5), "Buy milk");
        press_enter(&editing(&task, cb), "");
        assert_eq!(*seen.borrow(), vec![RowIntent::Rename(TaskId(5), "Buy milk".into())]);
    }

    #[test]
    fn test_save_commits_typed_buffer() {
        let (seen, cb) = sink();
        let task = Task::new(TaskId(6), "Buy milk");
        let v = editing(&task, cb);
        type_text(&v, "Buy bread");
        click(&v, "Save");
        assert_eq!(*seen.borrow(), vec![RowIntent::Rename(TaskId(6), "Buy bread".into())]);
    }

    #[test]
    fn test_cancel_emits_nothing() {
        let (seen, cb) = sink();
        let task = Task::new(TaskId(7), "Buy milk");
        let v = editing(&task, cb.clone());
        type_text(&v, "Buy bread");
        click(&v, "✕");
        assert!(seen.borrow().is_empty());

        let v = TaskItem(&task, 0, Locale::En.strings(), cb);
        assert!(texts(&v).contains(&"Buy milk".to_string()));
    }

    #[test]
    fn test_delete_button_asks_for_removal() {
        let (seen, cb) = sink();
        let task = Task::new(TaskId(8), "Buy milk");
        click(&TaskItem(&task, 0, Locale::En.strings(), cb), "Delete");
        assert_eq!(*seen.borrow(), vec![RowIntent::Remove(TaskId(8))]);
    }

    #[test]
    fn test_done_row_draws_check() {
        let (_, cb) = sink();
        let task = Task::new(TaskId(3), "Walk dog").toggled();
        let v = TaskItem(&task, 0, Locale::En.strings(), cb);
        assert!(texts(&v).contains(&"✓".to_string()));
    }
}
