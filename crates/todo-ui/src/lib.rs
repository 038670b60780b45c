#![allow(non_snake_case)]
//! Views for the to-do screen.
//!
//! State lives in `todo-core`; everything here is a function from that state
//! (plus callbacks) to a `View`. The only state these views remember is local
//! to a widget: the add-field buffer and each row's [`todo_core::RowEditor`],
//! keyed by task id so it follows its task through removals.

pub mod alert;
pub mod header;
pub mod home;
pub mod input;
pub mod task_item;
pub mod tasks_list;
pub mod theme;

pub use alert::Alert;
pub use header::Header;
pub use home::HomeScreen;
pub use input::TodoInput;
pub use task_item::TaskItem;
pub use tasks_list::TasksList;
pub use theme::{Palette, todo_theme};

#[cfg(test)]
pub(crate) mod test_util {
    use repose_core::{View, ViewKind};

    /// Every `Text` string in the tree, depth first.
    pub fn texts(v: &View) -> Vec<String> {
        let mut out = Vec::new();
        collect(v, &mut out);
        out
    }

    fn collect(v: &View, out: &mut Vec<String>) {
        if let ViewKind::Text { text, .. } = &v.kind {
            out.push(text.clone());
        }
        for c in &v.children {
            collect(c, out);
        }
    }

    pub fn count_kind(v: &View, pred: &dyn Fn(&ViewKind) -> bool) -> usize {
        let own = usize::from(pred(&v.kind));
        own + v.children.iter().map(|c| count_kind(c, pred)).sum::<usize>()
    }

    pub fn find<'a>(v: &'a View, pred: &dyn Fn(&View) -> bool) -> Option<&'a View> {
        if pred(v) {
            return Some(v);
        }
        v.children.iter().find_map(|c| find(c, pred))
    }

    /// Fires the `on_click` of the button labelled `label`.
    pub fn click(v: &View, label: &str) {
        let button = find(v, &|n| {
            matches!(n.kind, ViewKind::Button { .. }) && texts(n).iter().any(|t| t == label)
        })
        .unwrap_or_else(|| panic!("no button labelled {label:?}"));
        match &button.kind {
            ViewKind::Button { on_click: Some(f) } => f(),
            _ => panic!("button {label:?} has no click handler"),
        }
    }

    pub fn text_field(v: &View) -> &View {
        find(v, &|n| matches!(n.kind, ViewKind::TextField { .. })).expect("no text field")
    }

    /// Feeds `text` through the first field's `on_change`.
    pub fn type_text(v: &View, text: &str) {
        if let ViewKind::TextField {
            on_change: Some(f), ..
        } = &text_field(v).kind
        {
            f(text.to_string());
        }
    }

    /// Presses Enter in the first field while it shows `text`.
    pub fn press_enter(v: &View, text: &str) {
        match &text_field(v).kind {
            ViewKind::TextField {
                on_submit: Some(f), ..
            } => f(text.to_string()),
            _ => panic!("text field has no submit handler"),
        }
    }
}
