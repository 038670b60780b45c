use repose_core::prelude::*;
use todo_core::Locale;
use todo_ui::{HomeScreen, todo_theme};

pub fn app(locale: Locale) -> impl FnMut(&mut Scheduler) -> View + 'static {
    let strings = locale.strings();
    move |_s: &mut Scheduler| with_theme(todo_theme(), || HomeScreen(strings))
}
