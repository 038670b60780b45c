use std::rc::Rc;

use repose_core::prelude::*;
use repose_ui::*;
use todo_core::{AddInput, Strings};

use crate::Palette;

/// Sibling ids are salted by position, so the field's key stays well clear of
/// small indexes.
const FIELD_KEY_BASE: u64 = 0x00AD_D000_0000;

/// Single-line field plus submit button. Enter and `+` both submit; empty
/// submissions are dropped here, so `on_add` only ever sees a real title.
///
/// The field's text is held by the platform. Each successful add bumps a
/// generation that is folded into the field's key, so the next frame mounts a
/// fresh, empty field.
pub fn TodoInput(strings: &Strings, on_add: impl Fn(String) + 'static) -> View {
    let input = remember_with_key("todo-input", || signal(AddInput::new()));
    let generation = remember_with_key("todo-input:generation", || signal(0u64));

    let submit: Rc<dyn Fn()> = {
        let input = input.clone();
        let generation = generation.clone();
        Rc::new(move || {
            let mut title = None;
            input.update(|i| title = i.submit());
            match title {
                Some(title) => {
                    on_add(title);
                    generation.update(|g| *g += 1);
                }
                None => log::debug!("add: ignoring empty input"),
            }
        })
    };

    let on_change = {
        let input = input.clone();
        move |text: String| input.update(|i| i.set_text(text))
    };
    let on_submit = {
        let input = input.clone();
        let submit = submit.clone();
        move |text: String| {
            input.update(|i| i.set_text(text));
            submit();
        }
    };

    Row(Modifier::new()
        .fill_max_width()
        .padding(24.0)
        .align_items(AlignItems::Center))
    .child((
        TextField(
            strings.add_hint,
            Modifier::new()
                .key(FIELD_KEY_BASE + generation.get())
                .flex_grow(1.0)
                .height(56.0)
                .background(Palette::color(Palette::INPUT))
                .clip_rounded(5.0),
            Some(on_change),
            Some(on_submit),
        ),
        Button(
            Text(strings.add_button)
                .color(Palette::color(Palette::ON_HEADER))
                .size(24.0),
            move || submit(),
        )
        .modifier(
            Modifier::new()
                .size(56.0, 56.0)
                .margin_horizontal(4.0)
                .background(Palette::color(Palette::HEADER))
                .clip_rounded(5.0)
                .justify_content(JustifyContent::Center)
                .align_items(AlignItems::Center),
        ),
    ))
}
