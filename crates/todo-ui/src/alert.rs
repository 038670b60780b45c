use std::rc::Rc;

use repose_core::prelude::*;
use repose_ui::*;
use todo_core::{ActionRole, Prompt, Strings};

use crate::Palette;

/// Modal dialog for a [`Prompt`]. The scrim covers the whole screen and eats
/// pointer input, so nothing underneath reacts until a button is pressed.
pub fn Alert(prompt: Prompt, strings: &Strings, on_resolve: Rc<dyn Fn(ActionRole)>) -> View {
    let buttons: Vec<View> = prompt
        .actions(strings)
        .into_iter()
        .map(|action| {
            let on_resolve = on_resolve.clone();
            Button(
                Text(action.label)
                    .color(Palette::color(Palette::ON_HEADER))
                    .size(14.0),
                move || on_resolve(action.role),
            )
            .modifier(
                Modifier::new()
                    .padding(8.0)
                    .margin_horizontal(4.0)
                    .clip_rounded(4.0),
            )
        })
        .collect();

    let dialog = Column(
        Modifier::new()
            .width(300.0)
            .padding(20.0)
            .background(Palette::color(Palette::DIALOG))
            .clip_rounded(8.0),
    )
    .child((
        Text(prompt.title(strings))
            .color(Palette::color(Palette::DIALOG_TEXT))
            .size(18.0),
        Box(Modifier::new().height(8.0).width(1.0)),
        Text(prompt.message(strings))
            .color(Palette::color(Palette::DIALOG_TEXT))
            .size(14.0)
            .max_lines(3),
        Box(Modifier::new().height(16.0).width(1.0)),
        Row(Modifier::new().justify_content(JustifyContent::FlexEnd)).with_children(buttons),
    ));

    Column(
        Modifier::new()
            .absolute()
            .offset(Some(0.0), Some(0.0), Some(0.0), Some(0.0))
            .background(Palette::color(Palette::SCRIM))
            .justify_content(JustifyContent::Center)
            .align_items(AlignItems::Center)
            .clickable()
            .on_pointer_down(|_| {}),
    )
    .child(dialog)
}
