use repose_core::prelude::*;
use repose_ui::*;
use todo_core::Strings;

use crate::Palette;

/// App bar with the title and the task counter.
pub fn Header(count: usize, strings: &Strings) -> View {
    Row(Modifier::new()
        .fill_max_width()
        .padding(24.0)
        .align_items(AlignItems::Center)
        .background(Palette::color(Palette::HEADER)))
    .child((
        Text(strings.screen_title)
            .color(Palette::color(Palette::ON_HEADER))
            .size(20.0),
        Spacer(),
        Text(strings.task_count(count))
            .color(Palette::color(Palette::ON_HEADER))
            .size(15.0),
    ))
}
