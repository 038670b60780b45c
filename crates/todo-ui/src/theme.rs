use repose_core::prelude::*;

/// Fixed colours of the to-do screen.
pub struct Palette;

impl Palette {
    pub const BACKGROUND: &'static str = "#EBEBEB";
    pub const HEADER: &'static str = "#8257E5";
    pub const ON_HEADER: &'static str = "#FFFFFF";
    pub const INPUT: &'static str = "#F5F4F8";
    pub const ROW: &'static str = "#FFFFFF";
    pub const TITLE: &'static str = "#666666";
    pub const DONE: &'static str = "#1DB863";
    pub const MARKER: &'static str = "#B2B2B2";
    pub const DIVIDER: &'static str = "#B2B2B2";
    pub const SCRIM: &'static str = "#00000080";
    pub const DIALOG: &'static str = "#FFFFFF";
    pub const DIALOG_TEXT: &'static str = "#222222";

    pub fn color(hex: &str) -> Color {
        Color::from_hex(hex)
    }
}

/// A light theme so the stock widgets (buttons, text fields) match the screen.
pub fn todo_theme() -> Theme {
    let mut t = Theme::default();
    t.background = Palette::color(Palette::BACKGROUND);
    t.surface = Palette::color(Palette::ROW);
    t.on_surface = Palette::color(Palette::TITLE);
    t.primary = Palette::color(Palette::HEADER);
    t.on_primary = Color::WHITE;
    t.outline = Palette::color(Palette::MARKER);
    t.button_bg = Palette::color(Palette::HEADER);
    t.button_bg_hover = Color::from_hex("#6C45C9");
    t.button_bg_pressed = Color::from_hex("#5A37B0");
    t
}
