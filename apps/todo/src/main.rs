#[cfg(not(target_os = "android"))]
mod app;

#[cfg(not(target_os = "android"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let locale = locale_from_env();
    log::info!("starting to-do screen ({locale:?})");
    repose_platform::run_desktop_app(app::app(locale))
}

#[cfg(target_os = "android")]
fn main() {}

/// `TODO_LOCALE` picks the copy (`en`, `pt-BR`, ...). Unknown tags fall back
/// to English.
#[cfg(not(target_os = "android"))]
fn locale_from_env() -> todo_core::Locale {
    match std::env::var("TODO_LOCALE") {
        Ok(tag) => tag.parse().unwrap_or_else(|e| {
            log::warn!("{e}; falling back to English");
            todo_core::Locale::En
        }),
        Err(_) => todo_core::Locale::default(),
    }
}
