#![cfg(target_os = "android")]
use log::LevelFilter;
use repose_platform::android::run_android_app;
use todo_core::Locale;
use winit::platform::android::activity::AndroidApp;

mod app;

#[unsafe(no_mangle)]
pub extern "C" fn android_main(android_app: AndroidApp) {
    android_logger::init_once(android_logger::Config::default().with_max_level(LevelFilter::Debug));
    if let Err(e) = run_android_app(android_app, app::app(Locale::PtBr)) {
        log::error!("to-do screen exited: {e:?}");
    }
}
