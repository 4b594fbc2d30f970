pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: logging, panic hook, runtime config, then mount.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    log::info!("Starting HRMS Lite frontend");

    // window.__HRMS_ENV / __HRMS_CONFIG win over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
