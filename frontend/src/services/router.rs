//! Browser location plumbing: read the current path, push new entries onto
//! the history stack.

use shared::Route;
use wasm_bindgen::JsValue;

pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Home)
}

/// Push `route` onto the history stack without reloading the page.
pub fn push_route(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path())) {
            gloo::console::warn!("Failed to push history entry:", e);
        }
    }
}
