//! Scoped `window` event subscriptions.
//!
//! A [`WindowListener`] owns its JS closure and removes the listener when it
//! is dropped. Components hand it to `on_cleanup`, so each mount registers
//! exactly once and nothing outlives the component.

use leptos::logging::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    /// Register `handler` for `event` on the window.
    ///
    /// Returns `None` when there is no window or the browser refuses the
    /// listener; the caller simply runs without the subscription.
    pub fn register<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!("failed to register {} listener: {:?}", event, err);
            return None;
        }

        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Current viewport width in CSS pixels, 0 when unknown.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}
