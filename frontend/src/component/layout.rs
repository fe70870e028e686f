use gloo::events::EventListener;
use web_sys::window;

use super::prelude::*;

/// Current viewport width in css pixels, zero if there is no window
pub fn viewport_width() -> u32 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| w as u32)
        .unwrap_or_default()
}

/// Layout mode that follows viewport width.
///
/// A single `resize` listener is registered on mount and removed on unmount,
/// every event re-selects the mode from scratch.
#[hook]
pub fn use_layout_mode(mobile_max_width: u32) -> LayoutMode {
    let mode = use_state(|| LayoutMode::select_with(viewport_width(), mobile_max_width));

    {
        let mode = mode.clone();
        use_effect_with_deps(move |&max_width| {
            // Breakpoint may have changed since state was created
            mode.set(LayoutMode::select_with(viewport_width(), max_width));

            let listener = window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    mode.set(LayoutMode::select_with(viewport_width(), max_width));
                })
            });
            move || drop(listener)
        }, mobile_max_width);
    }

    *mode
}
