//! One-shot trial-start timer over the browser's `setTimeout`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// An armed timer. Holding the value keeps the callback alive; `cancel`
/// guarantees the callback never runs afterwards, so dropping the clock in
/// an effect destructor keeps a torn-down component from being mutated by a
/// late fire.
pub struct GameClock {
    window: web_sys::Window,
    timeout_id: i32,
    _on_fire: Closure<dyn FnMut()>,
}

impl GameClock {
    /// Arms a one-shot timer; `on_fire` runs at most once, never before
    /// `delay_ms` has elapsed. Returns `None` outside a browser context.
    pub fn schedule(delay_ms: u32, on_fire: impl FnOnce() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let on_fire = Closure::once(on_fire);
        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                on_fire.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .ok()?;
        Some(Self {
            window,
            timeout_id,
            _on_fire: on_fire,
        })
    }

    /// Clearing an already-fired handle is a no-op, so this is safe on every
    /// teardown path.
    pub fn cancel(self) {
        self.window.clear_timeout_with_handle(self.timeout_id);
    }
}
