// Utility helpers shared by the components.

use crate::model::Direction;
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Delay before the direction is revealed: uniform in [1000, 3000) ms.
pub fn random_delay_ms() -> u32 {
    (1000.0 + js_sys::Math::random() * 2000.0) as u32
}

pub fn random_direction() -> Direction {
    match (js_sys::Math::random() * 4.0).floor() as i32 {
        0 => Direction::Left,
        1 => Direction::Right,
        2 => Direction::Up,
        _ => Direction::Down,
    }
}
