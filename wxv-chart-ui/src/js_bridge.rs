//! Browser timer helpers for sequencing chart transitions.
//!
//! CSS transitions do the animating; Rust only needs to know when to flip
//! a shape's phase. Both helpers resolve immediately when no `window` is
//! available so callers never hang.

use js_sys::{Function, Promise};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn resolve_now(resolve: &Function) {
    let _ = resolve.call0(&JsValue::NULL);
}

/// Wait `ms` milliseconds via `setTimeout`.
pub async fn sleep_ms(ms: u32) {
    let promise = Promise::new(&mut |resolve, _reject| match web_sys::window() {
        Some(window) => {
            let delay = i32::try_from(ms).unwrap_or(i32::MAX);
            if window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay)
                .is_err()
            {
                resolve_now(&resolve);
            }
        }
        None => resolve_now(&resolve),
    });
    let _ = JsFuture::from(promise).await;
}

async fn animation_frame() {
    let promise = Promise::new(&mut |resolve, _reject| match web_sys::window() {
        Some(window) => {
            if window.request_animation_frame(&resolve).is_err() {
                resolve_now(&resolve);
            }
        }
        None => resolve_now(&resolve),
    });
    let _ = JsFuture::from(promise).await;
}

/// Wait until the current DOM has been painted once.
///
/// Two animation frames: the first runs before the paint of the pending
/// render, the second after it. Style changes made afterwards transition
/// from the painted values.
pub async fn next_paint() {
    animation_frame().await;
    animation_frame().await;
}
