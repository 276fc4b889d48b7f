//! Animation-frame scheduling.

/// Run `callback` at the next animation frame.
///
/// Returns `false` when no frame could be requested; the caller should then
/// run its work immediately.
#[cfg(feature = "csr")]
pub fn request_frame(callback: impl FnOnce() + 'static) -> bool {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return false;
    };
    let cb = Closure::once_into_js(move |_ts: f64| callback());
    match window.request_animation_frame(cb.unchecked_ref()) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("requestAnimationFrame failed: {e:?}");
            false
        }
    }
}

/// Without a browser there are no frames; the caller runs the work inline.
#[cfg(not(feature = "csr"))]
pub fn request_frame(_callback: impl FnOnce() + 'static) -> bool {
    false
}
