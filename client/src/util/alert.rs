//! Blocking alert dialog for rejected user input.
//!
//! TRADE-OFFS
//! ==========
//! `window.alert` only exists in the browser; SSR paths log the message
//! instead so server rendering stays side-effect free.

/// Show `message` in a blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            leptos::logging::warn!("alert without window: {message}");
            return;
        };
        if window.alert_with_message(message).is_err() {
            leptos::logging::warn!("alert failed: {message}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::warn!("alert: {message}");
    }
}
