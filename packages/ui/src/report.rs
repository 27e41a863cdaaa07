//! Showing failures to the user.
//!
//! Each operation's failure goes either inline (into a view's error state) or
//! into a blocking browser alert, as configured in `ClientConfig.errors`.

use api::{ApiError, Operation};
use store::config::{ErrorSurface, ErrorSurfaces};

/// Route `err` to the surface configured for `op`. `inline` receives the
/// message when the surface is [`ErrorSurface::Inline`].
pub fn report_error(
    op: Operation,
    err: &ApiError,
    surfaces: &ErrorSurfaces,
    inline: impl FnOnce(String),
) {
    match op.surface(surfaces) {
        ErrorSurface::Inline => inline(err.message.clone()),
        ErrorSurface::Alert => alert(&err.message),
    }
}

/// Blocking alert. Native builds have no browser dialog and only log.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    tracing::warn!("{}", message);
}

/// Blocking yes/no prompt. Native builds have no browser dialog and accept.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.confirm_with_message(message).unwrap_or(false);
        }
    }
    tracing::debug!("Auto-confirming: {}", message);
    true
}
