//! Utility functions and macros for the order lookup module

// ============================================================================
// WASM Logging
// ============================================================================

/// Write a line to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn log(s: &str) {
    web_sys::console::log_1(&s.into());
}

/// Native builds have no console to talk to.
#[cfg(not(target_arch = "wasm32"))]
pub fn log(_s: &str) {}

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::utils::log(&format_args!($($t)*).to_string())
    }
}
