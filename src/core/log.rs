//! Console logging
//!
//! On wasm32 these forward to `console.log` / `console.warn`.
//! On native targets the arguments are type-checked and dropped, so unit
//! tests never touch a JS import.
//!
//! Usage:
//! ```rust
//! use hexfolio_engine::console_log;
//!
//! let columns = 20;
//! console_log!("grid resized to {} columns", columns);
//! ```

/// Log a formatted message to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Warn-level variant, used for recoverable host failures (storage, rAF)
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
