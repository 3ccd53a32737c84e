//! Per-module log switches.
//!
//! A module opts in by declaring `const ENABLE_LOGS: bool` and then calls the
//! crate-root macros below. Turning the constant off silences that module
//! without touching `RUST_LOG`, which matters for the hit path: a busy player
//! page can report several segment URLs per second.
//!
//! ```ignore
//! const ENABLE_LOGS: bool = true;
//! use crate::log_info;
//!
//! log_info!("Stream candidate found: {}", url);
//! ```

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}
