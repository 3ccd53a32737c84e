//! Page window and navigation chrome around the platform webview.

pub mod address;
pub mod commands;
pub mod window;

pub use address::normalize_address;
pub use window::{open_browser_window, BROWSER_WINDOW_LABEL};
