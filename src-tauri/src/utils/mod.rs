pub mod logging;
pub mod time;

pub use time::format_last_seen;
