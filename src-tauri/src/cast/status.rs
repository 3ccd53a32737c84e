use std::fmt;

use serde::{Serialize, Serializer};

/// Human-readable state of the cast session, shown under the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastStatus {
    NotConnected,
    Connected { device: String },
    NeedsDevice,
    Casting,
    Failed { reason: String },
}

impl CastStatus {
    pub fn failed(reason: impl Into<String>) -> Self {
        CastStatus::Failed {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastStatus::NotConnected => f.write_str("Not connected"),
            CastStatus::Connected { device } => write!(f, "Connected to {device}"),
            CastStatus::NeedsDevice => f.write_str("Connect to a Cast device first."),
            CastStatus::Casting => f.write_str("Casting…"),
            CastStatus::Failed { reason } => write!(f, "Cast failed: {reason}"),
        }
    }
}

impl Serialize for CastStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
