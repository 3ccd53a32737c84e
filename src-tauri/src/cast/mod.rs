pub mod commands;
pub mod controller;
pub mod request;
pub mod session;
pub mod status;

pub use controller::{CastController, CAST_STATUS_EVENT};
pub use request::{CastRequest, StreamType};
pub use session::{CastSession, DisconnectedCastSession, SessionEvent};
pub use status::CastStatus;
