pub mod candidate;
pub mod commands;
pub mod kind;
pub mod notifier;
pub mod registry;

pub use candidate::{host_for, score, StreamCandidate};
pub use kind::{classify, StreamKind};
pub use notifier::{StreamsNotifier, STREAMS_CHANGED_EVENT};
pub use registry::{CandidateRegistry, RecordOutcome};
