use std::{
    cmp::Ordering,
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::log_info;
use crate::observer::{Hit, HitSink};

use super::candidate::StreamCandidate;

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Blank input, nothing stored.
    Ignored,
    Created,
    Updated,
}

/// Canonical set of stream candidates, one per exact URL string.
///
/// `record` and `clear` hold the write lock for the whole mutation, so readers
/// never see a hit count whose score has not been recomputed yet. Every state
/// change bumps a revision published on a watch channel; the presentation side
/// subscribes to it and pulls a fresh view.
pub struct CandidateRegistry {
    candidates: RwLock<HashMap<String, StreamCandidate>>,
    revision: watch::Sender<u64>,
}

impl Default for CandidateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateRegistry {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            candidates: RwLock::new(HashMap::new()),
            revision,
        }
    }

    pub fn record(&self, url: &str, at: DateTime<Utc>) -> RecordOutcome {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return RecordOutcome::Ignored;
        }

        let outcome = {
            let mut guard = self
                .candidates
                .write()
                .unwrap_or_else(PoisonError::into_inner);

            match guard.get_mut(trimmed) {
                Some(existing) => {
                    existing.register_hit(at);
                    RecordOutcome::Updated
                }
                None => {
                    let candidate = StreamCandidate::first_hit(trimmed.to_string(), at);
                    log_info!(
                        "Stream candidate found: {} ({})",
                        candidate.url,
                        candidate.kind.label()
                    );
                    guard.insert(candidate.url.clone(), candidate);
                    RecordOutcome::Created
                }
            }
        };

        self.bump_revision();
        outcome
    }

    pub fn clear(&self) {
        let removed = {
            let mut guard = self
                .candidates
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let removed = guard.len();
            guard.clear();
            removed
        };

        log_info!("Cleared {} stream candidates", removed);
        self.bump_revision();
    }

    /// Ranked view: score desc, then most recent, then URL ascending.
    pub fn visible_candidates(&self, filter_manifests_only: bool) -> Vec<StreamCandidate> {
        let mut visible: Vec<StreamCandidate> = {
            let guard = self
                .candidates
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            guard
                .values()
                .filter(|candidate| !filter_manifests_only || candidate.kind.is_manifest_like())
                .cloned()
                .collect()
        };

        visible.sort_by(rank_order);
        visible
    }

    pub fn get(&self, url: &str) -> Option<StreamCandidate> {
        self.candidates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url.trim())
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.candidates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    fn bump_revision(&self) {
        self.revision.send_modify(|revision| *revision = revision.wrapping_add(1));
    }
}

impl HitSink for CandidateRegistry {
    fn deliver(&self, hit: Hit) {
        self.record(&hit.url, hit.observed_at);
    }
}

fn rank_order(a: &StreamCandidate, b: &StreamCandidate) -> Ordering {
    b.score()
        .cmp(&a.score())
        .then_with(|| b.last_seen.cmp(&a.last_seen))
        .then_with(|| a.url.cmp(&b.url))
}
