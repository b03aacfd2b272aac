use std::sync::{Arc, Mutex, MutexGuard};

use crate::scene::spec_record::SpecRecord;

/// Receiver for the merged spec record, notified after every render.
///
/// Mirrors model the textual display surfaces that echo whatever the footer
/// draws from, including recognized fields the canvas itself never shows.
pub trait SpecMirror: Send {
    /// Called with the post-merge record once per rendered frame.
    fn mirror(&mut self, spec: &SpecRecord);
}

/// In-memory mirror for tests and debugging.
///
/// Clones share one log, so a handle kept outside the session observes the
/// updates delivered to the registered clone.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMirror {
    log: Arc<Mutex<MirrorLog>>,
}

#[derive(Debug, Default)]
struct MirrorLog {
    updates: usize,
    latest: Option<SpecRecord>,
}

impl InMemoryMirror {
    /// Create a new in-memory mirror.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records delivered so far.
    pub fn updates(&self) -> usize {
        self.lock().updates
    }

    /// The most recently delivered record, if any.
    pub fn latest(&self) -> Option<SpecRecord> {
        self.lock().latest.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MirrorLog> {
        self.log.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}

impl SpecMirror for InMemoryMirror {
    fn mirror(&mut self, spec: &SpecRecord) {
        let mut log = self.lock();
        log.updates += 1;
        log.latest = Some(spec.clone());
    }
}
