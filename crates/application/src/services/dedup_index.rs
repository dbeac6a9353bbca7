use brandwatch_domain::SkipReason;
use std::collections::HashSet;

/// Duplicate detection for one import run.
///
/// `existing` is a snapshot of persisted keys taken when the run starts; it is
/// never re-queried. `staged` holds keys accepted earlier in the same run.
pub struct DedupIndex {
    existing: HashSet<String>,
    staged: HashSet<String>,
}

impl DedupIndex {
    pub fn new<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            existing: existing.into_iter().collect(),
            staged: HashSet::new(),
        }
    }

    /// Checks the persisted snapshot first, then keys staged in this run.
    pub fn check(&self, key: &str) -> Result<(), SkipReason> {
        if self.existing.contains(key) {
            return Err(SkipReason::AlreadyExists);
        }
        if self.staged.contains(key) {
            return Err(SkipReason::DuplicateInBatch);
        }
        Ok(())
    }

    /// Records `key` as accepted for insertion.
    pub fn stage(&mut self, key: &str) {
        self.staged.insert(key.to_string());
    }

    pub fn existing_len(&self) -> usize {
        self.existing.len()
    }
}
