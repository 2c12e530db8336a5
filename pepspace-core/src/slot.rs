use std::sync::{Arc, PoisonError, RwLock};

use log::info;

use crate::space::SequenceSpace;

///
/// Holds the current [SequenceSpace] for callers that keep one dataset
/// loaded across many queries.
///
/// Publishing a new space swaps the whole `Arc` under a write lock, and
/// readers take an `Arc` snapshot, so a query always runs against one
/// complete space even if a new one is published mid-query.
///
#[derive(Debug, Default)]
pub struct SpaceSlot {
    current: RwLock<Option<Arc<SequenceSpace>>>,
}

impl SpaceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current space, returning the previous one.
    pub fn publish(&self, space: SequenceSpace) -> Option<Arc<SequenceSpace>> {
        info!(
            "Publishing space: {} positions, {} sequences",
            space.len(),
            space.total()
        );
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        guard.replace(Arc::new(space))
    }

    /// Snapshot of the current space, if any has been published.
    pub fn current(&self) -> Option<Arc<SequenceSpace>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drop the current space, e.g. after an upload fails validation.
    pub fn clear(&self) -> Option<Arc<SequenceSpace>> {
        self.current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
