//! Local board cache: the single materialized board snapshot.
//!
//! The cache holds the last known board value behind an `Arc`. Updates are
//! copy-on-write: a transform runs against a structurally independent copy
//! and the result is swapped in atomically, so readers holding an earlier
//! snapshot keep a fully valid value while a new one is computed. The copy
//! is an explicit value clone of the nested containers, never a
//! serialization round-trip.

use crate::types::{Board, List};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Mutable snapshot of a single board, kept in sync with the last known
/// server response and patched functionally during drag operations.
#[derive(Debug, Default)]
pub struct BoardCache {
    slot: RwLock<Option<Arc<Board>>>,
}

impl BoardCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Install an authoritative board value, replacing any previous one
    pub fn load(&self, board: Board) {
        *self.write_slot() = Some(Arc::new(board));
    }

    /// Drop the cached board
    pub fn clear(&self) {
        *self.write_slot() = None;
    }

    /// Current snapshot, or `None` if no board is loaded. The returned
    /// `Arc` stays valid across later updates.
    pub fn snapshot(&self) -> Option<Arc<Board>> {
        self.read_slot().clone()
    }

    /// Find the list that owns the given card in the current snapshot
    pub fn find_list_containing_card(&self, card_id: &str) -> Option<List> {
        self.read_slot()
            .as_ref()
            .and_then(|board| board.find_list_containing_card(card_id))
            .cloned()
    }

    /// Apply a functional update to the cached board. The transform runs
    /// on a deep copy and must return `true` if it changed anything; on
    /// `false` the cache is left untouched. A no-op when no board is
    /// loaded - there is nothing to reconcile against.
    ///
    /// Returns whether a new value was installed.
    pub fn update<F>(&self, transform: F) -> bool
    where
        F: FnOnce(&mut Board) -> bool,
    {
        let mut slot = self.write_slot();
        let Some(current) = slot.as_ref() else {
            return false;
        };

        let mut draft = Board::clone(current);
        if !transform(&mut draft) {
            return false;
        }

        *slot = Some(Arc::new(draft));
        true
    }

    fn read_slot(&self) -> RwLockReadGuard<'_, Option<Arc<Board>>> {
        self.slot.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, Option<Arc<Board>>> {
        self.slot.write().unwrap_or_else(|e| e.into_inner())
    }
}
