//! Drag session controller.
//!
//! Tracks the card currently being dragged and orchestrates the drop: the
//! drop target is resolved against the current cache snapshot, the
//! optimistic reorder is applied to the cache synchronously, and then the
//! single authoritative move request goes out through the gateway. The
//! session state is an explicit two-state machine - `Idle` or
//! `Dragging(card)` - and a drop always returns to `Idle` before any of
//! the move computation runs, so the drag overlay disappears immediately
//! regardless of the mutation's outcome.

use crate::cache::BoardCache;
use crate::error::Result;
use crate::sync::{apply_move_result, BoardGateway, CardMoved, MoveCard};
use crate::types::{Board, Card, CardId, ListId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// State of the ephemeral drag session
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// No card is being dragged
    #[default]
    Idle,
    /// A card is being dragged; the value renders the drag overlay
    Dragging(Card),
}

/// Orchestrates drag interactions against the local cache and the remote
/// gateway. Event entry points take plain `&str` ids because drop targets
/// arrive as opaque element ids - resolving what they identify is this
/// controller's job.
pub struct DragController<G> {
    cache: Arc<BoardCache>,
    gateway: G,
    state: Mutex<DragState>,
    move_in_flight: AtomicBool,
}

impl<G: BoardGateway> DragController<G> {
    /// Create a controller over the given cache and gateway
    pub fn new(cache: Arc<BoardCache>, gateway: G) -> Self {
        Self {
            cache,
            gateway,
            state: Mutex::new(DragState::Idle),
            move_in_flight: AtomicBool::new(false),
        }
    }

    /// The gateway this controller issues moves through
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// The card currently being dragged, for overlay rendering
    pub fn active_card(&self) -> Option<Card> {
        match &*self.lock_state() {
            DragState::Idle => None,
            DragState::Dragging(card) => Some(card.clone()),
        }
    }

    /// Begin a drag. Unknown card ids are ignored - the event can arrive
    /// from a stale element after the card was deleted. Also refused while
    /// a previous drop's move is still unresolved, so two optimistic edits
    /// never race on the same cache entry.
    pub fn drag_start(&self, card_id: &str) {
        if self.move_in_flight.load(Ordering::SeqCst) {
            debug!(card_id, "drag start refused: move still in flight");
            return;
        }
        let Some(board) = self.cache.snapshot() else {
            return;
        };
        match board.find_card(card_id) {
            Some(card) => *self.lock_state() = DragState::Dragging(card.clone()),
            None => debug!(card_id, "drag start ignored: card not on board"),
        }
    }

    /// Abandon the drag without a drop: back to `Idle`, no cache mutation,
    /// no remote call.
    pub fn drag_cancel(&self) {
        *self.lock_state() = DragState::Idle;
    }

    /// Complete a drag. `over_id` may identify a card (insert at that
    /// card's index in its owning list) or a list (append at its end);
    /// anything else aborts without a mutation.
    ///
    /// Returns the settled payload, or `None` when the drop resolved to
    /// nothing actionable. A remote failure propagates as an error; the
    /// optimistic cache edit is not rolled back - the next board fetch
    /// reconciles.
    pub async fn drag_end(&self, active_id: &str, over_id: &str) -> Result<Option<CardMoved>> {
        // Unconditionally first, independent of the move outcome.
        *self.lock_state() = DragState::Idle;

        let Some(board) = self.cache.snapshot() else {
            return Ok(None);
        };
        if board.find_list_containing_card(active_id).is_none() {
            debug!(active_id, "drag end ignored: card not on board");
            return Ok(None);
        }

        let Some((to_list_id, to_index)) = resolve_drop_target(&board, over_id) else {
            debug!(over_id, "drag end ignored: unresolvable drop target");
            return Ok(None);
        };

        // 0-based index becomes a 1-based position exactly once, here.
        let request = MoveCard::new(
            CardId::from_string(active_id),
            to_list_id,
            to_index as u32 + 1,
        );

        // Optimistic edit, synchronous so the new order renders with zero
        // perceived latency. The fabricated payload takes the same merge
        // path the confirmed one will.
        let optimistic = request.optimistic_payload();
        self.cache.update(|b| apply_move_result(b, &optimistic));

        self.move_in_flight.store(true, Ordering::SeqCst);
        info!(
            card_id = %request.card_id,
            to_list_id = %request.to_list_id,
            to_position = request.to_position,
            "moving card"
        );
        let settled = self.gateway.move_card(&request).await;
        self.move_in_flight.store(false, Ordering::SeqCst);

        match settled {
            Ok(moved) => {
                // Server truth supersedes; a matching payload no-ops.
                self.cache.update(|b| apply_move_result(b, &moved));
                Ok(Some(moved))
            }
            Err(err) => {
                warn!(
                    card_id = %request.card_id,
                    error = %err,
                    "move failed; cache keeps the optimistic order until the next fetch"
                );
                Err(err)
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, DragState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Resolve a drop target id to a destination list and 0-based index:
/// a card id maps to that card's index in its owner, a list id maps to
/// the end of that list.
fn resolve_drop_target(board: &Board, over_id: &str) -> Option<(ListId, usize)> {
    if let Some(owner) = board.find_list_containing_card(over_id) {
        let index = owner.card_index(over_id)?;
        return Some((owner.id.clone(), index));
    }
    board
        .find_list(over_id)
        .map(|list| (list.id.clone(), list.cards.len()))
}
