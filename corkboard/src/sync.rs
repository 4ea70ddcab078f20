//! Remote sync gateway: the authoritative move-card operation and the
//! optimistic payload that stands in for it while the call is in flight.
//!
//! A drop produces exactly one `MoveCard` request. Before the round trip
//! settles, `optimistic_payload` fabricates a result with the same shape
//! as the server's, so the cache-merge path (`apply_move_result`) treats
//! in-flight and confirmed state identically - no separate "pending"
//! branch exists anywhere. When the server answers, its payload runs
//! through the same merge; if it matches the optimistic one the merge is
//! a no-op and the cache stays put.

use crate::error::Result;
use crate::ordering::normalize_positions;
use crate::types::{Board, BoardId, CardId, ListId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request to relocate a card. `to_position` is 1-based - the conversion
/// from array index happens once, at this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCard {
    pub card_id: CardId,
    pub to_list_id: ListId,
    pub to_position: u32,
}

impl MoveCard {
    /// Create a new move request
    pub fn new(card_id: CardId, to_list_id: ListId, to_position: u32) -> Self {
        Self {
            card_id,
            to_list_id,
            to_position,
        }
    }

    /// Fabricate the locally-assumed result of this request, identical in
    /// shape to the eventual server payload.
    pub fn optimistic_payload(&self) -> CardMoved {
        CardMoved {
            id: self.card_id.clone(),
            position: self.to_position,
            list_id: self.to_list_id.clone(),
        }
    }
}

/// Settled result of a move: where the card ended up. The server may have
/// computed a different final position than requested; last write from the
/// server wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMoved {
    pub id: CardId,
    pub position: u32,
    pub list_id: ListId,
}

/// The two collaborator interfaces the core consumes: the board query and
/// the authoritative move-card operation. Stateless request/response; no
/// retry is performed here - a caller wanting retry must wrap it.
#[async_trait]
pub trait BoardGateway: Send + Sync {
    /// Fetch a board with its lists and cards, or `None` if it does not exist
    async fn board(&self, id: &BoardId) -> Result<Option<Board>>;

    /// Durably relocate a card, returning its settled location
    async fn move_card(&self, request: &MoveCard) -> Result<CardMoved>;
}

/// Merge a move payload (optimistic or confirmed) into a board value.
///
/// Relocates the card to the payload's list at the payload's 1-based
/// position (clamped to the list length), then re-stamps positions in
/// every affected list. Returns `false` without touching the board when
/// the payload is already reflected, when the card is unknown, or when
/// the destination list does not exist.
pub fn apply_move_result(board: &mut Board, moved: &CardMoved) -> bool {
    let Some(from_idx) = board
        .lists
        .iter()
        .position(|l| l.find_card(moved.id.as_str()).is_some())
    else {
        return false;
    };
    let Some(to_idx) = board
        .lists
        .iter()
        .position(|l| l.id == moved.list_id)
    else {
        return false;
    };

    let Some(card_idx) = board.lists[from_idx].card_index(moved.id.as_str()) else {
        return false;
    };

    // Already settled at the payload's spot: leave the value untouched so
    // the cache keeps its current snapshot.
    if from_idx == to_idx
        && card_idx as u32 + 1 == moved.position
        && board.lists[from_idx].cards[card_idx].position == moved.position
    {
        return false;
    }

    let mut card = board.lists[from_idx].cards.remove(card_idx);
    card.list_id = moved.list_id.clone();

    let insert_at = (moved.position.max(1) as usize - 1).min(board.lists[to_idx].cards.len());
    board.lists[to_idx].cards.insert(insert_at, card);

    let source = std::mem::take(&mut board.lists[from_idx].cards);
    board.lists[from_idx].cards = normalize_positions(source);
    if from_idx != to_idx {
        let destination = std::mem::take(&mut board.lists[to_idx].cards);
        board.lists[to_idx].cards = normalize_positions(destination);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, List};

    fn board_fixture() -> Board {
        let epoch = chrono::DateTime::<chrono::Utc>::UNIX_EPOCH;
        let mut board = Board::new("Test");
        board.id = BoardId::from_string("board-test");
        board.created_at = epoch;
        let mut a = List::new("A", 1);
        a.id = ListId::from_string("list-a");
        a.created_at = epoch;
        for (i, title) in ["one", "two", "three"].iter().enumerate() {
            let mut card = Card::new(*title, i as u32 + 1, a.id.clone());
            card.id = CardId::from_string(format!("card-{}", title));
            card.created_at = epoch;
            a.cards.push(card);
        }
        let mut b = List::new("B", 2);
        b.id = ListId::from_string("list-b");
        b.created_at = epoch;
        board.lists.push(a);
        board.lists.push(b);
        board
    }

    #[test]
    fn test_optimistic_payload_shape() {
        let request = MoveCard::new(
            CardId::from_string("c1"),
            ListId::from_string("l2"),
            3,
        );
        let payload = request.optimistic_payload();
        assert_eq!(payload.id, request.card_id);
        assert_eq!(payload.list_id, request.to_list_id);
        assert_eq!(payload.position, 3);
    }

    #[test]
    fn test_apply_move_result_cross_list() {
        let mut board = board_fixture();
        let moved = CardMoved {
            id: CardId::from_string("card-one"),
            position: 1,
            list_id: ListId::from_string("list-b"),
        };

        assert!(apply_move_result(&mut board, &moved));

        let a = board.find_list("list-a").unwrap();
        let b = board.find_list("list-b").unwrap();
        assert_eq!(a.cards.len(), 2);
        assert_eq!(b.cards.len(), 1);
        assert_eq!(b.cards[0].id.as_str(), "card-one");
        assert_eq!(b.cards[0].list_id.as_str(), "list-b");
        // Both lists re-stamped contiguously
        assert_eq!(
            a.cards.iter().map(|c| c.position).collect::<Vec<_>>(),
            [1, 2]
        );
        assert_eq!(b.cards[0].position, 1);
    }

    #[test]
    fn test_apply_move_result_same_list() {
        let mut board = board_fixture();
        let moved = CardMoved {
            id: CardId::from_string("card-three"),
            position: 1,
            list_id: ListId::from_string("list-a"),
        };

        assert!(apply_move_result(&mut board, &moved));

        let a = board.find_list("list-a").unwrap();
        let titles: Vec<_> = a.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["three", "one", "two"]);
        assert_eq!(
            a.cards.iter().map(|c| c.position).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[test]
    fn test_apply_move_result_already_settled_is_noop() {
        let mut board = board_fixture();
        let moved = CardMoved {
            id: CardId::from_string("card-two"),
            position: 2,
            list_id: ListId::from_string("list-a"),
        };

        assert!(!apply_move_result(&mut board, &moved));
        assert_eq!(board, board_fixture());
    }

    #[test]
    fn test_apply_move_result_unknown_card_is_noop() {
        let mut board = board_fixture();
        let moved = CardMoved {
            id: CardId::from_string("ghost"),
            position: 1,
            list_id: ListId::from_string("list-b"),
        };

        assert!(!apply_move_result(&mut board, &moved));
    }

    #[test]
    fn test_apply_move_result_unknown_list_is_noop() {
        let mut board = board_fixture();
        let before = board.clone();
        let moved = CardMoved {
            id: CardId::from_string("card-one"),
            position: 1,
            list_id: ListId::from_string("ghost"),
        };

        assert!(!apply_move_result(&mut board, &moved));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_result_clamps_position() {
        let mut board = board_fixture();
        let moved = CardMoved {
            id: CardId::from_string("card-one"),
            position: 99,
            list_id: ListId::from_string("list-b"),
        };

        assert!(apply_move_result(&mut board, &moved));

        let b = board.find_list("list-b").unwrap();
        assert_eq!(b.cards.len(), 1);
        assert_eq!(b.cards[0].position, 1);
    }
}
