//! Board-level types: Board and List.

use super::card::Card;
use super::ids::{BoardId, ListId};
use crate::ordering::Positioned;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A list (column) of cards. `position` orders lists left-to-right on the
/// board, `cards` are ordered top-to-bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub title: String,
    pub position: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    /// Create a new empty list with the given title and position
    pub fn new(title: impl Into<String>, position: u32) -> Self {
        Self {
            id: ListId::new(),
            title: title.into(),
            position,
            created_at: Utc::now(),
            cards: Vec::new(),
        }
    }

    /// Find a card in this list by id
    pub fn find_card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id.as_str() == card_id)
    }

    /// Index of a card within this list's card sequence
    pub fn card_index(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id.as_str() == card_id)
    }
}

impl Positioned for List {
    fn position(&self) -> u32 {
        self.position
    }

    fn set_position(&mut self, position: u32) {
        self.position = position;
    }
}

/// A board: an ordered collection of lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Board {
    /// Create a new empty board with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            name: name.into(),
            created_at: Utc::now(),
            lists: Vec::new(),
        }
    }

    /// Find a list by id
    pub fn find_list(&self, list_id: &str) -> Option<&List> {
        self.lists.iter().find(|l| l.id.as_str() == list_id)
    }

    /// Find the list that owns the given card. A card belongs to exactly one
    /// list; should a defective update ever leave it in several, the first
    /// match wins (not guaranteed beyond that).
    pub fn find_list_containing_card(&self, card_id: &str) -> Option<&List> {
        self.lists.iter().find(|l| l.find_card(card_id).is_some())
    }

    /// Find a card anywhere on the board
    pub fn find_card(&self, card_id: &str) -> Option<&Card> {
        self.lists.iter().find_map(|l| l.find_card(card_id))
    }
}
