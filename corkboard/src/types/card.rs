//! Card type: the draggable unit on the board.

use super::ids::{CardId, ListId};
use crate::ordering::Positioned;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card on the kanban board. Belongs to exactly one list; `position` is
/// 1-based and contiguous within the owning list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub position: u32,
    pub created_at: DateTime<Utc>,
    pub list_id: ListId,
}

impl Card {
    /// Create a new card with the given title and position
    pub fn new(title: impl Into<String>, position: u32, list_id: ListId) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            description: None,
            position,
            created_at: Utc::now(),
            list_id,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Positioned for Card {
    fn position(&self) -> u32 {
        self.position
    }

    fn set_position(&mut self, position: u32) {
        self.position = position;
    }
}
