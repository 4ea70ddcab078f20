//! Core types for the board client

mod board;
mod card;
mod ids;

// Re-export all types
pub use board::{Board, List};
pub use card::Card;
pub use ids::{BoardId, CardId, ListId};
