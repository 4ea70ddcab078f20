//! Client core for a kanban board application
//!
//! This crate implements the board client's reordering engine: the local
//! board cache, the drag-session state machine, and the optimistic sync
//! path for the authoritative move-card operation. Rendering, routing,
//! CRUD resolvers, and persistence live elsewhere - the core consumes them
//! through the [`BoardGateway`] trait.
//!
//! ## Overview
//!
//! - **One cache = one board** - a copy-on-write snapshot of the last
//!   known server state, patched functionally during drags
//! - **Contiguous positions** - every list's cards carry positions
//!   `1..=len`, re-stamped after each splice
//! - **Optimism** - a drop reorders the cache synchronously and fabricates
//!   the move payload locally; the server's answer runs through the same
//!   merge path and supersedes it only if it differs
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use corkboard::{BoardCache, BoardGateway, BoardId, DragController, GraphqlGateway};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = GraphqlGateway::new("http://localhost:3000/api/graphql")?;
//!
//! let cache = Arc::new(BoardCache::new());
//! let board_id = BoardId::from_string("board-1");
//! if let Some(board) = gateway.board(&board_id).await? {
//!     cache.load(board);
//! }
//!
//! let controller = DragController::new(Arc::clone(&cache), gateway);
//! controller.drag_start("card-1");
//! controller.drag_end("card-1", "list-2").await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod drag;
pub mod error;
pub mod graphql;
pub mod ordering;
pub mod sync;
pub mod types;

// Re-export the async_trait attribute for gateway implementations
pub use async_trait::async_trait;

pub use cache::BoardCache;
pub use drag::{DragController, DragState};
pub use error::{BoardError, Result};
pub use graphql::GraphqlGateway;
pub use ordering::{normalize_positions, sort_by_position, Positioned};
pub use sync::{apply_move_result, BoardGateway, CardMoved, MoveCard};
pub use types::{Board, BoardId, Card, CardId, List, ListId};
