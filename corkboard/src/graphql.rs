//! GraphQL gateway implementation.
//!
//! Talks to the board server's GraphQL endpoint over a plain HTTP POST
//! envelope (`{"query": …, "variables": …}`). The documents match the
//! server schema: a `Board` query materializing lists and cards, and a
//! `MoveCard` mutation returning the card's settled location.

use crate::error::{BoardError, Result};
use crate::sync::{BoardGateway, CardMoved, MoveCard};
use crate::types::{Board, BoardId};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use url::Url;

const BOARD_QUERY: &str = "\
query Board($id: ID!) {
    board(id: $id) {
        id
        name
        createdAt
        lists {
            id
            title
            position
            createdAt
            cards {
                id
                title
                description
                position
                createdAt
                listId
            }
        }
    }
}";

const MOVE_CARD_MUTATION: &str = "\
mutation MoveCard($cardId: ID!, $toListId: ID!, $toPosition: Int!) {
    moveCard(cardId: $cardId, toListId: $toListId, toPosition: $toPosition) {
        id
        position
        listId
    }
}";

/// Gateway over a GraphQL HTTP endpoint
#[derive(Debug, Clone)]
pub struct GraphqlGateway {
    http: reqwest::Client,
    endpoint: Url,
}

impl GraphqlGateway {
    /// Create a gateway for the given endpoint URL
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: Url::parse(endpoint.as_ref())?,
        })
    }

    /// The endpoint this gateway targets
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        let response: GraphqlResponse<T> = self
            .http
            .post(self.endpoint.clone())
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.errors.into_iter().next() {
            return Err(BoardError::graphql(error.message));
        }
        response
            .data
            .ok_or_else(|| BoardError::graphql("response carried no data"))
    }
}

#[async_trait]
impl BoardGateway for GraphqlGateway {
    async fn board(&self, id: &BoardId) -> Result<Option<Board>> {
        let data: BoardData = self
            .execute(BOARD_QUERY, json!({ "id": id.as_str() }))
            .await?;
        Ok(data.board)
    }

    async fn move_card(&self, request: &MoveCard) -> Result<CardMoved> {
        let data: MoveCardData = self
            .execute(
                MOVE_CARD_MUTATION,
                json!({
                    "cardId": request.card_id.as_str(),
                    "toListId": request.to_list_id.as_str(),
                    "toPosition": request.to_position,
                }),
            )
            .await?;
        Ok(data.move_card)
    }
}

/// Standard GraphQL response envelope
#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct BoardData {
    board: Option<Board>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoveCardData {
    move_card: CardMoved,
}
