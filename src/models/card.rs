use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    client::Params,
    models::{action::Action, Pos},
    result::Result,
    Client,
};

/// A single card belonging to exactly one list on a Trello board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// The card id.
    id: String,

    /// The display name of the card.
    name: String,

    /// The card description, empty if none was set.
    #[serde(default)]
    desc: String,

    /// True if the card is archived.
    #[serde(default)]
    closed: bool,

    /// Id of the board the card belongs to.
    id_board: String,

    /// Id of the list the card currently sits in.
    id_list: String,

    /// Position of the card within its list.
    pos: f64,
}

impl Card {
    /// Fetches a single card from the client's board by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the reply cannot
    /// be decoded. An HTTP error from the API yields `Ok(None)`.
    pub async fn get(client: &Client, card_id: &str) -> Result<Option<Card>> {
        let path = format!("/boards/{}/cards/{card_id}", client.board_id());
        client.send(Method::GET, &path, Params::new()).await
    }

    /// Creates a new card under the given list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the reply cannot
    /// be decoded. An HTTP error from the API yields `Ok(None)`.
    pub async fn create(
        client: &Client,
        list_id: &str,
        name: &str,
        pos: Pos,
    ) -> Result<Option<Card>> {
        let params = Params::from([
            ("name", name.to_string()),
            ("idList", list_id.to_string()),
            ("pos", pos.param()),
        ]);
        client.send(Method::POST, "/cards/", params).await
    }

    /// Fetches every card in the given list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the reply cannot
    /// be decoded. An HTTP error from the API yields `Ok(None)`.
    pub async fn in_list(client: &Client, list_id: &str) -> Result<Option<Vec<Card>>> {
        let path = format!("/lists/{list_id}/cards");
        client.send(Method::GET, &path, Params::new()).await
    }

    /// Moves this card to another list, optionally at a given position.
    ///
    /// Returns the updated card as reported by the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the reply cannot
    /// be decoded. An HTTP error from the API yields `Ok(None)`.
    pub async fn move_to(
        &self,
        client: &Client,
        list_id: &str,
        pos: Option<Pos>,
    ) -> Result<Option<Card>> {
        let mut params = Params::from([("idList", list_id.to_string())]);
        if let Some(pos) = pos {
            params.insert("pos", pos.param());
        }
        let path = format!("/cards/{}", self.id);
        client.send(Method::PUT, &path, params).await
    }

    /// Moves every card from one list to another, keeping each card's
    /// position value.
    ///
    /// Returns the cards as they were in the source list before the move.
    ///
    /// # Errors
    ///
    /// Returns an error if a request cannot be sent or a reply cannot be
    /// decoded. An HTTP error while reading the source list yields
    /// `Ok(None)`; a failed individual move is logged by the dispatcher
    /// and does not stop the remaining moves.
    pub async fn move_all(
        client: &Client,
        from_list_id: &str,
        to_list_id: &str,
    ) -> Result<Option<Vec<Card>>> {
        let Some(cards) = Self::in_list(client, from_list_id).await? else {
            return Ok(None);
        };
        for card in &cards {
            card.move_to(client, to_list_id, Some(Pos::At(card.pos)))
                .await?;
        }
        Ok(Some(cards))
    }

    /// Fetches the actions (events) recorded on this card.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the reply cannot
    /// be decoded. An HTTP error from the API yields `Ok(None)`.
    pub async fn actions(&self, client: &Client) -> Result<Option<Vec<Action>>> {
        let path = format!("/cards/{}/actions", self.id);
        client.send(Method::GET, &path, Params::new()).await
    }

    /// Fetches the comment actions recorded on this card.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the reply cannot
    /// be decoded. An HTTP error from the API yields `Ok(None)`.
    pub async fn comments(&self, client: &Client) -> Result<Option<Vec<Action>>> {
        let Some(actions) = self.actions(client).await? else {
            return Ok(None);
        };
        Ok(Some(
            actions.into_iter().filter(Action::is_comment).collect(),
        ))
    }

    /// Adds a comment to this card.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the reply cannot
    /// be decoded. An HTTP error from the API yields `Ok(None)`.
    pub async fn add_comment(&self, client: &Client, text: &str) -> Result<Option<Action>> {
        let params = Params::from([("text", text.to_string())]);
        let path = format!("/cards/{}/actions/comments", self.id);
        client.send(Method::POST, &path, params).await
    }

    /// Returns the card id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name of the card.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the card description, empty if none was set.
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Returns true if the card is archived.
    pub fn closed(&self) -> bool {
        self.closed
    }

    /// Returns the id of the board the card belongs to.
    pub fn id_board(&self) -> &str {
        &self.id_board
    }

    /// Returns the id of the list the card currently sits in.
    pub fn id_list(&self) -> &str {
        &self.id_list
    }

    /// Returns the position of the card within its list.
    pub fn pos(&self) -> f64 {
        self.pos
    }
}
