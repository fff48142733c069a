use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{client::Params, models::card::Card, result::Result, Client};

/// A single list (column) of cards on a Trello board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// The list id.
    id: String,

    /// The display name of the list.
    name: String,

    /// True if the list is archived.
    #[serde(default)]
    closed: bool,

    /// Id of the board the list belongs to.
    id_board: String,

    /// Position of the list on its board.
    pos: f64,
}

impl List {
    /// Fetches every list on the client's board.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the reply cannot
    /// be decoded. An HTTP error from the API yields `Ok(None)`.
    pub async fn all(client: &Client) -> Result<Option<Vec<List>>> {
        let path = format!("/boards/{}/lists", client.board_id());
        client.send(Method::GET, &path, Params::new()).await
    }

    /// Fetches a single list by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the reply cannot
    /// be decoded. An HTTP error from the API yields `Ok(None)`.
    pub async fn get(client: &Client, list_id: &str) -> Result<Option<List>> {
        let path = format!("/lists/{list_id}");
        client.send(Method::GET, &path, Params::new()).await
    }

    /// Finds the first list on the board whose name matches `name` exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the reply cannot
    /// be decoded. `Ok(None)` means no list matched, or the board fetch
    /// itself came back as an API error.
    pub async fn find(client: &Client, name: &str) -> Result<Option<List>> {
        let Some(lists) = Self::all(client).await? else {
            return Ok(None);
        };
        Ok(lists.into_iter().find(|list| list.name == name))
    }

    /// Returns the list named `name`, creating it if it does not exist.
    ///
    /// A new list is positioned at `anchor.pos + 1`, where the anchor is
    /// the list identified by `anchor_list_id`. Trello's positioning
    /// mechanics place it close to the anchor, not always immediately
    /// after it.
    ///
    /// # Errors
    ///
    /// Returns an error if a request cannot be sent or a reply cannot be
    /// decoded. An HTTP error from the API on any step yields `Ok(None)`.
    pub async fn create(
        client: &Client,
        name: &str,
        anchor_list_id: &str,
    ) -> Result<Option<List>> {
        if let Some(existing) = Self::find(client, name).await? {
            return Ok(Some(existing));
        }

        let Some(anchor) = Self::get(client, anchor_list_id).await? else {
            return Ok(None);
        };

        let params = Params::from([
            ("name", name.to_string()),
            ("pos", (anchor.pos + 1.0).to_string()),
        ]);
        let path = format!("/boards/{}/lists", client.board_id());
        client.send(Method::POST, &path, params).await
    }

    /// Fetches the cards in this list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the reply cannot
    /// be decoded. An HTTP error from the API yields `Ok(None)`.
    pub async fn cards(&self, client: &Client) -> Result<Option<Vec<Card>>> {
        Card::in_list(client, &self.id).await
    }

    /// Returns the list id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name of the list.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the list is archived.
    pub fn closed(&self) -> bool {
        self.closed
    }

    /// Returns the id of the board the list belongs to.
    pub fn id_board(&self) -> &str {
        &self.id_board
    }

    /// Returns the position of the list on its board.
    pub fn pos(&self) -> f64 {
        self.pos
    }
}
