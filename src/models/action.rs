use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{client::Params, models::macros::str_opt_ref, result::Result, Client};

const COMMENT_CARD: &str = "commentCard";

/// An event recorded against a card, such as a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// The action id.
    id: String,

    /// The action type, e.g. `commentCard`.
    #[serde(rename = "type")]
    kind: String,

    /// When the action happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<DateTime<Utc>>,

    /// Type-specific payload of the action.
    #[serde(default)]
    data: ActionData,
}

/// Type-specific payload carried by an [`Action`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    /// Comment text, present on `commentCard` actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    /// The card the action refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    card: Option<CardRef>,
}

/// Shorthand reference to a card inside an action payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRef {
    /// The referenced card's id.
    id: String,

    /// The referenced card's name, when the API includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Action {
    /// Returns true if this action is a card comment.
    pub fn is_comment(&self) -> bool {
        self.kind == COMMENT_CARD
    }

    /// Deletes this comment from its card.
    ///
    /// The card id and action id are taken from the action itself. A
    /// comment without a card reference is logged and left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent. An HTTP error from
    /// the API is logged by the dispatcher and otherwise ignored.
    pub async fn delete_comment(&self, client: &Client) -> Result<()> {
        let Some(card) = self.data.card.as_ref() else {
            log::warn!("comment {} carries no card reference, skipping", self.id);
            return Ok(());
        };

        let path = format!("/cards/{}/actions/{}/comments", card.id, self.id);
        client
            .send::<serde_json::Value>(Method::DELETE, &path, Params::new())
            .await?;
        Ok(())
    }

    /// Deletes every comment in `comments`, one API call per element.
    ///
    /// # Errors
    ///
    /// Returns an error if a request cannot be sent. Individual HTTP
    /// errors from the API do not stop the remaining deletes.
    pub async fn delete_comments(client: &Client, comments: &[Action]) -> Result<()> {
        for comment in comments {
            comment.delete_comment(client).await?;
        }
        Ok(())
    }

    /// Returns the action id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the action type, e.g. `commentCard`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns when the action happened, if the API reported it.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Returns the comment text (if this action is a comment).
    pub fn text(&self) -> Option<&str> {
        str_opt_ref!(self.data.text)
    }

    /// Returns the card this action refers to (if any).
    pub fn card(&self) -> Option<&CardRef> {
        self.data.card.as_ref()
    }
}

impl CardRef {
    /// Returns the referenced card's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the referenced card's name, when the API included it.
    pub fn name(&self) -> Option<&str> {
        str_opt_ref!(self.name)
    }
}
