use std::collections::HashMap;

use crate::result::Result;
use reqwest::{header::USER_AGENT, Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;

/// Root of the Trello REST API.
pub const BASE_URL: &str = "https://api.trello.com/1";

/// Flat parameter mapping attached to a single request.
///
/// Keys are parameter names; later inserts overwrite earlier ones, which is
/// how the client's credentials take precedence over caller-supplied
/// `key`/`token` entries.
pub type Params = HashMap<&'static str, String>;

/// The main entry point to the Trello API.
///
/// Holds the HTTP client and the immutable credential triple (API key,
/// OAuth token, board id) that is attached to every outgoing request.
#[derive(Debug, Clone)]
pub struct Client {
    http: ReqwestClient,
    api_key: String,
    oauth_token: String,
    board_id: String,
    base_url: String,
}

impl Client {
    /// Constructs a `Client` for a single board against the public API.
    pub fn new(api_key: &str, oauth_token: &str, board_id: &str) -> Client {
        Self::with_base_url(api_key, oauth_token, board_id, BASE_URL)
    }

    /// Constructs a `Client` against an alternate API root.
    ///
    /// Useful behind a proxy, or for pointing the client at a local mock
    /// server in tests. `base_url` should not end with a slash.
    pub fn with_base_url(
        api_key: &str,
        oauth_token: &str,
        board_id: &str,
        base_url: &str,
    ) -> Client {
        Client {
            http: ReqwestClient::new(),
            api_key: api_key.to_string(),
            oauth_token: oauth_token.to_string(),
            board_id: board_id.to_string(),
            base_url: base_url.to_string(),
        }
    }

    /// Returns the id of the board this client operates on.
    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    /// Dispatches one request against the API and decodes the JSON reply.
    ///
    /// The credentials are merged into `params` last, overwriting any
    /// caller-supplied keys of the same name. For `GET` the full parameter
    /// set travels in the query string; for every other verb it travels as
    /// a form-url-encoded body and the URL stays base + path.
    ///
    /// An HTTP error status is logged (status, reason, body) and collapsed
    /// to `Ok(None)`; only transport and decode failures surface as `Err`.
    pub(crate) async fn send<T>(
        &self,
        method: Method,
        path: &str,
        params: Params,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let mut params = params;
        params.insert("key", self.api_key.clone());
        params.insert("token", self.oauth_token.clone());

        let url = format!("{}{}", self.base_url, path);
        let request = if method == Method::GET {
            self.http.get(&url).query(&params)
        } else {
            self.http.request(method, &url).form(&params)
        };

        log::info!("request for {url} dispatched");
        let response = request.header(USER_AGENT, "TrellorClient/1.0").send().await?;

        let status = response.status();
        log::debug!("response status: {status}");

        if status.is_success() {
            Ok(Some(response.json::<T>().await?))
        } else {
            let body = response.text().await.unwrap_or_default();
            log::error!("api error: {status} {body}");
            Ok(None)
        }
    }
}
