use thiserror::Error;

/// Failures that can escape the request dispatcher.
///
/// HTTP error statuses from the API itself never show up here; those are
/// logged and collapsed to an absent result at the dispatcher boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport or JSON decoding failure from the underlying HTTP client.
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),
}
