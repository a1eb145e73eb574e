// Error types for GitHub API calls.
// A single API error kind for non-2xx responses; transport failures pass through.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Non-2xx response from the API, with the raw body text.
    #[error("GitHub API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("token is not a valid header value")]
    InvalidToken,
}

pub type Result<T> = std::result::Result<T, Error>;
