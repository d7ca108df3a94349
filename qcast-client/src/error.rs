use thiserror::Error;

/// Errors surfaced by the REST client.
///
/// Everything here is asynchronous-failure territory: the hierarchy core
/// has already made its decision by the time one of these can occur, and
/// no local state needs rolling back.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid base url `{0}`")]
    InvalidBaseUrl(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
