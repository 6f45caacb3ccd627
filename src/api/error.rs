use thiserror::Error;

/// Errors surfaced by the shop API client.
///
/// `Network` covers every failure where no usable response arrived
/// (offline, DNS, timeout); `Decode` means the server answered but the
/// body was not the JSON shape we expected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
