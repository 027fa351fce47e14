use async_trait::async_trait;
use http::StatusCode;
use crate::error::Result;

/// Status and body of one completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The two outbound calls a harvest run makes.
///
/// A non-success status is not an error at this layer; callers decide whether
/// it is fatal (data pages) or recoverable (photos). `Err` means the exchange
/// itself failed.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs a GraphQL query to the search endpoint with the API credential.
    async fn post_query(&self, query: &str) -> Result<RawResponse>;

    /// Plain GET, used for photo downloads.
    async fn get(&self, url: &str) -> Result<RawResponse>;
}
