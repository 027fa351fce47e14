use async_trait::async_trait;
use rquest::{Client, RequestBuilder};
use rquest_util::Emulation;
use http::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use crate::clients::transport::{RawResponse, Transport};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use tracing::{error, debug};

pub struct HttpClient {
    client: Client,
    endpoint: String,
    headers: HeaderMap,  // sent with GraphQL queries only
}

impl HttpClient {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/graphql"));

        let bearer = HeaderValue::from_str(&format!("Bearer {}", api.api_key))
            .map_err(|_| Error::InvalidSettings("api.api_key is not a valid header value".to_string()))?;
        headers.insert(AUTHORIZATION, bearer);

        // Add configured headers
        for (key, value) in api.headers.iter() {
            if let (Ok(header_name), Ok(header_value)) = (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value)
            ) {
                headers.insert(header_name, header_value);
                debug!(
                    header_key = key,
                    "Adding header"
                );
            } else {
                error!(
                    header_key = key,
                    header_value = value,
                    "Invalid header value"
                );
            }
        }

        let client = Client::builder()
            .emulation(Emulation::Chrome133)
            .build()?;

        Ok(Self {
            client,
            endpoint: api.endpoint.clone(),
            headers,
        })
    }

    fn post(&self) -> RequestBuilder {
        let mut request = self.client.post(&self.endpoint);

        for (key, value) in self.headers.iter() {
            request = request.header(key, value);
        }

        request
    }

    async fn send(request: RequestBuilder) -> Result<RawResponse> {
        let response = request.send().await?;
        let status = response.status();

        debug!(
            status = status.as_u16(),
            url = %response.url(),
            "Response received"
        );

        let body = response.bytes().await?;
        Ok(RawResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn post_query(&self, query: &str) -> Result<RawResponse> {
        debug!(
            endpoint = %self.endpoint,
            query_len = query.len(),
            "Sending search query"
        );
        Self::send(self.post().body(query.to_string())).await
    }

    async fn get(&self, url: &str) -> Result<RawResponse> {
        debug!(url = url, "Sending GET request");
        Self::send(self.client.get(url)).await
    }
}
