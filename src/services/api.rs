use std::sync::Arc;
use serde_json::Value;
use tracing::{error, debug};
use crate::clients::Transport;
use crate::error::{Result, Error};

/// Issues search queries and validates both transport and application status.
#[derive(Clone)]
pub struct ApiService {
    transport: Arc<dyn Transport>,
}

impl ApiService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sends one query and returns the parsed payload.
    ///
    /// Fails with [`Error::Transport`] on a non-success status and with
    /// [`Error::Api`] when a 200 response carries an `errors` list. Neither is
    /// retried.
    pub async fn fetch_page(&self, query: &str) -> Result<Value> {
        let response = self.transport.post_query(query).await?;

        debug!(
            status = response.status.as_u16(),
            body_len = response.body.len(),
            "API response received"
        );

        if !response.status.is_success() {
            let body = response.text();
            error!(
                status = response.status.as_u16(),
                body = %body,
                "Search request failed"
            );
            return Err(Error::Transport {
                status: response.status.as_u16(),
                body,
            });
        }

        let payload: Value = serde_json::from_slice(&response.body).map_err(|e| {
            error!(
                error = %e,
                body = %response.text(),
                "Invalid JSON response"
            );
            Error::from(e)
        })?;

        if let Some(errors) = payload.get("errors").filter(|errors| !errors.is_null()) {
            error!(errors = %errors, "Search response carried errors");
            return Err(Error::Api(errors.to_string()));
        }

        Ok(payload)
    }
}
