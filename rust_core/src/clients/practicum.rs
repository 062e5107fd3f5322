use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::ApiError;

/// Client for the Practicum homework-review API.
///
/// Issues `GET {endpoint}?from_date=<cursor>` with an OAuth token header and
/// returns the raw JSON payload. Shape validation happens in
/// [`crate::models::StatusReport::from_value`]; retries belong to the caller.
#[derive(Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint,
            token,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses updated since `from_date` (Unix timestamp).
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value, ApiError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                endpoint: self.endpoint.clone(),
                from_date,
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_token() {
        let client = PracticumClient::new(
            "https://example.org/api".to_string(),
            "secret-token".to_string(),
            Duration::from_secs(5),
        );
        let dump = format!("{:?}", client);
        assert!(dump.contains("example.org"));
        assert!(!dump.contains("secret-token"));
    }
}
