//! Async transport that executes `MarsClient` requests with `reqwest`.
//!
//! # Design
//! `MarsApi` owns one `reqwest::Client` (and therefore one connection pool)
//! plus the stateless `MarsClient`. Both are read-only after construction,
//! so a single instance can serve any number of concurrent calls. Each call
//! is one GET with no retry; its outcome is delivered exactly once.

use tracing::{debug, warn};

use crate::client::MarsClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::MarsProperty;

#[derive(Debug, Clone)]
pub struct MarsApi {
    http: reqwest::Client,
    client: MarsClient,
}

impl MarsApi {
    /// Build the HTTP client from `config`. Fails only if the TLS backend
    /// cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self {
            http,
            client: MarsClient::new(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Fetch every listing from `/realestate`, in the order the server sent them.
    pub async fn get_properties(&self) -> Result<Vec<MarsProperty>, ApiError> {
        let request = self.client.build_get_properties();
        debug!(url = %request.url, "fetching properties");

        let response = self.execute(request).await?;
        if !response.is_success() {
            warn!(status = response.status, "properties request rejected");
        }

        let properties = self.client.parse_get_properties(response)?;
        debug!(count = properties.len(), "decoded properties");
        Ok(properties)
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.http.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
