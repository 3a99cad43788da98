//! GitHub HTTP client for REST API interactions

use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, SystemTime};

use crate::config::{api, Config};
use crate::error::{ProvisionError, Result};
use crate::github::rate_limit;

/// GitHub REST API client
pub struct GitHubClient {
    client: Client,
    token: String,
    base_url: String,
}

impl GitHubClient {
    /// Create a new client against `base_url` (no trailing slash)
    pub fn new(token: String, base_url: String) -> Self {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.token.clone(), config.api_url.clone())
    }

    /// Base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.token)
            .header("Accept", api::ACCEPT)
            .header("X-GitHub-Api-Version", api::VERSION)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PUT request builder with standard headers
    pub(crate) fn put(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.put(url))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, url: &str) -> RequestBuilder {
        self.with_headers(self.client.patch(url))
    }

    /// Send a request, handling GitHub rate limits
    ///
    /// `build` is called once per attempt so the request body can be replayed.
    /// A primary rate limit is retried at most [`api::MAX_RATE_LIMIT_RETRIES`]
    /// times after the server-specified delay. A secondary rate limit is logged
    /// and returned as [`ProvisionError::RateLimited`] without retrying. Any
    /// other 403/429 is returned as [`ProvisionError::Api`]; every remaining
    /// status is handed back to the caller.
    pub(crate) async fn send<F>(&self, build: F) -> Result<Response>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut retries = 0;

        loop {
            let request = build().build()?;
            let method = request.method().clone();
            let url = request.url().clone();
            debug!("{} {}", method, url);

            let response = self.client.execute(request).await?;
            let status = response.status();

            if status != StatusCode::FORBIDDEN && status != StatusCode::TOO_MANY_REQUESTS {
                return Ok(response);
            }

            if let Some(wait) =
                rate_limit::primary_wait(status, response.headers(), SystemTime::now())
            {
                warn!("Request quota exhausted for request {} {}", method, url);
                if retries < api::MAX_RATE_LIMIT_RETRIES {
                    retries += 1;
                    info!("Retrying after {} seconds", wait.as_secs());
                    tokio::time::sleep(wait).await;
                    continue;
                }
                return Err(ProvisionError::RateLimited {
                    status: status.as_u16(),
                    message: format!("Request quota exhausted for {} {}", method, url),
                });
            }

            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();

            if rate_limit::is_secondary(status, &headers, &body) {
                warn!("Secondary rate limit detected for request {} {}", method, url);
                return Err(ProvisionError::RateLimited {
                    status: status.as_u16(),
                    message: github_message(&body),
                });
            }

            return Err(ProvisionError::Api {
                status: status.as_u16(),
                message: github_message(&body),
            });
        }
    }

    /// Fetch a single resource by URL
    ///
    /// Returns `Ok(None)` when the server answers "not found"; every other
    /// non-success status is an error.
    pub(crate) async fn fetch_optional<T>(&self, url: &str, label: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} from: {}", label, url);

        let response = self.send(|| self.get(url)).await?;
        if response.status().is_success() {
            return Ok(Some(response.json().await?));
        }

        let err = Self::api_error(response, &format!("Failed to fetch {}", label)).await;
        if err.is_not_found() {
            debug!("{} not found", label);
            return Ok(None);
        }
        Err(err)
    }

    /// Turn a non-success response into an API error with context
    pub(crate) async fn api_error(response: Response, context: &str) -> ProvisionError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ProvisionError::Api {
            status,
            message: format!("{}: {}", context, github_message(&body)),
        }
    }
}

/// Extract the human-readable message from a GitHub error body
///
/// GitHub errors look like `{"message": "...", "errors": [{"message": "..."}]}`.
/// Falls back to the raw body when it is not JSON.
pub(crate) fn github_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        let trimmed = body.trim();
        return if trimmed.is_empty() {
            "no response body".to_string()
        } else {
            trimmed.to_string()
        };
    };

    let message = value["message"].as_str().unwrap_or("unknown error");
    let details: Vec<&str> = value["errors"]
        .as_array()
        .map(|errors| errors.iter().filter_map(|e| e["message"].as_str()).collect())
        .unwrap_or_default();

    if details.is_empty() {
        message.to_string()
    } else {
        format!("{} ({})", message, details.join("; "))
    }
}

#[cfg(test)]
impl GitHubClient {
    /// Create a test client pointing at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url.to_string())
    }
}
