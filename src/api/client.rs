//! Catalog API client implementation.
//!
//! This module provides the client for the artwork catalog's listing endpoint.
//! It handles request building, response processing, error mapping, and
//! retry logic for transient failures.

use std::time::Duration;

use reqwest::{header, Client, Response, StatusCode};
use tracing::{debug, instrument, warn};

use super::error::{ApiError, Result};
use super::types::{ArtworkListResponse, ArtworkPage};
use crate::config::Settings;

/// Base delay between retries in milliseconds.
const RETRY_DELAY_MS: u64 = 500;

/// The artwork catalog client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// The HTTP client.
    client: Client,
    /// The catalog base URL, without a trailing slash.
    base_url: String,
    /// Total attempts per request, including the first.
    max_attempts: u32,
}

impl CatalogClient {
    /// Create a client from application settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or the HTTP client
    /// cannot be built.
    pub fn new(settings: &Settings) -> Result<Self> {
        let base_url = normalize_base_url(&settings.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(concat!("artview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            base_url,
            max_attempts: settings.max_retries.saturating_add(1),
        })
    }

    /// Fetch one page of artworks.
    ///
    /// # Arguments
    ///
    /// * `page` - The 0-based page index as shown in the UI
    /// * `limit` - The page size
    ///
    /// # Returns
    ///
    /// The normalized rows in catalog order and the total record count.
    #[instrument(skip(self))]
    pub async fn fetch_artworks(&self, page: usize, limit: usize) -> Result<ArtworkPage> {
        let url = self.artworks_url(page, limit);
        let response: ArtworkListResponse = self.get(&url).await?;
        let page = ArtworkPage::from(response);
        debug!("Fetched {} artworks (total: {})", page.rows.len(), page.total);
        Ok(page)
    }

    /// Build the listing URL for a 0-based page index.
    ///
    /// The catalog numbers pages from 1.
    pub fn artworks_url(&self, page: usize, limit: usize) -> String {
        format!("{}/artworks?page={}&limit={}", self.base_url, page + 1, limit)
    }

    /// Perform a GET request, retrying transient failures with backoff.
    #[instrument(skip(self), fields(url = %url))]
    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!("Request attempt {}/{}", attempts, self.max_attempts);

            match self.execute_get::<T>(url).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_transient() && attempts < self.max_attempts => {
                    let delay = calculate_retry_delay(attempts);
                    warn!(
                        "Request failed (attempt {}), retrying in {}ms: {}",
                        attempts, delay, e
                    );
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Execute a single GET request.
    async fn execute_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        handle_response(response).await
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Check the status and parse the JSON body.
async fn handle_response<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let url = response.url().to_string();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    } else {
        let error_body = response.text().await.unwrap_or_default();
        debug!("Error response body: {}", error_body);
        Err(error_from_response(status, &url, &error_body))
    }
}

/// Create an error from an HTTP response, preferring the catalog's own message.
fn error_from_response(status: StatusCode, url: &str, body: &str) -> ApiError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("detail")
                .or_else(|| json.get("error"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        });

    ApiError::from_status(status, detail.as_deref().unwrap_or(url))
}

/// Exponential backoff: 500ms, 1s, 2s, ...
fn calculate_retry_delay(attempt: u32) -> u64 {
    RETRY_DELAY_MS.saturating_mul(2u64.saturating_pow(attempt.saturating_sub(1)))
}

/// Trim trailing slashes and require an http(s) scheme.
fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');

    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(ApiError::InvalidUrl(url.to_string()));
    }

    if !url.starts_with("https://") && !url.contains("localhost") {
        warn!("URL does not use HTTPS: {}", url);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const PAGE_BODY: &str = r#"{
        "pagination": {"total": 2, "limit": 12, "current_page": 1, "total_pages": 1},
        "data": [{"id": 16568, "title": "Water Lilies"}, {"id": 27992}]
    }"#;

    /// Serve one canned response per connection, in order, repeating the
    /// last one. Returns the base URL and the number of connections served.
    async fn serve(responses: Vec<(u16, &'static str)>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let n = counter.fetch_add(1, Ordering::SeqCst);
                let (status, body) = responses[n.min(responses.len() - 1)];

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(read) => request.extend_from_slice(&buf[..read]),
                    }
                }

                let reply = format!(
                    "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(reply.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (format!("http://{}", addr), hits)
    }

    fn local_client(base_url: String, max_retries: u32) -> CatalogClient {
        let settings = Settings {
            base_url,
            max_retries,
            request_timeout_secs: 5,
            ..Settings::default()
        };
        CatalogClient::new(&settings).unwrap()
    }

    fn client_for(base_url: &str) -> CatalogClient {
        let settings = Settings {
            base_url: base_url.to_string(),
            ..Settings::default()
        };
        CatalogClient::new(&settings).unwrap()
    }

    #[test]
    fn test_normalize_base_url_removes_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.artic.edu/api/v1/").unwrap(),
            "https://api.artic.edu/api/v1"
        );
    }

    #[test]
    fn test_normalize_base_url_handles_multiple_slashes() {
        assert_eq!(
            normalize_base_url("https://api.artic.edu/api/v1///").unwrap(),
            "https://api.artic.edu/api/v1"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_missing_scheme() {
        let result = normalize_base_url("api.artic.edu/api/v1");
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_artworks_url_is_one_based() {
        let client = client_for("https://api.artic.edu/api/v1/");
        assert_eq!(
            client.artworks_url(0, 12),
            "https://api.artic.edu/api/v1/artworks?page=1&limit=12"
        );
        assert_eq!(
            client.artworks_url(4, 25),
            "https://api.artic.edu/api/v1/artworks?page=5&limit=25"
        );
    }

    #[test]
    fn test_retries_are_in_addition_to_first_attempt() {
        let client = client_for("https://api.artic.edu/api/v1");
        assert_eq!(client.max_attempts, Settings::default().max_retries + 1);
    }

    #[test]
    fn test_zero_retries_makes_one_attempt() {
        let settings = Settings {
            max_retries: 0,
            ..Settings::default()
        };
        let client = CatalogClient::new(&settings).unwrap();
        assert_eq!(client.max_attempts, 1);
    }

    #[test]
    fn test_error_from_response_uses_detail() {
        let err = error_from_response(
            StatusCode::NOT_FOUND,
            "https://example.com",
            r#"{"status":404,"error":"Not found","detail":"Page 9999 does not exist"}"#,
        );
        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "Page 9999 does not exist"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_error_from_response_falls_back_to_url() {
        let err = error_from_response(StatusCode::BAD_GATEWAY, "https://example.com", "");
        assert!(err.to_string().contains("https://example.com"));
    }

    #[test]
    fn test_retry_delay_exponential() {
        assert_eq!(calculate_retry_delay(1), 500);
        assert_eq!(calculate_retry_delay(2), 1000);
        assert_eq!(calculate_retry_delay(3), 2000);
        assert_eq!(calculate_retry_delay(100), u64::MAX);
    }

    #[tokio::test]
    async fn test_fetch_reports_network_error() {
        // Nothing listens on port 9; the connection is refused immediately.
        let settings = Settings {
            base_url: "http://127.0.0.1:9".to_string(),
            max_retries: 0,
            request_timeout_secs: 2,
            ..Settings::default()
        };
        let client = CatalogClient::new(&settings).unwrap();
        let result = client.fetch_artworks(0, 12).await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[tokio::test]
    async fn test_transient_error_is_retried_until_success() {
        let (base_url, hits) = serve(vec![(503, r#"{"detail":"busy"}"#), (200, PAGE_BODY)]).await;
        let client = local_client(base_url, 2);

        let page = client.fetch_artworks(0, 12).await.unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(page.total, 2);
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[0].id, 16568);
        assert_eq!(page.rows[0].title, "Water Lilies");
        assert_eq!(page.rows[1].title, "Unknown Title");
    }

    #[tokio::test]
    async fn test_server_error_after_retries_run_out() {
        let (base_url, hits) = serve(vec![(503, r#"{"detail":"busy"}"#)]).await;
        let client = local_client(base_url, 1);

        let result = client.fetch_artworks(0, 12).await;

        assert!(matches!(result, Err(ApiError::ServerError(_))));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let (base_url, hits) =
            serve(vec![(403, r#"{"detail":"Invalid number of results"}"#)]).await;
        let client = local_client(base_url, 2);

        let result = client.fetch_artworks(999, 100).await;

        match result {
            Err(ApiError::ClientError { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "Invalid number of results");
            }
            other => panic!("Expected ClientError, got {:?}", other),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
