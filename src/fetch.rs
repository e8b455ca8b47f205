//! Article page fetching.
//!
//! - [`FetchPage`]: async trait the pipeline depends on
//! - [`HttpFetcher`]: `reqwest`-backed implementation with a fixed
//!   User-Agent, automatic redirects and a whole-request timeout
//!
//! The response body is returned as text whatever the status code. A 404
//! page is scanned for meta tags like any other page.

use crate::config::RunConfig;
use crate::utils::truncate_for_log;
use reqwest::Client;
use reqwest::redirect::Policy;
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Maximum redirect hops followed per request.
const MAX_REDIRECTS: usize = 10;

/// Trait for retrieving the HTML of a single page.
///
/// Implementors perform exactly one attempt; retry policy, if any, belongs
/// to the caller.
pub trait FetchPage {
    /// Fetch `url` and return the response body as text.
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// HTTP fetcher built on a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a fetcher with the given User-Agent and per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend or client cannot be initialized.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .timeout(timeout)
            .build()?;
        Ok(Self { client, timeout })
    }

    /// Build a fetcher from a [`RunConfig`].
    pub fn from_config(config: &RunConfig) -> Result<Self, Box<dyn Error>> {
        Self::new(&config.user_agent, config.timeout)
    }
}

impl FetchPage for HttpFetcher {
    #[instrument(level = "debug", skip(self), fields(timeout_ms = self.timeout.as_millis() as u64))]
    async fn fetch(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let final_url = response.url().to_string();
        let body = response.text().await?;
        let dt = t0.elapsed();

        if !status.is_success() {
            warn!(%url, %status, "Non-success status; scanning body anyway");
        }
        debug!(
            %url,
            %final_url,
            %status,
            bytes = body.len(),
            elapsed_ms = dt.as_millis() as u64,
            body_preview = %truncate_for_log(&body, 120),
            "Fetched page"
        );
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const UA: &str = "Mozilla/5.0 (compatible; OGImageFetcher/1.0)";

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article"))
            .and(header("user-agent", UA))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hello</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(UA, Duration::from_secs(5)).unwrap();
        let body = fetcher
            .fetch(&format!("{}/article", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html>hello</html>");
    }

    #[tokio::test]
    async fn test_fetch_follows_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("Location", format!("{}/new", server.uri()).as_str()),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved here"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(UA, Duration::from_secs(5)).unwrap();
        let body = fetcher.fetch(&format!("{}/old", server.uri())).await.unwrap();
        assert_eq!(body, "moved here");
    }

    #[tokio::test]
    async fn test_fetch_returns_body_for_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<h1>Not Found</h1>"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(UA, Duration::from_secs(5)).unwrap();
        let body = fetcher.fetch(&format!("{}/gone", server.uri())).await.unwrap();
        assert_eq!(body, "<h1>Not Found</h1>");
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("too late")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(UA, Duration::from_millis(200)).unwrap();
        let started = Instant::now();
        let result = fetcher.fetch(&format!("{}/slow", server.uri())).await;

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_url() {
        let fetcher = HttpFetcher::new(UA, Duration::from_secs(1)).unwrap();
        assert!(fetcher.fetch("not a url").await.is_err());
    }
}
