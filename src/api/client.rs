use super::models::StockResponse;
use crate::config::FetchConfig;
use crate::stock::{Category, RawStockData};
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::{debug, info, warn};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const ACCEPT: &str = "application/json, text/plain, */*";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
const REFERER: &str = "https://growagarden.gg/stocks";
const ORIGIN: &str = "https://growagarden.gg";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::REFERER, HeaderValue::from_static(REFERER));
    headers.insert(header::ORIGIN, HeaderValue::from_static(ORIGIN));
    headers
}

/// HTTP client for the stock endpoint.
#[derive(Debug, Clone)]
pub struct StockClient {
    http: reqwest::Client,
    config: FetchConfig,
}

impl StockClient {
    pub fn new(config: FetchConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(browser_headers())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetches the stock, retrying transient failures.
    ///
    /// Returns `None` once every attempt has failed.
    pub async fn fetch_stock(&self) -> Option<RawStockData> {
        let attempts = self.config.attempt_limit();
        for attempt in 1..=attempts {
            debug!(attempt, attempts, endpoint = %self.config.endpoint, "fetching stock");
            match self.request().await {
                Ok(response) => return Some(extract(response)),
                Err(err) if attempt < attempts => {
                    warn!(
                        %err,
                        attempt,
                        "stock fetch failed; retrying after {:?}",
                        self.config.retry_delay
                    );
                    tokio::time::sleep(self.config.retry_delay).await;
                }
                Err(err) => {
                    warn!(%err, attempt, "stock fetch failed; giving up");
                }
            }
        }
        None
    }

    async fn request(&self) -> Result<StockResponse, ApiError> {
        let resp = self.http.get(&self.config.endpoint).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        let response: StockResponse = serde_json::from_str(&body)?;
        Ok(response)
    }
}

fn extract(response: StockResponse) -> RawStockData {
    debug!(
        success = response.success,
        entries = response.data.len(),
        "stock response received"
    );
    if !response.success {
        warn!(
            message = response.message.as_deref().unwrap_or("Unknown error"),
            "stock API reported failure"
        );
    }

    let raw = response.into_raw();
    for category in Category::ALL {
        debug!(
            category = category.as_str(),
            items = raw.items(category).len(),
            total = raw.total(category),
            "processed category"
        );
    }
    info!(
        seeds = raw.seeds.len(),
        gear = raw.gear.len(),
        eggs = raw.eggs.len(),
        "stock fetched"
    );
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_look_like_a_browser() {
        let headers = browser_headers();
        assert!(
            headers[header::USER_AGENT]
                .to_str()
                .unwrap()
                .starts_with("Mozilla/5.0")
        );
        assert_eq!(headers[header::ORIGIN], ORIGIN);
        assert_eq!(headers[header::REFERER], REFERER);
        assert_eq!(headers[header::ACCEPT], ACCEPT);
    }

    #[test]
    fn status_error_reads_like_the_rest() {
        assert_eq!(ApiError::Status(503).to_string(), "Unexpected HTTP status: 503");
    }
}
