use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://growagarden.gg/api/grow-a-garden/stock";

/// Settings for a single fetch and its retry loop.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub attempts: u32,
    pub retry_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(15),
            attempts: 3,
            retry_delay: Duration::from_secs(2),
        }
    }
}

impl FetchConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Attempt count, never less than one.
    pub fn attempt_limit(&self) -> u32 {
        self.attempts.max(1)
    }
}

/// Top-level configuration for the fetch + normalize service.
#[derive(Debug, Clone)]
pub struct StockConfig {
    pub fetch: FetchConfig,
    /// Outer rounds retried while the normalized result is empty.
    pub rounds: u32,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            rounds: 3,
        }
    }
}

impl StockConfig {
    pub fn round_limit(&self) -> u32 {
        self.rounds.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_limits() {
        let config = StockConfig::default();
        assert_eq!(config.fetch.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.fetch.timeout, Duration::from_secs(15));
        assert_eq!(config.fetch.attempt_limit(), 3);
        assert_eq!(config.fetch.retry_delay, Duration::from_secs(2));
        assert_eq!(config.round_limit(), 3);
    }

    #[test]
    fn zero_counts_clamp_to_one() {
        let config = StockConfig {
            fetch: FetchConfig {
                attempts: 0,
                ..FetchConfig::default()
            },
            rounds: 0,
        };
        assert_eq!(config.fetch.attempt_limit(), 1);
        assert_eq!(config.round_limit(), 1);
    }
}
