use super::normalize::normalize;
use super::{NormalizedStockData, RawStockData};
use crate::api::client::{ApiError, StockClient};
use crate::config::{FetchConfig, StockConfig};
use async_trait::async_trait;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error, info, warn};

/// Anything that can produce one round of raw stock.
#[async_trait]
pub trait StockSource: Send + Sync {
    async fn fetch_stock(&self) -> Option<RawStockData>;
}

#[async_trait]
impl StockSource for StockClient {
    async fn fetch_stock(&self) -> Option<RawStockData> {
        StockClient::fetch_stock(self).await
    }
}

/// Fetches and normalizes stock, retrying while the result is empty.
pub struct StockService<S> {
    source: S,
    rounds: u32,
}

impl StockService<StockClient> {
    pub fn from_config(config: StockConfig) -> Result<Self, ApiError> {
        let rounds = config.round_limit();
        let client = StockClient::new(config.fetch)?;
        Ok(Self::new(client, rounds))
    }
}

impl<S: StockSource> StockService<S> {
    pub fn new(source: S, rounds: u32) -> Self {
        Self {
            source,
            rounds: rounds.max(1),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Never fails: exhausted rounds and panics both yield empty stock.
    pub async fn get_all_stock_data(&self) -> NormalizedStockData {
        match AssertUnwindSafe(self.poll_until_stocked()).catch_unwind().await {
            Ok(Some(stock)) => stock,
            Ok(None) => {
                warn!(rounds = self.rounds, "no stock after all rounds; returning empty");
                NormalizedStockData::default()
            }
            Err(panic) => {
                error!(reason = panic_reason(&*panic), "stock polling panicked; returning empty");
                NormalizedStockData::default()
            }
        }
    }

    async fn poll_until_stocked(&self) -> Option<NormalizedStockData> {
        for round in 1..=self.rounds {
            let Some(raw) = self.source.fetch_stock().await else {
                debug!(round, "fetch returned nothing");
                continue;
            };

            let stock = normalize(&raw);
            let [seeds, gear, eggs] = stock.totals();
            if seeds == 0 && gear == 0 && eggs == 0 {
                debug!(round, "normalized stock is empty");
                continue;
            }

            info!(round, seeds, gear, eggs, "stock ready");
            return Some(stock);
        }
        None
    }
}

fn panic_reason(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

/// Fetches raw stock with the default endpoint and retry settings.
pub async fn fetch_stock() -> Option<RawStockData> {
    match StockClient::new(FetchConfig::default()) {
        Ok(client) => client.fetch_stock().await,
        Err(err) => {
            error!(%err, "could not build stock client");
            None
        }
    }
}

/// Fetches and normalizes stock with default settings; empty on failure.
pub async fn get_all_stock_data() -> NormalizedStockData {
    match StockService::from_config(StockConfig::default()) {
        Ok(service) => service.get_all_stock_data().await,
        Err(err) => {
            error!(%err, "could not build stock client");
            NormalizedStockData::default()
        }
    }
}
