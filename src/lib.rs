//! Fetches Grow a Garden stock from the public stock API and folds it into
//! per-category item lists with cleaned, deduplicated names.

pub mod api;
pub mod config;
pub mod stock;
pub mod util;

pub use api::client::{ApiError, StockClient};
pub use config::{FetchConfig, StockConfig};
pub use stock::normalize::normalize;
pub use stock::service::{StockService, StockSource, fetch_stock, get_all_stock_data};
pub use stock::{Category, NormalizedStockData, RawStockData, StockData, StockItem};
