use crate::stock::{RawStockData, StockItem};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Envelope returned by the stock endpoint.
///
/// Every field is optional: a missing or wrong-typed field falls back to its
/// default instead of failing the whole response.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct StockResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub data: Vec<Value>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct StockEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub seeds: IndexMap<String, Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub gear: IndexMap<String, Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub eggs: Vec<Value>,
}

#[derive(Debug, Default, Deserialize, Clone)]
pub struct EggEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Value,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl StockResponse {
    /// The first data entry, if present and shaped like an object.
    pub fn first_entry(&self) -> Option<StockEntry> {
        let first = self.data.first()?;
        StockEntry::deserialize(first).ok()
    }

    /// Extracts positive-quantity items per category.
    pub fn into_raw(self) -> RawStockData {
        if !self.success {
            return RawStockData::default();
        }
        self.first_entry()
            .map(StockEntry::into_raw)
            .unwrap_or_default()
    }
}

impl StockEntry {
    pub fn into_raw(self) -> RawStockData {
        RawStockData {
            seeds: items_from_map(self.seeds),
            gear: items_from_map(self.gear),
            eggs: items_from_list(self.eggs),
        }
    }
}

fn items_from_map(map: IndexMap<String, Value>) -> Vec<StockItem> {
    map.into_iter()
        .filter_map(|(name, qty)| coerce_quantity(&qty).map(|q| StockItem::new(name, q)))
        .collect()
}

fn items_from_list(list: Vec<Value>) -> Vec<StockItem> {
    list.iter()
        .filter_map(|v| EggEntry::deserialize(v).ok())
        .filter_map(|egg| {
            let quantity = coerce_quantity(&egg.quantity)?;
            egg.name.map(|name| StockItem::new(name, quantity))
        })
        .collect()
}

/// Coerces a JSON quantity to a positive integer.
///
/// Numbers are truncated toward zero; strings are read up to the first
/// non-digit. Returns `None` for anything that does not come out above zero.
pub fn coerce_quantity(value: &Value) -> Option<u64> {
    let qty = match value {
        Value::Number(n) => match n.as_u64() {
            Some(q) => q,
            None => {
                let f = n.as_f64()?;
                if f.is_finite() && f >= 1.0 {
                    f.trunc() as u64
                } else {
                    0
                }
            }
        },
        Value::String(s) => leading_integer(s)?,
        _ => return None,
    };
    (qty > 0).then_some(qty)
}

fn leading_integer(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let unsigned = s.strip_prefix('+').unwrap_or(s);
    if unsigned.starts_with('-') {
        return None;
    }
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}
