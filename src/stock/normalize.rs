use super::{Category, NormalizedStockData, RawStockData, StockItem};
use crate::util::{clean_name, dedup_key};
use indexmap::IndexMap;

/// Cleans item names and merges duplicates within each category.
///
/// Items whose cleaned names match case-insensitively are summed; the display
/// name comes from the first such item. Categories never mix.
pub fn normalize(raw: &RawStockData) -> NormalizedStockData {
    let mut out = NormalizedStockData::default();
    for category in Category::ALL {
        *out.items_mut(category) = merge_items(raw.items(category));
    }
    out
}

fn merge_items(items: &[StockItem]) -> Vec<StockItem> {
    let mut merged: IndexMap<String, StockItem> = IndexMap::with_capacity(items.len());
    for item in items {
        let name = clean_name(&item.name);
        merged
            .entry(dedup_key(&name))
            .and_modify(|existing| existing.quantity = existing.quantity.saturating_add(item.quantity))
            .or_insert_with(|| StockItem::new(name, item.quantity));
    }
    merged.into_values().collect()
}
