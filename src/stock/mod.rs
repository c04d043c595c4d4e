pub mod normalize;
pub mod service;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub name: String,
    pub quantity: u64,
}

impl StockItem {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Seeds,
    Gear,
    Eggs,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Seeds, Category::Gear, Category::Eggs];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Seeds => "seeds",
            Category::Gear => "gear",
            Category::Eggs => "eggs",
        }
    }
}

/// Items grouped by category.
///
/// Fetched data may repeat names within a category; after
/// [`normalize`](normalize::normalize) every cleaned name is unique per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockData {
    #[serde(default)]
    pub seeds: Vec<StockItem>,
    #[serde(default)]
    pub gear: Vec<StockItem>,
    #[serde(default)]
    pub eggs: Vec<StockItem>,
}

/// Stock as extracted from a single response, before deduplication.
pub type RawStockData = StockData;

/// Stock with names cleaned and duplicates summed.
pub type NormalizedStockData = StockData;

impl StockData {
    pub fn items(&self, category: Category) -> &[StockItem] {
        match category {
            Category::Seeds => &self.seeds,
            Category::Gear => &self.gear,
            Category::Eggs => &self.eggs,
        }
    }

    pub fn items_mut(&mut self, category: Category) -> &mut Vec<StockItem> {
        match category {
            Category::Seeds => &mut self.seeds,
            Category::Gear => &mut self.gear,
            Category::Eggs => &mut self.eggs,
        }
    }

    pub fn total(&self, category: Category) -> u64 {
        self.items(category)
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Totals in `[seeds, gear, eggs]` order.
    pub fn totals(&self) -> [u64; 3] {
        Category::ALL.map(|c| self.total(c))
    }

    /// True when every category totals zero.
    pub fn is_empty(&self) -> bool {
        self.totals().iter().all(|&t| t == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_are_per_category() {
        let data = StockData {
            seeds: vec![StockItem::new("Carrot", 3), StockItem::new("Tomato", 2)],
            gear: vec![StockItem::new("Trowel", 1)],
            eggs: vec![],
        };
        assert_eq!(data.totals(), [5, 1, 0]);
        assert!(!data.is_empty());
        assert!(StockData::default().is_empty());
    }

    #[test]
    fn serializes_with_all_three_categories() {
        let json = serde_json::to_value(StockData::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "seeds": [], "gear": [], "eggs": [] }));
    }
}
